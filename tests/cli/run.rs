use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn run_forwards_verb_and_arguments_with_compat_flags() {
    let ctx = TestContext::new();
    let module = ctx.module("aws/vpc");

    ctx.cli()
        .args(["run", "plan", "aws/vpc", "-target", "module.db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running command: terragrunt run plan -target module.db"));

    let expected = format!(
        "terragrunt run plan -target module.db --working-dir {} --tf-forward-stdout --experiment cli-redesign",
        module.display()
    );
    assert!(ctx.tool_log().lines().any(|line| line == expected), "log: {}", ctx.tool_log());
}

#[test]
fn old_terragrunt_gets_no_compat_flags() {
    let ctx = TestContext::new();
    let module = ctx.module("aws/vpc");

    ctx.cli().args(["run", "output", "aws/vpc"]).env("FAKE_TG_VERSION", "0.72.9").assert().success();

    let expected = format!("terragrunt run output --working-dir {}", module.display());
    assert!(ctx.tool_log().lines().any(|line| line == expected), "log: {}", ctx.tool_log());
}

#[test]
fn run_propagates_tool_exit_code() {
    let ctx = TestContext::new();
    ctx.module("aws/vpc");

    ctx.cli().args(["run", "apply", "aws/vpc"]).env("FAKE_TG_EXIT", "3").assert().code(3);
}

#[test]
fn base_dir_flag_selects_tree() {
    let ctx = TestContext::new();
    let module = ctx.module("live/aws/vpc");

    ctx.cli()
        .args(["--base-dir", "live", "run", "validate", "aws/vpc"])
        .assert()
        .success();

    assert!(ctx.tool_log().contains(&format!("--working-dir {}", module.display())));
}
