use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn clean_removes_scratch_files() {
    let ctx = TestContext::new();
    ctx.module("aws/vpc");
    ctx.write("aws/vpc/.terraform/terraform.tfstate", "{}");
    ctx.write("aws/vpc/.terragrunt-cache/abc/main.tf", "");
    ctx.write("aws/vpc/tfplan", "");
    let kept = ctx.write("aws/vpc/main.tf", "");

    ctx.cli()
        .args(["clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"))
        .stdout(predicate::str::contains("Removed 3 path(s)"));

    assert!(!ctx.work_dir().join("aws/vpc/.terraform").exists());
    assert!(!ctx.work_dir().join("aws/vpc/.terragrunt-cache").exists());
    assert!(!ctx.work_dir().join("aws/vpc/tfplan").exists());
    assert!(kept.exists());
    assert!(ctx.work_dir().join("aws/vpc/terragrunt.hcl").exists());
}

#[test]
fn clean_keeps_cache_marked_with_gitkeep() {
    let ctx = TestContext::new();
    ctx.write(".gitkeep", "");
    ctx.write(".terragrunt-cache/providers/lock", "");

    ctx.cli()
        .args(["clean", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping"));

    assert!(ctx.work_dir().join(".terragrunt-cache/providers/lock").exists());
}

#[test]
fn clean_rejects_missing_path() {
    let ctx = TestContext::new();

    ctx.cli().args(["clean", "does-not-exist"]).assert().failure();
}

#[test]
fn clean_without_path_stays_inside_base_dir() {
    let ctx = TestContext::new();
    ctx.module("live/aws/vpc");
    ctx.write("live/aws/vpc/.terraform/terraform.tfstate", "{}");
    let outside = ctx.write("other/.terraform/terraform.tfstate", "{}");

    ctx.cli()
        .args(["-C", "live", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 path(s)"));

    assert!(!ctx.work_dir().join("live/aws/vpc/.terraform").exists());
    assert!(outside.is_file(), "files outside --base-dir must survive");
}
