use crate::harness::TestContext;

#[test]
fn fmt_runs_hclfmt_then_terraform_fmt() {
    let ctx = TestContext::new();
    ctx.module("aws/vpc");

    ctx.cli().args(["fmt"]).assert().success();

    let log = ctx.tool_log();
    let base = ctx.work_dir().display().to_string();
    let hclfmt = log
        .lines()
        .position(|line| line == format!("terragrunt hclfmt --working-dir {}", base))
        .expect("hclfmt should run");
    let fmt = log
        .lines()
        .position(|line| line == format!("terraform fmt -recursive {}", base))
        .expect("terraform fmt should run");
    assert!(hclfmt < fmt);
}
