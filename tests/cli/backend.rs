use crate::harness::TestContext;
use crate::harness::test_context::rendered_s3;
use predicates::prelude::*;

#[test]
fn backend_prints_resolved_s3_backend() {
    let ctx = TestContext::new();
    let module = ctx.module("aws/vpc");

    let output = ctx
        .cli()
        .args(["backend", "aws/vpc"])
        .env("FAKE_RENDER_JSON", rendered_s3("x", "y/z", "t"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("stdout is JSON");
    assert_eq!(json["backend"], "s3");
    assert_eq!(json["state_path"], "s3://x/y/z");
    assert_eq!(json["lock_id"], "x/y/z-md5");
    assert_eq!(json["lock_table"], "t");
    assert!(
        ctx.tool_log().contains("render-json --out"),
        "render-json should be invoked: {}",
        ctx.tool_log()
    );
    assert!(ctx.tool_log().contains(&format!("--working-dir {}", module.display())));
}

#[test]
fn failed_render_prints_no_backend() {
    let ctx = TestContext::new();
    ctx.module("aws/vpc");

    ctx.cli()
        .args(["backend", "aws/vpc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"backend\": \"none\""));
}

#[test]
fn incomplete_backend_is_none() {
    let ctx = TestContext::new();
    ctx.module("aws/vpc");
    let without_table = serde_json::json!({
        "remote_state": { "backend": "s3", "config": { "bucket": "x", "key": "y/z" } }
    });

    ctx.cli()
        .args(["backend", "aws/vpc"])
        .env("FAKE_RENDER_JSON", without_table.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"backend\": \"none\""));
}

#[test]
fn disabled_backend_skips_render() {
    let ctx = TestContext::new();
    ctx.module("aws/vpc");

    ctx.cli()
        .args(["backend", "aws/vpc"])
        .env("FAKE_RENDER_JSON", rendered_s3("x", "y/z", "t"))
        .env("TGNAV_USE_S3_BACKEND", "false")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"backend\": \"none\""));

    assert!(!ctx.tool_log().contains("render-json"));
}

#[test]
fn missing_module_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backend", "aws/nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Module directory not found"));
}
