use anyhow::Result;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const SERVER_JS: &str = include_str!("fixtures/server.js");
const SERVER_JS_PATCHED: &str = include_str!("fixtures/server.patched.js");

fn patcher(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_endpoint-patcher"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_default_run_patches_server_js() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("server.js"), SERVER_JS)?;

    let output = patcher(&dir, &[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "Fixed all three endpoints!\n");
    assert_eq!(fs::read_to_string(dir.path().join("server.js"))?, SERVER_JS_PATCHED);
    Ok(())
}

#[test]
fn test_no_anchors_still_confirms() -> Result<()> {
    let dir = TempDir::new()?;
    let content = "app.listen(3000);\n";
    fs::write(dir.path().join("server.js"), content)?;

    let output = patcher(&dir, &["--verbose"])?;

    assert_eq!(output.status.code(), Some(0));
    // Logs stay on stderr even when verbose.
    assert_eq!(String::from_utf8(output.stdout)?, "Fixed all three endpoints!\n");
    assert!(!output.stderr.is_empty());
    assert_eq!(fs::read(dir.path().join("server.js"))?, content.as_bytes());
    Ok(())
}

#[test]
fn test_dry_run_leaves_file_and_skips_confirmation() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("server.js"), SERVER_JS)?;

    let output = patcher(&dir, &["--dry-run"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Fixed all three endpoints!"));
    assert!(stdout.contains("market-rates-columns"));
    assert!(stdout.contains("4 of 4 rules would apply."));
    assert_eq!(fs::read_to_string(dir.path().join("server.js"))?, SERVER_JS);
    Ok(())
}

#[test]
fn test_missing_target_exits_with_one() -> Result<()> {
    let dir = TempDir::new()?;

    let output = patcher(&dir, &["--target", "missing.js"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("missing.js").exists());
    Ok(())
}

#[test]
fn test_report_written_as_json() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("server.js"), SERVER_JS)?;

    let output = patcher(&dir, &["--report", "report.json"])?;
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json"))?)?;
    assert_eq!(report["target"], "server.js");
    assert_eq!(report["outcomes"].as_array().map(Vec::len), Some(4));
    Ok(())
}
