use anyhow::{Context, Result};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(code, 0);
    assert_snapshot!(stdout.trim_end(), @"✓ Created .zhcheckrc.json");

    let content = test.read_file(".zhcheckrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceRoot"], "src");
    assert_eq!(parsed["includes"][0], "**/*.vue");
    assert_eq!(parsed["contextWindows"]["comment"], 500);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".zhcheckrc.json", "{}")?;

    let (code, _, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(code, 1);
    assert!(stderr.contains(".zhcheckrc.json already exists"));
    assert_eq!(test.read_file(".zhcheckrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_created_config_is_used_by_check() -> Result<()> {
    let test = CliTest::with_file("src/A.vue", "<template><i>图标</i></template>")?;
    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    let (code, _, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    Ok(())
}
