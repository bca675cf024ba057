use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const COMPONENT: &str = r#"<template>
  <div title="标题">内容</div>
</template>
<script>
const MSG = '提示'
export default {
  props: {
    label: { type: String, default: '默认' }
  }
}
</script>
"#;

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        "<template>\n  <p>{{ $t('home.title') }}</p>\n</template>\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert_snapshot!(stdout.trim_end(), @"✓ Checked 1 file - no untranslated literals (1 i18n call)");
    Ok(())
}

#[test]
fn test_check_reports_regions_in_order() -> Result<()> {
    let test = CliTest::with_file("src/components/Demo.vue", COMPONENT)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);

    let title = position(&stdout, "error: \"标题\"  untranslated-literal");
    let body = position(&stdout, "error: \"内容\"");
    let pre = position(&stdout, "error: \"提示\"");
    let props = position(&stdout, "error: \"默认\"");
    assert!(title < body && body < pre && pre < props);

    assert!(stdout.contains("--> src/components/Demo.vue:5:13"));
    assert!(stdout.contains("5 | const MSG = '提示'"));
    assert!(stdout.contains("= note: in script-pre region"));
    assert!(stdout.contains("--> src/components/Demo.vue:8:37"));
    assert!(stdout.contains("= note: in props region"));
    assert!(stdout.contains("4 problems (4 errors, 0 warnings), 0 i18n calls"));
    Ok(())
}

#[test]
fn test_check_suppressed_literals_pass() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        r#"<template>
  <!-- <p>旧文案</p> -->
  <p>{{ $t('a') }}</p>
</template>
<script>
// const OLD = '旧的'
/* const B = '块注释' */
const A = this.$t('你好')
export default {}
</script>
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0, "{stdout}");
    Ok(())
}

#[test]
fn test_check_json_format() -> Result<()> {
    let test = CliTest::with_file("src/components/Demo.vue", COMPONENT)?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.args(["--format", "json"]);
        cmd
    })?;
    assert_eq!(code, 1);

    let json: Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["filesChecked"], 1);
    let regions: Vec<&str> = json["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["region"].as_str().unwrap())
        .collect();
    assert_eq!(regions, vec!["template", "template", "script-pre", "props"]);
    assert_eq!(json["findings"][2]["text"], "提示");
    assert_eq!(json["findings"][2]["line"], 5);
    assert_eq!(json["findings"][2]["col"], 13);
    assert_eq!(json["findings"][2]["offset"], COMPONENT.find("'提示'").unwrap());
    assert!(json["failures"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_check_include_and_ignore_prefix_flags() -> Result<()> {
    let test = CliTest::with_file(
        "src/utils/msg.js",
        "console.log('调试')\nexport const SAVED = '保存成功'\n",
    )?;

    // Only .vue files are scanned by default.
    let (code, _, _) = run(test.check_command())?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.args(["--include", "**/*.js", "--ignore-prefix", r"console\.log\($"]);
        cmd
    })?;
    assert_eq!(code, 1);
    assert!(stdout.contains("\"保存成功\""));
    assert!(!stdout.contains("调试"));
    assert!(stdout.contains("= note: in plain region"));
    Ok(())
}

#[test]
fn test_check_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("app/Page.vue", "<template><p>页面</p></template>")?;
    test.write_file(".zhcheckrc.json", r#"{ "sourceRoot": "app" }"#)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("--> app/Page.vue:1:14"));

    let (code, _, _) = run({
        let mut cmd = test.check_command();
        cmd.arg("--no-config");
        cmd
    })?;
    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn test_check_source_root_flag_and_cwd() -> Result<()> {
    let test = CliTest::with_file("web/client/View.vue", "<template><b>视图</b></template>")?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.arg("--cwd").arg(test.root().join("web"));
        cmd.args(["--source-root", "client"]);
        cmd
    })?;
    assert_eq!(code, 1);
    assert!(stdout.contains("--> client/View.vue:1:14"));
    Ok(())
}

#[test]
fn test_check_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".zhcheckrc.json", r#"{ "i18nCallPrefixPattern": "t(" }"#)?;

    let (code, _, stderr) = run(test.check_command())?;
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("i18nCallPrefix"));
    Ok(())
}

#[test]
fn test_check_unreadable_file_is_warning() -> Result<()> {
    let test = CliTest::new()?;
    fs::create_dir_all(test.root().join("src"))?;
    fs::write(test.root().join("src/Broken.vue"), [0xff, 0xfe, 0xfd])?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"Failed to read file"));
    assert!(stdout.contains("--> src/Broken.vue"));
    assert!(stdout.contains("(0 errors, 1 warning)"));
    Ok(())
}
