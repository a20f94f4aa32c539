use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["docsRoot"], "components");
    assert_eq!(parsed["metadataDir"], "dsl/metadata");
    assert_eq!(parsed["outputDir"], "dsl/materials");
    assert_eq!(parsed["locale"], "zh-CN");
    assert_eq!(parsed["package"]["name"], "ant-design-vue");
    assert_eq!(parsed["package"]["componentPrefix"], "A");

    assert!(
        content.contains("\n  \"docsRoot\""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with('\n'));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".matgenrc.json").exists());

    let content = test.read_file(".matgenrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".matgenrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".matgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "components/button/index.zh-CN.md",
        "---\ntype: 通用\ntitle: Button\nsubtitle: 按钮\n---\n\n按钮。\n",
    )?;
    test.write_file(
        "dsl/metadata/zh-CN/web-types.json",
        r#"{ "version": "4.0.0", "contributions": { "html": { "tags": [ { "name": "button" } ] } } }"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("dsl/materials/AButton.json").exists());

    Ok(())
}
