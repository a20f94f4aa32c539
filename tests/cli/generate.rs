use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

const ZH_WEB_TYPES: &str = r#"{
  "version": "4.0.0",
  "contributions": {
    "html": {
      "tags": [
        {
          "name": "button",
          "attributes": [
            { "name": "type", "description": "设置按钮类型", "default": "`default`",
              "value": { "type": "'primary' | 'dashed' | 'link'", "kind": "expression" } },
            { "name": "disabled", "description": "按钮失效状态", "default": "`false`",
              "value": { "type": "boolean", "kind": "expression" } },
            { "name": "loading", "description": "设置按钮载入状态", "default": "`false`",
              "value": { "type": "boolean \\| { delay: number }", "kind": "expression" } },
            { "name": "onClick", "description": "点击按钮时的回调",
              "value": { "type": "(event) => void", "kind": "expression" } }
          ],
          "events": [ { "name": "click", "description": "点击按钮时的回调" } ],
          "slots": [ { "name": "icon", "description": "设置按钮的图标组件" } ]
        },
        { "name": "config-provider" },
        {
          "name": "input-textarea",
          "attributes": [
            { "name": "value(v-model)", "description": "输入框内容",
              "value": { "type": "string", "kind": "expression" } },
            { "name": "rows", "default": "2", "value": { "type": "number", "kind": "expression" } }
          ]
        },
        {
          "name": "menu-item",
          "attributes": [
            { "name": "disabled", "default": "false", "value": { "type": "boolean", "kind": "expression" } }
          ]
        },
        { "name": "mystery-widget" }
      ]
    }
  }
}"#;

const EN_WEB_TYPES: &str = r#"{
  "version": "4.0.0",
  "contributions": {
    "html": {
      "tags": [
        {
          "name": "button",
          "attributes": [
            { "name": "type", "description": "Can be set to primary dashed link",
              "value": { "type": "string", "kind": "expression" } },
            { "name": "danger", "description": "Set the danger status of button", "default": "`false`",
              "value": { "type": "boolean", "kind": "expression" } }
          ]
        }
      ]
    }
  }
}"#;

fn doc(title: &str, subtitle: &str, category: &str, body: &str) -> String {
    let subtitle = if subtitle.is_empty() {
        String::new()
    } else {
        format!("subtitle: {}\n", subtitle)
    };
    format!(
        "---\ncategory: Components\ntype: {}\ntitle: {}\n{}---\n\n{}\n\n## API\n\n| 属性 | 说明 |\n",
        category, title, subtitle, body
    )
}

fn setup_project() -> Result<CliTest> {
    let test = CliTest::new()?;

    test.write_file(
        "components/button/index.zh-CN.md",
        &doc("Button", "按钮", "通用", "按钮用于开始一个即时操作。"),
    )?;
    test.write_file(
        "components/button/index.en-US.md",
        &doc("Button", "", "General", "To trigger an operation."),
    )?;
    test.write_file(
        "components/input/index.zh-CN.md",
        &doc("Input", "输入框", "数据录入", "通过鼠标或键盘输入内容。"),
    )?;
    test.write_file(
        "components/input/index.en-US.md",
        &doc("Input", "", "Data Entry", "A basic widget for getting the user input."),
    )?;
    test.write_file(
        "components/menu/index.zh-CN.md",
        &doc("Menu", "导航菜单", "导航", "为页面和功能提供导航的菜单列表。"),
    )?;
    test.write_file(
        "components/grid/index.zh-CN.md",
        &doc("Grid", "栅格", "布局", "24 栅格系统。"),
    )?;
    test.write_file("dsl/metadata/zh-CN/web-types.json", ZH_WEB_TYPES)?;
    test.write_file("dsl/metadata/en-US/web-types.json", EN_WEB_TYPES)?;

    Ok(test)
}

fn read_material(test: &CliTest, component: &str) -> Result<Value> {
    let content = test.read_file(&format!("dsl/materials/{}.json", component))?;
    Ok(serde_json::from_str(&content)?)
}

fn property_names(material: &Value) -> Vec<String> {
    material["schema"]["properties"][0]["content"]
        .as_array()
        .map(|props| {
            props
                .iter()
                .filter_map(|p| p["property"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_generate_writes_materials() -> Result<()> {
    let test = setup_project()?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let button = read_material(&test, "AButton")?;
    assert_eq!(button["id"], 1);
    assert_eq!(button["component"], "AButton");
    assert_eq!(button["name"], serde_json::json!({ "zh_CN": "按钮" }));
    assert_eq!(button["category"], "通用");
    assert_eq!(button["npm"]["exportName"], "Button");
    assert_eq!(button["dev_mode"], "proCode");
    assert_eq!(property_names(&button), vec!["type", "disabled", "loading"]);

    let ty = &button["schema"]["properties"][0]["content"][0];
    assert_eq!(ty["type"], "string");
    assert_eq!(ty["defaultValue"], "default");
    assert_eq!(ty["widget"]["component"], "MetaSelect");
    assert_eq!(button["schema"]["properties"][0]["content"][1]["defaultValue"], false);
    assert!(button["schema"]["events"]["onClick"].is_object());
    assert!(button["schema"]["slots"]["icon"].is_object());
    assert!(button["schema"]["slots"]["default"].is_object());

    let textarea = read_material(&test, "ATextarea")?;
    assert_eq!(textarea["npm"]["exportName"], "Textarea");
    assert_eq!(textarea["category"], "数据录入");
    assert_eq!(property_names(&textarea), vec!["value", "rows"]);
    assert_eq!(textarea["schema"]["properties"][0]["content"][1]["defaultValue"], 2);
    let update = &textarea["schema"]["events"]["onUpdate:value"];
    assert_eq!(update["functionInfo"]["params"][0]["name"], "value");

    let menu_item = read_material(&test, "AMenuItem")?;
    assert_eq!(menu_item["name"]["zh_CN"], "导航菜单");
    assert_eq!(menu_item["icon"], "menu-item");

    assert!(!test.root().join("dsl/materials/AConfigProvider.json").exists());
    assert!(!test.root().join("dsl/materials/AInputTextarea.json").exists());

    Ok(())
}

#[test]
fn test_generate_reports_diagnostics() -> Result<()> {
    let test = setup_project()?;

    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command());

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = setup_project()?;

    test.generate_command().output()?;
    let first = test.read_file("dsl/materials/AButton.json")?;
    test.generate_command().output()?;
    let second = test.read_file("dsl/materials/AButton.json")?;

    assert_eq!(first, second);
    assert!(first.starts_with("{\n  \"id\": 1,\n"));
    assert!(first.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_generate_both_locales() -> Result<()> {
    let test = setup_project()?;

    let output = test.generate_command().args(["--locale", "both"]).output()?;
    assert!(output.status.success());

    let button = read_material(&test, "AButton")?;
    assert_eq!(
        button["name"],
        serde_json::json!({ "zh_CN": "按钮", "en_US": "Button" })
    );
    assert_eq!(button["description"]["en_US"], "To trigger an operation.");
    assert_eq!(
        property_names(&button),
        vec!["type", "disabled", "loading", "danger"]
    );
    let ty = &button["schema"]["properties"][0]["content"][0];
    assert_eq!(ty["description"]["zh_CN"], "设置按钮类型");
    assert_eq!(ty["description"]["en_US"], "Can be set to primary dashed link");
    assert_eq!(
        button["schema"]["properties"][0]["label"],
        serde_json::json!({ "zh_CN": "基础属性", "en_US": "Basic properties" })
    );

    let menu_item = read_material(&test, "AMenuItem")?;
    assert_eq!(menu_item["name"]["en_US"], Value::Null);

    let textarea = read_material(&test, "ATextarea")?;
    assert_eq!(textarea["name"]["en_US"], "InputTextarea");

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = setup_project()?;

    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command().arg("--dry-run"));
    assert!(!test.root().join("dsl/materials").exists());

    Ok(())
}

#[test]
fn test_verbose_table() -> Result<()> {
    let test = setup_project()?;

    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command().args(["--dry-run", "-v"]));

    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        ".matgenrc.json",
        r#"{
          "outputDir": "out/materials",
          "ignores": ["**/grid/**"],
          "package": { "version": "4.2.6", "componentPrefix": "A" }
        }"#,
    )?;

    let output = test.generate_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(!stderr.contains("'Grid'"));
    let content = test.read_file("out/materials/AButton.json")?;
    let button: Value = serde_json::from_str(&content)?;
    assert_eq!(button["npm"]["version"], "4.2.6");
    assert_eq!(
        button["npm"]["css"],
        "https://unpkg.com/browse/ant-design-vue@4.2.6/dist/reset.css"
    );

    Ok(())
}

#[test]
fn test_output_dir_override() -> Result<()> {
    let test = setup_project()?;

    let output = test
        .generate_command()
        .args(["--output-dir", "custom"])
        .output()?;

    assert!(output.status.success());
    assert!(test.root().join("custom/AButton.json").exists());
    assert!(!test.root().join("dsl/materials").exists());

    Ok(())
}

#[test]
fn test_missing_docs_root_fails() -> Result<()> {
    let test = CliTest::new()?;
    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command());

    Ok(())
}

#[test]
fn test_malformed_doc_fails() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        "components/alert/index.zh-CN.md",
        "title: Alert\n\n没有分隔线。\n",
    )?;

    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command());
    assert!(!test.root().join("dsl/materials").exists());

    Ok(())
}

#[test]
fn test_missing_type_index_fails() -> Result<()> {
    let test = setup_project()?;

    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command().args(["--metadata-dir", "nowhere"]));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_extractor_command_runs_per_locale() -> Result<()> {
    let test = setup_project()?;
    test.write_file("fixtures/zh-CN.json", ZH_WEB_TYPES)?;
    test.write_file("fixtures/en-US.json", EN_WEB_TYPES)?;
    test.write_file(
        ".matgenrc.json",
        r#"{
          "metadataDir": "generated",
          "locale": "both",
          "extractor": {
            "command": "/bin/sh",
            "args": ["-c", "mkdir -p {outDir} && cp fixtures/{locale}.json {outDir}/web-types.json"]
          }
        }"#,
    )?;

    let mut cmd = test.generate_command();
    if let Some(path) = std::env::var_os("PATH") {
        cmd.env("PATH", path);
    }
    let output = cmd.output()?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("generated/zh-CN/web-types.json").exists());
    assert!(test.root().join("generated/en-US/web-types.json").exists());
    let button = read_material(&test, "AButton")?;
    assert_eq!(button["name"]["en_US"], "Button");

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failing_extractor_is_fatal() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        ".matgenrc.json",
        r#"{ "extractor": { "command": "/bin/sh", "args": ["-c", "exit 3"] } }"#,
    )?;

    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command());

    Ok(())
}
