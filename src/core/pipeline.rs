//! End-to-end generation: docs and type indices in, materials and issues out.
//!
//! Nothing here writes to disk; see `writer` for that.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use super::build::{BuildContext, build_material};
use super::data::{DocComponent, Locale, MaterialDescriptor};
use super::loader::{CommandExtractor, TypeExtractor, WebTypesFiles};
use super::merge::merge_indices;
use super::parsers::markdown::{is_ignored_tag, read_docs};
use super::resolve::{MatchKind, Reconciler};
use super::tables::Tables;
use crate::config::Config;
use crate::issues::{
    DuplicateComponentIssue, Issue, UnmatchedComponentIssue, UnresolvedTagIssue,
};
use crate::passes::{PostPass, run_passes};

/// A material together with where it came from.
#[derive(Debug, Clone)]
pub struct GeneratedMaterial {
    pub tag: String,
    pub kind: MatchKind,
    pub material: MaterialDescriptor,
}

#[derive(Debug, Default)]
pub struct GenerateOutput {
    pub materials: Vec<GeneratedMaterial>,
    pub issues: Vec<Issue>,
    /// Documented components read in the primary locale.
    pub docs_read: usize,
    /// Tags in the merged type index, ignored ones included.
    pub tags_seen: usize,
}

/// Extractor for a run: the configured command if any, otherwise the
/// pre-generated index files.
pub fn extractor_for(config: &Config, root: &Path) -> Box<dyn TypeExtractor> {
    let files = WebTypesFiles::new(root.join(&config.metadata_dir));
    match &config.extractor {
        Some(extractor) => Box::new(CommandExtractor::new(
            extractor.command.clone(),
            extractor.args.clone(),
            root,
            files,
        )),
        None => Box::new(files),
    }
}

fn read_locale_docs(
    config: &Config,
    root: &Path,
    locale: Locale,
    tables: &Tables,
) -> Result<Vec<DocComponent>> {
    let ignores = config.ignore_patterns()?;
    let docs_root = root.join(&config.docs_root);
    read_docs(&docs_root, locale, &ignores, &tables.ignored)?.collect()
}

pub fn generate(
    config: &Config,
    root: &Path,
    tables: &Tables,
    extractor: &dyn TypeExtractor,
    passes: &[PostPass],
) -> Result<GenerateOutput> {
    let locales = config.locale.locales();
    let (primary, secondaries) = match locales.split_first() {
        Some(split) => split,
        None => return Ok(GenerateOutput::default()),
    };

    let docs = read_locale_docs(config, root, *primary, tables)?;
    let mut translations: HashMap<String, DocComponent> = HashMap::new();
    for &locale in secondaries {
        for doc in read_locale_docs(config, root, locale, tables)? {
            translations.entry(doc.title.clone()).or_insert(doc);
        }
    }

    let mut index = extractor.extract(*primary)?;
    for &locale in secondaries {
        index = merge_indices(index, extractor.extract(locale)?);
    }

    let reconciler = Reconciler::new(&docs, tables);
    let ctx = BuildContext {
        locales: &locales,
        version: &index.version,
        package: &config.package,
        translations: &translations,
        tables,
    };

    let mut issues = Vec::new();
    let mut resolutions = Vec::new();
    let mut materials = Vec::new();
    for (name, tag) in &index.tags {
        if is_ignored_tag(name, &tables.ignored) {
            continue;
        }
        match reconciler.resolve(name) {
            Some(resolution) => {
                materials.push(build_material(materials.len() + 1, &resolution, tag, &ctx));
                resolutions.push(resolution);
            }
            None => issues.push(UnresolvedTagIssue { tag: name.clone() }.into()),
        }
    }

    for doc in reconciler.unmatched(&resolutions) {
        issues.push(
            UnmatchedComponentIssue {
                title: doc.title.clone(),
                path: doc.path.clone(),
            }
            .into(),
        );
    }

    let materials = run_passes(materials, passes, tables);

    let mut kept: Vec<GeneratedMaterial> = Vec::with_capacity(materials.len());
    let mut by_component: HashMap<String, usize> = HashMap::new();
    for (resolution, mut material) in resolutions.into_iter().zip(materials) {
        if let Some(&first) = by_component.get(&material.component) {
            issues.push(
                DuplicateComponentIssue {
                    component: material.component,
                    tag: resolution.tag,
                    kept_tag: kept[first].tag.clone(),
                }
                .into(),
            );
            continue;
        }
        material.id = kept.len() + 1;
        by_component.insert(material.component.clone(), kept.len());
        kept.push(GeneratedMaterial {
            tag: resolution.tag,
            kind: resolution.kind,
            material,
        });
    }

    Ok(GenerateOutput {
        materials: kept,
        issues,
        docs_read: docs.len(),
        tags_seen: index.tags.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::LocaleSelection;
    use crate::issues::{Report, Rule};
    use crate::passes::default_passes;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_doc(root: &Path, dir: &str, locale: &str, front_matter: &str, body: &str) {
        let path = root.join("components").join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(
            path.join(format!("index.{}.md", locale)),
            format!("---\n{}\n---\n\n{}\n\n## API\n", front_matter, body),
        )
        .unwrap();
    }

    fn write_index(root: &Path, locale: &str, json: &str) {
        let dir = root.join("dsl/metadata").join(locale);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("web-types.json"), json).unwrap();
    }

    const ZH_INDEX: &str = r#"{
      "version": "4.0.0",
      "contributions": { "html": { "tags": [
        { "name": "button",
          "attributes": [
            { "name": "type", "description": "按钮类型", "default": "`default`",
              "value": { "type": "'primary' | 'dashed'" } },
            { "name": "disabled", "default": "false", "value": { "type": "boolean" } }
          ],
          "events": [ { "name": "click", "description": "点击按钮时的回调" } ] },
        { "name": "config-provider" },
        { "name": "input-textarea",
          "attributes": [ { "name": "value(v-model)", "value": { "type": "string" } } ] },
        { "name": "menu-item" },
        { "name": "mystery-widget" },
        { "name": "textarea" }
      ] } }
    }"#;

    const EN_INDEX: &str = r#"{
      "version": "4.0.0",
      "contributions": { "html": { "tags": [
        { "name": "button",
          "attributes": [
            { "name": "type", "description": "Button type", "value": { "type": "string" } },
            { "name": "danger", "default": "false", "value": { "type": "boolean" } }
          ] }
      ] } }
    }"#;

    fn project() -> TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_doc(
            root,
            "button",
            "zh-CN",
            "category: Components\ntype: 通用\ntitle: Button\nsubtitle: 按钮",
            "按钮用于开始一个即时操作。",
        );
        write_doc(
            root,
            "button",
            "en-US",
            "category: Components\ntype: General\ntitle: Button",
            "To trigger an operation.",
        );
        write_doc(
            root,
            "input",
            "zh-CN",
            "type: 数据录入\ntitle: Input\nsubtitle: 输入框",
            "通过鼠标或键盘输入内容。",
        );
        write_doc(
            root,
            "menu",
            "zh-CN",
            "type: 导航\ntitle: Menu\nsubtitle: 导航菜单",
            "为页面和功能提供导航的菜单列表。",
        );
        write_doc(
            root,
            "grid",
            "zh-CN",
            "type: 布局\ntitle: Grid\nsubtitle: 栅格",
            "24 栅格系统。",
        );
        write_index(root, "zh-CN", ZH_INDEX);
        write_index(root, "en-US", EN_INDEX);
        dir
    }

    fn run(dir: &TempDir, locale: LocaleSelection) -> GenerateOutput {
        let config = Config {
            locale,
            ..Config::default()
        };
        let tables = Tables {
            suffixes: vec!["item".to_string(), "textarea".to_string()],
            ..Tables::default()
        };
        let extractor = extractor_for(&config, dir.path());
        generate(&config, dir.path(), &tables, extractor.as_ref(), &default_passes()).unwrap()
    }

    #[test]
    fn test_generate_zh() {
        let dir = project();
        let output = run(&dir, LocaleSelection::ZhCn);

        let components: Vec<&str> = output
            .materials
            .iter()
            .map(|m| m.material.component.as_str())
            .collect();
        assert_eq!(components, vec!["AButton", "ATextarea", "AMenuItem"]);
        assert_eq!(output.docs_read, 4);
        assert_eq!(output.tags_seen, 6);

        let ids: Vec<usize> = output.materials.iter().map(|m| m.material.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let button = &output.materials[0].material;
        assert_eq!(button.version, "4.0.0");
        assert_eq!(button.name.get(Locale::EnUs), None);
        assert_eq!(button.property_count(), 2);
    }

    #[test]
    fn test_generate_issues() {
        let dir = project();
        let output = run(&dir, LocaleSelection::ZhCn);

        // Input is only reached as the parent of `input-textarea`, which
        // still counts as matched.
        let messages: Vec<(Rule, String)> = output.issues.iter().map(|i| i.sort_key()).collect();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].0, Rule::UnresolvedTag);
        assert!(messages[0].1.contains("'mystery-widget'"));
        assert_eq!(messages[1].0, Rule::UnresolvedTag);
        assert!(messages[1].1.contains("'textarea'"));
        assert_eq!(messages[2].0, Rule::UnmatchedComponent);
        assert!(messages[2].1.contains("'Grid'"));
    }

    #[test]
    fn test_generate_both_locales() {
        let dir = project();
        let output = run(&dir, LocaleSelection::Both);

        let button = &output.materials[0].material;
        assert_eq!(button.name.get(Locale::ZhCn), Some("按钮"));
        assert_eq!(button.name.get(Locale::EnUs), Some("Button"));
        assert_eq!(
            button.description.get(Locale::EnUs),
            Some("To trigger an operation.")
        );

        let names: Vec<&str> = button.properties().map(|p| p.property.as_str()).collect();
        assert_eq!(names, vec!["type", "disabled", "danger"]);
        let ty = button.properties().find(|p| p.property == "type").unwrap();
        assert_eq!(ty.description.get(Locale::ZhCn), Some("按钮类型"));
        assert_eq!(ty.description.get(Locale::EnUs), Some("Button type"));
    }

    #[test]
    fn test_duplicate_component_after_rename() {
        let dir = project();
        let config = Config::default();
        let mut tables = Tables {
            suffixes: vec!["textarea".to_string(), "item".to_string()],
            ..Tables::default()
        };
        tables
            .exact_aliases
            .insert("textarea".to_string(), "Input".to_string());
        tables
            .renames
            .insert("AInput".to_string(), "ATextarea".to_string());
        let extractor = extractor_for(&config, dir.path());
        let output =
            generate(&config, dir.path(), &tables, extractor.as_ref(), &default_passes()).unwrap();

        let textareas = output
            .materials
            .iter()
            .filter(|m| m.material.component == "ATextarea")
            .count();
        assert_eq!(textareas, 1);
        let duplicate = output
            .issues
            .iter()
            .find(|i| i.report_rule() == Rule::DuplicateComponent)
            .unwrap();
        assert!(duplicate.message().contains("from tag 'textarea'"));
    }

    #[test]
    fn test_ids_stay_dense_after_duplicate() {
        let dir = project();
        write_index(
            dir.path(),
            "zh-CN",
            r#"{ "version": "4.0.0", "contributions": { "html": { "tags": [
              { "name": "button" },
              { "name": "input" },
              { "name": "input-textarea" },
              { "name": "menu-item" }
            ] } } }"#,
        );
        let config = Config::default();
        let mut tables = Tables {
            suffixes: vec!["textarea".to_string(), "item".to_string()],
            ..Tables::default()
        };
        tables
            .renames
            .insert("AInput".to_string(), "ATextarea".to_string());
        let extractor = extractor_for(&config, dir.path());
        let output =
            generate(&config, dir.path(), &tables, extractor.as_ref(), &default_passes()).unwrap();

        let kept: Vec<(usize, &str, &str)> = output
            .materials
            .iter()
            .map(|m| (m.material.id, m.material.component.as_str(), m.tag.as_str()))
            .collect();
        assert_eq!(
            kept,
            vec![
                (1, "AButton", "button"),
                (2, "ATextarea", "input"),
                (3, "AMenuItem", "menu-item"),
            ]
        );
    }

    #[test]
    fn test_missing_docs_root_is_fatal() {
        let dir = tempdir().unwrap();
        let config = Config::default();
        let extractor = extractor_for(&config, dir.path());
        let err = generate(
            &config,
            dir.path(),
            &Tables::default(),
            extractor.as_ref(),
            &default_passes(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
