use std::{collections::BTreeMap, path::PathBuf};

use super::Locale;
use crate::core::utils::{to_kebab_case, to_upper_camel_case};

/// Component metadata read from one documentation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComponent {
    pub title: String,
    pub subtitle: String,
    /// Palette category, the front-matter `type` field.
    pub category: String,
    pub icon: Option<String>,
    pub cover: Option<String>,
    pub description: String,
    /// Remaining front-matter fields.
    pub extra: BTreeMap<String, String>,
    pub locale: Locale,
    pub path: PathBuf,
    /// Title of the documented component this one was derived from.
    pub parent: Option<String>,
}

impl DocComponent {
    /// Kebab-case tag name derived from the title.
    pub fn tag(&self) -> String {
        to_kebab_case(&self.title)
    }

    /// Subtitle if present, otherwise the title.
    pub fn display_name(&self) -> &str {
        if self.subtitle.is_empty() {
            &self.title
        } else {
            &self.subtitle
        }
    }

    /// Title used to find this component in another locale's docs.
    pub fn source_title(&self) -> &str {
        self.parent.as_deref().unwrap_or(&self.title)
    }

    pub fn is_derived(&self) -> bool {
        self.parent.is_some()
    }

    /// A sub-component named after `tag`, inheriting everything else.
    pub fn derive(&self, tag: &str) -> DocComponent {
        DocComponent {
            title: to_upper_camel_case(tag),
            parent: Some(self.source_title().to_string()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
pub(crate) fn doc(title: &str, subtitle: &str) -> DocComponent {
    DocComponent {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        category: "通用".to_string(),
        icon: None,
        cover: None,
        description: format!("{} description", title),
        extra: BTreeMap::new(),
        locale: Locale::ZhCn,
        path: PathBuf::from(format!("components/{}/index.zh-CN.md", to_kebab_case(title))),
        parent: None,
    }
}
