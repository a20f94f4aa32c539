//! Name reconciliation: map generated tag names back to documented components.
//!
//! Resolution order, first match wins:
//! 1. exact match of the tag against each title's kebab form (plus the
//!    literal alias table, e.g. `qrcode` -> `QRCode`)
//! 2. the explicit tag override table
//! 3. suffix stripping, longest suffix first, retrying exact match on the stem
//!
//! Tags that survive none of these are reported by the caller and skipped.

use std::collections::{HashMap, HashSet};

use super::data::DocComponent;
use super::tables::Tables;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    /// Resolved as `target` via the override table.
    Override { target: String },
    /// Parent found after stripping `suffix`.
    Suffix { suffix: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub tag: String,
    pub component: DocComponent,
    pub kind: MatchKind,
}

pub struct Reconciler<'a> {
    docs: &'a [DocComponent],
    tables: &'a Tables,
    /// Kebab tag -> index into `docs`.
    by_tag: HashMap<String, usize>,
    /// Suffixes sorted longest first.
    suffixes: Vec<&'a str>,
}

impl<'a> Reconciler<'a> {
    pub fn new(docs: &'a [DocComponent], tables: &'a Tables) -> Self {
        let mut by_tag = HashMap::new();
        for (i, doc) in docs.iter().enumerate() {
            by_tag.entry(doc.tag()).or_insert(i);
        }
        for (tag, title) in &tables.exact_aliases {
            if let Some(i) = docs.iter().position(|doc| doc.title == *title) {
                by_tag.entry(tag.clone()).or_insert(i);
            }
        }

        let mut suffixes: Vec<&str> = tables.suffixes.iter().map(String::as_str).collect();
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            docs,
            tables,
            by_tag,
            suffixes,
        }
    }

    pub fn resolve(&self, tag: &str) -> Option<Resolution> {
        if let Some(doc) = self.exact(tag) {
            return Some(Resolution {
                tag: tag.to_string(),
                component: doc.clone(),
                kind: MatchKind::Exact,
            });
        }

        if let Some(target) = self.tables.tag_overrides.get(tag) {
            let component = match self.exact(target) {
                Some(doc) => doc.clone(),
                None => {
                    let (_, parent) = self.strip_suffix(target)?;
                    parent.derive(target)
                }
            };
            return Some(Resolution {
                tag: tag.to_string(),
                component,
                kind: MatchKind::Override {
                    target: target.clone(),
                },
            });
        }

        let (suffix, parent) = self.strip_suffix(tag)?;
        Some(Resolution {
            tag: tag.to_string(),
            component: parent.derive(tag),
            kind: MatchKind::Suffix {
                suffix: suffix.to_string(),
            },
        })
    }

    fn exact(&self, tag: &str) -> Option<&'a DocComponent> {
        self.by_tag.get(tag).map(|&i| &self.docs[i])
    }

    fn strip_suffix(&self, tag: &str) -> Option<(&'a str, &'a DocComponent)> {
        self.suffixes.iter().find_map(|&suffix| {
            let stem = tag.strip_suffix(suffix)?.strip_suffix('-')?;
            if stem.is_empty() {
                return None;
            }
            self.exact(stem).map(|doc| (suffix, doc))
        })
    }

    /// Documented components no resolution landed on, directly or as a parent.
    pub fn unmatched<'r>(
        &self,
        resolutions: impl IntoIterator<Item = &'r Resolution>,
    ) -> Vec<&'a DocComponent> {
        let matched: HashSet<&str> = resolutions
            .into_iter()
            .map(|r| r.component.source_title())
            .collect();
        self.docs
            .iter()
            .filter(|doc| !matched.contains(doc.title.as_str()))
            .collect()
    }
}
