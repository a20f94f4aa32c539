use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::data::{DocComponent, Locale};
use crate::core::utils::to_kebab_case;

const DELIMITER: &str = "---";

/// Documentation file name for a locale: `index.zh-CN.md`.
pub fn doc_file_name(locale: Locale) -> String {
    format!("index.{}.md", locale.tag())
}

/// Lazily read every documentation file for `locale` under `root`.
///
/// Files are visited in sorted path order. Paths matching an `ignores`
/// pattern are skipped, as are components whose title or kebab tag is in
/// `ignored_names`. A malformed file yields an `Err` item.
pub fn read_docs<'a>(
    root: &Path,
    locale: Locale,
    ignores: &'a [Pattern],
    ignored_names: &'a [String],
) -> Result<impl Iterator<Item = Result<DocComponent>> + use<'a>> {
    if !root.exists() {
        bail!(
            "Documentation directory '{}' does not exist.\n\
             Hint: Check your .matgenrc.json 'docsRoot' setting.",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let file_name = doc_file_name(locale);
    let root = root.to_path_buf();

    let docs = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(
                        Err::<DocComponent, _>(e).context("Cannot access documentation path"),
                    );
                }
            };
            if !entry.file_type().is_file()
                || entry.file_name().to_str() != Some(file_name.as_str())
            {
                return None;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&root).unwrap_or(path);
            let relative_str = relative.to_string_lossy();
            if ignores
                .iter()
                .any(|p| p.matches(&relative_str) || p.matches_path(path))
            {
                return None;
            }

            Some(read_doc(path, locale))
        })
        .filter(move |doc| match doc {
            Ok(doc) => {
                !ignored_names
                    .iter()
                    .any(|name| *name == doc.title || *name == doc.tag())
            }
            Err(_) => true,
        });

    Ok(docs)
}

pub fn read_doc(path: &Path, locale: Locale) -> Result<DocComponent> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read documentation file: {}", path.display()))?;
    parse_doc(&content, path, locale)
}

/// Parse one documentation file.
///
/// The file is split by `---` lines: the first region is a flat `key: value`
/// front-matter block, the second holds the description up to the first
/// heading. An empty description falls back to the `subtitle` field.
pub fn parse_doc(content: &str, path: &Path, locale: Locale) -> Result<DocComponent> {
    let lines: Vec<&str> = content.lines().collect();
    let delimiters: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == DELIMITER)
        .map(|(i, _)| i)
        .take(3)
        .collect();

    if delimiters.len() < 2 {
        bail!(
            "Malformed front-matter in {}: expected a block enclosed by '{}' lines",
            path.display(),
            DELIMITER
        );
    }

    let mut header = parse_front_matter(&lines[delimiters[0] + 1..delimiters[1]]);
    let body_end = delimiters.get(2).copied().unwrap_or(lines.len());
    let description = parse_description(&lines[delimiters[1] + 1..body_end]);

    let Some(title) = header.remove("title").filter(|t| !t.is_empty()) else {
        bail!("Missing 'title' in front-matter of {}", path.display());
    };
    let subtitle = header.remove("subtitle").unwrap_or_default();
    let category = header.remove("type").unwrap_or_default();
    let icon = header.remove("icon").filter(|v| !v.is_empty());
    let cover = header.remove("cover").filter(|v| !v.is_empty());

    let description = if description.is_empty() {
        subtitle.clone()
    } else {
        description
    };

    Ok(DocComponent {
        title,
        subtitle,
        category,
        icon,
        cover,
        description,
        extra: header,
        locale,
        path: PathBuf::from(path),
        parent: None,
    })
}

/// Split each non-blank line on its first colon. Keys without a colon get an
/// empty value.
fn parse_front_matter(lines: &[&str]) -> BTreeMap<String, String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (line.to_string(), String::new()),
        })
        .collect()
}

fn parse_description(lines: &[&str]) -> String {
    lines
        .iter()
        .take_while(|line| !line.trim_start().starts_with('#'))
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// True if `tag` names an ignored component either directly or via its
/// kebab form.
pub fn is_ignored_tag(tag: &str, ignored_names: &[String]) -> bool {
    ignored_names
        .iter()
        .any(|name| name == tag || to_kebab_case(name) == tag)
}
