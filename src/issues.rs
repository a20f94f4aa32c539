//! Diagnostics collected during generation.
//!
//! None of these stop a run. Each is self-contained with everything the
//! reporter needs to print it.

use std::path::PathBuf;

use enum_dispatch::enum_dispatch;

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnresolvedTag,
    UnmatchedComponent,
    DuplicateComponent,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnresolvedTag => write!(f, "unresolved-tag"),
            Rule::UnmatchedComponent => write!(f, "unmatched-component"),
            Rule::DuplicateComponent => write!(f, "duplicate-component"),
        }
    }
}

/// Tag in the type index that no documented component resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedTagIssue {
    pub tag: String,
}

/// Documented component that no tag resolved to, neither directly nor as
/// the parent of a derived sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedComponentIssue {
    pub title: String,
    pub path: PathBuf,
}

/// A second material with an already generated component id. The later one
/// is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateComponentIssue {
    pub component: String,
    /// Source tag of the dropped material.
    pub tag: String,
    /// Source tag of the material that was kept.
    pub kept_tag: String,
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnresolvedTag(UnresolvedTagIssue),
    UnmatchedComponent(UnmatchedComponentIssue),
    DuplicateComponent(DuplicateComponentIssue),
}

/// Uniform view of an issue for the console reporter.
#[enum_dispatch]
pub trait Report {
    fn report_rule(&self) -> Rule;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for UnresolvedTagIssue {
    fn report_rule(&self) -> Rule {
        Rule::UnresolvedTag
    }

    fn message(&self) -> String {
        format!("tag '{}' has no matching documented component", self.tag)
    }

    fn hint(&self) -> Option<&str> {
        Some("add a tag override or a suffix so the tag resolves")
    }
}

impl Report for UnmatchedComponentIssue {
    fn report_rule(&self) -> Rule {
        Rule::UnmatchedComponent
    }

    fn message(&self) -> String {
        format!(
            "component '{}' ({}) has no matching tag",
            self.title,
            self.path.display()
        )
    }
}

impl Report for DuplicateComponentIssue {
    fn report_rule(&self) -> Rule {
        Rule::DuplicateComponent
    }

    fn message(&self) -> String {
        format!(
            "component '{}' from tag '{}' already generated from tag '{}', skipped",
            self.component, self.tag, self.kept_tag
        )
    }
}

impl Issue {
    /// Sort key: rule first, then message.
    pub fn sort_key(&self) -> (Rule, String) {
        (self.report_rule(), self.message())
    }
}
