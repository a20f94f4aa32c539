//! Report formatting and printing utilities.
//!
//! Diagnostics go to stderr, summaries and the verbose table to stdout.
//! Separate from core logic to allow matgen to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, MaterialRow,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const TABLE_HEADERS: [&str; 7] = [
    "COMPONENT", "TAG", "MATCH", "NAME", "PROPS", "EVENTS", "SLOTS",
];

/// Print issues as warnings to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stderr().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        let _ = writeln!(
            writer,
            "{} {}  {}",
            "warning:".bold().yellow(),
            issue.message(),
            issue.report_rule().to_string().dimmed().cyan()
        );
        if let Some(hint) = issue.hint() {
            let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
        }
    }
}

/// Pad `text` on the right to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

fn row_cells(row: &MaterialRow) -> [String; 7] {
    [
        row.component.clone(),
        row.tag.clone(),
        row.matched_by.clone(),
        row.name.clone(),
        row.property_count.to_string(),
        row.event_count.to_string(),
        row.slot_count.to_string(),
    ]
}

/// Print the per-material table with columns aligned by display width.
pub fn print_table_to<W: Write>(rows: &[MaterialRow], writer: &mut W) {
    if rows.is_empty() {
        return;
    }

    let cells: Vec<[String; 7]> = rows.iter().map(row_cells).collect();
    let mut widths = TABLE_HEADERS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let render = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(writer, "{}", render(&TABLE_HEADERS).bold());
    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        let _ = writeln!(writer, "{}", render(&row));
    }
    let _ = writeln!(writer);
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Print the generation summary line.
pub fn print_generate_summary_to<W: Write>(
    summary: &GenerateSummary,
    warnings: usize,
    writer: &mut W,
) {
    let materials = plural(summary.rows.len(), "material", "materials");
    let tags = plural(summary.tags_seen, "tag", "tags");
    let docs = plural(summary.docs_read, "documented component", "documented components");

    let msg = if summary.dry_run {
        format!("Would generate {} from {} and {} (dry run)", materials, tags, docs)
    } else {
        format!(
            "Generated {} from {} and {} into {}",
            materials,
            tags,
            docs,
            summary.output_dir.display()
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());

    if warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            plural(warnings, "diagnostic", "diagnostics")
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    report(&result.issues);

    match &result.summary {
        CommandSummary::Generate(summary) => {
            let mut stdout = io::stdout().lock();
            if verbose {
                print_table_to(&summary.rows, &mut stdout);
            }
            print_generate_summary_to(summary, result.issues.len(), &mut stdout);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}
