//! Plain-text rendering of a release listing.

use std::fmt::Display;

use crate::release::Snapshot;

/// Shown in place of an absent value.
pub const ABSENT: &str = "NA";

const COLUMNS: [&str; 4] = ["id", "name", "tag_name", "published_at"];

/// Render `(id, name, tag_name, published_at)` for every record, one row per line,
/// each prefixed with its zero-based position in the snapshot.
pub fn render_listing(snapshot: &Snapshot) -> String {
    let rows: Vec<[String; 4]> = snapshot
        .select_listing()
        .into_iter()
        .map(|row| {
            [
                cell(row.id),
                cell(row.name),
                cell(row.tag_name),
                cell(row.published_at),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }
    let index_width = rows.len().saturating_sub(1).to_string().len();

    let mut out = String::new();
    push_line(
        &mut out,
        &" ".repeat(index_width),
        '|',
        COLUMNS.iter().copied(),
        &widths,
    );
    let rules = widths.map(|w| "-".repeat(w));
    push_line(
        &mut out,
        &"-".repeat(index_width),
        '+',
        rules.iter().map(String::as_str),
        &widths,
    );
    for (i, row) in rows.iter().enumerate() {
        push_line(
            &mut out,
            &format!("{:>width$}", i, width = index_width),
            '|',
            row.iter().map(String::as_str),
            &widths,
        );
    }
    out
}

fn cell<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

fn push_line<'a>(
    out: &mut String,
    index: &str,
    separator: char,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect();
    let line = format!("{} {} {}", index, separator, padded.join("  "));
    out.push_str(line.trim_end());
    out.push('\n');
}
