//! Grammar of the tree-text notation.
//!
//! ```text
//! line        = indentation [ branch ] label
//! indentation = { " " | NO-BREAK SPACE | "│" | TAB }
//! branch      = ( "├" | "└" ) "─"+ { whitespace }
//! ```
//!
//! Every indentation character is one column wide except the tab, which
//! counts as a full [`INDENT_UNIT`]. A branch found further along the line,
//! after characters that are not indentation (`|   ├── x`), still marks
//! where the label starts. Lines without any branch are not rejected: the
//! remainder of the line becomes the label as-is.

use std::path::Component;

/// Columns per nesting level.
pub const INDENT_UNIT: usize = 4;
/// Trailing character marking a label as a directory.
pub const DIRECTORY_MARKER: char = '/';

const BRANCH_GLYPHS: &[char] = &['├', '└'];
const CONNECTOR_DASH: char = '─';
const RAIL_GLYPH: char = '│';
const NO_BREAK_SPACE: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}
impl EntryKind {
    pub fn of(label: &str) -> Self {
        if label.ends_with(DIRECTORY_MARKER) {
            Self::Directory
        } else {
            Self::File
        }
    }
}

/// One non-blank entry line of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Nesting level, the root being 0.
    pub depth: usize,
    pub label: &'a str,
    pub kind: EntryKind,
}

fn column_width(c: char) -> Option<usize> {
    match c {
        ' ' | NO_BREAK_SPACE | RAIL_GLYPH => Some(1),
        '\t' => Some(INDENT_UNIT),
        _ => None,
    }
}

/// Splits `line` into the width of its indentation run and what follows it.
fn split_indentation(line: &str) -> (usize, &str) {
    let mut width = 0;

    for (offset, c) in line.char_indices() {
        match column_width(c) {
            Some(columns) => width += columns,
            None => return (width, &line[offset..]),
        }
    }

    (width, "")
}

/// Returns what follows a branch glyph and its dashes, `None` if `rest` does
/// not start with one.
fn strip_branch(rest: &str) -> Option<&str> {
    let after_glyph = rest.strip_prefix(BRANCH_GLYPHS)?;
    let after_dashes = after_glyph.trim_start_matches(CONNECTOR_DASH);

    if after_dashes.len() == after_glyph.len() {
        return None;
    }

    Some(after_dashes)
}

/// First branch anywhere in `rest`, returning what follows it.
fn find_branch(rest: &str) -> Option<&str> {
    rest.char_indices()
        .filter(|(_, c)| BRANCH_GLYPHS.contains(c))
        .find_map(|(offset, _)| strip_branch(&rest[offset..]))
}

fn label_of(rest: &str) -> &str {
    match find_branch(rest) {
        Some(label) => label.trim(),
        None => rest.trim(),
    }
}

pub fn indent_width(line: &str) -> usize {
    split_indentation(line).0
}

/// Nesting level of `line`.
///
/// Integer division on purpose: widths that are not a multiple of
/// [`INDENT_UNIT`] round down to the enclosing level.
pub fn depth_of(line: &str) -> usize {
    indent_width(line) / INDENT_UNIT + 1
}

pub fn extract_label(line: &str) -> &str {
    label_of(split_indentation(line).1)
}

/// Tokenizes one line. Blank lines, including lines made only of rails,
/// yield `None`.
pub fn parse_line(line: &str) -> Option<Line<'_>> {
    let (width, rest) = split_indentation(line);

    if rest.trim().is_empty() {
        return None;
    }

    let label = label_of(rest);

    Some(Line {
        depth: width / INDENT_UNIT + 1,
        label,
        kind: EntryKind::of(label),
    })
}

/// The root is always a directory, whether or not its line carries the marker.
pub fn root_label(line: &str) -> String {
    let mut label = line.trim().to_string();

    if !label.ends_with(DIRECTORY_MARKER) {
        label.push(DIRECTORY_MARKER);
    }

    label
}

/// True when joining `label` onto a directory could leave that directory:
/// absolute labels and labels containing `..`.
pub fn escapes_parent(label: &str) -> bool {
    std::path::Path::new(label)
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Drops the directory marker(s) so the label can be joined onto a path.
pub fn strip_marker(label: &str) -> &str {
    label.trim_end_matches(DIRECTORY_MARKER)
}

/// Trims the blank margin around `text` and splits off the root line.
///
/// Returns `None` when there is nothing but whitespace.
pub fn split_description(text: &str) -> Option<(&str, std::str::Lines<'_>)> {
    let mut lines = text.trim().lines();
    let root = lines.next()?;

    Some((root, lines))
}
