//! Line-pair scanner for manifest text.
//!
//! A dependency block is a line whose trimmed form is `<name>:` for a name in
//! the [`ReplacementTable`], immediately followed by a line containing the
//! path indicator:
//!
//! ```text
//!   web3_universal_core:
//!     path: ../core
//! ```
//!
//! The pair collapses to a single `  web3_universal_core: ^0.1.1` line with
//! the name line's indentation. Everything else is copied verbatim. Matching is
//! purely textual; the manifest is never parsed as YAML, so unrelated
//! formatting survives untouched.

use crate::table::ReplacementTable;

/// Substring marking the line after a dependency name as a local path.
pub const DEFAULT_PATH_INDICATOR: &str = "path:";

/// A single rewrite applied by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub name: String,
    pub version: String,
    /// 1-based line number of the name line in the input.
    pub line: usize,
}

/// Result of scanning one manifest's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub lines: Vec<String>,
    pub modified: bool,
    pub pins: Vec<Pin>,
}

/// Rewritten manifest text, produced only when at least one block matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub pins: Vec<Pin>,
}

/// Scans `lines` left to right, collapsing every dependency block.
///
/// Pure with respect to its inputs. A name line at end of input is never a
/// block since there is no following line to inspect.
pub fn scan_lines<S: AsRef<str>>(
    lines: &[S],
    table: &ReplacementTable,
    path_indicator: &str,
) -> ScanOutcome {
    let mut out = Vec::with_capacity(lines.len());
    let mut pins = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].as_ref();

        let pinned = dependency_name(line)
            .and_then(|name| table.get(name).map(|version| (name, version)))
            .filter(|_| {
                lines
                    .get(i + 1)
                    .is_some_and(|next| next.as_ref().contains(path_indicator))
            });

        match pinned {
            Some((name, version)) => {
                out.push(format!("{}{}: {}", indent_of(line), name, version));
                pins.push(Pin {
                    name: name.to_string(),
                    version: version.to_string(),
                    line: i + 1,
                });
                // The path line is consumed with its name line.
                i += 2;
            }
            None => {
                out.push(line.to_string());
                i += 1;
            }
        }
    }

    ScanOutcome {
        lines: out,
        modified: !pins.is_empty(),
        pins,
    }
}

/// Rewrites full manifest text.
///
/// Returns `None` when nothing matched, so callers can leave the file alone.
/// `\n`, `\r\n` and a lone `\r` all end a line and are normalized to `\n`; a
/// missing final newline is kept unless the last line was part of a rewritten
/// block.
pub fn rewrite_content(
    content: &str,
    table: &ReplacementTable,
    path_indicator: &str,
) -> Option<Rewrite> {
    let (lines, trailing_newline) = split_lines(content);

    let outcome = scan_lines(&lines, table, path_indicator);
    if !outcome.modified {
        return None;
    }

    let ends_with_pin = outcome
        .pins
        .last()
        .is_some_and(|pin| pin.line + 1 == lines.len());

    let mut new_content = outcome.lines.join("\n");
    if trailing_newline || ends_with_pin {
        new_content.push('\n');
    }

    Some(Rewrite {
        content: new_content,
        pins: outcome.pins,
    })
}

/// Splits text into lines without terminators, and reports whether the last
/// line was terminated.
fn split_lines(content: &str) -> (Vec<&str>, bool) {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(|c: char| c == '\r' || c == '\n') {
        lines.push(&rest[..pos]);
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
    }

    let trailing_newline = rest.is_empty() && !lines.is_empty();
    if !trailing_newline {
        lines.push(rest);
    }
    (lines, trailing_newline)
}

/// Candidate dependency name of a `name:` line.
fn dependency_name(line: &str) -> Option<&str> {
    line.trim().strip_suffix(':')
}

fn indent_of(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
