//! Line-preserving settings upserts.
//!
//! Writes only touch the one `key = value` line they own, so comments,
//! ordering, and unrelated sections of a hand-edited file survive.

use crate::error::ConfigError;

/// Upsert `key = <literal>` inside `[section]` while preserving unrelated
/// file contents.
///
/// `literal` must already be valid TOML (see [`toml_string_literal`]).
/// Header matching is case-sensitive and ignores inner whitespace and
/// trailing comments. A section declared through root-level dotted keys or
/// an inline table cannot be edited line by line and is rejected.
pub(crate) fn upsert_section_key(
    input: &str,
    section: &str,
    key: &str,
    literal: &str,
) -> Result<String, ConfigError> {
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };
    reject_root_level_section(&lines, section)?;

    let header = format!("[{section}]");
    let assignment = format!("{key} = {literal}");

    let section_idx = lines
        .iter()
        .position(|line| normalized_header(line).as_deref() == Some(header.as_str()));

    if let Some(start) = section_idx {
        let end = lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| is_table_header(line))
            .map(|(idx, _)| idx)
            .unwrap_or(lines.len());

        let existing = (start + 1..end).find(|&idx| is_assignment_key(&lines[idx], key));
        if let Some(idx) = existing {
            lines[idx] = assignment;
        } else {
            lines.insert(start + 1, assignment);
        }
        return Ok(ensure_trailing_newline(lines.join("\n")));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(header);
    lines.push(assignment);
    Ok(ensure_trailing_newline(lines.join("\n")))
}

/// Render `value` as a quoted, escaped TOML string.
pub(crate) fn toml_string_literal(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// Fail when `section` is defined before the first table header as
/// `section.key = ...` or `section = { ... }`.
fn reject_root_level_section(lines: &[String], section: &str) -> Result<(), ConfigError> {
    let dotted_prefix = format!("{section}.");
    for line in lines.iter().take_while(|line| !is_table_header(line)) {
        let Some((lhs, _)) = strip_comment(line).split_once('=') else {
            continue;
        };
        let lhs = lhs
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '"' && *ch != '\'')
            .collect::<String>();
        let form = if lhs == section {
            "an inline table"
        } else if lhs.starts_with(&dotted_prefix) {
            "dotted keys"
        } else {
            continue;
        };
        return Err(ConfigError::Invalid(format!(
            "`{section}` is declared with {form}; rewrite it as a `[{section}]` table so settings can be saved"
        )));
    }
    Ok(())
}

/// Canonical `[table]`/`[[array]]` header text, or `None` for other lines.
///
/// Trailing comments and all whitespace are dropped; case is kept.
fn normalized_header(line: &str) -> Option<String> {
    let code = strip_comment(line).trim();
    if !(code.starts_with('[') && code.ends_with(']')) {
        return None;
    }
    Some(code.chars().filter(|ch| !ch.is_whitespace()).collect())
}

fn is_table_header(line: &str) -> bool {
    normalized_header(line).is_some()
}

/// Cut a trailing `# comment`, ignoring `#` inside quoted strings.
fn strip_comment(line: &str) -> &str {
    let mut in_basic = false;
    let mut in_literal = false;
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '\\' if in_basic && !escaped => {
                escaped = true;
                continue;
            }
            '"' if !in_literal && !escaped => in_basic = !in_basic,
            '\'' if !in_basic => in_literal = !in_literal,
            '#' if !in_basic && !in_literal => return &line[..idx],
            _ => {}
        }
        escaped = false;
    }
    line
}

/// Return true when `line` assigns a value to `key`, bare or quoted.
fn is_assignment_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let quoted_basic = format!("\"{key}\"");
    let quoted_literal = format!("'{key}'");
    [key, quoted_basic.as_str(), quoted_literal.as_str()]
        .iter()
        .filter_map(|candidate| trimmed.strip_prefix(candidate))
        .any(|rest| rest.trim_start().starts_with('='))
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
