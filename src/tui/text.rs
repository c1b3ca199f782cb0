//! Shared text formatting helpers used by terminal rendering.

use crossterm::terminal;

use crate::tui::settings;

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Clip a string to at most `max_width` visible characters.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Current terminal width, or a fixed fallback when unavailable.
pub fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(settings::BLOCK_FALLBACK_COLUMNS)
}

/// Rows a single logical line occupies once the terminal soft-wraps it.
pub fn wrapped_rows(text: &str, cols: usize) -> usize {
    if cols == 0 {
        return 1;
    }
    visible_width(text).max(1).div_ceil(cols)
}

/// Wrap a single line to fit `max_width`.
///
/// This prefers whitespace boundaries when possible and falls back to hard
/// wrapping long words/tokens.
pub fn wrap_for_block(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + max_width).min(chars.len());
        if end == chars.len() {
            out.push(chars[start..end].iter().collect());
            break;
        }
        if chars[end].is_whitespace() {
            out.push(chars[start..end].iter().collect());
            start = end;
            while start < chars.len() && chars[start].is_whitespace() {
                start += 1;
            }
            continue;
        }

        let mut split = None;
        for idx in (start + 1..end).rev() {
            if chars[idx].is_whitespace() {
                split = Some(idx);
                break;
            }
        }

        if let Some(split_idx) = split {
            out.push(chars[start..split_idx].iter().collect());
            start = split_idx;
            while start < chars.len() && chars[start].is_whitespace() {
                start += 1;
            }
            continue;
        }

        out.push(chars[start..end].iter().collect());
        start = end;
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Wrap `text` to `max_width` and keep at most `max_lines` rows.
///
/// When rows are dropped, the last kept row is shortened to make room for
/// `ellipsis`.
pub fn clamp_lines(text: &str, max_width: usize, max_lines: usize, ellipsis: &str) -> Vec<String> {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() || max_lines == 0 {
        return Vec::new();
    }
    let mut rows = wrap_for_block(&flat, max_width);
    if rows.len() <= max_lines {
        return rows;
    }

    rows.truncate(max_lines);
    if let Some(last) = rows.last_mut() {
        let keep = max_width.saturating_sub(visible_width(ellipsis));
        let mut clipped = clip_to_width(last, keep).trim_end().to_string();
        clipped.push_str(ellipsis);
        *last = clipped;
    }
    rows
}
