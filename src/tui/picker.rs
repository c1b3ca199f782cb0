//! Interactive profile picker.
//!
//! On a TTY the picker uses raw mode with arrow keys, Enter, and Esc. When
//! stdin or stderr is not a terminal it falls back to a numbered prompt.

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use crate::selector::ProfileCard;
use crate::tui::cards::picker_option_label;
use crate::tui::settings;
use crate::tui::text::{terminal_columns, wrapped_rows};

/// Let the user pick one card; returns the chosen card's index.
///
/// The initial highlight is the currently selected card (or the first).
/// `Ok(None)` means the user cancelled.
pub fn pick_profile(color: bool, cards: &[ProfileCard]) -> io::Result<Option<usize>> {
    if cards.is_empty() {
        return Ok(None);
    }
    let options = cards
        .iter()
        .map(|card| picker_option_label(card, color))
        .collect::<Vec<_>>();
    let initial = cards.iter().position(|card| card.selected).unwrap_or(0);

    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        let stdin = io::stdin();
        return pick_from_list_fallback(
            &mut stdin.lock(),
            &mut io::stderr(),
            settings::SECTION_TITLE,
            &options,
        );
    }
    pick_from_list_interactive(
        color,
        settings::SECTION_TITLE,
        settings::PICKER_HELP,
        &options,
        initial,
    )
}

/// Numbered prompt used when no TTY is available.
pub(crate) fn pick_from_list_fallback<R, W>(
    input: &mut R,
    output: &mut W,
    title: &str,
    options: &[String],
) -> io::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{} {title}", settings::GLYPH_SECTION_BULLET)?;
    for (idx, option) in options.iter().enumerate() {
        writeln!(output, "{}{}. {}", settings::INDENT_1, idx + 1, option)?;
    }
    write!(output, "{}pick (empty to cancel): ", settings::INDENT_1)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let Ok(index) = trimmed.parse::<usize>() else {
        return Ok(None);
    };
    if index == 0 || index > options.len() {
        return Ok(None);
    }
    Ok(Some(index - 1))
}

fn pick_from_list_interactive(
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    initial_selection: usize,
) -> io::Result<Option<usize>> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut selected = initial_selection.min(options.len().saturating_sub(1));
    let mut previous_rows = 0usize;

    loop {
        previous_rows = render_picker(
            &mut stderr,
            color,
            title,
            help,
            options,
            selected,
            previous_rows,
        )?;

        if !event::poll(Duration::from_millis(settings::PICKER_EVENT_POLL_MS))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = if selected == 0 {
                    options.len().saturating_sub(1)
                } else {
                    selected - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1) % options.len();
            }
            KeyCode::Enter => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(Some(selected));
            }
            KeyCode::Esc => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            _ => {}
        }
    }
}

fn render_picker(
    stderr: &mut io::Stderr,
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    selected: usize,
    previous_rows: usize,
) -> io::Result<usize> {
    if previous_rows > 0 {
        stderr.queue(MoveUp(previous_rows as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;

    let cols = terminal_columns();
    let mut total_rows = 0usize;
    let title_plain = format!("{} {title}", settings::GLYPH_SECTION_BULLET);
    total_rows += wrapped_rows(&title_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
        ))?;
        stderr.queue(Print(" "))?;
        stderr.queue(PrintStyledContent(
            title.with(settings::COLOR_SECTION_TITLE).bold(),
        ))?;
    } else {
        stderr.queue(Print(&title_plain))?;
    }

    let help_plain = format!("{}{help}", settings::INDENT_1);
    stderr.queue(Print("\r\n"))?;
    total_rows += wrapped_rows(&help_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            help_plain.as_str().with(settings::COLOR_PICKER_HELP),
        ))?;
    } else {
        stderr.queue(Print(&help_plain))?;
    }

    for (idx, option) in options.iter().enumerate() {
        let active = idx == selected;
        let marker = if active {
            settings::PICKER_ACTIVE
        } else {
            settings::PICKER_INACTIVE
        };
        let line_plain = format!("{}{marker} {option}", settings::INDENT_1);
        stderr.queue(Print("\r\n"))?;
        total_rows += wrapped_rows(&line_plain, cols);
        if color {
            let (marker_color, text_color) = if active {
                (settings::COLOR_PICKER_ACTIVE, settings::COLOR_PICKER_ACTIVE_TEXT)
            } else {
                (settings::COLOR_PICKER_INACTIVE, settings::COLOR_PICKER_TEXT)
            };
            stderr.queue(Print(settings::INDENT_1))?;
            stderr.queue(PrintStyledContent(marker.with(marker_color)))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(option.as_str().with(text_color)))?;
        } else {
            stderr.queue(Print(&line_plain))?;
        }
    }

    stderr.flush()?;
    Ok(total_rows.saturating_sub(1))
}

fn clear_surface(stderr: &mut io::Stderr, previous_rows: usize) -> io::Result<()> {
    if previous_rows > 0 {
        stderr.queue(MoveUp(previous_rows as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;
    stderr.flush()
}

struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["auto".to_string(), "quick".to_string()]
    }

    fn pick(input: &str) -> (Option<usize>, String) {
        let mut reader = io::Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let picked = pick_from_list_fallback(&mut reader, &mut out, "profiles", &options()).unwrap();
        (picked, String::from_utf8(out).unwrap())
    }

    #[test]
    fn fallback_lists_numbered_options() {
        let (picked, out) = pick("2\n");
        assert_eq!(picked, Some(1));
        assert!(out.contains("  1. auto\n"));
        assert!(out.contains("  2. quick\n"));
    }

    #[test]
    fn fallback_cancels_on_empty_eof_or_garbage() {
        assert_eq!(pick("\n").0, None);
        assert_eq!(pick("").0, None);
        assert_eq!(pick("two\n").0, None);
    }

    #[test]
    fn fallback_rejects_out_of_range() {
        assert_eq!(pick("0\n").0, None);
        assert_eq!(pick("3\n").0, None);
    }
}
