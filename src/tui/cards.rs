//! Profile card rendering.
//!
//! Cards are written through any `Write` sink so the same code serves
//! stdout, stderr, and in-memory buffers in tests.

use std::io::{self, Write};

use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;

use crate::selector::ProfileCard;
use crate::tui::settings;
use crate::tui::text::clamp_lines;

/// Width available to description text inside a card.
pub fn description_width(columns: usize) -> usize {
    columns
        .saturating_sub(settings::INDENT_2.len() + settings::BLOCK_RIGHT_MARGIN)
        .max(settings::BLOCK_MIN_COLUMNS)
}

/// Queue the section header plus every card, then flush.
pub fn write_profile_section<W>(
    out: &mut W,
    cards: &[ProfileCard],
    color: bool,
    columns: usize,
) -> io::Result<()>
where
    W: Write,
{
    write_section_header(out, color)?;
    for card in cards {
        out.queue(Print("\n"))?;
        write_card(out, card, color, columns)?;
    }
    out.flush()
}

fn write_section_header<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    if color {
        out.queue(PrintStyledContent(
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
        ))?;
        out.queue(Print(" "))?;
        out.queue(PrintStyledContent(
            settings::SECTION_TITLE
                .with(settings::COLOR_SECTION_TITLE)
                .bold(),
        ))?;
        out.queue(Print("\n"))?;
        out.queue(Print(settings::INDENT_1))?;
        out.queue(PrintStyledContent(
            settings::SECTION_DESCRIPTION.with(settings::COLOR_SECTION_DESCRIPTION),
        ))?;
        out.queue(Print("\n"))?;
        out.queue(Print(settings::INDENT_1))?;
        out.queue(PrintStyledContent(
            settings::SECTION_NOTE.with(settings::COLOR_SECTION_DESCRIPTION),
        ))?;
        out.queue(Print("\n"))?;
    } else {
        out.queue(Print(format!(
            "{} {}\n{}{}\n{}{}\n",
            settings::GLYPH_SECTION_BULLET,
            settings::SECTION_TITLE,
            settings::INDENT_1,
            settings::SECTION_DESCRIPTION,
            settings::INDENT_1,
            settings::SECTION_NOTE,
        )))?;
    }
    Ok(())
}

/// Queue one card: header, clamped description, badge line.
pub fn write_card<W: Write>(
    out: &mut W,
    card: &ProfileCard,
    color: bool,
    columns: usize,
) -> io::Result<()> {
    let marker = settings::selection_marker(card.selected, color);
    let icon = card.icon.glyph(color);
    let description = clamp_lines(
        &card.description,
        description_width(columns),
        settings::DESCRIPTION_MAX_LINES,
        settings::ellipsis(color),
    );

    if color {
        let (name_color, icon_color) = if card.selected {
            (settings::COLOR_CARD_NAME_SELECTED, settings::COLOR_CARD_ICON_SELECTED)
        } else {
            (settings::COLOR_CARD_NAME, settings::COLOR_CARD_ICON)
        };
        out.queue(Print(settings::INDENT_1))?;
        out.queue(PrintStyledContent(
            marker.with(settings::COLOR_SELECTED_MARK).bold(),
        ))?;
        out.queue(Print(" "))?;
        out.queue(PrintStyledContent(icon.with(icon_color)))?;
        out.queue(Print(" "))?;
        out.queue(PrintStyledContent(card.name.as_str().with(name_color).bold()))?;
        out.queue(Print("\n"))?;
        for row in &description {
            out.queue(Print(settings::INDENT_2))?;
            out.queue(PrintStyledContent(
                row.as_str().with(settings::COLOR_CARD_DESCRIPTION),
            ))?;
            out.queue(Print("\n"))?;
        }
        out.queue(Print(settings::INDENT_2))?;
        write_badge(out, &card.model_label)?;
        out.queue(Print(" "))?;
        write_badge(out, &card.thinking_label)?;
        out.queue(Print("\n"))?;
    } else {
        out.queue(Print(format!(
            "{}{marker} {icon} {}\n",
            settings::INDENT_1,
            card.name
        )))?;
        for row in &description {
            out.queue(Print(format!("{}{row}\n", settings::INDENT_2)))?;
        }
        out.queue(Print(format!(
            "{}[{}] [{}]\n",
            settings::INDENT_2,
            card.model_label,
            card.thinking_label
        )))?;
    }
    Ok(())
}

fn write_badge<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.queue(PrintStyledContent(
        format!(" {text} ")
            .with(settings::COLOR_BADGE_TEXT)
            .on(settings::COLOR_BADGE_BG),
    ))?;
    Ok(())
}

/// Queue a single warning line.
pub fn write_warning<W: Write>(out: &mut W, message: &str, color: bool) -> io::Result<()> {
    if color {
        out.queue(PrintStyledContent(
            settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold(),
        ))?;
        out.queue(Print(format!(" {message}\n")))?;
    } else {
        out.queue(Print(format!("{} {message}\n", settings::LABEL_WARNING)))?;
    }
    out.flush()
}

/// One-line summary of a card for list pickers.
pub fn picker_option_label(card: &ProfileCard, color: bool) -> String {
    format!(
        "{} {} {}  [{}] [{}]",
        settings::selection_marker(card.selected, color),
        card.icon.glyph(color),
        card.name,
        card.model_label,
        card.thinking_label
    )
}
