//! The animated title block: block-letter art revealed a few columns per
//! tick, framed by two border lines with a travelling spark.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::palette::WizardPalette;

/// Columns uncovered per reveal tick.
pub const REVEAL_COLUMNS: usize = 3;

const ART: [&str; 9] = [
    "▄███▄ ▄███▄  ▄█▄  █▀▀▀▀ █▀▀▀▀ ▄███▄ █     ▄██▄",
    "▀▄    █     █▀ ▀█ █▀▀   █▀▀   █   █ █     █  █",
    " ▀██▄ █     █▀▀▀█ █     █     █   █ █     █  █",
    "▀███▀ ▀███▀ ▀   ▀ ▀     ▀     ▀███▀ ▀▀▀▀▀ ▀██▀",
    "",
    "        █   █ ▀█▀ ▀▀▀█  ▄█▄  █▀▀▄ ▄██▄        ",
    "        █ █ █  █    █▀ █▀ ▀█ █▀▀▄ █  █        ",
    "        █▄█▄█  █   █▀  █▀▀▀█ █  █ █  █        ",
    "        ▀   ▀ ▀▀▀ █▀▀▀ ▀   ▀ ▀  ▀ ▀██▀        ",
];

/// Rows the title block occupies: two borders around the art.
pub const TITLE_HEIGHT: u16 = ART.len() as u16 + 2;

pub fn art() -> &'static [&'static str] {
    &ART
}

/// Width in characters of the widest art line.
pub fn art_width() -> usize {
    ART.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Ticks until every art column is visible.
pub fn reveal_total_ticks() -> u32 {
    art_width().div_ceil(REVEAL_COLUMNS) as u32
}

/// Columns uncovered after `frame` ticks.
pub fn revealed_columns(frame: u32) -> usize {
    (frame as usize)
        .saturating_mul(REVEAL_COLUMNS)
        .min(art_width())
}

/// How one art column is drawn on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    /// Part of the band uncovered by the latest tick.
    Flash,
    Shown,
}

pub fn reveal_state(col: usize, frame: u32) -> Reveal {
    let revealed = revealed_columns(frame);
    if col >= revealed {
        Reveal::Hidden
    } else if col + REVEAL_COLUMNS >= revealed && frame < reveal_total_ticks() {
        Reveal::Flash
    } else {
        Reveal::Shown
    }
}

/// Spark column on a border of `width` cells.
pub fn spark_position(frame: u32, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    frame as usize % width
}

fn push_char(spans: &mut Vec<Span<'static>>, ch: char, style: Style) {
    if let Some(last) = spans.last_mut() {
        if last.style == style {
            last.content.to_mut().push(ch);
            return;
        }
    }
    spans.push(Span::styled(ch.to_string(), style));
}

/// One border line with a spark glowing at `spark_position(frame, width)`.
pub fn border_line(width: usize, frame: u32, palette: &WizardPalette) -> Line<'static> {
    if width < 2 {
        return Line::default();
    }

    let spark = spark_position(frame, width);
    let mut spans = Vec::new();
    for i in 0..width {
        let ch = if i == 0 {
            '╾'
        } else if i == width - 1 {
            '╼'
        } else {
            '═'
        };
        let dist = spark.abs_diff(i);
        let style = match palette.glow.get(dist) {
            Some(&color) if dist == 0 => palette.bold(color),
            Some(&color) => palette.fg(color),
            None => palette.fg(palette.soft),
        };
        push_char(&mut spans, ch, style);
    }
    Line::from(spans)
}

/// One art line centered in `width`, gated by the reveal.
pub fn art_line(index: usize, width: usize, frame: u32, palette: &WizardPalette) -> Line<'static> {
    let aw = art_width();
    let left_pad = width.saturating_sub(aw) / 2;
    let blank = palette.panel();
    let mut spans = vec![Span::styled(" ".repeat(left_pad), blank)];

    let text = ART.get(index).copied().unwrap_or("");
    let color = palette.art.get(index).copied().unwrap_or(palette.text);
    let mut drawn = 0;
    for (col, ch) in text.chars().enumerate() {
        let (ch, style) = match reveal_state(col, frame) {
            Reveal::Hidden => (' ', blank),
            Reveal::Flash => (ch, palette.bold(palette.flash)),
            Reveal::Shown => (ch, palette.bold(color)),
        };
        push_char(&mut spans, ch, style);
        drawn += 1;
    }

    let right_pad = width.saturating_sub(left_pad + drawn);
    spans.push(Span::styled(" ".repeat(right_pad), blank));
    Line::from(spans)
}

/// The full title block for a content area `width` cells wide.
///
/// The bottom border runs half a width ahead of the top one so the two
/// sparks are never stacked.
pub fn title_lines(width: usize, frame: u32, palette: &WizardPalette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ART.len() + 2);
    lines.push(border_line(width, frame, palette));
    for index in 0..ART.len() {
        lines.push(art_line(index, width, frame, palette));
    }
    let offset = u32::try_from(width / 2).unwrap_or(0);
    lines.push(border_line(width, frame.wrapping_add(offset), palette));
    lines
}
