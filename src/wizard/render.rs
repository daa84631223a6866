//! Drawing the wizard.
//!
//! [`render`] is a pure function of the wizard state, the animation state
//! and the layout: it only writes into the given [`Buffer`].
//!
//! ```text
//!            ╭──────────────── panel ─────────────────╮
//!            │  ╾═══════════ spark border ════════╼   │
//!            │        SCAFFOLD / WIZARD art           │
//!            │  ╾═══════════ spark border ════════╼   │
//!            │  Stage title                 ┐         │
//!            │  Stage subtitle              │ slides  │
//!            │  list / name input / summary ┘         │
//!            │  Step 2  ████░░░░  •  enter continue   │
//!            ╰────────────────────────────────────────╯
//! ```

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Widget};

use super::animation::AnimationState;
use super::keys::BindingSet;
use super::layout::Layout;
use super::name_input::NAME_PLACEHOLDER;
use super::palette::WizardPalette;
use super::selection::{ListItem, SelectionList};
use super::stage::{Stage, WizardState};
use super::title::title_lines;

/// Cells in the status line progress bar.
pub const PROGRESS_WIDTH: usize = 20;

const NAME_TIP: &str = "Tip: Use a short, kebab-case name";
const CONFIRM_HINT: &str = "Press Enter to create project";

/// Draw the whole wizard into `buf`.
pub fn render(
    state: &WizardState,
    anim: &AnimationState,
    layout: &Layout,
    palette: &WizardPalette,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    buf.set_style(area, Style::default().bg(palette.background));

    let panel = panel_rect(layout, anim, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.fg(palette.soft))
        .padding(Padding::new(2, 2, 1, 1))
        .style(palette.panel());
    let inner = block.inner(panel);
    block.render(panel, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut rows = Rows::new(inner);
    for line in title_lines(usize::from(inner.width), anim.title_frame, palette) {
        rows.push(buf, &line);
    }

    // Stage title, subtitle and body share one slide offset.
    let status_rows = 1;
    let body_height = rows
        .remaining()
        .saturating_sub(2 + status_rows)
        .min(layout.list_height);
    let slide_height = 2 + body_height;
    let slide = Rect::new(0, 0, inner.width, slide_height);
    let mut scratch = Buffer::empty(slide);
    scratch.set_style(slide, palette.panel());
    render_stage(state, layout, palette, slide, &mut scratch);
    if let Some(target) = rows.take(slide_height) {
        blit_shifted(
            &scratch,
            buf,
            target,
            anim.transition_offset(),
            palette.panel(),
        );
    }

    let status = status_line(state, palette, usize::from(inner.width));
    rows.push(buf, &status);
}

/// Panel rectangle centered in `area`, scaled during the entrance.
pub fn panel_rect(layout: &Layout, anim: &AnimationState, area: Rect) -> Rect {
    let (mut width, mut height) = (layout.panel_width, layout.panel_height);
    if !anim.panel_ready() {
        let scale = anim.entrance_scale().max(0.0);
        width = ((f64::from(width) * scale) as u16).max(1);
        height = ((f64::from(height) * scale) as u16).max(1);
    }
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Sequential row writer clipped to an area.
struct Rows {
    area: Rect,
    next: u16,
}

impl Rows {
    fn new(area: Rect) -> Self {
        Self { area, next: 0 }
    }

    fn remaining(&self) -> u16 {
        self.area.height.saturating_sub(self.next)
    }

    fn push(&mut self, buf: &mut Buffer, line: &Line<'_>) {
        if let Some(row) = self.take(1) {
            buf.set_line(row.x, row.y, line, row.width);
        }
    }

    fn take(&mut self, height: u16) -> Option<Rect> {
        let height = height.min(self.remaining());
        if height == 0 {
            return None;
        }
        let rect = Rect::new(self.area.x, self.area.y + self.next, self.area.width, height);
        self.next += height;
        Some(rect)
    }
}

/// Copy `src` into `dst` at `target`, shifted `offset` columns.
///
/// A positive offset pads on the left and cuts the right edge; a negative
/// one drops leading columns and pads the end. Uncovered cells get `fill`.
pub fn blit_shifted(src: &Buffer, dst: &mut Buffer, target: Rect, offset: i32, fill: Style) {
    let mut blank = Cell::default();
    blank.set_style(fill);

    let src_width = i32::from(src.area.width);
    for y in 0..target.height.min(src.area.height) {
        for x in 0..target.width {
            let sx = i32::from(x) - offset;
            let cell = if (0..src_width).contains(&sx) {
                src[(src.area.x + sx as u16, src.area.y + y)].clone()
            } else {
                blank.clone()
            };
            if let Some(out) = dst.cell_mut((target.x + x, target.y + y)) {
                *out = cell;
            }
        }
    }
}

fn render_stage(
    state: &WizardState,
    layout: &Layout,
    palette: &WizardPalette,
    area: Rect,
    buf: &mut Buffer,
) {
    let stage = state.stage();
    let mut rows = Rows::new(area);
    rows.push(
        buf,
        &Line::styled(stage.title(), palette.bold(palette.text_soft)),
    );
    rows.push(buf, &Line::styled(stage.subtitle(), palette.fg(palette.muted)));

    let Some(body) = rows.take(rows.remaining()) else {
        return;
    };
    match stage {
        Stage::Language => render_list(state.languages(), palette, body, buf),
        Stage::Framework => render_list(state.frameworks(), palette, body, buf),
        Stage::Libraries => render_list(state.libraries(), palette, body, buf),
        Stage::Name => render_name(state, layout, palette, body, buf),
        Stage::Confirm => render_summary(state, palette, body, buf),
        Stage::Done => {}
    }
}

/// Two rows per item: marker and label, then the indented description.
fn render_list<T: ListItem>(
    list: &SelectionList<T>,
    palette: &WizardPalette,
    area: Rect,
    buf: &mut Buffer,
) {
    let visible = usize::from(area.height / 2).max(1);
    let start = list.scroll_offset(visible);
    let selected = list.index();
    let mut rows = Rows::new(area);

    for (i, item) in list.items().iter().enumerate().skip(start).take(visible) {
        let is_selected = selected == Some(i);
        let (marker, label_style) = if is_selected {
            (
                Span::styled("› ", palette.bold(palette.accent)),
                palette.bold(palette.text),
            )
        } else {
            (Span::styled("  ", palette.panel()), palette.fg(palette.text_soft))
        };
        rows.push(
            buf,
            &Line::from(vec![marker, Span::styled(item.label(), label_style)]),
        );
        if !item.description().is_empty() {
            rows.push(
                buf,
                &Line::styled(
                    format!("  {}", item.description()),
                    palette.fg(palette.muted),
                ),
            );
        }
    }
}

fn render_name(
    state: &WizardState,
    layout: &Layout,
    palette: &WizardPalette,
    area: Rect,
    buf: &mut Buffer,
) {
    let mut rows = Rows::new(area);
    rows.push(buf, &Line::styled("Project name", palette.fg(palette.muted)));
    rows.take(1);

    if let Some(row) = rows.take(3) {
        let width = (layout.name_width + 4).min(row.width);
        let box_area = Rect::new(row.x, row.y, width, row.height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.fg(palette.accent))
            .padding(Padding::horizontal(1))
            .style(palette.panel());
        let field = block.inner(box_area);
        block.render(box_area, buf);
        buf.set_line(field.x, field.y, &name_field(state, palette), field.width);
    }

    if let Some(error) = state.name_error() {
        rows.push(
            buf,
            &Line::styled(format!("  {}", error), palette.fg(palette.error)),
        );
    }
    rows.take(1);
    rows.push(buf, &Line::styled(NAME_TIP, palette.fg(palette.muted)));
}

/// The name text with the cursor drawn as a reversed cell.
fn name_field(state: &WizardState, palette: &WizardPalette) -> Line<'static> {
    let input = state.name_input();
    let cursor_style = palette.fg(palette.text).add_modifier(Modifier::REVERSED);
    if input.is_empty() {
        let mut placeholder = NAME_PLACEHOLDER.chars();
        let first = placeholder.next().map(String::from).unwrap_or_default();
        return Line::from(vec![
            Span::styled(first, cursor_style.fg(palette.muted)),
            Span::styled(placeholder.collect::<String>(), palette.fg(palette.muted)),
        ]);
    }

    let chars: Vec<char> = input.value().chars().collect();
    let cursor = input.cursor();
    let before: String = chars[..cursor].iter().collect();
    let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".into());
    let after: String = chars.iter().skip(cursor + 1).collect();
    Line::from(vec![
        Span::styled(before, palette.fg(palette.text)),
        Span::styled(at, cursor_style),
        Span::styled(after, palette.fg(palette.text)),
    ])
}

fn render_summary(state: &WizardState, palette: &WizardPalette, area: Rect, buf: &mut Buffer) {
    let pending = state.pending();
    let mut fields = vec![
        ("Language", pending.language.clone()),
        ("Framework", pending.framework.clone()),
    ];
    if !pending.libraries.is_empty() {
        fields.push(("Libraries", pending.libraries.join(", ")));
    }
    fields.push(("Name", pending.name.clone()));

    let mut rows = Rows::new(area);
    for (label, value) in fields {
        rows.push(
            buf,
            &Line::from(vec![
                Span::styled(format!("{:<12}", label), palette.fg(palette.muted)),
                Span::styled(value, palette.bold(palette.text)),
            ]),
        );
    }
    rows.take(1);
    rows.push(buf, &Line::styled(CONFIRM_HINT, palette.fg(palette.muted)));
}

/// Filled and empty cell counts for a progress bar `width` cells wide.
pub fn progress_cells(progress: f64, width: usize) -> (usize, usize) {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    (filled, width - filled)
}

/// Step label, progress bar and the hints for enabled bindings.
pub fn status_line(state: &WizardState, palette: &WizardPalette, width: usize) -> Line<'static> {
    let muted = palette.fg(palette.muted);
    let (filled, empty) = progress_cells(state.progress(), PROGRESS_WIDTH.min(width));

    let mut spans = vec![
        Span::styled(state.step_label(), muted),
        Span::styled("  ", muted),
        Span::styled("█".repeat(filled), palette.fg(palette.accent)),
        Span::styled("░".repeat(empty), palette.fg(palette.soft)),
    ];
    for binding in BindingSet::for_stage(state.stage()).footer_bindings() {
        spans.push(Span::styled("  •  ", muted));
        spans.push(Span::styled(binding.key_label, palette.fg(palette.accent)));
        spans.push(Span::styled(" ", muted));
        spans.push(Span::styled(binding.description, muted));
    }
    Line::from(spans)
}
