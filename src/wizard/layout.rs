//! Panel and list sizes derived from the terminal size.

/// Terminal size assumed before the first resize event.
pub const DEFAULT_TERMINAL: (u16, u16) = (96, 36);

const DEFAULT_PANEL: (u16, u16) = (88, 32);

/// Columns lost to the panel border and horizontal padding.
pub const PANEL_CHROME_WIDTH: u16 = 6;

/// Rows of the panel not available to the stage list.
const RESERVED_ROWS: i32 = 14;

/// Computed sizes for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub panel_width: u16,
    pub panel_height: u16,
    pub list_width: u16,
    pub list_height: u16,
    pub name_width: u16,
}

impl Default for Layout {
    fn default() -> Self {
        let (width, height) = DEFAULT_TERMINAL;
        Self::with_panel(width, height, DEFAULT_PANEL.0, DEFAULT_PANEL.1)
    }
}

/// Lower bound wins when the bounds cross.
fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

fn to_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

impl Layout {
    /// Sizes for a terminal of `width` × `height` cells.
    ///
    /// The panel takes 80% of the terminal, at least 64×28 and at most the
    /// terminal minus a 2-cell margin on each side.
    pub fn from_size(width: u16, height: u16) -> Self {
        let (w, h) = (i32::from(width), i32::from(height));
        let panel_width = clamp((f64::from(w) * 0.8) as i32, 64, w - 4);
        let panel_height = clamp((f64::from(h) * 0.8) as i32, 28, h - 4);
        Self::with_panel(width, height, to_u16(panel_width), to_u16(panel_height))
    }

    fn with_panel(width: u16, height: u16, panel_width: u16, panel_height: u16) -> Self {
        let (pw, ph) = (i32::from(panel_width), i32::from(panel_height));
        Self {
            width,
            height,
            panel_width,
            panel_height,
            list_width: to_u16(clamp(pw - 8, 56, 100)),
            list_height: to_u16(clamp(ph - RESERVED_ROWS, 6, 30)),
            name_width: to_u16(clamp(pw - 14, 24, 72)),
        }
    }

    /// Width of the area inside the panel's border and padding.
    pub fn content_width(&self) -> u16 {
        self.panel_width.saturating_sub(PANEL_CHROME_WIDTH).max(1)
    }
}
