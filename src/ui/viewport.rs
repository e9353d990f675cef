use ratatui::layout::Rect;

use crate::config::{PIXELS_PER_COLUMN, PIXELS_PER_ROW, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::layout::PixelRect;

/// Canvas size in terminal columns.
pub const CANVAS_COLUMNS: u16 = (SCREEN_WIDTH / PIXELS_PER_COLUMN) as u16;

/// Canvas size in terminal rows.
pub const CANVAS_ROWS: u16 = (SCREEN_HEIGHT / PIXELS_PER_ROW) as u16;

/// Placement of the pixel canvas inside the terminal.
///
/// Both the rasterizer and the mouse translation go through the same
/// viewport, so a click lands on exactly the cells that were drawn there.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    /// Centers the canvas inside `area`. Returns `None` when it does not fit.
    #[must_use]
    pub fn fit(area: Rect) -> Option<Self> {
        if area.width < CANVAS_COLUMNS || area.height < CANVAS_ROWS {
            return None;
        }

        let x = area.x + (area.width - CANVAS_COLUMNS) / 2;
        let y = area.y + (area.height - CANVAS_ROWS) / 2;

        Some(Self {
            area: Rect::new(x, y, CANVAS_COLUMNS, CANVAS_ROWS),
        })
    }

    /// Terminal cells occupied by the whole canvas.
    #[must_use]
    pub fn area(self) -> Rect {
        self.area
    }

    /// Returns the terminal cell containing canvas pixel `(x, y)`, clamped to
    /// the canvas.
    #[must_use]
    pub fn to_terminal(self, x: i32, y: i32) -> (u16, u16) {
        let column = (x / PIXELS_PER_COLUMN).clamp(0, i32::from(CANVAS_COLUMNS) - 1);
        let row = (y / PIXELS_PER_ROW).clamp(0, i32::from(CANVAS_ROWS) - 1);

        // Both values were clamped into u16 range above.
        (
            self.area.x + column as u16,
            self.area.y + row as u16,
        )
    }

    /// Returns the terminal cells covered by a pixel rectangle, clipped to the
    /// canvas. Empty rectangles map to `None`.
    #[must_use]
    pub fn span(self, rect: PixelRect) -> Option<Rect> {
        let left = rect.x.max(0);
        let top = rect.y.max(0);
        let right = (rect.x + rect.width).min(SCREEN_WIDTH);
        let bottom = (rect.y + rect.height).min(SCREEN_HEIGHT);
        if left >= right || top >= bottom {
            return None;
        }

        let first_column = left / PIXELS_PER_COLUMN;
        let first_row = top / PIXELS_PER_ROW;
        let end_column = ceil_div(right, PIXELS_PER_COLUMN);
        let end_row = ceil_div(bottom, PIXELS_PER_ROW);

        Some(Rect::new(
            self.area.x + u16::try_from(first_column).ok()?,
            self.area.y + u16::try_from(first_row).ok()?,
            u16::try_from(end_column - first_column).ok()?,
            u16::try_from(end_row - first_row).ok()?,
        ))
    }

    /// Maps a terminal cell back to the canvas pixel at the cell's center.
    /// Cells outside the canvas yield `None`.
    #[must_use]
    pub fn to_canvas(self, column: u16, row: u16) -> Option<(i32, i32)> {
        if column < self.area.x
            || row < self.area.y
            || column >= self.area.right()
            || row >= self.area.bottom()
        {
            return None;
        }

        let x = i32::from(column - self.area.x) * PIXELS_PER_COLUMN + PIXELS_PER_COLUMN / 2;
        let y = i32::from(row - self.area.y) * PIXELS_PER_ROW + PIXELS_PER_ROW / 2;
        Some((x, y))
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    (value + divisor - 1) / divisor
}
