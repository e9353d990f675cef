use crate::config::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::snake::Position;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true when `(x, y)` lies strictly inside the rectangle.
    ///
    /// Points on the border do not count, matching the restart button's
    /// hit-test.
    #[must_use]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }
}

/// A text anchor: top-left corner plus nominal font size.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TextAnchor {
    pub x: i32,
    pub y: i32,
    pub size: u16,
}

const BUTTON_WIDTH: i32 = 120;
const BUTTON_HEIGHT: i32 = 40;
const BUTTON_OFFSET_Y: i32 = 60;

/// In-game score readout in the top-left corner.
pub const HUD_SCORE: TextAnchor = TextAnchor {
    x: 10,
    y: 10,
    size: 20,
};

/// "GAME OVER!" title.
pub const GAME_OVER_TITLE: TextAnchor = TextAnchor {
    x: SCREEN_WIDTH / 2 - 100,
    y: SCREEN_HEIGHT / 2 - 40,
    size: 40,
};

/// Final score line under the title.
pub const GAME_OVER_SCORE: TextAnchor = TextAnchor {
    x: SCREEN_WIDTH / 2 - 50,
    y: SCREEN_HEIGHT / 2,
    size: 30,
};

/// Label drawn on top of the restart button.
pub const RESTART_LABEL: TextAnchor = TextAnchor {
    x: SCREEN_WIDTH / 2 - 50,
    y: SCREEN_HEIGHT / 2 + 70,
    size: 20,
};

/// The clickable "Play Again" button, centered horizontally below the middle
/// of the canvas. Drawing and hit-testing both use this rectangle.
#[must_use]
pub const fn restart_button() -> PixelRect {
    PixelRect::new(
        SCREEN_WIDTH / 2 - BUTTON_WIDTH / 2,
        SCREEN_HEIGHT / 2 + BUTTON_OFFSET_Y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// Pixel rectangle of one grid cell.
#[must_use]
pub fn cell_rect(position: Position) -> PixelRect {
    PixelRect::new(
        position.x * CELL_SIZE,
        position.y * CELL_SIZE,
        CELL_SIZE,
        CELL_SIZE,
    )
}
