use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Canvas width in pixels.
pub const SCREEN_WIDTH: i32 = 800;

/// Canvas height in pixels.
pub const SCREEN_HEIGHT: i32 = 600;

/// Edge length of one square grid cell in pixels.
pub const CELL_SIZE: i32 = 20;

/// Playfield derived from the canvas and cell size (40x30).
pub const GRID: GridSize = GridSize {
    width: (SCREEN_WIDTH / CELL_SIZE) as u16,
    height: (SCREEN_HEIGHT / CELL_SIZE) as u16,
};

/// Cell the snake starts in after launch and after every restart.
pub const START_POSITION: Position = Position { x: 10, y: 10 };

/// Heading the snake starts with.
pub const START_DIRECTION: Direction = Direction::Right;

/// Frames (and simulation ticks) per second.
pub const TARGET_FPS: u64 = 10;

/// Canvas pixels covered by one terminal column.
pub const PIXELS_PER_COLUMN: i32 = 10;

/// Canvas pixels covered by one terminal row.
pub const PIXELS_PER_ROW: i32 = 20;

/// Font size at or above which text is rendered bold.
pub const BOLD_TEXT_SIZE: u16 = 30;

/// Fixed colors for every drawable element.
#[derive(Debug)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub food: Color,
    pub text: Color,
    pub title: Color,
    pub button: Color,
    pub button_label: Color,
}

pub const PALETTE: Palette = Palette {
    background: Color::Black,
    snake: Color::Green,
    food: Color::Red,
    text: Color::White,
    title: Color::Red,
    button: Color::Gray,
    button_label: Color::Black,
};
