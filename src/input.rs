use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::ui::viewport::Viewport;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Left mouse press at canvas pixel coordinates.
    Click { x: i32, y: i32 },
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Collects terminal events for one frame and maps them to [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains terminal events until `deadline`, returning every mapped input
    /// in arrival order.
    ///
    /// Mouse coordinates are translated through `viewport`, the canvas
    /// placement of the most recently drawn frame. Without a viewport (the
    /// terminal is too small to show the canvas) clicks are dropped.
    pub fn poll_until(
        &mut self,
        deadline: Instant,
        viewport: Option<Viewport>,
    ) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();

        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }

            if let Some(input) = map_event(&event::read()?, viewport) {
                inputs.push(input);
            }

            if timeout == Duration::ZERO {
                break;
            }
        }

        Ok(inputs)
    }
}

/// Maps one raw terminal event to a game input.
#[must_use]
pub fn map_event(event: &Event, viewport: Option<Viewport>) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, viewport?),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    // Edge-triggered: auto-repeat and release events never steer the snake.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Direction::Right,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Some(GameInput::Quit),
        _ => return None,
    };

    Some(GameInput::Direction(direction))
}

fn map_mouse(mouse: MouseEvent, viewport: Viewport) -> Option<GameInput> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let (x, y) = viewport.to_canvas(mouse.column, mouse.row)?;
    Some(GameInput::Click { x, y })
}
