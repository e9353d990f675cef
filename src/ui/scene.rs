use ratatui::style::Color;

use crate::config::PALETTE;
use crate::game::GameState;
use crate::ui::layout::{
    cell_rect, restart_button, PixelRect, TextAnchor, GAME_OVER_SCORE, GAME_OVER_TITLE,
    HUD_SCORE, RESTART_LABEL,
};

/// One primitive draw call on the pixel canvas.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: PixelRect,
        color: Color,
    },
    Text {
        anchor: TextAnchor,
        text: String,
        color: Color,
    },
}

impl DrawCommand {
    fn text(anchor: TextAnchor, text: impl Into<String>, color: Color) -> Self {
        Self::Text {
            anchor,
            text: text.into(),
            color,
        }
    }
}

/// Builds the draw commands for one frame, in painting order.
///
/// While running this is the board plus the score readout; once the game is
/// over the board is replaced by the game-over panel and restart button.
#[must_use]
pub fn build_scene(state: &GameState) -> Vec<DrawCommand> {
    if state.is_over() {
        return game_over_scene(state.score);
    }

    let mut commands: Vec<DrawCommand> = state
        .snake
        .segments()
        .map(|segment| DrawCommand::FillRect {
            rect: cell_rect(*segment),
            color: PALETTE.snake,
        })
        .collect();

    commands.push(DrawCommand::FillRect {
        rect: cell_rect(state.food.position),
        color: PALETTE.food,
    });
    commands.push(DrawCommand::text(
        HUD_SCORE,
        score_text(state.score),
        PALETTE.text,
    ));

    commands
}

fn game_over_scene(score: u32) -> Vec<DrawCommand> {
    vec![
        DrawCommand::text(GAME_OVER_TITLE, "GAME OVER!", PALETTE.title),
        DrawCommand::text(GAME_OVER_SCORE, score_text(score), PALETTE.text),
        DrawCommand::FillRect {
            rect: restart_button(),
            color: PALETTE.button,
        },
        DrawCommand::text(RESTART_LABEL, "Play Again", PALETTE.button_label),
    ]
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}
