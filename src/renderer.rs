use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::config::{BOLD_TEXT_SIZE, PALETTE};
use crate::ui::layout::TextAnchor;
use crate::ui::scene::DrawCommand;
use crate::ui::viewport::{Viewport, CANVAS_COLUMNS, CANVAS_ROWS};

/// Rasterizes one frame of draw commands onto the terminal.
///
/// Returns the viewport the canvas was drawn into, or `None` when the
/// terminal is too small and a size notice was shown instead.
pub fn render(frame: &mut Frame<'_>, scene: &[DrawCommand]) -> Option<Viewport> {
    let area = frame.area();
    let Some(viewport) = Viewport::fit(area) else {
        render_too_small(frame, area);
        return None;
    };

    let buffer = frame.buffer_mut();
    buffer.set_style(viewport.area(), Style::new().bg(PALETTE.background));

    for command in scene {
        match command {
            DrawCommand::FillRect { rect, color } => {
                if let Some(cells) = viewport.span(*rect) {
                    buffer.set_style(cells, Style::new().bg(*color));
                }
            }
            DrawCommand::Text {
                anchor,
                text,
                color,
            } => {
                let (x, y) = text_origin(viewport, *anchor);
                let room = usize::from(viewport.area().right() - x);
                buffer.set_string(x, y, clip_to_width(text, room), text_style(*anchor, *color));
            }
        }
    }

    Some(viewport)
}

/// Terminal cell for the first glyph of a text command. Text sits on the row
/// through its vertical middle, since one row is shorter than large fonts.
fn text_origin(viewport: Viewport, anchor: TextAnchor) -> (u16, u16) {
    viewport.to_terminal(anchor.x, anchor.y + i32::from(anchor.size) / 2)
}

fn text_style(anchor: TextAnchor, color: Color) -> Style {
    let style = Style::new().fg(color);
    if anchor.size >= BOLD_TEXT_SIZE {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Returns the longest prefix of `text` whose display width fits `width`.
fn clip_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..index];
        }
    }
    text
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {CANVAS_COLUMNS}x{CANVAS_ROWS}, have {}x{}",
            area.width, area.height
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.text)),
        middle,
    );
}
