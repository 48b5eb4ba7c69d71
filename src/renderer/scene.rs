//! Draws the match: title, paddles, ball and scores

use glam::Vec2;

use super::vertex::colors;
use super::{Canvas, font};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::sim::MatchState;

pub const TITLE: &str = "PONG!!";
pub const SERVE_HINT: &str = "SPACE TO SERVE";
/// Top edge of the title/score line
const HUD_Y: f32 = 10.0;
/// Score text x for each player, measured from its own side
const SCORE_INSET: f32 = 40.0;

/// Emit one frame of the match to `canvas`. Reads state only.
pub fn draw_match(state: &MatchState, canvas: &mut impl Canvas) {
    canvas.fill_rect(
        Vec2::ZERO,
        Vec2::new(BOARD_WIDTH, BOARD_HEIGHT),
        colors::BACKGROUND,
    );

    canvas.draw_text(TITLE, Vec2::new(centered_x(TITLE), HUD_Y));

    canvas.fill_rect(state.left.pos, state.left.size, colors::PADDLE);
    canvas.fill_rect(state.right.pos, state.right.size, colors::PADDLE);
    canvas.fill_rect(state.ball.pos, state.ball.size, colors::BALL);

    canvas.draw_text(&state.left.score.to_string(), Vec2::new(SCORE_INSET, HUD_Y));
    canvas.draw_text(
        &state.right.score.to_string(),
        Vec2::new(BOARD_WIDTH - SCORE_INSET, HUD_Y),
    );

    if !state.ball.in_play {
        let y = BOARD_HEIGHT / 2.0 + 3.0 * font::LINE_HEIGHT;
        canvas.draw_text(SERVE_HINT, Vec2::new(centered_x(SERVE_HINT), y));
    }
}

fn centered_x(text: &str) -> f32 {
    ((BOARD_WIDTH - font::text_width(text)) / 2.0).floor()
}
