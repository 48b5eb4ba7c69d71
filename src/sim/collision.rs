//! Collision checks for the rectangular board
//!
//! Everything on the board is an axis-aligned rectangle, so a classic
//! AABB overlap test plus two bound checks covers it.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Rect::new(paddle.pos, paddle.size)
    }
}

impl From<&Ball> for Rect {
    fn from(ball: &Ball) -> Self {
        Rect::new(ball.pos, ball.size)
    }
}

/// Ball touches or passes the top or bottom wall.
///
/// Bottom bound uses the ball's height, not its width.
pub fn ball_hits_wall(ball: &Ball) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y >= BOARD_HEIGHT - ball.size.y
}

/// Side whose goal line the ball has crossed, if any. Left is checked first.
pub fn ball_out_of_bounds(ball: &Ball) -> Option<Side> {
    if ball.pos.x <= 0.0 {
        Some(Side::Left)
    } else if ball.pos.x >= BOARD_WIDTH {
        Some(Side::Right)
    } else {
        None
    }
}

/// Ball overlaps the paddle while travelling toward it.
///
/// The direction check stops a ball that is still inside the paddle after a
/// bounce from being flipped back again.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let approaching = match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    approaching && Rect::from(ball).overlaps(&Rect::from(paddle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, 0.0),
            in_play: true,
            ..Ball::default()
        }
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Shared edge only
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_wall_bounds() {
        assert!(ball_hits_wall(&ball_at(100.0, 0.0, 1.0)));
        assert!(ball_hits_wall(&ball_at(100.0, -0.5, 1.0)));
        assert!(ball_hits_wall(&ball_at(100.0, 236.0, 1.0)));
        assert!(!ball_hits_wall(&ball_at(100.0, 235.9, 1.0)));
        assert!(!ball_hits_wall(&ball_at(100.0, 120.0, 1.0)));
    }

    #[test]
    fn test_wall_bound_uses_height() {
        let mut ball = ball_at(100.0, 230.0, 1.0);
        ball.size = Vec2::new(4.0, 12.0);
        assert!(ball_hits_wall(&ball));
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(ball_out_of_bounds(&ball_at(0.0, 50.0, -1.0)), Some(Side::Left));
        assert_eq!(ball_out_of_bounds(&ball_at(320.0, 50.0, 1.0)), Some(Side::Right));
        assert_eq!(ball_out_of_bounds(&ball_at(160.0, 50.0, 1.0)), None);
    }

    #[test]
    fn test_paddle_hit_requires_approach() {
        let paddle = Paddle::new(Side::Left);
        let y = paddle.pos.y + 10.0;

        assert!(ball_hits_paddle(&ball_at(8.0, y, -1.0), &paddle, Side::Left));
        // Overlapping but already moving away
        assert!(!ball_hits_paddle(&ball_at(8.0, y, 1.0), &paddle, Side::Left));
        // Moving toward but above the paddle
        assert!(!ball_hits_paddle(&ball_at(8.0, 20.0, -1.0), &paddle, Side::Left));
    }

    #[test]
    fn test_right_paddle_hit() {
        let paddle = Paddle::new(Side::Right);
        let y = paddle.pos.y;
        assert!(ball_hits_paddle(&ball_at(307.0, y, 1.0), &paddle, Side::Right));
        assert!(!ball_hits_paddle(&ball_at(307.0, y, -1.0), &paddle, Side::Right));
    }
}
