//! Match state and core simulation types
//!
//! Everything the tick mutates lives here. The host owns one `MatchState`
//! and threads it through update and draw.

use glam::Vec2;

use crate::consts::*;

/// Which player a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The player on the other end of the board
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball left the rest state
    Served,
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball returned by the given side's paddle
    PaddleHit(Side),
    /// The given side won a point
    Scored(Side),
    /// Scores cleared and everything re-centered
    MatchReset,
}

/// A player's paddle. Only `pos.y` moves after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u32,
}

impl Paddle {
    /// Fresh, centered paddle for the given side with a zero score
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => BOARD_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        Self {
            pos: Vec2::new(x, Self::centered_y()),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            score: 0,
        }
    }

    #[inline]
    pub fn centered_y() -> f32 {
        BOARD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0
    }

    /// Lowest y the paddle may occupy while staying fully on the board
    #[inline]
    pub fn max_y(&self) -> f32 {
        BOARD_HEIGHT - self.size.y
    }

    pub fn move_up(&mut self, amount: f32) {
        self.pos.y = (self.pos.y - amount).max(0.0);
    }

    pub fn move_down(&mut self, amount: f32) {
        self.pos.y = (self.pos.y + amount).min(self.max_y());
    }

    pub fn recenter(&mut self) {
        self.pos.y = Self::centered_y();
    }
}

/// The ball. `vel` is a direction-ish vector (|vx| is 1 after a serve);
/// actual displacement per tick is `vel * speed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Speed scalar, never above `max_speed`
    pub speed: f32,
    pub max_speed: f32,
    /// False while waiting for a serve; the ball is then centered and still
    pub in_play: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Self::center(),
            size: Vec2::splat(BALL_SIZE),
            vel: Vec2::ZERO,
            speed: BALL_START_SPEED,
            max_speed: BALL_MAX_SPEED,
            in_play: false,
        }
    }
}

impl Ball {
    /// Top-left corner that puts the ball in the middle of the board
    pub fn center() -> Vec2 {
        Vec2::new(
            BOARD_WIDTH / 2.0 - BALL_SIZE / 2.0,
            BOARD_HEIGHT / 2.0 - BALL_SIZE / 2.0,
        )
    }

    /// Back to the rest state: centered, still, base speed, not in play
    pub fn park(&mut self) {
        self.pos = Self::center();
        self.vel = Vec2::ZERO;
        self.speed = BALL_START_SPEED;
        self.in_play = false;
    }

    /// Raise the speed scalar, clamped to `max_speed`
    pub fn boost(&mut self, amount: f32) {
        self.speed = (self.speed + amount).min(self.max_speed);
    }

    /// Explicit Euler step, one tick
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel * self.speed;
    }
}

/// Complete match state: two paddles and one ball
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Start-of-match state: centered paddles, parked ball, 0 - 0
    pub fn new() -> Self {
        Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Score-clearing reinitialization of the whole match
    pub fn full_reset(&mut self) {
        *self = Self::new();
    }

    /// Award a point to `scorer`, then re-center everything. Scores survive.
    pub fn point_reset(&mut self, scorer: Side) {
        self.paddle_mut(scorer).score += 1;
        self.left.recenter();
        self.right.recenter();
        self.ball.park();
    }

    /// Current score as (left, right)
    pub fn score(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }
}
