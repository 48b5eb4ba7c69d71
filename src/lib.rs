//! Paddle Pong - classic two-player Pong
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (paddles, ball, collisions, scoring)
//! - `input`: Key state tracking behind the simulation's input snapshot
//! - `renderer`: Draw primitives and the WebGPU pipeline that shows them
//! - `platform`: Native window and fixed-rate game loop
//! - `settings`: Presentation/driver settings loaded from JSON

pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Logical board size. The window is letterboxed to this regardless of
    /// its physical size.
    pub const BOARD_WIDTH: f32 = 320.0;
    pub const BOARD_HEIGHT: f32 = 240.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 5.0;
    /// Pixels per tick while a movement key is held
    pub const PADDLE_SPEED: f32 = 4.0;

    /// Ball defaults (square)
    pub const BALL_SIZE: f32 = 4.0;
    /// Speed scalar at serve time
    pub const BALL_START_SPEED: f32 = 1.0;
    /// Cap on the speed scalar so rallies stay playable
    pub const BALL_MAX_SPEED: f32 = 10.0;
    /// Speed scalar gain per paddle hit
    pub const PADDLE_SPEED_BOOST: f32 = 0.5;
    /// Serve vertical component is `unit * SERVE_SPREAD * direction`
    pub const SERVE_SPREAD: f32 = 3.0;
    /// Paddle hits add `unit / RETURN_JITTER_DIVISOR * direction` to vy
    pub const RETURN_JITTER_DIVISOR: f32 = 3.0;

    /// Fixed simulation timestep (60 Hz). Ball and paddle speeds are per tick.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
