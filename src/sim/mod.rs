//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick only (speeds are per tick, no delta time)
//! - Randomness only through `RandomSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_hits_paddle, ball_hits_wall, ball_out_of_bounds};
pub use rng::{GameRng, RandomSource};
pub use state::{Ball, GameEvent, MatchState, Paddle, Side};
pub use tick::{TickInput, return_ball, serve, tick};
