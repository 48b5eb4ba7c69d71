//! Fixed-rate game loop driver
//!
//! Turns variable frame times into whole simulation ticks and keeps the
//! pieces the host needs between frames: match state, RNG, key state and
//! the frame's shape batch.

use crate::consts::*;
use crate::input::KeyboardState;
use crate::renderer::vertex::Vertex;
use crate::renderer::{ShapeBatch, draw_match};
use crate::sim::{GameEvent, GameRng, MatchState, TickInput, tick};

/// What the host has to act on after an update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequests {
    /// Fullscreen toggle was pressed during one of this frame's ticks
    pub toggle_fullscreen: bool,
}

pub struct Game {
    pub state: MatchState,
    pub keys: KeyboardState,
    rng: GameRng,
    accumulator: f32,
    ticks: u64,
    batch: ShapeBatch,
}

impl Game {
    pub fn new(rng: GameRng) -> Self {
        Self {
            state: MatchState::new(),
            keys: KeyboardState::new(),
            rng,
            accumulator: 0.0,
            ticks: 0,
            batch: ShapeBatch::new(),
        }
    }

    /// Total simulation ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run as many fixed ticks as `dt` seconds of wall time cover
    pub fn update(&mut self, dt: f32) -> FrameRequests {
        let mut requests = FrameRequests::default();
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput::poll(&self.keys);
            requests.toggle_fullscreen |= input.toggle_fullscreen;

            for event in tick(&mut self.state, &input, &mut self.rng) {
                self.log_event(event);
            }

            // Clear one-shot inputs after processing
            self.keys.end_tick();
            self.accumulator -= SIM_DT;
            self.ticks += 1;
            substeps += 1;
        }

        requests
    }

    /// Build this frame's triangles in board coordinates
    pub fn draw(&mut self) -> &[Vertex] {
        self.batch.clear();
        draw_match(&self.state, &mut self.batch);
        self.batch.vertices()
    }

    fn log_event(&self, event: GameEvent) {
        match event {
            GameEvent::Scored(side) => {
                let (left, right) = self.state.score();
                log::info!("{side:?} scores ({left} - {right})");
            }
            GameEvent::MatchReset => log::info!("Match reset"),
            other => log::debug!("tick {}: {other:?}", self.ticks),
        }
    }
}
