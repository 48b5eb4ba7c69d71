//! Fixed timestep simulation tick
//!
//! Advances the match by exactly one tick. There is no delta time: paddle
//! and ball speeds are in pixels per tick, so the host must call this at a
//! fixed rate.

use super::collision::{ball_hits_paddle, ball_hits_wall, ball_out_of_bounds};
use super::rng::RandomSource;
use super::state::{Ball, GameEvent, MatchState, Side};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held keys, applied every tick
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Held; only has an effect while the ball is at rest
    pub serve: bool,
    /// Edge-triggered: clear scores and start over
    pub reset: bool,
    /// Edge-triggered; consumed by the host, ignored by the simulation
    pub toggle_fullscreen: bool,
}

/// Advance the match by one tick.
///
/// Order: paddles, serve, full reset, wall bounce, scoring, paddle hits,
/// integration. Returns what happened so the host can log it.
pub fn tick(
    state: &mut MatchState,
    input: &TickInput,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    move_paddles(state, input);

    if input.serve && serve(&mut state.ball, rng) {
        events.push(GameEvent::Served);
    }

    if input.reset {
        state.full_reset();
        events.push(GameEvent::MatchReset);
    }

    if ball_hits_wall(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
        if state.ball.in_play {
            events.push(GameEvent::WallBounce);
        }
    }

    if let Some(conceded) = ball_out_of_bounds(&state.ball) {
        let scorer = conceded.opponent();
        state.point_reset(scorer);
        events.push(GameEvent::Scored(scorer));
    }

    for side in [Side::Left, Side::Right] {
        if ball_hits_paddle(&state.ball, state.paddle(side), side) {
            return_ball(&mut state.ball, rng);
            events.push(GameEvent::PaddleHit(side));
        }
    }

    state.ball.integrate();

    events
}

fn move_paddles(state: &mut MatchState, input: &TickInput) {
    if input.left_up {
        state.left.move_up(PADDLE_SPEED);
    }
    if input.left_down {
        state.left.move_down(PADDLE_SPEED);
    }
    if input.right_up {
        state.right.move_up(PADDLE_SPEED);
    }
    if input.right_down {
        state.right.move_down(PADDLE_SPEED);
    }
}

/// Put a resting ball into play with a random direction.
///
/// Horizontal is always a unit step left or right; vertical is drawn from
/// [-SERVE_SPREAD, SERVE_SPREAD). Returns false (and leaves the ball alone)
/// if it is already in play.
pub fn serve(ball: &mut Ball, rng: &mut impl RandomSource) -> bool {
    if ball.in_play {
        return false;
    }
    ball.in_play = true;
    ball.vel.x = rng.direction();
    let spread = rng.unit() * SERVE_SPREAD;
    ball.vel.y = spread * rng.direction();
    true
}

/// Reflect off a paddle: flip horizontal, jitter vertical, speed up.
pub fn return_ball(ball: &mut Ball, rng: &mut impl RandomSource) {
    ball.vel.x = -ball.vel.x;
    let jitter = rng.unit() / RETURN_JITTER_DIVISOR;
    ball.vel.y += jitter * rng.direction();
    ball.boost(PADDLE_SPEED_BOOST);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::sim::rng::{GameRng, ScriptedRandom};
    use crate::sim::state::Paddle;

    fn in_play(state: &mut MatchState, pos: Vec2, vel: Vec2) {
        state.ball.pos = pos;
        state.ball.vel = vel;
        state.ball.in_play = true;
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut state = MatchState::new();
        let mut rng = ScriptedRandom::new(&[0.3]);
        let events = tick(&mut state, &TickInput::default(), &mut rng);
        assert!(events.is_empty());
        assert_eq!(state, MatchState::new());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_serve_exact_velocity() {
        let mut state = MatchState::new();
        // direction -> right, unit 0.5, direction -> up
        let mut rng = ScriptedRandom::new(&[0.7, 0.5, 0.2]);
        let input = TickInput {
            serve: true,
            ..Default::default()
        };

        let events = tick(&mut state, &input, &mut rng);

        assert_eq!(events, vec![GameEvent::Served]);
        assert!(state.ball.in_play);
        assert_eq!(state.ball.vel, Vec2::new(1.0, -1.5));
        assert_eq!(state.ball.speed, 1.0);
        // Integrated once after the serve
        assert_eq!(state.ball.pos, Ball::center() + Vec2::new(1.0, -1.5));
    }

    #[test]
    fn test_serve_while_in_play_is_noop() {
        let mut ball = Ball {
            vel: Vec2::new(-1.0, 0.25),
            speed: 3.0,
            in_play: true,
            ..Ball::default()
        };
        let before = ball.clone();
        let mut rng = ScriptedRandom::new(&[0.9]);

        assert!(!serve(&mut ball, &mut rng));
        assert_eq!(ball, before);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_left_exit_scores_for_right() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(0.0, 60.0), Vec2::new(-1.0, 0.5));
        state.ball.speed = 2.5;
        state.left.score = 4;

        let events = tick(&mut state, &TickInput::default(), &mut GameRng::new(1));

        assert_eq!(events, vec![GameEvent::Scored(Side::Right)]);
        assert_eq!(state.score(), (4, 1));
        assert_eq!(state.ball.pos, Ball::center());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.speed, 1.0);
        assert!(!state.ball.in_play);
    }

    #[test]
    fn test_right_exit_scores_for_left() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(BOARD_WIDTH, 60.0), Vec2::new(1.0, 0.0));
        state.left.pos.y = 0.0;

        let events = tick(&mut state, &TickInput::default(), &mut GameRng::new(1));

        assert_eq!(events, vec![GameEvent::Scored(Side::Left)]);
        assert_eq!(state.score(), (1, 0));
        assert_eq!(state.left.pos.y, Paddle::centered_y());
    }

    #[test]
    fn test_left_paddle_return() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(8.0, 110.0), Vec2::new(-1.0, 1.0));
        state.ball.speed = 2.0;
        // unit 0.6 -> jitter 0.2, direction -> down
        let mut rng = ScriptedRandom::new(&[0.6, 0.8]);

        let events = tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Left)]);
        assert_eq!(state.ball.vel.x, 1.0);
        assert!((state.ball.vel.y - 1.2).abs() < 1e-6);
        assert_eq!(state.ball.speed, 2.5);
        // No de-penetration, just the next integration step
        assert!((state.ball.pos.x - 10.5).abs() < 1e-6);
    }

    #[test]
    fn test_right_paddle_return_capped() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(307.0, 110.0), Vec2::new(1.0, 0.0));
        state.ball.speed = 9.8;
        let mut rng = ScriptedRandom::new(&[0.3, 0.1]);

        let events = tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Right)]);
        assert_eq!(state.ball.vel.x, -1.0);
        assert!((state.ball.vel.y + 0.1).abs() < 1e-6);
        assert_eq!(state.ball.speed, BALL_MAX_SPEED);
    }

    #[test]
    fn test_receding_ball_passes_through_paddle() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(8.0, 110.0), Vec2::new(1.0, 0.0));
        let mut rng = ScriptedRandom::new(&[0.5]);

        let events = tick(&mut state, &TickInput::default(), &mut rng);

        assert!(events.is_empty());
        assert_eq!(state.ball.vel.x, 1.0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_wall_bounce() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(100.0, 0.0), Vec2::new(-1.0, -2.0));
        state.ball.speed = 1.5;

        let events = tick(&mut state, &TickInput::default(), &mut GameRng::new(3));

        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.vel, Vec2::new(-1.0, 2.0));
        assert_eq!(state.ball.pos, Vec2::new(98.5, 3.0));
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = MatchState::new();
        in_play(&mut state, Vec2::new(100.0, 236.0), Vec2::new(1.0, 1.0));

        tick(&mut state, &TickInput::default(), &mut GameRng::new(3));

        assert_eq!(state.ball.vel, Vec2::new(1.0, -1.0));
        assert_eq!(state.ball.pos, Vec2::new(101.0, 235.0));
    }

    #[test]
    fn test_full_reset() {
        let mut state = MatchState::new();
        state.left.score = 5;
        state.right.score = 9;
        state.left.pos.y = 0.0;
        in_play(&mut state, Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0));

        let input = TickInput {
            reset: true,
            serve: true,
            right_down: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, &mut GameRng::new(5));

        assert_eq!(events, vec![GameEvent::MatchReset]);
        assert_eq!(state, MatchState::new());
    }

    #[test]
    fn test_reset_discards_same_tick_serve() {
        let mut state = MatchState::new();
        let input = TickInput {
            reset: true,
            serve: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, &mut GameRng::new(5));
        assert_eq!(events, vec![GameEvent::Served, GameEvent::MatchReset]);
        assert!(!state.ball.in_play);
    }

    #[test]
    fn test_paddle_movement() {
        let mut state = MatchState::new();
        let input = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut GameRng::new(0));
        assert_eq!(state.left.pos.y, Paddle::centered_y() - PADDLE_SPEED);
        assert_eq!(state.right.pos.y, Paddle::centered_y() + PADDLE_SPEED);

        // Opposite keys cancel out
        let both = TickInput {
            left_up: true,
            left_down: true,
            ..Default::default()
        };
        let y = state.left.pos.y;
        tick(&mut state, &both, &mut GameRng::new(0));
        assert_eq!(state.left.pos.y, y);
    }

    #[test]
    fn test_determinism() {
        let mut a = MatchState::new();
        let mut b = MatchState::new();
        let mut rng_a = GameRng::new(99999);
        let mut rng_b = GameRng::new(99999);
        let serve = TickInput {
            serve: true,
            ..Default::default()
        };

        for i in 0..600 {
            let input = if i % 120 == 0 { serve } else { TickInput::default() };
            let ea = tick(&mut a, &input, &mut rng_a);
            let eb = tick(&mut b, &input, &mut rng_b);
            assert_eq!(ea, eb);
        }
        assert_eq!(a, b);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<[bool; 5]>(), prop::bool::weighted(0.01)).prop_map(|(keys, reset)| TickInput {
            left_up: keys[0],
            left_down: keys[1],
            right_up: keys[2],
            right_down: keys[3],
            serve: keys[4],
            reset,
            toggle_fullscreen: false,
        })
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_on_board(
            inputs in prop::collection::vec(arb_input(), 1..400),
            seed in any::<u64>(),
        ) {
            let mut state = MatchState::new();
            let mut rng = GameRng::new(seed);
            for input in &inputs {
                tick(&mut state, input, &mut rng);
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.pos.y >= 0.0);
                    prop_assert!(paddle.pos.y <= BOARD_HEIGHT - PADDLE_HEIGHT);
                }
            }
        }

        #[test]
        fn prop_speed_capped_and_scores_step_by_one(
            inputs in prop::collection::vec(arb_input(), 1..800),
            seed in any::<u64>(),
        ) {
            let mut state = MatchState::new();
            let mut rng = GameRng::new(seed);
            for input in &inputs {
                let before = state.clone();
                let events = tick(&mut state, input, &mut rng);

                prop_assert!(state.ball.speed <= BALL_MAX_SPEED);
                if events.contains(&GameEvent::PaddleHit(Side::Left))
                    || events.contains(&GameEvent::PaddleHit(Side::Right))
                {
                    prop_assert!(state.ball.speed >= before.ball.speed);
                }
                if let Some(GameEvent::Scored(side)) =
                    events.iter().find(|e| matches!(e, GameEvent::Scored(_)))
                {
                    let gained = state.paddle(*side).score - before.paddle(*side).score;
                    prop_assert_eq!(gained, 1);
                    prop_assert_eq!(
                        state.paddle(side.opponent()).score,
                        before.paddle(side.opponent()).score
                    );
                    prop_assert_eq!(state.ball.pos, Ball::center());
                    prop_assert!(!state.ball.in_play);
                }
                if !state.ball.in_play {
                    prop_assert_eq!(state.ball.vel, Vec2::ZERO);
                    prop_assert_eq!(state.ball.pos, Ball::center());
                }
            }
        }

        #[test]
        fn prop_serve_ranges(seed in any::<u64>()) {
            let mut ball = Ball::default();
            let mut rng = GameRng::new(seed);
            prop_assert!(serve(&mut ball, &mut rng));
            prop_assert_eq!(ball.vel.x.abs(), 1.0);
            prop_assert!(ball.vel.y >= -SERVE_SPREAD && ball.vel.y < SERVE_SPREAD);
            prop_assert!(ball.in_play);
        }
    }
}
