//! Per-frame simulation step
//!
//! One frame: fire due reversions, apply input, integrate the player,
//! advance entities, spawn, collide, ramp difficulty, score, cull. The
//! frame driver calls `tick` once per external frame signal; nothing here
//! suspends or reads a clock.

use super::collision;
use super::effects;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::effective_speed;

/// Input command for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump request; ignored while airborne
    pub jump: bool,
}

/// Advance the session by one frame.
///
/// Frames delivered while the run is over are no-ops; the driver restarts
/// the session on player command. The frame that detects the fatal
/// collision still completes its ramp/score/cull steps, so the phase gate
/// takes effect starting with the next frame.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Scheduled reversions fire between frames, oldest first, never
    // interleaved with the update pass below.
    effects::fire_due(&mut state.modifiers, &mut state.reversions, now_ms);

    if input.jump {
        state.player.jump(state.modifiers.jump_force);
    }
    state.player.integrate();

    let speed = effective_speed(state.obstacle_speed, state.modifiers.time_dilation);
    for obstacle in &mut state.obstacles {
        obstacle.advance(speed);
    }
    for powerup in &mut state.powerups {
        powerup.advance(speed);
    }

    let batch = state
        .spawner
        .poll(now_ms, state.obstacle_interval_ms, state.modifiers.time_dilation);
    if batch.obstacle {
        state.spawn_obstacle();
    }
    if batch.powerup {
        state.spawn_powerup();
    }

    collision::resolve(state, now_ms);

    ramp_difficulty(state);
    state.score += u64::from(state.modifiers.score_multiplier);

    // Culling is the orchestrator's job; entities do not self-cull.
    state.obstacles.retain(|o| o.pos.x + o.size.x > 0.0);
    state.powerups.retain(|p| p.pos.x + p.size.x > 0.0);

    state.background_offset -= PARALLAX_SPEED;

    // Non-finite coordinates mean a physics or spawn bug, never a
    // recoverable condition.
    assert!(state.player.pos.is_finite(), "player position diverged");
    assert!(state.obstacle_speed.is_finite(), "obstacle speed diverged");
    debug_assert!(state.obstacles.iter().all(|o| o.pos.is_finite()));

    if state.phase == GamePhase::GameOver {
        log::debug!("run over: score {}, best {}", state.score, state.best_score);
        if state.score > state.best_score {
            state.best_score = state.score;
        }
    }
}

/// Monotonic within a run: speed drifts up, the spawn interval down to
/// its floor. Both drifts halve under time dilation.
fn ramp_difficulty(state: &mut GameState) {
    let scale = if state.modifiers.time_dilation { 0.5 } else { 1.0 };
    state.obstacle_speed += SPEED_RAMP * scale;
    if state.obstacle_interval_ms > MIN_OBSTACLE_INTERVAL_MS {
        state.obstacle_interval_ms = (state.obstacle_interval_ms - INTERVAL_RAMP_MS * scale)
            .max(MIN_OBSTACLE_INTERVAL_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ActiveModifiers, Obstacle, PowerUpKind};
    use proptest::prelude::*;

    const FRAME_MS: f64 = 16.0;

    fn session() -> GameState {
        GameState::new(42, 0.0, 0)
    }

    /// Advance `frames` ticks at a 16 ms cadence with no input.
    fn run_frames(state: &mut GameState, frames: usize) {
        for i in 0..frames {
            tick(state, &TickInput::default(), i as f64 * FRAME_MS);
        }
    }

    #[test]
    fn test_score_accumulates_per_frame() {
        let mut state = session();
        run_frames(&mut state, 50);
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_obstacle_approach_ends_run() {
        let mut state = session();
        let mut obstacle = Obstacle::new();
        obstacle.pos.x = 770.0;
        state.obstacles.push(obstacle);

        // No overlap at spawn distance
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::Running);

        let mut frames = 1;
        while state.phase == GamePhase::Running && frames < 200 {
            // Freeze the spawn timers so only the seeded obstacle matters
            tick(&mut state, &TickInput::default(), 0.0);
            frames += 1;
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        // The run ended the moment the boxes overlapped
        let obstacle = &state.obstacles[0];
        assert!(obstacle.pos.x < state.player.pos.x + state.player.size.x);
        assert!(obstacle.pos.x + obstacle.size.x > state.player.pos.x);
    }

    #[test]
    fn test_shielded_collision_survives_run() {
        let mut state = session();
        effects::activate(
            &mut state.modifiers,
            &mut state.reversions,
            PowerUpKind::Shield,
            POWERUP_DURATION_MS,
            0.0,
        );
        let mut obstacle = Obstacle::new();
        obstacle.pos.x = state.player.pos.x;
        state.obstacles.push(obstacle);

        tick(&mut state, &TickInput::default(), FRAME_MS);

        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.modifiers.shield);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_game_over_frames_are_noops() {
        let mut state = session();
        let mut obstacle = Obstacle::new();
        obstacle.pos.x = state.player.pos.x;
        state.obstacles.push(obstacle);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let score = state.score;
        let speed = state.obstacle_speed;
        run_frames(&mut state, 10);
        assert_eq!(state.score, score);
        assert_eq!(state.obstacle_speed, speed);
    }

    #[test]
    fn test_game_over_updates_best_score() {
        let mut state = session();
        state.best_score = 5;
        run_frames(&mut state, 20);

        let mut obstacle = Obstacle::new();
        obstacle.pos.x = state.player.pos.x;
        state.obstacles.push(obstacle);
        tick(&mut state, &TickInput::default(), 20.0 * FRAME_MS);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, state.score);
        assert_eq!(state.score, 21);
    }

    #[test]
    fn test_difficulty_monotonic_and_restart_resets() {
        let mut state = session();
        let mut last_speed = state.obstacle_speed;
        let mut last_interval = state.obstacle_interval_ms;

        for i in 0..300 {
            tick(&mut state, &TickInput::default(), i as f64 * FRAME_MS);
            assert!(state.obstacle_speed >= last_speed);
            assert!(state.obstacle_interval_ms <= last_interval);
            assert!(state.obstacle_interval_ms >= MIN_OBSTACLE_INTERVAL_MS);
            last_speed = state.obstacle_speed;
            last_interval = state.obstacle_interval_ms;
        }

        state.phase = GamePhase::GameOver;
        state.restart(10_000.0);
        assert_eq!(state.obstacle_speed, BASE_OBSTACLE_SPEED);
        assert_eq!(state.obstacle_interval_ms, BASE_OBSTACLE_INTERVAL_MS);
    }

    #[test]
    fn test_interval_ramp_stops_at_floor() {
        let mut state = session();
        state.obstacle_interval_ms = MIN_OBSTACLE_INTERVAL_MS + 0.05;
        ramp_difficulty(&mut state);
        assert_eq!(state.obstacle_interval_ms, MIN_OBSTACLE_INTERVAL_MS);
        ramp_difficulty(&mut state);
        assert_eq!(state.obstacle_interval_ms, MIN_OBSTACLE_INTERVAL_MS);
    }

    #[test]
    fn test_time_dilation_halves_motion_and_ramp() {
        let mut state = session();
        effects::activate(
            &mut state.modifiers,
            &mut state.reversions,
            PowerUpKind::SlowTime,
            POWERUP_DURATION_MS,
            0.0,
        );
        let mut obstacle = Obstacle::new();
        obstacle.pos.x = 400.0;
        state.obstacles.push(obstacle);

        tick(&mut state, &TickInput::default(), FRAME_MS);

        assert_eq!(state.obstacles[0].pos.x, 400.0 - BASE_OBSTACLE_SPEED / 2.0);
        assert_eq!(state.obstacle_speed, BASE_OBSTACLE_SPEED + SPEED_RAMP * 0.5);
        assert_eq!(
            state.obstacle_interval_ms,
            BASE_OBSTACLE_INTERVAL_MS - INTERVAL_RAMP_MS * 0.5
        );
    }

    #[test]
    fn test_parallax_scrolls_every_frame() {
        let mut state = session();
        effects::activate(
            &mut state.modifiers,
            &mut state.reversions,
            PowerUpKind::SlowTime,
            POWERUP_DURATION_MS,
            0.0,
        );
        run_frames(&mut state, 10);
        assert_eq!(state.background_offset, -10.0 * PARALLAX_SPEED);
    }

    #[test]
    fn test_offscreen_entities_are_culled() {
        let mut state = session();
        let mut near = Obstacle::new();
        near.pos.x = 200.0;
        let mut gone = Obstacle::new();
        gone.pos.x = -26.0; // trailing edge crosses zero this frame
        state.obstacles.push(near);
        state.obstacles.push(gone);

        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].pos.x > 100.0);
    }

    #[test]
    fn test_restart_cancels_pending_reversions() {
        let mut state = session();
        effects::activate(
            &mut state.modifiers,
            &mut state.reversions,
            PowerUpKind::HighJump,
            POWERUP_DURATION_MS,
            0.0,
        );
        state.phase = GamePhase::GameOver;
        state.restart(1_000.0);

        // Tick well past the stale activation's expiry; nothing fires
        tick(&mut state, &TickInput::default(), 20_000.0);
        assert_eq!(state.modifiers.jump_force, BASE_JUMP_FORCE);
        assert!(state.reversions.is_empty());
    }

    #[test]
    fn test_spawner_populates_field_over_time() {
        let mut state = session();
        run_frames(&mut state, 80); // past the 1200 ms obstacle interval
        assert!(!state.obstacles.is_empty());
        assert!(state.obstacles[0].pos.x < FIELD_WIDTH);
    }

    proptest! {
        #[test]
        fn prop_player_settles_grounded(jumps in proptest::collection::vec(any::<bool>(), 0..100)) {
            let mut state = session();
            let floor = GROUND_LINE - state.player.size.y;

            for (i, &jump) in jumps.iter().enumerate() {
                tick(&mut state, &TickInput { jump }, i as f64 * FRAME_MS);
                prop_assert!(state.player.pos.y <= floor);
            }
            // Any airborne arc ends well within 100 input-free frames;
            // nothing spawned this early can reach the player column yet
            for i in 0..100u32 {
                tick(
                    &mut state,
                    &TickInput::default(),
                    2_000.0 + f64::from(i) * FRAME_MS,
                );
                prop_assert!(state.player.pos.y <= floor);
            }

            prop_assert_eq!(state.phase, GamePhase::Running);
            prop_assert!(state.player.grounded);
            prop_assert_eq!(state.player.velocity_y, 0.0);
            prop_assert_eq!(state.player.pos.y, floor);
        }

        #[test]
        fn prop_score_grows_by_current_multiplier(
            frames in 1usize..200,
            boost_at in 0usize..200,
        ) {
            let mut state = session();

            for i in 0..frames {
                if i == boost_at {
                    effects::activate(
                        &mut state.modifiers,
                        &mut state.reversions,
                        PowerUpKind::ScoreMultiplier,
                        POWERUP_DURATION_MS,
                        i as f64 * FRAME_MS,
                    );
                }
                let before = state.score;
                let multiplier = state.modifiers.score_multiplier;
                prop_assert!(multiplier == 1 || multiplier == 2);
                tick(&mut state, &TickInput::default(), i as f64 * FRAME_MS);
                if state.phase == GamePhase::Running {
                    prop_assert_eq!(state.score, before + u64::from(multiplier));
                }
            }
        }
    }

    #[test]
    fn test_default_modifiers_after_full_reversion_cycle() {
        let mut state = session();
        for (i, kind) in PowerUpKind::ALL.iter().enumerate() {
            effects::activate(
                &mut state.modifiers,
                &mut state.reversions,
                *kind,
                POWERUP_DURATION_MS,
                i as f64 * 100.0,
            );
        }
        tick(&mut state, &TickInput::default(), 50_000.0);
        let expected = ActiveModifiers::default();
        assert_eq!(state.modifiers, expected);
    }
}
