//! Frame driver and session ownership
//!
//! The embedding scheduler owns a `GameSession` and calls `on_frame` once
//! per frame with a monotonic timestamp; the tick runs to completion
//! synchronously. The single discrete player command is dispatched as
//! jump-or-restart depending on the phase.

use std::time::Instant;

use crate::persistence::ScoreStore;
use crate::scene::{self, Scene};
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Monotonic time source for spawn timers and power-up expiry
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Wall-clock backed monotonic source
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// One player-facing session: run state plus the persistence collaborator
pub struct GameSession<S: ScoreStore> {
    state: GameState,
    store: S,
    pending_input: TickInput,
}

impl<S: ScoreStore> GameSession<S> {
    /// Create a session; the stored best score seeds the HUD.
    pub fn new(seed: u64, now_ms: f64, store: S) -> Self {
        let best = store.load_best();
        Self {
            state: GameState::new(seed, now_ms, best),
            store,
            pending_input: TickInput::default(),
        }
    }

    /// The single discrete command: jump while running, restart after a
    /// game over.
    pub fn press(&mut self, now_ms: f64) {
        match self.state.phase {
            GamePhase::Running => self.pending_input.jump = true,
            GamePhase::GameOver => {
                log::info!("restarting run (best {})", self.state.best_score);
                self.state.restart(now_ms);
            }
        }
    }

    /// Advance one frame, consuming any pending command. Persists the
    /// best score on the game-over transition; a no-op while the run is
    /// over.
    pub fn on_frame(&mut self, now_ms: f64) {
        let best_before = self.state.best_score;
        let input = std::mem::take(&mut self.pending_input);
        tick(&mut self.state, &input, now_ms);

        if self.state.phase == GamePhase::GameOver && self.state.best_score > best_before {
            self.store.save_best(self.state.best_score);
        }
    }

    /// Read-only snapshot for the drawing layer.
    pub fn scene(&self) -> Scene {
        scene::snapshot(&self.state)
    }

    /// Direct view of the run state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The persistence collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }
}
