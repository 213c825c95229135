//! Game state and core simulation types
//!
//! Everything a run needs to advance lives here. Entities own their own
//! kinematics and per-frame update rule; shared values (effective speed,
//! the current jump force) are passed in by the orchestrator rather than
//! reached for through a back-reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::PendingReversion;
use super::spawn::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended by an unshielded collision
    GameOver,
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, positive downward
    pub velocity_y: f32,
    /// Resting on the ground line, able to jump
    pub grounded: bool,
}

impl Player {
    /// Spawn standing on the ground line at the fixed start column.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, GROUND_LINE - PLAYER_SIZE),
            size: Vec2::splat(PLAYER_SIZE),
            velocity_y: 0.0,
            grounded: true,
        }
    }

    /// Apply gravity and integrate vertical motion for one frame.
    ///
    /// Reaching or passing the ground line clamps to it, zeroes the
    /// velocity, and restores the grounded flag.
    pub fn integrate(&mut self) {
        if !self.grounded {
            self.velocity_y += GRAVITY;
        }
        self.pos.y += self.velocity_y;

        let floor = GROUND_LINE - self.size.y;
        if self.pos.y >= floor {
            self.pos.y = floor;
            self.velocity_y = 0.0;
            self.grounded = true;
        }
    }

    /// Leave the ground with the supplied jump force.
    ///
    /// Airborne requests are silently ignored: no double jump, no queueing.
    pub fn jump(&mut self, jump_force: f32) {
        if self.grounded {
            self.grounded = false;
            self.velocity_y = jump_force;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A ground obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// Spawn at the right field edge, resting on the ground line.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH, GROUND_LINE - OBSTACLE_SIZE),
            size: Vec2::splat(OBSTACLE_SIZE),
        }
    }

    /// Advance left by the effective per-frame speed.
    pub fn advance(&mut self, effective_speed: f32) {
        self.pos.x -= effective_speed;
    }
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    ScoreMultiplier,
    Shield,
    HighJump,
    SlowTime,
}

impl PowerUpKind {
    /// All kinds, in spawn-roll order
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::ScoreMultiplier,
        PowerUpKind::Shield,
        PowerUpKind::HighJump,
        PowerUpKind::SlowTime,
    ];
}

/// A floating pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PowerUpKind,
    /// Activation length handed to the effects engine on pickup; not
    /// decremented while the pickup floats.
    pub duration_ms: f64,
}

impl PowerUp {
    /// Spawn at the right field edge, floating `rise` units above the
    /// ground line. The height is fixed at creation.
    pub fn new(kind: PowerUpKind, rise: f32) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH, GROUND_LINE - POWERUP_SIZE - rise),
            size: Vec2::splat(POWERUP_SIZE),
            kind,
            duration_ms: POWERUP_DURATION_MS,
        }
    }

    /// Advance left by the effective per-frame speed.
    pub fn advance(&mut self, effective_speed: f32) {
        self.pos.x -= effective_speed;
    }
}

/// The session's in-effect power-up outcomes
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveModifiers {
    /// Score gain per frame, 1 or 2
    pub score_multiplier: u32,
    /// One-shot collision absorption
    pub shield: bool,
    /// Force applied on the next jump
    pub jump_force: f32,
    /// Halves entity speed, spawn rate, and the difficulty ramp while set
    pub time_dilation: bool,
}

impl Default for ActiveModifiers {
    fn default() -> Self {
        Self {
            score_multiplier: 1,
            shield: false,
            jump_force: BASE_JUMP_FORCE,
            time_dilation: false,
        }
    }
}

/// RNG record: a seed plus a draw counter, so spawn randomness replays
/// exactly from the seed
#[derive(Debug, Clone)]
pub struct RngState {
    pub seed: u64,
    draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Derive a fresh generator for one spawn decision.
    pub fn next_rng(&mut self) -> Pcg32 {
        let draw = self.draws;
        self.draws += 1;
        Pcg32::seed_from_u64(self.seed ^ draw.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete session state for one run, plus the best score carried across runs
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Monotonically non-decreasing while the run is alive
    pub score: u64,
    /// Highest score seen across runs; updated on the game-over transition
    pub best_score: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<PowerUp>,
    pub modifiers: ActiveModifiers,
    /// Scheduled modifier reversions, kept sorted by fire time
    pub reversions: Vec<PendingReversion>,
    pub spawner: Spawner,
    /// Current obstacle speed; drifts up via the difficulty ramp
    pub obstacle_speed: f32,
    /// Current obstacle spawn interval; drifts down to the floor
    pub obstacle_interval_ms: f32,
    /// Background scroll offset for the render layer
    pub background_offset: f32,
    pub rng: RngState,
}

impl GameState {
    /// Create a session. `now_ms` seeds the spawn timers; `best_score`
    /// comes from the persistence collaborator (0 when nothing is stored).
    pub fn new(seed: u64, now_ms: f64, best_score: u64) -> Self {
        Self {
            phase: GamePhase::Running,
            score: 0,
            best_score,
            player: Player::new(),
            obstacles: Vec::new(),
            powerups: Vec::new(),
            modifiers: ActiveModifiers::default(),
            reversions: Vec::new(),
            spawner: Spawner::new(now_ms),
            obstacle_speed: BASE_OBSTACLE_SPEED,
            obstacle_interval_ms: BASE_OBSTACLE_INTERVAL_MS,
            background_offset: 0.0,
            rng: RngState::new(seed),
        }
    }

    /// Begin a fresh run after a game over.
    ///
    /// Clears entities and pending reversions, restores the initial
    /// difficulty constants, and resets the spawn timers to `now_ms`.
    /// The best score and the RNG record survive; the backdrop keeps
    /// scrolling across runs.
    pub fn restart(&mut self, now_ms: f64) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.player = Player::new();
        self.obstacles.clear();
        self.powerups.clear();
        self.modifiers = ActiveModifiers::default();
        self.reversions.clear();
        self.spawner = Spawner::new(now_ms);
        self.obstacle_speed = BASE_OBSTACLE_SPEED;
        self.obstacle_interval_ms = BASE_OBSTACLE_INTERVAL_MS;
    }

    /// Spawn one obstacle at the right field edge.
    pub fn spawn_obstacle(&mut self) {
        self.obstacles.push(Obstacle::new());
    }

    /// Spawn one power-up with a random kind and float height.
    pub fn spawn_powerup(&mut self) {
        let mut rng = self.rng.next_rng();
        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        let rise = rng.random_range(POWERUP_BAND_MIN..POWERUP_BAND_MAX);
        self.powerups.push(PowerUp::new(kind, rise));
    }
}
