//! Skyline Dash - a side-scrolling endless runner core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, power-ups)
//! - `scene`: Read-only render snapshots for an external drawing layer
//! - `persistence`: Durable best-score slot
//! - `driver`: Frame driver and session ownership

pub mod driver;
pub mod persistence;
pub mod scene;
pub mod sim;

pub use driver::{Clock, GameSession, SystemClock};
pub use persistence::{JsonFileStore, MemoryStore, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Top of the ground strip; entities rest their bottom edge here
    pub const GROUND_LINE: f32 = FIELD_HEIGHT - 30.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_START_X: f32 = 50.0;

    /// Vertical physics (units/frame², units/frame)
    pub const GRAVITY: f32 = 0.5;
    pub const BASE_JUMP_FORCE: f32 = -12.0;
    pub const HIGH_JUMP_FORCE: f32 = -18.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const BASE_OBSTACLE_SPEED: f32 = 5.0;
    pub const BASE_OBSTACLE_INTERVAL_MS: f32 = 1200.0;
    /// Spawn-interval floor the difficulty ramp cannot cross
    pub const MIN_OBSTACLE_INTERVAL_MS: f32 = 500.0;

    /// Power-up defaults
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_INTERVAL_MS: f32 = 5000.0;
    /// Activation length, identical for all kinds
    pub const POWERUP_DURATION_MS: f64 = 5000.0;
    /// Band above the ground line where pickups float (randomized at spawn)
    pub const POWERUP_BAND_MIN: f32 = 40.0;
    pub const POWERUP_BAND_MAX: f32 = 120.0;

    /// Difficulty ramp per frame
    pub const SPEED_RAMP: f32 = 0.001;
    pub const INTERVAL_RAMP_MS: f32 = 0.1;

    /// Background scroll per frame (unaffected by time dilation)
    pub const PARALLAX_SPEED: f32 = 1.0;
}

/// Per-frame horizontal displacement under optional time dilation
#[inline]
pub fn effective_speed(base: f32, dilated: bool) -> f32 {
    if dilated { base / 2.0 } else { base }
}

/// Spawn interval under optional time dilation (dilation halves the spawn rate)
#[inline]
pub fn effective_interval(base_ms: f32, dilated: bool) -> f32 {
    if dilated { base_ms * 2.0 } else { base_ms }
}
