//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven solely by the timestamps the frame driver supplies
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::aabb_overlap;
pub use effects::{Baseline, PendingReversion, activate, fire_due};
pub use spawn::{SpawnBatch, Spawner};
pub use state::{
    ActiveModifiers, GamePhase, GameState, Obstacle, Player, PowerUp, PowerUpKind, RngState,
};
pub use tick::{TickInput, tick};
