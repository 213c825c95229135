//! Spawn timing
//!
//! Two independent timers decide when obstacles and power-ups enter the
//! field. The spawner only decides; the session instantiates. Time
//! dilation doubles both intervals, halving the spawn rate.

use crate::consts::POWERUP_INTERVAL_MS;
use crate::effective_interval;

/// Spawn decisions for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnBatch {
    pub obstacle: bool,
    pub powerup: bool,
}

/// Interval timers for obstacle and power-up creation
#[derive(Debug, Clone)]
pub struct Spawner {
    last_obstacle_ms: f64,
    last_powerup_ms: f64,
}

impl Spawner {
    /// Both timers start at `now_ms`; nothing spawns until a full
    /// interval has elapsed.
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_obstacle_ms: now_ms,
            last_powerup_ms: now_ms,
        }
    }

    /// Compare elapsed time against the (possibly dilated) intervals and
    /// reset the last-spawn timestamp of each timer that fires.
    pub fn poll(&mut self, now_ms: f64, obstacle_interval_ms: f32, dilated: bool) -> SpawnBatch {
        let mut batch = SpawnBatch::default();

        let interval = f64::from(effective_interval(obstacle_interval_ms, dilated));
        if now_ms - self.last_obstacle_ms > interval {
            batch.obstacle = true;
            self.last_obstacle_ms = now_ms;
        }

        let interval = f64::from(effective_interval(POWERUP_INTERVAL_MS, dilated));
        if now_ms - self.last_powerup_ms > interval {
            batch.powerup = true;
            self.last_powerup_ms = now_ms;
        }

        batch
    }
}
