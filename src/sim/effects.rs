//! Power-up state machine
//!
//! Activation flips a modifier to its active value and schedules a
//! reversion that restores the exact baseline captured at activation.
//! Reversions are plain records compared against the frame timestamp, so
//! they fire between frames in timestamp order and a restart can discard
//! them wholesale - no timers, no callbacks.

use super::state::{ActiveModifiers, PowerUpKind};
use crate::consts::HIGH_JUMP_FORCE;

/// Baseline value captured when a modifier activates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Baseline {
    Multiplier(u32),
    Shield(bool),
    JumpForce(f32),
    TimeDilation(bool),
}

/// A scheduled modifier reversion
#[derive(Debug, Clone)]
pub struct PendingReversion {
    pub kind: PowerUpKind,
    pub fire_at_ms: f64,
    pub baseline: Baseline,
}

/// Activate a picked-up modifier.
///
/// Re-activating a kind that is already pending refreshes its fire time
/// and keeps the originally captured baseline, so jump force still
/// reverts to the true pre-boost value.
pub fn activate(
    modifiers: &mut ActiveModifiers,
    reversions: &mut Vec<PendingReversion>,
    kind: PowerUpKind,
    duration_ms: f64,
    now_ms: f64,
) {
    let fire_at_ms = now_ms + duration_ms;

    if let Some(pending) = reversions.iter_mut().find(|r| r.kind == kind) {
        pending.fire_at_ms = fire_at_ms;
    } else {
        let baseline = match kind {
            PowerUpKind::ScoreMultiplier => Baseline::Multiplier(modifiers.score_multiplier),
            PowerUpKind::Shield => Baseline::Shield(modifiers.shield),
            PowerUpKind::HighJump => Baseline::JumpForce(modifiers.jump_force),
            PowerUpKind::SlowTime => Baseline::TimeDilation(modifiers.time_dilation),
        };
        reversions.push(PendingReversion {
            kind,
            fire_at_ms,
            baseline,
        });
    }
    reversions.sort_by(|a, b| a.fire_at_ms.total_cmp(&b.fire_at_ms));

    match kind {
        PowerUpKind::ScoreMultiplier => modifiers.score_multiplier = 2,
        PowerUpKind::Shield => modifiers.shield = true,
        PowerUpKind::HighJump => modifiers.jump_force = HIGH_JUMP_FORCE,
        PowerUpKind::SlowTime => modifiers.time_dilation = true,
    }
    log::debug!("power-up activated: {kind:?}, reverts at {fire_at_ms}ms");
}

/// Fire every reversion due at `now_ms`, oldest first.
///
/// Due entries form a prefix of the sorted list.
pub fn fire_due(
    modifiers: &mut ActiveModifiers,
    reversions: &mut Vec<PendingReversion>,
    now_ms: f64,
) {
    while let Some(first) = reversions.first() {
        if first.fire_at_ms > now_ms {
            break;
        }
        let due = reversions.remove(0);
        match due.baseline {
            Baseline::Multiplier(v) => modifiers.score_multiplier = v,
            Baseline::Shield(v) => modifiers.shield = v,
            Baseline::JumpForce(v) => modifiers.jump_force = v,
            Baseline::TimeDilation(v) => modifiers.time_dilation = v,
        }
        log::debug!("power-up reverted: {:?}", due.kind);
    }
}
