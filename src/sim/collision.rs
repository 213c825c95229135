//! Collision detection and effects
//!
//! Axis-aligned bounding-box tests between the player and the entity
//! collections. Obstacles are scanned in array order and the shield is a
//! one-shot absorption, so multiple overlaps in one frame stay
//! order-sensitive: the first hit may consume the shield and the next one
//! end the run.

use glam::Vec2;

use super::effects;
use super::state::{GamePhase, GameState};

/// Strict-inequality AABB overlap; mere edge contact is not a hit.
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Sweep obstacles, then power-ups, against the player.
///
/// A shielded obstacle hit consumes the shield and removes that obstacle
/// (no score penalty); an unshielded hit ends the run. Power-up hits
/// remove the pickup and hand it to the effects engine for activation.
/// Pickups are still collected on the frame the run ends.
pub fn resolve(state: &mut GameState, now_ms: f64) {
    let player_pos = state.player.pos;
    let player_size = state.player.size;

    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &state.obstacles[i];
        if aabb_overlap(player_pos, player_size, obstacle.pos, obstacle.size) {
            if state.modifiers.shield {
                state.modifiers.shield = false;
                state.obstacles.remove(i);
                log::debug!("shield absorbed an obstacle");
                continue;
            }
            state.phase = GamePhase::GameOver;
            log::debug!("unshielded collision at score {}", state.score);
            break;
        }
        i += 1;
    }

    let mut i = 0;
    while i < state.powerups.len() {
        let powerup = &state.powerups[i];
        if aabb_overlap(player_pos, player_size, powerup.pos, powerup.size) {
            let picked = state.powerups.remove(i);
            effects::activate(
                &mut state.modifiers,
                &mut state.reversions,
                picked.kind,
                picked.duration_ms,
                now_ms,
            );
            continue;
        }
        i += 1;
    }
}
