//! Render snapshot
//!
//! The core never draws. Each frame the driver hands the external drawing
//! layer a plain-data view: sprite rectangles, the background scroll
//! offset, and the HUD text fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, PowerUpKind};

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Obstacle,
    PowerUp(PowerUpKind),
}

/// One drawable rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// HUD text fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub best_score: u64,
    /// Labels for the modifiers currently in effect
    pub modifier_labels: Vec<String>,
}

/// Read-only view of one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    pub background_offset: f32,
    pub hud: Hud,
    pub game_over: bool,
}

/// Build the per-frame snapshot for the drawing layer.
pub fn snapshot(state: &GameState) -> Scene {
    let mut sprites = Vec::with_capacity(1 + state.obstacles.len() + state.powerups.len());
    sprites.push(Sprite {
        kind: SpriteKind::Player,
        pos: state.player.pos,
        size: state.player.size,
    });
    for obstacle in &state.obstacles {
        sprites.push(Sprite {
            kind: SpriteKind::Obstacle,
            pos: obstacle.pos,
            size: obstacle.size,
        });
    }
    for powerup in &state.powerups {
        sprites.push(Sprite {
            kind: SpriteKind::PowerUp(powerup.kind),
            pos: powerup.pos,
            size: powerup.size,
        });
    }

    let mut modifier_labels = Vec::new();
    if state.modifiers.score_multiplier > 1 {
        modifier_labels.push(format!("Multiplier: x{}", state.modifiers.score_multiplier));
    }
    if state.modifiers.shield {
        modifier_labels.push("Shield Active!".to_string());
    }
    if state.modifiers.time_dilation {
        modifier_labels.push("Time Slowed!".to_string());
    }

    Scene {
        sprites,
        background_offset: state.background_offset,
        hud: Hud {
            score: state.score,
            best_score: state.best_score,
            modifier_labels,
        },
        game_over: state.phase == GamePhase::GameOver,
    }
}
