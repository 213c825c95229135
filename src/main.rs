//! Skyline Dash entry point
//!
//! The crate ships no drawing layer; the native binary runs a short
//! headless demo of the full stack (clock, session, persistence) with a
//! naive pilot and logs the outcome.

use skyline_dash::{Clock, GameSession, JsonFileStore, SystemClock};

/// Demo length cap, ~60 s at 60 fps
const MAX_DEMO_FRAMES: u32 = 3_600;

fn main() {
    env_logger::init();
    log::info!("Skyline Dash (headless demo) starting...");

    let clock = SystemClock::new();
    let store = JsonFileStore::new("best_score.json");
    let mut session = GameSession::new(0x5EED, clock.now_ms(), store);

    let frame = std::time::Duration::from_millis(16);
    for _ in 0..MAX_DEMO_FRAMES {
        let now = clock.now_ms();
        if pilot_wants_jump(&session) {
            session.press(now);
        }
        session.on_frame(now);

        if session.scene().game_over {
            break;
        }
        std::thread::sleep(frame);
    }

    let scene = session.scene();
    if scene.game_over {
        log::info!(
            "run over: score {}, best {}",
            scene.hud.score,
            scene.hud.best_score
        );
    } else {
        log::info!("demo cap reached: score {}", scene.hud.score);
    }
}

/// Jump when the nearest obstacle closes in on the player.
fn pilot_wants_jump(session: &GameSession<JsonFileStore>) -> bool {
    let state = session.state();
    if !state.player.grounded {
        return false;
    }
    let player_front = state.player.pos.x + state.player.size.x;
    state.obstacles.iter().any(|o| {
        let gap = o.pos.x - player_front;
        (0.0..60.0).contains(&gap)
    })
}
