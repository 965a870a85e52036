//! Sky Siege entry point
//!
//! Headless demo driver: runs the fixed-timestep simulation with scripted
//! input and logs the HUD state once per simulated second. Rendering and
//! real input capture are external collaborators; this binary exists to
//! exercise the core.

use sky_siege::HighScores;
use sky_siege::consts::*;
use sky_siege::sim::{GamePhase, GameState, TickInput, tick};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED);
    log::info!("Sky Siege starting, seed {seed}");

    let mut state = GameState::new(seed);
    // No real asset pipeline here; report ready immediately
    state.notify_assets_ready();
    state.start_game();

    let mut scores = HighScores::new();
    let mut input = TickInput::default();
    let mut heading_right = true;

    // One simulated minute at 60 Hz: sweep the play area, fire in bursts,
    // summon an assist when wounded
    for _ in 0..60 * 60 {
        if state.player.pos.x >= PLAY_WIDTH - PLAYER_WIDTH {
            heading_right = false;
        }
        if state.player.pos.x <= 0.0 {
            heading_right = true;
        }
        input.right = heading_right;
        input.left = !heading_right;
        input.fire = state.time_ticks % 10 == 0;
        input.summon = state.player.health < 30;

        tick(&mut state, &input);

        if state.time_ticks % 60 == 0 {
            let snapshot = state.snapshot();
            log::info!(
                "t={}s score={} lives={} health={} enemies={} projectiles={}",
                state.time_ticks / 60,
                snapshot.score,
                snapshot.lives,
                snapshot.health,
                snapshot.enemies.len(),
                snapshot.projectiles.len()
            );
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    scores.add_score(state.score, state.time_ticks);
    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => log::info!("final snapshot: {json}"),
        Err(e) => log::warn!("snapshot serialization failed: {e}"),
    }
    if let Some(top) = scores.top_score() {
        log::info!("best score this run: {top}");
    }

    if state.phase == GamePhase::GameOver {
        state.acknowledge_game_over();
    }
}
