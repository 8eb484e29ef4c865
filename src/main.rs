//! Star Hopper entry point
//!
//! No renderer is wired up in this crate (the presentation layer is an
//! external collaborator), so the binary runs a scripted headless session
//! at the fixed tick rate: start from the menu, bounce around the lower
//! platforms for up to a minute, log the HUD once per simulated second
//! and print a JSON summary at the end.

use star_hopper::consts::{MAX_LEVEL, TICK_RATE};
use star_hopper::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed_cafe);

    let mut state = GameState::new(seed);
    log::info!("Star Hopper headless run (seed {seed})");

    tick(
        &mut state,
        &TickInput {
            start: true,
            ..TickInput::default()
        },
    );

    // Scripted input: steer toward the middle of the screen and hop
    // twice a second.
    let max_ticks = 60 * TICK_RATE as u64;
    for t in 0..max_ticks {
        let input = TickInput {
            held_left: state.player.rect.center_x() > 500.0,
            held_right: state.player.rect.center_x() < 300.0,
            jump: t % 30 == 0,
            ..TickInput::default()
        };
        tick(&mut state, &input);

        if t % TICK_RATE as u64 == 0 {
            let hud = state.hud();
            log::info!(
                "t={t:>4} level {}/{MAX_LEVEL} score {} lives {} stars {}/{}",
                hud.level,
                hud.score,
                hud.lives,
                hud.stars_collected,
                hud.stars_total,
            );
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    match serde_json::to_string_pretty(&state.hud()) {
        Ok(summary) => println!("{summary}"),
        Err(err) => log::error!("Failed to encode summary: {err}"),
    }
}
