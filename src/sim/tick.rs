//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the session by exactly one tick (1/60 s
//! of game time). The state machine is dispatched here: Menu -> Playing
//! <-> Paused, Playing -> GameOver, GameOver -> Playing or Menu. Input is
//! state-scoped; actions outside their phase are ignored.

use super::collision::{fell_off_screen, resolve_landing};
use super::state::{GamePhase, GameState};
use crate::consts::{MAX_LEVEL, STAR_SCORE};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Continuous held state for horizontal movement
    pub held_left: bool,
    pub held_right: bool,
    /// Jump key press (edge-triggered, not held)
    pub jump: bool,
    /// Pause key press
    pub pause: bool,
    /// Menu "start game" action
    pub start: bool,
    /// Pause overlay "resume" action
    pub resume: bool,
    /// Game-over "play again" action
    pub restart: bool,
    /// Overlay "back to menu" action
    pub to_menu: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.reset_session();
                state.phase = GamePhase::Playing;
                log::info!("Session started (seed {})", state.seed);
            }
        }
        GamePhase::Paused => {
            if input.resume {
                state.phase = GamePhase::Playing;
            } else if input.to_menu {
                state.phase = GamePhase::Menu;
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_session();
                state.phase = GamePhase::Playing;
                log::info!("Session restarted");
            } else if input.to_menu {
                state.phase = GamePhase::Menu;
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
            if input.jump {
                state.player.jump();
            }
            advance_playfield(state, input);
        }
    }
}

/// One PLAYING tick: kinematics, landing, fall-off, platform behavior,
/// star pickups, level progression - in that order.
fn advance_playfield(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    state.player.advance(input.held_left, input.held_right);
    for star in &mut state.stars {
        star.bob();
    }

    resolve_landing(&mut state.player, &state.platforms);

    if fell_off_screen(&state.player.rect) {
        // Short-circuits the rest of the tick: no platform or star
        // updates happen on a fall.
        state.lose_life();
        return;
    }

    // The standing test is exact equality, not a band: sub-pixel drift
    // skips the vanish countdown for that tick.
    let player_bottom = state.player.rect.bottom();
    for platform in &mut state.platforms {
        let standing = player_bottom == platform.rect.top();
        platform.advance(standing);
    }

    let player_rect = state.player.rect;
    let before = state.stars.len();
    state.stars.retain(|star| !player_rect.overlaps(&star.rect));
    let collected = before - state.stars.len();
    state.score += collected as u64 * STAR_SCORE;

    if state.stars.is_empty() {
        if state.level < MAX_LEVEL {
            state.level += 1;
            log::info!("Level cleared - advancing to level {}", state.level);
            state.load_level();
        } else {
            state.victory = true;
            state.phase = GamePhase::GameOver;
            log::info!("All levels cleared - final score {}", state.score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::{BehaviorSpec, PlatformSpec};
    use crate::sim::state::{Platform, PlatformKind, Star};

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    /// Drop the player below the screen and run one tick so the fall is
    /// detected.
    fn force_fall(state: &mut GameState) {
        state.player.rect.pos.y = SCREEN_HEIGHT + 1.0;
        state.player.vel.y = 1.0;
        tick(state, &TickInput::default());
    }

    #[test]
    fn test_menu_start_resets_session() {
        let mut state = GameState::new(42);
        state.score = 990;
        state.lives = 1;
        state.level = 4;

        // Everything but `start` is ignored at the menu.
        tick(
            &mut state,
            &TickInput {
                jump: true,
                pause: true,
                restart: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 990);

        tick(
            &mut state,
            &TickInput {
                start: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = playing_state(1);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Paused);

        let ticks_before = state.time_ticks;
        let pos_before = state.player.rect.pos;
        tick(
            &mut state,
            &TickInput {
                held_right: true,
                jump: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.time_ticks, ticks_before);
        assert_eq!(state.player.rect.pos, pos_before);

        tick(
            &mut state,
            &TickInput {
                resume: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_to_menu() {
        let mut state = playing_state(1);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..TickInput::default()
            },
        );
        tick(
            &mut state,
            &TickInput {
                to_menu: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_standing_player_is_stable() {
        let mut state = playing_state(3);
        // Spawn is on top of the first platform; a hundred idle ticks
        // later the player is still standing there.
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.rect.bottom(), SPAWN_BOTTOM_Y);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_jump_and_land_clears_jumping() {
        let mut state = playing_state(3);
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..TickInput::default()
            },
        );
        assert!(state.player.jumping);
        assert!(state.player.vel.y < 0.0);

        // The arc tops out around 232 px above spawn, so the fall back
        // down catches the third platform (top at 340) on the way.
        for _ in 0..90 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.player.jumping);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(state.player.rect.bottom(), SCREEN_HEIGHT - 260.0);
    }

    #[test]
    fn test_fall_decrements_life_and_reloads_level() {
        let mut state = playing_state(5);
        let platforms_before = state.platforms.len();

        force_fall(&mut state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.rect.bottom(), SPAWN_BOTTOM_Y);
        assert_eq!(state.platforms.len(), platforms_before);
        assert_eq!(state.stars.len(), state.total_stars);

        force_fall(&mut state);
        assert_eq!(state.lives, 1);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_last_fall_ends_game() {
        let mut state = playing_state(5);
        state.lives = 1;
        force_fall(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
        assert!(!state.victory);
    }

    #[test]
    fn test_fall_short_circuits_platform_updates() {
        let mut state = playing_state(5);
        state.lives = 1; // GameOver freezes everything, easy to observe
        state.platforms.push(Platform::from_spec(&PlatformSpec {
            x: 600.0,
            y: 200.0,
            width: 150.0,
            behavior: BehaviorSpec::Moving {
                speed: 2.0,
                distance: 200.0,
            },
        }));

        force_fall(&mut state);
        let PlatformKind::Moving { moved, .. } = state.platforms[5].kind else {
            panic!("kind changed");
        };
        assert_eq!(moved, 0.0);
    }

    /// Warp the player over a star so the rects overlap even after the
    /// warp tick's gravity step and the star's bob step.
    fn warp_onto(state: &mut GameState, target: crate::sim::Rect) {
        state.player.rect.set_center_x(target.center_x());
        state.player.rect.set_bottom(target.bottom() + 5.0);
        state.player.vel = glam::Vec2::ZERO;
    }

    /// Warp the player onto each star of the current level in turn,
    /// ticking once per warp so the pickup resolves. Stops as soon as the
    /// level advances (or the run ends) so the fresh field stays intact.
    fn collect_all_stars(state: &mut GameState) {
        let level = state.level;
        while state.phase == GamePhase::Playing
            && state.level == level
            && !state.stars.is_empty()
        {
            let target = state.stars[0].rect;
            warp_onto(state, target);
            tick(state, &TickInput::default());
        }
    }

    #[test]
    fn test_star_pickup_awards_score_once() {
        let mut state = playing_state(9);
        let stars_before = state.stars.len();

        let target = state.stars[0].rect;
        warp_onto(&mut state, target);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.stars.len(), stars_before - 1);
        assert_eq!(state.score, STAR_SCORE);
        assert_eq!(state.stars_collected(), 1);
    }

    #[test]
    fn test_level_one_clear_advances_with_fresh_field() {
        let mut state = playing_state(11);
        assert_eq!(state.total_stars, 5);

        collect_all_stars(&mut state);

        assert_eq!(state.level, 2);
        assert_eq!(state.score, 50);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.stars.len(), 6);
        assert_eq!(state.platforms.len(), 6);
        assert_eq!(state.player.rect.bottom(), SPAWN_BOTTOM_Y);
        assert_eq!(state.player.rect.center_x(), SPAWN_CENTER_X);
    }

    #[test]
    fn test_final_level_clear_is_victory() {
        let mut state = playing_state(13);
        state.level = MAX_LEVEL;
        state.load_level();

        collect_all_stars(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.victory);
        assert_eq!(state.level, MAX_LEVEL);
        assert!(state.score > 0);
    }

    #[test]
    fn test_full_run_reaches_victory() {
        let mut state = playing_state(17);
        let mut expected_score = 0;
        for level in 1..=MAX_LEVEL {
            assert_eq!(state.level, level);
            expected_score += state.total_stars as u64 * STAR_SCORE;
            collect_all_stars(&mut state);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.victory);
        assert_eq!(state.score, expected_score);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing_state(5);
        state.lives = 1;
        force_fall(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(!state.victory);
    }

    #[test]
    fn test_vanishing_platform_drains_under_standing_player() {
        let mut state = playing_state(19);
        // Swap the field for a single vanishing platform under the
        // player, with one unreachable star so the level can't complete.
        state.platforms = vec![Platform::from_spec(&PlatformSpec {
            x: 100.0,
            y: SPAWN_BOTTOM_Y,
            width: 300.0,
            behavior: BehaviorSpec::Vanishing { time: 0.5 },
        })];
        state.stars = vec![Star::new(700.0, 50.0, 0.0)];
        state.total_stars = 1;

        // Half a second of standing drains it, then the floor is gone
        // and the player falls out.
        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.platforms[0].visible());

        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_determinism() {
        let script = |state: &mut GameState| {
            for t in 0..600u32 {
                let input = TickInput {
                    held_right: t % 3 != 0,
                    held_left: t % 7 == 0,
                    jump: t % 45 == 0,
                    ..TickInput::default()
                };
                tick(state, &input);
            }
        };

        let mut a = playing_state(99999);
        let mut b = playing_state(99999);
        script(&mut a);
        script(&mut b);

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.player.rect, b.player.rect);
        assert_eq!(a.player.vel, b.player.vel);
        assert_eq!(a.stars.len(), b.stars.len());
    }
}
