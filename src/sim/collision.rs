//! Collision resolution between the player and the playfield
//!
//! Landing is resolved on the vertical axis only, from the post-move
//! rectangle overlap. There is no per-axis sweep: horizontal movement was
//! already clamped inside the player's own update, so fast diagonal
//! movement can clip a platform corner. That is the intended behavior,
//! not a bug.

use super::rect::Rect;
use super::state::{Platform, Player};
use crate::consts::{LANDING_TOLERANCE, SCREEN_HEIGHT};

/// Index of the platform the player would land on: among platforms
/// overlapping the player, the one lowest on screen (greatest bottom
/// edge). Vanished platforms are parked far below the screen and can
/// never overlap, so they need no special casing here.
pub fn landing_candidate(player: &Rect, platforms: &[Platform]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, platform) in platforms.iter().enumerate() {
        if !player.overlaps(&platform.rect) {
            continue;
        }
        let bottom = platform.rect.bottom();
        match best {
            Some((_, current)) if current >= bottom => {}
            _ => best = Some((i, bottom)),
        }
    }
    best.map(|(i, _)| i)
}

/// Commit a landing if the player is falling onto a platform's surface.
/// Returns true when the player was snapped onto it.
///
/// The tolerance band rejects the landing once the player's bottom edge
/// has passed well below the surface (entered from underneath); such a
/// player keeps falling through.
pub fn resolve_landing(player: &mut Player, platforms: &[Platform]) -> bool {
    if player.vel.y <= 0.0 {
        return false;
    }
    let Some(idx) = landing_candidate(&player.rect, platforms) else {
        return false;
    };
    let surface = &platforms[idx].rect;
    if player.rect.bottom() < surface.center_y() + LANDING_TOLERANCE {
        player.rect.set_bottom(surface.top());
        player.vel.y = 0.0;
        player.jumping = false;
        return true;
    }
    false
}

/// True once the player's top edge has passed below the screen
pub fn fell_off_screen(player: &Rect) -> bool {
    player.top() > SCREEN_HEIGHT
}
