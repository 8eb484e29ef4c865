//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = 1/60 s, no delta-time compensation)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! A frontend drives it by filling a [`TickInput`] each frame and calling
//! [`tick`]; everything it needs to draw is readable from [`GameState`].

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{fell_off_screen, landing_candidate, resolve_landing};
pub use level::{BehaviorSpec, PlatformSpec, platforms_for};
pub use rect::Rect;
pub use state::{GamePhase, GameState, Hud, Platform, PlatformKind, Player, Star};
pub use tick::{TickInput, tick};
