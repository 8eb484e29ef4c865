//! Game state and core simulation types
//!
//! Everything the presentation layer may read lives here: the session
//! (phase, score, level, lives) and the active entities (player,
//! platforms, stars). Mutation happens only through [`crate::sim::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{self, BehaviorSpec, PlatformSpec};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, waiting for a start action
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, overlay shown
    Paused,
    /// Run ended - [`GameState::victory`] says whether it was a win
    GameOver,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// Set on jump, cleared on landing. Blocks double jumps.
    pub jumping: bool,
    /// Sprite mirroring state; flips only on the tick direction changes
    pub facing_right: bool,
}

impl Player {
    /// A player at the level start point: zero velocity, grounded, facing
    /// right
    pub fn spawn() -> Self {
        let mut rect = Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT);
        rect.set_center_x(SPAWN_CENTER_X);
        rect.set_bottom(SPAWN_BOTTOM_Y);
        Self {
            rect,
            vel: Vec2::ZERO,
            jumping: false,
            facing_right: true,
        }
    }

    /// One tick of kinematics: gravity, friction, held input, then
    /// integration. Horizontal movement (with its bounds clamp) resolves
    /// before vertical movement, so the two axes are checked on different
    /// sub-steps of the same tick and corner clipping stays possible.
    pub fn advance(&mut self, held_left: bool, held_right: bool) {
        self.vel.y = (self.vel.y + GRAVITY).min(MAX_FALL_SPEED);
        self.vel.x *= FRICTION;

        if held_left {
            self.vel.x = (self.vel.x - RUN_ACCEL).max(-MAX_RUN_SPEED);
            if self.facing_right {
                self.facing_right = false;
            }
        }
        if held_right {
            self.vel.x = (self.vel.x + RUN_ACCEL).min(MAX_RUN_SPEED);
            if !self.facing_right {
                self.facing_right = true;
            }
        }

        self.rect.pos.x += self.vel.x;
        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
            self.vel.x = 0.0;
        }
        if self.rect.right() > SCREEN_WIDTH {
            self.rect.set_right(SCREEN_WIDTH);
            self.vel.x = 0.0;
        }

        self.rect.pos.y += self.vel.y;
    }

    /// Jump impulse. No effect while airborne.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.vel.y = -JUMP_SPEED;
            self.jumping = true;
        }
    }
}

/// Per-kind platform behavior state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Horizontal oscillation around `origin_x`
    Moving {
        speed: f32,
        distance: f32,
        origin_x: f32,
        moved: f32,
    },
    /// Counts down `remaining` while stood on; gone for good at zero
    Vanishing { remaining: f32, visible: bool },
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn from_spec(spec: &PlatformSpec) -> Self {
        let rect = Rect::new(spec.x, spec.y, spec.width, PLATFORM_HEIGHT);
        let kind = match spec.behavior {
            BehaviorSpec::Static => PlatformKind::Static,
            BehaviorSpec::Moving { speed, distance } => PlatformKind::Moving {
                speed,
                distance,
                origin_x: spec.x,
                moved: 0.0,
            },
            BehaviorSpec::Vanishing { time } => PlatformKind::Vanishing {
                remaining: time,
                visible: true,
            },
        };
        Self { rect, kind }
    }

    /// Whether the platform is still part of the playfield
    pub fn visible(&self) -> bool {
        !matches!(
            self.kind,
            PlatformKind::Vanishing { visible: false, .. }
        )
    }

    /// One tick of platform behavior. `standing` is the exact
    /// bottom-equals-top test computed by the caller; only vanishing
    /// platforms consume it.
    pub fn advance(&mut self, standing: bool) {
        match &mut self.kind {
            PlatformKind::Static => {}
            PlatformKind::Moving {
                speed,
                distance,
                origin_x,
                moved,
            } => {
                *moved += *speed;
                // The reversal applies from the next tick, so the offset
                // can overshoot `distance` by one tick's speed.
                if moved.abs() > *distance {
                    *speed = -*speed;
                }
                self.rect.pos.x = *origin_x + *moved;
            }
            PlatformKind::Vanishing { remaining, visible } => {
                if *visible && standing {
                    *remaining -= SIM_DT;
                    if *remaining <= 0.0 {
                        *visible = false;
                        // Parked below the screen for the rest of the
                        // level instance; never comes back.
                        self.rect.pos.y = SCREEN_HEIGHT + VANISH_PARK_OFFSET;
                    }
                }
            }
        }
    }
}

/// A star pickup, bobbing above its platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub rect: Rect,
    origin_y: f32,
    phase: f32,
}

impl Star {
    pub fn new(x: f32, y: f32, phase: f32) -> Self {
        Self {
            rect: Rect::new(x, y, STAR_SIZE, STAR_SIZE),
            origin_y: y,
            phase,
        }
    }

    /// Vertical bob around the seeded origin
    pub fn bob(&mut self) {
        self.phase += STAR_BOB_STEP;
        self.rect.pos.y = self.origin_y + self.phase.sin() * STAR_BOB_AMPLITUDE;
    }
}

/// Read-only HUD snapshot for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    pub stars_collected: usize,
    pub stars_total: usize,
    pub victory: bool,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Current level ordinal, 1-based
    pub level: u32,
    pub lives: u8,
    /// Meaningful only in GameOver: true when all levels were cleared
    pub victory: bool,
    /// Simulated PLAYING ticks since session start
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub stars: Vec<Star>,
    /// Star count the current level started with
    pub total_stars: usize,
}

impl GameState {
    /// Create a session at the menu with level 1 already seeded, so the
    /// menu can draw a playfield backdrop
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            lives: STARTING_LIVES,
            victory: false,
            time_ticks: 0,
            player: Player::spawn(),
            platforms: Vec::new(),
            stars: Vec::new(),
            total_stars: 0,
        };
        state.load_level();
        state
    }

    /// Full session reset: score, level, lives, and a fresh level 1
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = STARTING_LIVES;
        self.victory = false;
        self.load_level();
    }

    /// Rebuild the current level's platforms and stars from the catalog
    /// and respawn the player at the start point
    pub fn load_level(&mut self) {
        let specs = level::platforms_for(self.level);
        // Bob phases come from a per-level stream so reloading the same
        // level in the same run reproduces the same field.
        let mut rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.level as u64));

        self.player = Player::spawn();
        self.platforms = specs.iter().map(Platform::from_spec).collect();
        self.stars = specs
            .iter()
            .map(|spec| {
                let phase = rng.random_range(0.0..std::f32::consts::TAU);
                Star::new(spec.x + spec.width / 2.0, spec.y - STAR_RISE, phase)
            })
            .collect();
        self.total_stars = self.stars.len();
    }

    /// Life-loss procedure: in-level progress is lost, the level number
    /// is not
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Player fell - lives remaining: {}", self.lives);
        if self.lives > 0 {
            self.load_level();
        } else {
            self.victory = false;
            self.phase = GamePhase::GameOver;
        }
    }

    pub fn stars_collected(&self) -> usize {
        self.total_stars - self.stars.len()
    }

    /// Read-only snapshot for HUD rendering
    pub fn hud(&self) -> Hud {
        Hud {
            phase: self.phase,
            score: self.score,
            level: self.level,
            lives: self.lives,
            stars_collected: self.stars_collected(),
            stars_total: self.total_stars,
            victory: self.victory,
        }
    }
}
