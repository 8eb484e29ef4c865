//! Star Hopper - a small space platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//!
//! Rendering and input are external collaborators: a frontend fills a
//! [`sim::TickInput`] once per frame, calls [`sim::tick`] at the fixed
//! tick rate, and draws from the read-only state it can see on
//! [`sim::GameState`].

pub mod sim;

pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 24.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Terminal fall speed
    pub const MAX_FALL_SPEED: f32 = 15.0;
    /// Horizontal velocity decay factor per tick
    pub const FRICTION: f32 = 0.9;
    /// Horizontal acceleration per tick of held input
    pub const RUN_ACCEL: f32 = 1.0;
    /// Horizontal speed cap
    pub const MAX_RUN_SPEED: f32 = 6.0;
    /// Upward impulse applied by a jump
    pub const JUMP_SPEED: f32 = 15.0;

    /// Platform height
    pub const PLATFORM_HEIGHT: f32 = 30.0;
    /// Landing is rejected once the player's bottom edge is this far past
    /// a platform's vertical center (entered from underneath)
    pub const LANDING_TOLERANCE: f32 = 15.0;
    /// Vanished platforms are parked this far below the screen
    pub const VANISH_PARK_OFFSET: f32 = 100.0;

    /// Star pickup size
    pub const STAR_SIZE: f32 = 20.0;
    /// Stars sit this far above their platform's top edge
    pub const STAR_RISE: f32 = 30.0;
    /// Vertical bob amplitude
    pub const STAR_BOB_AMPLITUDE: f32 = 5.0;
    /// Bob phase advance per tick (radians)
    pub const STAR_BOB_STEP: f32 = 0.05;
    /// Points per collected star
    pub const STAR_SCORE: u64 = 10;

    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;
    /// Number of hand-authored levels
    pub const MAX_LEVEL: u32 = 6;

    /// Player spawn point (center x, bottom y) - standing on the lowest
    /// platform row every level shares
    pub const SPAWN_CENTER_X: f32 = SCREEN_WIDTH / 4.0;
    pub const SPAWN_BOTTOM_Y: f32 = SCREEN_HEIGHT - 100.0;
}
