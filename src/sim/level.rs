//! Fixed level catalog
//!
//! Six hand-authored levels. Levels 1-3 are static layouts of decreasing
//! platform width, level 4 introduces moving platforms, level 5 vanishing
//! ones, and level 6 mixes both. Levels are data, not code: there is no
//! procedural generation.
//!
//! Every platform seeds exactly one star above its midpoint, so the star
//! count of a level equals its platform count.

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_HEIGHT;

/// Per-platform behavior parameters as authored in the level tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BehaviorSpec {
    Static,
    /// Horizontal oscillation at `speed` px/tick, reversing once the
    /// offset from the origin exceeds `distance`
    Moving { speed: f32, distance: f32 },
    /// Disappears after `time` cumulative seconds of being stood on
    Vanishing { time: f32 },
}

/// A platform placement in a level table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub behavior: BehaviorSpec,
}

impl PlatformSpec {
    const fn fixed(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            width,
            behavior: BehaviorSpec::Static,
        }
    }

    const fn moving(x: f32, y: f32, width: f32, speed: f32, distance: f32) -> Self {
        Self {
            x,
            y,
            width,
            behavior: BehaviorSpec::Moving { speed, distance },
        }
    }

    const fn vanishing(x: f32, y: f32, width: f32, time: f32) -> Self {
        Self {
            x,
            y,
            width,
            behavior: BehaviorSpec::Vanishing { time },
        }
    }
}

const H: f32 = SCREEN_HEIGHT;

const LEVEL_1: [PlatformSpec; 5] = [
    PlatformSpec::fixed(50.0, H - 100.0, 300.0),
    PlatformSpec::fixed(350.0, H - 180.0, 300.0),
    PlatformSpec::fixed(100.0, H - 260.0, 300.0),
    PlatformSpec::fixed(400.0, H - 340.0, 300.0),
    PlatformSpec::fixed(200.0, H - 420.0, 300.0),
];

const LEVEL_2: [PlatformSpec; 6] = [
    PlatformSpec::fixed(50.0, H - 100.0, 250.0),
    PlatformSpec::fixed(400.0, H - 180.0, 250.0),
    PlatformSpec::fixed(50.0, H - 260.0, 250.0),
    PlatformSpec::fixed(400.0, H - 340.0, 250.0),
    PlatformSpec::fixed(50.0, H - 420.0, 250.0),
    PlatformSpec::fixed(400.0, H - 500.0, 250.0),
];

const LEVEL_3: [PlatformSpec; 6] = [
    PlatformSpec::fixed(50.0, H - 100.0, 200.0),
    PlatformSpec::fixed(350.0, H - 200.0, 200.0),
    PlatformSpec::fixed(650.0, H - 300.0, 200.0),
    PlatformSpec::fixed(350.0, H - 400.0, 200.0),
    PlatformSpec::fixed(50.0, H - 500.0, 200.0),
    PlatformSpec::fixed(350.0, H - 500.0, 200.0),
];

const LEVEL_4: [PlatformSpec; 5] = [
    PlatformSpec::fixed(50.0, H - 100.0, 200.0),
    PlatformSpec::moving(300.0, H - 200.0, 150.0, 2.0, 200.0),
    PlatformSpec::moving(550.0, H - 300.0, 150.0, -2.0, 200.0),
    PlatformSpec::moving(300.0, H - 400.0, 150.0, 2.0, 200.0),
    PlatformSpec::fixed(50.0, H - 500.0, 200.0),
];

const LEVEL_5: [PlatformSpec; 6] = [
    PlatformSpec::fixed(50.0, H - 100.0, 200.0),
    PlatformSpec::vanishing(300.0, H - 200.0, 180.0, 3.0),
    PlatformSpec::vanishing(550.0, H - 300.0, 180.0, 3.0),
    PlatformSpec::vanishing(300.0, H - 400.0, 180.0, 3.0),
    PlatformSpec::fixed(50.0, H - 500.0, 200.0),
    PlatformSpec::fixed(300.0, H - 500.0, 200.0),
];

const LEVEL_6: [PlatformSpec; 6] = [
    PlatformSpec::fixed(50.0, H - 100.0, 200.0),
    PlatformSpec::moving(300.0, H - 200.0, 150.0, 2.0, 200.0),
    PlatformSpec::vanishing(550.0, H - 300.0, 150.0, 2.5),
    PlatformSpec::moving(300.0, H - 400.0, 150.0, -2.0, 200.0),
    PlatformSpec::vanishing(550.0, H - 500.0, 150.0, 2.5),
    PlatformSpec::fixed(50.0, H - 500.0, 200.0),
];

/// Platform table for a level ordinal (1-based). The session clamps the
/// level to `1..=MAX_LEVEL`, so anything else never gets asked for; the
/// final table doubles as the catch-all.
pub fn platforms_for(level: u32) -> &'static [PlatformSpec] {
    match level {
        1 => &LEVEL_1,
        2 => &LEVEL_2,
        3 => &LEVEL_3,
        4 => &LEVEL_4,
        5 => &LEVEL_5,
        _ => &LEVEL_6,
    }
}
