//! Sharkie - side-scrolling underwater action game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, level generation, combat)
//! - `renderer`: Render pass over a host-provided 2D drawing surface
//! - `platform`: Host input mapping
//! - `audio`: Sound cue dispatch to a host audio sink
//! - `session`: Game session driving the simulation and render ticks

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod sprites;

pub use error::GameError;
pub use session::{GameSession, Screen, ScreenSink};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step in milliseconds; speeds are expressed per step
    pub const SIM_STEP_MS: f32 = 16.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Collision/combat resolution cadence (10 Hz)
    pub const COMBAT_INTERVAL_MS: f32 = 100.0;

    /// Level bounds for character movement
    pub const LEVEL_START_X: f32 = 230.0;
    pub const LEVEL_END_X: f32 = 24320.0;
    pub const LEVEL_START_Y: f32 = -200.0;
    pub const LEVEL_END_Y: f32 = 280.0;

    /// Camera keeps the character this far from the left edge
    pub const CAMERA_LEAD: f32 = 220.0;

    /// Character defaults
    pub const CHARACTER_START_X: f32 = 220.0;
    pub const CHARACTER_START_Y: f32 = 150.0;
    pub const CHARACTER_SPEED: f32 = 10.0;
    pub const CHARACTER_MAX_ENERGY: i32 = 100;
    /// Animation beat for the character
    pub const CHARACTER_FRAME_MS: f32 = 125.0;
    /// One idle count per beat
    pub const IDLE_BEAT_MS: f32 = 100.0;
    /// Idle counts before the character dozes off and sinks
    pub const IDLE_SINK_AFTER: u32 = 150;
    /// Idle counts before the sleeping loop replaces the fall-asleep frames
    pub const IDLE_SLEEP_AFTER: u32 = 164;
    /// Sinking/drifting runs at a fifth of normal speed
    pub const DRIFT_DIVISOR: f32 = 5.0;
    /// Hurt window after taking damage
    pub const HURT_WINDOW_MS: f64 = 1500.0;
    /// Death animation length before the character freezes
    pub const SHOCK_DEATH_MS: f32 = 1350.0;
    pub const POISON_DEATH_MS: f32 = 1600.0;
    /// Fin-slap damage during the windup and on the finishing frame
    pub const SLAP_DAMAGE: i32 = 1;
    pub const FINISHING_SLAP_DAMAGE: i32 = 2;
    /// Delay between the character dying and the game-over screen
    pub const GAME_OVER_DELAY_MS: f64 = 2000.0;

    /// Ammo per collected bottle and its cap
    pub const BOTTLE_AMMO: u32 = 20;
    pub const MAX_AMMO: u32 = 100;
    /// Coins available in a level
    pub const TOTAL_COINS: u32 = 25;

    /// Bubble flight range before it pops
    pub const BUBBLE_RANGE: f32 = 1000.0;
    pub const BUBBLE_SIZE: f32 = 75.0;

    /// Boss encounter trigger on character x
    pub const BOSS_TRIGGER_X: f32 = 23000.0;
    pub const BOSS_START_X: f32 = 24000.0;

    /// Music volume used for the background and boss tracks
    pub const MUSIC_VOLUME: f32 = 0.2;
}
