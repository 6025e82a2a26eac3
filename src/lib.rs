//! Coin Hop - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, patrol AI, session state)
//! - `level`: Plain-data level descriptions and the built-in level
//! - `settings`: Viewport and audio preferences
//! - `audio`: Event-driven sound effect dispatch
//! - `loader`: JSON file loading for the native runner

pub mod audio;
pub mod error;
pub mod level;
pub mod loader;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use level::LevelData;
pub use settings::Settings;

/// Game configuration constants (units are pixels and ticks)
pub mod consts {
    /// Downward acceleration added to every actor each tick
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity applied by a jump (negative is up)
    pub const JUMP_FORCE: f32 = -12.0;
    /// Player target horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Hard cap on player horizontal speed
    pub const MAX_SPEED: f32 = 7.0;
    /// Extra damping applied when no direction is held
    pub const FRICTION: f32 = 0.85;
    /// Blend factor toward the target horizontal speed
    pub const ACCEL_LERP: f32 = 0.2;
    /// Horizontal speeds below this snap to zero
    pub const VELOCITY_DEAD_ZONE: f32 = 0.1;

    /// Enemy patrol speed
    pub const ENEMY_SPEED: f32 = 1.0;
    /// How far below the feet the edge probe looks
    pub const EDGE_PROBE_DEPTH: f32 = 5.0;
    /// Extra band below a platform's bottom that still counts as support
    pub const EDGE_PROBE_TOLERANCE: f32 = 10.0;
    /// Ticks a stomped enemy stays squashed before it is gone
    pub const STOMP_SQUASH_TICKS: u32 = 30;

    /// Upward bounce after a successful stomp
    pub const STOMP_BOUNCE: f32 = -6.0;
    pub const STOMP_REWARD: u64 = 50;
    pub const COIN_REWARD: u64 = 10;

    /// Coin bobbing: radians advanced per tick, and amplitude in pixels
    pub const COIN_BOB_STEP: f32 = 0.08;
    pub const COIN_BOB_AMPLITUDE: f32 = 3.0;

    /// Camera smoothing factor per tick
    pub const CAMERA_LERP: f32 = 0.1;

    /// Default world and viewport dimensions
    pub const LEVEL_WIDTH: f32 = 3000.0;
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// How far below the viewport the player may drop before the run is lost
    pub const FALL_MARGIN: f32 = 100.0;
}

/// Linear interpolation from `a` toward `b` by factor `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
