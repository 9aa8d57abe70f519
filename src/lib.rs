//! Space Battle - a split-arena spaceship duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ships, bullets, AI, per-tick pipeline)
//! - `app`: Screen state machine and the main loop
//! - `presentation`: Rendering/audio/input port consumed by the core
//! - `audio`: Sound cue routing and volume handling
//! - `platform`: Frame-rate governor
//! - `settings`: JSON-backed preferences

pub mod app;
pub mod audio;
pub mod error;
pub mod platform;
pub mod presentation;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{App, Phase};
pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Target ticks per second
    pub const FPS: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: i32 = 900;
    pub const ARENA_HEIGHT: i32 = 500;
    /// Width of the dividing border, centered horizontally
    pub const BORDER_WIDTH: i32 = 10;

    /// Ship defaults
    pub const SHIP_WIDTH: i32 = 115;
    pub const SHIP_HEIGHT: i32 = 110;
    /// Pixels per tick
    pub const SHIP_VEL: i32 = 5;
    pub const LEFT_START: IVec2 = IVec2::new(100, 300);
    pub const RIGHT_START: IVec2 = IVec2::new(700, 300);
    pub const START_HEALTH: i32 = 10;

    /// Bullet defaults
    pub const BULLET_WIDTH: i32 = 10;
    pub const BULLET_HEIGHT: i32 = 5;
    /// Pixels per tick
    pub const BULLET_VEL: i32 = 7;
    /// Maximum live bullets per side
    pub const MAX_BULLETS: usize = 3;

    /// Minimum time between AI shots
    pub const AI_FIRE_INTERVAL_MS: u32 = 800;

    /// Background animation frame delay
    pub const FRAME_DELAY_MS: u32 = 100;

    /// Intro loading bar fill per tick (percent)
    pub const INTRO_PROGRESS_PER_TICK: f32 = 0.5;
    pub const INTRO_COLOR_CHANGE_MS: u64 = 200;
    pub const INTRO_PROMPT_BLINK_MS: u64 = 500;
}
