//! Midway Shot - a carnival shooting-gallery arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ballistics, gallery, collisions, clock)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Persistent top-5 ranking
//! - `settings`: Player preferences
//!
//! Rendering, DOM panels and input-device polling live in the host: the host
//! fills a [`sim::TickInput`] each frame, calls [`sim::tick`], and draws from
//! the updated [`sim::GameState`].

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Structural constants (gameplay balance lives in [`tuning::Tuning`])
pub mod consts {
    /// Horizontal margin beyond the canvas before a projectile is culled
    pub const OOB_MARGIN_X: f32 = 100.0;
    /// Vertical margin beyond the canvas before a projectile is culled
    pub const OOB_MARGIN_Y: f32 = 200.0;

    /// Column gap cap; narrower canvases shrink the gap instead
    pub const COLUMN_GAP_MAX: f32 = 120.0;
    /// Horizontal space reserved at the canvas edges by the gallery layout
    pub const GALLERY_SIDE_MARGIN: f32 = 200.0;

    /// Target box width as a fraction of the base target size
    pub const TARGET_WIDTH_FACTOR: f32 = 0.7;
    /// Target box height as a fraction of the base target size
    pub const TARGET_HEIGHT_FACTOR: f32 = 0.6;
    /// Smallest size scale a spawn can draw
    pub const SIZE_SCALE_MIN: f32 = 1.0 / 3.0;
    /// Largest size scale a spawn can draw
    pub const SIZE_SCALE_MAX: f32 = 1.0;

    /// Minimum particles in a destruction burst
    pub const BURST_COUNT_MIN: usize = 10;
    /// Random extra particles on top of the minimum (exclusive)
    pub const BURST_COUNT_SPREAD: usize = 6;

    /// Glyphs scattered when a regular target pops
    pub const CHARM_GLYPHS: [char; 3] = ['□', '☆', '♡'];
    /// Glyph scattered when a penalty target pops
    pub const PENALTY_GLYPH: char = '■';
    /// Palette index of the charm tint (renderer lookup)
    pub const CHARM_TINT: u32 = 0;
    /// First of two penalty shard tints; the second is `PENALTY_TINT + 1`
    pub const PENALTY_TINT: u32 = 1;
}

/// Wasm startup: route logs and panic messages to the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
