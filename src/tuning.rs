//! Data-driven game balance
//!
//! Every gameplay constant lives in one serde struct so a host can retune the
//! game from JSON without touching sim code. `Default` is the shipped game.

use serde::{Deserialize, Serialize};

/// Gameplay balance values, grouped the way the game reads them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,

    // === Player platform ===
    /// Horizontal steer speed (px/s)
    pub player_speed: f32,
    /// Platform width, used to clamp the player inside the canvas
    pub player_width: f32,
    /// Fire origin height above the bottom edge (px)
    pub fire_offset_from_bottom: f32,
    /// Lives shown on the HUD; no rule consumes them yet
    pub max_lives: u8,

    // === Projectiles ===
    /// Nominal projectile speed feeding the time-of-flight model (px/s)
    pub projectile_speed: f32,
    /// Fraction of `projectile_speed` used as the launch speed scale
    pub launch_speed_factor: f32,
    /// Shortest allowed flight time (s); keeps close shots from going flat
    pub launch_time_min: f32,
    /// Longest allowed flight time (s); keeps far shots from ballooning
    pub launch_time_max: f32,
    /// Downward gravity on projectiles (px/s²)
    pub projectile_gravity: f32,
    /// Projectile box width (px)
    pub projectile_width: f32,
    /// Projectile box height (px)
    pub projectile_height: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,

    // === Gallery layout ===
    /// Number of target rows
    pub rows: usize,
    /// Targets per row
    pub cols: usize,
    /// Vertical spacing between rows (px)
    pub row_gap: f32,
    /// Y coordinate of the top row (px)
    pub top_offset: f32,
    /// Base target size before the per-spawn scale (px)
    pub target_base_size: f32,
    /// Horizontal oscillation half-range around the slot base (px)
    pub horizontal_range: f32,

    // === Spawn draws ===
    /// Slowest target speed magnitude (px/s)
    pub target_speed_min: f32,
    /// Fastest target speed magnitude (px/s)
    pub target_speed_max: f32,
    /// Probability a spawn is a penalty target
    pub penalty_chance: f32,
    /// Score of a reference-speed, full-size target
    pub base_score: u64,
    /// Speed at which a full-size target is worth exactly `base_score`
    pub reference_speed: f32,

    // === Respawn & death ===
    /// Seconds a slot stays dead before the replacement spawns
    pub respawn_delay: f32,
    /// Fade-in speed of a fresh spawn (opacity per second)
    pub fade_in_rate: f32,
    /// Downward gravity on destruction particles (px/s²)
    pub particle_gravity: f32,

    // === Penalty ===
    /// Points removed for hitting a penalty target
    pub penalty_amount: u64,
    /// Lifetime of the floating "-N" text (s)
    pub penalty_text_duration: f32,
    /// How far the floating text rises over its lifetime (px)
    pub penalty_text_rise: f32,

    // === Round clock ===
    /// Round length (s)
    pub round_duration: f32,
    /// Remaining-time threshold for the warning cue (s)
    pub warning_time: f32,

    // === Scoring milestones ===
    /// Ascending score thresholds; each fires one event per round
    pub milestones: Vec<u64>,

    /// Upper bound on a single tick's dt (s); absorbs stalls
    pub max_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,

            player_speed: 600.0,
            player_width: 80.0,
            fire_offset_from_bottom: 120.0,
            max_lives: 3,

            projectile_speed: 1400.0,
            launch_speed_factor: 0.6,
            launch_time_min: 0.25,
            launch_time_max: 1.2,
            projectile_gravity: 2200.0,
            projectile_width: 8.0,
            projectile_height: 10.0,
            fire_cooldown: 0.18,

            rows: 3,
            cols: 5,
            row_gap: 150.0,
            top_offset: 180.0,
            target_base_size: 80.0,
            horizontal_range: 120.0,

            target_speed_min: 10.0,
            target_speed_max: 160.0,
            penalty_chance: 1.0 / 7.0,
            base_score: 100,
            reference_speed: 80.0,

            respawn_delay: 1.0,
            fade_in_rate: 2.0,
            particle_gravity: 800.0,

            penalty_amount: 1000,
            penalty_text_duration: 1.0,
            penalty_text_rise: 60.0,

            round_duration: 60.0,
            warning_time: 5.0,

            milestones: vec![5000, 10000, 20000],

            max_dt: 0.05,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Horizontal speed scale of the time-of-flight model
    #[inline]
    pub fn launch_speed_scale(&self) -> f32 {
        self.projectile_speed * self.launch_speed_factor
    }

    /// Fire origin height (canvas y grows downward)
    #[inline]
    pub fn fire_origin_y(&self) -> f32 {
        self.canvas_height - self.fire_offset_from_bottom
    }
}
