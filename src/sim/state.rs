//! Game state and core simulation types
//!
//! All round state lives in one owned [`GameState`] context; the tick
//! function mutates it and nothing else does.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::gallery::Gallery;
use super::rng::UniformDraws;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Built and waiting for the host to start (tutorial, menus)
    Ready,
    /// Clock running, targets hittable
    Playing,
    /// Clock expired; terminal, no auto-restart
    Over,
}

/// Per-slot lifecycle of a gallery target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetPhase {
    /// Fresh respawn ramping opacity 0 → 1; already hittable
    FadingIn,
    /// Fully visible and moving
    Steady,
    /// Destroyed; particles decaying until the slot respawns
    Dead {
        /// Seconds since destruction
        since: f32,
    },
}

/// A fired projectile following a gravity arc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Downward acceleration applied after each position step
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
    /// Seconds since launch
    pub age: f32,
}

/// A destruction-burst particle, owned by the target that spawned it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Glyph the renderer draws
    pub glyph: char,
    /// Palette index for the renderer
    pub tint: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds lived so far
    pub life: f32,
    /// Seconds until fully faded
    pub ttl: f32,
    pub opacity: f32,
    /// Draw scale multiplier
    pub scale: f32,
}

/// Floating "-N" text attached to a destroyed penalty target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyPop {
    pub amount: u64,
    pub pos: Vec2,
    pub opacity: f32,
    pub age: f32,
}

/// One occupant of a gallery slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Slot anchor; never changes for the lifetime of the slot
    pub base: Vec2,
    /// Current position; x oscillates around `base.x`, y stays `base.y`
    pub pos: Vec2,
    /// Signed horizontal velocity, reflected at the range bounds
    pub vx: f32,
    pub width: f32,
    pub height: f32,
    pub phase: TargetPhase,
    pub opacity: f32,
    /// Hitting this target costs points instead of scoring
    pub penalty: bool,
    /// Points awarded on destruction (penalty targets award nothing)
    pub value: u64,
    /// Visual-only burst state; reset when the slot respawns
    #[serde(skip)]
    pub particles: Vec<Particle>,
    #[serde(skip)]
    pub penalty_pop: Option<PenaltyPop>,
}

impl Target {
    /// Whether a projectile can hit this target
    #[inline]
    pub fn is_hittable(&self) -> bool {
        !matches!(self.phase, TargetPhase::Dead { .. })
    }
}

/// Score thresholds that each fire one event per round, in ascending order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneTracker {
    thresholds: Vec<u64>,
    next: usize,
}

impl MilestoneTracker {
    pub fn new(thresholds: Vec<u64>) -> Self {
        debug_assert!(
            thresholds.windows(2).all(|w| w[0] < w[1]),
            "milestone thresholds must ascend"
        );
        Self { thresholds, next: 0 }
    }

    /// Drain every unclaimed threshold the score has reached, in order.
    /// A single large increment can cross several at once.
    pub fn drain_crossed(&mut self, score: u64) -> Vec<u64> {
        let mut crossed = Vec::new();
        while let Some(&t) = self.thresholds.get(self.next) {
            if score < t {
                break;
            }
            crossed.push(t);
            self.next += 1;
        }
        crossed
    }

    /// Next unclaimed threshold, if any
    pub fn upcoming(&self) -> Option<u64> {
        self.thresholds.get(self.next).copied()
    }
}

/// Events a tick can emit for the host (toasts, sfx, end screen)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The score reached an unclaimed milestone threshold
    MilestoneReached { threshold: u64 },
    /// A target was destroyed at (row, col)
    TargetDestroyed {
        row: usize,
        col: usize,
        penalty: bool,
    },
    /// The round clock expired; fired exactly once per round
    RoundEnded { final_score: u64 },
}

/// Complete round state (the single owned simulation context)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: RoundPhase,
    pub clock: RoundClock,
    /// Aggregate score; penalty hits floor it at zero
    pub score: u64,
    /// Shown on the HUD; no rule consumes lives yet
    pub lives: u8,
    /// Horizontal position of the firing platform
    pub player_x: f32,
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
    pub projectiles: Vec<Projectile>,
    pub gallery: Gallery,
    pub milestones: MilestoneTracker,
}

impl GameState {
    /// Build a fresh round: full gallery, zero score, clock at zero
    pub fn new(tuning: Tuning, draws: &mut impl UniformDraws) -> Self {
        let gallery = Gallery::spawn(&tuning, draws);
        let clock = RoundClock::new(tuning.round_duration);
        let milestones = MilestoneTracker::new(tuning.milestones.clone());
        Self {
            phase: RoundPhase::Ready,
            clock,
            score: 0,
            lives: tuning.max_lives,
            player_x: tuning.canvas_width / 2.0,
            cooldown: 0.0,
            projectiles: Vec::new(),
            gallery,
            milestones,
            tuning,
        }
    }

    /// Begin ticking; a no-op unless the round is still Ready
    pub fn start(&mut self) {
        if self.phase == RoundPhase::Ready {
            self.phase = RoundPhase::Playing;
            log::info!(
                "round started: {}x{} gallery, {:.0}s on the clock",
                self.gallery.rows(),
                self.gallery.cols(),
                self.tuning.round_duration
            );
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == RoundPhase::Playing
    }

    /// Where projectiles launch from
    #[inline]
    pub fn fire_origin(&self) -> Vec2 {
        Vec2::new(self.player_x, self.tuning.fire_origin_y())
    }
}
