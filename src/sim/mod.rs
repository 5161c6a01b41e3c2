//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One owned [`GameState`] context, mutated only by [`tick`]
//! - Randomness only through the injected [`UniformDraws`] source
//! - Stable iteration order (row-major slots, launch-order projectiles)
//! - No rendering or platform dependencies

pub mod ballistics;
pub mod clock;
pub mod collision;
pub mod gallery;
pub mod rng;
pub mod state;
pub mod tick;

pub use ballistics::{Launch, compute_launch, integrate, out_of_bounds, spawn_projectile};
pub use clock::RoundClock;
pub use collision::{aabb_overlap, active_row, collision_pass};
pub use gallery::Gallery;
pub use rng::{PcgDraws, SequenceDraws, UniformDraws};
pub use state::{
    GameEvent, GameState, MilestoneTracker, Particle, PenaltyPop, Projectile, RoundPhase, Target,
    TargetPhase,
};
pub use tick::{TickInput, tick};
