//! Per-tick orchestration
//!
//! The host calls [`tick`] once per frame with the resolved input. Ordering
//! inside a tick is fixed: clock, fire, ballistics, gallery, collisions.
//! The controller owns no state of its own; everything lives in
//! [`GameState`].

use glam::Vec2;

use super::ballistics;
use super::collision;
use super::rng::UniformDraws;
use super::state::{GameEvent, GameState, RoundPhase};

/// Input commands for a single tick, resolved by the host from whatever
/// device is active (mouse, touch, gamepad)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Aim point in canvas coordinates
    pub aim: Vec2,
    /// Fire requested this tick
    pub fire: bool,
    /// Horizontal steer axis in [-1, 1]
    pub steer: f32,
}

/// Advance the round by one frame. Returns the events this tick produced.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    draws: &mut impl UniformDraws,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_playing() {
        // Fire requests outside an active round are silently dropped
        return events;
    }

    // A stalled tab can hand us a huge delta; cap it
    let dt = dt.min(state.tuning.max_dt);

    if state.clock.advance(dt) {
        state.phase = RoundPhase::Over;
        log::info!("round over: final score {}", state.score);
        events.push(GameEvent::RoundEnded {
            final_score: state.score,
        });
        return events;
    }

    // Steer the platform, clamped to the canvas
    if input.steer != 0.0 {
        let steer = input.steer.clamp(-1.0, 1.0);
        let half = state.tuning.player_width / 2.0;
        state.player_x = (state.player_x + steer * state.tuning.player_speed * dt)
            .clamp(half, state.tuning.canvas_width - half);
    }

    // Rate-limited fire; requests during cooldown are silently dropped
    state.cooldown = (state.cooldown - dt).max(0.0);
    if input.fire && state.cooldown == 0.0 {
        let projectile = ballistics::spawn_projectile(state.fire_origin(), input.aim, &state.tuning);
        state.projectiles.push(projectile);
        state.cooldown = state.tuning.fire_cooldown;
    }

    // Projectile arcs; anything past the cull margins is dropped
    for projectile in &mut state.projectiles {
        ballistics::integrate(projectile, dt);
        if ballistics::out_of_bounds(
            projectile,
            state.tuning.canvas_width,
            state.tuning.canvas_height,
        ) {
            projectile.alive = false;
        }
    }

    // Target motion, fades, respawns
    state.gallery.update(&state.tuning, draws, dt);

    // Hits against the aimed row only
    collision::collision_pass(state, draws, input.aim, &mut events);

    state.projectiles.retain(|p| p.alive);

    events
}
