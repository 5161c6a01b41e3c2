//! Target gallery
//!
//! Owns the fixed rows × columns grid of target slots. One canonical
//! row-major container holds exactly one occupant per slot at all times;
//! destruction marks the occupant Dead and the slot respawns in place after
//! the configured delay.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::UniformDraws;
use super::state::{Particle, PenaltyPop, Target, TargetPhase};
use crate::consts::{
    BURST_COUNT_MIN, BURST_COUNT_SPREAD, CHARM_GLYPHS, CHARM_TINT, COLUMN_GAP_MAX,
    GALLERY_SIDE_MARGIN, PENALTY_GLYPH, PENALTY_TINT, SIZE_SCALE_MAX, SIZE_SCALE_MIN,
    TARGET_HEIGHT_FACTOR, TARGET_WIDTH_FACTOR,
};
use crate::tuning::Tuning;

/// The target grid, stored row-major: slot (row, col) is `row * cols + col`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    rows: usize,
    cols: usize,
    slots: Vec<Target>,
    next_id: u32,
}

impl Gallery {
    /// Build the full grid with every slot occupied, steady and fully visible
    pub fn spawn(tuning: &Tuning, draws: &mut impl UniformDraws) -> Self {
        let mut gallery = Self {
            rows: tuning.rows,
            cols: tuning.cols,
            slots: Vec::with_capacity(tuning.rows * tuning.cols),
            next_id: 1,
        };
        for row in 0..gallery.rows {
            for col in 0..gallery.cols {
                let base = slot_base(row, col, tuning);
                let target = gallery.fresh_target(row, col, base, tuning, draws, false);
                gallery.slots.push(target);
            }
        }
        gallery
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "slot ({row},{col}) out of range");
        row * self.cols + col
    }

    pub fn at(&self, row: usize, col: usize) -> &Target {
        &self.slots[self.index(row, col)]
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Target {
        let idx = self.index(row, col);
        &mut self.slots[idx]
    }

    /// Linear row-major view over every slot
    pub fn slots(&self) -> &[Target] {
        &self.slots
    }

    /// The occupants of one row, in column order
    pub fn row_slots(&self, row: usize) -> &[Target] {
        let start = self.index(row, 0);
        &self.slots[start..start + self.cols]
    }

    /// Advance every slot by `dt`: motion and fade-in for live targets,
    /// particle decay and the respawn countdown for dead ones.
    pub fn update(&mut self, tuning: &Tuning, draws: &mut impl UniformDraws, dt: f32) {
        for idx in 0..self.slots.len() {
            match self.slots[idx].phase {
                TargetPhase::Dead { since } => {
                    let elapsed = since + dt;
                    self.tick_dead_slot(idx, elapsed, tuning, dt);
                    if elapsed >= tuning.respawn_delay {
                        let (row, col) = (idx / self.cols, idx % self.cols);
                        let base = self.slots[idx].base;
                        let fresh = self.fresh_target(row, col, base, tuning, draws, true);
                        log::debug!("slot ({row},{col}) respawned as target {}", fresh.id);
                        self.slots[idx] = fresh;
                    }
                }
                _ => self.tick_live_slot(idx, tuning, dt),
            }
        }
    }

    /// Transition a slot's occupant to Dead: burst particles, penalty text,
    /// no score bookkeeping (the collision pass owns that).
    pub fn kill(&mut self, row: usize, col: usize, tuning: &Tuning, draws: &mut impl UniformDraws) {
        let idx = self.index(row, col);
        let slot = &mut self.slots[idx];
        debug_assert!(slot.is_hittable(), "killed a slot that was already dead");

        slot.phase = TargetPhase::Dead { since: 0.0 };
        slot.particles.clear();
        slot.penalty_pop = None;

        let origin = slot.pos;
        let count = BURST_COUNT_MIN + (draws.unit() * BURST_COUNT_SPREAD as f32).floor() as usize;

        if slot.penalty {
            for _ in 0..count {
                let tint = PENALTY_TINT + (draws.unit() * 2.0).floor() as u32;
                let angle = draws.range(0.0, TAU);
                let speed = draws.range(150.0, 480.0);
                slot.particles.push(Particle {
                    glyph: PENALTY_GLYPH,
                    tint,
                    pos: origin,
                    // Flattened vertical spread plus an upward kick
                    vel: Vec2::new(angle.cos() * speed, angle.sin() * speed * 0.6 - 100.0),
                    life: 0.0,
                    ttl: 0.9 + draws.unit() * 0.6,
                    opacity: 1.0,
                    scale: 1.0 + draws.unit() * 0.8,
                });
            }
            slot.penalty_pop = Some(PenaltyPop {
                amount: tuning.penalty_amount,
                pos: origin,
                opacity: 0.0,
                age: 0.0,
            });
        } else {
            for _ in 0..count {
                let glyph = CHARM_GLYPHS[(draws.unit() * CHARM_GLYPHS.len() as f32).floor()
                    as usize
                    % CHARM_GLYPHS.len()];
                let angle = draws.range(0.0, TAU);
                let speed = draws.range(120.0, 420.0);
                slot.particles.push(Particle {
                    glyph,
                    tint: CHARM_TINT,
                    pos: origin,
                    vel: Vec2::new(angle.cos() * speed, angle.sin() * speed * 0.6 - 120.0),
                    life: 0.0,
                    ttl: 0.9 + draws.unit() * 0.6,
                    opacity: 1.0,
                    scale: 1.0 + draws.unit() * 0.8,
                });
            }
        }
    }

    /// Fade-in ramp and horizontal oscillation for a live slot
    fn tick_live_slot(&mut self, idx: usize, tuning: &Tuning, dt: f32) {
        let slot = &mut self.slots[idx];

        if slot.phase == TargetPhase::FadingIn {
            slot.opacity = (slot.opacity + tuning.fade_in_rate * dt).min(1.0);
            if slot.opacity >= 1.0 {
                slot.phase = TargetPhase::Steady;
            }
        }

        slot.pos.x += slot.vx * dt;
        let lo = slot.base.x - tuning.horizontal_range;
        let hi = slot.base.x + tuning.horizontal_range;
        if slot.pos.x < lo {
            slot.pos.x = lo;
            slot.vx = -slot.vx;
        } else if slot.pos.x > hi {
            slot.pos.x = hi;
            slot.vx = -slot.vx;
        }
        // Vertical motion is never modeled for targets
        slot.pos.y = slot.base.y;
    }

    /// Particle decay and the floating-text envelope while a slot is dead
    fn tick_dead_slot(&mut self, idx: usize, elapsed: f32, tuning: &Tuning, dt: f32) {
        let slot = &mut self.slots[idx];
        slot.phase = TargetPhase::Dead { since: elapsed };

        for p in &mut slot.particles {
            p.life += dt;
            p.pos += p.vel * dt;
            p.vel.y += tuning.particle_gravity * dt;
            p.opacity = (1.0 - p.life / p.ttl).max(0.0);
        }

        if let Some(pop) = &mut slot.penalty_pop {
            pop.age += dt;
            let t = pop.age / tuning.penalty_text_duration;
            if t >= 1.0 {
                slot.penalty_pop = None;
            } else {
                // Fast attack over the first fifth, then decay to zero
                pop.opacity = if t < 0.2 { t * 5.0 } else { 1.0 - (t - 0.2) / 0.8 };
                pop.pos.y = slot.base.y - t * tuning.penalty_text_rise;
            }
        }
    }

    /// Draw a new occupant for a slot. Draw order: speed, size, penalty.
    fn fresh_target(
        &mut self,
        row: usize,
        col: usize,
        base: Vec2,
        tuning: &Tuning,
        draws: &mut impl UniformDraws,
        fading_in: bool,
    ) -> Target {
        // Direction alternates in a checkerboard; everything else is drawn
        let dir = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        let speed = draws.range(tuning.target_speed_min, tuning.target_speed_max);
        let size_scale = draws.range(SIZE_SCALE_MIN, SIZE_SCALE_MAX);
        let penalty = draws.chance(tuning.penalty_chance);

        // Fast and small pays best
        let value = (tuning.base_score as f32 * (speed / tuning.reference_speed) / size_scale)
            .floor() as u64;

        let id = self.next_id;
        self.next_id += 1;

        Target {
            id,
            base,
            pos: base,
            vx: dir * speed,
            width: tuning.target_base_size * TARGET_WIDTH_FACTOR * size_scale,
            height: tuning.target_base_size * TARGET_HEIGHT_FACTOR * size_scale,
            phase: if fading_in {
                TargetPhase::FadingIn
            } else {
                TargetPhase::Steady
            },
            opacity: if fading_in { 0.0 } else { 1.0 },
            penalty,
            value,
            particles: Vec::new(),
            penalty_pop: None,
        }
    }
}

/// Anchor position of a slot: columns centered, rows stacked downward
fn slot_base(row: usize, col: usize, tuning: &Tuning) -> Vec2 {
    let gap_x =
        ((tuning.canvas_width - GALLERY_SIDE_MARGIN) / tuning.cols as f32).min(COLUMN_GAP_MAX);
    let start_x = (tuning.canvas_width - gap_x * (tuning.cols - 1) as f32) / 2.0;
    Vec2::new(
        start_x + col as f32 * gap_x,
        tuning.top_offset + row as f32 * tuning.row_gap,
    )
}
