//! Row-scoped hit detection and scoring
//!
//! A shooting stall has depth: only the row the player is aiming at can be
//! hit, picked by comparing the aim height against the midlines between
//! rows. Within that row the test is a plain AABB overlap with strict
//! inequalities, so boxes that merely touch do not collide.

use glam::Vec2;

use super::rng::UniformDraws;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Strict AABB overlap between two centered boxes; shared edges miss
pub fn aabb_overlap(
    a_pos: Vec2,
    a_width: f32,
    a_height: f32,
    b_pos: Vec2,
    b_width: f32,
    b_height: f32,
) -> bool {
    (a_pos.x - b_pos.x).abs() < (a_width + b_width) / 2.0
        && (a_pos.y - b_pos.y).abs() < (a_height + b_height) / 2.0
}

/// The single row eligible for hits this tick, from the aim height.
/// Boundaries sit halfway between consecutive row baselines.
pub fn active_row(aim_y: f32, tuning: &Tuning) -> usize {
    for row in 0..tuning.rows.saturating_sub(1) {
        let boundary = tuning.top_offset + tuning.row_gap / 2.0 + row as f32 * tuning.row_gap;
        if aim_y < boundary {
            return row;
        }
    }
    tuning.rows - 1
}

/// Test live projectiles against the active row, apply score deltas and
/// milestone events, and hand destroyed targets to the gallery.
pub fn collision_pass(
    state: &mut GameState,
    draws: &mut impl UniformDraws,
    aim: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let row = active_row(aim.y, &state.tuning);

    for projectile in &mut state.projectiles {
        if !projectile.alive {
            continue;
        }

        // First match in slot order wins; one target per projectile
        let mut hit = None;
        for (col, target) in state.gallery.row_slots(row).iter().enumerate() {
            if !target.is_hittable() {
                continue;
            }
            if aabb_overlap(
                projectile.pos,
                projectile.width,
                projectile.height,
                target.pos,
                target.width,
                target.height,
            ) {
                hit = Some((col, target.penalty, target.value));
                break;
            }
        }

        let Some((col, penalty, value)) = hit else {
            continue;
        };

        projectile.alive = false;
        state.gallery.kill(row, col, &state.tuning, draws);

        if penalty {
            state.score = state.score.saturating_sub(state.tuning.penalty_amount);
            log::debug!("penalty target hit at ({row},{col}): score {}", state.score);
        } else {
            state.score += value;
            log::debug!("target hit at ({row},{col}): +{value}, score {}", state.score);
            for threshold in state.milestones.drain_crossed(state.score) {
                events.push(GameEvent::MilestoneReached { threshold });
            }
        }

        events.push(GameEvent::TargetDestroyed { row, col, penalty });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::PcgDraws;
    use crate::sim::state::{Projectile, RoundPhase, TargetPhase};
    use crate::tuning::Tuning;

    fn playing_state(draws: &mut PcgDraws) -> GameState {
        let mut state = GameState::new(Tuning::default(), draws);
        state.phase = RoundPhase::Playing;
        state
    }

    fn projectile_at(pos: Vec2) -> Projectile {
        Projectile {
            pos,
            vel: Vec2::ZERO,
            gravity: 2200.0,
            width: 8.0,
            height: 10.0,
            alive: true,
            age: 0.0,
        }
    }

    #[test]
    fn test_touching_boxes_miss_overlapping_boxes_hit() {
        // Boxes 8 and 56 wide: centers exactly 32 apart share an edge
        let a = Vec2::new(0.0, 0.0);
        assert!(!aabb_overlap(a, 8.0, 10.0, Vec2::new(32.0, 0.0), 56.0, 48.0));
        assert!(!aabb_overlap(a, 8.0, 10.0, Vec2::new(0.0, 29.0), 56.0, 48.0));
        // Any sub-pixel overlap registers
        assert!(aabb_overlap(a, 8.0, 10.0, Vec2::new(31.999, 0.0), 56.0, 48.0));
        assert!(aabb_overlap(a, 8.0, 10.0, Vec2::new(0.0, 28.999), 56.0, 48.0));
    }

    #[test]
    fn test_active_row_boundaries() {
        let tuning = Tuning::default();
        // Rows at y 180/330/480; midlines at 255 and 405
        assert_eq!(active_row(0.0, &tuning), 0);
        assert_eq!(active_row(254.9, &tuning), 0);
        assert_eq!(active_row(255.0, &tuning), 1);
        assert_eq!(active_row(404.9, &tuning), 1);
        assert_eq!(active_row(405.0, &tuning), 2);
        assert_eq!(active_row(800.0, &tuning), 2);
    }

    #[test]
    fn test_only_active_row_is_hittable() {
        let mut draws = PcgDraws::seeded(23);
        let mut state = playing_state(&mut draws);

        // Projectile dead center on a row-1 target
        let target_pos = state.gallery.at(1, 2).pos;
        state.projectiles.push(projectile_at(target_pos));

        // Aim at row 0: the overlapping row-1 target is immune
        let mut events = Vec::new();
        collision_pass(&mut state, &mut draws, Vec2::new(600.0, 180.0), &mut events);
        assert!(events.is_empty());
        assert!(state.projectiles[0].alive);
        assert!(state.gallery.at(1, 2).is_hittable());

        // Same geometry with the aim on row 1 connects
        collision_pass(&mut state, &mut draws, Vec2::new(600.0, 330.0), &mut events);
        assert_eq!(
            events,
            vec![GameEvent::TargetDestroyed {
                row: 1,
                col: 2,
                penalty: state.gallery.at(1, 2).penalty,
            }]
        );
        assert!(!state.projectiles[0].alive);
        assert!(matches!(state.gallery.at(1, 2).phase, TargetPhase::Dead { .. }));
    }

    #[test]
    fn test_hit_awards_the_target_value() {
        let mut draws = PcgDraws::seeded(29);
        let mut state = playing_state(&mut draws);
        {
            let target = state.gallery.at_mut(0, 0);
            target.penalty = false;
            target.value = 123;
        }
        let pos = state.gallery.at(0, 0).pos;
        state.projectiles.push(projectile_at(pos));

        let mut events = Vec::new();
        collision_pass(&mut state, &mut draws, Vec2::new(pos.x, 180.0), &mut events);
        assert_eq!(state.score, 123);
    }

    #[test]
    fn test_penalty_floors_score_at_zero() {
        let mut draws = PcgDraws::seeded(31);
        let mut state = playing_state(&mut draws);
        state.score = 500;
        state.gallery.at_mut(0, 0).penalty = true;
        let pos = state.gallery.at(0, 0).pos;
        state.projectiles.push(projectile_at(pos));

        let mut events = Vec::new();
        collision_pass(&mut state, &mut draws, Vec2::new(pos.x, 180.0), &mut events);
        assert_eq!(state.score, 0);
        assert_eq!(
            events,
            vec![GameEvent::TargetDestroyed {
                row: 0,
                col: 0,
                penalty: true,
            }]
        );
    }

    #[test]
    fn test_one_large_hit_drains_every_milestone() {
        let mut draws = PcgDraws::seeded(37);
        let mut state = playing_state(&mut draws);
        state.score = 4000;
        {
            let target = state.gallery.at_mut(0, 0);
            target.penalty = false;
            target.value = 17000;
        }
        let pos = state.gallery.at(0, 0).pos;
        state.projectiles.push(projectile_at(pos));

        let mut events = Vec::new();
        collision_pass(&mut state, &mut draws, Vec2::new(pos.x, 180.0), &mut events);
        assert_eq!(state.score, 21000);
        assert_eq!(
            events,
            vec![
                GameEvent::MilestoneReached { threshold: 5000 },
                GameEvent::MilestoneReached { threshold: 10000 },
                GameEvent::MilestoneReached { threshold: 20000 },
                GameEvent::TargetDestroyed {
                    row: 0,
                    col: 0,
                    penalty: false,
                },
            ]
        );

        // The same thresholds never fire again
        events.clear();
        state.gallery.at_mut(0, 1).penalty = false;
        let pos = state.gallery.at(0, 1).pos;
        state.projectiles.push(projectile_at(pos));
        collision_pass(&mut state, &mut draws, Vec2::new(pos.x, 180.0), &mut events);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::MilestoneReached { .. }))
        );
    }

    #[test]
    fn test_projectile_consumes_on_first_match_only() {
        let mut draws = PcgDraws::seeded(41);
        let mut state = playing_state(&mut draws);

        // Park two row-0 targets on the same spot
        let pos = state.gallery.at(0, 1).pos;
        state.gallery.at_mut(0, 2).pos = pos;
        state.projectiles.push(projectile_at(pos));

        let mut events = Vec::new();
        collision_pass(&mut state, &mut draws, Vec2::new(pos.x, 180.0), &mut events);

        // Slot order decides: (0,1) dies, (0,2) survives
        assert!(matches!(state.gallery.at(0, 1).phase, TargetPhase::Dead { .. }));
        assert!(state.gallery.at(0, 2).is_hittable());
        assert_eq!(events.len(), 1);
    }
}
