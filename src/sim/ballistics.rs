//! Projectile ballistics
//!
//! Launch velocities come from an empirical time-of-flight model rather than
//! true projectile physics: flight time is proportional to horizontal
//! distance but clamped to a playable window, then the velocity components
//! are solved backward from it. Integration is semi-implicit Euler with
//! gravity applied after the position step; keep that order, arcs are
//! reproduced from it.

use glam::Vec2;

use super::state::Projectile;
use crate::consts::{OOB_MARGIN_X, OOB_MARGIN_Y};
use crate::tuning::Tuning;

/// A solved launch: initial velocity and the flight time it was solved for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub velocity: Vec2,
    pub flight_time: f32,
}

/// Solve the launch velocity that carries a projectile from `origin` to
/// `target` in `clamp(|dx| / speed_scale, t_min, t_max)` seconds under
/// gravity `g` (positive downward).
pub fn compute_launch(
    origin: Vec2,
    target: Vec2,
    speed_scale: f32,
    gravity: f32,
    t_min: f32,
    t_max: f32,
) -> Launch {
    let delta = target - origin;
    let flight_time = (delta.x.abs() / speed_scale).clamp(t_min, t_max);

    let vx = delta.x / flight_time;
    // dy = vy*t + g*t²/2, solved for vy
    let vy = (delta.y - 0.5 * gravity * flight_time * flight_time) / flight_time;

    Launch {
        velocity: Vec2::new(vx, vy),
        flight_time,
    }
}

/// Build the projectile a fire request launches toward `aim`
pub fn spawn_projectile(origin: Vec2, aim: Vec2, tuning: &Tuning) -> Projectile {
    let launch = compute_launch(
        origin,
        aim,
        tuning.launch_speed_scale(),
        tuning.projectile_gravity,
        tuning.launch_time_min,
        tuning.launch_time_max,
    );
    Projectile {
        pos: origin,
        vel: launch.velocity,
        gravity: tuning.projectile_gravity,
        width: tuning.projectile_width,
        height: tuning.projectile_height,
        alive: true,
        age: 0.0,
    }
}

/// Advance one projectile by `dt`: position first, gravity second
pub fn integrate(projectile: &mut Projectile, dt: f32) {
    projectile.age += dt;
    projectile.pos += projectile.vel * dt;
    projectile.vel.y += projectile.gravity * dt;
}

/// Whether the projectile has left the playfield plus its cull margins
pub fn out_of_bounds(projectile: &Projectile, canvas_width: f32, canvas_height: f32) -> bool {
    projectile.pos.x < -OOB_MARGIN_X
        || projectile.pos.x > canvas_width + OOB_MARGIN_X
        || projectile.pos.y < -OOB_MARGIN_Y
        || projectile.pos.y > canvas_height + OOB_MARGIN_Y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn defaults() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_straight_up_shot_has_no_horizontal_speed() {
        let t = defaults();
        let launch = compute_launch(
            Vec2::new(600.0, 680.0),
            Vec2::new(600.0, 300.0),
            t.launch_speed_scale(),
            t.projectile_gravity,
            t.launch_time_min,
            t.launch_time_max,
        );
        assert!(launch.velocity.x.abs() < 1e-4);
        // Canvas y grows downward, so an upward shot is negative
        assert!(launch.velocity.y < 0.0);
        assert_eq!(launch.flight_time, t.launch_time_min);
    }

    #[test]
    fn test_upward_speed_grows_with_gravity() {
        let t = defaults();
        let origin = Vec2::new(600.0, 680.0);
        let target = Vec2::new(600.0, 300.0);
        let soft = compute_launch(origin, target, t.launch_speed_scale(), 1000.0, 0.25, 1.2);
        let hard = compute_launch(origin, target, t.launch_speed_scale(), 3000.0, 0.25, 1.2);
        assert!(hard.velocity.y < soft.velocity.y);
        assert!(hard.velocity.y.abs() > soft.velocity.y.abs());
    }

    #[test]
    fn test_level_shot_lands_on_target() {
        let t = defaults();
        let origin = Vec2::new(600.0, 680.0);
        let target = Vec2::new(1000.0, 680.0);
        let launch = compute_launch(
            origin,
            target,
            t.launch_speed_scale(),
            t.projectile_gravity,
            t.launch_time_min,
            t.launch_time_max,
        );
        assert!(launch.flight_time >= t.launch_time_min);
        assert!(launch.flight_time <= t.launch_time_max);

        // Closed-form position at the solved flight time matches the target
        let tf = launch.flight_time;
        let x = origin.x + launch.velocity.x * tf;
        let y = origin.y + launch.velocity.y * tf + 0.5 * t.projectile_gravity * tf * tf;
        assert!((x - target.x).abs() < 1e-2);
        assert!((y - target.y).abs() < 1e-2);

        // The arc rises before it falls: apex is above both endpoints
        let apex_t = -launch.velocity.y / t.projectile_gravity;
        assert!(apex_t > 0.0 && apex_t < tf);
        let apex_y = origin.y + launch.velocity.y * apex_t
            + 0.5 * t.projectile_gravity * apex_t * apex_t;
        assert!(apex_y < origin.y);
        assert!(apex_y.is_finite());
    }

    #[test]
    fn test_integration_order_is_position_then_gravity() {
        let mut p = Projectile {
            pos: Vec2::new(0.0, 0.0),
            vel: Vec2::new(10.0, -20.0),
            gravity: 100.0,
            width: 8.0,
            height: 10.0,
            alive: true,
            age: 0.0,
        };
        integrate(&mut p, 0.5);
        // Position uses the pre-step velocity
        assert_eq!(p.pos, Vec2::new(5.0, -10.0));
        // Gravity lands on the velocity only afterward
        assert_eq!(p.vel, Vec2::new(10.0, 30.0));
        assert_eq!(p.age, 0.5);
    }

    #[test]
    fn test_out_of_bounds_margins() {
        let mut p = spawn_projectile(Vec2::new(600.0, 680.0), Vec2::new(600.0, 300.0), &defaults());
        assert!(!out_of_bounds(&p, 1200.0, 800.0));
        p.pos = Vec2::new(-99.0, 400.0);
        assert!(!out_of_bounds(&p, 1200.0, 800.0));
        p.pos = Vec2::new(-101.0, 400.0);
        assert!(out_of_bounds(&p, 1200.0, 800.0));
        p.pos = Vec2::new(600.0, 1001.0);
        assert!(out_of_bounds(&p, 1200.0, 800.0));
        p.pos = Vec2::new(600.0, -201.0);
        assert!(out_of_bounds(&p, 1200.0, 800.0));
    }

    proptest! {
        #[test]
        fn prop_flight_time_stays_clamped(
            ox in 0.0f32..1200.0,
            tx in 0.0f32..1200.0,
            ty in 0.0f32..800.0,
        ) {
            let t = defaults();
            let launch = compute_launch(
                Vec2::new(ox, 680.0),
                Vec2::new(tx, ty),
                t.launch_speed_scale(),
                t.projectile_gravity,
                t.launch_time_min,
                t.launch_time_max,
            );
            prop_assert!(launch.flight_time >= t.launch_time_min);
            prop_assert!(launch.flight_time <= t.launch_time_max);
            prop_assert!(launch.velocity.x.is_finite() && launch.velocity.y.is_finite());
        }

        #[test]
        fn prop_solved_arc_passes_through_target(
            ox in 100.0f32..1100.0,
            tx in 100.0f32..1100.0,
            ty in 100.0f32..700.0,
        ) {
            let t = defaults();
            let origin = Vec2::new(ox, 680.0);
            let target = Vec2::new(tx, ty);
            let launch = compute_launch(
                origin,
                target,
                t.launch_speed_scale(),
                t.projectile_gravity,
                t.launch_time_min,
                t.launch_time_max,
            );
            let tf = launch.flight_time;
            let x = origin.x + launch.velocity.x * tf;
            let y = origin.y + launch.velocity.y * tf + 0.5 * t.projectile_gravity * tf * tf;
            prop_assert!((x - target.x).abs() < 1e-2);
            prop_assert!((y - target.y).abs() < 0.5);
        }
    }
}
