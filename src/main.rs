//! Midway Shot entry point
//!
//! On the web the cdylib is driven by JS glue (frame callbacks, canvas,
//! input). The native binary runs a headless demo round: the aim sweeps the
//! gallery while fire is held, and the result is fed to the ranking.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use midway_shot::HighScores;
    use midway_shot::sim::{GameEvent, GameState, PcgDraws, TickInput, tick};
    use midway_shot::tuning::Tuning;

    env_logger::init();

    let mut draws = PcgDraws::from_entropy();
    let mut state = GameState::new(Tuning::default(), &mut draws);
    state.start();

    let dt = 1.0 / 120.0;
    let mut input = TickInput::default();
    let mut frame = 0u64;
    let mut final_score = 0;

    while state.is_playing() {
        let t = frame as f32 * dt;
        // Sweep the aim across the three rows in a slow figure
        input.aim = Vec2::new(
            600.0 + 300.0 * (t * 0.7).sin(),
            330.0 + 160.0 * (t * 0.45).cos(),
        );
        input.fire = true;

        for event in tick(&mut state, &input, &mut draws, dt) {
            match event {
                GameEvent::MilestoneReached { threshold } => {
                    println!("milestone reached: {threshold}");
                }
                GameEvent::TargetDestroyed { row, col, penalty } => {
                    log::debug!("destroyed ({row},{col}) penalty={penalty}");
                }
                GameEvent::RoundEnded { final_score: score } => {
                    final_score = score;
                }
            }
        }
        frame += 1;
    }

    println!("round over after {frame} frames, final score {final_score}");

    let mut ranking = HighScores::load();
    if let Some(rank) = ranking.submit("Demo", final_score) {
        ranking.save();
        println!("ranked #{rank}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is a cdylib; startup lives in the library's wasm hook.
}
