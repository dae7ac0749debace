//! Gap Runner entry point
//!
//! Headless demo: the autopilot plays a few runs through the fixed-step
//! clock and the final frame is printed as JSON. A windowed frontend drives
//! `Game` the same way, with real frame times and key events.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::Duration;

    use gap_runner::platform::{FixedStep, Input};
    use gap_runner::sim::{Game, GameEvent, autopilot};
    use gap_runner::tuning::Tuning;

    /// Simulated 60 fps frames (one minute of play)
    const DEMO_FRAMES: u32 = 60 * 60;
    const FRAME: Duration = Duration::from_micros(16_667);
    const MAX_RUNS: u32 = 3;

    env_logger::init();
    log::info!("Gap Runner (headless) starting...");

    let mut game = Game::from_entropy(Tuning::default())?;
    let mut clock = FixedStep::from_tuning(game.tuning());
    let mut runs = 1;

    'frames: for _ in 0..DEMO_FRAMES {
        for _ in 0..clock.advance(FRAME) {
            if game.is_over() {
                if runs == MAX_RUNS {
                    break 'frames;
                }
                game.handle_input(Input::Other);
                runs += 1;
            }

            if autopilot::wants_jump(game.state(), game.tuning()) {
                game.handle_input(Input::Jump);
            }

            for event in game.tick() {
                if let GameEvent::Crashed { cause } = event {
                    log::warn!("Run {} crashed into {:?}", runs, cause);
                }
            }
        }
    }

    log::info!(
        "Demo finished after {} run(s), seed {}, score {}",
        runs,
        game.seed(),
        game.state().score
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web
}
