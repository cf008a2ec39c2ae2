//! Roto Hex entry point
//!
//! Headless driver: builds the simulator and advances it at a fixed logical
//! timestep, logging the ball as it goes. Drawing the frames is left to
//! embedders of the library; this binary exercises the full simulation loop
//! without any graphics dependency.

use roto_hex::{SimConfig, Simulator};

/// Steps to run (10 seconds at the reference 50 steps per second)
const STEPS: u32 = 500;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let mut sim = Simulator::new(config)?;
    log::info!("Roto Hex starting...");

    for step in 0..STEPS {
        let frame = sim.step();
        if step % 50 == 0 {
            log::info!(
                "step {step}: ball at ({:.1}, {:.1})",
                frame.ball_pos.x,
                frame.ball_pos.y
            );
        }
    }

    let ball = sim.ball();
    println!(
        "after {STEPS} steps: pos ({:.1}, {:.1}) vel ({:.2}, {:.2})",
        ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y
    );

    Ok(())
}
