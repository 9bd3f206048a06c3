//! Barrel Run headless driver
//!
//! Stands in for the real front end: builds a game state, feeds it a
//! scripted input pattern at the fixed tick rate, and logs what happens.
//! Useful for watching the simulation behave without any renderer attached.
//!
//! Usage: `barrel-run [tuning.json] [seed] [seconds]`

use anyhow::{Context, Result};
use std::time::{SystemTime, UNIX_EPOCH};

use barrel_run::consts::TICK_RATE;
use barrel_run::sim::{GameState, TickInput, tick};
use barrel_run::tuning::Tuning;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            let tuning = Tuning::from_json(&json).context("parsing tuning JSON")?;
            log::info!("loaded tuning overrides from {path}");
            tuning
        }
        None => Tuning::default(),
    };

    let seed = match args.next() {
        Some(s) => s.parse::<u64>().context("parsing seed")?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("reading system clock")?
            .as_millis() as u64,
    };

    let seconds = match args.next() {
        Some(s) => s.parse::<u64>().context("parsing run length")?,
        None => 30,
    };

    let mut state = GameState::new(seed, tuning).context("building level")?;
    log::info!("barrel-run starting with seed {seed}, simulating {seconds} s");

    let total_ticks = seconds * TICK_RATE as u64;
    for t in 0..total_ticks {
        let input = scripted_input(t);
        tick(&mut state, &input);

        if t % TICK_RATE as u64 == 0 {
            log::info!(
                "t={:>4} player=({:>5.1}, {:>5.1}) pose={:?} barrels={}",
                t / TICK_RATE as u64,
                state.player.body.pos.x,
                state.player.body.pos.y,
                state.player.pose(),
                state.barrels.len(),
            );
        }
    }

    println!(
        "simulated {} ticks: player at ({:.1}, {:.1}), {} active barrels",
        state.time_ticks,
        state.player.body.pos.x,
        state.player.body.pos.y,
        state.barrels.len(),
    );

    Ok(())
}

/// A canned input pattern: walk back and forth, hop now and then, climb when
/// passing the ladder column.
fn scripted_input(t: u64) -> TickInput {
    let phase = (t / 240) % 4;
    TickInput {
        left: phase == 2,
        right: phase == 0,
        up: phase == 1,
        down: false,
        // One-tick press, repeated every four seconds
        jump: t % 240 == 120,
        reset: false,
    }
}
