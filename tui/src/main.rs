//! A Game of Life simulator on a torus.
//!
//! Runs the simulation in the terminal. See the `README.md` for the key
//! bindings and the pattern file format.

mod args;
mod record;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use record::Recorder;
use rlifesim_lib::{Grid, Simulation};
use std::{error::Error, fs, process};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse()?;

    let grid = match &args.readfile {
        Some(path) => fs::read_to_string(path)?.parse::<Grid>()?,
        None => args.config.grid()?,
    };
    let simulation = Simulation::new(grid);

    let recorder = match &args.movfile {
        Some(path) => Some(Recorder::create(path)?),
        None => None,
    };

    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            let config = args.config.clone().set_size(simulation.grid().size());
            return tui::simulate_with_tui(simulation, config, args.interval, recorder);
        }
    }

    run_headless(simulation, recorder, args.generations)
}

/// Runs a fixed number of generations and prints the final grid.
fn run_headless(
    mut simulation: Simulation,
    mut recorder: Option<Recorder>,
    generations: u64,
) -> Result<(), Box<dyn Error>> {
    for _ in 0..generations {
        simulation.step();
        if let Some(recorder) = &mut recorder {
            recorder.record(simulation.grid())?;
        }
    }
    println!("{}", simulation.grid());
    Ok(())
}
