//! __rlifesim__ is a simulator for Conway's Game of Life on a torus:
//! a finite square grid whose opposite edges are glued together, so a
//! glider leaving one side comes back on the other.
//!
//! This crate is the simulation engine. It knows nothing about
//! terminals, timers or files on disk; a frontend owns the clock and
//! feeds interaction in as plain [`Command`] values. The matching
//! terminal frontend lives in the `rlifesim` crate.
//!
//! # Example
//!
//! Run a glider for one full period:
//!
//! ```rust
//! use rlifesim_lib::{Config, Seed, Simulation};
//! # use rlifesim_lib::Error;
//!
//! let config = Config::new(20).set_seed(Seed::Glider);
//! let mut sim = Simulation::new(config.grid()?);
//! for _ in 0..4 {
//!     sim.step();
//! }
//! assert_eq!(sim.generation(), 4);
//! assert_eq!(sim.grid().population(), 5);
//! # Ok::<(), Error>(())
//! ```

mod cells;
mod config;
mod error;
pub mod file;
mod grid;
pub mod patterns;
pub mod rules;
mod simulation;

pub use cells::{Coord, State};
pub use config::{Config, Seed};
pub use error::Error;
pub use grid::Grid;
pub use simulation::{Command, Simulation};
