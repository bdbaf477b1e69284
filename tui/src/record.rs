//! Recording generations to a plain-text file.

use rlifesim_lib::Grid;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Appends each generation of a run to a text file.
///
/// Frames are written in the grid's plain-text format and separated by
/// a blank line.
pub(crate) struct Recorder {
    out: BufWriter<File>,
}

impl Recorder {
    /// Creates the recording file, truncating an existing one.
    pub(crate) fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
        })
    }

    /// Appends one frame.
    pub(crate) fn record(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "{}", grid)
    }
}
