//! Text report: a `result:` list written as matches arrive, then a `stat:` block.
//!
//! ```text
//! result:
//!    -
//!       word: CAT
//!       coor: (0, 0)
//!       dir: east
//! stat:
//!    CAT: 1
//! ```

use crate::search::{Match, Tally};
use std::io::{self, Write};

pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the `result:` heading.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn begin(&mut self) -> io::Result<()> {
        writeln!(self.out, "result:")
    }

    /// Write one match entry.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn record(&mut self, m: &Match<'_>) -> io::Result<()> {
        writeln!(self.out, "   -")?;
        writeln!(self.out, "      word: {}", m.word)?;
        writeln!(self.out, "      coor: {}", m.origin)?;
        writeln!(self.out, "      dir: {}", m.direction)
    }

    /// Write the `stat:` block and flush, handing back the writer.
    ///
    /// # Errors
    /// Propagates write and flush failures.
    pub fn finish(mut self, tally: &Tally<'_>) -> io::Result<W> {
        writeln!(self.out, "stat:")?;
        for (word, count) in tally.iter() {
            writeln!(self.out, "   {word}: {count}")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
