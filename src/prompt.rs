//! Interactive prompts for the values the user did not pass on the command line

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};

/// Asks questions on `output` and reads answers from `input`.
///
/// Invalid answers are never an error: the question is simply asked again.
/// Only end of input or an I/O failure ends the loop without a value.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn worker_count(&mut self) -> Result<usize> {
        self.positive("Enter number of workers:")
    }

    pub fn iterations_per_worker(&mut self) -> Result<u64> {
        self.positive("Enter iteration count per worker:")
    }

    /// Keep asking `question` until the answer is a whole number above zero
    /// that fits in `T`.
    fn positive<T: TryFrom<u64>>(&mut self, question: &str) -> Result<T> {
        let mut line = String::new();

        loop {
            writeln!(self.output, "{question}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            let answer = line.trim();
            match answer.parse::<u64>() {
                Ok(value) if value > 0 => {
                    if let Ok(value) = T::try_from(value) {
                        writeln!(self.output)?;
                        return Ok(value);
                    }
                    debug!(answer, "value out of range, asking again");
                }
                _ => debug!(answer, "not a positive integer, asking again"),
            }
        }
    }
}
