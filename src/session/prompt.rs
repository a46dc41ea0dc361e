//! Typed console prompting.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Reads answers from an input stream after writing prompts to an output
/// stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The trailing line break is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask for a value that must be present.
    fn answer(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)?.ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("end of input while waiting for {:?}", prompt.trim()),
            ))
        })
    }

    /// Ask for a value and parse it.
    fn parsed<T: FromStr>(&mut self, prompt: &str, expected: &'static str) -> Result<T> {
        let answer = self.answer(prompt)?;
        answer.trim().parse().map_err(|_| Error::InvalidInput {
            prompt: prompt.trim().to_string(),
            input: answer,
            expected,
        })
    }

    /// Ask for an integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is not an integer or input ended.
    pub fn integer(&mut self, prompt: &str) -> Result<i64> {
        self.parsed(prompt, "an integer")
    }

    /// Ask for an integer, saturating it into the `i32` range.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is not an integer or input ended.
    pub fn integer_i32(&mut self, prompt: &str) -> Result<i32> {
        Ok(saturate_i32(self.integer(prompt)?))
    }

    /// Ask for a real number.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is not a number or input ended.
    pub fn float(&mut self, prompt: &str) -> Result<f64> {
        self.parsed(prompt, "a number")
    }

    /// Ask for a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is empty or input ended.
    pub fn path(&mut self, prompt: &str) -> Result<PathBuf> {
        let answer = self.answer(prompt)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput {
                prompt: prompt.trim().to_string(),
                input: answer,
                expected: "a file name",
            });
        }
        Ok(PathBuf::from(trimmed))
    }

    /// Print one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// Clamp an `i64` into the `i32` range.
#[allow(clippy::cast_possible_truncation)]
const fn saturate_i32(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        // Safe: checked against both bounds above
        value as i32
    }
}
