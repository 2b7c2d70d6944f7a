//! Line-oriented prompt helpers over any reader/writer pair

use std::io::{self, BufRead, Write};

use crate::error::{AppError, AppResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a prompt and read one trimmed line.
    ///
    /// End of input is reported as an `UnexpectedEof` I/O error.
    pub fn prompt(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        Ok(line.trim().to_string())
    }

    /// Like `prompt`, but a blank answer becomes `None`
    pub fn prompt_optional(&mut self, prompt: &str) -> AppResult<Option<String>> {
        let answer = self.prompt(prompt)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Prompt until the answer parses as an integer of at least `min`
    pub fn prompt_u32(&mut self, prompt: &str, min: u32) -> AppResult<u32> {
        loop {
            let answer = self.prompt(prompt)?;
            match answer.parse::<i64>() {
                Ok(value) if value < i64::from(min) => {
                    writeln!(self.output, "Value must be at least {}.", min)?;
                }
                Ok(value) => match u32::try_from(value) {
                    Ok(value) => return Ok(value),
                    Err(_) => writeln!(self.output, "Please enter a valid number.")?,
                },
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }
}

/// True when the error means the input stream is exhausted
pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// True when a line was consumed but could not be decoded as UTF-8
pub fn is_unreadable_line(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::InvalidData)
}
