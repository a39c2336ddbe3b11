//! Line-based interactive input.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::prelude::*;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until a value is given.
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<T>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        loop {
            if let Some(value) = self.ask_optional(prompt)? {
                break Ok(value);
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    /// Ask for a value, falling back to `default` on an empty answer.
    pub fn ask_or<T: FromStr>(&mut self, prompt: &str, default: T) -> Result<T>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        Ok(self.ask_optional(prompt)?.unwrap_or(default))
    }

    pub fn ask_optional<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.ask_optional_with(prompt, |text| Ok(text.parse()?))
    }

    /// Ask until the answer is either empty or accepted by `parse`.
    pub fn ask_optional_with<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let line = self.read_line(prompt)?;
            let text = line.trim();
            if text.is_empty() {
                break Ok(None);
            }
            match parse(text) {
                Ok(value) => break Ok(Some(value)),
                Err(error) => {
                    warn!(text, "rejected input");
                    writeln!(self.output, "Invalid input ({error:#}), please try again.")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("failed to read the input")? == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line)
    }
}
