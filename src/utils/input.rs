use crate::utils::error::{AppError, InputError, Result};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Semantic type requested from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Integer,
    Real,
    YesNo,
}

/// Scalar that can be range-checked. Each type words its own rejection.
pub trait Bounded: FromStr + PartialOrd + Display + Copy {
    fn range_message(min: Self, max: Self) -> String;
}

impl Bounded for i64 {
    fn range_message(min: Self, max: Self) -> String {
        format!("Choice must be {}-{}. Try again.", min, max)
    }
}

impl Bounded for f64 {
    fn range_message(min: Self, max: Self) -> String {
        format!("Value must be between {} and {}. Try again.", min, max)
    }
}

/// Inclusive `[min, max]` bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Bounded> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// NaN never satisfies both comparisons, so it is always outside.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn check(&self, value: T) -> std::result::Result<T, InputError> {
        if self.contains(value) {
            return Ok(value);
        }
        Err(InputError::OutOfRange {
            message: T::range_message(self.min, self.max),
        })
    }
}

/// One validated read: what to show, what to expect, and the optional bounds.
#[derive(Debug, Clone)]
pub struct ValidationRequest<'a, T> {
    pub prompt: &'a str,
    pub kind: InputKind,
    pub bounds: Option<Bounds<T>>,
}

impl<'a, T> ValidationRequest<'a, T> {
    pub fn new(prompt: &'a str, kind: InputKind) -> Self {
        Self {
            prompt,
            kind,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, min: T, max: T) -> Self {
        self.bounds = Some(Bounds { min, max });
        self
    }
}

pub fn parse_token<T: FromStr>(token: &str) -> std::result::Result<T, InputError> {
    token.trim().parse::<T>().map_err(|_| InputError::Parse {
        token: token.to_string(),
    })
}

/// Accepts `y`/`yes`/`n`/`no` in any ASCII case. Everything else, including an
/// empty token, is rejected.
pub fn parse_yes_no(token: &str) -> std::result::Result<bool, InputError> {
    match token.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::YesNo {
            token: token.to_string(),
        }),
    }
}

/// Interactive reader that keeps prompting until a value passes validation.
///
/// Input is consumed one whitespace-separated token at a time; the rest of a
/// line stays buffered for the next read unless a parse failure discards it.
pub struct InputValidator<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> InputValidator<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub fn read_typed<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            self.show(prompt)?;
            let token = self.next_token()?;
            match parse_token::<T>(&token) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!("Rejected token {:?}: not parseable", token);
                    self.report(&err)?;
                    self.discard_line();
                }
            }
        }
    }

    pub fn read_validated<T: Bounded>(&mut self, request: &ValidationRequest<'_, T>) -> Result<T> {
        loop {
            let value = self.read_typed::<T>(request.prompt)?;
            let Some(bounds) = request.bounds else {
                return Ok(value);
            };
            match bounds.check(value) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!("Rejected {} outside [{}, {}]", value, bounds.min, bounds.max);
                    self.report(&err)?;
                }
            }
        }
    }

    pub fn read_choice(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        let request = ValidationRequest::new(prompt, InputKind::Integer).with_bounds(min, max);
        self.read_validated(&request)
    }

    pub fn read_range(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64> {
        let request = ValidationRequest::new(prompt, InputKind::Real).with_bounds(min, max);
        self.read_validated(&request)
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let prompt = format!("{} (y/n): ", prompt);
        let request = ValidationRequest::<bool>::new(&prompt, InputKind::YesNo);
        loop {
            self.show(request.prompt)?;
            let token = self.next_token()?;
            match parse_yes_no(&token) {
                Ok(answer) => return Ok(answer),
                Err(err) => {
                    tracing::debug!("Rejected yes/no answer {:?}", token);
                    self.report(&err)?;
                }
            }
        }
    }

    /// Drops any buffered tokens and blocks until the next full line.
    pub fn wait_for_line(&mut self) -> Result<()> {
        self.discard_line();
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(())
    }

    fn show(&mut self, prompt: &str) -> Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        Ok(())
    }

    fn report(&mut self, err: &InputError) -> Result<()> {
        match err {
            InputError::Parse { .. } => writeln!(self.writer, "\n[ERROR] {}", err)?,
            _ => writeln!(self.writer, "[ERROR] {}", err)?,
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<String> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::info!("Input closed while waiting for a value");
            return Err(AppError::InputClosed);
        }

        let mut tokens = line.split_whitespace().map(str::to_string);
        match tokens.next() {
            Some(first) => {
                self.pending.extend(tokens);
                Ok(first)
            }
            // Blank line: hand back an empty token so it is rejected and re-prompted.
            None => Ok(String::new()),
        }
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}
