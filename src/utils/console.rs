use crate::config::app_config::DisplayConfig;
use crate::utils::error::Result;
use crate::utils::input::InputValidator;
use std::io::{BufRead, Write};

pub fn header(title: &str) -> String {
    format!("\n>>> ===== {} ===== <<<\n", title)
}

pub fn separator(width: usize) -> String {
    format!("{}\n", "-".repeat(width))
}

/// Shared text surface for every activity: validated reads plus the
/// headers, separator lines and pauses that frame them.
pub struct Console<R, W> {
    input: InputValidator<R, W>,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, display: DisplayConfig) -> Self {
        Self {
            input: InputValidator::new(reader, writer),
            display,
        }
    }

    pub fn input(&mut self) -> &mut InputValidator<R, W> {
        &mut self.input
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn header(&mut self, title: &str) -> Result<()> {
        self.say(&header(title))
    }

    pub fn line(&mut self) -> Result<()> {
        let line = separator(self.display.line_width);
        self.say(&line)
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        let writer = self.input.writer_mut();
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Pauses until the user presses Enter, unless pausing is disabled.
    pub fn pause(&mut self) -> Result<()> {
        if !self.display.pause_after_activity {
            return Ok(());
        }
        self.say("\n>>> Press Enter to continue...")?;
        self.input.wait_for_line()
    }

    pub fn into_writer(self) -> W {
        self.input.into_parts().1
    }
}
