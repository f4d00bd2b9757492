use crate::utils::console::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// One entry of the main menu. Runs to completion against the shared console
/// and returns control to the menu.
pub trait Activity {
    fn title(&self) -> &str;

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()>;
}
