use crate::core::triangle::{inverted_triangle, right_triangle, MAX_HEIGHT, MIN_HEIGHT};
use crate::domain::ports::Activity;
use crate::utils::console::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Default)]
pub struct TriangleActivity;

impl TriangleActivity {
    pub fn new() -> Self {
        Self
    }
}

impl Activity for TriangleActivity {
    fn title(&self) -> &str {
        "Triangle Loop Activity"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.header(self.title())?;

        loop {
            console.say("Triangle Options:\n1. Right Triangle\n2. Inverted Triangle\n3. Both\n4. Exit\n")?;
            console.line()?;

            let choice = console.input().read_choice("Enter choice (1-4): ", 1, 4)?;
            if choice == 4 {
                console.say("Exiting Triangle Activity...\n")?;
                console.say("Successfully Navigated to Main Menu\n\n")?;
                return Ok(());
            }

            let prompt = format!("Enter height ({}-{}): ", MIN_HEIGHT, MAX_HEIGHT);
            // Bounded to [1, 20], so the cast cannot truncate.
            let height = console.input().read_choice(&prompt, MIN_HEIGHT, MAX_HEIGHT)? as usize;

            console.say("\n")?;
            match choice {
                1 => {
                    console.say("Right Triangle:\n")?;
                    console.say(&right_triangle(height))?;
                }
                2 => {
                    console.say("Inverted Triangle:\n")?;
                    console.say(&inverted_triangle(height))?;
                }
                _ => {
                    console.say("Right Triangle:\n")?;
                    console.say(&right_triangle(height))?;
                    console.say("\nInverted Triangle:\n")?;
                    console.say(&inverted_triangle(height))?;
                }
            }
            console.pause()?;
            console.say("\n")?;
        }
    }
}
