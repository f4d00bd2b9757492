use crate::app::activities::{CurrencyExchange, GradeEvaluator, StudentInfo, TriangleActivity};
use crate::config::AppConfig;
use crate::core::converter::CurrencyConverter;
use crate::domain::ports::Activity;
use crate::utils::console::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const EXIT_ITEM: &str = "Exit Program";

/// Top-level router: shows the numbered menu and hands control to the chosen
/// activity until the user picks "Exit Program".
pub struct MainMenu {
    student_info: StudentInfo,
    grade_evaluator: GradeEvaluator,
    triangle: TriangleActivity,
    currency: CurrencyExchange,
}

impl MainMenu {
    pub fn new(config: &AppConfig, converter: CurrencyConverter) -> Self {
        Self {
            student_info: StudentInfo::new(config.student.clone()),
            grade_evaluator: GradeEvaluator::new(),
            triangle: TriangleActivity::new(),
            currency: CurrencyExchange::new(converter),
        }
    }

    pub fn items(&self) -> [&str; 5] {
        [
            self.student_info.title(),
            self.grade_evaluator.title(),
            self.triangle.title(),
            self.currency.title(),
            EXIT_ITEM,
        ]
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let stars = "*".repeat(console.display().line_width);
        console.say(&format!(
            "\n{}\n   WELCOME TO PROGRAMMING ACTIVITY SYSTEM\n{}\n",
            stars, stars
        ))?;

        let items = self.items();
        let prompt = format!("Enter choice (1-{}): ", items.len());

        loop {
            console.line()?;
            console.say(">>> ===== PROGRAMMING ACTIVITY MENU ===== <<<\n")?;
            console.line()?;
            for (i, item) in items.iter().enumerate() {
                console.say(&format!("[{}] {}\n", i + 1, item))?;
            }
            console.line()?;

            let choice = console.input().read_choice(&prompt, 1, items.len() as i64)?;
            tracing::debug!("Main menu choice {}", choice);

            match choice {
                1 => self.student_info.run(console)?,
                2 => self.grade_evaluator.run(console)?,
                3 => self.triangle.run(console)?,
                4 => self.currency.run(console)?,
                _ => {
                    console.say("Exiting program... Goodbye!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new(&AppConfig::default(), CurrencyConverter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items() {
        assert_eq!(
            MainMenu::default().items(),
            [
                "Virtual Student Info",
                "Student Grade Evaluator",
                "Triangle Loop Activity",
                "Currency Exchange Calculator",
                "Exit Program",
            ]
        );
    }
}
