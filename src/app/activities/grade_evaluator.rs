use crate::core::grades::{evaluate, GRADING_PERIODS, MAX_GRADE, MIN_GRADE, PASSING_GRADE};
use crate::domain::model::{Grade, GradeReport};
use crate::domain::ports::Activity;
use crate::utils::console::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Default)]
pub struct GradeEvaluator;

impl GradeEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Prompts for every grading period and evaluates the result.
    pub fn collect<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<GradeReport> {
        let mut grades = Vec::with_capacity(GRADING_PERIODS.len());
        for period in GRADING_PERIODS {
            let prompt = format!("Enter {} Grade: ", period);
            let value = console.input().read_range(&prompt, MIN_GRADE, MAX_GRADE)?;
            grades.push(Grade::new(period, value));
        }
        Ok(evaluate(grades))
    }
}

impl Activity for GradeEvaluator {
    fn title(&self) -> &str {
        "Student Grade Evaluator"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.header(self.title())?;

        let report = self.collect(console)?;
        tracing::debug!("Grade average {:.2}, passed: {}", report.average, report.passed);

        console.line()?;
        console.say(&format!("Passing grade: {}\n", PASSING_GRADE))?;
        console.say(&format!("Your average: {}\n", report.average))?;
        console.say("REMARKS: ")?;
        if report.passed {
            console.header("PASADO KA BOI!!")?;
        } else {
            console.header("BAGSAK KA BOI!!")?;
        }
        console.line()?;

        console.pause()
    }
}
