use crate::domain::model::{Grade, GradeReport};

pub const GRADING_PERIODS: [&str; 4] = ["Prelim", "Midterm", "PreFinal", "Final"];
pub const PASSING_GRADE: f64 = 80.0;
pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

/// Averages the grades and compares against [`PASSING_GRADE`] (inclusive).
/// An empty list averages to zero and fails.
pub fn evaluate(grades: Vec<Grade>) -> GradeReport {
    let average = if grades.is_empty() {
        0.0
    } else {
        grades.iter().map(|g| g.value).sum::<f64>() / grades.len() as f64
    };

    GradeReport {
        passed: average >= PASSING_GRADE,
        average,
        grades,
    }
}
