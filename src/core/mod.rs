pub mod converter;
pub mod grades;
pub mod triangle;

pub use crate::domain::model::{ConversionResult, Currency, Grade, GradeReport};
pub use crate::domain::ports::Activity;
pub use crate::utils::error::Result;
