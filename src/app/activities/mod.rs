pub mod currency_exchange;
pub mod grade_evaluator;
pub mod student_info;
pub mod triangle;

pub use currency_exchange::CurrencyExchange;
pub use grade_evaluator::GradeEvaluator;
pub use student_info::StudentInfo;
pub use triangle::TriangleActivity;
