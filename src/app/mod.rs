pub mod activities;
pub mod menu;

pub use activities::{CurrencyExchange, GradeEvaluator, StudentInfo, TriangleActivity};
pub use menu::MainMenu;
