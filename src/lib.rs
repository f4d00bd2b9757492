pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::{CurrencyExchange, GradeEvaluator, MainMenu, StudentInfo, TriangleActivity};
pub use config::AppConfig;
pub use crate::core::converter::{CurrencyConverter, ExchangeRateTable};
pub use domain::model::{ConversionResult, Currency};
pub use utils::console::Console;
pub use utils::error::{AppError, InputError, Result};
pub use utils::input::InputValidator;
