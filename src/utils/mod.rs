pub mod console;
pub mod error;
pub mod input;
pub mod logger;
pub mod validation;
