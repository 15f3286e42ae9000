//! Utility module — error types, time helpers, validation, logging

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

// Re-export commonly used items
pub use error::{AppError, AppResponse, ok, ok_with_message};
pub use logger::{init_logger, init_logger_with_file};
pub use result::AppResult;
