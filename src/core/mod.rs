//! Core types shared across the application

mod error;

pub use error::{AppError, Result};
