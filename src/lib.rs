pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod ui;

pub use error::{AppError, Result};
