//! Application initialization error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Failed to start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
