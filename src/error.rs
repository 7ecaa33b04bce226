//! Unified error hierarchy for fittrack
//!
//! Provides structured error types for sensor package dispatch and
//! input handling, with a crate-wide `Result` alias.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for all fittrack operations
#[derive(Debug, Error)]
pub enum FitTrackError {
    /// Sensor package dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors constructing a workout from a sensor package
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    /// Tag does not match any registered workout type
    #[error("Unknown workout type: {tag}")]
    UnknownWorkoutType { tag: String },

    /// Value list length does not match the workout type's arity
    #[error("Wrong value count for {tag}: expected {expected}, got {actual}")]
    ArityMismatch {
        tag: String,
        expected: usize,
        actual: usize,
    },

    /// Duration must be positive; derived speeds divide by it
    #[error("Invalid duration for {tag}: {duration} h")]
    InvalidDuration { tag: String, duration: Decimal },
}

/// Result type alias for fittrack operations
pub type Result<T> = std::result::Result<T, FitTrackError>;

impl FitTrackError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitTrackError::Dispatch(DispatchError::UnknownWorkoutType { tag }) => {
                format!(
                    "Unrecognized workout type '{}'. Supported types: RUN, WLK, SWM.",
                    tag
                )
            }
            FitTrackError::Dispatch(DispatchError::ArityMismatch {
                tag,
                expected,
                actual,
            }) => {
                format!(
                    "Sensor package for '{}' carries {} values but {} are required.",
                    tag, actual, expected
                )
            }
            FitTrackError::Json(_) => {
                "Input file is not a valid JSON array of sensor packages.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
