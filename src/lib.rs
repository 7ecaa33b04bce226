// Library interface for fittrack modules
// This allows integration tests to access the core functionality

pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod workout;

// Re-export commonly used types for convenience
pub use dispatch::{read_package, read_sensor_package};
pub use error::{DispatchError, FitTrackError, Result};
pub use logging::{LogFormat, LogLevel};
pub use models::{SensorPackage, Sport};
pub use report::InfoMessage;
pub use workout::{Session, Workout};
