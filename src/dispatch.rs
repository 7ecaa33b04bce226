//! Sensor package dispatch
//!
//! Maps a workout type tag to the matching computation profile and unpacks
//! the raw value list positionally into its fields. Arity and duration are
//! validated here so every constructed [`Workout`] satisfies the formula
//! preconditions.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::DispatchError;
use crate::models::{SensorPackage, Sport};
use crate::workout::{Session, Workout};

/// Resolve a tag to its sport, if registered
fn sport_for_tag(tag: &str) -> Option<Sport> {
    match tag {
        "RUN" => Some(Sport::Running),
        "WLK" => Some(Sport::SportsWalking),
        "SWM" => Some(Sport::Swimming),
        _ => None,
    }
}

/// Construct the workout matching `workout_type` from positionally ordered
/// raw sensor values.
///
/// Fails on an unregistered tag, a value list whose length does not match
/// the sport's arity, or a non-positive duration.
pub fn read_package(workout_type: &str, values: &[Decimal]) -> Result<Workout, DispatchError> {
    let sport = sport_for_tag(workout_type).ok_or_else(|| DispatchError::UnknownWorkoutType {
        tag: workout_type.to_string(),
    })?;

    if values.len() != sport.arity() {
        return Err(DispatchError::ArityMismatch {
            tag: workout_type.to_string(),
            expected: sport.arity(),
            actual: values.len(),
        });
    }

    let session = Session::new(values[0], values[1], values[2]);
    if session.duration_h <= Decimal::ZERO {
        return Err(DispatchError::InvalidDuration {
            tag: workout_type.to_string(),
            duration: session.duration_h,
        });
    }

    debug!(tag = workout_type, sport = %sport, "dispatching sensor package");

    Ok(match sport {
        Sport::Running => Workout::Running(session),
        Sport::SportsWalking => Workout::SportsWalking {
            session,
            height_cm: values[3],
        },
        Sport::Swimming => Workout::Swimming {
            session,
            pool_length_m: values[3],
            laps: values[4],
        },
    })
}

/// Dispatch a whole sensor package
pub fn read_sensor_package(package: &SensorPackage) -> Result<Workout, DispatchError> {
    read_package(&package.workout_type, &package.values)
}
