//! Workout summary rendering
//!
//! [`InfoMessage`] is the immutable summary value a workout produces;
//! [`InfoMessage::get_message`] renders it with fixed 3-decimal formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Sport;

/// Summary of a completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout type the metrics were derived for
    pub training_type: Sport,

    /// Session duration in hours
    pub duration_h: Decimal,

    /// Distance covered in kilometers
    pub distance_km: Decimal,

    /// Mean speed in km/h
    pub mean_speed_kmh: Decimal,

    /// Calories burned in kcal
    pub calories_kcal: Decimal,
}

impl InfoMessage {
    /// Render the summary line. All four numeric fields carry exactly three
    /// decimal places regardless of input precision.
    pub fn get_message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_h.round_dp(3),
            self.distance_km.round_dp(3),
            self.mean_speed_kmh.round_dp(3),
            self.calories_kcal.round_dp(3)
        )
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.get_message())
    }
}
