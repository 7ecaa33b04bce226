use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sport types supported by the metrics calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Running,
    SportsWalking,
    Swimming,
}

impl Sport {
    /// Name used in rendered summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::SportsWalking => "SportsWalking",
            Sport::Swimming => "Swimming",
        }
    }

    /// Sensor wire tag for this sport
    pub fn tag(&self) -> &'static str {
        match self {
            Sport::Running => "RUN",
            Sport::SportsWalking => "WLK",
            Sport::Swimming => "SWM",
        }
    }

    /// Number of raw values a sensor package for this sport carries
    pub fn arity(&self) -> usize {
        match self {
            Sport::Running => 3,
            Sport::SportsWalking => 4,
            Sport::Swimming => 5,
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw sensor record: a workout type tag plus an ordered, position-dependent
/// list of numeric values.
///
/// Value order per tag:
/// - `RUN`: action, duration (h), weight (kg)
/// - `WLK`: action, duration (h), weight (kg), height (cm)
/// - `SWM`: action, duration (h), weight (kg), pool length (m), lap count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type tag (RUN, WLK, SWM)
    pub workout_type: String,

    /// Ordered raw sensor values
    pub values: Vec<Decimal>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, values: Vec<Decimal>) -> Self {
        Self {
            workout_type: workout_type.into(),
            values,
        }
    }

    /// Parse a JSON array of sensor packages
    pub fn from_json(data: &str) -> crate::error::Result<Vec<Self>> {
        Ok(serde_json::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sport_display_names() {
        assert_eq!(Sport::Running.display_name(), "Running");
        assert_eq!(Sport::SportsWalking.display_name(), "SportsWalking");
        assert_eq!(Sport::Swimming.display_name(), "Swimming");
    }

    #[test]
    fn test_sport_arity() {
        assert_eq!(Sport::Running.arity(), 3);
        assert_eq!(Sport::SportsWalking.arity(), 4);
        assert_eq!(Sport::Swimming.arity(), 5);
    }

    #[test]
    fn test_packages_from_json() {
        let packages = SensorPackage::from_json(
            r#"[
                {"workout_type": "RUN", "values": [15000, 1, 75]},
                {"workout_type": "WLK", "values": [3000.33, 2.512, 75.8, 180.1]}
            ]"#,
        )
        .unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "RUN");
        assert_eq!(packages[1].values[0], dec!(3000.33));
    }

    #[test]
    fn test_packages_from_invalid_json() {
        assert!(SensorPackage::from_json("not json").is_err());
    }
}
