//! Workout computation profiles
//!
//! A closed set of three workout variants sharing one base distance/speed
//! computation, each with its own calorie equation. Metrics are derived on
//! demand from immutable inputs; nothing is cached or mutated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Sport;
use crate::report::InfoMessage;

const M_IN_KM: Decimal = dec!(1000);
const MIN_IN_HOUR: Decimal = dec!(60);

/// Distance covered per step, meters
const STEP_LENGTH_M: Decimal = dec!(0.65);
/// Distance covered per stroke, meters
const STROKE_LENGTH_M: Decimal = dec!(1.38);

const RUN_SPEED_MULTIPLIER: Decimal = dec!(18);
const RUN_SPEED_SHIFT: Decimal = dec!(1.79);

const WALK_WEIGHT_MULTIPLIER: Decimal = dec!(0.035);
const WALK_HEIGHT_MULTIPLIER: Decimal = dec!(0.029);
/// km/h to m/s conversion factor
const KMH_TO_MS: Decimal = dec!(0.278);
const CM_IN_M: Decimal = dec!(100);

const SWIM_SPEED_SHIFT: Decimal = dec!(1.1);
const SWIM_SPEED_MULTIPLIER: Decimal = dec!(2);

/// Raw inputs shared by every workout type
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Count of discrete movement units (steps or strokes)
    pub action: Decimal,

    /// Session duration in hours. Must be positive; mean speed divides by
    /// it. [`crate::dispatch::read_package`] enforces this for untrusted
    /// input.
    pub duration_h: Decimal,

    /// Athlete weight in kilograms
    pub weight_kg: Decimal,
}

impl Session {
    pub fn new(action: Decimal, duration_h: Decimal, weight_kg: Decimal) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

/// A single instantiated workout, ready for metric queries
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Session),
    SportsWalking {
        session: Session,
        /// Athlete height in centimeters
        height_cm: Decimal,
    },
    Swimming {
        session: Session,
        /// Pool length in meters
        pool_length_m: Decimal,
        /// Number of pool lengths swum
        laps: Decimal,
    },
}

impl Workout {
    pub fn sport(&self) -> Sport {
        match self {
            Workout::Running(_) => Sport::Running,
            Workout::SportsWalking { .. } => Sport::SportsWalking,
            Workout::Swimming { .. } => Sport::Swimming,
        }
    }

    fn session(&self) -> &Session {
        match self {
            Workout::Running(session) => session,
            Workout::SportsWalking { session, .. } => session,
            Workout::Swimming { session, .. } => session,
        }
    }

    fn unit_length_m(&self) -> Decimal {
        match self {
            Workout::Swimming { .. } => STROKE_LENGTH_M,
            _ => STEP_LENGTH_M,
        }
    }

    /// Distance covered during the session, kilometers
    pub fn distance_km(&self) -> Decimal {
        self.session().action * self.unit_length_m() / M_IN_KM
    }

    /// Mean speed over the session, km/h
    ///
    /// Swimming uses pool length and lap count instead of the generic
    /// distance/duration formula.
    pub fn mean_speed_kmh(&self) -> Decimal {
        match self {
            Workout::Swimming {
                session,
                pool_length_m,
                laps,
            } => pool_length_m * laps / M_IN_KM / session.duration_h,
            _ => self.distance_km() / self.session().duration_h,
        }
    }

    /// Calories burned during the session, kcal
    pub fn spent_calories(&self) -> Decimal {
        match self {
            Workout::Running(session) => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT)
                    * session.weight_kg
                    / M_IN_KM
                    * session.duration_h
                    * MIN_IN_HOUR
            }
            Workout::SportsWalking { session, height_cm } => {
                let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
                let height_m = height_cm / CM_IN_M;
                (WALK_WEIGHT_MULTIPLIER * session.weight_kg
                    + speed_ms * speed_ms / height_m * WALK_HEIGHT_MULTIPLIER * session.weight_kg)
                    * session.duration_h
                    * MIN_IN_HOUR
            }
            Workout::Swimming { session, .. } => {
                (self.mean_speed_kmh() + SWIM_SPEED_SHIFT)
                    * SWIM_SPEED_MULTIPLIER
                    * session.weight_kg
                    * session.duration_h
            }
        }
    }

    /// Assemble the summary message for this workout
    pub fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.sport(),
            duration_h: self.session().duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
