use rust_decimal_macros::dec;
use std::io::Write;

use fittrack::{read_package, read_sensor_package, DispatchError, SensorPackage, Sport};

/// Integration tests covering the full package -> workout -> summary flow

#[test]
fn test_swimming_end_to_end() {
    let workout = read_package("SWM", &[dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]).unwrap();
    assert_eq!(
        workout.summary().get_message(),
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn test_running_end_to_end() {
    let workout = read_package("RUN", &[dec!(15000), dec!(1), dec!(75)]).unwrap();
    assert_eq!(
        workout.summary().get_message(),
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 797.805."
    );
}

#[test]
fn test_walking_end_to_end() {
    let workout = read_package("WLK", &[dec!(9000), dec!(1), dec!(75), dec!(180)]).unwrap();
    assert_eq!(
        workout.summary().get_message(),
        "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 349.252."
    );
}

#[test]
fn test_fractional_sensor_values_render_three_decimals() {
    let workout = read_package(
        "WLK",
        &[dec!(3000.33), dec!(2.512), dec!(75.8), dec!(180.1)],
    )
    .unwrap();
    let message = workout.summary().get_message();

    assert!(message.starts_with("Training type: SportsWalking; "));
    assert!(message.contains("Duration: 2.512 h."));
    assert!(message.contains("Distance: 1.950 km"));
    assert!(message.contains("Mean speed: 0.776 km/h"));

    // every numeric field carries exactly three decimal places; the last
    // field ends the sentence, so drop its closing period
    for field in ["Duration: ", "Distance: ", "Mean speed: ", "Calories burned: "] {
        let start = message.find(field).unwrap() + field.len();
        let number: String = message[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let number = number.trim_end_matches('.');
        let (_, frac) = number.split_once('.').unwrap();
        assert_eq!(frac.len(), 3, "field {:?} rendered as {:?}", field, number);
    }
}

#[test]
fn test_unknown_tag_never_returns_a_default() {
    let err = read_package("XYZ", &[dec!(1), dec!(1), dec!(1)]).unwrap_err();
    assert_eq!(
        err,
        DispatchError::UnknownWorkoutType {
            tag: "XYZ".to_string()
        }
    );
}

#[test]
fn test_arity_mismatch_names_counts() {
    let err = read_package("SWM", &[dec!(720), dec!(1), dec!(80)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Wrong value count for SWM: expected 5, got 3"
    );
}

#[test]
fn test_json_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"workout_type": "SWM", "values": [720, 1, 80, 25, 40]}},
            {{"workout_type": "RUN", "values": [15000, 1, 75]}},
            {{"workout_type": "WLK", "values": [9000, 1, 75, 180]}}
        ]"#
    )
    .unwrap();

    let data = std::fs::read_to_string(file.path()).unwrap();
    let packages = SensorPackage::from_json(&data).unwrap();
    assert_eq!(packages.len(), 3);

    let summaries: Vec<_> = packages
        .iter()
        .map(|p| read_sensor_package(p).unwrap().summary())
        .collect();

    assert_eq!(summaries[0].training_type, Sport::Swimming);
    assert_eq!(summaries[1].calories_kcal, dec!(797.805));
    assert_eq!(summaries[2].distance_km, dec!(5.85));
}

#[test]
fn test_bad_package_in_file_surfaces_dispatch_error() {
    let packages = SensorPackage::from_json(
        r#"[{"workout_type": "FLY", "values": [1, 1, 1]}]"#,
    )
    .unwrap();
    let err = read_sensor_package(&packages[0]).unwrap_err();
    assert!(err.to_string().contains("FLY"));
}
