//! End-to-end braking scenarios through the public pipeline

use braking_sim::{AppConfig, Args, Command, Simulation, SimError};
use param_validator::{RawArgs, RoadCondition, RoadType, ValidationError};

fn simulate(values: &[&str]) -> Result<braking_sim::SimulationOutcome, SimError> {
    let (raw, _) = RawArgs::from_positional(values.iter().copied());
    Simulation::default().run_raw(&raw)
}

#[test]
fn test_default_scenario() {
    let outcome = simulate(&[]).unwrap();
    let s = &outcome.summary;
    assert_eq!(s.mass_kg, 2000.0);
    assert_eq!(s.road_type, RoadType::Concrete);
    assert_eq!(s.condition, RoadCondition::Dry);
    assert_eq!(s.friction, 0.50);
    assert!((s.deceleration - 4.905).abs() < 0.005);
    assert!((s.stop_time_s - 5.61).abs() < 0.01);
    assert!((s.stop_distance_m - 77.1).abs() < 0.05);
    assert!((s.thumb_normal_distance_m - 127.71).abs() < 0.01);
    assert!((s.thumb_danger_distance_m - 78.705).abs() < 0.01);
    assert!(outcome.validation.is_clean());
}

#[test]
fn test_explicit_default_scenario_matches_implicit() {
    let explicit = simulate(&["2000", "concrete", "dry", "27.5", "0"]).unwrap();
    let implicit = simulate(&[]).unwrap();
    assert_eq!(explicit.summary, implicit.summary);
    assert_eq!(explicit.validation.fields_checked, 5);
}

#[test]
fn test_wet_ice_scenario() {
    let outcome = simulate(&["2000", "ice", "wet", "20", "0"]).unwrap();
    let s = &outcome.summary;
    assert_eq!(s.friction, 0.08);
    assert_eq!(s.road_type, RoadType::Ice);
    assert!((s.deceleration - 0.7848).abs() < 0.001);
    assert!((s.stop_time_s - 25.48).abs() < 0.02);
}

#[test]
fn test_unsupported_combination_scenario() {
    let outcome = simulate(&["2000", "water", "dry"]).unwrap();
    assert_eq!(outcome.friction.coefficient, 0.50);
    assert!(outcome.friction.fell_back());
    assert_eq!(outcome.params.road_type, RoadType::Concrete);
    assert_eq!(outcome.summary.road_type, RoadType::Concrete);
    assert!(outcome.summary.file_stem().contains("Road_concrete"));
}

#[test]
fn test_malformed_values_recover() {
    let outcome = simulate(&["abc", "asphalt", "icy", "15.5", "steep"]).unwrap();
    assert_eq!(outcome.params.mass_kg, 2000.0);
    assert_eq!(outcome.params.road_type, RoadType::Concrete);
    assert_eq!(outcome.params.condition, RoadCondition::Dry);
    assert_eq!(outcome.params.velocity_ms, 15.5);
    assert_eq!(outcome.params.slope_deg, 0.0);
    assert_eq!(outcome.validation.errors.len(), 4);
    assert!(matches!(
        outcome.validation.errors[0],
        ValidationError::NotANumber { field: "mass", .. }
    ));
}

#[test]
fn test_rule_of_thumb_ignores_everything_but_speed() {
    let flat = simulate(&["2000", "concrete", "dry", "20", "0"]).unwrap();
    let other = simulate(&["900", "ice", "wet", "20", "25"]).unwrap();
    assert_eq!(flat.thumb, other.thumb);
    assert!(flat.summary.stop_distance_m < other.summary.stop_distance_m);
}

#[test]
fn test_degenerate_physics_fails() {
    let result = simulate(&["2000", "concrete", "dry", "20", "135"]);
    assert!(matches!(result, Err(SimError::Kinematics(_))));

    let result = simulate(&["0"]);
    assert!(matches!(result, Err(SimError::Kinematics(_))));
}

#[test]
fn test_vertical_slope_fails() {
    for slope in ["90", "-90"] {
        let result = simulate(&["2000", "concrete", "dry", "27.5", slope]);
        assert!(
            matches!(
                result,
                Err(SimError::Kinematics(
                    kinematics::KinematicsError::InvalidPhysicsState { .. }
                ))
            ),
            "slope {} was accepted",
            slope
        );
    }
}

#[test]
fn test_negative_velocity_fails() {
    let result = simulate(&["2000", "concrete", "dry", "-10"]);
    assert!(matches!(result, Err(SimError::Kinematics(_))));
}

#[test]
fn test_cli_to_pipeline() {
    let args = Args::parse_from(["braking-sim", "1500", "gravel", "dry", "-3", "2"]);
    let Command::Simulate { raw, extra } = args.command else {
        panic!("expected a simulation command");
    };
    assert!(extra.is_empty());
    let result = Simulation::default().run_raw(&raw);
    assert!(matches!(
        result,
        Err(SimError::Kinematics(kinematics::KinematicsError::NegativeVelocity(_)))
    ));
}

#[test]
fn test_summary_written_as_json() {
    let dir = std::env::temp_dir().join(format!("braking-sim-test-{}", std::process::id()));
    let outcome = simulate(&["1800", "sand", "dry", "15", "3"]).unwrap();
    let path = outcome.summary.save(&dir).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Mass_1800_Road_sand_Condition_dry_V0_15_Angle3.json")
    );

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["road_type"], "sand");
    assert_eq!(json["friction"], 0.3);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_configured_defaults_apply() {
    let mut config = AppConfig::default();
    config.defaults.velocity_ms = 10.0;
    let (raw, _) = RawArgs::from_positional(["2000", "concrete", "dry", "fast"]);
    let outcome = Simulation::new(&config).run_raw(&raw).unwrap();
    assert_eq!(outcome.params.velocity_ms, 10.0);
}

mod properties {
    use super::*;
    use param_validator::SimulationParameters;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_stop_distance_matches_closed_form(
            road in 0usize..5,
            condition in 0usize..3,
            velocity in 0.0f64..60.0,
            slope in -45.0f64..45.0,
        ) {
            let params = SimulationParameters {
                road_type: RoadType::ALL[road],
                condition: RoadCondition::ALL[condition],
                velocity_ms: velocity,
                slope_deg: slope,
                ..SimulationParameters::default()
            };
            let s = Simulation::default().run(params).unwrap().summary;
            let expected = velocity * velocity / (2.0 * s.deceleration);
            prop_assert!((s.stop_distance_m - expected).abs() < 1e-6);
            prop_assert!(s.friction > 0.0 && s.friction < 1.0);
        }
    }
}
