extern crate linkbudget;

use crate::test_config;
use approx::assert_abs_diff_eq;
use linkbudget::io::{AntennaConfig, ConfigRepr, ScenarioConfig};
use linkbudget::prelude::*;

#[test]
fn load_scenario() {
    let _ = pretty_env_logger::try_init();

    let path = test_config("uhf_scenario.yaml");
    assert!(path.exists(), "Could not find the test data");

    let config = ScenarioConfig::load(path).unwrap();
    dbg!(&config);

    assert_eq!(config.link.frequency, Megahertz::new(437.0));
    assert_eq!(config.ground_station.antenna, AntennaConfig::FixedGain { gain: Decibel::new(12.0) });
    assert_eq!(config.spacecraft.receiver.losses.connectors, 2);

    let downlink = config.downlink(None).unwrap();
    assert_abs_diff_eq!(downlink.link_margin(), Decibel::new(16.122_579_27), epsilon = 1e-6);
    println!("{}", downlink.budget());
}

#[test]
fn load_pass_scenario() {
    let config = ScenarioConfig::load(test_config("uhf_pass.yaml")).unwrap();

    match config.ground_station.antenna {
        AntennaConfig::Helical { turns, .. } => assert_eq!(turns, 10),
        other => panic!("expected a helical antenna, got {other:?}"),
    }
    let station = config.ground_station().unwrap();
    assert!(station.location.is_some());
    // The helix is in axial mode: C = λ and S = C / 4
    assert_abs_diff_eq!(station.antenna.antenna_gain().value(), 15.740_312_677, epsilon = 1e-3);
    println!("{station}");

    // Defaults of the optional fields
    assert_eq!(config.link.allowed_ber, 1e-6);
    assert_eq!(config.ground_station.receiver.losses.other_in_line_insertion_loss, Decibel::new(0.0));
    assert_eq!(config.spacecraft.figure_of_merit_gain, GainTerm::LOW_GAIN_BASELINE);
    assert_eq!(config.spacecraft.transmitter.guide_loss, Decibel::new(0.0));
}

#[test]
fn load_many_stations() {
    let stations = GeodeticPosition::load_many(test_config("many_ground_stations.yaml")).unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[1].latitude, Degree::new(-35.398_333));

    // Both stations can see a spacecraft right above them
    for station in &stations {
        let overhead = GeodeticPosition::new(station.latitude, station.longitude, Kilometer::new(500.0));
        assert_abs_diff_eq!(elevation_angle(&overhead, station), Degree::new(90.0), epsilon = 1e-4);
    }
}

#[test]
fn invalid_scenario() {
    let err = ScenarioConfig::loads("name: incomplete\nelevation: 10.0").unwrap_err();
    let err = LinkBudgetError::from(err);
    assert!(format!("{err}").starts_with("link budget configuration failed: failed to parse YAML configuration"));
}
