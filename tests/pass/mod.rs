extern crate linkbudget;

use approx::assert_abs_diff_eq;
use linkbudget::io::{export_csv, run_downlink_pass, AntennaConfig, ConfigRepr, ScenarioConfig};
use linkbudget::linalg::DMatrix;
use linkbudget::pass::{exclude_eclipses, offset_altitude, tile_track};
use linkbudget::prelude::*;
use rstest::*;
use std::f64::consts::PI;

use crate::test_config;

/// A measured pattern peaking on boresight at one degree resolution: theta spans the whole sphere from boresight, and
/// the back hemisphere only carries a small floor.
#[fixture]
fn pattern() -> MeasuredPattern {
    let _ = pretty_env_logger::try_init();

    let theta: Vec<Radian> = (0..=180).map(|i| Radian::from(Degree::new(i as f64))).collect();
    let phi: Vec<Radian> = (0..=360)
        .map(|j| Radian::from(Degree::new(-180.0 + j as f64)))
        .collect();

    let grid = DMatrix::from_fn(theta.len(), phi.len(), |i, _| {
        let theta = theta[i].value();
        if theta <= PI / 2.0 {
            1.64 * theta.cos().powi(2) + 1e-3
        } else {
            1e-3
        }
    });

    let pattern = MeasuredPattern::with_axes(grid, 0.7, PatternScale::Linear, theta, phi).unwrap();
    assert!(pattern.total_radiated_power() > 0.0);
    pattern
}

#[fixture]
fn config() -> ScenarioConfig {
    ScenarioConfig::load(test_config("uhf_pass.yaml")).unwrap()
}

/// A single ground track passing near the station, at one sample per step.
fn ground_track(len: usize) -> Vec<OrbitSample> {
    (0..len)
        .map(|i| {
            let progress = i as f64 / (len - 1) as f64;
            OrbitSample::new(
                Kilometer::new(380.0),
                Degree::new(30.0 + 20.0 * progress),
                Degree::new(18.0 + 8.0 * progress),
            )
        })
        .collect()
}

fn attitude_error(len: usize) -> Vec<AttitudeSample> {
    (0..len)
        .map(|i| {
            let t = i as f64 / 10.0;
            AttitudeSample::new(Degree::new(2.0 * t.sin()), Degree::new(5.0 * t.cos()))
        })
        .collect()
}

#[rstest]
fn dynamic_pointing_loss(pattern: MeasuredPattern, config: ScenarioConfig) {
    let link = config.downlink(Some(pattern.clone())).unwrap();
    let station = config.ground_station.location.unwrap();

    let pass = PointingLossPass::new(
        link,
        station,
        ground_track(200),
        attitude_error(200),
        Unit::Millisecond * 100,
    )
    .unwrap();

    let samples = pass.evaluate();
    assert_eq!(samples.len(), 200);
    assert_eq!(samples, pass.par_evaluate());

    for (sample, orbit) in samples.iter().zip(ground_track(200)) {
        assert!(sample.off_boresight.value().abs() <= 90.0);
        assert!(sample.pointing_loss.value() >= -1e-12);

        // The pass matches a static budget at the same geometry
        let snapshot = pass.link().with_geometry(
            pass.link()
                .spacecraft
                .with_altitude(orbit.altitude)
                .with_pointing_loss(sample.pointing_loss),
            sample.elevation,
        );
        assert_eq!(snapshot.link_margin(), sample.link_margin);
    }

    let summary = PassSummary::from_samples(&samples, Decibel::new(3.0)).unwrap();
    println!("{summary}");
    assert_eq!(summary.samples, 200);
    assert_eq!(summary.duration, Unit::Millisecond * 19_900);
    assert!(summary.min_margin <= summary.max_margin);
    assert!(summary.mean_margin.value() >= summary.min_margin.value() - 1e-9);
    assert!(summary.mean_margin.value() <= summary.max_margin.value() + 1e-9);
    assert!((0.0..=1.0).contains(&summary.fraction_above_threshold));
}

#[rstest]
fn zenith_margin(pattern: MeasuredPattern, config: ScenarioConfig) {
    let station = config.ground_station.location.unwrap();
    let overhead = vec![OrbitSample::new(config.spacecraft.altitude, station.latitude, station.longitude); 4];
    let boresight = vec![AttitudeSample::new(Degree::new(0.0), Degree::new(0.0)); 4];

    let link = config.downlink(Some(pattern)).unwrap();
    let pass = PointingLossPass::new(link, station, overhead, boresight, Unit::Second * 10).unwrap();

    // Same scenario with a fixed gain spacecraft antenna and the fixed EIRP term, seen at zenith
    let mut fixed = config.clone();
    fixed.spacecraft.antenna = AntennaConfig::FixedGain { gain: Decibel::new(0.0) };
    fixed.spacecraft.eirp_gain = GainTerm::LEGACY_EIRP;
    fixed.elevation = Degree::new(90.0);
    let expected = fixed.downlink(None).unwrap().link_margin();

    for sample in pass.evaluate() {
        assert_abs_diff_eq!(sample.off_boresight, Degree::new(0.0), epsilon = 1e-4);
        assert_abs_diff_eq!(sample.pointing_loss, Decibel::new(0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(sample.link_margin, expected, epsilon = 1e-4);
        assert!(sample.link_margin.value() < 60.0);
    }
}

#[rstest]
fn pipeline_from_raw_series(pattern: MeasuredPattern, config: ScenarioConfig) {
    // Attitude telemetry over two orbits with an eclipse in the middle
    let attitude = attitude_error(500);
    let in_eclipse: Vec<bool> = (0..500).map(|i| (200..260).contains(&i)).collect();
    let sunlit = exclude_eclipses(&attitude, &in_eclipse, 20, 10);
    assert_eq!(sunlit.len(), 500 - 60 - 20 - 10);

    let samples = run_downlink_pass(
        &config,
        pattern,
        ground_track(100),
        sunlit,
        Unit::Millisecond * 100,
    )
    .unwrap();

    // The track of 100 samples is tiled four times to cover the 410 attitude samples
    assert_eq!(samples.len(), 400);
    assert_eq!(samples[100].elevation, samples[0].elevation);

    let path = std::env::temp_dir().join("linkbudget_pipeline.csv");
    export_csv(&samples, &path).unwrap();
    let rows = std::fs::read_to_string(&path).unwrap().lines().count();
    assert_eq!(rows, 401);
}

#[test]
fn track_preparation() {
    let mut track = tile_track(&ground_track(10), 35);
    assert_eq!(track.len(), 30);
    offset_altitude(&mut track, Kilometer::new(70.0));
    assert!(track.iter().all(|s| s.altitude == Kilometer::new(450.0)));
}
