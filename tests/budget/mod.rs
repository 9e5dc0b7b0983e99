extern crate linkbudget;

use approx::assert_abs_diff_eq;
use linkbudget::prelude::*;
use rstest::*;
use std::sync::Arc;

#[fixture]
fn station() -> Arc<GroundStation> {
    let _ = pretty_env_logger::try_init();

    let receiver = DownlinkReceiver::builder()
        .losses(
            InLineLosses::builder()
                .guide_loss(Decibel::new(0.2852))
                .bandpass_filter_insertion_loss(Decibel::new(1.5))
                .connectors(4)
                .build(),
        )
        .sky_temperature(Kelvin::new(154.0))
        .ground_station_temperature(Kelvin::new(290.0))
        .lna_temperature(Kelvin::new(28.0))
        .lna_gain(Decibel::new(22.5))
        .waveguide_losses(Decibel::new(0.1))
        .comms_receiver_front_end_temperature(Kelvin::new(1000.0))
        .build();

    let transmitter = Transmitter::builder()
        .power_output(Watt::new(13.0))
        .guide_loss(Decibel::new(0.155))
        .connectors(4)
        .filter_insertion_losses(Decibel::new(1.0))
        .other_in_line_losses(Decibel::new(0.7))
        .build();

    Arc::new(
        GroundStation::builder()
            .antenna(Antenna::fixed(Decibel::new(12.0)))
            .receiver(receiver)
            .transmitter(transmitter)
            .altitude(Meter::new(50.0).into())
            .build(),
    )
}

#[fixture]
fn spacecraft() -> Spacecraft {
    let receiver = UplinkReceiver::builder()
        .losses(
            InLineLosses::builder()
                .guide_loss(Decibel::new(0.16))
                .bandpass_filter_insertion_loss(Decibel::new(0.7))
                .other_in_line_insertion_loss(Decibel::new(0.5))
                .connectors(2)
                .build(),
        )
        .sky_temperature(Kelvin::new(280.0))
        .spacecraft_temperature(Kelvin::new(280.0))
        .lna_temperature(Kelvin::new(28.0))
        .lna_gain(Decibel::new(20.0))
        .build();

    let transmitter = Transmitter::builder()
        .power_output(Watt::new(1.3))
        .connectors(4)
        .other_in_line_losses(Decibel::new(0.5))
        .mismatch_losses(Decibel::new(0.23))
        .build();

    Spacecraft::builder()
        .antenna(Antenna::fixed(Decibel::new(-1.3)))
        .receiver(receiver)
        .transmitter(transmitter)
        .altitude(Kilometer::new(380.0))
        .build()
}

#[fixture]
fn params() -> LinkParameters {
    LinkParameters::builder()
        .frequency(Megahertz::new(437.0))
        .additional_losses(Decibel::new(3.4))
        .data_rate_bps(20_000.0)
        .modulation_loss(Decibel::new(1.0))
        .eb_to_no(Decibel::new(8.0))
        .build()
}

#[rstest]
fn uhf_downlink(station: Arc<GroundStation>, spacecraft: Spacecraft, params: LinkParameters) {
    let link = Downlink::new(station, spacecraft, params, Degree::new(30.0));

    assert!((link.slant_range().value() - 704.68).abs() / 704.68 < 0.01);
    assert_abs_diff_eq!(link.path_loss(), Decibel::new(142.22), epsilon = 0.01);
    assert_abs_diff_eq!(link.link_margin(), Decibel::new(16.14), epsilon = 0.1);

    let budget = link.budget();
    println!("{budget}");
    assert_eq!(budget.link_margin, link.link_margin());
    assert_eq!(
        budget.isotropic_signal_level,
        budget.eirp - budget.total_losses
    );
}

#[rstest]
fn uhf_uplink(station: Arc<GroundStation>, spacecraft: Spacecraft, params: LinkParameters) {
    let uplink = Uplink::new(station.clone(), spacecraft.clone(), params, Degree::new(30.0));
    let downlink = Downlink::new(station, spacecraft, params, Degree::new(30.0));

    // Same geometry, same path loss
    assert_eq!(uplink.path_loss(), downlink.path_loss());
    assert_abs_diff_eq!(uplink.link_margin(), Decibel::new(27.711_386_21), epsilon = 1e-6);
    println!("{}", uplink.budget());
}

#[rstest]
fn margin_over_elevation(station: Arc<GroundStation>, spacecraft: Spacecraft, params: LinkParameters) {
    let link = Downlink::new(station, spacecraft, params, Degree::new(5.0));

    let margins: Vec<Decibel> = (1..=18)
        .map(|i| {
            link.with_geometry(link.spacecraft.clone(), Degree::new(5.0 * i as f64))
                .link_margin()
        })
        .collect();

    // The link only gets better as the spacecraft rises
    for pair in margins.windows(2) {
        assert!(pair[1] > pair[0], "{} then {}", pair[0], pair[1]);
    }
}

#[rstest]
fn legacy_constants(station: Arc<GroundStation>, spacecraft: Spacecraft, params: LinkParameters) {
    let station = GroundStation {
        eirp_gain: GainTerm::LEGACY_EIRP,
        ..station.as_ref().clone()
    };
    let spacecraft = Spacecraft {
        eirp_gain: GainTerm::LEGACY_EIRP,
        ..spacecraft
    };

    let downlink = Downlink::new(station.clone(), spacecraft.clone(), params, Degree::new(30.0));
    assert_abs_diff_eq!(downlink.link_margin(), Decibel::new(20.295_579_27), epsilon = 1e-6);

    let uplink = Uplink::new(station, spacecraft, params, Degree::new(30.0));
    assert_abs_diff_eq!(uplink.link_margin(), Decibel::new(18.584_386_21), epsilon = 1e-6);
}

#[test]
fn polarization_mismatch() {
    let loss = polarization_loss(1.4125, 1.4125, Radian::new(1.5707));
    assert!((loss.value() - 0.508).abs() / 0.508 < 0.01);
}

#[test]
fn antenna_models() {
    let helix = AntennaHelical::new(Meter::new(0.1249), 10, Meter::new(0.031_225), Meter::new(0.1249));
    let dish = AntennaParabolicReflector::new(Meter::new(1.0), Meter::new(0.1249), 0.7);

    let antennas: Vec<Antenna> = vec![helix.into(), dish.into(), Antenna::fixed(Decibel::new(2.0))];
    let gains: Vec<f64> = antennas.iter().map(|a| a.antenna_gain().value()).collect();
    assert_abs_diff_eq!(gains[0], 15.740_312_677, epsilon = 1e-6);
    assert_abs_diff_eq!(gains[1], 26.462_729_087, epsilon = 1e-6);
    assert_eq!(gains[2], 2.0);
}
