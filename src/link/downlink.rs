/*
    linkbudget, satellite link budgets with measured antenna patterns
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::{LinkDirection, LinkKind, LinkParameters};
use crate::node::{GroundStation, Spacecraft};
use crate::units::{Decibel, DecibelHertz, DecibelPerKelvin, DecibelWatt, Degree};
use std::sync::Arc;

/// Negated Boltzmann constant used in the downlink budget, in dB(W/K/Hz).
pub const DOWNLINK_INVERSE_BOLTZMANN: Decibel = Decibel::new(228.599);

/// Spacecraft to ground station link.
#[derive(Clone, Debug, PartialEq)]
pub struct Downlink {
    pub ground_station: Arc<GroundStation>,
    pub spacecraft: Spacecraft,
    pub parameters: LinkParameters,
    pub elevation: Degree,
}

impl Downlink {
    pub fn new<G: Into<Arc<GroundStation>>>(
        ground_station: G,
        spacecraft: Spacecraft,
        parameters: LinkParameters,
        elevation: Degree,
    ) -> Self {
        Self {
            ground_station: ground_station.into(),
            spacecraft,
            parameters,
            elevation,
        }
    }
}

impl LinkDirection for Downlink {
    fn kind(&self) -> LinkKind {
        LinkKind::Downlink
    }

    fn ground_station(&self) -> &GroundStation {
        &self.ground_station
    }

    fn spacecraft(&self) -> &Spacecraft {
        &self.spacecraft
    }

    fn parameters(&self) -> &LinkParameters {
        &self.parameters
    }

    fn elevation(&self) -> Degree {
        self.elevation
    }

    fn with_geometry(&self, spacecraft: Spacecraft, elevation: Degree) -> Self {
        Self {
            ground_station: Arc::clone(&self.ground_station),
            spacecraft,
            parameters: self.parameters,
            elevation,
        }
    }

    fn eirp(&self) -> DecibelWatt {
        self.spacecraft.eirp()
    }

    fn figure_of_merit(&self) -> DecibelPerKelvin {
        self.ground_station.figure_of_merit()
    }

    fn total_losses(&self) -> Decibel {
        self.parameters.additional_losses + self.path_loss() + self.ground_station.pointing_loss
    }

    fn isotropic_signal_level(&self) -> DecibelWatt {
        self.eirp() - self.total_losses()
    }

    fn s_to_no(&self) -> DecibelHertz {
        (self.isotropic_signal_level() - self.spacecraft.pointing_loss)
            .noise_density_ratio(self.figure_of_merit(), DOWNLINK_INVERSE_BOLTZMANN)
    }
}

#[cfg(test)]
mod ut_downlink {
    use super::*;
    use crate::antenna::Antenna;
    use crate::fixtures::{reference_parameters, reference_spacecraft, reference_station};
    use crate::node::GainTerm;
    use crate::units::Kilometer;
    use approx::assert_abs_diff_eq;

    fn reference_downlink() -> Downlink {
        Downlink::new(
            reference_station(),
            reference_spacecraft(Antenna::fixed(Decibel::new(-1.3))),
            reference_parameters(),
            Degree::new(30.0),
        )
    }

    #[test]
    fn reference_budget() {
        let link = reference_downlink();
        assert_abs_diff_eq!(link.slant_range(), Kilometer::new(704.678_912_5), epsilon = 1e-6);
        assert_abs_diff_eq!(link.path_loss(), Decibel::new(142.217_240_19), epsilon = 1e-7);
        assert_abs_diff_eq!(
            link.isotropic_signal_level(),
            DecibelWatt::new(-146.707_806_667),
            epsilon = 1e-7
        );
        assert_abs_diff_eq!(link.s_to_no(), DecibelHertz::new(68.132_879_23), epsilon = 1e-6);
        assert_abs_diff_eq!(link.system_eb_to_no(), Decibel::new(25.122_579_27), epsilon = 1e-6);
        assert_abs_diff_eq!(link.link_margin(), Decibel::new(16.122_579_27), epsilon = 1e-6);
        // Within a tenth of a dB of the published budget
        assert!((link.link_margin().value() - 16.14).abs() < 0.1);
    }

    #[test]
    fn legacy_eirp() {
        let mut link = reference_downlink();
        link.spacecraft.eirp_gain = GainTerm::LEGACY_EIRP;
        assert_abs_diff_eq!(
            link.isotropic_signal_level(),
            DecibelWatt::new(-142.534_806_667),
            epsilon = 1e-7
        );
        assert_abs_diff_eq!(link.link_margin(), Decibel::new(20.295_579_27), epsilon = 1e-6);
    }

    #[test]
    fn spacecraft_pointing_loss_reduces_margin() {
        let link = reference_downlink();
        let lossy = link.with_geometry(link.spacecraft.with_pointing_loss(Decibel::new(3.0)), link.elevation);
        assert_abs_diff_eq!(
            lossy.link_margin(),
            link.link_margin() - Decibel::new(3.0),
            epsilon = 1e-12
        );
        // The losses only account for the ground station pointing
        assert_eq!(lossy.total_losses(), link.total_losses());
    }

    #[test]
    fn higher_is_better() {
        let link = reference_downlink();
        let zenith = link.with_geometry(link.spacecraft.clone(), Degree::new(90.0));
        assert!(zenith.link_margin() > link.link_margin());
        assert!(Arc::ptr_eq(&zenith.ground_station, &link.ground_station));
    }

    #[test]
    fn report() {
        let link = reference_downlink();
        let budget = link.budget();
        assert_eq!(budget.kind, crate::link::LinkKind::Downlink);
        assert_eq!(budget.link_margin, link.link_margin());
        assert_eq!(budget.path_loss, link.path_loss());
        assert_eq!(budget.figure_of_merit, link.ground_station.figure_of_merit());
        let repr = format!("{budget}");
        assert!(repr.starts_with("downlink at 437.000 MHz, elevation 30.00 deg"));
        assert!(repr.ends_with("link margin            16.123 dB"));
    }

    #[test]
    fn idempotent() {
        let link = reference_downlink();
        let first = link.link_margin();
        for _ in 0..3 {
            assert_eq!(link.link_margin().value().to_bits(), first.value().to_bits());
        }
    }
}
