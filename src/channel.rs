//! Physical channel map.
//!
//! Six thermistors are read in order, optionally followed by the reference probe. All
//! channels share AIN9 as the negative input.
use ads124s08::{InputMux, Mux};

use crate::convert::{Beta, Conversion, SteinhartHart};
use crate::design_parameters::*;

/// Number of thermistor channels, always acquired.
pub const THERMISTORS: usize = 6;

/// Index of the reference probe channel.
pub const REFERENCE: usize = THERMISTORS;

/// Number of frame slots.
pub const SLOTS: usize = THERMISTORS + 1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Channel {
    pub index: usize,
    pub positive: Mux,
    pub negative: Mux,
    pub is_reference: bool,
    pub conversion: Conversion,
}

impl Channel {
    const fn thermistor(index: usize, positive: Mux) -> Self {
        Self {
            index,
            positive,
            negative: Mux::Ain9,
            is_reference: false,
            conversion: Conversion::Beta(Beta {
                t0: THERMISTOR_T0,
                inv_beta: THERMISTOR_INV_BETA,
                r0: THERMISTOR_R0,
            }),
        }
    }

    /// Replace the conversion strategy, e.g. with a calibration table.
    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn input_mux(&self) -> InputMux {
        InputMux::default()
            .with_positive(self.positive)
            .with_negative(self.negative)
    }
}

pub const CHANNELS: [Channel; SLOTS] = [
    Channel::thermistor(0, Mux::Ain0),
    Channel::thermistor(1, Mux::Ain2),
    Channel::thermistor(2, Mux::Ain6),
    Channel::thermistor(3, Mux::Ain4),
    Channel::thermistor(4, Mux::Ain8),
    Channel::thermistor(5, Mux::Ain10),
    Channel {
        index: REFERENCE,
        positive: Mux::Ain1,
        negative: Mux::Ain9,
        is_reference: true,
        conversion: Conversion::SteinhartHart(SteinhartHart {
            a: REFERENCE_A,
            b: REFERENCE_B,
            c: REFERENCE_C,
        }),
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_is_consistent() {
        for (i, channel) in CHANNELS.iter().enumerate() {
            assert_eq!(channel.index, i);
            assert_eq!(channel.is_reference, i == REFERENCE);
            assert_eq!(channel.negative, Mux::Ain9);
        }
        let muxes: [u8; SLOTS] =
            core::array::from_fn(|i| CHANNELS[i].input_mux().raw_value());
        assert_eq!(muxes, [0x09, 0x29, 0x69, 0x49, 0x89, 0xa9, 0x19]);
    }
}
