use crate::calibration::CalibrationTable;
use crate::design_parameters::{
    DIVIDER_OHMS, FULL_SCALE, PGA_GAIN, PGA_MODE, SUPPLY_VOLTS,
};
use num_traits::float::Float;

// The code to voltage scaling below assumes the PGA is bypassed (unity gain).
const _: () = assert!(
    matches!(PGA_MODE, ads124s08::PgaMode::Bypass)
        && matches!(PGA_GAIN, ads124s08::Gain::G1),
    "ADC code scaling requires unity PGA gain"
);

/// Offset between the Kelvin and Celsius scales.
pub const ZERO_CELSIUS: f32 = 273.15;

/// A type representing a signed 24 bit ADC conversion result.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AdcCode(pub i32);

impl AdcCode {
    /// The converter saturates at positive full scale.
    pub const MAX: Self = Self((1 << 23) - 1);
    pub const VOLT_PER_LSB: f32 = SUPPLY_VOLTS / FULL_SCALE;
    pub const LSB_PER_VOLT: f32 = 1. / Self::VOLT_PER_LSB;
}

impl From<i32> for AdcCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<AdcCode> for f32 {
    /// Convert a raw ADC code to the voltage across the sensor.
    fn from(code: AdcCode) -> f32 {
        code.0 as f32 * AdcCode::VOLT_PER_LSB
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The sensor voltage reached the excitation voltage.
    #[error("Open circuit")]
    OpenCircuit,
    /// The sensor voltage is zero or negative.
    #[error("Short circuit")]
    ShortCircuit,
    /// The resistance is outside the domain of the conversion model.
    #[error("Resistance outside model domain")]
    Domain,
}

/// Sensor resistance from the voltage across the low side of the divider.
pub fn resistance(volts: f32) -> Result<f32, ConversionError> {
    if !(volts < SUPPLY_VOLTS) {
        return Err(ConversionError::OpenCircuit);
    }
    if volts <= 0.0 {
        return Err(ConversionError::ShortCircuit);
    }
    Ok(DIVIDER_OHMS / (SUPPLY_VOLTS / volts - 1.0))
}

/// Inverse-Beta NTC model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Beta {
    /// Nominal temperature in Kelvin.
    pub t0: f32,
    /// Reciprocal of the Beta coefficient (1/K).
    pub inv_beta: f32,
    /// Resistance at `t0` in ohms.
    pub r0: f32,
}

impl Beta {
    /// Temperature in degrees Celsius.
    pub fn temperature(&self, ohms: f32) -> f32 {
        1.0 / (1.0 / self.t0 + self.inv_beta * Float::ln(ohms / self.r0))
            - ZERO_CELSIUS
    }
}

/// Steinhart-Hart equation `1/T = a + b ln R + c (ln R)^3`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteinhartHart {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SteinhartHart {
    /// Temperature in degrees Celsius.
    pub fn temperature(&self, ohms: f32) -> f32 {
        let ln_r = Float::ln(ohms);
        1.0 / (self.a + self.b * ln_r + self.c * ln_r * ln_r * ln_r)
            - ZERO_CELSIUS
    }
}

/// Resistance to temperature strategy of a channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Conversion {
    Beta(Beta),
    SteinhartHart(SteinhartHart),
    Table(CalibrationTable),
}

impl Conversion {
    /// Temperature in degrees Celsius for a sensor resistance.
    pub fn temperature(&self, ohms: f32) -> Result<f32, ConversionError> {
        let celsius = match self {
            Self::Beta(beta) => beta.temperature(ohms),
            Self::SteinhartHart(sh) => sh.temperature(ohms),
            Self::Table(table) => table.interpolate(ohms),
        };
        if celsius.is_finite() {
            Ok(celsius)
        } else {
            Err(ConversionError::Domain)
        }
    }
}

/// One successful reading of a channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConversionResult {
    pub channel: usize,
    pub raw_code: AdcCode,
    pub resistance_ohms: f32,
    pub temperature_c: f32,
}

/// Convert a raw code to a temperature.
///
/// # Args
/// * `code` - The raw conversion result.
/// * `conversion` - The channel's resistance to temperature strategy.
///
/// # Returns
/// The resistance in ohms and the temperature in degrees Celsius.
pub fn convert(
    code: AdcCode,
    conversion: &Conversion,
) -> Result<(f32, f32), ConversionError> {
    if code.0 >= AdcCode::MAX.0 {
        return Err(ConversionError::OpenCircuit);
    }
    let ohms = resistance(code.into())?;
    Ok((ohms, conversion.temperature(ohms)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::calibration::PT100;
    use crate::design_parameters::*;
    use crate::testing::isclose;

    const THERMISTOR: Conversion = Conversion::Beta(Beta {
        t0: THERMISTOR_T0,
        inv_beta: THERMISTOR_INV_BETA,
        r0: THERMISTOR_R0,
    });

    #[test]
    fn half_scale_is_nominal() {
        let code = AdcCode(4194304);
        let volts: f32 = code.into();
        assert!(isclose(volts, 1.25, 0.0, 1e-6));
        let (ohms, celsius) = convert(code, &THERMISTOR).unwrap();
        assert!(isclose(ohms, 10_000.0, 1e-5, 0.0));
        assert!(isclose(celsius, 25.0, 0.0, 1e-3));
    }

    #[test]
    fn open_and_short() {
        assert_eq!(
            convert(AdcCode(1 << 23), &THERMISTOR),
            Err(ConversionError::OpenCircuit)
        );
        assert_eq!(
            convert(AdcCode::MAX, &THERMISTOR),
            Err(ConversionError::OpenCircuit)
        );
        assert_eq!(
            convert(AdcCode(0), &THERMISTOR),
            Err(ConversionError::ShortCircuit)
        );
        assert_eq!(
            convert(AdcCode(-1000), &THERMISTOR),
            Err(ConversionError::ShortCircuit)
        );
        assert_eq!(resistance(f32::NAN), Err(ConversionError::OpenCircuit));
    }

    #[test]
    fn thermistor_decreases_with_code() {
        let mut last = f32::INFINITY;
        // About 150 C down to -43 C.
        for code in ((1 << 18)..(1 << 23) - (1 << 18)).step_by(4099) {
            let (_, celsius) = convert(AdcCode(code), &THERMISTOR).unwrap();
            assert!(celsius < last, "{code}: {celsius} >= {last}");
            last = celsius;
        }
    }

    #[test]
    fn steinhart_hart_reference() {
        let sh = SteinhartHart {
            a: REFERENCE_A,
            b: REFERENCE_B,
            c: REFERENCE_C,
        };
        // 10 kOhm is close to 25 C for this coefficient set.
        let celsius = sh.temperature(10_000.0);
        assert!(isclose(celsius, 25.0, 0.0, 0.5), "{celsius}");
        assert!(sh.temperature(5_000.0) > celsius);
    }

    #[test]
    fn table_lookup() {
        let table = Conversion::Table(CalibrationTable::new(&PT100).unwrap());
        assert_eq!(table.temperature(100.0), Ok(0.0));
        assert_eq!(table.temperature(10_000.0), Ok(500.0));
    }

    #[test]
    fn domain_error() {
        let beta = Beta {
            t0: THERMISTOR_T0,
            inv_beta: THERMISTOR_INV_BETA,
            r0: THERMISTOR_R0,
        };
        assert_eq!(
            Conversion::Beta(beta).temperature(-1.0),
            Err(ConversionError::Domain)
        );
    }
}
