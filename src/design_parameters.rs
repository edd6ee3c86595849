use ads124s08::{Gain, PgaMode, Rate};
use fugit::MillisDurationU32;

/// The excitation voltage across the divider and the ADC reference voltage, in volts.
pub const SUPPLY_VOLTS: f32 = 2.5;

/// The fixed resistor on the high side of each thermistor divider, in ohms.
pub const DIVIDER_OHMS: f32 = 10_000.0;

/// The positive full scale code of the 24 bit ADC at unity gain.
pub const FULL_SCALE: f32 = (1u32 << 23) as f32;

/// PGA setting written for every channel. `FULL_SCALE` is only valid for unity gain.
pub const PGA_MODE: PgaMode = PgaMode::Bypass;
pub const PGA_GAIN: Gain = Gain::G1;

/// Output data rate used for every single-shot conversion.
pub const DATA_RATE: Rate = Rate::Sps20;

/// Time the analog front end needs after a reconfiguration before the conversion result is
/// trusted. This is a hardware floor given by the data rate and filter setting.
pub const SETTLE_DELAY: MillisDurationU32 = MillisDurationU32::millis(50);

/// Pause after stopping a conversion before the next channel is configured.
pub const CHANNEL_GAP: MillisDurationU32 = MillisDurationU32::millis(2);

/// Wait after the RESET opcode before the device registers can be read.
pub const RESET_DELAY: MillisDurationU32 = MillisDurationU32::millis(10);

/// Interval between device probes while the ADC is not detected at startup.
pub const PROBE_RETRY_DELAY: MillisDurationU32 = MillisDurationU32::millis(500);

/// Minimum spacing of the liveness notices.
pub const HEARTBEAT_PERIOD: MillisDurationU32 = MillisDurationU32::millis(5000);

// Thermistor (TDK, B25/100 = 3453 K) inverse-Beta parameters.
pub const THERMISTOR_T0: f32 = 298.15;
pub const THERMISTOR_INV_BETA: f32 = 2.896032436e-4;
pub const THERMISTOR_R0: f32 = 10_000.0;

// Reference probe Steinhart-Hart coefficients.
pub const REFERENCE_A: f32 = 1.032e-3;
pub const REFERENCE_B: f32 = 2.387e-4;
pub const REFERENCE_C: f32 = 1.580e-7;

/// Capacity of the host input line buffer in bytes.
pub const LINE_CAPACITY: usize = 64;

/// Capacity of one serialized outbound record in bytes.
pub const RECORD_CAPACITY: usize = 256;
