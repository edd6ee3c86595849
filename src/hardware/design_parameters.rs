use fugit::MegahertzU32 as MegaHertz;

/// The system core clock.
pub const SYSCLK: MegaHertz = MegaHertz::MHz(400);

/// The ADS124S08 serial clock. The device allows up to 10 MHz.
pub const ADC_SCK: MegaHertz = MegaHertz::MHz(4);

/// Frequency of the control loop monotonic.
pub const MONOTONIC_FREQUENCY: u32 = 1_000;
