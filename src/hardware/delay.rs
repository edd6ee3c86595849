//! Basic blocking delay
//!
//! This module provides a basic asm-based blocking delay.
use embedded_hal::delay::DelayNs;

/// A basic delay implementation.
pub struct AsmDelay {
    frequency_mhz: u32,
}

impl AsmDelay {
    /// Create a new delay.
    ///
    /// # Args
    /// * `freq` - The CPU core frequency.
    pub fn new(freq: u32) -> AsmDelay {
        AsmDelay {
            frequency_mhz: freq / 1_000_000,
        }
    }
}

impl DelayNs for AsmDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay((self.frequency_mhz * (ns / 1_000)).max(1))
    }

    fn delay_us(&mut self, us: u32) {
        cortex_m::asm::delay(self.frequency_mhz * us)
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
