//! Channel sequencing state machine
//!
//! Exactly one conversion is in flight at any time. The sequencer tracks which channel that
//! is and what the acquisition loop has to do next with it.
use core::sync::atomic::{AtomicBool, Ordering};

use crate::channel::{REFERENCE, THERMISTORS};

/// Set from the conversion-ready interrupt, taken by the acquisition loop.
static CONVERSION_READY: AtomicBool = AtomicBool::new(false);

/// Signal that the ADC finished a conversion.
///
/// # Note
/// This is the only operation that may be called from interrupt context.
pub fn on_conversion_ready() {
    CONVERSION_READY.store(true, Ordering::Release);
}

/// Take and clear the conversion-ready flag.
pub fn take_conversion_ready() -> bool {
    CONVERSION_READY.swap(false, Ordering::AcqRel)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The current channel needs to be configured and started.
    Configuring,
    /// A conversion is running.
    AwaitingReady,
    /// The conversion result is available.
    Reading,
    /// The result was stored; stop the converter and select the next channel.
    Advancing,
}

#[derive(Clone, Debug)]
pub struct Sequencer {
    index: usize,
    phase: Phase,
    reference_enabled: bool,
    reference_in_cycle: bool,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Sequencer {
    pub fn new(reference_enabled: bool) -> Self {
        Self {
            index: 0,
            phase: Phase::Configuring,
            reference_enabled,
            reference_in_cycle: false,
        }
    }

    /// The channel currently configured or being read.
    pub fn current(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn reference_enabled(&self) -> bool {
        self.reference_enabled
    }

    /// Request the reference channel to be included from the next cycle on.
    pub fn set_reference_enabled(&mut self, enabled: bool) {
        self.reference_enabled = enabled;
    }

    /// Whether the cycle in progress includes the reference channel.
    pub fn reference_in_cycle(&self) -> bool {
        self.reference_in_cycle
    }

    /// Number of channels in the cycle in progress.
    pub fn active_count(&self) -> usize {
        if self.reference_in_cycle {
            THERMISTORS + 1
        } else {
            THERMISTORS
        }
    }

    /// Select the next channel.
    ///
    /// The reference flag is checked when passing the last thermistor.
    ///
    /// # Returns
    /// True if the cycle wrapped back to the first channel.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 == THERMISTORS {
            self.reference_in_cycle = self.reference_enabled;
        }
        self.index = (self.index + 1) % self.active_count();
        if self.index == 0 {
            self.reference_in_cycle = false;
        }
        self.index == 0
    }

    pub fn is_reference(&self) -> bool {
        self.index == REFERENCE
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cycle(sequencer: &mut Sequencer) -> heapless::Vec<usize, 8> {
        let mut visited = heapless::Vec::new();
        loop {
            visited.push(sequencer.current()).unwrap();
            if sequencer.advance() {
                return visited;
            }
        }
    }

    #[test]
    fn without_reference() {
        let mut sequencer = Sequencer::new(false);
        for _ in 0..3 {
            assert_eq!(cycle(&mut sequencer), [0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn with_reference() {
        let mut sequencer = Sequencer::new(true);
        assert_eq!(cycle(&mut sequencer), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(cycle(&mut sequencer), [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn flag_checked_at_last_thermistor() {
        let mut sequencer = Sequencer::new(false);
        for _ in 0..3 {
            sequencer.advance();
        }
        // Enabled mid cycle, before passing channel 5
        sequencer.set_reference_enabled(true);
        assert_eq!(cycle(&mut sequencer), [3, 4, 5, 6]);

        for _ in 0..6 {
            sequencer.advance();
        }
        assert!(sequencer.is_reference());
        assert!(sequencer.reference_in_cycle());
        // Disabling while the reference is in flight completes the cycle
        sequencer.set_reference_enabled(false);
        assert!(sequencer.advance());
        assert_eq!(cycle(&mut sequencer), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn interrupt_flag() {
        assert!(!take_conversion_ready());
        on_conversion_ready();
        on_conversion_ready();
        assert!(take_conversion_ready());
        assert!(!take_conversion_ready());
    }
}
