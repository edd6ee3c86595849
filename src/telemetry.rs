use serde::Serialize;

use crate::channel::{REFERENCE, SLOTS};
use crate::convert::ConversionError;

/// The state of one channel within the cycle in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Slot {
    /// Not yet read in this cycle.
    #[default]
    Pending,
    /// Temperature in degrees Celsius.
    Valid(f32),
    Invalid(ConversionError),
}

impl From<Result<f32, ConversionError>> for Slot {
    fn from(result: Result<f32, ConversionError>) -> Self {
        match result {
            Ok(celsius) => Self::Valid(celsius),
            Err(error) => Self::Invalid(error),
        }
    }
}

/// The telemetry buffer accumulates the channel temperatures of the cycle in progress.
#[derive(Clone, Debug, Default)]
pub struct TelemetryBuffer {
    slots: [Slot; SLOTS],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Channel {0} not acquired")]
pub struct Incomplete(pub usize);

/// The telemetry record reported to the host once per cycle.
///
/// # Note
/// Invalid readings are reported as `null`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub data: &'static str,
    pub temps: [Option<f32>; SLOTS],
}

impl TelemetryBuffer {
    pub fn store(&mut self, channel: usize, slot: Slot) {
        self.slots[channel] = slot;
    }

    pub fn slots(&self) -> &[Slot; SLOTS] {
        &self.slots
    }

    /// Convert the buffer into a telemetry record and start a new frame.
    ///
    /// # Args
    /// * `reference` - Whether the reference channel was acquired in this cycle. If it was not,
    ///   its slot reports 0.0.
    ///
    /// # Returns
    /// The finalized record or the first channel that was not acquired. The buffer is reset in
    /// both cases so that partial frames are never reported.
    pub fn finalize(
        &mut self,
        reference: bool,
    ) -> Result<Telemetry, Incomplete> {
        let slots = core::mem::take(&mut self.slots);
        let mut temps = [None; SLOTS];
        for (channel, (slot, temp)) in
            slots.iter().zip(temps.iter_mut()).enumerate()
        {
            *temp = match slot {
                _ if channel == REFERENCE && !reference => Some(0.0),
                Slot::Pending => return Err(Incomplete(channel)),
                Slot::Valid(celsius) => Some(*celsius),
                Slot::Invalid(_) => None,
            };
        }
        Ok(Telemetry {
            data: "thermistors",
            temps,
        })
    }
}

/// Severity of a host notice.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// A free form message to the host.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Notice<'a> {
    #[serde(rename = "type")]
    pub level: Level,
    pub message: &'a str,
}

impl<'a> Notice<'a> {
    pub fn info(message: &'a str) -> Self {
        Self {
            level: Level::Info,
            message,
        }
    }

    pub fn error(message: &'a str) -> Self {
        Self {
            level: Level::Error,
            message,
        }
    }
}
