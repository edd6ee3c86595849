//! Slide temperature acquisition
//!
//! Six thermistors and an optional reference probe are sampled in turn through an ADS124S08.
//! Each cycle produces one telemetry record on the host serial link.
#![cfg_attr(not(test), no_std)]

pub mod acquisition;
pub mod adc;
pub mod calibration;
pub mod channel;
pub mod command;
pub mod convert;
pub mod design_parameters;
pub mod heartbeat;
pub mod host;
pub mod metadata;
pub mod sequencer;
pub mod telemetry;
pub mod testing;

#[cfg(target_os = "none")]
pub mod hardware;

/// Millisecond resolution time stamp of the control loop clock.
pub type Instant = fugit::TimerInstantU32<1000>;
