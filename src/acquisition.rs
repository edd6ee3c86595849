//! The acquisition loop
//!
//! `Acquisition` owns all mutable state of the firmware: the ADC, the host link, the channel
//! sequencer, the telemetry buffer and the heartbeat. The control loop calls
//! [Acquisition::service] continuously with the current time and the conversion-ready flag.
//!
//! Per channel the loop configures the input pair and starts a single-shot conversion, waits
//! for the settle time, waits for conversion-ready, reads and converts the result, stops the
//! converter and selects the next channel. When the cycle wraps the telemetry record is
//! emitted and pending host commands are interpreted.
use core::fmt::Write;

use ads124s08::{Opcode, Register, Status, DEVICE_ID};
use embedded_hal::delay::DelayNs;
use strum::IntoEnumIterator;

use crate::adc::AdcDriver;
use crate::channel::{Channel, SLOTS};
use crate::command::{Command, CommandError};
use crate::convert::{convert, AdcCode, ConversionError, ConversionResult};
use crate::design_parameters::{
    CHANNEL_GAP, PROBE_RETRY_DELAY, RESET_DELAY, SETTLE_DELAY,
};
use crate::heartbeat::Heartbeat;
use crate::host::HostLink;
use crate::sequencer::{Phase, Sequencer};
use crate::telemetry::{Notice, Slot, TelemetryBuffer};
use crate::Instant;

#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error<E: core::fmt::Debug> {
    #[error("ADC access failed: {0:?}")]
    Adc(E),
}

pub struct Acquisition<A, D, T> {
    adc: A,
    delay: D,
    host: HostLink<T>,
    channels: [Channel; SLOTS],
    sequencer: Sequencer,
    buffer: TelemetryBuffer,
    heartbeat: Heartbeat,
    last_status: Option<Status>,
}

impl<A, D, T> Acquisition<A, D, T>
where
    A: AdcDriver,
    D: DelayNs,
    T: embedded_io::Write
        + embedded_io::WriteReady
        + embedded_io::Read
        + embedded_io::ReadReady,
{
    /// Construct the acquisition state.
    ///
    /// # Args
    /// * `adc` - The converter driver.
    /// * `delay` - Blocking delay provider for settle and probe waits.
    /// * `interface` - The serial link to the host.
    /// * `channels` - The channel map.
    /// * `now` - The current time, used as the heartbeat epoch.
    pub fn new(
        adc: A,
        delay: D,
        interface: T,
        channels: [Channel; SLOTS],
        now: Instant,
    ) -> Self {
        Self {
            adc,
            delay,
            host: HostLink::new(interface),
            channels,
            sequencer: Sequencer::default(),
            buffer: TelemetryBuffer::default(),
            heartbeat: Heartbeat::new(now),
            last_status: None,
        }
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }

    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn interface(&self) -> &T {
        self.host.interface()
    }

    pub fn interface_mut(&mut self) -> &mut T {
        self.host.interface_mut()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Wait until the ADC is detected.
    ///
    /// The device is reset and probed until it reports its power-on status and the expected
    /// device ID. Each failed attempt is reported to the host. Once found the power-on reset
    /// flag is cleared.
    pub fn probe(&mut self) -> Result<(), Error<A::Error>> {
        loop {
            match self.detect() {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => log::warn!("ADC probe failed: {e:?}"),
            }
            self.host.send(&Notice::error("ADC 1 not found, retrying."));
            self.delay.delay_ms(PROBE_RETRY_DELAY.to_millis());
        }

        log::info!("ADC found");
        self.host.send(&Notice::info("ADC 1 found"));
        self.adc
            .write_register(Register::Status, 0x00)
            .map_err(Error::Adc)?;
        self.last_status = None;
        self.sequencer.set_phase(Phase::Configuring);
        Ok(())
    }

    fn detect(&mut self) -> Result<bool, A::Error> {
        self.adc.send_command(Opcode::Reset)?;
        self.delay.delay_ms(RESET_DELAY.to_millis());

        let status = self.adc.read_register(Register::Status)?;
        if status != Status::default().raw_value() {
            log::debug!("Unexpected status after reset: {status:#04x}");
            return Ok(false);
        }

        let id = self.adc.read_register(Register::Id)? & 0x07;
        if id != DEVICE_ID {
            log::warn!("Unexpected device ID: {id:#04x}");
            return Ok(false);
        }
        Ok(true)
    }

    /// Advance acquisition as far as possible without waiting for the ADC.
    ///
    /// # Args
    /// * `now` - The current time.
    /// * `ready` - Whether a conversion-ready event occurred since the last call.
    ///
    /// # Note
    /// On an error the channel in progress is reconfigured on the next call.
    pub fn service(
        &mut self,
        now: Instant,
        mut ready: bool,
    ) -> Result<(), Error<A::Error>> {
        self.host.flush();
        if self.heartbeat.poll(now) {
            self.host.send(&Notice::info(Heartbeat::MESSAGE));
        }

        loop {
            match self.sequencer.phase() {
                Phase::Configuring => {
                    let channel = self.channels[self.sequencer.current()];
                    self.adc
                        .configure_and_start(&channel)
                        .map_err(Error::Adc)?;
                    self.delay.delay_ms(SETTLE_DELAY.to_millis());
                    // Any pending event predates this conversion.
                    self.sequencer.set_phase(Phase::AwaitingReady);
                    return Ok(());
                }
                Phase::AwaitingReady => {
                    if !core::mem::take(&mut ready) {
                        return Ok(());
                    }
                    self.sequencer.set_phase(Phase::Reading);
                }
                Phase::Reading => {
                    let index = self.sequencer.current();
                    let conversion = match self.adc.read_conversion() {
                        Ok(conversion) => conversion,
                        Err(e) => {
                            self.sequencer.set_phase(Phase::Configuring);
                            return Err(Error::Adc(e));
                        }
                    };
                    self.check_status(conversion.status)?;

                    let result = self.convert(index, AdcCode(conversion.code));
                    if let Err(e) = result {
                        log::debug!("Channel {index}: {e}");
                    }
                    self.buffer.store(
                        index,
                        Slot::from(result.map(|r| r.temperature_c)),
                    );
                    self.sequencer.set_phase(Phase::Advancing);
                }
                Phase::Advancing => {
                    self.adc.send_command(Opcode::Stop).map_err(Error::Adc)?;
                    self.delay.delay_ms(CHANNEL_GAP.to_millis());

                    let reference = self.sequencer.reference_in_cycle();
                    if self.sequencer.advance() {
                        self.complete_cycle(reference);
                    }
                    self.sequencer.set_phase(Phase::Configuring);
                }
            }
        }
    }

    fn convert(
        &self,
        channel: usize,
        raw_code: AdcCode,
    ) -> Result<ConversionResult, ConversionError> {
        let (resistance_ohms, temperature_c) =
            convert(raw_code, &self.channels[channel].conversion)?;
        Ok(ConversionResult {
            channel,
            raw_code,
            resistance_ohms,
            temperature_c,
        })
    }

    /// Report status changes and recover from a power-on reset of the ADC.
    fn check_status(&mut self, status: Status) -> Result<(), Error<A::Error>> {
        if self.last_status == Some(status) {
            return Ok(());
        }
        log::info!(
            "ADC status {:#010b} (POR: {}, nRDY: {})",
            status.raw_value(),
            status.fl_por(),
            status.not_rdy()
        );

        if status.fl_por() && !status.not_rdy() {
            // Not recorded until cleared so that a failed clear is retried.
            let cleared = self.adc.clear_por(status).map_err(Error::Adc)?;
            log::warn!(
                "ADC power-on reset cleared: status {:#010b}",
                cleared.raw_value()
            );
            self.last_status = Some(cleared);
        } else {
            self.last_status = Some(status);
        }
        Ok(())
    }

    fn complete_cycle(&mut self, reference: bool) {
        match self.buffer.finalize(reference) {
            Ok(telemetry) => self.host.send(&telemetry),
            Err(e) => log::warn!("Dropping frame: {e}"),
        }

        if let Err(e) = self.host.receive() {
            log::warn!("Host input failed: {e:?}");
        }

        let sequencer = &mut self.sequencer;
        let adc = &mut self.adc;
        let complete = self.host.drain_lines(|host, line| {
            match Command::from_bytes(line) {
                Ok(Some(Command::Reference(enabled))) => {
                    sequencer.set_reference_enabled(enabled);
                    log::info!("Reference channel enabled: {enabled}");
                    host.send(&Notice::info(if enabled {
                        "Ref On"
                    } else {
                        "Ref Off"
                    }));
                }
                Ok(Some(Command::DumpRegisters)) => {
                    dump_registers(&mut *adc, host)
                }
                Ok(None) => {}
                Err(e) => host.send(&Notice::error(e.message())),
            }
        });
        if !complete {
            self.host
                .send(&Notice::error(CommandError::Overflow.message()));
        }
    }
}

fn dump_registers<A, T>(adc: &mut A, host: &mut HostLink<T>)
where
    A: AdcDriver,
    T: embedded_io::Write
        + embedded_io::WriteReady
        + embedded_io::Read
        + embedded_io::ReadReady,
{
    for register in Register::iter() {
        let mut message: heapless::String<32> = heapless::String::new();
        match adc.read_register(register) {
            Ok(value) => {
                write!(message, "{register:?} = {value:#04x}").ok();
                host.send(&Notice::info(&message));
            }
            Err(e) => {
                log::warn!("Reading {register:?} failed: {e:?}");
                write!(message, "{register:?} unreadable").ok();
                host.send(&Notice::error(&message));
            }
        }
    }
}
