//! Host-side stand-ins for the ADC, the serial link and the delay provider.
use core::convert::Infallible;

use ads124s08::{code_from_be_bytes, Conversion, Opcode, Register, Status};
use heapless::{Deque, Vec};
use num_traits::float::Float;

use crate::adc::AdcDriver;
use crate::channel::{CHANNELS, SLOTS};
use crate::design_parameters::{DIVIDER_OHMS, FULL_SCALE};

pub fn isclose(a: f32, b: f32, rtol: f32, atol: f32) -> bool {
    Float::abs(a - b) <= Float::max(Float::abs(a), Float::abs(b)) * rtol + atol
}

const REGISTERS: usize = 18;
const RESET_VALUES: [u8; REGISTERS] = [
    0x00, 0x80, 0x01, 0x00, 0x14, 0x10, 0x00, 0xff, 0x00, 0x10, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x40, 0x00, 0x00,
];

/// A simulated ADS124S08 with a thermistor divider on each channel.
#[derive(Clone, Debug)]
pub struct SimulatedAdc {
    registers: [u8; REGISTERS],
    codes: [i32; SLOTS],
    commands: Vec<Opcode, 32>,
    converting: bool,
    absent_probes: u32,
    failing_reads: u32,
    failing_status_writes: u32,
}

impl Default for SimulatedAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAdc {
    /// All channels at the divider midpoint (10 kOhm).
    pub fn new() -> Self {
        Self {
            registers: RESET_VALUES,
            codes: [1 << 22; SLOTS],
            commands: Vec::new(),
            converting: false,
            absent_probes: 0,
            failing_reads: 0,
            failing_status_writes: 0,
        }
    }

    /// Report a code for the channel's input pair.
    pub fn set_code(&mut self, channel: usize, code: i32) {
        self.codes[channel] = code;
    }

    /// Connect a sensor of the given resistance to a channel.
    pub fn set_resistance(&mut self, channel: usize, ohms: f32) {
        let code = FULL_SCALE * ohms / (ohms + DIVIDER_OHMS);
        self.set_code(channel, (code as i32).min((1 << 23) - 1));
    }

    /// The device does not answer the next `count` resets.
    pub fn absent_for(&mut self, count: u32) {
        self.absent_probes = count;
    }

    /// The next `count` conversion reads fail their CRC check.
    pub fn corrupt_reads(&mut self, count: u32) {
        self.failing_reads = count;
    }

    /// Fail the next `count` writes to the STATUS register with a bus error.
    pub fn fail_status_writes(&mut self, count: u32) {
        self.failing_status_writes = count;
    }

    /// Simulate a brown-out: the device returns to its reset state.
    pub fn power_cycle(&mut self) {
        self.registers = RESET_VALUES;
    }

    pub fn register(&self, register: Register) -> u8 {
        self.registers[u8::from(register) as usize]
    }

    /// Opcodes received since the last call to `clear_commands()`.
    ///
    /// # Note
    /// Only the first 32 are kept.
    pub fn commands(&self) -> &[Opcode] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// True while a conversion was started and not stopped.
    pub fn converting(&self) -> bool {
        self.converting
    }

    fn selected_channel(&self) -> Option<usize> {
        let mux = self.register(Register::InpMux);
        CHANNELS
            .iter()
            .position(|channel| channel.input_mux().raw_value() == mux)
    }
}

impl AdcDriver for SimulatedAdc {
    type Error = ads124s08::Error;

    fn send_command(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        self.commands.push(opcode).ok();
        match opcode {
            Opcode::Reset => {
                self.registers = RESET_VALUES;
                self.converting = false;
            }
            Opcode::Start => self.converting = true,
            Opcode::Stop => self.converting = false,
            _ => {}
        }
        Ok(())
    }

    fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Self::Error> {
        let value = match register {
            Register::Id => return Ok(()),
            Register::Status if self.failing_status_writes > 0 => {
                self.failing_status_writes -= 1;
                return Err(ads124s08::Error::Bus(
                    embedded_hal::spi::ErrorKind::Other,
                ));
            }
            // Only the flag bits are writable.
            Register::Status => {
                (self.register(register) & 0x3f) | (value & 0xc0)
            }
            _ => value,
        };
        self.registers[u8::from(register) as usize] = value;
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u8, Self::Error> {
        if self.absent_probes > 0 {
            if register == Register::Status {
                self.absent_probes -= 1;
            }
            // Floating MISO
            return Ok(0xff);
        }
        Ok(self.register(register))
    }

    fn read_conversion(&mut self) -> Result<Conversion, Self::Error> {
        let code = self
            .selected_channel()
            .map(|channel| self.codes[channel])
            .unwrap_or(0);
        let bytes = code.to_be_bytes();
        let status = self.register(Register::Status) & !0x40;
        let frame = [status, bytes[1], bytes[2], bytes[3]];
        let crc = ads124s08::crc8(&frame);

        if self.failing_reads > 0 {
            self.failing_reads -= 1;
            return Err(ads124s08::Error::Crc {
                computed: crc,
                received: !crc,
            });
        }

        Ok(Conversion {
            code: code_from_be_bytes([frame[1], frame[2], frame[3]]),
            status: Status::new_with_raw_value(status),
            crc,
        })
    }
}

/// A delay provider that only accounts for the requested time.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimulatedDelay {
    pub elapsed_ns: u64,
}

impl SimulatedDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for SimulatedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}

/// An in-memory serial link.
#[derive(Clone, Debug)]
pub struct Loopback {
    input: Deque<u8, 1024>,
    output: Vec<u8, 8192>,
    write_ready: bool,
    free: Option<usize>,
}

impl Default for Loopback {
    fn default() -> Self {
        Self {
            input: Deque::new(),
            output: Vec::new(),
            write_ready: true,
            free: None,
        }
    }
}

impl Loopback {
    /// Queue bytes as if the host had sent them. Bytes beyond the capacity are lost.
    pub fn host_sends(&mut self, data: &str) {
        for &byte in data.as_bytes() {
            self.input.push_back(byte).ok();
        }
    }

    /// Everything written to the host so far.
    pub fn output(&self) -> &str {
        core::str::from_utf8(&self.output).unwrap_or_default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output().lines()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn set_write_ready(&mut self, ready: bool) {
        self.write_ready = ready;
    }

    /// Accept at most `free` more bytes, as a transmit buffer the host does not drain.
    /// `None` removes the limit.
    pub fn set_free(&mut self, free: Option<usize>) {
        self.free = free;
    }
}

impl embedded_io::ErrorType for Loopback {
    type Error = Infallible;
}

impl embedded_io::Read for Loopback {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.input.pop_front() {
                Some(byte) => *slot = byte,
                None => break,
            }
            count += 1;
        }
        Ok(count)
    }
}

impl embedded_io::ReadReady for Loopback {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.input.is_empty())
    }
}

impl embedded_io::Write for Loopback {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut count =
            buf.len().min(self.output.capacity() - self.output.len());
        if let Some(free) = self.free.as_mut() {
            count = count.min(*free);
            *free -= count;
        }
        self.output.extend_from_slice(&buf[..count]).ok();
        Ok(count)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_io::WriteReady for Loopback {
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.write_ready)
    }
}
