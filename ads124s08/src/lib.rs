//! TI ADS124S08 SPI driver
//!
//! Opcodes, the register map and bitfield views of the configuration registers used by the
//! slide temperature firmware. Conversion results are read with the STATUS byte and the
//! CRC-8 byte enabled (`SYS.SENDSTAT` and `SYS.CRC`).
#![no_std]

use arbitrary_int::u3;
use bitbybit::{bitenum, bitfield};
use embedded_hal::spi::{self, Operation, SpiDevice};
use num_enum::IntoPrimitive;

/// Command opcodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0x00,
    Wakeup = 0x02,
    PowerDown = 0x04,
    Reset = 0x06,
    Start = 0x08,
    Stop = 0x0a,
    SystemOffsetCal = 0x16,
    SystemGainCal = 0x17,
    SelfOffsetCal = 0x19,
    ReadData = 0x12,
}

const RREG: u8 = 0x20;
const WREG: u8 = 0x40;

/// Register addresses.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, strum::EnumIter,
)]
#[repr(u8)]
pub enum Register {
    Id = 0x00,
    Status = 0x01,
    InpMux = 0x02,
    Pga = 0x03,
    DataRate = 0x04,
    Ref = 0x05,
    IdacMag = 0x06,
    IdacMux = 0x07,
    VBias = 0x08,
    Sys = 0x09,
    OfCal0 = 0x0a,
    OfCal1 = 0x0b,
    OfCal2 = 0x0c,
    FsCal0 = 0x0d,
    FsCal1 = 0x0e,
    FsCal2 = 0x0f,
    GpioDat = 0x10,
    GpioCon = 0x11,
}

/// The value of `Id.DEV_ID` for the 12 channel, 24 bit part.
pub const DEVICE_ID: u8 = 0b000;

#[bitfield(u8, default = 0x80)]
#[derive(Debug, PartialEq)]
pub struct Status {
    /// Power-on reset flag. Set after a reset until cleared by a register write.
    #[bit(7, rw)]
    pub fl_por: bool,
    /// Device not ready (active high).
    #[bit(6, rw)]
    pub not_rdy: bool,
    #[bit(5, r)]
    pub fl_p_railp: bool,
    #[bit(4, r)]
    pub fl_p_railn: bool,
    #[bit(3, r)]
    pub fl_n_railp: bool,
    #[bit(2, r)]
    pub fl_n_railn: bool,
    #[bit(1, r)]
    pub fl_ref_l1: bool,
    #[bit(0, r)]
    pub fl_ref_l0: bool,
}

#[bitenum(u4, exhaustive = false)]
#[derive(Debug, PartialEq)]
pub enum Mux {
    Ain0 = 0,
    Ain1 = 1,
    Ain2 = 2,
    Ain3 = 3,
    Ain4 = 4,
    Ain5 = 5,
    Ain6 = 6,
    Ain7 = 7,
    Ain8 = 8,
    Ain9 = 9,
    Ain10 = 10,
    Ain11 = 11,
    AinCom = 12,
}

#[bitfield(u8, default = 0x01)]
#[derive(Debug, PartialEq)]
pub struct InputMux {
    #[bits(4..=7, rw)]
    pub positive: Option<Mux>,
    #[bits(0..=3, rw)]
    pub negative: Option<Mux>,
}

#[bitenum(u2, exhaustive = false)]
#[derive(Debug, PartialEq)]
pub enum PgaMode {
    Bypass = 0,
    Enabled = 1,
}

#[bitenum(u3, exhaustive = true)]
#[derive(Debug, PartialEq)]
pub enum Gain {
    G1 = 0,
    G2 = 1,
    G4 = 2,
    G8 = 3,
    G16 = 4,
    G32 = 5,
    G64 = 6,
    G128 = 7,
}

#[bitfield(u8, default = 0x00)]
#[derive(Debug, PartialEq)]
pub struct Pga {
    /// Conversion start delay in multiples of 14 modulator clock periods.
    #[bits(5..=7, rw)]
    pub delay: u3,
    #[bits(3..=4, rw)]
    pub mode: Option<PgaMode>,
    #[bits(0..=2, rw)]
    pub gain: Gain,
}

#[bitenum(u4, exhaustive = false)]
#[derive(Debug, PartialEq)]
pub enum Rate {
    Sps2_5 = 0,
    Sps5 = 1,
    Sps10 = 2,
    Sps16_6 = 3,
    Sps20 = 4,
    Sps50 = 5,
    Sps60 = 6,
    Sps100 = 7,
    Sps200 = 8,
    Sps400 = 9,
    Sps800 = 10,
    Sps1000 = 11,
    Sps2000 = 12,
    Sps4000 = 13,
}

#[bitfield(u8, default = 0x14)]
#[derive(Debug, PartialEq)]
pub struct DataRate {
    #[bit(7, rw)]
    pub global_chop: bool,
    #[bit(6, rw)]
    pub external_clock: bool,
    /// Single-shot conversion mode (continuous when cleared).
    #[bit(5, rw)]
    pub single_shot: bool,
    /// Low-latency filter (sinc3 when cleared).
    #[bit(4, rw)]
    pub low_latency: bool,
    #[bits(0..=3, rw)]
    pub rate: Option<Rate>,
}

#[bitenum(u2, exhaustive = false)]
#[derive(Debug, PartialEq)]
pub enum RefSel {
    Ref0 = 0,
    Ref1 = 1,
    Internal = 2,
}

#[bitenum(u2, exhaustive = false)]
#[derive(Debug, PartialEq)]
pub enum RefCon {
    Off = 0,
    OnPowerDown = 1,
    AlwaysOn = 2,
}

#[bitfield(u8, default = 0x10)]
#[derive(Debug, PartialEq)]
pub struct Reference {
    #[bit(5, rw)]
    pub not_refp_buf: bool,
    #[bit(4, rw)]
    pub not_refn_buf: bool,
    #[bits(2..=3, rw)]
    pub select: Option<RefSel>,
    #[bits(0..=1, rw)]
    pub internal: Option<RefCon>,
}

#[bitfield(u8, default = 0x10)]
#[derive(Debug, PartialEq)]
pub struct Sys {
    #[bits(5..=7, rw)]
    pub monitor: u3,
    #[bit(2, rw)]
    pub timeout: bool,
    #[bit(1, rw)]
    pub crc: bool,
    #[bit(0, rw)]
    pub send_status: bool,
}

/// IDAC multiplexer setting that disconnects both excitation current sources.
pub const IDACMUX_OFF: u8 = 0xff;
/// IDAC magnitude setting that disables both excitation current sources.
pub const IDACMAG_OFF: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("CRC mismatch: computed {computed:#04x}, received {received:#04x}")]
    Crc { computed: u8, received: u8 },
    #[error("SPI")]
    Bus(spi::ErrorKind),
}

impl<E: spi::Error> From<E> for Error {
    fn from(value: E) -> Self {
        Self::Bus(value.kind())
    }
}

/// A conversion result read with status and CRC.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Conversion {
    /// Sign extended 24 bit two's complement code.
    pub code: i32,
    pub status: Status,
    pub crc: u8,
}

/// CRC-8-ATM (x^8 + x^2 + x + 1), seeded with 0xff.
pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(0xff, |mut crc, &byte| {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x07
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// Sign-extend a big endian 24 bit code.
pub fn code_from_be_bytes(data: [u8; 3]) -> i32 {
    i32::from_be_bytes([data[0], data[1], data[2], 0]) >> 8
}

#[derive(Clone, Debug)]
pub struct Ads124s08<B> {
    bus: B,
}

impl<B: SpiDevice<u8>> Ads124s08<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn release(self) -> B {
        self.bus
    }

    pub fn send_command(&mut self, opcode: Opcode) -> Result<(), Error> {
        Ok(self.bus.write(&[opcode.into()])?)
    }

    pub fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Error> {
        let addr: u8 = register.into();
        Ok(self.bus.write(&[WREG | addr, 0, value])?)
    }

    pub fn read_register(&mut self, register: Register) -> Result<u8, Error> {
        let addr: u8 = register.into();
        let mut value = [0];
        self.bus.transaction(&mut [
            Operation::Write(&[RREG | addr, 0]),
            Operation::Read(&mut value),
        ])?;
        Ok(value[0])
    }

    /// Read the latest conversion result.
    ///
    /// Requires `SYS.SENDSTAT` and `SYS.CRC` to be set.
    pub fn read_conversion(&mut self) -> Result<Conversion, Error> {
        let mut frame = [0; 5];
        self.bus.transaction(&mut [
            Operation::Write(&[Opcode::ReadData.into()]),
            Operation::Read(&mut frame),
        ])?;
        let computed = crc8(&frame[..4]);
        if computed != frame[4] {
            return Err(Error::Crc {
                computed,
                received: frame[4],
            });
        }
        Ok(Conversion {
            code: code_from_be_bytes([frame[1], frame[2], frame[3]]),
            status: Status::new_with_raw_value(frame[0]),
            crc: frame[4],
        })
    }
}
