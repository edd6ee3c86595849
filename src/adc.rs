//! Typed access to the ADC used by the acquisition loop.
use ads124s08::{
    Ads124s08, Conversion, DataRate, Opcode, Pga, RefCon, RefSel, Reference,
    Register, Status, Sys, IDACMAG_OFF, IDACMUX_OFF,
};
use embedded_hal::spi::SpiDevice;

use crate::channel::Channel;
use crate::design_parameters::{DATA_RATE, PGA_GAIN, PGA_MODE};

/// The ADC operations the acquisition loop depends on.
pub trait AdcDriver {
    type Error: core::fmt::Debug;

    fn send_command(&mut self, opcode: Opcode) -> Result<(), Self::Error>;

    fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Self::Error>;

    fn read_register(&mut self, register: Register) -> Result<u8, Self::Error>;

    /// Read the latest conversion word along with the status and CRC bytes.
    fn read_conversion(&mut self) -> Result<Conversion, Self::Error>;

    /// Reconfigure the converter for a channel and start a single-shot conversion.
    ///
    /// The caller is responsible for waiting for the settle time afterwards.
    fn configure_and_start(
        &mut self,
        channel: &Channel,
    ) -> Result<(), Self::Error> {
        self.send_command(Opcode::Wakeup)?;
        self.write_register(Register::InpMux, channel.input_mux().raw_value())?;
        self.write_register(Register::Pga, pga().raw_value())?;
        self.write_register(Register::Ref, reference().raw_value())?;
        self.write_register(Register::IdacMux, IDACMUX_OFF)?;
        self.write_register(Register::IdacMag, IDACMAG_OFF)?;
        self.write_register(Register::Sys, sys().raw_value())?;
        self.write_register(Register::DataRate, data_rate().raw_value())?;
        self.send_command(Opcode::Start)
    }

    /// Clear the power-on reset flag and read back the status.
    fn clear_por(&mut self, status: Status) -> Result<Status, Self::Error> {
        self.write_register(
            Register::Status,
            status.with_fl_por(false).raw_value(),
        )?;
        Ok(Status::new_with_raw_value(
            self.read_register(Register::Status)?,
        ))
    }
}

pub fn pga() -> Pga {
    Pga::default().with_mode(PGA_MODE).with_gain(PGA_GAIN)
}

/// Internal 2.5 V reference always on, conversions referenced to REFP0/REFN0.
pub fn reference() -> Reference {
    Reference::new_with_raw_value(0)
        .with_select(RefSel::Ref0)
        .with_internal(RefCon::AlwaysOn)
}

/// Status byte and CRC appended to every conversion read.
pub fn sys() -> Sys {
    Sys::default().with_send_status(true).with_crc(true)
}

pub fn data_rate() -> DataRate {
    DataRate::default()
        .with_single_shot(true)
        .with_low_latency(true)
        .with_rate(DATA_RATE)
}

impl<B: SpiDevice<u8>> AdcDriver for Ads124s08<B> {
    type Error = ads124s08::Error;

    fn send_command(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ads124s08::send_command(self, opcode)
    }

    fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Self::Error> {
        Ads124s08::write_register(self, register, value)
    }

    fn read_register(&mut self, register: Register) -> Result<u8, Self::Error> {
        Ads124s08::read_register(self, register)
    }

    fn read_conversion(&mut self) -> Result<Conversion, Self::Error> {
        Ads124s08::read_conversion(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::channel::CHANNELS;
    use crate::testing::SimulatedAdc;

    #[test]
    fn register_values() {
        assert_eq!(pga().raw_value(), 0x00);
        assert_eq!(pga().mode(), Ok(PGA_MODE));
        assert_eq!(pga().gain(), PGA_GAIN);
        assert_eq!(reference().raw_value(), 0x02);
        assert_eq!(sys().raw_value(), 0x13);
        assert_eq!(data_rate().raw_value(), 0x34);
    }

    #[test]
    fn configure_sequence() {
        let mut adc = SimulatedAdc::new();
        adc.configure_and_start(&CHANNELS[5]).unwrap();
        assert_eq!(adc.commands(), &[Opcode::Wakeup, Opcode::Start]);
        assert_eq!(adc.register(Register::InpMux), 0xa9);
        assert_eq!(adc.register(Register::Pga), 0x00);
        assert_eq!(adc.register(Register::Ref), 0x02);
        assert_eq!(adc.register(Register::IdacMux), 0xff);
        assert_eq!(adc.register(Register::IdacMag), 0x00);
        assert_eq!(adc.register(Register::DataRate), 0x34);
        assert!(adc.converting());
    }

    #[test]
    fn por_cleared() {
        let mut adc = SimulatedAdc::new();
        let status = Status::new_with_raw_value(adc.register(Register::Status));
        assert!(status.fl_por());
        let status = adc.clear_por(status).unwrap();
        assert!(!status.fl_por());
        assert_eq!(adc.register(Register::Status), 0x00);
    }
}
