//! Module for all hardware-specific setup of the acquisition board
pub use stm32h7xx_hal as hal;

use embedded_hal_compat::{markers::ForwardOutputPin, Forward};

pub mod delay;
pub mod design_parameters;
pub mod setup;
pub mod usb;

pub use usb::UsbSerial;

rtic_monotonics::systick_monotonic!(Systick, 1_000);

pub type UsbBus = hal::usb_hs::UsbBus<hal::usb_hs::USB2>;

// Type alias for the SPI bus shared with nothing but the ADC.
pub type Spi = Forward<hal::spi::Spi<hal::stm32::SPI1, hal::spi::Enabled>>;

// Type alias for the ADC chip select (active low).
pub type ChipSelect =
    Forward<hal::gpio::ErasedPin<hal::gpio::Output>, ForwardOutputPin>;

pub type Adc = ads124s08::Ads124s08<
    embedded_hal_bus::spi::ExclusiveDevice<
        Spi,
        ChipSelect,
        embedded_hal_bus::spi::NoDelay,
    >,
>;

// Type alias for the ADC nDRDY output (falling edge on conversion complete).
pub type DataReady = hal::gpio::PB0<hal::gpio::Input>;

#[inline(never)]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    use core::{
        fmt::Write,
        sync::atomic::{AtomicBool, Ordering},
    };
    use cortex_m::asm;
    use rtt_target::{ChannelMode, UpChannel};

    cortex_m::interrupt::disable();

    // Recursion protection
    static PANICKED: AtomicBool = AtomicBool::new(false);
    while PANICKED.load(Ordering::Relaxed) {
        asm::bkpt();
    }
    PANICKED.store(true, Ordering::Relaxed);

    if let Some(mut channel) = unsafe { UpChannel::conjure(0) } {
        channel.set_mode(ChannelMode::BlockIfFull);
        writeln!(channel, "{}", info).ok();
    }

    asm::udf();
}

#[cortex_m_rt::exception]
unsafe fn HardFault(ef: &cortex_m_rt::ExceptionFrame) -> ! {
    panic!("HardFault at {:#?}", ef);
}

#[cortex_m_rt::exception]
unsafe fn DefaultHandler(irqn: i16) {
    panic!("Unhandled exception (IRQn = {})", irqn);
}
