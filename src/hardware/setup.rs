//! Board hardware configuration
//!
//! This file contains all of the hardware-specific configuration: clocks, logging, the ADC
//! SPI bus and its data-ready interrupt, and the USB serial link to the host.
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_compat::ForwardCompat;
use stm32h7xx_hal::{
    self as hal,
    gpio::{Edge, ExtiPin},
    prelude::*,
};

use crate::metadata::ApplicationMetadata;

use super::{
    delay::AsmDelay, design_parameters, Adc, DataReady, Systick, UsbBus,
    UsbSerial,
};

/// The available hardware interfaces of the board.
pub struct Devices {
    pub adc: Adc,
    pub data_ready: DataReady,
    pub delay: AsmDelay,
    pub usb_serial: UsbSerial,
}

/// Configure the board hardware.
///
/// # Note
/// Refer to [design_parameters::SYSCLK] for the core clock and
/// [design_parameters::ADC_SCK] for the ADC serial clock.
///
/// # Args
/// * `core` - The cortex-m peripherals.
/// * `device` - The microcontroller peripherals to be configured.
///
/// # Returns
/// The configured [Devices]. The ADC is not yet probed and the data-ready interrupt is
/// enabled.
pub fn setup(
    mut core: hal::stm32::CorePeripherals,
    mut device: hal::stm32::Peripherals,
) -> Devices {
    // Set up RTT logging
    {
        // Enable debug during WFE/WFI-induced sleep
        device.DBGMCU.cr.modify(|_, w| w.dbgsleep_d1().set_bit());

        // Best effort print channel: contended log messages are dropped.
        let channels = rtt_target::rtt_init_default!();
        // Note(unsafe): The closure we pass does not establish a critical section
        // as demanded but it does ensure synchronization and implements a lock.
        unsafe {
            rtt_target::set_print_channel_cs(
                channels.up.0,
                &((|arg, f| {
                    static LOCKED: AtomicBool = AtomicBool::new(false);
                    if LOCKED.compare_exchange_weak(
                        false,
                        true,
                        Ordering::Acquire,
                        Ordering::Relaxed,
                    ) == Ok(false)
                    {
                        f(arg);
                        LOCKED.store(false, Ordering::Release);
                    }
                }) as rtt_target::CriticalSectionFunc),
            );
        }

        static LOGGER: rtt_logger::RTTLogger =
            rtt_logger::RTTLogger::new(log::LevelFilter::Info);
        log::set_logger(&LOGGER)
            .map(|()| log::set_max_level(log::LevelFilter::Trace))
            .unwrap();
        log::info!("Starting");
    }

    let pwr = device.PWR.constrain();
    let vos = pwr.freeze();

    // Clear reset flags.
    device.RCC.rsr.write(|w| w.rmvf().set_bit());

    // Select the PLL for SPI.
    device.RCC.d2ccip1r.modify(|_, w| w.spi123sel().pll2_p());

    let rcc = device.RCC.constrain();
    let mut ccdr = rcc
        .use_hse(8.MHz())
        .sysclk(design_parameters::SYSCLK.convert())
        .hclk(200.MHz())
        .pll2_p_ck(100.MHz())
        .freeze(vos, &device.SYSCFG);

    // Set up USB clocks.
    ccdr.clocks.hsi48_ck().unwrap();
    ccdr.peripheral
        .kernel_usb_clk_mux(hal::rcc::rec::UsbClkSel::Hsi48);

    Systick::start(core.SYST, ccdr.clocks.sysclk().to_Hz());

    core.SCB.enable_icache();

    let delay = AsmDelay::new(ccdr.clocks.c_ck().to_Hz());

    let gpioa = device.GPIOA.split(ccdr.peripheral.GPIOA);
    let gpiob = device.GPIOB.split(ccdr.peripheral.GPIOB);

    let adc = {
        let spi = device
            .SPI1
            .spi(
                (
                    gpioa.pa5.into_alternate(), // SCLK
                    gpioa.pa6.into_alternate(), // DOUT
                    gpioa.pa7.into_alternate(), // DIN
                ),
                hal::spi::MODE_1,
                design_parameters::ADC_SCK.convert(),
                ccdr.peripheral.SPI1,
                &ccdr.clocks,
            )
            .forward();

        let mut cs = gpioa.pa4.into_push_pull_output();
        cs.set_high();

        let bus = embedded_hal_bus::spi::ExclusiveDevice::new_no_delay(
            spi,
            cs.erase().forward(),
        )
        .unwrap();

        ads124s08::Ads124s08::new(bus)
    };

    let data_ready = {
        let mut pin = gpiob.pb0.into_pull_up_input();
        pin.make_interrupt_source(&mut device.SYSCFG);
        pin.trigger_on_edge(&mut device.EXTI, Edge::Falling);
        pin.enable_interrupt(&mut device.EXTI);
        pin
    };

    let (usb_device, usb_serial) = {
        let _usb_id = gpioa.pa10.into_alternate::<10>();
        let usb_n = gpioa.pa11.into_alternate();
        let usb_p = gpioa.pa12.into_alternate();
        let usb = hal::usb_hs::USB2::new(
            device.OTG2_HS_GLOBAL,
            device.OTG2_HS_DEVICE,
            device.OTG2_HS_PWRCLK,
            usb_n,
            usb_p,
            ccdr.peripheral.USB2OTG,
            &ccdr.clocks,
        );

        let endpoint_memory: &'static mut [u32] =
            cortex_m::singleton!(: [u32; 1024] = [0; 1024]).unwrap();
        let usb_bus = cortex_m::singleton!(: usb_device::bus::UsbBusAllocator<UsbBus> =
            hal::usb_hs::UsbBus::new(usb, endpoint_memory))
        .unwrap();

        let read_store = cortex_m::singleton!(: [u8; 128] = [0; 128]).unwrap();
        let write_store =
            cortex_m::singleton!(: [u8; 1024] = [0; 1024]).unwrap();
        let serial = usbd_serial::SerialPort::new_with_store(
            usb_bus,
            &mut read_store[..],
            &mut write_store[..],
        );

        let usb_device = usb_device::device::UsbDeviceBuilder::new(
            usb_bus,
            usb_device::device::UsbVidPid(0x1209, 0x392F),
        )
        .strings(&[usb_device::device::StringDescriptors::default()
            .manufacturer("OSTMS")
            .product("Slide temperature monitor")
            .serial_number("0001")])
        .unwrap()
        .device_class(usbd_serial::USB_CLASS_CDC)
        .build();

        (usb_device, serial)
    };

    log::info!("{}", ApplicationMetadata::new());
    log::info!("setup() complete");

    Devices {
        adc,
        data_ready,
        delay,
        usb_serial: UsbSerial::new(usb_device, usb_serial),
    }
}
