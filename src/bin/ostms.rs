//! Slide temperature monitor
//!
//! Six slide thermistors and an optional reference probe are scanned through the ADS124S08.
//! One JSON telemetry record per scan is sent over the USB serial port. The host may send
//! `REF ON`, `REF OFF` and `REGS`.
//!
//! The scan runs in `idle` and blocks for settle times. USB is serviced by a periodic task
//! that preempts the scan. The ADC data-ready falling edge raises a flag from its interrupt.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

/// Run three scans against the simulated ADC and print the host link output.
#[cfg(not(target_os = "none"))]
fn main() {
    use ostms::{
        acquisition::Acquisition,
        channel::CHANNELS,
        metadata::ApplicationMetadata,
        testing::{Loopback, SimulatedAdc, SimulatedDelay},
        Instant,
    };

    println!("{}", ApplicationMetadata::new());

    let mut adc = SimulatedAdc::new();
    for (channel, ohms) in
        [12_000., 11_000., 10_000., 9_000., 8_000., 7_000., 110.]
            .into_iter()
            .enumerate()
    {
        adc.set_resistance(channel, ohms);
    }

    let mut acquisition = Acquisition::new(
        adc,
        SimulatedDelay::default(),
        Loopback::default(),
        CHANNELS,
        Instant::from_ticks(0),
    );
    acquisition.probe().unwrap();
    acquisition.interface_mut().host_sends("REF ON\n");

    let records = |link: &Loopback| {
        link.lines().filter(|line| line.starts_with("{\"data\"")).count()
    };
    while records(acquisition.interface()) < 3 {
        let now = Instant::from_ticks(acquisition.delay().elapsed_ms() as u32);
        acquisition.service(now, true).unwrap();
    }

    for line in acquisition.interface().lines() {
        println!("{line}");
    }
}

#[cfg(target_os = "none")]
#[rtic::app(device = ostms::hardware::hal::stm32, peripherals = true, dispatchers=[DCMI, JPEG])]
mod app {
    use fugit::ExtU32;
    use rtic_monotonics::Monotonic;

    use ostms::{
        acquisition::Acquisition,
        channel::CHANNELS,
        hardware::{self, delay::AsmDelay, hal, Adc, DataReady, Systick, UsbSerial},
        sequencer,
    };

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        acquisition: Acquisition<Adc, AsmDelay, UsbSerial>,
        data_ready: DataReady,
    }

    #[init]
    fn init(c: init::Context) -> (Shared, Local) {
        let devices = hardware::setup::setup(c.core, c.device);

        let acquisition = Acquisition::new(
            devices.adc,
            devices.delay,
            devices.usb_serial,
            CHANNELS,
            Systick::now(),
        );

        usb::spawn().unwrap();

        (
            Shared {},
            Local {
                acquisition,
                data_ready: devices.data_ready,
            },
        )
    }

    #[idle(local=[acquisition])]
    fn idle(c: idle::Context) -> ! {
        let acquisition = c.local.acquisition;

        if let Err(e) = acquisition.probe() {
            log::error!("ADC setup failed: {e}");
        }

        loop {
            if let Err(e) = acquisition
                .service(Systick::now(), sequencer::take_conversion_ready())
            {
                log::warn!("Acquisition: {e}");
            }
        }
    }

    #[task(priority = 1)]
    async fn usb(_: usb::Context) {
        loop {
            hardware::usb::poll();
            Systick::delay(10.millis()).await;
        }
    }

    #[task(binds = EXTI0, priority = 2, local=[data_ready])]
    fn data_ready(c: data_ready::Context) {
        use hal::gpio::ExtiPin;
        c.local.data_ready.clear_interrupt_pending_bit();
        sequencer::on_conversion_ready();
    }
}
