//! USB CDC-ACM link to the host
//!
//! The USB device is serviced from a periodic task while the acquisition loop blocks in its
//! settle delays. Both sides access the port within short critical sections.
use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use usb_device::{device::UsbDeviceState, UsbError};

use super::UsbBus;

struct Port {
    usb_device: usb_device::device::UsbDevice<'static, UsbBus>,
    usb_serial: usbd_serial::SerialPort<'static, UsbBus>,
}

static PORT: Mutex<RefCell<Option<Port>>> = Mutex::new(RefCell::new(None));

fn with_port<R>(f: impl FnOnce(&mut Port) -> R) -> Option<R> {
    cortex_m::interrupt::free(|cs| PORT.borrow(cs).borrow_mut().as_mut().map(f))
}

/// Service the USB device. Must be called at least every 10 ms.
pub fn poll() {
    with_port(|port| port.usb_device.poll(&mut [&mut port.usb_serial]));
}

#[derive(Debug)]
pub struct Error(UsbError);

impl From<UsbError> for Error {
    fn from(e: UsbError) -> Self {
        Self(e)
    }
}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

/// Handle to the serial port.
pub struct UsbSerial {
    _private: (),
}

impl UsbSerial {
    /// Take ownership of the USB device and serial class.
    ///
    /// # Note
    /// This may only be called once.
    pub fn new(
        usb_device: usb_device::device::UsbDevice<'static, UsbBus>,
        usb_serial: usbd_serial::SerialPort<'static, UsbBus>,
    ) -> Self {
        cortex_m::interrupt::free(|cs| {
            PORT.borrow(cs).replace(Some(Port {
                usb_device,
                usb_serial,
            }))
        });
        Self { _private: () }
    }
}

/// Treat an empty or full buffer as a zero length transfer.
fn nonblocking(result: Result<usize, UsbError>) -> Result<usize, Error> {
    match result {
        Err(UsbError::WouldBlock) => Ok(0),
        other => Ok(other?),
    }
}

impl embedded_io::ErrorType for UsbSerial {
    type Error = Error;
}

impl embedded_io::Read for UsbSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        with_port(|port| nonblocking(port.usb_serial.read(buf))).unwrap_or(Ok(0))
    }
}

impl embedded_io::ReadReady for UsbSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(with_port(|port| port.usb_device.state() == UsbDeviceState::Configured)
            .unwrap_or(false))
    }
}

impl embedded_io::Write for UsbSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        with_port(|port| nonblocking(port.usb_serial.write(buf)))
            .unwrap_or(Ok(0))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_io::WriteReady for UsbSerial {
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(with_port(|port| {
            port.usb_device.state() == UsbDeviceState::Configured
                && port.usb_serial.dtr()
        })
        .unwrap_or(false))
    }
}
