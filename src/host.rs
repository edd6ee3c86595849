//! Line oriented host link
//!
//! Outbound records are serialized as one JSON object per line. Inbound bytes are collected
//! until the acquisition loop asks for the pending command lines.
use embedded_io::{Read, ReadReady, Write, WriteReady};
use heapless::Vec;
use serde::Serialize;

use crate::design_parameters::{LINE_CAPACITY, RECORD_CAPACITY};

/// Maximum number of input bytes held between two command checks.
pub const INPUT_CAPACITY: usize = 4 * LINE_CAPACITY;

/// Line oriented JSON link over a serial interface.
///
/// # Note
/// Output is best effort and never blocks: a record that cannot be started is dropped. A
/// record that was only partially accepted by the interface is completed before any other
/// record is started, so the host only ever sees whole lines.
pub struct HostLink<T> {
    interface: T,
    input: Vec<u8, INPUT_CAPACITY>,
    overflow: bool,
    pending: Vec<u8, RECORD_CAPACITY>,
}

impl<T> HostLink<T>
where
    T: embedded_io::Write
        + embedded_io::WriteReady
        + embedded_io::Read
        + embedded_io::ReadReady,
{
    pub fn new(interface: T) -> Self {
        Self {
            interface,
            input: Vec::new(),
            overflow: false,
            pending: Vec::new(),
        }
    }

    pub fn interface(&self) -> &T {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut T {
        &mut self.interface
    }

    /// Write as much as possible of `data` without blocking.
    ///
    /// # Returns
    /// The number of bytes accepted by the interface.
    fn write_some(&mut self, data: &[u8]) -> usize {
        let mut written = 0;
        while written < data.len() {
            match self.interface.write_ready() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Host link not writable: {e:?}");
                    break;
                }
            }
            match self.interface.write(&data[written..]) {
                Ok(0) => break,
                Ok(count) => written += count,
                Err(e) => {
                    log::warn!("Host link write failed: {e:?}");
                    break;
                }
            }
        }
        written
    }

    /// Continue sending the tail of a partially written record.
    ///
    /// # Returns
    /// True if no partial record remains.
    pub fn flush(&mut self) -> bool {
        if self.pending.is_empty() {
            return true;
        }
        let pending = core::mem::take(&mut self.pending);
        let written = self.write_some(&pending);
        // The tail of a buffer always fits back into the same capacity.
        self.pending.extend_from_slice(&pending[written..]).ok();
        self.pending.is_empty()
    }

    /// Serialize a record and send it as one line.
    ///
    /// The record is dropped if an earlier record is still incomplete or the interface cannot
    /// take any output.
    pub fn send<R: Serialize>(&mut self, record: &R) {
        if !self.flush() {
            log::debug!("Host link busy, dropping record");
            return;
        }

        let mut buffer = [0u8; RECORD_CAPACITY];
        let len = match serde_json_core::to_slice(
            record,
            &mut buffer[..RECORD_CAPACITY - 1],
        ) {
            Ok(len) => len,
            Err(e) => {
                log::error!("Record serialization failed: {e:?}");
                return;
            }
        };
        buffer[len] = b'\n';
        let line = &buffer[..len + 1];

        let written = self.write_some(line);
        if written > 0 {
            self.pending.extend_from_slice(&line[written..]).ok();
        }
    }

    /// Collect all bytes the host sent so far.
    pub fn receive(&mut self) -> Result<(), <T as embedded_io::ErrorType>::Error> {
        while self.interface.read_ready()? {
            let mut buffer = [0u8; LINE_CAPACITY];
            let count = self.interface.read(&mut buffer)?;
            if count == 0 {
                break;
            }
            if self.input.extend_from_slice(&buffer[..count]).is_err() {
                self.overflow = true;
            }
        }
        Ok(())
    }

    /// Take the buffered input and process each line in order.
    ///
    /// A trailing fragment without a line terminator counts as a complete line. Blank lines
    /// are skipped.
    ///
    /// # Returns
    /// False if input was discarded because the buffer overflowed.
    pub fn drain_lines(
        &mut self,
        mut handle: impl FnMut(&mut Self, &[u8]),
    ) -> bool {
        let input = core::mem::take(&mut self.input);
        if core::mem::take(&mut self.overflow) {
            return false;
        }

        for line in input.split(|&b| b == b'\n' || b == b'\r') {
            if !line.iter().all(u8::is_ascii_whitespace) {
                handle(self, line);
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::telemetry::{Notice, Telemetry};
    use crate::testing::Loopback;

    #[test]
    fn records_are_lines() {
        let mut link = HostLink::new(Loopback::default());
        link.send(&Notice::info("Ref On"));
        link.send(&Notice::error("ERROR UNKNOWN COMMAND"));
        assert_eq!(
            link.interface().output(),
            "{\"type\":\"Info\",\"message\":\"Ref On\"}\n\
             {\"type\":\"Error\",\"message\":\"ERROR UNKNOWN COMMAND\"}\n"
        );
    }

    #[test]
    fn output_never_blocks() {
        let mut link = HostLink::new(Loopback::default());
        link.interface_mut().set_write_ready(false);
        link.send(&Notice::info("dropped"));
        assert_eq!(link.interface().output(), "");
    }

    #[test]
    fn records_are_never_split() {
        let telemetry = Telemetry {
            data: "thermistors",
            temps: [Some(25.0); 7],
        };
        let mut link = HostLink::new(Loopback::default());
        link.interface_mut().set_free(Some(40));
        link.send(&telemetry);
        assert_eq!(link.interface().output().len(), 40);

        // Not started while the telemetry line is incomplete
        link.send(&Notice::info("Alive and working."));
        assert!(!link.flush());

        // Host drains the link
        link.interface_mut().set_free(None);
        link.send(&Notice::info("Ref On"));
        assert!(link.flush());
        assert_eq!(
            link.interface().output(),
            "{\"data\":\"thermistors\",\"temps\":[25.0,25.0,25.0,25.0,25.0,25.0,25.0]}\n\
             {\"type\":\"Info\",\"message\":\"Ref On\"}\n"
        );
    }

    #[test]
    fn full_link_drops_whole_records() {
        let mut link = HostLink::new(Loopback::default());
        link.interface_mut().set_free(Some(0));
        link.send(&Notice::info("dropped"));
        assert!(link.flush());
        link.interface_mut().set_free(None);
        link.send(&Notice::info("Ref Off"));
        assert_eq!(
            link.interface().output(),
            "{\"type\":\"Info\",\"message\":\"Ref Off\"}\n"
        );
    }

    #[test]
    fn lines_in_order() {
        let mut link = HostLink::new(Loopback::default());
        link.interface_mut().host_sends("REF ON\r\nREGS\n\nREF OFF");
        link.receive().unwrap();
        let mut lines: heapless::Vec<heapless::String<16>, 4> =
            heapless::Vec::new();
        assert!(link.drain_lines(|_, line| {
            let line = core::str::from_utf8(line).unwrap();
            lines.push(heapless::String::try_from(line).unwrap()).unwrap();
        }));
        assert_eq!(lines, ["REF ON", "REGS", "REF OFF"]);

        // Nothing left
        let mut count = 0;
        assert!(link.drain_lines(|_, _| count += 1));
        assert_eq!(count, 0);
    }

    #[test]
    fn overflow_discards_input() {
        let mut link = HostLink::new(Loopback::default());
        for _ in 0..=INPUT_CAPACITY / 8 {
            link.interface_mut().host_sends("REF ON\n\n");
        }
        link.receive().unwrap();
        let mut count = 0;
        assert!(!link.drain_lines(|_, _| count += 1));
        assert_eq!(count, 0);
    }
}
