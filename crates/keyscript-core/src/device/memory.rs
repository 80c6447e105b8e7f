//! In-memory report sink for dry runs and tests.
//!
//! Every report is pushed into a `Mutex<Vec<HidReport>>` so assertions can
//! inspect exactly what would have reached the gadget, and in what order.
//!
//! # Simulating failures
//!
//! `should_fail` makes every write return [`DeviceError::WriteFailure`];
//! [`MemorySink::fail_after`] lets the first `n` writes through and fails the
//! rest, which is how a device disappearing mid-script is modelled.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{DeviceError, ReportSink};
use crate::protocol::report::HidReport;

/// Pseudo-path reported in errors raised by [`MemorySink`].
const MEMORY_PATH: &str = "<memory>";

/// A sink that records reports instead of writing them to a device.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<HidReport>>,
    /// When `true`, every write fails.
    pub should_fail: AtomicBool,
    fail_after: Mutex<Option<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sink that accepts `n` writes and fails every later one.
    pub fn fail_after(n: usize) -> Self {
        Self {
            fail_after: Mutex::new(Some(n)),
            ..Self::default()
        }
    }

    /// Returns a copy of every report recorded so far.
    pub fn reports(&self) -> Vec<HidReport> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the recorded reports in wire form.
    pub fn report_bytes(&self) -> Vec<[u8; 8]> {
        self.reports().iter().map(HidReport::to_bytes).collect()
    }

    fn failure() -> DeviceError {
        DeviceError::WriteFailure {
            path: PathBuf::from(MEMORY_PATH),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "simulated device failure"),
        }
    }
}

impl ReportSink for MemorySink {
    fn write_report(&self, report: &HidReport) -> Result<(), DeviceError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        let mut reports = self
            .reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let limit = *self
            .fail_after
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if limit.is_some_and(|n| reports.len() >= n) {
            return Err(Self::failure());
        }
        reports.push(*report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::HidKeyCode;
    use crate::protocol::report::ModifierFlags;

    #[test]
    fn test_records_reports_in_order() {
        let sink = MemorySink::new();
        let press = HidReport::press(ModifierFlags::NONE, HidKeyCode::KeyQ);

        sink.write_report(&press).unwrap();
        sink.write_report(&HidReport::release()).unwrap();

        assert_eq!(sink.reports(), vec![press, HidReport::release()]);
        assert_eq!(sink.report_bytes()[0], [0, 0, 0x14, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_should_fail_rejects_every_write() {
        let sink = MemorySink::new();
        sink.should_fail.store(true, Ordering::SeqCst);

        let result = sink.write_report(&HidReport::release());

        assert!(matches!(result, Err(DeviceError::WriteFailure { .. })));
        assert!(sink.reports().is_empty());
    }

    #[test]
    fn test_fail_after_accepts_exactly_n_writes() {
        let sink = MemorySink::fail_after(2);

        assert!(sink.write_report(&HidReport::release()).is_ok());
        assert!(sink.write_report(&HidReport::release()).is_ok());
        assert!(sink.write_report(&HidReport::release()).is_err());
        assert_eq!(sink.reports().len(), 2);
    }
}
