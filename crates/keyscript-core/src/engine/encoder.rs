//! Report encoder: turns (modifiers, key) into report writes.
//!
//! The encoder never auto-releases.  Pairing every `press` with a `release`
//! after an explicit hold is the sequencer's job.

use tracing::debug;

use crate::device::{DeviceError, ReportSink};
use crate::keymap::HidKeyCode;
use crate::protocol::report::{HidReport, ModifierFlags};

/// Borrows a sink for the duration of a single operation.
pub struct ReportEncoder<'a> {
    sink: &'a dyn ReportSink,
}

impl<'a> ReportEncoder<'a> {
    pub fn new(sink: &'a dyn ReportSink) -> Self {
        Self { sink }
    }

    /// Writes a press report with `modifiers` in byte 0 and `key` in byte 2.
    ///
    /// # Errors
    ///
    /// Returns the sink's [`DeviceError`] unchanged; there is no retry.
    pub fn press(&self, modifiers: ModifierFlags, key: HidKeyCode) -> Result<(), DeviceError> {
        let report = HidReport::press(modifiers, key);
        debug!(bytes = ?report.to_bytes(), "press");
        self.sink.write_report(&report)
    }

    /// Writes the all-zero release report.
    pub fn release(&self) -> Result<(), DeviceError> {
        debug!("release");
        self.sink.write_report(&HidReport::release())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::device::MockReportSink;

    #[test]
    fn test_press_writes_modifier_and_key_bytes() {
        // Arrange
        let mut sink = MockReportSink::new();
        sink.expect_write_report()
            .withf(|report| report.to_bytes() == [0x09, 0, 0x15, 0, 0, 0, 0, 0])
            .times(1)
            .returning(|_| Ok(()));
        let encoder = ReportEncoder::new(&sink);

        // Act
        let result = encoder.press(
            ModifierFlags::LEFT_CTRL | ModifierFlags::LEFT_GUI,
            HidKeyCode::KeyR,
        );

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_release_writes_all_zero_report() {
        let mut sink = MockReportSink::new();
        sink.expect_write_report()
            .withf(|report| report.to_bytes() == [0u8; 8])
            .times(1)
            .returning(|_| Ok(()));

        assert!(ReportEncoder::new(&sink).release().is_ok());
    }

    #[test]
    fn test_device_failure_is_returned_without_retry() {
        // Arrange
        let mut sink = MockReportSink::new();
        sink.expect_write_report().times(1).returning(|_| {
            Err(DeviceError::Unavailable {
                path: PathBuf::from("/dev/hidg0"),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        });
        let encoder = ReportEncoder::new(&sink);

        // Act
        let result = encoder.press(ModifierFlags::NONE, HidKeyCode::KeyA);

        // Assert
        assert!(matches!(result, Err(DeviceError::Unavailable { .. })));
    }
}
