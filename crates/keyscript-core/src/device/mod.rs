//! The write-only boundary between the encoder and the HID gadget.
//!
//! The core never opens a device itself.  It hands finished reports to a
//! [`ReportSink`]; the gadget crate supplies the character-device sink and
//! tests use [`MemorySink`] or the generated `MockReportSink`.

pub mod memory;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::protocol::report::HidReport;

pub use memory::MemorySink;

/// Errors surfaced by a [`ReportSink`].
///
/// Both variants abort the key, combo or text operation in progress.  They
/// never abort an enclosing script.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device node is missing or could not be opened.
    #[error("HID device {} is unavailable: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The device was opened but the report was not written in full.
    #[error("write to HID device {} failed: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Destination for encoded keyboard reports.
///
/// Implementations must not hold the device open between calls; each
/// `write_report` acquires and releases its own handle.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink: Send + Sync {
    /// Writes one 8-byte report.  A partial write is a failure.
    fn write_report(&self, report: &HidReport) -> Result<(), DeviceError>;
}
