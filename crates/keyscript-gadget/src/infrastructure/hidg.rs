//! Report sink backed by the kernel's HID gadget character device.
//!
//! # What is `/dev/hidg0`? (for beginners)
//!
//! When a board runs in USB device mode, the `libcomposite` driver can expose
//! a HID function to the connected host.  The kernel creates `/dev/hidg0` for
//! it: every 8 bytes written there are delivered to the host as one keyboard
//! input report.  The host sees an ordinary USB keyboard.
//!
//! # Open per write
//!
//! [`HidGadgetDevice`] opens the node for each report and closes it straight
//! away.  A script that loses the device halfway therefore fails line by line
//! and never holds a stale handle.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::trace;

use keyscript_core::{DeviceError, HidReport, ReportSink, REPORT_SIZE};

/// Default gadget node created by `libcomposite`.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/hidg0";

/// Writes reports to a gadget device node.
#[derive(Debug, Clone)]
pub struct HidGadgetDevice {
    path: PathBuf,
}

/// Result of probing the device node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    pub path: PathBuf,
    pub exists: bool,
    pub writable: bool,
}

impl HidGadgetDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks whether the node exists and can be opened for writing.
    ///
    /// Nothing is written.
    pub fn status(&self) -> DeviceStatus {
        let exists = self.path.exists();
        let writable = exists && self.open().is_ok();
        DeviceStatus {
            path: self.path.clone(),
            exists,
            writable,
        }
    }

    fn open(&self) -> io::Result<std::fs::File> {
        OpenOptions::new().read(true).write(true).open(&self.path)
    }

    fn unavailable(&self, source: io::Error) -> DeviceError {
        DeviceError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn write_failure(&self, source: io::Error) -> DeviceError {
        DeviceError::WriteFailure {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for HidGadgetDevice {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_PATH)
    }
}

impl ReportSink for HidGadgetDevice {
    fn write_report(&self, report: &HidReport) -> Result<(), DeviceError> {
        if !self.path.exists() {
            return Err(self.unavailable(io::Error::new(
                io::ErrorKind::NotFound,
                "device node does not exist",
            )));
        }
        let mut file = self.open().map_err(|e| self.unavailable(e))?;

        let bytes = report.to_bytes();
        let written = file.write(&bytes).map_err(|e| self.write_failure(e))?;
        if written != REPORT_SIZE {
            return Err(self.write_failure(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {written} of {REPORT_SIZE} bytes"),
            )));
        }
        trace!(path = %self.path.display(), ?bytes, "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use keyscript_core::{HidKeyCode, ModifierFlags};
    use uuid::Uuid;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("keyscript-hidg-{name}-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_missing_node_is_unavailable() {
        // Arrange
        let device = HidGadgetDevice::new(temp_path("missing"));

        // Act
        let result = device.write_report(&HidReport::release());

        // Assert
        assert!(matches!(result, Err(DeviceError::Unavailable { .. })));
    }

    #[test]
    fn test_report_bytes_reach_the_node() {
        // Arrange
        let path = temp_path("write");
        fs::write(&path, b"").unwrap();
        let device = HidGadgetDevice::new(&path);
        let report = HidReport::press(ModifierFlags::LEFT_SHIFT, HidKeyCode::KeyA);

        // Act
        device.write_report(&report).unwrap();

        // Assert
        assert_eq!(fs::read(&path).unwrap(), vec![0x02, 0, 0x04, 0, 0, 0, 0, 0]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_status_reports_existence_and_writability() {
        let path = temp_path("status");
        let device = HidGadgetDevice::new(&path);
        assert_eq!(
            device.status(),
            DeviceStatus {
                path: path.clone(),
                exists: false,
                writable: false
            }
        );

        fs::write(&path, b"").unwrap();
        let status = device.status();
        assert!(status.exists);
        assert!(status.writable);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_default_path_is_hidg0() {
        assert_eq!(HidGadgetDevice::default().path(), Path::new("/dev/hidg0"));
    }
}
