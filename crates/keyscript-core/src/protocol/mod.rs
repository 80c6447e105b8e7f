//! HID keyboard report wire format.

pub mod report;

pub use report::{HidReport, ModifierFlags, ReportError, KEYBOARD_REPORT_DESCRIPTOR, REPORT_SIZE};
