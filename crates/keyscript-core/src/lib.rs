//! # keyscript-core
//!
//! Keyboard report encoder and keystroke-script interpreter for a Linux USB
//! HID gadget.  The crate has no OS dependencies: reports go to a
//! [`ReportSink`] and delays go through a [`Clock`], both supplied by the
//! caller.
//!
//! # Architecture overview (for beginners)
//!
//! A USB HID gadget is a virtual keyboard the kernel exposes as a character
//! device (usually `/dev/hidg0`).  Writing an 8-byte *report* to it makes the
//! connected host believe a key went down; writing eight zero bytes makes it
//! believe every key came back up.
//!
//! Data flows one way through four layers:
//!
//! - **`script`** – Parses script text line by line and dispatches each
//!   command (`STRING`, `DELAY`, key combos, ...).
//!
//! - **`engine`** – The sequencer resolves key names and characters to
//!   (modifiers, key) pairs and enforces press → hold → release → gap.  The
//!   encoder turns each pair into a report write.
//!
//! - **`keymap`** / **`protocol`** – Static name tables and the report byte
//!   layout.
//!
//! - **`device`** – The [`ReportSink`] trait the reports are written to.

pub mod clock;
pub mod device;
pub mod engine;
pub mod keymap;
pub mod protocol;
pub mod script;

pub use clock::{Clock, ManualClock, SystemClock};
pub use device::{DeviceError, MemorySink, ReportSink};
pub use engine::{KeyboardEngine, SequenceError, Timing};
pub use keymap::{HidKeyCode, KeyTables};
pub use protocol::{HidReport, ModifierFlags, ReportError, KEYBOARD_REPORT_DESCRIPTOR, REPORT_SIZE};
pub use script::{ExecutionReport, LogEntry, ScriptCommand};
