//! # keyscript-gadget
//!
//! Drives a Linux USB HID keyboard gadget from the command line.
//!
//! - **`infrastructure`** – The `/dev/hidg*` report sink and the TOML
//!   configuration file.
//! - **`application`** – [`AutomationService`]: one operator action at a time
//!   against a [`keyscript_core::KeyboardEngine`], answered with an
//!   [`ActionResponse`].

pub mod application;
pub mod infrastructure;

pub use application::{ActionResponse, AutomationService};
pub use infrastructure::{GadgetConfig, HidGadgetDevice};
