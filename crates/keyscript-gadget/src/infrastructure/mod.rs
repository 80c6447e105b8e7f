//! OS-facing adapters: the gadget character device and the config file.

pub mod config;
pub mod hidg;

pub use config::{ConfigError, GadgetConfig};
pub use hidg::{DeviceStatus, HidGadgetDevice};
