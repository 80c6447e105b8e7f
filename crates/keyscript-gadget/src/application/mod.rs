//! Use cases the operator triggers: send a key, a combo, some text or a
//! whole script.

pub mod automation;

pub use automation::{ActionResponse, AutomationService};
