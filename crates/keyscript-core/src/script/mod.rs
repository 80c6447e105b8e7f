//! Keystroke script language: parsing and execution.
//!
//! ```text
//! REM open the run dialog
//! GUI r
//! DELAY 500
//! STRING notepad
//! ENTER
//! ```

pub mod command;
pub mod interpreter;

pub use command::ScriptCommand;
pub use interpreter::{ExecutionReport, InterpreterState, LogEntry, ScriptInterpreter};
