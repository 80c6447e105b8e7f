//! Keyboard engine: the entry points callers use to drive the gadget.
//!
//! [`KeyboardEngine`] owns shared handles to a [`ReportSink`] and a
//! [`Clock`] and builds a fresh [`KeySequencer`] for every call, so no
//! device state survives between operations.
//!
//! The engine does no locking.  Two threads calling it at once will
//! interleave their reports on the wire; serialise calls at a higher layer.

pub mod encoder;
pub mod sequencer;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::clock::Clock;
use crate::device::ReportSink;
use crate::protocol::report::ModifierFlags;
use crate::script::interpreter::{ExecutionReport, ScriptInterpreter};

pub use encoder::ReportEncoder;
pub use sequencer::{ComboResolution, KeyPress, KeySequencer, SequenceError, Timing, TypeSummary};

pub struct KeyboardEngine {
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
    timing: Timing,
}

impl KeyboardEngine {
    pub fn new(sink: Arc<dyn ReportSink>, clock: Arc<dyn Clock>, timing: Timing) -> Self {
        Self { sink, clock, timing }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    fn sequencer(&self) -> KeySequencer<'_> {
        KeySequencer::new(self.sink.as_ref(), self.clock.as_ref(), self.timing)
    }

    /// Runs a whole script and returns its log.  Never fails; per-line
    /// errors are inside the report.
    pub fn execute_script(&self, script: &str) -> ExecutionReport {
        ScriptInterpreter::new(self.sequencer(), self.clock.as_ref()).run(script)
    }

    /// Presses `name` with `modifiers` held for `hold`, then releases.
    pub fn press_single_key(&self, name: &str, modifiers: ModifierFlags, hold: Duration) -> bool {
        match self.sequencer().press_key(name, modifiers, hold) {
            Ok(_) => true,
            Err(err) => {
                warn!(key = name, error = %err, "key press failed");
                false
            }
        }
    }

    /// Presses every token at once.  Unknown tokens are dropped from the
    /// combo; the result only reflects whether the device writes succeeded.
    pub fn press_combo<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        match self.sequencer().press_combo(tokens) {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "combo failed");
                false
            }
        }
    }

    /// Types `text`, holding each key for `per_char_hold`.
    pub fn type_text(&self, text: &str, per_char_hold: Duration) -> bool {
        match self.sequencer().type_text(text, per_char_hold) {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "typing failed");
                false
            }
        }
    }
}
