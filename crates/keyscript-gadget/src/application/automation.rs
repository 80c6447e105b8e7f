//! AutomationService: runs one operator action at a time.
//!
//! The keyboard engine does no locking of its own, so two scripts started
//! together would interleave their reports on the wire.  Every action here
//! takes the service's mutex first, which serialises them.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::{info, warn};

use keyscript_core::{KeyboardEngine, ModifierFlags};

/// Outcome of one action, in the shape callers print or serialise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    /// Script log, one line per executed command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
}

impl ActionResponse {
    fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            results: None,
        }
    }

    fn outcome(success: bool, ok: &str, failed: &str) -> Self {
        Self::new(success, if success { ok } else { failed })
    }
}

pub struct AutomationService {
    engine: Mutex<KeyboardEngine>,
}

impl AutomationService {
    pub fn new(engine: KeyboardEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    fn engine(&self) -> MutexGuard<'_, KeyboardEngine> {
        self.engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Presses one key with `modifiers` held, using the configured key hold.
    pub fn send_key(&self, key: &str, modifiers: ModifierFlags) -> ActionResponse {
        if key.is_empty() {
            return ActionResponse::new(false, "No key given");
        }
        let engine = self.engine();
        let hold = engine.timing().key_hold;
        let sent = engine.press_single_key(key, modifiers, hold);
        ActionResponse::outcome(sent, "Key sent", "Failed to send key")
    }

    /// Presses a space-separated list of keys and modifiers as one combo.
    pub fn send_combo(&self, keys: &str) -> ActionResponse {
        let tokens: Vec<&str> = keys.split_whitespace().collect();
        if tokens.is_empty() {
            return ActionResponse::new(false, "No keys given");
        }
        let sent = self.engine().press_combo(&tokens);
        ActionResponse::outcome(sent, "Combo sent", "Failed to send combo")
    }

    /// Types `text` with the configured per-key hold.
    pub fn type_string(&self, text: &str) -> ActionResponse {
        if text.is_empty() {
            return ActionResponse::new(false, "No text given");
        }
        let engine = self.engine();
        let hold = engine.timing().key_hold;
        let typed = engine.type_text(text, hold);
        ActionResponse::outcome(typed, "Text typed", "Failed to type text")
    }

    /// Executes script text.  Succeeds whenever the script ran to the end,
    /// even if individual lines failed; those show up in `results`.
    pub fn run_script(&self, script: &str) -> ActionResponse {
        if script.trim().is_empty() {
            return ActionResponse::new(false, "Script is empty");
        }
        let report = self.engine().execute_script(script);
        if report.failures() > 0 {
            warn!(failures = report.failures(), "script finished with failed lines");
        }
        ActionResponse {
            success: report.completed,
            message: "Script executed".to_string(),
            results: Some(report.messages()),
        }
    }

    /// Reads a script file and executes it.
    pub fn run_script_file(&self, path: &Path) -> ActionResponse {
        match std::fs::read_to_string(path) {
            Ok(script) => {
                info!(path = %path.display(), "running script file");
                let mut response = self.run_script(&script);
                if response.success {
                    response.message = format!("Script {} executed", path.display());
                }
                response
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read script");
                ActionResponse::new(false, format!("Script not found: {}", path.display()))
            }
        }
    }
}
