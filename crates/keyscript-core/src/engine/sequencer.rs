//! Key and combo sequencing.
//!
//! Resolves tokens to (modifiers, key) pairs and drives the encoder through
//! press → hold → release → gap.  Every press issued here is followed by a
//! release before the next press, so the host never sees a stuck key.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::encoder::ReportEncoder;
use crate::clock::Clock;
use crate::device::{DeviceError, ReportSink};
use crate::keymap::{HidKeyCode, KeyTables};
use crate::protocol::report::ModifierFlags;

/// Errors from a single key, combo or text operation.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The token is not a key name, shifted character or modifier.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// A resolved key: modifier mask plus at most one standard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub modifiers: ModifierFlags,
    pub key: HidKeyCode,
}

/// Hold and settle durations used by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long a single key is held down.
    pub key_hold: Duration,
    /// Pause after each release so the host does not merge keystrokes.
    pub inter_key_gap: Duration,
    /// How long a combo is held down.
    pub combo_hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            key_hold: Duration::from_millis(50),
            inter_key_gap: Duration::from_millis(10),
            combo_hold: Duration::from_millis(100),
        }
    }
}

/// Outcome of [`KeySequencer::resolve_combo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboResolution {
    pub press: KeyPress,
    /// Tokens that were neither a modifier nor a key, lower-cased.
    pub unresolved: Vec<String>,
}

/// Result of typing a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSummary {
    /// Characters that were pressed and released.
    pub typed: usize,
    /// Characters with no key on the US layout, in order.
    pub skipped: Vec<char>,
}

pub struct KeySequencer<'a> {
    encoder: ReportEncoder<'a>,
    clock: &'a dyn Clock,
    timing: Timing,
}

impl<'a> KeySequencer<'a> {
    pub fn new(sink: &'a dyn ReportSink, clock: &'a dyn Clock, timing: Timing) -> Self {
        Self {
            encoder: ReportEncoder::new(sink),
            clock,
            timing,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Resolves one character or key name.
    ///
    /// A character that needs Shift resolves to its base key with the Shift
    /// bit set.  Anything else is looked up case-insensitively by name and
    /// carries no modifier.
    pub fn resolve_single(token: &str) -> Result<KeyPress, SequenceError> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(base) = KeyTables::shift_base_of(c) {
                if let Some(key) = KeyTables::keycode_of(base) {
                    return Ok(KeyPress {
                        modifiers: ModifierFlags::LEFT_SHIFT,
                        key,
                    });
                }
            }
        }
        KeyTables::keycode_of(token)
            .map(|key| KeyPress {
                modifiers: ModifierFlags::NONE,
                key,
            })
            .ok_or_else(|| SequenceError::UnknownKey(token.to_string()))
    }

    /// Presses `token` for `hold`, releases it and waits the inter-key gap.
    pub fn press_and_release(&self, token: &str, hold: Duration) -> Result<KeyPress, SequenceError> {
        self.press_key(token, ModifierFlags::NONE, hold)
    }

    /// Like [`Self::press_and_release`] with extra modifiers held alongside.
    ///
    /// A failed press is not followed by a release; a failed release is
    /// reported even though the press went out.
    pub fn press_key(
        &self,
        token: &str,
        modifiers: ModifierFlags,
        hold: Duration,
    ) -> Result<KeyPress, SequenceError> {
        let mut press = Self::resolve_single(token)?;
        press.modifiers |= modifiers;

        self.encoder.press(press.modifiers, press.key)?;
        self.clock.sleep(hold);
        self.encoder.release()?;
        self.clock.sleep(self.timing.inter_key_gap);
        Ok(press)
    }

    /// Types `text` one character at a time.
    ///
    /// `'\n'` becomes Enter and `'\t'` becomes Tab.  Characters without a key
    /// are skipped with a warning; a device error stops typing immediately.
    pub fn type_text(&self, text: &str, per_char_hold: Duration) -> Result<TypeSummary, SequenceError> {
        let mut summary = TypeSummary::default();
        for c in text.chars() {
            let token = match c {
                '\n' => "enter".to_string(),
                '\t' => "tab".to_string(),
                other => other.to_string(),
            };
            match self.press_and_release(&token, per_char_hold) {
                Ok(_) => summary.typed += 1,
                Err(SequenceError::UnknownKey(_)) => {
                    warn!(character = ?c, "no key for character, skipping");
                    summary.skipped.push(c);
                }
                Err(err) => return Err(err),
            }
        }
        debug!(typed = summary.typed, skipped = summary.skipped.len(), "text typed");
        Ok(summary)
    }

    /// Splits `tokens` into a modifier mask and one standard key.
    ///
    /// Modifiers OR together.  When several standard keys are listed, the
    /// last one wins and the earlier ones are dropped.
    pub fn resolve_combo<S: AsRef<str>>(tokens: &[S]) -> ComboResolution {
        let mut press = KeyPress {
            modifiers: ModifierFlags::NONE,
            key: HidKeyCode::NoKey,
        };
        let mut unresolved = Vec::new();

        for token in tokens {
            let name = token.as_ref().trim().to_lowercase();
            if let Some(bit) = KeyTables::modifier_bit_of(&name) {
                press.modifiers |= bit;
            } else if let Some(key) = KeyTables::keycode_of(&name) {
                press.key = key;
            } else {
                unresolved.push(name);
            }
        }
        ComboResolution { press, unresolved }
    }

    /// Presses every token of `tokens` at once, holds for the combo hold and
    /// releases.
    ///
    /// Unresolved tokens are logged and left out; the rest of the combo is
    /// still pressed.
    pub fn press_combo<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ComboResolution, SequenceError> {
        let resolution = Self::resolve_combo(tokens);
        if !resolution.unresolved.is_empty() {
            warn!(tokens = ?resolution.unresolved, "combo contains unknown keys");
        }

        let press = resolution.press;
        self.encoder.press(press.modifiers, press.key)?;
        self.clock.sleep(self.timing.combo_hold);
        self.encoder.release()?;
        Ok(resolution)
    }
}
