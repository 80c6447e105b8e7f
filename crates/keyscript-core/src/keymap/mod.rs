//! Key name tables for the HID keyboard gadget.
//!
//! The canonical representation on the wire is the USB HID Usage ID
//! (page 0x07, Keyboard/Keypad).  Everything the operator writes (script
//! tokens, characters in a `STRING`, key names from the CLI) is translated
//! to a usage ID plus modifier bits through the lookups below.

pub mod hid;
pub mod tables;

pub use hid::HidKeyCode;

use crate::protocol::report::ModifierFlags;
use tables::{KEYCODE_TABLE, MODIFIER_TABLE, SCRIPT_ALIAS_TABLE, SHIFT_TABLE};

/// Read-only view over the static key tables.
///
/// Every lookup returns `None` for unknown input; turning that into an
/// `UnknownKey` error is the caller's job.
pub struct KeyTables;

impl KeyTables {
    /// Looks up a key name, ignoring ASCII case.
    ///
    /// Returns `None` if `name` is not a known key.  Modifier names are not
    /// key names; use [`KeyTables::modifier_bit_of`] for those.
    pub fn keycode_of(name: &str) -> Option<HidKeyCode> {
        KEYCODE_TABLE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, code)| code)
    }

    /// Returns the unshifted key name for a character that needs Shift.
    ///
    /// Case-sensitive: `'A'` is shifted, `'a'` is not.
    pub fn shift_base_of(c: char) -> Option<&'static str> {
        SHIFT_TABLE
            .iter()
            .find(|&&(shifted, _)| shifted == c)
            .map(|&(_, base)| base)
    }

    /// Looks up a modifier name (`ctrl`, `right_alt`, ...), ignoring ASCII case.
    pub fn modifier_bit_of(name: &str) -> Option<ModifierFlags> {
        MODIFIER_TABLE
            .iter()
            .find(|(modifier, _)| modifier.eq_ignore_ascii_case(name))
            .map(|&(_, bit)| bit)
    }

    /// Maps a script token (`WINDOWS`, `UPARROW`, ...) to its internal name.
    ///
    /// The token is upper-cased before lookup.
    pub fn script_alias(token: &str) -> Option<&'static str> {
        let upper = token.to_ascii_uppercase();
        SCRIPT_ALIAS_TABLE
            .iter()
            .find(|(alias, _)| *alias == upper)
            .map(|&(_, name)| name)
    }

    /// Resolves a script token to the name the sequencer understands:
    /// the alias target if there is one, otherwise the lower-cased token.
    pub fn normalize_script_token(token: &str) -> String {
        match Self::script_alias(token) {
            Some(name) => name.to_string(),
            None => token.to_lowercase(),
        }
    }
}
