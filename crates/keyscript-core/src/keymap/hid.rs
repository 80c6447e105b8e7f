//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! These are the values written into byte 2 of a keyboard input report.
//! Only the keys reachable from the key tables in [`super::tables`] are
//! modelled; modifiers are not listed here because they travel in the
//! report's modifier byte rather than as key codes.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a number to
//! every physical key position.  The host translates those positions into
//! characters using its own keyboard layout, so the gadget never sends
//! characters, only positions:
//!
//! | Key          | HID Usage ID |
//! |--------------|-------------|
//! | Letter A     | 0x04        |
//! | Digit 1      | 0x1E        |
//! | Enter        | 0x28        |
//! | F1           | 0x3A        |
//!
//! A capital `A` is therefore "Shift held + position 0x04".  The sequencer
//! adds the Shift bit; this module only knows positions.
//!
//! # The `NoKey` sentinel
//!
//! Usage ID 0x00 means "no key pressed".  It is what a combo made only of
//! modifiers (e.g. `CTRL SHIFT`) places in the key slot, and what the
//! all-zero release report carries.

use serde::{Deserialize, Serialize};

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum HidKeyCode {
    /// Empty key slot.
    #[default]
    NoKey = 0x00,

    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control and punctuation (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Application / context-menu key
    ContextMenu = 0x65,
}

impl HidKeyCode {
    /// Converts a raw usage byte back into a [`HidKeyCode`].
    ///
    /// Returns `None` for usage IDs this crate never emits.
    pub fn from_u8(value: u8) -> Option<Self> {
        let code = match value {
            0x00 => HidKeyCode::NoKey,
            0x04 => HidKeyCode::KeyA,
            0x05 => HidKeyCode::KeyB,
            0x06 => HidKeyCode::KeyC,
            0x07 => HidKeyCode::KeyD,
            0x08 => HidKeyCode::KeyE,
            0x09 => HidKeyCode::KeyF,
            0x0A => HidKeyCode::KeyG,
            0x0B => HidKeyCode::KeyH,
            0x0C => HidKeyCode::KeyI,
            0x0D => HidKeyCode::KeyJ,
            0x0E => HidKeyCode::KeyK,
            0x0F => HidKeyCode::KeyL,
            0x10 => HidKeyCode::KeyM,
            0x11 => HidKeyCode::KeyN,
            0x12 => HidKeyCode::KeyO,
            0x13 => HidKeyCode::KeyP,
            0x14 => HidKeyCode::KeyQ,
            0x15 => HidKeyCode::KeyR,
            0x16 => HidKeyCode::KeyS,
            0x17 => HidKeyCode::KeyT,
            0x18 => HidKeyCode::KeyU,
            0x19 => HidKeyCode::KeyV,
            0x1A => HidKeyCode::KeyW,
            0x1B => HidKeyCode::KeyX,
            0x1C => HidKeyCode::KeyY,
            0x1D => HidKeyCode::KeyZ,
            0x1E => HidKeyCode::Digit1,
            0x1F => HidKeyCode::Digit2,
            0x20 => HidKeyCode::Digit3,
            0x21 => HidKeyCode::Digit4,
            0x22 => HidKeyCode::Digit5,
            0x23 => HidKeyCode::Digit6,
            0x24 => HidKeyCode::Digit7,
            0x25 => HidKeyCode::Digit8,
            0x26 => HidKeyCode::Digit9,
            0x27 => HidKeyCode::Digit0,
            0x28 => HidKeyCode::Enter,
            0x29 => HidKeyCode::Escape,
            0x2A => HidKeyCode::Backspace,
            0x2B => HidKeyCode::Tab,
            0x2C => HidKeyCode::Space,
            0x2D => HidKeyCode::Minus,
            0x2E => HidKeyCode::Equal,
            0x2F => HidKeyCode::BracketLeft,
            0x30 => HidKeyCode::BracketRight,
            0x31 => HidKeyCode::Backslash,
            0x33 => HidKeyCode::Semicolon,
            0x34 => HidKeyCode::Quote,
            0x35 => HidKeyCode::Backquote,
            0x36 => HidKeyCode::Comma,
            0x37 => HidKeyCode::Period,
            0x38 => HidKeyCode::Slash,
            0x39 => HidKeyCode::CapsLock,
            0x3A => HidKeyCode::F1,
            0x3B => HidKeyCode::F2,
            0x3C => HidKeyCode::F3,
            0x3D => HidKeyCode::F4,
            0x3E => HidKeyCode::F5,
            0x3F => HidKeyCode::F6,
            0x40 => HidKeyCode::F7,
            0x41 => HidKeyCode::F8,
            0x42 => HidKeyCode::F9,
            0x43 => HidKeyCode::F10,
            0x44 => HidKeyCode::F11,
            0x45 => HidKeyCode::F12,
            0x46 => HidKeyCode::PrintScreen,
            0x47 => HidKeyCode::ScrollLock,
            0x48 => HidKeyCode::Pause,
            0x49 => HidKeyCode::Insert,
            0x4A => HidKeyCode::Home,
            0x4B => HidKeyCode::PageUp,
            0x4C => HidKeyCode::Delete,
            0x4D => HidKeyCode::End,
            0x4E => HidKeyCode::PageDown,
            0x4F => HidKeyCode::ArrowRight,
            0x50 => HidKeyCode::ArrowLeft,
            0x51 => HidKeyCode::ArrowDown,
            0x52 => HidKeyCode::ArrowUp,
            0x65 => HidKeyCode::ContextMenu,
            _ => return None,
        };
        Some(code)
    }

    /// Returns the raw USB HID Usage ID for this key code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the empty-slot sentinel.
    pub fn is_no_key(self) -> bool {
        self == HidKeyCode::NoKey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_KEYS: &[(u8, HidKeyCode)] = &[
        (0x00, HidKeyCode::NoKey),
        (0x04, HidKeyCode::KeyA),
        (0x1D, HidKeyCode::KeyZ),
        (0x1E, HidKeyCode::Digit1),
        (0x27, HidKeyCode::Digit0),
        (0x28, HidKeyCode::Enter),
        (0x29, HidKeyCode::Escape),
        (0x2C, HidKeyCode::Space),
        (0x38, HidKeyCode::Slash),
        (0x39, HidKeyCode::CapsLock),
        (0x3A, HidKeyCode::F1),
        (0x45, HidKeyCode::F12),
        (0x48, HidKeyCode::Pause),
        (0x52, HidKeyCode::ArrowUp),
        (0x65, HidKeyCode::ContextMenu),
    ];

    #[test]
    fn test_from_u8_produces_expected_codes() {
        for &(raw, expected) in SAMPLE_KEYS {
            assert_eq!(
                HidKeyCode::from_u8(raw),
                Some(expected),
                "from_u8(0x{raw:02X}) should produce {expected:?}"
            );
        }
    }

    #[test]
    fn test_as_u8_returns_usage_id() {
        for &(raw, code) in SAMPLE_KEYS {
            assert_eq!(code.as_u8(), raw, "{code:?}.as_u8() should be 0x{raw:02X}");
        }
    }

    #[test]
    fn test_unassigned_usage_ids_return_none() {
        // 0x01-0x03 are error codes, 0x32 is the non-US hash key, 0xE0+ are modifiers
        for unassigned in [0x01u8, 0x02, 0x03, 0x32, 0x53, 0x64, 0xE0, 0xFF] {
            assert_eq!(
                HidKeyCode::from_u8(unassigned),
                None,
                "0x{unassigned:02X} should not map to a key"
            );
        }
    }

    #[test]
    fn test_letters_are_contiguous_from_0x04() {
        let letters = [
            HidKeyCode::KeyA, HidKeyCode::KeyB, HidKeyCode::KeyC, HidKeyCode::KeyD,
            HidKeyCode::KeyE, HidKeyCode::KeyF, HidKeyCode::KeyG, HidKeyCode::KeyH,
            HidKeyCode::KeyI, HidKeyCode::KeyJ, HidKeyCode::KeyK, HidKeyCode::KeyL,
            HidKeyCode::KeyM, HidKeyCode::KeyN, HidKeyCode::KeyO, HidKeyCode::KeyP,
            HidKeyCode::KeyQ, HidKeyCode::KeyR, HidKeyCode::KeyS, HidKeyCode::KeyT,
            HidKeyCode::KeyU, HidKeyCode::KeyV, HidKeyCode::KeyW, HidKeyCode::KeyX,
            HidKeyCode::KeyY, HidKeyCode::KeyZ,
        ];
        for (i, &letter) in letters.iter().enumerate() {
            assert_eq!(letter.as_u8(), 0x04 + i as u8, "{letter:?}");
        }
    }

    #[test]
    fn test_no_key_sentinel_is_zero() {
        assert_eq!(HidKeyCode::NoKey.as_u8(), 0);
        assert!(HidKeyCode::NoKey.is_no_key());
        assert!(!HidKeyCode::KeyA.is_no_key());
    }
}
