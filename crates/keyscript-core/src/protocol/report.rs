//! Boot-protocol keyboard input report codec.
//!
//! Wire format (8 bytes per write to the gadget device):
//! ```text
//! [modifiers:1][reserved:1][key:1][key2..key6:5]
//! ```
//! Only one standard key is ever held, so `key2..key6` are always zero.
//! The all-zero report means "every key released".

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keymap::hid::HidKeyCode;

/// Size of one keyboard input report in bytes.
pub const REPORT_SIZE: usize = 8;

/// HID report descriptor the gadget function is configured with.
///
/// Boot keyboard: 8 modifier bits, one reserved byte, 5 LED output bits
/// (+3 padding) and six key slots covering usages 0x00–0x65.  The layout of
/// [`HidReport`] must match the input items described here.
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x03, //   Input (Constant)
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x03, //   Output (Constant)
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (101)
    0x81, 0x00, //   Input (Data, Array)
    0xC0, // End Collection
];

/// Errors that can occur while decoding a report buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The byte slice is shorter than one report.
    #[error("insufficient data: need {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// Byte 1 must be zero.
    #[error("reserved byte is 0x{0:02X}, expected 0x00")]
    ReservedByteSet(u8),

    /// A key slot other than the first is occupied.
    #[error("key slot {slot} holds 0x{usage:02X}; only one key per report is supported")]
    ExtraKeySlot { slot: usize, usage: u8 },

    /// The primary key slot holds a usage ID this crate does not emit.
    #[error("unknown key usage 0x{0:02X}")]
    UnknownUsage(u8),
}

// ── Modifier byte ─────────────────────────────────────────────────────────────

/// Bitmask carried in byte 0 of every report.
///
/// Bits combine with `|`; order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierFlags(u8);

impl ModifierFlags {
    pub const NONE: Self = Self(0);
    pub const LEFT_CTRL: Self = Self(1 << 0);
    pub const LEFT_SHIFT: Self = Self(1 << 1);
    pub const LEFT_ALT: Self = Self(1 << 2);
    pub const LEFT_GUI: Self = Self(1 << 3);
    pub const RIGHT_CTRL: Self = Self(1 << 4);
    pub const RIGHT_SHIFT: Self = Self(1 << 5);
    pub const RIGHT_ALT: Self = Self(1 << 6);
    pub const RIGHT_GUI: Self = Self(1 << 7);

    /// Wraps a raw modifier byte.  Every bit pattern is valid.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw modifier byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` when no modifier is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ModifierFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModifierFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// One keyboard input report: a modifier mask and at most one held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HidReport {
    pub modifiers: ModifierFlags,
    pub key: HidKeyCode,
}

impl HidReport {
    /// Builds a press report.
    pub fn press(modifiers: ModifierFlags, key: HidKeyCode) -> Self {
        Self { modifiers, key }
    }

    /// The all-keys-released report.
    pub fn release() -> Self {
        Self::default()
    }

    /// Returns `true` for the all-zero release report.
    pub fn is_release(&self) -> bool {
        self.modifiers.is_empty() && self.key.is_no_key()
    }

    /// Encodes the report into its 8-byte wire form.
    pub fn to_bytes(&self) -> [u8; REPORT_SIZE] {
        [self.modifiers.bits(), 0x00, self.key.as_u8(), 0, 0, 0, 0, 0]
    }

    /// Decodes a report from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the buffer is short, the reserved byte is
    /// set, more than one key slot is used, or the key usage is unknown.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        if bytes.len() < REPORT_SIZE {
            return Err(ReportError::InsufficientData {
                needed: REPORT_SIZE,
                available: bytes.len(),
            });
        }
        if bytes[1] != 0 {
            return Err(ReportError::ReservedByteSet(bytes[1]));
        }
        if let Some((offset, &usage)) = bytes[3..REPORT_SIZE]
            .iter()
            .enumerate()
            .find(|&(_, &b)| b != 0)
        {
            return Err(ReportError::ExtraKeySlot {
                slot: offset + 1,
                usage,
            });
        }
        let key = HidKeyCode::from_u8(bytes[2]).ok_or(ReportError::UnknownUsage(bytes[2]))?;
        Ok(Self {
            modifiers: ModifierFlags::from_bits(bytes[0]),
            key,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
