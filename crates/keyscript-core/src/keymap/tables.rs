//! Static lookup tables for key names, shifted characters, modifiers and
//! script token aliases.
//!
//! All tables are `const` slices: they live in read-only memory, need no
//! initialisation and can be read from any thread without locking.

use crate::keymap::hid::HidKeyCode;
use crate::protocol::report::ModifierFlags;

/// Key name → HID usage ID.  Names are lower-case; single-character names are
/// the unshifted character printed on the key.
pub const KEYCODE_TABLE: &[(&str, HidKeyCode)] = &[
    ("a", HidKeyCode::KeyA),
    ("b", HidKeyCode::KeyB),
    ("c", HidKeyCode::KeyC),
    ("d", HidKeyCode::KeyD),
    ("e", HidKeyCode::KeyE),
    ("f", HidKeyCode::KeyF),
    ("g", HidKeyCode::KeyG),
    ("h", HidKeyCode::KeyH),
    ("i", HidKeyCode::KeyI),
    ("j", HidKeyCode::KeyJ),
    ("k", HidKeyCode::KeyK),
    ("l", HidKeyCode::KeyL),
    ("m", HidKeyCode::KeyM),
    ("n", HidKeyCode::KeyN),
    ("o", HidKeyCode::KeyO),
    ("p", HidKeyCode::KeyP),
    ("q", HidKeyCode::KeyQ),
    ("r", HidKeyCode::KeyR),
    ("s", HidKeyCode::KeyS),
    ("t", HidKeyCode::KeyT),
    ("u", HidKeyCode::KeyU),
    ("v", HidKeyCode::KeyV),
    ("w", HidKeyCode::KeyW),
    ("x", HidKeyCode::KeyX),
    ("y", HidKeyCode::KeyY),
    ("z", HidKeyCode::KeyZ),
    ("1", HidKeyCode::Digit1),
    ("2", HidKeyCode::Digit2),
    ("3", HidKeyCode::Digit3),
    ("4", HidKeyCode::Digit4),
    ("5", HidKeyCode::Digit5),
    ("6", HidKeyCode::Digit6),
    ("7", HidKeyCode::Digit7),
    ("8", HidKeyCode::Digit8),
    ("9", HidKeyCode::Digit9),
    ("0", HidKeyCode::Digit0),
    ("enter", HidKeyCode::Enter),
    ("esc", HidKeyCode::Escape),
    ("backspace", HidKeyCode::Backspace),
    ("tab", HidKeyCode::Tab),
    ("space", HidKeyCode::Space),
    (" ", HidKeyCode::Space),
    ("-", HidKeyCode::Minus),
    ("=", HidKeyCode::Equal),
    ("[", HidKeyCode::BracketLeft),
    ("]", HidKeyCode::BracketRight),
    ("\\", HidKeyCode::Backslash),
    (";", HidKeyCode::Semicolon),
    ("'", HidKeyCode::Quote),
    ("`", HidKeyCode::Backquote),
    (",", HidKeyCode::Comma),
    (".", HidKeyCode::Period),
    ("/", HidKeyCode::Slash),
    ("caps", HidKeyCode::CapsLock),
    ("f1", HidKeyCode::F1),
    ("f2", HidKeyCode::F2),
    ("f3", HidKeyCode::F3),
    ("f4", HidKeyCode::F4),
    ("f5", HidKeyCode::F5),
    ("f6", HidKeyCode::F6),
    ("f7", HidKeyCode::F7),
    ("f8", HidKeyCode::F8),
    ("f9", HidKeyCode::F9),
    ("f10", HidKeyCode::F10),
    ("f11", HidKeyCode::F11),
    ("f12", HidKeyCode::F12),
    ("print", HidKeyCode::PrintScreen),
    ("scroll", HidKeyCode::ScrollLock),
    ("pause", HidKeyCode::Pause),
    ("insert", HidKeyCode::Insert),
    ("home", HidKeyCode::Home),
    ("pageup", HidKeyCode::PageUp),
    ("delete", HidKeyCode::Delete),
    ("end", HidKeyCode::End),
    ("pagedown", HidKeyCode::PageDown),
    ("right", HidKeyCode::ArrowRight),
    ("left", HidKeyCode::ArrowLeft),
    ("down", HidKeyCode::ArrowDown),
    ("up", HidKeyCode::ArrowUp),
    ("app", HidKeyCode::ContextMenu),
];

/// Character that needs Shift → name of the key that produces it (US layout).
pub const SHIFT_TABLE: &[(char, &str)] = &[
    ('!', "1"),
    ('@', "2"),
    ('#', "3"),
    ('$', "4"),
    ('%', "5"),
    ('^', "6"),
    ('&', "7"),
    ('*', "8"),
    ('(', "9"),
    (')', "0"),
    ('_', "-"),
    ('+', "="),
    ('{', "["),
    ('}', "]"),
    ('|', "\\"),
    (':', ";"),
    ('"', "'"),
    ('<', ","),
    ('>', "."),
    ('?', "/"),
    ('~', "`"),
    ('A', "a"),
    ('B', "b"),
    ('C', "c"),
    ('D', "d"),
    ('E', "e"),
    ('F', "f"),
    ('G', "g"),
    ('H', "h"),
    ('I', "i"),
    ('J', "j"),
    ('K', "k"),
    ('L', "l"),
    ('M', "m"),
    ('N', "n"),
    ('O', "o"),
    ('P', "p"),
    ('Q', "q"),
    ('R', "r"),
    ('S', "s"),
    ('T', "t"),
    ('U', "u"),
    ('V', "v"),
    ('W', "w"),
    ('X', "x"),
    ('Y', "y"),
    ('Z', "z"),
];

/// Modifier name → bit in the report's modifier byte.
pub const MODIFIER_TABLE: &[(&str, ModifierFlags)] = &[
    ("ctrl", ModifierFlags::LEFT_CTRL),
    ("shift", ModifierFlags::LEFT_SHIFT),
    ("alt", ModifierFlags::LEFT_ALT),
    ("gui", ModifierFlags::LEFT_GUI),
    ("right_ctrl", ModifierFlags::RIGHT_CTRL),
    ("right_shift", ModifierFlags::RIGHT_SHIFT),
    ("right_alt", ModifierFlags::RIGHT_ALT),
    ("right_gui", ModifierFlags::RIGHT_GUI),
];

/// Upper-case script token → internal key or modifier name.
pub const SCRIPT_ALIAS_TABLE: &[(&str, &str)] = &[
    ("GUI", "gui"),
    ("WINDOWS", "gui"),
    ("CTRL", "ctrl"),
    ("CONTROL", "ctrl"),
    ("SHIFT", "shift"),
    ("ALT", "alt"),
    ("ENTER", "enter"),
    ("ESCAPE", "esc"),
    ("ESC", "esc"),
    ("TAB", "tab"),
    ("SPACE", "space"),
    ("BACKSPACE", "backspace"),
    ("DELETE", "delete"),
    ("HOME", "home"),
    ("END", "end"),
    ("PAGEUP", "pageup"),
    ("PAGEDOWN", "pagedown"),
    ("UP", "up"),
    ("DOWN", "down"),
    ("LEFT", "left"),
    ("RIGHT", "right"),
    ("UPARROW", "up"),
    ("DOWNARROW", "down"),
    ("LEFTARROW", "left"),
    ("RIGHTARROW", "right"),
    ("F1", "f1"),
    ("F2", "f2"),
    ("F3", "f3"),
    ("F4", "f4"),
    ("F5", "f5"),
    ("F6", "f6"),
    ("F7", "f7"),
    ("F8", "f8"),
    ("F9", "f9"),
    ("F10", "f10"),
    ("F11", "f11"),
    ("F12", "f12"),
    ("CAPSLOCK", "caps"),
    ("PRINTSCREEN", "print"),
    ("SCROLLLOCK", "scroll"),
    ("PAUSE", "pause"),
    ("BREAK", "pause"),
    ("INSERT", "insert"),
    ("MENU", "app"),
];
