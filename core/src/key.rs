//! Key symbols and modifier state as delivered by the host framework.
//!
//! The host hands the engine X11-style key symbols together with the raw
//! modifier bitmask, already filtered of any hotkeys the framework claims
//! for itself. Printable Latin-1 keys are their own symbol values, which is
//! what lets the transliteration tables index directly by character.

/// X11-style key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySym(pub u32);

impl KeySym {
    pub const ESCAPE: KeySym = KeySym(0xff1b);
    pub const BACKSPACE: KeySym = KeySym(0xff08);
    pub const SPACE: KeySym = KeySym(0x0020);

    /// Symbol for a printable character.
    pub fn from_char(ch: char) -> Self {
        KeySym(ch as u32)
    }

    /// The printable ASCII character this symbol stands for, if any.
    pub fn to_char(self) -> Option<char> {
        if (0x20..0x7f).contains(&self.0) {
            char::from_u32(self.0)
        } else {
            None
        }
    }
}

/// Modifier bitmask accompanying a key event.
///
/// Shift is carried for completeness but participates in selecting the
/// symbol itself (uppercase keys arrive as their own symbols), so engines
/// test against [`Modifiers::ACTION_MASK`] when deciding whether a key
/// combination belongs to the application instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1 << 0);
    pub const CONTROL: Modifiers = Modifiers(1 << 2);
    pub const ALT: Modifiers = Modifiers(1 << 3);

    /// The modifiers that turn a key press into a command chord.
    pub const ACTION_MASK: Modifiers = Modifiers(Self::CONTROL.0 | Self::ALT.0);

    /// Check if no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if any bit of `other` is set in `self`.
    pub fn intersects(self, other: Modifiers) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if every bit of `other` is set in `self`.
    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// A single key press as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub sym: KeySym,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create an event from a symbol and modifier state.
    pub fn new(sym: KeySym, modifiers: Modifiers) -> Self {
        Self { sym, modifiers }
    }

    /// Plain (unmodified) printable key.
    pub fn from_char(ch: char) -> Self {
        Self {
            sym: KeySym::from_char(ch),
            modifiers: Modifiers::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_roundtrip() {
        assert_eq!(KeySym::from_char('k').to_char(), Some('k'));
        assert_eq!(KeySym::from_char('W').to_char(), Some('W'));
        assert_eq!(KeySym::from_char(' '), KeySym::SPACE);
    }

    #[test]
    fn test_control_keys_are_not_printable() {
        assert_eq!(KeySym::ESCAPE.to_char(), None);
        assert_eq!(KeySym::BACKSPACE.to_char(), None);
    }

    #[test]
    fn test_modifier_bits() {
        let mods = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(!mods.is_empty());
        assert!(mods.contains(Modifiers::CONTROL));
        assert!(mods.intersects(Modifiers::ACTION_MASK));
        assert!(!Modifiers::SHIFT.intersects(Modifiers::ACTION_MASK));
    }

    #[test]
    fn test_from_char_event() {
        let event = KeyEvent::from_char('a');
        assert_eq!(event.sym, KeySym(0x61));
        assert!(event.modifiers.is_empty());
    }
}
