//! Static Sayura lookup tables.
//!
//! Two ordered tables drive the romanization: consonants (with their
//! mahaprana and sagngnaka variants) and vowels (combining sign and
//! standalone letter, each with a lengthened form). Lookups scan in
//! declared order and return the first match. Several keys alias the same
//! glyph and several glyphs appear in more than one row, so the order is
//! load-bearing: never sort or deduplicate these tables.

use libsinhala_core::KeySym;

/// Inherent-vowel killer (al-lakuna).
pub const VIRAMA: char = '\u{0DCA}';
/// Zero-width joiner, inserted to request joined cluster rendering.
pub const ZWJ: char = '\u{200D}';
/// Rayanna, started fresh after a rakaransaya commit.
pub const RAYANNA: char = '\u{0DBB}';
/// Yayanna, started fresh after a yansaya commit.
pub const YAYANNA: char = '\u{0DBA}';

/// One consonant row: the plain glyph, the breathy-voiced (mahaprana) and
/// prenasalized (sagngnaka) variants where the script has them, and the key
/// that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consonant {
    pub base: char,
    pub mahaprana: Option<char>,
    pub sagngnaka: Option<char>,
    pub key: char,
}

/// One vowel row: the combining sign used after a consonant, the standalone
/// letter used otherwise, and the lengthened form of each. `None` marks
/// sign slots the table has no glyph for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vowel {
    pub sign: Option<char>,
    pub long_sign: Option<char>,
    pub standalone: char,
    pub long_standalone: char,
    pub key: char,
}

/// Consonant rows in scan order.
///
/// The marker keys (w W R Y for glides, H for aspiration, G for
/// prenasalization) have rows of their own so a press with nothing pending
/// still produces a glyph; `w`/`v` are the alias pair for wayanna and the
/// `w` row is deliberately first of the two.
pub const CONSONANTS: &[Consonant] = &[
    Consonant { base: '\u{0DA4}', mahaprana: None, sagngnaka: None, key: 'z' },                              // ඤ
    Consonant { base: '\u{0DA5}', mahaprana: None, sagngnaka: None, key: 'Z' },                              // ඥ
    Consonant { base: '\u{0DC0}', mahaprana: None, sagngnaka: None, key: 'w' },                              // ව, conjunct glide
    Consonant { base: '\u{0DC0}', mahaprana: None, sagngnaka: None, key: 'W' },                              // ව, touching glide
    Consonant { base: '\u{0DBB}', mahaprana: None, sagngnaka: None, key: 'r' },                              // ර
    Consonant { base: '\u{0DBB}', mahaprana: None, sagngnaka: None, key: 'R' },                              // ර, rakaransaya
    Consonant { base: '\u{0DAD}', mahaprana: Some('\u{0DAE}'), sagngnaka: None, key: 't' },                  // ත ථ
    Consonant { base: '\u{0DA7}', mahaprana: Some('\u{0DA8}'), sagngnaka: Some('\u{0DAC}'), key: 'T' },      // ට ඨ ඬ
    Consonant { base: '\u{0DBA}', mahaprana: None, sagngnaka: None, key: 'y' },                              // ය
    Consonant { base: '\u{0DBA}', mahaprana: None, sagngnaka: None, key: 'Y' },                              // ය, yansaya
    Consonant { base: '\u{0DB4}', mahaprana: Some('\u{0DB5}'), sagngnaka: None, key: 'p' },                  // ප ඵ
    Consonant { base: '\u{0DC3}', mahaprana: Some('\u{0DC2}'), sagngnaka: None, key: 's' },                  // ස ෂ
    Consonant { base: '\u{0DC1}', mahaprana: None, sagngnaka: None, key: 'S' },                              // ශ
    Consonant { base: '\u{0DAF}', mahaprana: Some('\u{0DB0}'), sagngnaka: Some('\u{0DB3}'), key: 'd' },      // ද ධ ඳ
    Consonant { base: '\u{0DA9}', mahaprana: Some('\u{0DAA}'), sagngnaka: Some('\u{0DAC}'), key: 'D' },      // ඩ ඪ ඬ
    Consonant { base: '\u{0DC6}', mahaprana: None, sagngnaka: None, key: 'f' },                              // ෆ
    Consonant { base: '\u{0D9C}', mahaprana: Some('\u{0D9D}'), sagngnaka: Some('\u{0D9F}'), key: 'g' },      // ග ඝ ඟ
    Consonant { base: '\u{0D9F}', mahaprana: None, sagngnaka: None, key: 'G' },                              // ඟ, sagngnaka marker
    Consonant { base: '\u{0DC4}', mahaprana: None, sagngnaka: None, key: 'h' },                              // හ
    Consonant { base: '\u{0D83}', mahaprana: None, sagngnaka: None, key: 'H' },                              // ඃ, mahaprana marker
    Consonant { base: '\u{0DA2}', mahaprana: Some('\u{0DA3}'), sagngnaka: Some('\u{0DA6}'), key: 'j' },      // ජ ඣ ඦ
    Consonant { base: '\u{0D9A}', mahaprana: Some('\u{0D9B}'), sagngnaka: None, key: 'k' },                  // ක ඛ
    Consonant { base: '\u{0DBD}', mahaprana: None, sagngnaka: None, key: 'l' },                              // ල
    Consonant { base: '\u{0DC5}', mahaprana: None, sagngnaka: None, key: 'L' },                              // ළ
    Consonant { base: '\u{0DB8}', mahaprana: None, sagngnaka: None, key: 'm' },                              // ම
    Consonant { base: '\u{0DB1}', mahaprana: None, sagngnaka: None, key: 'n' },                              // න
    Consonant { base: '\u{0DAB}', mahaprana: None, sagngnaka: None, key: 'N' },                              // ණ
    Consonant { base: '\u{0DB6}', mahaprana: Some('\u{0DB7}'), sagngnaka: Some('\u{0DB9}'), key: 'b' },      // බ භ ඹ
    Consonant { base: '\u{0DA0}', mahaprana: Some('\u{0DA1}'), sagngnaka: None, key: 'c' },                  // ච ඡ
    Consonant { base: '\u{0DC0}', mahaprana: None, sagngnaka: None, key: 'v' },                              // ව, alias of w
    Consonant { base: '\u{0D82}', mahaprana: None, sagngnaka: None, key: 'x' },                              // ං
    Consonant { base: '\u{0D9E}', mahaprana: None, sagngnaka: None, key: 'X' },                              // ඞ
];

/// Vowel rows. Lowercase keys are the short forms, uppercase the long
/// ones; a long-form key repeated keeps its glyph rather than growing a
/// third state.
pub const VOWELS: &[Vowel] = &[
    Vowel { sign: Some('\u{0DCF}'), long_sign: Some('\u{0DCF}'), standalone: '\u{0D85}', long_standalone: '\u{0D86}', key: 'a' }, // අ ආ ා
    Vowel { sign: Some('\u{0DD0}'), long_sign: Some('\u{0DD1}'), standalone: '\u{0D87}', long_standalone: '\u{0D88}', key: 'A' }, // ඇ ඈ ැ ෑ
    Vowel { sign: Some('\u{0DD2}'), long_sign: Some('\u{0DD3}'), standalone: '\u{0D89}', long_standalone: '\u{0D8A}', key: 'i' }, // ඉ ඊ ි ී
    Vowel { sign: Some('\u{0DD3}'), long_sign: Some('\u{0DD3}'), standalone: '\u{0D8A}', long_standalone: '\u{0D8A}', key: 'I' }, // ඊ ී
    Vowel { sign: Some('\u{0DD4}'), long_sign: Some('\u{0DD6}'), standalone: '\u{0D8B}', long_standalone: '\u{0D8C}', key: 'u' }, // උ ඌ ු ූ
    Vowel { sign: Some('\u{0DD6}'), long_sign: Some('\u{0DD6}'), standalone: '\u{0D8C}', long_standalone: '\u{0D8C}', key: 'U' }, // ඌ ූ
    Vowel { sign: Some('\u{0DD9}'), long_sign: Some('\u{0DDA}'), standalone: '\u{0D91}', long_standalone: '\u{0D92}', key: 'e' }, // එ ඒ ෙ ේ
    Vowel { sign: Some('\u{0DDA}'), long_sign: Some('\u{0DDA}'), standalone: '\u{0D92}', long_standalone: '\u{0D92}', key: 'E' }, // ඒ ේ
    Vowel { sign: Some('\u{0DDC}'), long_sign: Some('\u{0DDD}'), standalone: '\u{0D94}', long_standalone: '\u{0D95}', key: 'o' }, // ඔ ඕ ො ෝ
    Vowel { sign: Some('\u{0DDD}'), long_sign: Some('\u{0DDD}'), standalone: '\u{0D95}', long_standalone: '\u{0D95}', key: 'O' }, // ඕ ෝ
];

/// First consonant row whose key matches `sym`, if any.
pub fn find_consonant_by_key(sym: KeySym) -> Option<usize> {
    let ch = sym.to_char()?;
    CONSONANTS.iter().position(|c| c.key == ch)
}

/// First vowel row whose key matches `sym`, if any.
pub fn find_vowel_by_key(sym: KeySym) -> Option<usize> {
    let ch = sym.to_char()?;
    VOWELS.iter().position(|v| v.key == ch)
}

/// First consonant row containing `cp` as its base or one of its variants.
///
/// Recovers which row the glyph at the head of the preedit buffer belongs
/// to, so a marker key can rewrite the syllable in progress.
pub fn find_consonant(cp: char) -> Option<usize> {
    CONSONANTS.iter().position(|c| {
        c.base == cp || c.mahaprana == Some(cp) || c.sagngnaka == Some(cp)
    })
}

/// Range test over the Sinhala consonant block.
pub fn is_consonant(cp: char) -> bool {
    ('\u{0D9A}'..='\u{0DC6}').contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup_finds_kayanna() {
        let idx = find_consonant_by_key(KeySym::from_char('k')).expect("k is mapped");
        assert_eq!(CONSONANTS[idx].base, '\u{0D9A}');
        assert_eq!(CONSONANTS[idx].mahaprana, Some('\u{0D9B}'));
    }

    #[test]
    fn test_wayanna_alias_resolves_to_first_row() {
        let w = find_consonant_by_key(KeySym::from_char('w')).expect("w is mapped");
        let v = find_consonant_by_key(KeySym::from_char('v')).expect("v is mapped");
        assert_ne!(w, v);
        assert_eq!(CONSONANTS[w].base, CONSONANTS[v].base);

        // Looking the shared glyph up again lands on the earliest row.
        assert_eq!(find_consonant('\u{0DC0}'), Some(w));
    }

    #[test]
    fn test_find_consonant_matches_variants() {
        let g = find_consonant_by_key(KeySym::from_char('g')).expect("g is mapped");
        assert_eq!(find_consonant('\u{0D9D}'), Some(g)); // mahaprana ඝ
        assert_eq!(find_consonant('\u{0D9F}'), Some(g)); // sagngnaka ඟ, before the G row
        assert_eq!(find_consonant('\u{0DCF}'), None); // vowel sign is no consonant
    }

    #[test]
    fn test_consonant_range() {
        assert!(is_consonant('\u{0D9A}'));
        assert!(is_consonant('\u{0DC6}'));
        assert!(!is_consonant('\u{0D99}'));
        assert!(!is_consonant('\u{0DC7}'));
        assert!(!is_consonant('\u{0D85}')); // standalone vowel
        assert!(!is_consonant('\u{0D82}')); // anusvara sits below the block
    }

    #[test]
    fn test_vowel_anchor_values() {
        let a = find_vowel_by_key(KeySym::from_char('a')).expect("a is mapped");
        assert_eq!(VOWELS[a].sign, Some('\u{0DCF}'));
        assert_eq!(VOWELS[a].standalone, '\u{0D85}');
        assert_eq!(VOWELS[a].long_standalone, '\u{0D86}');
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(find_consonant_by_key(KeySym::from_char('1')), None);
        assert_eq!(find_vowel_by_key(KeySym::from_char('q')), None);
        assert_eq!(find_consonant_by_key(KeySym::ESCAPE), None);
    }
}
