//! Pure, total functions over a Unicode scalar value: category flags, case
//! conversion, accent stripping and ligature expansion.
//!
//! These mirror the inline helpers of a classic nullable-page-table Unicode
//! property module: every function is total (never panics, never fails) and
//! falls back to "no data" (category 0, identity case mapping, no
//! expansion) for any code point outside the populated blocks in
//! [`crate::unicode_tables`].

use crate::unicode_tables::{self, CAT_LETTER, CAT_LIGATURE};

/// Bitwise-OR of the `CAT_*` flags from [`crate::unicode_tables`] that apply
/// to `code`. Zero means no property data is available (or scalar is a
/// pure symbol with no assigned category in the populated blocks).
pub fn category(code: u32) -> u8 {
    let page = (code >> 8) as u8;
    let offset = (code & 0xFF) as usize;
    if code > 0xFFFF {
        return 0;
    }
    unicode_tables::category_page(page)
        .map(|p| p[offset])
        .unwrap_or(0)
}

#[inline]
pub fn is_letter(code: u32) -> bool {
    category(code) & CAT_LETTER != 0
}

#[inline]
pub fn is_upper(code: u32) -> bool {
    category(code) & unicode_tables::CAT_UPPER != 0
}

#[inline]
pub fn is_lower(code: u32) -> bool {
    category(code) & unicode_tables::CAT_LOWER != 0
}

#[inline]
pub fn is_digit(code: u32) -> bool {
    category(code) & unicode_tables::CAT_DIGIT != 0
}

#[inline]
pub fn is_space(code: u32) -> bool {
    category(code) & unicode_tables::CAT_SPACE != 0
}

#[inline]
pub fn is_ctrl(code: u32) -> bool {
    category(code) & unicode_tables::CAT_CTRL != 0
}

/// Returns the uppercase form of `code`, or `code` unchanged if it has none
/// (already uppercase, not a cased letter, or outside the populated blocks).
pub fn to_upper(code: u32) -> u32 {
    if code > 0xFFFF {
        return code;
    }
    let page = (code >> 8) as u8;
    let offset = (code & 0xFF) as usize;
    match unicode_tables::upper_page(page) {
        Some(page) if page[offset] != 0 => page[offset],
        _ => code,
    }
}

/// Returns the lowercase form of `code`, or `code` unchanged if it has none.
pub fn to_lower(code: u32) -> u32 {
    if code > 0xFFFF {
        return code;
    }
    let page = (code >> 8) as u8;
    let offset = (code & 0xFF) as usize;
    match unicode_tables::lower_page(page) {
        Some(page) if page[offset] != 0 => page[offset],
        _ => code,
    }
}

/// Strips diacritics from Latin-1 Supplement letters (`é` -> `e`), leaving
/// everything else unchanged. A minimal, table-free stand-in for a full
/// Unicode decomposition pass.
pub fn unaccent(code: u32) -> u32 {
    match code {
        0x00C0..=0x00C5 | 0x00E0..=0x00E5 => base_vowel(code, b'a', b'A'),
        0x00C8..=0x00CB | 0x00E8..=0x00EB => base_vowel(code, b'e', b'E'),
        0x00CC..=0x00CF | 0x00EC..=0x00EF => base_vowel(code, b'i', b'I'),
        0x00D2..=0x00D6 | 0x00F2..=0x00F6 => base_vowel(code, b'o', b'O'),
        0x00D9..=0x00DC | 0x00F9..=0x00FC => base_vowel(code, b'u', b'U'),
        0x00D1 => b'N' as u32,
        0x00F1 => b'n' as u32,
        0x00C7 => b'C' as u32,
        0x00E7 => b'c' as u32,
        0x00DD | 0x0178 => b'Y' as u32,
        0x00FD | 0x00FF => b'y' as u32,
        _ => code,
    }
}

fn base_vowel(code: u32, lower: u8, upper: u8) -> u32 {
    if code.is_ascii_lowercase_scalar() {
        lower as u32
    } else {
        upper as u32
    }
}

trait AsciiCaseScalar {
    fn is_ascii_lowercase_scalar(&self) -> bool;
}
impl AsciiCaseScalar for u32 {
    fn is_ascii_lowercase_scalar(&self) -> bool {
        // Latin-1 Supplement lowercase letters all sit at or above 0xE0,
        // uppercase below it; `Ç`/`ç`, `Ñ`/`ñ` etc. are handled separately.
        *self >= 0xE0
    }
}

/// Expands a ligature into its constituent letters as UTF-16 code units
/// (`\u{FB01}` "ﬁ" -> `['f' as u16, 'i' as u16]`), or returns `None` if
/// `code` is not a known ligature.
pub fn expand_ligature(code: u32) -> Option<&'static [u16]> {
    match code {
        0xFB00 => Some(&[0x0066, 0x0066]),       // ff
        0xFB01 => Some(&[0x0066, 0x0069]),       // fi
        0xFB02 => Some(&[0x0066, 0x006C]),       // fl
        0xFB03 => Some(&[0x0066, 0x0066, 0x0069]), // ffi
        0xFB04 => Some(&[0x0066, 0x0066, 0x006C]), // ffl
        0x0152 => Some(&[0x004F, 0x0045]),       // OE
        0x0153 => Some(&[0x006F, 0x0065]),       // oe
        0x00C6 => Some(&[0x0041, 0x0045]),       // AE
        0x00E6 => Some(&[0x0061, 0x0065]),       // ae
        _ => None,
    }
}

#[inline]
pub fn has_ligature(code: u32) -> bool {
    category(code) & CAT_LIGATURE != 0 || expand_ligature(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_categorize() {
        assert!(is_upper('A' as u32));
        assert!(is_lower('z' as u32));
        assert!(is_digit('5' as u32));
        assert!(!is_letter('5' as u32));
        assert!(is_space(' ' as u32));
        assert!(is_ctrl(0x07));
    }

    #[test]
    fn case_conversion_round_trips_ascii() {
        assert_eq!(to_upper('a' as u32), 'A' as u32);
        assert_eq!(to_lower('A' as u32), 'a' as u32);
        assert_eq!(to_upper('A' as u32), 'A' as u32);
    }

    #[test]
    fn case_conversion_covers_latin1_and_cyrillic() {
        assert_eq!(to_upper(0x00E9), 0x00C9); // é -> É
        assert_eq!(to_lower(0x0410), 0x0430); // А -> а
        assert_eq!(to_upper(0x03B1), 0x0391); // α -> Α
    }

    #[test]
    fn unmapped_code_point_is_identity() {
        assert_eq!(to_upper(0x4E2D), 0x4E2D); // 中, outside populated blocks
        assert_eq!(category(0x1F600), 0);
    }

    #[test]
    fn unaccent_strips_latin1_diacritics() {
        assert_eq!(unaccent(0x00E9), b'e' as u32); // é
        assert_eq!(unaccent(0x00C9), b'E' as u32); // É
        assert_eq!(unaccent('x' as u32), 'x' as u32);
    }

    #[test]
    fn ligature_expansion() {
        assert_eq!(expand_ligature(0xFB01), Some(&[0x0066u16, 0x0069][..]));
        assert_eq!(expand_ligature('a' as u32), None);
        assert!(has_ligature(0xFB01));
    }
}
