//! The fixed set of charsets this crate can convert between, and a
//! case-insensitive name registry for looking one up.

use crate::tables::single_byte::*;
use crate::tables::LegacyCharset;

/// A charset this crate knows how to read or write.
///
/// `Utf8`/`Utf16Be`/`Utf16Le` are handled directly by the converter's fast
/// and slow paths; everything else is a [`LegacyCharset`] table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CharsetId {
    Utf8,
    Utf16Be,
    Utf16Le,
    UsAscii,
    Iso8859_1,
    Iso8859_2,
    Iso8859_3,
    Iso8859_4,
    Iso8859_5,
    Iso8859_6,
    Iso8859_7,
    Iso8859_8,
    Iso8859_9,
    Iso8859_10,
    Iso8859_11,
    Iso8859_13,
    Iso8859_14,
    Iso8859_15,
    Iso8859_16,
    Windows1250,
    Windows1251,
    Windows1252,
    Windows1253,
    Windows1254,
    Windows1255,
    Windows1256,
    Windows1257,
    Windows1258,
    Koi8R,
    Cp437,
    Cp852,
    Macintosh,
}

impl CharsetId {
    /// Every charset this crate supports. Used by the registry and by
    /// exhaustive tests; keep in sync with the `match` in [`lookup`].
    pub const ALL: &'static [CharsetId] = &[
        CharsetId::Utf8,
        CharsetId::Utf16Be,
        CharsetId::Utf16Le,
        CharsetId::UsAscii,
        CharsetId::Iso8859_1,
        CharsetId::Iso8859_2,
        CharsetId::Iso8859_3,
        CharsetId::Iso8859_4,
        CharsetId::Iso8859_5,
        CharsetId::Iso8859_6,
        CharsetId::Iso8859_7,
        CharsetId::Iso8859_8,
        CharsetId::Iso8859_9,
        CharsetId::Iso8859_10,
        CharsetId::Iso8859_11,
        CharsetId::Iso8859_13,
        CharsetId::Iso8859_14,
        CharsetId::Iso8859_15,
        CharsetId::Iso8859_16,
        CharsetId::Windows1250,
        CharsetId::Windows1251,
        CharsetId::Windows1252,
        CharsetId::Windows1253,
        CharsetId::Windows1254,
        CharsetId::Windows1255,
        CharsetId::Windows1256,
        CharsetId::Windows1257,
        CharsetId::Windows1258,
        CharsetId::Koi8R,
        CharsetId::Cp437,
        CharsetId::Cp852,
        CharsetId::Macintosh,
    ];

    /// Canonical display name, also accepted (case-insensitively) by [`lookup`].
    pub fn name(self) -> &'static str {
        match self {
            CharsetId::Utf8 => "UTF-8",
            CharsetId::Utf16Be => "UTF-16BE",
            CharsetId::Utf16Le => "UTF-16LE",
            CharsetId::UsAscii => "US-ASCII",
            CharsetId::Iso8859_1 => "ISO-8859-1",
            CharsetId::Iso8859_2 => "ISO-8859-2",
            CharsetId::Iso8859_3 => "ISO-8859-3",
            CharsetId::Iso8859_4 => "ISO-8859-4",
            CharsetId::Iso8859_5 => "ISO-8859-5",
            CharsetId::Iso8859_6 => "ISO-8859-6",
            CharsetId::Iso8859_7 => "ISO-8859-7",
            CharsetId::Iso8859_8 => "ISO-8859-8",
            CharsetId::Iso8859_9 => "ISO-8859-9",
            CharsetId::Iso8859_10 => "ISO-8859-10",
            CharsetId::Iso8859_11 => "ISO-8859-11",
            CharsetId::Iso8859_13 => "ISO-8859-13",
            CharsetId::Iso8859_14 => "ISO-8859-14",
            CharsetId::Iso8859_15 => "ISO-8859-15",
            CharsetId::Iso8859_16 => "ISO-8859-16",
            CharsetId::Windows1250 => "Windows-1250",
            CharsetId::Windows1251 => "Windows-1251",
            CharsetId::Windows1252 => "Windows-1252",
            CharsetId::Windows1253 => "Windows-1253",
            CharsetId::Windows1254 => "Windows-1254",
            CharsetId::Windows1255 => "Windows-1255",
            CharsetId::Windows1256 => "Windows-1256",
            CharsetId::Windows1257 => "Windows-1257",
            CharsetId::Windows1258 => "Windows-1258",
            CharsetId::Koi8R => "KOI8-R",
            CharsetId::Cp437 => "CP437",
            CharsetId::Cp852 => "CP852",
            CharsetId::Macintosh => "Macintosh",
        }
    }

    /// The legacy table backing this charset, or `None` for the three
    /// Unicode transformation formats the converter handles natively.
    pub fn legacy_table(self) -> Option<&'static LegacyCharset> {
        Some(match self {
            CharsetId::Utf8 | CharsetId::Utf16Be | CharsetId::Utf16Le => return None,
            CharsetId::UsAscii => &TABLE_US_ASCII,
            CharsetId::Iso8859_1 => &TABLE_ISO_8859_1,
            CharsetId::Iso8859_2 => &TABLE_ISO_8859_2,
            CharsetId::Iso8859_3 => &TABLE_ISO_8859_3,
            CharsetId::Iso8859_4 => &TABLE_ISO_8859_4,
            CharsetId::Iso8859_5 => &TABLE_ISO_8859_5,
            CharsetId::Iso8859_6 => &TABLE_ISO_8859_6,
            CharsetId::Iso8859_7 => &TABLE_ISO_8859_7,
            CharsetId::Iso8859_8 => &TABLE_ISO_8859_8,
            CharsetId::Iso8859_9 => &TABLE_ISO_8859_9,
            CharsetId::Iso8859_10 => &TABLE_ISO_8859_10,
            CharsetId::Iso8859_11 => &TABLE_ISO_8859_11,
            CharsetId::Iso8859_13 => &TABLE_ISO_8859_13,
            CharsetId::Iso8859_14 => &TABLE_ISO_8859_14,
            CharsetId::Iso8859_15 => &TABLE_ISO_8859_15,
            CharsetId::Iso8859_16 => &TABLE_ISO_8859_16,
            CharsetId::Windows1250 => &TABLE_WINDOWS_1250,
            CharsetId::Windows1251 => &TABLE_WINDOWS_1251,
            CharsetId::Windows1252 => &TABLE_WINDOWS_1252,
            CharsetId::Windows1253 => &TABLE_WINDOWS_1253,
            CharsetId::Windows1254 => &TABLE_WINDOWS_1254,
            CharsetId::Windows1255 => &TABLE_WINDOWS_1255,
            CharsetId::Windows1256 => &TABLE_WINDOWS_1256,
            CharsetId::Windows1257 => &TABLE_WINDOWS_1257,
            CharsetId::Windows1258 => &TABLE_WINDOWS_1258,
            CharsetId::Koi8R => &TABLE_KOI8_R,
            CharsetId::Cp437 => &TABLE_CP437,
            CharsetId::Cp852 => &TABLE_CP852,
            CharsetId::Macintosh => &TABLE_MACINTOSH,
        })
    }
}

/// Looks up a charset by name, ignoring case and a handful of common
/// punctuation variants (`ISO-8859-1`, `iso8859-1` and `Latin1` all match).
pub fn lookup(name: &str) -> Option<CharsetId> {
    let normalized = normalize(name);
    CharsetId::ALL
        .iter()
        .copied()
        .find(|id| normalize(id.name()) == normalized || matches_alias(*id, &normalized))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn matches_alias(id: CharsetId, normalized: &str) -> bool {
    let aliases: &[&str] = match id {
        CharsetId::Utf8 => &["utf8"],
        CharsetId::Utf16Be => &["utf16", "utf16be", "ucs2be"],
        CharsetId::Utf16Le => &["utf16le", "ucs2le"],
        CharsetId::UsAscii => &["ascii", "us", "isoir6", "ansix341968"],
        CharsetId::Iso8859_1 => &["latin1", "l1"],
        CharsetId::Iso8859_2 => &["latin2", "l2"],
        CharsetId::Iso8859_3 => &["latin3", "l3"],
        CharsetId::Iso8859_4 => &["latin4", "l4"],
        CharsetId::Iso8859_5 => &["cyrillic"],
        CharsetId::Iso8859_6 => &["arabic"],
        CharsetId::Iso8859_7 => &["greek"],
        CharsetId::Iso8859_8 => &["hebrew"],
        CharsetId::Iso8859_9 => &["latin5", "l5", "turkish"],
        CharsetId::Iso8859_10 => &["latin6", "l6"],
        CharsetId::Iso8859_11 => &["thai", "tis620"],
        CharsetId::Iso8859_13 => &["latin7", "l7"],
        CharsetId::Iso8859_14 => &["latin8", "l8", "celtic"],
        CharsetId::Iso8859_15 => &["latin9", "l9"],
        CharsetId::Iso8859_16 => &["latin10", "l10"],
        CharsetId::Windows1250 => &["cp1250"],
        CharsetId::Windows1251 => &["cp1251"],
        CharsetId::Windows1252 => &["cp1252"],
        CharsetId::Windows1253 => &["cp1253"],
        CharsetId::Windows1254 => &["cp1254"],
        CharsetId::Windows1255 => &["cp1255"],
        CharsetId::Windows1256 => &["cp1256"],
        CharsetId::Windows1257 => &["cp1257"],
        CharsetId::Windows1258 => &["cp1258"],
        CharsetId::Koi8R => &["koi8"],
        CharsetId::Cp437 => &["ibm437", "oem437"],
        CharsetId::Cp852 => &["ibm852", "oem852"],
        CharsetId::Macintosh => &["macroman", "mac"],
    };
    aliases.iter().any(|a| *a == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for id in CharsetId::ALL {
            assert_eq!(lookup(id.name()), Some(*id), "{}", id.name());
        }
    }

    #[test]
    fn lookup_is_case_and_punctuation_insensitive() {
        assert_eq!(lookup("iso-8859-1"), Some(CharsetId::Iso8859_1));
        assert_eq!(lookup("ISO8859-1"), Some(CharsetId::Iso8859_1));
        assert_eq!(lookup("latin1"), Some(CharsetId::Iso8859_1));
        assert_eq!(lookup("Windows-1251"), Some(CharsetId::Windows1251));
        assert_eq!(lookup("cp1251"), Some(CharsetId::Windows1251));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("klingon"), None);
    }

    #[test]
    fn every_legacy_charset_has_a_table() {
        for id in CharsetId::ALL {
            if !matches!(id, CharsetId::Utf8 | CharsetId::Utf16Be | CharsetId::Utf16Le) {
                assert!(id.legacy_table().is_some(), "{}", id.name());
            }
        }
    }
}
