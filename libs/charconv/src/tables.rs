pub mod constants;
pub mod single_byte;

#[cfg(test)]
pub(crate) mod tests;

use constants::UNI_REPLACEMENT;

/// Outcome of encoding a single decoded code point into a legacy charset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Out {
    /// The code point has no representation in this charset.
    Unmapped,
    /// Emit a single output byte.
    Byte(u8),
    /// Emit a short, fixed byte sequence (a multi-byte expansion, e.g. a
    /// transliteration fallback for a character the charset cannot encode
    /// directly).
    Sequence(&'static [u8]),
}

/// Decodes a single byte of a legacy charset into a Unicode scalar value.
///
/// Total: every byte value has *some* result. Bytes the charset has not
/// assigned decode to [`constants::UNI_REPLACEMENT`].
pub type PfnDecode = fn(u8) -> u32;

/// Encodes a Unicode scalar value into a legacy charset.
///
/// Partial: returns [`Out::Unmapped`] if the charset cannot represent the
/// code point.
pub type PfnEncode = fn(u32) -> Out;

/// A single-byte legacy character set: a symmetric pair of total decode /
/// partial encode functions plus a display name used by the registry.
pub struct LegacyCharset {
    pub name: &'static str,
    pub decode: PfnDecode,
    pub encode: PfnEncode,
}

impl LegacyCharset {
    #[inline]
    pub fn decode(&self, byte: u8) -> u32 {
        (self.decode)(byte)
    }

    #[inline]
    pub fn encode(&self, code: u32) -> Out {
        (self.encode)(code)
    }
}

/// Converter function used by charsets that have no high half at all (a
/// placeholder for the ASCII repertoire wired directly into the fast path,
/// and a safety net table for charsets with an entirely unassigned region).
pub fn decode_invalid(_byte: u8) -> u32 {
    UNI_REPLACEMENT
}

pub fn encode_invalid(_code: u32) -> Out {
    Out::Unmapped
}

/// Every byte 0x00-0x7F is US-ASCII in every charset this crate supports;
/// table files only need to provide the 0x80-0xFF half.
#[inline]
pub const fn is_ascii_byte(byte: u8) -> bool {
    byte < 0x80
}

/// Declares `decode`/`encode` for an ISO-8859-style charset: 0x00-0x7F is
/// ASCII, 0x80-0x9F is the C1 control identity range and 0xA0-0xFF (96
/// entries, `$table[byte - 0xA0]`) is the charset-specific GR half.
///
/// Unassigned GR positions are given as `0` in `$table`.
macro_rules! declare_gr_charset {
    ($table:ident: [$($point:expr),* $(,)?]) => {
        static $table: [u32; 96] = [$($point),*];

        pub fn decode(byte: u8) -> u32 {
            match byte {
                0x00..=0x9F => byte as u32,
                _ => match $table[(byte - 0xA0) as usize] {
                    0 => crate::tables::constants::UNI_REPLACEMENT,
                    code => code,
                },
            }
        }

        pub fn encode(code: u32) -> Out {
            match code {
                0x00..=0x9F => Out::Byte(code as u8),
                _ => $table
                    .iter()
                    .position(|&c| c == code)
                    .map(|index| Out::Byte((index + 0xA0) as u8))
                    .unwrap_or(Out::Unmapped),
            }
        }
    };
}
pub(crate) use declare_gr_charset;

/// Declares `decode`/`encode` for a Windows/DOS-style code page: 0x00-0x7F
/// is ASCII and 0x80-0xFF (128 entries, `$table[byte - 0x80]`) is entirely
/// charset-specific.
///
/// Unassigned positions are given as `0` in `$table`.
macro_rules! declare_codepage_charset {
    ($table:ident: [$($point:expr),* $(,)?]) => {
        static $table: [u32; 128] = [$($point),*];

        pub fn decode(byte: u8) -> u32 {
            match byte {
                0x00..=0x7F => byte as u32,
                _ => match $table[(byte - 0x80) as usize] {
                    0 => crate::tables::constants::UNI_REPLACEMENT,
                    code => code,
                },
            }
        }

        pub fn encode(code: u32) -> Out {
            match code {
                0x00..=0x7F => Out::Byte(code as u8),
                _ => $table
                    .iter()
                    .position(|&c| c == code)
                    .map(|index| Out::Byte((index + 0x80) as u8))
                    .unwrap_or(Out::Unmapped),
            }
        }
    };
}
pub(crate) use declare_codepage_charset;
