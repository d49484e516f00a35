//! US-ASCII (`ISO-IR 6`)
//!
//! Bytes 0x00-0x7F decode to the identical code point; every byte 0x80-0xFF
//! is unassigned.

use crate::tables::constants::UNI_REPLACEMENT;
use crate::tables::{LegacyCharset, Out};

pub fn decode(byte: u8) -> u32 {
    if byte < 0x80 {
        byte as u32
    } else {
        UNI_REPLACEMENT
    }
}

pub fn encode(code: u32) -> Out {
    if code < 0x80 {
        Out::Byte(code as u8)
    } else {
        Out::Unmapped
    }
}

pub static TABLE_US_ASCII: LegacyCharset = LegacyCharset {
    name: "US-ASCII",
    decode,
    encode,
};
