//! Single-byte legacy charsets supported by this crate.
//!
//! Every module here provides a `decode_xxx`/`encode_xxx` function pair for
//! bytes 0x80-0xFF (0x00-0x7F is identical US-ASCII everywhere) plus a
//! `pub static TABLE_XXX: LegacyCharset` wiring them together for the
//! registry in [`crate::charset`].

mod cp437;
mod cp852;
mod iso_8859_1;
mod iso_8859_2;
mod iso_8859_3;
mod iso_8859_4;
mod iso_8859_5;
mod iso_8859_6;
mod iso_8859_7;
mod iso_8859_8;
mod iso_8859_9;
mod iso_8859_10;
mod iso_8859_11;
mod iso_8859_13;
mod iso_8859_14;
mod iso_8859_15;
mod iso_8859_16;
mod koi8_r;
mod macintosh;
mod us_ascii;
mod windows_1250;
mod windows_1251;
mod windows_1252;
mod windows_1253;
mod windows_1254;
mod windows_1255;
mod windows_1256;
mod windows_1257;
mod windows_1258;

pub use cp437::TABLE_CP437;
pub use cp852::TABLE_CP852;
pub use iso_8859_1::TABLE_ISO_8859_1;
pub use iso_8859_2::TABLE_ISO_8859_2;
pub use iso_8859_3::TABLE_ISO_8859_3;
pub use iso_8859_4::TABLE_ISO_8859_4;
pub use iso_8859_5::TABLE_ISO_8859_5;
pub use iso_8859_6::TABLE_ISO_8859_6;
pub use iso_8859_7::TABLE_ISO_8859_7;
pub use iso_8859_8::TABLE_ISO_8859_8;
pub use iso_8859_9::TABLE_ISO_8859_9;
pub use iso_8859_10::TABLE_ISO_8859_10;
pub use iso_8859_11::TABLE_ISO_8859_11;
pub use iso_8859_13::TABLE_ISO_8859_13;
pub use iso_8859_14::TABLE_ISO_8859_14;
pub use iso_8859_15::TABLE_ISO_8859_15;
pub use iso_8859_16::TABLE_ISO_8859_16;
pub use koi8_r::TABLE_KOI8_R;
pub use macintosh::TABLE_MACINTOSH;
pub use us_ascii::TABLE_US_ASCII;
pub use windows_1250::TABLE_WINDOWS_1250;
pub use windows_1251::TABLE_WINDOWS_1251;
pub use windows_1252::TABLE_WINDOWS_1252;
pub use windows_1253::TABLE_WINDOWS_1253;
pub use windows_1254::TABLE_WINDOWS_1254;
pub use windows_1255::TABLE_WINDOWS_1255;
pub use windows_1256::TABLE_WINDOWS_1256;
pub use windows_1257::TABLE_WINDOWS_1257;
pub use windows_1258::TABLE_WINDOWS_1258;
