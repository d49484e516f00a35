#![cfg_attr(rustfmt, rustfmt_skip)]
//! ISO-8859-6 (Arabic). Most of the GR half is unassigned in the standard
//! itself; only the positions below carry a defined mapping.

use crate::tables::{declare_gr_charset, LegacyCharset, Out};

declare_gr_charset!(ISO_8859_6: [
    0x00A0, 0,      0,      0,      0x00A4, 0,      0,      0,
    0,      0,      0,      0,      0x060C, 0x00AD, 0,      0,
    0,      0,      0,      0,      0,      0,      0,      0,
    0,      0,      0,      0x061B, 0,      0,      0,      0x061F,
    0,      0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627,
    0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
    0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x0637,
    0x0638, 0x0639, 0x063A, 0,      0,      0,      0,      0,
    0x0640, 0x0641, 0x0642, 0x0643, 0x0644, 0x0645, 0x0646, 0x0647,
    0x0648, 0x0649, 0x064A, 0x064B, 0x064C, 0x064D, 0x064E, 0x064F,
    0x0650, 0x0651, 0x0652, 0,      0,      0,      0,      0,
    0,      0,      0,      0,      0,      0,      0,      0,
]);

pub static TABLE_ISO_8859_6: LegacyCharset = LegacyCharset {
    name: "ISO-8859-6",
    decode,
    encode,
};
