use crate::tables::constants::UNI_REPLACEMENT;
use crate::tables::single_byte::*;
use crate::tables::{LegacyCharset, Out};

/// Every legacy charset must round-trip every byte it assigns a mapping to:
/// `encode(decode(byte)) == Byte(byte)`, and ASCII is always identity.
fn assert_round_trips(table: &LegacyCharset) {
    for byte in 0x00_u8..=0xFF {
        let code = table.decode(byte);
        if code == UNI_REPLACEMENT {
            continue;
        }
        match table.encode(code) {
            Out::Byte(b) => assert_eq!(
                b, byte,
                "{}: decode(0x{byte:02X}) = U+{code:04X} but encode(U+{code:04X}) = 0x{b:02X}",
                table.name
            ),
            other => panic!(
                "{}: decode(0x{byte:02X}) = U+{code:04X} but encode(U+{code:04X}) = {other:?}",
                table.name
            ),
        }
    }
}

fn assert_ascii_is_identity(table: &LegacyCharset) {
    for byte in 0x00_u8..=0x7F {
        assert_eq!(table.decode(byte), byte as u32, "{}: byte 0x{byte:02X}", table.name);
        assert_eq!(table.encode(byte as u32), Out::Byte(byte), "{}: code U+{byte:04X}", table.name);
    }
}

fn assert_unmapped_code_fails(table: &LegacyCharset) {
    assert_eq!(table.encode(UNI_REPLACEMENT), Out::Unmapped, "{}", table.name);
    assert_eq!(table.encode(0x0010_0000), Out::Unmapped, "{}", table.name);
}

macro_rules! table_tests {
    ($($name:ident => $table:expr;)*) => {
        $(
            #[test]
            fn $name() {
                let table = &$table;
                assert_ascii_is_identity(table);
                assert_round_trips(table);
                assert_unmapped_code_fails(table);
            }
        )*
    };
}

table_tests! {
    us_ascii_round_trips => TABLE_US_ASCII;
    iso_8859_1_round_trips => TABLE_ISO_8859_1;
    iso_8859_2_round_trips => TABLE_ISO_8859_2;
    iso_8859_3_round_trips => TABLE_ISO_8859_3;
    iso_8859_4_round_trips => TABLE_ISO_8859_4;
    iso_8859_5_round_trips => TABLE_ISO_8859_5;
    iso_8859_6_round_trips => TABLE_ISO_8859_6;
    iso_8859_7_round_trips => TABLE_ISO_8859_7;
    iso_8859_8_round_trips => TABLE_ISO_8859_8;
    iso_8859_9_round_trips => TABLE_ISO_8859_9;
    iso_8859_10_round_trips => TABLE_ISO_8859_10;
    iso_8859_11_round_trips => TABLE_ISO_8859_11;
    iso_8859_13_round_trips => TABLE_ISO_8859_13;
    iso_8859_14_round_trips => TABLE_ISO_8859_14;
    iso_8859_15_round_trips => TABLE_ISO_8859_15;
    iso_8859_16_round_trips => TABLE_ISO_8859_16;
    windows_1250_round_trips => TABLE_WINDOWS_1250;
    windows_1251_round_trips => TABLE_WINDOWS_1251;
    windows_1252_round_trips => TABLE_WINDOWS_1252;
    windows_1253_round_trips => TABLE_WINDOWS_1253;
    windows_1254_round_trips => TABLE_WINDOWS_1254;
    windows_1255_round_trips => TABLE_WINDOWS_1255;
    windows_1256_round_trips => TABLE_WINDOWS_1256;
    windows_1257_round_trips => TABLE_WINDOWS_1257;
    windows_1258_round_trips => TABLE_WINDOWS_1258;
    koi8_r_round_trips => TABLE_KOI8_R;
    cp437_round_trips => TABLE_CP437;
    cp852_round_trips => TABLE_CP852;
    macintosh_round_trips => TABLE_MACINTOSH;
}

#[test]
fn latin1_high_half_is_unicode_identity() {
    for byte in 0xA0_u8..=0xFF {
        assert_eq!(TABLE_ISO_8859_1.decode(byte), byte as u32);
    }
}

#[test]
fn distinct_charsets_disagree_on_at_least_one_high_byte() {
    // Sanity check that we didn't accidentally wire two tables to the same data.
    let a = (0xA0_u8..=0xFF).map(|b| TABLE_ISO_8859_2.decode(b));
    let b = (0xA0_u8..=0xFF).map(|b| TABLE_ISO_8859_5.decode(b));
    assert!(a.zip(b).any(|(x, y)| x != y));
}
