//! The suspendable converter state machine.
//!
//! [`ConverterState::run`] consumes as much of a source buffer as it can,
//! writes as much decoded/re-encoded output as fits in a destination
//! buffer, and reports which buffer ran out first. Neither running out of
//! source nor running out of destination space loses or duplicates a byte:
//! the next call to `run` with a fresh pair of buffers picks up exactly
//! where the last one left off, even if it stopped in the middle of a
//! multi-byte sequence.
//!
//! No heap allocation happens in `run`; the only state carried between
//! calls is a few bytes of [`Phase`].

use crate::charset::CharsetId;
use crate::tables::constants::{
    UNI_MAX_LEGAL_UTF32, UNI_REPLACEMENT, UNI_SUR_HIGH_MAX, UNI_SUR_HIGH_MIN, UNI_SUR_LOW_MAX,
    UNI_SUR_LOW_MIN,
};
use crate::tables::Out;

/// What `run` stopped to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunResult {
    /// The source buffer passed to `run` has been fully consumed. Call
    /// again with more source bytes, or stop if there are none.
    SourceEnd,
    /// The destination buffer passed to `run` is full. Call again with a
    /// fresh (or drained) destination buffer; `src` should resume at the
    /// byte offset `run` reported as consumed.
    DestEnd,
    /// Both happened in the same call: the source was fully consumed at
    /// the exact moment the destination buffer filled up.
    SourceAndDestEnd,
}

/// The resumable state of a [`ConverterState`] between two halves of a
/// source or destination boundary.
///
/// Every phase variant is a handful of bytes; the design deliberately
/// collapses what could be eight or nine distinct "I was in the middle of
/// reading/writing X" variants into two generic byte accumulators, since
/// from the state machine's point of view resuming a partially read UTF-8
/// sequence and resuming a partially read UTF-16 code unit are the same
/// operation: "some bytes are already known, fetch the rest before
/// deciding".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Not in the middle of anything.
    Running,
    /// `buf[..len]` are source bytes already consumed toward decoding the
    /// next scalar value (a partial UTF-8 sequence, a partial UTF-16 code
    /// unit, or a buffered code unit pushed back after a broken surrogate
    /// pair).
    ReadPending { buf: [u8; 4], len: u8 },
    /// `buf[pos..len]` are destination bytes still waiting to be copied
    /// out (the tail of an encoded scalar that didn't fit in the last
    /// destination buffer).
    WritePending { buf: [u8; 8], len: u8, pos: u8 },
}

/// A streaming, suspendable transcoder between two [`CharsetId`]s.
///
/// ```
/// use charconv::{CharsetId, ConverterState, RunResult};
///
/// let mut state = ConverterState::new(CharsetId::Iso8859_2, CharsetId::Utf8);
/// let mut out = [0u8; 64];
/// let (result, consumed, written) = state.run("Dobrý deň".as_bytes(), &mut out);
/// // (this example uses UTF-8 source bytes purely for readability; a real
/// // ISO-8859-2 byte string would be transcoded the same way)
/// assert!(matches!(result, RunResult::SourceEnd | RunResult::SourceAndDestEnd));
/// assert!(consumed > 0 || written == 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConverterState {
    source_charset: CharsetId,
    dest_charset: CharsetId,
    phase: Phase,
}

impl ConverterState {
    /// Creates a fresh converter. Both charsets are fixed for the lifetime
    /// of the state; to convert between a different pair, make a new one.
    pub fn new(source_charset: CharsetId, dest_charset: CharsetId) -> Self {
        Self {
            source_charset,
            dest_charset,
            phase: Phase::Running,
        }
    }

    pub fn source_charset(&self) -> CharsetId {
        self.source_charset
    }

    pub fn dest_charset(&self) -> CharsetId {
        self.dest_charset
    }

    /// `true` if the converter is not in the middle of a source or
    /// destination boundary (safe to drop without losing buffered state).
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    /// Converts as much of `src` into `dst` as it can.
    ///
    /// Returns `(result, consumed, written)`: `consumed` and `written` are
    /// always the number of bytes of `src`/`dst` this call used, even when
    /// `result` is [`RunResult::DestEnd`] mid-scalar. Call again with
    /// `&src[consumed..]` and a destination buffer with room.
    pub fn run(&mut self, src: &[u8], dst: &mut [u8]) -> (RunResult, usize, usize) {
        let mut sp = 0usize;
        let mut dp = 0usize;

        loop {
            if self.flush_pending(dst, &mut dp).is_err() {
                return (RunResult::DestEnd, sp, dp);
            }

            let code = match self.decode_next(src, &mut sp) {
                Some(code) => code,
                None => {
                    let result = if dp >= dst.len() {
                        RunResult::SourceAndDestEnd
                    } else {
                        RunResult::SourceEnd
                    };
                    return (result, sp, dp);
                }
            };

            let (buf, len) = self.encode_scalar(code);
            self.queue_for_write(&buf[..len as usize]);
            if self.flush_pending(dst, &mut dp).is_err() {
                return (RunResult::DestEnd, sp, dp);
            }
        }
    }

    fn flush_pending(&mut self, dst: &mut [u8], dp: &mut usize) -> Result<(), ()> {
        if let Phase::WritePending { buf, len, pos } = &mut self.phase {
            while *pos < *len {
                if *dp >= dst.len() {
                    return Err(());
                }
                dst[*dp] = buf[*pos as usize];
                *dp += 1;
                *pos += 1;
            }
            self.phase = Phase::Running;
        }
        Ok(())
    }

    fn queue_for_write(&mut self, bytes: &[u8]) {
        let mut buf = [0u8; 8];
        buf[..bytes.len()].copy_from_slice(bytes);
        self.phase = Phase::WritePending {
            buf,
            len: bytes.len() as u8,
            pos: 0,
        };
    }

    fn decode_next(&mut self, src: &[u8], sp: &mut usize) -> Option<u32> {
        match self.source_charset {
            CharsetId::Utf8 => self.decode_utf8(src, sp),
            CharsetId::Utf16Be => self.decode_utf16(src, sp, true),
            CharsetId::Utf16Le => self.decode_utf16(src, sp, false),
            legacy => {
                if *sp >= src.len() {
                    return None;
                }
                let byte = src[*sp];
                *sp += 1;
                let table = legacy
                    .legacy_table()
                    .expect("every non-Unicode CharsetId has a legacy table");
                Some(table.decode(byte))
            }
        }
    }

    fn decode_utf8(&mut self, src: &[u8], sp: &mut usize) -> Option<u32> {
        let (mut buf, mut len) = match self.phase {
            Phase::ReadPending { buf, len } => (buf, len),
            _ => ([0u8; 4], 0u8),
        };

        if len == 0 {
            if *sp >= src.len() {
                self.phase = Phase::Running;
                return None;
            }
            buf[0] = src[*sp];
            *sp += 1;
            len = 1;
        }

        let need = utf8_sequence_len(buf[0]);
        if need == 0 {
            self.phase = Phase::Running;
            return Some(UNI_REPLACEMENT);
        }

        while len < need {
            if *sp >= src.len() {
                self.phase = Phase::ReadPending { buf, len };
                return None;
            }
            let b = src[*sp];
            *sp += 1;
            if b & 0xC0 != 0x80 {
                // Malformed: the lead byte promised a continuation byte
                // that didn't show up. The offending byte is consumed as
                // part of the ill-formed sequence, not re-parsed as the
                // start of the next character.
                self.phase = Phase::Running;
                return Some(UNI_REPLACEMENT);
            }
            buf[len as usize] = b;
            len += 1;
        }

        self.phase = Phase::Running;
        Some(decode_utf8_sequence(&buf[..len as usize]).unwrap_or(UNI_REPLACEMENT))
    }

    fn decode_utf16(&mut self, src: &[u8], sp: &mut usize, big_endian: bool) -> Option<u32> {
        let (mut buf, mut len) = match self.phase {
            Phase::ReadPending { buf, len } => (buf, len),
            _ => ([0u8; 4], 0u8),
        };

        while len < 2 {
            if *sp >= src.len() {
                self.phase = if len == 0 {
                    Phase::Running
                } else {
                    Phase::ReadPending { buf, len }
                };
                return None;
            }
            buf[len as usize] = src[*sp];
            *sp += 1;
            len += 1;
        }

        let unit1 = read_u16(buf[0], buf[1], big_endian);
        if !(UNI_SUR_HIGH_MIN..=UNI_SUR_HIGH_MAX).contains(&unit1) {
            self.phase = Phase::Running;
            return Some(unit1 as u32);
        }

        while len < 4 {
            if *sp >= src.len() {
                self.phase = Phase::ReadPending { buf, len };
                return None;
            }
            buf[len as usize] = src[*sp];
            *sp += 1;
            len += 1;
        }

        let unit2 = read_u16(buf[2], buf[3], big_endian);
        if (UNI_SUR_LOW_MIN..=UNI_SUR_LOW_MAX).contains(&unit2) {
            self.phase = Phase::Running;
            let combined = 0x10000
                + (((unit1 - UNI_SUR_HIGH_MIN) as u32) << 10)
                + (unit2 - UNI_SUR_LOW_MIN) as u32;
            return Some(combined);
        }

        // unit2 is not a low surrogate: the lone high surrogate is
        // replaced, and unit2's bytes are pushed back to be read fresh as
        // the start of the next scalar.
        self.phase = Phase::ReadPending {
            buf: [buf[2], buf[3], 0, 0],
            len: 2,
        };
        Some(UNI_REPLACEMENT)
    }

    fn encode_scalar(&self, code: u32) -> ([u8; 8], u8) {
        let mut buf = [0u8; 8];
        match self.dest_charset {
            CharsetId::Utf8 => {
                let n = encode_utf8(code, &mut buf);
                (buf, n)
            }
            CharsetId::Utf16Be => {
                let n = encode_utf16(code, true, &mut buf);
                (buf, n)
            }
            CharsetId::Utf16Le => {
                let n = encode_utf16(code, false, &mut buf);
                (buf, n)
            }
            legacy => {
                let table = legacy
                    .legacy_table()
                    .expect("every non-Unicode CharsetId has a legacy table");
                match table.encode(code) {
                    Out::Byte(b) => {
                        buf[0] = b;
                        (buf, 1)
                    }
                    Out::Sequence(seq) => {
                        let n = seq.len().min(buf.len());
                        buf[..n].copy_from_slice(&seq[..n]);
                        (buf, n as u8)
                    }
                    Out::Unmapped => {
                        tracing::warn!(
                            charset = table.name,
                            code_point = format_args!("U+{code:04X}"),
                            "no mapping for code point, substituting replacement"
                        );
                        match table.encode(UNI_REPLACEMENT) {
                            Out::Byte(b) => {
                                buf[0] = b;
                                (buf, 1)
                            }
                            Out::Sequence(seq) => {
                                let n = seq.len().min(buf.len());
                                buf[..n].copy_from_slice(&seq[..n]);
                                (buf, n as u8)
                            }
                            Out::Unmapped => {
                                buf[0] = crate::tables::constants::CODE_ASCII_REPLACEMENT;
                                (buf, 1)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn read_u16(a: u8, b: u8, big_endian: bool) -> u16 {
    if big_endian {
        u16::from_be_bytes([a, b])
    } else {
        u16::from_le_bytes([a, b])
    }
}

/// Number of bytes a well-formed UTF-8 sequence starting with `lead` has,
/// or `0` if `lead` can never start a sequence (a stray continuation byte,
/// an overlong 2-byte lead `0xC0`/`0xC1`, or a byte above the Unicode range).
fn utf8_sequence_len(lead: u8) -> u8 {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decodes a complete, already-length-matched UTF-8 byte sequence.
/// Rejects overlong encodings and encoded surrogates, returning `None`
/// for either.
fn decode_utf8_sequence(bytes: &[u8]) -> Option<u32> {
    match bytes.len() {
        1 => Some(bytes[0] as u32),
        2 => {
            let code = ((bytes[0] as u32 & 0x1F) << 6) | (bytes[1] as u32 & 0x3F);
            (code >= 0x80).then_some(code)
        }
        3 => {
            let code = ((bytes[0] as u32 & 0x0F) << 12)
                | ((bytes[1] as u32 & 0x3F) << 6)
                | (bytes[2] as u32 & 0x3F);
            let is_surrogate =
                (UNI_SUR_HIGH_MIN as u32..=UNI_SUR_LOW_MAX as u32).contains(&code);
            (code >= 0x800 && !is_surrogate).then_some(code)
        }
        4 => {
            let code = ((bytes[0] as u32 & 0x07) << 18)
                | ((bytes[1] as u32 & 0x3F) << 12)
                | ((bytes[2] as u32 & 0x3F) << 6)
                | (bytes[3] as u32 & 0x3F);
            (0x10000..=UNI_MAX_LEGAL_UTF32).contains(&code).then_some(code)
        }
        _ => None,
    }
}

fn encode_utf8(code: u32, buf: &mut [u8; 8]) -> u8 {
    match code {
        0x00..=0x7F => {
            buf[0] = code as u8;
            1
        }
        0x80..=0x7FF => {
            buf[0] = 0xC0 | (code >> 6) as u8;
            buf[1] = 0x80 | (code & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            buf[0] = 0xE0 | (code >> 12) as u8;
            buf[1] = 0x80 | ((code >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (code & 0x3F) as u8;
            3
        }
        _ => {
            buf[0] = 0xF0 | (code >> 18) as u8;
            buf[1] = 0x80 | ((code >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((code >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (code & 0x3F) as u8;
            4
        }
    }
}

fn encode_utf16(code: u32, big_endian: bool, buf: &mut [u8; 8]) -> u8 {
    fn put(buf: &mut [u8], at: usize, unit: u16, big_endian: bool) {
        let bytes = if big_endian { unit.to_be_bytes() } else { unit.to_le_bytes() };
        buf[at] = bytes[0];
        buf[at + 1] = bytes[1];
    }

    if code <= 0xFFFF {
        put(buf, 0, code as u16, big_endian);
        2
    } else {
        let v = code - 0x10000;
        let high = UNI_SUR_HIGH_MIN + (v >> 10) as u16;
        let low = UNI_SUR_LOW_MIN + (v & 0x3FF) as u16;
        put(buf, 0, high, big_endian);
        put(buf, 2, low, big_endian);
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_all(source: CharsetId, dest: CharsetId, input: &[u8]) -> Vec<u8> {
        let mut state = ConverterState::new(source, dest);
        let mut out = Vec::new();
        let mut buf = [0u8; 7]; // deliberately not a multiple of 2/3/4
        let mut pos = 0;
        loop {
            let (result, consumed, written) = state.run(&input[pos..], &mut buf);
            pos += consumed;
            out.extend_from_slice(&buf[..written]);
            match result {
                RunResult::DestEnd => continue,
                RunResult::SourceEnd | RunResult::SourceAndDestEnd => break,
            }
        }
        assert!(state.is_idle());
        out
    }

    #[test]
    fn ascii_round_trips_through_every_legacy_charset() {
        for id in CharsetId::ALL {
            if matches!(id, CharsetId::Utf8 | CharsetId::Utf16Be | CharsetId::Utf16Le) {
                continue;
            }
            let out = convert_all(*id, CharsetId::Utf8, b"Hello, World! 0123456789");
            assert_eq!(out, b"Hello, World! 0123456789");
        }
    }

    #[test]
    fn iso_8859_5_to_utf8() {
        // Byte 0xD0 in ISO-8859-5 is Cyrillic а (U+0430) -> UTF-8 0xD0 0xB0.
        let out = convert_all(CharsetId::Iso8859_5, CharsetId::Utf8, &[0xD0]);
        assert_eq!(out, [0xD0, 0xB0]);
    }

    #[test]
    fn utf8_to_iso_8859_5_round_trips() {
        let cyrillic_a = [0xD0u8, 0xB0]; // UTF-8 for U+0430
        let out = convert_all(CharsetId::Utf8, CharsetId::Iso8859_5, &cyrillic_a);
        assert_eq!(out, [0xD0]);
    }

    #[test]
    fn malformed_utf8_lead_consumes_the_breaking_byte() {
        // "A" + 0xC3 (2-byte lead) + '(' (not a continuation byte) + "B"
        let out = convert_all(CharsetId::Utf8, CharsetId::Utf8, b"A\xC3(B");
        // The lead + '(' collapse to one replacement; '(' is swallowed.
        let mut expected = vec![b'A'];
        expected.extend_from_slice("\u{FFFC}".as_bytes());
        expected.push(b'B');
        assert_eq!(out, expected);
    }

    #[test]
    fn suspends_mid_utf8_sequence_across_chunk_boundary() {
        let mut state = ConverterState::new(CharsetId::Utf8, CharsetId::Utf8);
        let mut out = [0u8; 16];
        // Cyrillic а (U+0430) encoded as 0xD0 0xB0, split across two calls.
        let (r1, c1, w1) = state.run(&[0xD0], &mut out);
        assert_eq!(r1, RunResult::SourceEnd);
        assert_eq!(c1, 1);
        assert_eq!(w1, 0);
        assert!(!state.is_idle());

        let (r2, c2, w2) = state.run(&[0xB0], &mut out[w1..]);
        assert_eq!(r2, RunResult::SourceEnd);
        assert_eq!(c2, 1);
        assert_eq!(&out[..w1 + w2], &[0xD0, 0xB0]);
        assert!(state.is_idle());
    }

    #[test]
    fn resumes_after_destination_runs_out_mid_scalar() {
        let mut state = ConverterState::new(CharsetId::Utf8, CharsetId::Utf8);
        let mut small = [0u8; 1];
        // Three-byte UTF-8 sequence for U+20AC (EUR sign).
        let euro = "\u{20AC}".as_bytes();
        let (r1, c1, w1) = state.run(euro, &mut small);
        assert_eq!(r1, RunResult::DestEnd);
        assert_eq!(c1, euro.len());
        assert_eq!(w1, 1);
        assert!(!state.is_idle());

        let mut rest = [0u8; 8];
        let (r2, c2, w2) = state.run(&euro[c1..], &mut rest);
        assert_eq!(r2, RunResult::SourceEnd);
        assert_eq!(c2, 0);
        let mut full = small.to_vec();
        full.extend_from_slice(&rest[..w2]);
        assert_eq!(full, euro);
    }

    #[test]
    fn utf16_surrogate_pair_round_trips_through_utf8() {
        // U+1F600 (grinning face) as UTF-16BE surrogate pair.
        let utf16be = [0xD8, 0x3D, 0xDE, 0x00];
        let utf8 = convert_all(CharsetId::Utf16Be, CharsetId::Utf8, &utf16be);
        assert_eq!(utf8, "\u{1F600}".as_bytes());

        let back = convert_all(CharsetId::Utf8, CharsetId::Utf16Be, &utf8);
        assert_eq!(back, utf16be);
    }

    #[test]
    fn utf16_surrogate_pair_can_split_across_chunks() {
        let mut state = ConverterState::new(CharsetId::Utf16Be, CharsetId::Utf8);
        let mut out = [0u8; 8];
        let (r1, c1, w1) = state.run(&[0xD8, 0x3D], &mut out);
        assert_eq!(r1, RunResult::SourceEnd);
        assert_eq!(c1, 2);
        assert_eq!(w1, 0);

        let (r2, _, w2) = state.run(&[0xDE, 0x00], &mut out[w1..]);
        assert_eq!(r2, RunResult::SourceEnd);
        assert_eq!(&out[..w1 + w2], "\u{1F600}".as_bytes());
    }

    #[test]
    fn lone_high_surrogate_becomes_replacement_without_swallowing_next_unit() {
        let utf16be = [0xD8, 0x00, 0x00, 0x41]; // lone high surrogate, then U+0041 'A'
        let out = convert_all(CharsetId::Utf16Be, CharsetId::Utf8, &utf16be);
        let mut expected = "\u{FFFC}".as_bytes().to_vec();
        expected.push(b'A');
        assert_eq!(out, expected);
    }

    #[test]
    fn unmapped_code_point_falls_back_to_replacement() {
        // U+4E2D ('中') has no representation in ISO-8859-1.
        let out = convert_all(CharsetId::Utf8, CharsetId::Iso8859_1, "\u{4E2D}".as_bytes());
        // ISO-8859-1 has no representation for U+FFFC either, so '?' is used.
        assert_eq!(out, b"?");
    }

    #[test]
    fn empty_input_is_immediately_source_end() {
        let mut state = ConverterState::new(CharsetId::Utf8, CharsetId::Utf8);
        let mut out = [0u8; 4];
        let (result, consumed, written) = state.run(&[], &mut out);
        assert_eq!(result, RunResult::SourceEnd);
        assert_eq!(consumed, 0);
        assert_eq!(written, 0);
    }

    #[test]
    fn empty_source_and_dest_is_source_and_dest_end() {
        let mut state = ConverterState::new(CharsetId::Utf8, CharsetId::Utf8);
        let (result, consumed, written) = state.run(&[], &mut []);
        assert_eq!(result, RunResult::SourceAndDestEnd);
        assert_eq!(consumed, 0);
        assert_eq!(written, 0);
    }

    #[test]
    fn utf8_to_iso_8859_1_basic() {
        let out = convert_all(CharsetId::Utf8, CharsetId::Iso8859_1, "caf\u{E9}".as_bytes());
        assert_eq!(out, b"caf\xE9");
    }

    #[test]
    fn iso_8859_2_to_utf8() {
        // Byte 0xE8 in ISO-8859-2 is č (U+010D) -> UTF-8 0xC4 0x8D.
        let out = convert_all(CharsetId::Iso8859_2, CharsetId::Utf8, &[0xE8]);
        assert_eq!(out, [0xC4, 0x8D]);
    }

    #[test]
    fn utf8_to_utf16le_malformed_lead_consumes_the_breaking_byte() {
        let out = convert_all(CharsetId::Utf8, CharsetId::Utf16Le, b"A\xC3(B");
        assert_eq!(out, [b'A', 0x00, 0xFC, 0xFF, b'B', 0x00]);
    }

    #[test]
    #[tracing_test::traced_test]
    fn unmapped_code_point_logs_a_warning() {
        // U+4E2D ('中') has no representation in ISO-8859-1, so encoding it
        // falls back to the replacement character and should warn once.
        let _ = convert_all(CharsetId::Utf8, CharsetId::Iso8859_1, "\u{4E2D}".as_bytes());
        assert!(logs_contain("no mapping for code point"));
    }
}
