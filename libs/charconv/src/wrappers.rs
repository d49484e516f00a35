//! One-shot convenience wrappers around [`ConverterState`] for callers who
//! have the whole input in memory and just want a converted buffer back.
//!
//! The streaming API in [`crate::state`] is the one to reach for when input
//! arrives in chunks or memory is bounded; these wrappers exist for the
//! common case where allocating is fine and driving the state machine by
//! hand would just be ceremony.

use crate::charset::CharsetId;
use crate::state::{ConverterState, RunResult};

/// Size of the intermediate buffer `run` is driven with. Large enough that
/// short strings convert in a single pass, small enough that converting a
/// huge input doesn't require a huge stack frame.
const CHUNK_SIZE: usize = 512;

/// Converts `input` from `source` to `dest` in one call, growing the
/// returned buffer as needed. Never fails: unmappable input becomes a
/// replacement character or byte, per [`ConverterState::run`].
pub fn convert(source: CharsetId, dest: CharsetId, input: &[u8]) -> Vec<u8> {
    let mut state = ConverterState::new(source, dest);
    let mut out = Vec::with_capacity(input.len() + input.len() / 2 + 4);
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut pos = 0usize;

    loop {
        let (result, consumed, written) = state.run(&input[pos..], &mut chunk);
        pos += consumed;
        out.extend_from_slice(&chunk[..written]);
        match result {
            RunResult::DestEnd => continue,
            RunResult::SourceEnd | RunResult::SourceAndDestEnd => break,
        }
    }

    out
}

/// Converts legacy-charset bytes to a UTF-8 `String`.
pub fn convert_to_utf8(source: CharsetId, input: &[u8]) -> String {
    let bytes = convert(source, CharsetId::Utf8, input);
    String::from_utf8(bytes).expect("conversion into CharsetId::Utf8 always produces valid UTF-8")
}

/// Converts a UTF-8 string into `dest`'s bytes.
pub fn convert_from_utf8(dest: CharsetId, input: &str) -> Vec<u8> {
    convert(CharsetId::Utf8, dest, input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_koi8_r() {
        let original = "Привет, мир!";
        let bytes = convert_from_utf8(CharsetId::Koi8R, original);
        let back = convert_to_utf8(CharsetId::Koi8R, &bytes);
        assert_eq!(back, original);
    }

    #[test]
    fn handles_input_larger_than_one_chunk() {
        let original = "x".repeat(CHUNK_SIZE * 3 + 7);
        let bytes = convert_from_utf8(CharsetId::Iso8859_1, &original);
        assert_eq!(bytes.len(), original.len());
        assert_eq!(convert_to_utf8(CharsetId::Iso8859_1, &bytes), original);
    }

    #[test]
    fn empty_input_converts_to_empty_output() {
        assert_eq!(convert(CharsetId::Utf8, CharsetId::Iso8859_1, b""), Vec::<u8>::new());
    }
}
