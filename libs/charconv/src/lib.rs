//! # Purpose
//! Streaming, suspendable conversion between legacy 8-bit character sets
//! and Unicode.
//!
//! The core type is [`ConverterState`]: it converts as much of a source
//! buffer into a destination buffer as it can in one call, reports which
//! buffer ran out first, and can resume across any byte boundary,
//! including the middle of a multi-byte sequence, without losing or
//! duplicating input.
//!
//! Charsets are named by [`CharsetId`], looked up case-insensitively with
//! [`lookup`]. [`wrappers`] has one-shot convenience functions for callers
//! who just want a converted `Vec<u8>`/`String` back.
//!
//! ## Example
//! ```
//! use charconv::{CharsetId, ConverterState, RunResult};
//!
//! let mut state = ConverterState::new(CharsetId::Iso8859_5, CharsetId::Utf8);
//! let mut out = [0u8; 16];
//! // 0xBF 0xE0 0xD8 0xD2 0xD5 0xE2 is "Привет" in ISO-8859-5.
//! let (result, consumed, written) =
//!     state.run(&[0xBF, 0xE0, 0xD8, 0xD2, 0xD5, 0xE2], &mut out);
//! assert_eq!(result, RunResult::SourceEnd);
//! assert_eq!(&out[..written], "Привет".as_bytes());
//! assert_eq!(consumed, 6);
//! ```
//!
//! ## One-shot conversion
//! ```
//! use charconv::{wrappers, CharsetId};
//!
//! let bytes = wrappers::convert_from_utf8(CharsetId::Koi8R, "привет");
//! assert_eq!(wrappers::convert_to_utf8(CharsetId::Koi8R, &bytes), "привет");
//! ```

pub mod categorizer;
pub mod charset;
pub mod state;
pub mod tables;
pub mod unicode_tables;
pub mod wrappers;

pub use charset::{lookup, CharsetId};
pub use state::{ConverterState, RunResult};
pub use tables::{LegacyCharset, Out};
