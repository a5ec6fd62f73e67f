//! Text processing utilities.
//!
//! This module provides encoding classification of raw byte buffers.
//!
//! ## Classification
//!
//! The [`classify`] module decides whether a buffer is pure ASCII, valid
//! UTF-8, or neither. It reports no offsets and decodes no code points; the
//! answer is one of three values.
//!
//! ```
//! use guess_charset::text::classify::{classify, classify_with, Acceptance, Classification};
//!
//! assert_eq!(classify(b""), Classification::Ascii);
//! assert_eq!(classify(&[0xF0, 0x9F, 0x98, 0x80]), Classification::Utf8);
//!
//! // Overlong NUL: accepted by default, rejected under the strict policy
//! assert_eq!(classify(&[0xC0, 0x80]), Classification::Utf8);
//! assert_eq!(classify_with(&[0xC0, 0x80], Acceptance::Strict), Classification::Unknown);
//! ```

pub mod classify;

// Re-export commonly used types
pub use classify::{classify, Acceptance, Classification};
