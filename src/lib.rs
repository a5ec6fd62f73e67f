//! # guess-charset
//!
//! Single-pass classification of a byte buffer as 7-bit ASCII, UTF-8, or
//! something else (most likely Latin-1).
//!
//! The scanner never allocates and never reads outside the slice it is given.
//! ASCII runs are skipped eight bytes at a time; multi-byte sequences are
//! checked by a small explicit state machine.
//!
//! ## Module Organization
//!
//! - [`text`] - The classifier and its acceptance policies
//!
//! ## Quick Start
//!
//! ```
//! use guess_charset::{classify, Classification};
//!
//! assert_eq!(classify(b"Hello, world!"), Classification::Ascii);
//! assert_eq!(classify("Heé".as_bytes()), Classification::Utf8);
//!
//! // A lone Latin-1 'é' is not valid UTF-8
//! assert_eq!(classify(&[0xE9]), Classification::Unknown);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Link the standard library
//! - `cli` (default) - Build the `guess-charset` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// =============================================================================
// Core modules
// =============================================================================

/// Byte-buffer classification.
pub mod text;

/// Internal utilities (not part of public API).
pub(crate) mod util;

// =============================================================================
// Public re-exports
// =============================================================================

pub use text::classify::{classify, classify_scalar, classify_with, Acceptance, Classification};
