//! ASCII / UTF-8 / unknown classification of byte buffers.
//!
//! The classifier answers one question about a buffer: is it pure 7-bit
//! ASCII, valid UTF-8 containing at least one multi-byte sequence, or
//! neither? Callers usually read "neither" as "probably Latin-1", but that is
//! a guess the classifier does not prove.
//!
//! ## Sequence Shapes
//!
//! | Bytes | Lead byte     | Continuation bytes |
//! |-------|---------------|--------------------|
//! | 1     | `0x00`-`0x7F` | -                  |
//! | 2     | `0xC0`-`0xDF` | `0x80`-`0xBF` × 1  |
//! | 3     | `0xE0`-`0xEF` | `0x80`-`0xBF` × 2  |
//! | 4     | `0xF0`-`0xF7` | `0x80`-`0xBF` × 3  |
//!
//! Anything else in lead position (`0x80`-`0xBF`, `0xF8`-`0xFF`) ends the scan
//! with [`Classification::Unknown`], as does a missing or malformed
//! continuation byte.
//!
//! ## Acceptance Policies
//!
//! [`Acceptance::Permissive`] (the default) accepts every sequence of the
//! shapes above, including overlong encodings, UTF-16 surrogates and values up
//! to `0x1FFFFF`. [`Acceptance::Strict`] applies the RFC 3629 restrictions and
//! agrees with [`core::str::from_utf8`].
//!
//! ## Performance
//!
//! ASCII runs are skipped eight bytes at a time. Once a byte with the top bit
//! set is found, the scanner steps through the sequence one byte at a time and
//! returns to word skipping at the next lead position. The first malformed
//! sequence short-circuits the scan.

use core::fmt;

use crate::util::broadword::{skip_ascii, skip_ascii_bytewise};

/// Result of classifying a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Every byte is below 0x80. The empty buffer is ASCII.
    Ascii,
    /// At least one byte is 0x80 or above and the whole buffer is well-formed
    /// UTF-8 under the active [`Acceptance`] policy.
    Utf8,
    /// At least one byte at or above 0x80 is not part of a well-formed
    /// sequence.
    Unknown,
}

impl Classification {
    /// True for [`Classification::Ascii`].
    #[inline]
    pub fn is_ascii(self) -> bool {
        self == Self::Ascii
    }

    /// True if the buffer decodes as UTF-8. ASCII is a subset of UTF-8, so
    /// this holds for both [`Classification::Ascii`] and
    /// [`Classification::Utf8`].
    #[inline]
    pub fn is_valid_utf8(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ASCII"),
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Which syntactically valid UTF-8 sequences count as UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Acceptance {
    /// Any lead byte up to 0xF7 followed by the right number of 0x80-0xBF
    /// bytes. Overlong encodings, surrogates and values above U+10FFFF pass.
    #[default]
    Permissive,
    /// RFC 3629 well-formed UTF-8 only.
    Strict,
}

/// Classify `input` with the permissive policy.
///
/// # Examples
///
/// ```
/// use guess_charset::{classify, Classification};
///
/// assert_eq!(classify(b""), Classification::Ascii);
/// assert_eq!(classify(b"Hello, world!"), Classification::Ascii);
/// assert_eq!(classify(&[0x48, 0x65, 0xC3, 0xA9]), Classification::Utf8);
/// assert_eq!(classify(&[0xE9]), Classification::Unknown);
/// ```
#[inline]
pub fn classify(input: &[u8]) -> Classification {
    classify_with(input, Acceptance::Permissive)
}

/// Classify `input` under an explicit acceptance policy.
///
/// # Examples
///
/// ```
/// use guess_charset::{classify_with, Acceptance, Classification};
///
/// // U+D800 encoded directly: a surrogate, not a scalar value
/// let surrogate = [0xED, 0xA0, 0x80];
/// assert_eq!(classify_with(&surrogate, Acceptance::Permissive), Classification::Utf8);
/// assert_eq!(classify_with(&surrogate, Acceptance::Strict), Classification::Unknown);
/// ```
#[inline]
pub fn classify_with(input: &[u8], acceptance: Acceptance) -> Classification {
    Scanner::new(input, acceptance).run(skip_ascii)
}

/// Classify `input` one byte at a time, without the word-at-a-time ASCII skip.
///
/// Always returns the same answer as [`classify_with`]; useful as a baseline
/// for benchmarks and as a reference in tests.
pub fn classify_scalar(input: &[u8], acceptance: Acceptance) -> Classification {
    Scanner::new(input, acceptance).run(skip_ascii_bytewise)
}

// =============================================================================
// State machine
// =============================================================================

/// Scanner state between bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At a sequence boundary; the next byte must be ASCII or a lead byte.
    ExpectLead,
    /// Inside a multi-byte sequence. The next byte must lie in `low..=high`;
    /// `remaining` counts it and the continuation bytes after it.
    ExpectContinuation { remaining: u8, low: u8, high: u8 },
    /// Scan finished.
    Done(Classification),
}

/// Default continuation byte range.
const CONT_LOW: u8 = 0x80;
const CONT_HIGH: u8 = 0xBF;

struct Scanner<'a> {
    input: &'a [u8],
    acceptance: Acceptance,
    pos: usize,
    saw_non_ascii: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8], acceptance: Acceptance) -> Self {
        Self {
            input,
            acceptance,
            pos: 0,
            saw_non_ascii: false,
        }
    }

    #[inline(always)]
    fn run(mut self, skip: fn(&[u8], usize) -> usize) -> Classification {
        let mut state = State::ExpectLead;
        loop {
            state = match state {
                State::ExpectLead => {
                    self.pos = skip(self.input, self.pos);
                    match self.input.get(self.pos) {
                        None => State::Done(self.finish()),
                        Some(&lead) => {
                            self.pos += 1;
                            self.saw_non_ascii = true;
                            self.after_lead(lead)
                        }
                    }
                }
                State::ExpectContinuation {
                    remaining,
                    low,
                    high,
                } => match self.input.get(self.pos) {
                    Some(&byte) if (low..=high).contains(&byte) => {
                        self.pos += 1;
                        if remaining == 1 {
                            State::ExpectLead
                        } else {
                            State::ExpectContinuation {
                                remaining: remaining - 1,
                                low: CONT_LOW,
                                high: CONT_HIGH,
                            }
                        }
                    }
                    // Truncated at end of input, or not a continuation byte
                    _ => State::Done(Classification::Unknown),
                },
                State::Done(classification) => return classification,
            };
        }
    }

    #[inline(always)]
    fn finish(&self) -> Classification {
        if self.saw_non_ascii {
            Classification::Utf8
        } else {
            Classification::Ascii
        }
    }

    /// Dispatch on a byte `>= 0x80` found in lead position.
    #[inline(always)]
    fn after_lead(&self, lead: u8) -> State {
        match self.acceptance {
            Acceptance::Permissive => permissive_lead(lead),
            Acceptance::Strict => strict_lead(lead),
        }
    }
}

#[inline(always)]
fn expect(remaining: u8, low: u8, high: u8) -> State {
    State::ExpectContinuation {
        remaining,
        low,
        high,
    }
}

#[inline(always)]
fn permissive_lead(lead: u8) -> State {
    match lead {
        0xC0..=0xDF => expect(1, CONT_LOW, CONT_HIGH),
        0xE0..=0xEF => expect(2, CONT_LOW, CONT_HIGH),
        0xF0..=0xF7 => expect(3, CONT_LOW, CONT_HIGH),
        // Bare continuation byte, or 0xF8-0xFF
        _ => State::Done(Classification::Unknown),
    }
}

/// RFC 3629 table: the first continuation byte is narrowed for E0, ED, F0
/// and F4; C0, C1 and F5-FF never start a sequence.
#[inline(always)]
fn strict_lead(lead: u8) -> State {
    match lead {
        0xC2..=0xDF => expect(1, CONT_LOW, CONT_HIGH),
        0xE0 => expect(2, 0xA0, CONT_HIGH),
        0xE1..=0xEC | 0xEE..=0xEF => expect(2, CONT_LOW, CONT_HIGH),
        0xED => expect(2, CONT_LOW, 0x9F),
        0xF0 => expect(3, 0x90, CONT_HIGH),
        0xF1..=0xF3 => expect(3, CONT_LOW, CONT_HIGH),
        0xF4 => expect(3, CONT_LOW, 0x8F),
        _ => State::Done(Classification::Unknown),
    }
}
