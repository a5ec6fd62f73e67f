//! Broadword (SWAR) helpers for skipping ASCII runs.
//!
//! A run of 8 bytes is loaded as a little-endian `u64` so that byte `i` of the
//! slice lands in bits `8*i..8*i+8` on every target. Masking with
//! [`HIGH_BITS`] leaves only the top bit of each byte; the lowest set bit then
//! identifies the earliest non-ASCII byte.

/// Width of one fast-path load, in bytes.
pub(crate) const WORD_BYTES: usize = 8;

/// The top bit of every byte in a word.
pub(crate) const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

/// Load 8 bytes as a little-endian word.
#[inline(always)]
pub(crate) fn load_le(bytes: &[u8; WORD_BYTES]) -> u64 {
    u64::from_le_bytes(*bytes)
}

/// Index of the first byte (lowest address) with its top bit set.
///
/// Returns `None` if every byte in `word` is ASCII.
#[inline(always)]
pub(crate) fn first_high_byte(word: u64) -> Option<usize> {
    let mask = word & HIGH_BITS;
    if mask == 0 {
        None
    } else {
        Some((mask.trailing_zeros() / 8) as usize)
    }
}

/// Position of the first byte `>= 0x80` at or after `pos`, or `input.len()`.
///
/// Scans whole words while at least [`WORD_BYTES`] bytes remain, then falls
/// back to single bytes for the tail.
#[inline]
pub(crate) fn skip_ascii(input: &[u8], mut pos: usize) -> usize {
    while let Some(chunk) = input.get(pos..pos + WORD_BYTES) {
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(chunk);
        match first_high_byte(load_le(&word)) {
            Some(i) => return pos + i,
            None => pos += WORD_BYTES,
        }
    }
    skip_ascii_bytewise(input, pos)
}

/// Byte-at-a-time equivalent of [`skip_ascii`].
#[inline]
pub(crate) fn skip_ascii_bytewise(input: &[u8], mut pos: usize) -> usize {
    while pos < input.len() && input[pos] < 0x80 {
        pos += 1;
    }
    pos
}
