//! Bit-unpacker: recover one element from packed words.
//!
//! Mirrors [`crate::pack`] exactly: the same `(W, B)` yields the same group
//! geometry, so the element's word and bit offset follow from its index alone.
//! One word is read per call.

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::words::Words;

/// Decode element `index` from `words` packed at `width` bits.
///
/// `len` is the caller-tracked element count; the words alone cannot reveal
/// it, since trailing slots of the last word are indistinguishable from zero
/// values. `width` must match the width used to pack. A mismatch is not
/// detectable here and yields meaningless values.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] if `index >= len`, or if `len` claims more
///   elements than the words can hold.
/// - [`Error::InvalidWidth`] if `width` is not valid for the word size.
pub fn unpack(words: &Words, width: u32, len: usize, index: usize) -> Result<u64> {
    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }
    let layout = Layout::new(width, words.word_bits())?;
    read(&layout, words, index)
}

/// Decode element `index` without a logical-length check.
pub(crate) fn read(layout: &Layout, words: &Words, index: usize) -> Result<u64> {
    let word = words
        .word(layout.word_index(index))
        .ok_or(Error::IndexOutOfRange {
            index,
            len: words.len() * layout.per_word(),
        })?;
    Ok(read_bits(word, layout.bit_offset(index), layout.width()))
}

/// Decode element `index`, which must lie inside the stored words.
///
/// `PackedArray` guarantees this for every index below its length, since
/// construction and `from_parts` both ensure the words hold that many slots.
/// Panics otherwise.
pub(crate) fn read_in_bounds(layout: &Layout, words: &Words, index: usize) -> u64 {
    let n = words.word_bytes();
    let start = layout.word_index(index) * n;
    let word = &words.as_bytes()[start..start + n];
    read_bits(word, layout.bit_offset(index), layout.width())
}

/// Extract `width` bits at bit `offset` of a most-significant-first word.
#[inline]
fn read_bits(word: &[u8], offset: usize, width: u32) -> u64 {
    let shift = offset % 8;
    let start = offset / 8;
    let span = (shift + width as usize).div_ceil(8);
    let top = word.len() - 1;

    let mut acc = 0u128;
    for k in 0..span {
        acc |= (word[top - (start + k)] as u128) << (8 * k);
    }
    let value = (acc >> shift) as u64;
    if width >= 64 {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}
