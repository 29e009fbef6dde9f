//! Bit-packer: fixed-width values into fixed-size words.
//!
//! Values are laid out group by group (see [`crate::layout`]). Within a
//! group, element `k` sits at bit `k * W` of a little-endian accumulator,
//! which is emitted least-significant byte first. Groups are appended until
//! the next one would overflow the word; the word is then closed with zero
//! bytes and reversed into most-significant-first order.

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::words::Words;

/// Pack `values` as `width`-bit elements into `word_bits`-bit words.
///
/// Produces exactly `ceil(values.len() / E)` words, where `E` is
/// [`Layout::per_word`]. The element count is not recorded; callers must
/// keep it alongside the words.
///
/// # Errors
///
/// - [`Error::ValueOutOfRange`] if any value is `>= 2^width`.
/// - [`Error::InvalidWidth`] / [`Error::InvalidWordBits`] for bad geometry.
pub fn pack(values: &[u64], width: u32, word_bits: u32) -> Result<Words> {
    let layout = Layout::new(width, word_bits)?;
    pack_with(&layout, values)
}

pub(crate) fn pack_with(layout: &Layout, values: &[u64]) -> Result<Words> {
    let width = layout.width();
    if let Some(&value) = values.iter().find(|&&v| !fits(v, width)) {
        return Err(Error::ValueOutOfRange { value, width });
    }

    let word_bytes = layout.word_bytes();
    let group_len = layout.group_len() as usize;
    let group_bits = layout.group_bits() as usize;

    let mut out = Vec::with_capacity(layout.words_for(values.len()) * word_bytes);
    let mut word = vec![0u8; word_bytes];
    for chunk in values.chunks(layout.per_word()) {
        word.fill(0);
        for (g, group) in chunk.chunks(group_len).enumerate() {
            let base = g * group_bits;
            for (k, &v) in group.iter().enumerate() {
                write_bits(&mut word, base + k * width as usize, v, width);
            }
        }
        word.reverse();
        out.extend_from_slice(&word);
    }

    log::debug!(
        "packed {} x {}-bit values into {} x {}-bit words (G={}, E={})",
        values.len(),
        width,
        out.len() / word_bytes,
        layout.word_bits(),
        group_len,
        layout.per_word()
    );
    Ok(Words::from_raw(out, layout.word_bits()))
}

#[inline]
pub(crate) fn fits(value: u64, width: u32) -> bool {
    width >= 64 || value >> width == 0
}

/// OR the low `width` bits of `value` into a low-to-high byte buffer at bit
/// `offset`. The span is at most 9 bytes, so a `u128` carries it.
#[inline]
fn write_bits(buf: &mut [u8], offset: usize, value: u64, width: u32) {
    let shift = offset % 8;
    let start = offset / 8;
    let span = (shift + width as usize).div_ceil(8);
    let mut acc = (value as u128) << shift;
    for byte in &mut buf[start..start + span] {
        *byte |= acc as u8;
        acc >>= 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_nibbles_low_nibble_first() {
        let words = pack(&[1, 2, 3], 4, 8).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.as_bytes(), &[0x21, 0x03]);
    }

    #[test]
    fn test_pack_bytes_reversed_into_word() {
        let words = pack(&[0x11, 0x22, 0x33], 8, 32).unwrap();
        assert_eq!(words.as_bytes(), &[0x00, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_pack_ten_bit_group() {
        // 1 | 2 << 10 | 3 << 20 | 4 << 30 = 0x01_0030_0801
        let words = pack(&[1, 2, 3, 4], 10, 256).unwrap();
        assert_eq!(words.len(), 1);
        let word = words.word(0).unwrap();
        assert!(word[..27].iter().all(|&b| b == 0));
        assert_eq!(&word[27..], &[0x01, 0x00, 0x30, 0x08, 0x01]);
    }

    #[test]
    fn test_pack_never_splits_a_group() {
        // 6 groups of 40 bits fill 240 of 256 bits; the 25th value opens a new word.
        let values: Vec<u64> = (0..25).collect();
        let words = pack(&values, 10, 256).unwrap();
        assert_eq!(words.len(), 2);
        let first = words.word(0).unwrap();
        assert_eq!(&first[..2], &[0, 0]);
        let second = words.word(1).unwrap();
        assert_eq!(second[31], 24);
        assert!(second[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pack_full_width_values() {
        let words = pack(&[u64::MAX, 1], 64, 64).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.word(0), Some(&[0xFF; 8][..]));
        assert_eq!(words.word(1), Some(&[0, 0, 0, 0, 0, 0, 0, 1][..]));
    }

    #[test]
    fn test_pack_rejects_oversized_value() {
        assert_eq!(
            pack(&[3, 16, 2], 4, 256),
            Err(Error::ValueOutOfRange {
                value: 16,
                width: 4
            })
        );
    }

    #[test]
    fn test_pack_empty() {
        let words = pack(&[], 10, 256).unwrap();
        assert!(words.is_empty());
    }
}
