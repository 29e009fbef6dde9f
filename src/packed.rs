//! Packed array: words plus the metadata needed to read them back.

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::pack::pack_with;
use crate::unpack::{read, read_in_bounds};
use crate::words::Words;

/// An immutable array of `width`-bit unsigned integers with $O(1)$ access.
#[derive(Clone, PartialEq, Eq)]
pub struct PackedArray {
    layout: Layout,
    words: Words,
    len: usize,
}

impl std::fmt::Debug for PackedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackedArray")
            .field("len", &self.len)
            .field("width", &self.layout.width())
            .field("words", &self.words.len())
            .finish()
    }
}

impl PackedArray {
    /// Pack `values` at `width` bits into `word_bits`-bit words.
    pub fn new(values: &[u64], width: u32, word_bits: u32) -> Result<Self> {
        let layout = Layout::new(width, word_bits)?;
        let words = pack_with(&layout, values)?;
        Ok(Self {
            layout,
            words,
            len: values.len(),
        })
    }

    /// Reattach caller-tracked `width` and `len` to persisted words.
    ///
    /// Fails with [`Error::InvalidEncoding`] if the words cannot hold `len`
    /// elements. Whether `width` matches the encoder is the caller's concern.
    pub fn from_parts(words: Words, width: u32, len: usize) -> Result<Self> {
        let layout = Layout::new(width, words.word_bits())?;
        let needed = layout.words_for(len);
        if words.len() < needed {
            return Err(Error::InvalidEncoding(format!(
                "{len} elements of {width} bits need {needed} words, found {}",
                words.len()
            )));
        }
        Ok(Self { layout, words, len })
    }

    /// Return the element at index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Result<u64> {
        if i >= self.len {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.len,
            });
        }
        read(&self.layout, &self.words, i)
    }

    /// Iterate over all elements in order.
    ///
    /// Yields exactly `len()` values: the words always hold at least `len`
    /// slots, so no read can fail.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(move |i| read_in_bounds(&self.layout, &self.words, i))
    }

    /// Return the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the array has 0 elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element width.
    pub fn width(&self) -> u32 {
        self.layout.width()
    }

    /// The packing geometry.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The packed words.
    pub fn words(&self) -> &Words {
        &self.words
    }

    /// Give up the metadata and keep the words.
    pub fn into_words(self) -> Words {
        self.words
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.words.heap_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_array_basic() {
        let values = vec![5, 0, 1023, 512, 7];
        let arr = PackedArray::new(&values, 10, 256).unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.words().len(), 1);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(arr.get(i).unwrap(), v);
        }
        assert_eq!(arr.iter().collect::<Vec<_>>(), values);
        assert_eq!(
            arr.get(5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_packed_array_from_parts() {
        let values: Vec<u64> = (0..100).map(|i| i % 16).collect();
        let arr = PackedArray::new(&values, 4, 64).unwrap();
        let bytes = arr.words().to_bytes();

        let words = Words::from_bytes(&bytes, 64).unwrap();
        let restored = PackedArray::from_parts(words, 4, values.len()).unwrap();
        assert_eq!(restored, arr);

        let words = Words::from_bytes(&bytes, 64).unwrap();
        assert!(matches!(
            PackedArray::from_parts(words, 4, 200),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_iter_yields_every_element_after_reload() {
        // Extra trailing words beyond what `len` needs are tolerated.
        let values: Vec<u64> = (0..40).map(|i| (i * 7) % 1024).collect();
        let arr = PackedArray::new(&values, 10, 256).unwrap();
        let mut bytes = arr.words().to_bytes();
        bytes.extend_from_slice(&[0u8; 32]);

        let words = Words::from_bytes(&bytes, 256).unwrap();
        let restored = PackedArray::from_parts(words, 10, values.len()).unwrap();
        let got: Vec<u64> = restored.iter().collect();
        assert_eq!(got.len(), values.len());
        assert_eq!(got, values);
    }

    #[test]
    fn test_packed_array_empty() {
        let arr = PackedArray::new(&[], 4, 256).unwrap();
        assert!(arr.is_empty());
        assert!(arr.get(0).is_err());
        assert_eq!(arr.iter().count(), 0);
    }
}
