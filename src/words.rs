//! Fixed-size storage words.
//!
//! A word is `B/8` bytes, most-significant byte first. Byte `k` of the
//! word's low-to-high assembly (bits `8k..8k+8` of the word integer) is stored
//! at position `B/8 - 1 - k`. This is the only persisted artifact: no header,
//! no width, no length. The caller tracks those out of band.

use crate::error::{Error, Result};

/// An ordered sequence of `word_bits`-bit words.
#[derive(Clone, PartialEq, Eq)]
pub struct Words {
    bytes: Vec<u8>,
    word_bits: u32,
}

impl std::fmt::Debug for Words {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Words")
            .field("word_bits", &self.word_bits)
            .field("len", &self.len())
            .finish()
    }
}

impl Words {
    /// Wrap already-laid-out big-endian word bytes.
    pub(crate) fn from_raw(bytes: Vec<u8>, word_bits: u32) -> Self {
        debug_assert!(word_bits > 0 && word_bits % 8 == 0);
        debug_assert_eq!(bytes.len() % (word_bits / 8) as usize, 0);
        Self { bytes, word_bits }
    }

    /// Reconstruct a word sequence from its raw bytes.
    ///
    /// `bytes` must be a whole number of `word_bits / 8`-byte words, each
    /// most-significant byte first.
    pub fn from_bytes(bytes: &[u8], word_bits: u32) -> Result<Self> {
        if word_bits == 0 || word_bits % 8 != 0 {
            return Err(Error::InvalidWordBits(word_bits));
        }
        let word_bytes = (word_bits / 8) as usize;
        if bytes.len() % word_bytes != 0 {
            return Err(Error::InvalidEncoding(format!(
                "{} bytes is not a whole number of {word_bits}-bit words",
                bytes.len()
            )));
        }
        Ok(Self::from_raw(bytes.to_vec(), word_bits))
    }

    /// Raw bytes of all words, concatenated in order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Borrow the raw bytes of all words.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Word size in bits.
    #[inline]
    pub fn word_bits(&self) -> u32 {
        self.word_bits
    }

    /// Word size in bytes.
    #[inline]
    pub fn word_bytes(&self) -> usize {
        (self.word_bits / 8) as usize
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.word_bytes()
    }

    /// Return true if there are no words.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes of word `i`, most-significant first.
    #[inline]
    pub fn word(&self, i: usize) -> Option<&[u8]> {
        let n = self.word_bytes();
        let start = i.checked_mul(n)?;
        self.bytes.get(start..start.checked_add(n)?)
    }

    /// Iterate over words, each as its most-significant-first bytes.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.bytes.chunks_exact(self.word_bytes())
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.bytes.capacity()
    }
}
