//! Group geometry for packing fixed-width elements into fixed-size words.
//!
//! # Theory
//!
//! For element width $W$ and word size $B$ (a multiple of 8), elements are
//! placed in *groups*: the smallest run of $G$ elements whose $G \cdot W$ bits
//! form a whole number of bytes.
//!
//! - $W \mid 8$ (1, 2, 4, 8): $G = 1$, elements sit directly at $j \cdot W$.
//! - Otherwise $G = 8 / \gcd(W, 8)$: $W = 10$ gives $G = 4$ (40 bits, 5 bytes),
//!   $W = 16$ gives $G = 1$.
//! - If $G \cdot W > B$ the group would not fit in a word at all; it is capped
//!   to $G = 1$ and each element gets $\lceil W/8 \rceil$ whole bytes.
//!
//! A word holds $\lfloor B / (G W) \rfloor$ groups, so elements-per-word is
//! $E = \lfloor B / (G W) \rfloor \cdot G$. Groups never straddle a word; the
//! remaining high bits of each word are zero padding.
//!
//! Every position is integer arithmetic on the linear index:
//! word $= \lfloor i / E \rfloor$, group $= \lfloor s / G \rfloor$,
//! element-in-group $= s \bmod G$ with $s = i \bmod E$.

use crate::conf::check_geometry;
use crate::error::Result;

/// Packing geometry for one `(width, word_bits)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: u32,
    word_bits: u32,
    group_len: u32,
    group_bits: u32,
    per_word: usize,
}

impl Layout {
    /// Compute the geometry for `width`-bit elements in `word_bits`-bit words.
    pub fn new(width: u32, word_bits: u32) -> Result<Self> {
        check_geometry(width, word_bits)?;

        let (group_len, group_bits) = if 8 % width == 0 {
            (1, width)
        } else {
            let g = 8 / gcd(width, 8);
            if g * width <= word_bits {
                (g, g * width)
            } else {
                (1, width.div_ceil(8) * 8)
            }
        };
        let groups_per_word = (word_bits / group_bits) as usize;

        Ok(Self {
            width,
            word_bits,
            group_len,
            group_bits,
            per_word: groups_per_word * group_len as usize,
        })
    }

    /// Element width W.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Word size B.
    #[inline]
    pub fn word_bits(&self) -> u32 {
        self.word_bits
    }

    /// Word size in bytes.
    #[inline]
    pub fn word_bytes(&self) -> usize {
        (self.word_bits / 8) as usize
    }

    /// Elements per group, G.
    #[inline]
    pub fn group_len(&self) -> u32 {
        self.group_len
    }

    /// Bits occupied by one group, including in-group byte padding.
    #[inline]
    pub fn group_bits(&self) -> u32 {
        self.group_bits
    }

    /// Whole groups per word.
    #[inline]
    pub fn groups_per_word(&self) -> usize {
        self.per_word / self.group_len as usize
    }

    /// Elements per word, E.
    #[inline]
    pub fn per_word(&self) -> usize {
        self.per_word
    }

    /// Unused bits at the top of every full word.
    pub fn padding_bits(&self) -> u32 {
        self.word_bits - self.groups_per_word() as u32 * self.group_bits
    }

    /// Word holding element `i`.
    #[inline]
    pub fn word_index(&self, i: usize) -> usize {
        i / self.per_word
    }

    /// Bit offset of element `i` inside its word, counted from the least
    /// significant bit of the word integer.
    #[inline]
    pub fn bit_offset(&self, i: usize) -> usize {
        let slot = i % self.per_word;
        let g = self.group_len as usize;
        (slot / g) * self.group_bits as usize + (slot % g) * self.width as usize
    }

    /// Words needed to hold `n` elements.
    #[inline]
    pub fn words_for(&self, n: usize) -> usize {
        n.div_ceil(self.per_word)
    }

    /// Meaningful bits for `n` elements.
    pub fn payload_bits(&self, n: usize) -> u64 {
        n as u64 * self.width as u64
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
