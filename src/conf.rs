//! Explicit configuration for dictionary-compressed mappings.
//!
//! None of these parameters are recorded in the packed output. The host picks
//! them once and must supply the same values on every decode.

use crate::error::{Error, Result};

/// Reference storage word size in bits.
pub const DEFAULT_WORD_BITS: u32 = 256;

/// Reference dictionary index width: 4 bits address up to 16 values.
pub const DEFAULT_INDEX_WIDTH: u32 = 4;

/// Default dictionary entry width.
pub const DEFAULT_VALUE_WIDTH: u32 = 16;

/// Widths and word size shared by both packed arrays of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conf {
    /// Storage word size B. Must be a positive multiple of 8.
    pub word_bits: u32,
    /// Width W_i of each key's dictionary index.
    pub index_width: u32,
    /// Width W_v of each dictionary value.
    pub value_width: u32,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            word_bits: DEFAULT_WORD_BITS,
            index_width: DEFAULT_INDEX_WIDTH,
            value_width: DEFAULT_VALUE_WIDTH,
        }
    }
}

impl Conf {
    /// Build a configuration from explicit widths.
    pub fn new(word_bits: u32, index_width: u32, value_width: u32) -> Self {
        Self {
            word_bits,
            index_width,
            value_width,
        }
    }

    /// Smallest index width able to address `k` dictionary entries.
    ///
    /// Never returns 0: a single-entry dictionary still spends one bit per key.
    pub fn index_width_for(k: usize) -> u32 {
        if k <= 2 {
            return 1;
        }
        usize::BITS - (k - 1).leading_zeros()
    }

    /// Return a copy with the index width sized for `k` entries.
    #[must_use]
    pub fn fitted_to(self, k: usize) -> Self {
        Self {
            index_width: Self::index_width_for(k),
            ..self
        }
    }

    /// Maximum number of dictionary entries the index width can address.
    pub fn max_dict_len(&self) -> usize {
        if self.index_width >= usize::BITS {
            usize::MAX
        } else {
            1usize << self.index_width
        }
    }

    /// Check word size and both widths.
    pub fn validate(&self) -> Result<()> {
        check_geometry(self.index_width, self.word_bits)?;
        check_geometry(self.value_width, self.word_bits)
    }
}

/// Validate a `(width, word_bits)` pair.
pub(crate) fn check_geometry(width: u32, word_bits: u32) -> Result<()> {
    if word_bits == 0 || word_bits % 8 != 0 {
        return Err(Error::InvalidWordBits(word_bits));
    }
    if width == 0 || width > 64 || width > word_bits {
        return Err(Error::InvalidWidth { width, word_bits });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_layout() {
        let conf = Conf::default();
        assert_eq!(conf.word_bits, 256);
        assert_eq!(conf.index_width, 4);
        assert_eq!(conf.max_dict_len(), 16);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_index_width_for() {
        assert_eq!(Conf::index_width_for(0), 1);
        assert_eq!(Conf::index_width_for(1), 1);
        assert_eq!(Conf::index_width_for(2), 1);
        assert_eq!(Conf::index_width_for(3), 2);
        assert_eq!(Conf::index_width_for(10), 4);
        assert_eq!(Conf::index_width_for(16), 4);
        assert_eq!(Conf::index_width_for(17), 5);
    }

    #[test]
    fn test_fitted_to_sizes_index_width() {
        let conf = Conf::default().fitted_to(100);
        assert_eq!(conf.index_width, 7);
        assert_eq!(conf.max_dict_len(), 128);
        assert_eq!(conf.value_width, DEFAULT_VALUE_WIDTH);
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        assert_eq!(
            Conf::new(12, 4, 10).validate(),
            Err(Error::InvalidWordBits(12))
        );
        assert_eq!(
            Conf::new(8, 4, 10).validate(),
            Err(Error::InvalidWidth {
                width: 10,
                word_bits: 8
            })
        );
        assert!(Conf::new(256, 0, 10).validate().is_err());
        assert!(Conf::new(256, 4, 65).validate().is_err());
    }
}
