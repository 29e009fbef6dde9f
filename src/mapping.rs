//! Common read interface for key→value lookup tables.

use crate::error::{Error, Result};

/// Storage cost of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Footprint {
    /// Storage words occupied.
    pub words: usize,
    /// Bits carrying data; the rest of those words is padding.
    pub payload_bits: u64,
}

impl Footprint {
    /// Words saved relative to `other` (negative if this one is larger).
    pub fn words_saved_over(&self, other: &Footprint) -> i64 {
        other.words as i64 - self.words as i64
    }
}

/// A read-only table from dense keys `0..len` to values.
pub trait Mapping {
    /// Number of keys.
    fn len(&self) -> usize;

    /// Return true if the mapping has no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the value for `key`.
    ///
    /// Fails with [`Error::KeyOutOfRange`] if `key >= len()`.
    fn get(&self, key: usize) -> Result<u64>;

    /// Storage cost of this layout.
    fn footprint(&self) -> Footprint;
}

/// Check that two mappings return the same value for every key.
///
/// Returns the number of keys compared.
pub fn verify_equivalent<A, B>(left: &A, right: &B) -> Result<usize>
where
    A: Mapping + ?Sized,
    B: Mapping + ?Sized,
{
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    for key in 0..left.len() {
        let (l, r) = (left.get(key)?, right.get(key)?);
        if l != r {
            return Err(Error::Divergence {
                key,
                left: l,
                right: r,
            });
        }
    }
    Ok(left.len())
}
