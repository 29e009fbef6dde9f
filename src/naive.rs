//! Naive mapping: one full value per key, no packing.
//!
//! The correctness oracle and storage baseline for [`crate::DictMapping`].
//! Each key occupies its own storage word, as a plain key→value table would.

use crate::conf::Conf;
use crate::dict::{check_dict_len, check_indices, dictionary_encode};
use crate::error::{Error, Result};
use crate::mapping::{Footprint, Mapping};
use crate::pack::fits;

/// A direct key→value table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaiveMapping {
    slots: Vec<u64>,
    value_width: u32,
}

impl NaiveMapping {
    /// Build by resolving every key's dictionary index up front.
    ///
    /// Accepts the same input as [`crate::DictMapping::build`] and rejects the
    /// same oversized dictionaries, malformed indices and values.
    pub fn build(key_indices: &[u64], values: &[u64], conf: Conf) -> Result<Self> {
        conf.validate()?;
        check_dict_len(values.len(), &conf)?;
        let width = conf.value_width;
        if let Some(&value) = values.iter().find(|&&v| !fits(v, width)) {
            return Err(Error::ValueOutOfRange { value, width });
        }
        check_indices(key_indices, values.len())?;

        let slots = key_indices.iter().map(|&i| values[i as usize]).collect();
        Ok(Self {
            slots,
            value_width: width,
        })
    }

    /// Build from a plain list of per-key values.
    pub fn from_values(per_key: &[u64], conf: Conf) -> Result<Self> {
        let (key_indices, values) = dictionary_encode(per_key);
        Self::build(&key_indices, &values, conf)
    }

    /// Value for `key`.
    pub fn get(&self, key: usize) -> Result<u64> {
        self.slots.get(key).copied().ok_or(Error::KeyOutOfRange {
            key,
            len: self.slots.len(),
        })
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Mapping for NaiveMapping {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, key: usize) -> Result<u64> {
        NaiveMapping::get(self, key)
    }

    fn footprint(&self) -> Footprint {
        Footprint {
            words: self.slots.len(),
            payload_bits: self.slots.len() as u64 * self.value_width as u64,
        }
    }
}
