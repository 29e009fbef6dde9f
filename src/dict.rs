//! Dictionary-compressed mapping.
//!
//! Two packed arrays stand in for one value per key:
//!
//! ```text
//! keys:  [i_0, i_1, ..., i_{N-1}]   W_i bits each (indices into dict)
//! dict:  [v_0, v_1, ..., v_{K-1}]   W_v bits each
//! get(k) = dict[keys[k]]
//! ```
//!
//! Storage is $N W_i + K W_v$ bits instead of $N W_v$, a win whenever
//! $K W_v < N (W_v - W_i)$. A lookup is two word reads regardless of $N$
//! and $K$.

use std::collections::HashMap;

use crate::conf::Conf;
use crate::error::{Error, Result};
use crate::mapping::{Footprint, Mapping};
use crate::packed::PackedArray;
use crate::words::Words;

/// Key → dictionary index → value, both levels bit-packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictMapping {
    conf: Conf,
    keys: PackedArray,
    dict: PackedArray,
}

impl DictMapping {
    /// Build from per-key dictionary indices and the dictionary values.
    ///
    /// # Errors
    ///
    /// - [`Error::DictionaryTooLarge`] if `values.len() > 2^index_width`.
    /// - [`Error::UnknownEntry`] if a key index is `>= values.len()`.
    /// - [`Error::ValueOutOfRange`] if a value does not fit `value_width`.
    pub fn build(key_indices: &[u64], values: &[u64], conf: Conf) -> Result<Self> {
        conf.validate()?;
        check_dict_len(values.len(), &conf)?;
        check_indices(key_indices, values.len())?;

        let dict = PackedArray::new(values, conf.value_width, conf.word_bits)?;
        let keys = PackedArray::new(key_indices, conf.index_width, conf.word_bits)?;

        log::debug!(
            "dictionary mapping: {} keys in {} words, {} entries in {} words",
            keys.len(),
            keys.words().len(),
            dict.len(),
            dict.words().len()
        );
        Ok(Self { conf, keys, dict })
    }

    /// Build from a plain list of per-key values.
    ///
    /// Distinct values become dictionary entries in first-seen order.
    pub fn from_values(per_key: &[u64], conf: Conf) -> Result<Self> {
        let (key_indices, values) = dictionary_encode(per_key);
        Self::build(&key_indices, &values, conf)
    }

    /// Reattach persisted words to their caller-tracked metadata.
    ///
    /// `n` is the number of keys and `k` the number of dictionary entries.
    /// Key indices are not rescanned; a dangling one surfaces as
    /// [`Error::UnknownEntry`] on the `get` that reads it.
    pub fn from_parts(keys: Words, dict: Words, n: usize, k: usize, conf: Conf) -> Result<Self> {
        conf.validate()?;
        check_dict_len(k, &conf)?;
        if keys.word_bits() != conf.word_bits || dict.word_bits() != conf.word_bits {
            return Err(Error::InvalidEncoding(format!(
                "word size mismatch: keys {} / dict {} vs configured {}",
                keys.word_bits(),
                dict.word_bits(),
                conf.word_bits
            )));
        }
        Ok(Self {
            conf,
            keys: PackedArray::from_parts(keys, conf.index_width, n)?,
            dict: PackedArray::from_parts(dict, conf.value_width, k)?,
        })
    }

    /// Dictionary index stored for `key`.
    pub fn index_of(&self, key: usize) -> Result<u64> {
        if key >= self.keys.len() {
            return Err(Error::KeyOutOfRange {
                key,
                len: self.keys.len(),
            });
        }
        self.keys.get(key)
    }

    /// Value for `key`: one read from the key array, one from the dictionary.
    pub fn get(&self, key: usize) -> Result<u64> {
        let index = self.index_of(key)?;
        let unknown = Error::UnknownEntry {
            key,
            index,
            len: self.dict.len(),
        };
        let slot = usize::try_from(index).map_err(|_| unknown.clone())?;
        self.dict.get(slot).map_err(|_| unknown)
    }

    /// Number of keys, N.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of dictionary entries, K.
    pub fn dict_len(&self) -> usize {
        self.dict.len()
    }

    /// The packed key→index array.
    pub fn keys(&self) -> &PackedArray {
        &self.keys
    }

    /// The packed index→value table.
    pub fn dictionary(&self) -> &PackedArray {
        &self.dict
    }

    /// The widths and word size in use.
    pub fn conf(&self) -> Conf {
        self.conf
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.keys.heap_bytes() + self.dict.heap_bytes()
    }
}

impl Mapping for DictMapping {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn get(&self, key: usize) -> Result<u64> {
        DictMapping::get(self, key)
    }

    fn footprint(&self) -> Footprint {
        Footprint {
            words: self.keys.words().len() + self.dict.words().len(),
            payload_bits: self.keys.layout().payload_bits(self.keys.len())
                + self.dict.layout().payload_bits(self.dict.len()),
        }
    }
}

/// Fail if `len` dictionary entries exceed what the index width addresses.
pub(crate) fn check_dict_len(len: usize, conf: &Conf) -> Result<()> {
    let max = conf.max_dict_len();
    if len > max {
        return Err(Error::DictionaryTooLarge { len, max });
    }
    Ok(())
}

/// Fail on the first key index that points past the dictionary.
pub(crate) fn check_indices(key_indices: &[u64], dict_len: usize) -> Result<()> {
    match key_indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index >= dict_len as u64)
    {
        Some((key, &index)) => Err(Error::UnknownEntry {
            key,
            index,
            len: dict_len,
        }),
        None => Ok(()),
    }
}

/// Split per-key values into (key indices, distinct values in first-seen order).
pub(crate) fn dictionary_encode(per_key: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let mut seen = HashMap::<u64, u64>::new();
    let mut values = Vec::new();
    let key_indices: Vec<u64> = per_key
        .iter()
        .map(|&v| {
            *seen.entry(v).or_insert_with(|| {
                values.push(v);
                values.len() as u64 - 1
            })
        })
        .collect();
    (key_indices, values)
}
