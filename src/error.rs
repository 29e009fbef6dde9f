//! Error types for packing, unpacking and mapping lookups.

use thiserror::Error;

/// Error variants for packed-array and mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value does not fit in the declared element width.
    #[error("value {value} does not fit in {width} bits")]
    ValueOutOfRange {
        /// The offending value.
        value: u64,
        /// The declared element width.
        width: u32,
    },

    /// An element index at or beyond the caller-tracked length.
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length.
        len: usize,
    },

    /// A mapping key at or beyond the number of keys.
    #[error("key out of bounds: {key} >= {len}")]
    KeyOutOfRange {
        /// The requested key.
        key: usize,
        /// The number of keys.
        len: usize,
    },

    /// The element width is zero, above 64, or wider than a word.
    #[error("invalid element width {width} for {word_bits}-bit words")]
    InvalidWidth {
        /// The requested element width.
        width: u32,
        /// The word size it was paired with.
        word_bits: u32,
    },

    /// The word size is not a positive multiple of 8.
    #[error("word size must be a positive multiple of 8 bits, got {0}")]
    InvalidWordBits(u32),

    /// More dictionary values than the index width can address.
    #[error("dictionary of {len} values exceeds the {max} addressable by the index width")]
    DictionaryTooLarge {
        /// Number of dictionary values supplied.
        len: usize,
        /// Maximum addressable entries.
        max: usize,
    },

    /// A key points at a dictionary entry that does not exist.
    #[error("key {key} references dictionary entry {index}, but the dictionary has {len} values")]
    UnknownEntry {
        /// The key carrying the bad index.
        key: usize,
        /// The dictionary index it carries.
        index: u64,
        /// Number of dictionary values.
        len: usize,
    },

    /// Two mappings return different values for the same key.
    #[error("mappings disagree at key {key}: {left} != {right}")]
    Divergence {
        /// First key where the mappings disagree.
        key: usize,
        /// Value returned by the left mapping.
        left: u64,
        /// Value returned by the right mapping.
        right: u64,
    },

    /// Two mappings cover a different number of keys.
    #[error("mappings have different lengths: {left} != {right}")]
    LengthMismatch {
        /// Length of the left mapping.
        left: usize,
        /// Length of the right mapping.
        right: usize,
    },

    /// Persisted words are malformed or too short for the stated metadata.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// A specialized Result type for packing operations.
pub type Result<T> = std::result::Result<T, Error>;
