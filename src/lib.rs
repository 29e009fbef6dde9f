//! # Dictionary-Compressed Lookup Tables
//!
//! *Bit-packed storage for large tables over a small set of values.*
//!
//! ## Intuition First
//!
//! Picture a warehouse where every shelf holds a full crate, even though
//! there are only ten kinds of crate. A catalogue of the ten kinds, plus a
//! short tag on each shelf saying which kind belongs there, carries the same
//! information in a fraction of the space. Any shelf can still be answered
//! instantly: read the tag, then look it up in the catalogue.
//!
//! ## The Problem
//!
//! A table of $N$ keys whose values come from $K \ll N$ distinct $W_v$-bit
//! values:
//! - **One slot per key**: $N$ words, $O(1)$ lookup, almost all of it waste.
//! - **Dictionary + packed indices**: $N W_i + K W_v$ bits, still $O(1)$.
//!
//! ## Layout
//!
//! ```text
//! keys  (W_i = 4, B = 256):  64 indices per word
//! dict  (W_v = 10, B = 256): 6 groups x 4 values per word, 16 bits padding
//!
//! get(k) = dict[keys[k]]      two word reads
//! ```
//!
//! Elements never straddle a word. Widths that do not divide a byte are
//! packed in byte-aligned groups (see [`layout`]), so every position is
//! integer arithmetic on the element index.
//!
//! ## What Could Go Wrong
//!
//! 1. **Out-of-band metadata**: packed words carry no header. The element
//!    width, word size and logical length must be supplied identically on
//!    encode and decode; a mismatch is not detectable and reads garbage.
//! 2. **Trailing slots**: the last word's unused slots decode as zero, so the
//!    caller's length is the only thing separating data from padding.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`pack()`] / [`unpack()`]**: the raw codec over [`Words`].
//! - **`PackedArray`**: words plus width and length, with $O(1)$ `get`.
//! - **`DictMapping`**: the two-level compressed table.
//! - **`NaiveMapping`**: one value per key; oracle and storage baseline.
//! - **[`Mapping`]**: the shared read interface, with [`verify_equivalent`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conf;
pub mod dict;
pub mod error;
pub mod layout;
pub mod mapping;
pub mod naive;
pub mod pack;
pub mod packed;
pub mod unpack;
pub mod words;

pub use conf::Conf;
pub use dict::DictMapping;
pub use error::{Error, Result};
pub use layout::Layout;
pub use mapping::{verify_equivalent, Footprint, Mapping};
pub use naive::NaiveMapping;
pub use pack::pack;
pub use packed::PackedArray;
pub use unpack::unpack;
pub use words::Words;
