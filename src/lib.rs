//! Lazy iteration over the positions of set or unset bits in a fixed-width
//! bit vector.
//! `no_std`, no heap / `alloc`, no `unsafe` — just `core`.
//!
//! [`indices_on`] and [`indices_off`] are the two entry points. Each returns
//! an [`Indices`] iterator that scans the bit vector from the least to the
//! most significant bit and yields every position whose bit matches, without
//! collecting anything.
//!
//! # Examples
//! ```
//! use bit_indices::{BitArray, indices_off, indices_on, word_count};
//!
//! const BIT_COUNT: usize = 10;
//! let bits: BitArray<BIT_COUNT, { word_count(BIT_COUNT) }> = "10110010".parse().unwrap();
//!
//! let mut on = [0; 4];
//! for (slot, idx) in on.iter_mut().zip(indices_on(&bits)) {
//!     *slot = idx;
//! }
//! assert_eq!(on, [1, 4, 5, 7]);
//!
//! // negating the vector swaps the two sequences
//! assert!(indices_on(!bits).eq(indices_off(&bits)));
//! ```
//!
//! # Bit vectors
//!
//! Anything implementing [`BitVector`] can be iterated:
//!
//! - [`BitArray`], a const-generic, stack-only bit array of any width
//!   (including zero)
//! - unsigned integers `u8` through `u128` and `usize`
//! - `[bool; N]` and `[bool]`
//! - shared references to any of the above
//!
//! Passing a reference borrows the bit vector for as long as the sequence is
//! alive; passing a value moves (or copies) it into the sequence.
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Static dispatch only, monomorphized per bit vector type
//! - Word-at-a-time skipping via `trailing_zeros` for [`BitArray`] and the
//!   integer types; a bit-by-bit fallback for everything else
//! - Fused iterators: once exhausted, a sequence stays exhausted

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bit_array;
mod bit_vector;
mod indices;

pub use bit_array::{BitArray, ParseBitsError, word_count};
pub use bit_vector::BitVector;
pub use indices::{Indices, Match, indices, indices_off, indices_on};
