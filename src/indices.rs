use crate::BitVector;
use core::iter::FusedIterator;
use core::ops::Not;

/// Selects which bit positions an [`Indices`] sequence reports.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Match {
    /// Positions whose bit is set.
    On,
    /// Positions whose bit is unset.
    Off,
}

impl Match {
    /// Returns the bit value this variant matches.
    #[inline]
    pub const fn bit(self) -> bool {
        matches!(self, Match::On)
    }
}

impl From<bool> for Match {
    #[inline]
    fn from(bit: bool) -> Self {
        if bit { Match::On } else { Match::Off }
    }
}

impl Not for Match {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Match::On => Match::Off,
            Match::Off => Match::On,
        }
    }
}

/// A lazy, ascending sequence of the positions in a bit vector whose bit
/// equals a [`Match`] value.
///
/// Created by [`indices_on`], [`indices_off`] and [`indices`]. Nothing is
/// computed until [`next`] is called, and nothing is buffered.
///
/// `B` is usually a shared reference such as `&BitArray<N, W>`, in which case
/// the borrow checker keeps the bit vector alive and unmodified for as long as
/// the sequence exists. Iterating a vector after it has been dropped does not
/// compile:
///
/// ```compile_fail
/// use bit_indices::{BitArray, indices_on, word_count};
///
/// let mut ones = {
///     let bits = BitArray::<8, { word_count(8) }>::with_all_set();
///     indices_on(&bits)
/// };
/// ones.next();
/// ```
///
/// and neither does modifying it mid-iteration:
///
/// ```compile_fail
/// use bit_indices::{BitArray, indices_on, word_count};
///
/// let mut bits = BitArray::<8, { word_count(8) }>::with_all_set();
/// for idx in indices_on(&bits) {
///     bits.unset(idx);
/// }
/// ```
///
/// `B` may also be an owned value, e.g. the result of a negation, which the
/// sequence then keeps for itself.
///
/// [`next`]: Iterator::next
#[derive(Debug, Clone)]
pub struct Indices<B> {
    bits: B,
    value: Match,
    width: usize,
    cursor: usize,
}

impl<B: BitVector> Indices<B> {
    /// Creates a sequence over `bits` reporting the positions that match
    /// `value`.
    #[inline]
    pub fn new(bits: B, value: Match) -> Self {
        let width = bits.width();
        Self {
            bits,
            value,
            width,
            cursor: 0,
        }
    }

    /// Returns which bit value this sequence reports.
    #[inline]
    pub fn value(&self) -> Match {
        self.value
    }
}

impl<B: BitVector> Iterator for Indices<B> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.width {
            return None;
        }
        match self.bits.next_matching(self.cursor, self.value.bit()) {
            Some(idx) => {
                debug_assert!(idx >= self.cursor && idx < self.width);
                self.cursor = idx + 1;
                Some(idx)
            }
            None => {
                self.cursor = self.width;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.width - self.cursor))
    }
}

impl<B: BitVector> FusedIterator for Indices<B> {}

/// Returns the indices of all set bits, in ascending order.
///
/// # Examples
/// ```
/// use bit_indices::indices_on;
///
/// let mut ones = indices_on(0b1011_0010u8);
/// assert_eq!(ones.next(), Some(1));
/// assert_eq!(ones.next(), Some(4));
/// assert_eq!(ones.next(), Some(5));
/// assert_eq!(ones.next(), Some(7));
/// assert_eq!(ones.next(), None);
/// ```
#[inline]
pub fn indices_on<B: BitVector>(bits: B) -> Indices<B> {
    Indices::new(bits, Match::On)
}

/// Returns the indices of all unset bits, in ascending order.
///
/// # Examples
/// ```
/// use bit_indices::{BitArray, indices_off, indices_on, word_count};
///
/// let bits: BitArray<10, { word_count(10) }> = "0010110010".parse().unwrap();
/// assert!(indices_off(&bits).eq([0, 2, 3, 6, 8, 9]));
/// assert!(indices_off(!bits).eq(indices_on(&bits)));
/// ```
#[inline]
pub fn indices_off<B: BitVector>(bits: B) -> Indices<B> {
    Indices::new(bits, Match::Off)
}

/// Returns the indices of all bits equal to `value`, in ascending order.
#[inline]
pub fn indices<B: BitVector>(bits: B, value: Match) -> Indices<B> {
    Indices::new(bits, value)
}
