use crate::BitVector;
use core::array::from_fn;
use core::fmt::{Debug, Display, Formatter};
use core::ops::Not;
use core::str::FromStr;

const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of `u64` words needed to store `bit_count` bits.
///
/// Inline this call as a const expression into the type annotation
/// generics; any other `WORD_COUNT` is rejected at compile time.
///
/// # Examples
/// ```
/// use bit_indices::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(10), 1);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BITS)
}

/// Error returned when parsing a [`BitArray`] from a binary string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseBitsError {
    /// A character other than `'0'` or `'1'` was found.
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidDigit {
        /// Character offset from the start of the input.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// The input has more digits than the bit array has bits.
    #[error("{len} digits do not fit into {width} bits")]
    TooLong {
        /// Number of digits in the input.
        len: usize,
        /// Width of the target bit array.
        width: usize,
    },
}

/// A fixed-width bit vector stored inline in `u64` words.
///
/// `BIT_COUNT` is the number of usable bits and may be zero. `WORD_COUNT`
/// must equal [`word_count`]`(BIT_COUNT)`; constructing a bit array with any
/// other value fails to compile:
///
/// ```compile_fail
/// use bit_indices::BitArray;
///
/// let bits = BitArray::<65, 1>::new();
/// ```
///
/// Bits past `BIT_COUNT` in the last word are always kept unset, which lets
/// [`next_matching`] scan whole words.
///
/// [`next_matching`]: BitVector::next_matching
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct BitArray<const BIT_COUNT: usize, const WORD_COUNT: usize>(
    pub(crate) [u64; WORD_COUNT],
);

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitArray<BIT_COUNT, WORD_COUNT> {
    const LAYOUT_CHECK: () = assert!(
        word_count(BIT_COUNT) == WORD_COUNT,
        "WORD_COUNT must match word_count(BIT_COUNT)."
    );

    /// Creates a new bit array with all bits unset.
    ///
    /// # Examples
    /// ```
    /// use bit_indices::{BitArray, indices_on, word_count};
    ///
    /// const EMPTY: BitArray<8, { word_count(8) }> = BitArray::new();
    /// assert_eq!(indices_on(&EMPTY).next(), None);
    /// ```
    pub const fn new() -> Self {
        let () = Self::LAYOUT_CHECK;
        Self([0; WORD_COUNT])
    }

    /// Creates a new bit array with all bits set.
    ///
    /// # Examples
    /// ```
    /// use bit_indices::{BitArray, indices_off, word_count};
    ///
    /// const FULL: BitArray<10, { word_count(10) }> = BitArray::with_all_set();
    /// assert!(FULL.is_set(9));
    /// assert_eq!(indices_off(&FULL).next(), None);
    /// ```
    pub const fn with_all_set() -> Self {
        let () = Self::LAYOUT_CHECK;
        let mut bits = Self([!0; WORD_COUNT]);
        bits.clean_unused_bits();
        bits
    }

    /// Constructs a bit array from a boolean slice, where `true` means set and
    /// `bits[0]` is the least significant bit.
    ///
    /// # Panics
    /// Panics if the slice length doesn't match `BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use bit_indices::{BitArray, word_count};
    ///
    /// let bits = BitArray::<4, { word_count(4) }>::from_slice(&[true, false, true, false]);
    /// assert!(bits.is_set(2));
    /// assert!(!bits.is_set(3));
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        assert_eq!(bits.len(), BIT_COUNT);
        let mut array = Self::new();
        for (idx, bit) in bits.iter().enumerate() {
            if *bit {
                array.set(idx)
            }
        }
        array
    }

    /// Constructs a bit array by setting only the indices provided in the
    /// iterator.
    ///
    /// # Panics
    /// Panics if any index is out of bounds (i.e., `>= BIT_COUNT`).
    ///
    /// # Examples
    /// ```
    /// use bit_indices::{BitArray, indices_on, word_count};
    ///
    /// let bits = BitArray::<70, { word_count(70) }>::from_ones_iter([69, 0, 64]);
    /// assert!(indices_on(&bits).eq([0, 64, 69]));
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut array = Self::new();
        for idx in iter {
            array.set(idx);
        }
        array
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds (i.e., `>= BIT_COUNT`).
    #[inline]
    pub fn set(&mut self, idx: usize) {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] |= 1u64 << bit_idx;
    }

    /// Unsets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn unset(&mut self, idx: usize) {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] &= !(1u64 << bit_idx);
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use bit_indices::{BitArray, word_count};
    ///
    /// let mut bits = BitArray::<8, { word_count(8) }>::new();
    /// bits.set(1);
    /// assert!(bits.is_set(1));
    /// assert!(!bits.is_set(0));
    /// ```
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] & 1u64 << bit_idx != 0
    }

    #[inline]
    const fn idxs(idx: usize) -> (usize, usize) {
        (idx / WORD_BITS, idx % WORD_BITS)
    }

    /// Returns a new bit array with every bit flipped.
    ///
    /// # Examples
    /// ```
    /// use bit_indices::{BitArray, indices_off, indices_on, word_count};
    ///
    /// let bits: BitArray<8, { word_count(8) }> = "10110010".parse().unwrap();
    /// assert!(indices_on(bits.bit_not()).eq(indices_off(&bits)));
    /// ```
    #[inline]
    pub fn bit_not(&self) -> Self {
        let mut result = Self(from_fn(|i| !self.0[i]));
        result.clean_unused_bits();
        result
    }

    /// Flips every bit in place.
    #[inline]
    pub fn in_place_bit_not(&mut self) {
        for word in &mut self.0 {
            *word = !*word;
        }
        self.clean_unused_bits();
    }

    #[inline]
    const fn clean_unused_bits(&mut self) {
        let bits_in_last = BIT_COUNT % WORD_BITS;
        if bits_in_last != 0 {
            let mask = (1u64 << bits_in_last) - 1;
            self.0[WORD_COUNT - 1] &= mask;
        }
    }

    #[inline]
    fn word(&self, word_idx: usize, value: bool) -> u64 {
        if value {
            self.0[word_idx]
        } else {
            !self.0[word_idx]
        }
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitVector
    for BitArray<BIT_COUNT, WORD_COUNT>
{
    #[inline]
    fn width(&self) -> usize {
        BIT_COUNT
    }

    #[inline]
    fn is_set(&self, idx: usize) -> bool {
        BitArray::is_set(self, idx)
    }

    fn next_matching(&self, from: usize, value: bool) -> Option<usize> {
        if from >= BIT_COUNT {
            return None;
        }
        let (mut word_idx, bit_idx) = Self::idxs(from);
        let mut current = self.word(word_idx, value) & (!0u64 << bit_idx);
        loop {
            if current != 0 {
                let idx = word_idx * WORD_BITS + current.trailing_zeros() as usize;
                // unused bits read as matches when looking for zeros
                return (idx < BIT_COUNT).then_some(idx);
            }
            word_idx += 1;
            if word_idx == WORD_COUNT {
                return None;
            }
            current = self.word(word_idx, value);
        }
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Default
    for BitArray<BIT_COUNT, WORD_COUNT>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Not for BitArray<BIT_COUNT, WORD_COUNT> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Not for &BitArray<BIT_COUNT, WORD_COUNT> {
    type Output = BitArray<BIT_COUNT, WORD_COUNT>;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> FromIterator<bool>
    for BitArray<BIT_COUNT, WORD_COUNT>
{
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut array = Self::new();
        let mut idx = 0;

        for bit in iter {
            if idx >= BIT_COUNT {
                panic!("Iterator yielded more than {BIT_COUNT} elements");
            }
            if bit {
                array.set(idx);
            }
            idx += 1;
        }

        if idx != BIT_COUNT {
            panic!("Iterator yielded fewer than {BIT_COUNT} elements");
        }

        array
    }
}

/// Parses a binary string written most significant bit first, the way a
/// bit vector is usually printed. Shorter inputs leave the high bits unset.
///
/// # Examples
/// ```
/// use bit_indices::{BitArray, ParseBitsError, word_count};
///
/// let bits: BitArray<10, { word_count(10) }> = "110".parse().unwrap();
/// assert!(bits.is_set(1) && bits.is_set(2) && !bits.is_set(0));
///
/// let err = "1021".parse::<BitArray<10, { word_count(10) }>>().unwrap_err();
/// assert_eq!(err, ParseBitsError::InvalidDigit { position: 2, found: '2' });
/// ```
impl<const BIT_COUNT: usize, const WORD_COUNT: usize> FromStr for BitArray<BIT_COUNT, WORD_COUNT> {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len > BIT_COUNT {
            return Err(ParseBitsError::TooLong {
                len,
                width: BIT_COUNT,
            });
        }
        let mut array = Self::new();
        for (position, found) in s.chars().enumerate() {
            match found {
                '1' => array.set(len - 1 - position),
                '0' => {}
                _ => return Err(ParseBitsError::InvalidDigit { position, found }),
            }
        }
        Ok(array)
    }
}

/// Prints the bits most significant first, e.g. `0010110010`.
impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Display for BitArray<BIT_COUNT, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for idx in (0..BIT_COUNT).rev() {
            write!(f, "{}", if self.is_set(idx) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Debug for BitArray<BIT_COUNT, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB ->")?;
        for idx in 0..BIT_COUNT {
            if idx % 8 == 0 {
                write!(f, " {idx}: ")?;
            }
            write!(f, "{}", if self.is_set(idx) { '1' } else { '0' })?;
        }
        write!(f, " <- MSB")
    }
}
