/// Read access to a fixed-width sequence of bits.
///
/// Positions are numbered from `0` (least significant) to `width() - 1`
/// (most significant). The width of a value never changes while it is
/// borrowed, so an [`Indices`] sequence can cache it.
///
/// Only [`width`] and [`is_set`] are required. [`next_matching`] has a
/// bit-by-bit default that word-backed types override to skip whole runs of
/// non-matching bits at once.
///
/// # Examples
/// ```
/// use bit_indices::BitVector;
///
/// let byte = 0b0000_0110u8;
/// assert_eq!(byte.width(), 8);
/// assert!(byte.is_set(1));
/// assert_eq!(byte.next_matching(3, false), Some(3));
/// assert_eq!(byte.next_matching(0, true), Some(1));
/// ```
///
/// [`Indices`]: crate::Indices
/// [`width`]: BitVector::width
/// [`is_set`]: BitVector::is_set
/// [`next_matching`]: BitVector::next_matching
pub trait BitVector {
    /// Returns the number of bits.
    fn width(&self) -> usize;

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `idx >= self.width()`.
    fn is_set(&self, idx: usize) -> bool;

    /// Returns the lowest index `i` with `from <= i < self.width()` whose bit
    /// equals `value`, or `None` if there is none.
    ///
    /// Never panics, `from` may be past the end.
    fn next_matching(&self, from: usize, value: bool) -> Option<usize> {
        (from..self.width()).find(|&idx| self.is_set(idx) == value)
    }
}

impl<B: BitVector + ?Sized> BitVector for &B {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }

    #[inline]
    fn is_set(&self, idx: usize) -> bool {
        (**self).is_set(idx)
    }

    #[inline]
    fn next_matching(&self, from: usize, value: bool) -> Option<usize> {
        (**self).next_matching(from, value)
    }
}

macro_rules! impl_bit_vector_for_uint {
    ($($uint:ty),+ $(,)?) => {
        $(
            impl BitVector for $uint {
                #[inline]
                fn width(&self) -> usize {
                    <$uint>::BITS as usize
                }

                #[inline]
                fn is_set(&self, idx: usize) -> bool {
                    assert!(idx < self.width(), "Bit index {idx} out of bounds");
                    *self >> idx & 1 != 0
                }

                #[inline]
                fn next_matching(&self, from: usize, value: bool) -> Option<usize> {
                    if from >= self.width() {
                        return None;
                    }
                    let word = if value { *self } else { !*self };
                    let remaining = word >> from;
                    if remaining == 0 {
                        return None;
                    }
                    Some(from + remaining.trailing_zeros() as usize)
                }
            }
        )+
    };
}

impl_bit_vector_for_uint!(u8, u16, u32, u64, u128, usize);

impl BitVector for [bool] {
    #[inline]
    fn width(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_set(&self, idx: usize) -> bool {
        assert!(idx < self.len(), "Bit index {idx} out of bounds");
        self[idx]
    }
}

impl<const N: usize> BitVector for [bool; N] {
    #[inline]
    fn width(&self) -> usize {
        N
    }

    #[inline]
    fn is_set(&self, idx: usize) -> bool {
        self.as_slice().is_set(idx)
    }
}
