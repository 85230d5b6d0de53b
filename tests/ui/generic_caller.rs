use bit_indices::{BitArray, BitVector, indices_off, indices_on, word_count};

fn first_on_and_off<B: BitVector + Copy>(bits: B) -> (Option<usize>, Option<usize>) {
    (indices_on(bits).next(), indices_off(bits).next())
}

fn main() {
    let bits = BitArray::<70, { word_count(70) }>::from_ones_iter([0, 1, 2, 68]);
    assert_eq!(first_on_and_off(&bits), (Some(0), Some(3)));
    assert_eq!(first_on_and_off(u32::MAX), (Some(0), None));
    assert_eq!(first_on_and_off(&[false, true][..]), (Some(1), Some(0)));
}
