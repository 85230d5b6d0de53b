use bit_indices::{BitArray, Indices, indices_off, indices_on, word_count};

type Bits = BitArray<12, { word_count(12) }>;

fn negated_ones(bits: &Bits) -> Indices<Bits> {
    // the negation is moved into the sequence, so it may leave this scope
    indices_on(!bits)
}

fn main() {
    let bits: Bits = "100000000101".parse().unwrap();
    let ones = negated_ones(&bits);
    assert!(ones.eq(indices_off(&bits)));
    assert!(negated_ones(&bits).eq([1, 3, 4, 5, 6, 7, 8, 9, 10]));
}
