use bit_indices::{BitArray, indices_off, indices_on, word_count};
use test_case::test_case;

type Byte = BitArray<8, { word_count(8) }>;

fn parse(pattern: &str) -> Byte {
    pattern.parse().expect("valid 8-bit pattern")
}

#[test_case("00000000", &[], &[0, 1, 2, 3, 4, 5, 6, 7] ; "empty")]
#[test_case("00000001", &[0], &[1, 2, 3, 4, 5, 6, 7] ; "single low bit")]
#[test_case("10101010", &[1, 3, 5, 7], &[0, 2, 4, 6] ; "odd positions")]
#[test_case("11110000", &[4, 5, 6, 7], &[0, 1, 2, 3] ; "upper half")]
#[test_case("10110010", &[1, 4, 5, 7], &[0, 2, 3, 6] ; "mixed")]
#[test_case("11111111", &[0, 1, 2, 3, 4, 5, 6, 7], &[] ; "full")]
fn byte_patterns(pattern: &str, on: &[usize], off: &[usize]) {
    let bits = parse(pattern);
    assert_eq!(indices_on(&bits).collect::<Vec<_>>(), on);
    assert_eq!(indices_off(&bits).collect::<Vec<_>>(), off);

    // negation swaps the two sequences
    assert_eq!(indices_off(!bits).collect::<Vec<_>>(), on);
    assert_eq!(indices_on(!bits).collect::<Vec<_>>(), off);

    // an integer with the same bits behaves identically
    let byte = u8::from_str_radix(pattern, 2).expect("valid binary literal");
    assert!(indices_on(byte).eq(indices_on(&bits)));
    assert!(indices_off(byte).eq(indices_off(&bits)));
}

#[test_case(0 ; "zero width")]
#[test_case(1 ; "one bit")]
#[test_case(64 ; "one full word")]
#[test_case(65 ; "spills into second word")]
#[test_case(256 ; "four full words")]
fn all_zero_and_all_one_slices(width: usize) {
    let zeros = vec![false; width];
    let ones = vec![true; width];

    assert_eq!(indices_on(zeros.as_slice()).next(), None);
    assert!(indices_off(zeros.as_slice()).eq(0..width));
    assert!(indices_on(ones.as_slice()).eq(0..width));
    assert_eq!(indices_off(ones.as_slice()).next(), None);
}

#[test]
fn single_bit_yields_exactly_once() {
    let mut ones = indices_on(parse("00000001"));
    assert_eq!(ones.next(), Some(0));
    assert_eq!(ones.next(), None);
    assert_eq!(ones.next(), None);
}

#[test]
fn wide_pattern_across_words() {
    let bits = BitArray::<200, { word_count(200) }>::from_ones_iter([0, 63, 64, 127, 128, 199]);
    assert_eq!(
        indices_on(&bits).collect::<Vec<_>>(),
        [0, 63, 64, 127, 128, 199]
    );
    assert_eq!(indices_off(&bits).count(), 194);
    assert_eq!(indices_off(&bits).next(), Some(1));
    assert_eq!(indices_off(&bits).nth(61), Some(62));
    assert_eq!(indices_off(&bits).nth(62), Some(65));
}
