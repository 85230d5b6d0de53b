use bit_indices::{BitVector, indices_off, indices_on};

/// Bits stored most significant first, the way a packet header is laid out.
struct MsbFirst<'a>(&'a [u8]);

impl BitVector for MsbFirst<'_> {
    fn width(&self) -> usize {
        self.0.len() * 8
    }

    fn is_set(&self, idx: usize) -> bool {
        assert!(idx < self.width(), "Bit index {idx} out of bounds");
        self.0[idx / 8] & (0x80u8 >> (idx % 8)) != 0
    }
}

fn main() {
    let header = MsbFirst(&[0b1000_0000, 0b0000_0001]);
    assert!(indices_on(&header).eq([0, 15]));
    assert_eq!(indices_off(&header).count(), 14);
}
