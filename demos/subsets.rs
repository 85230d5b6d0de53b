use bit_indices::indices_on;

/// Prints every subset of `items`, using the on bits of a counter as the
/// selection mask.
fn subsets(items: &[char]) {
    assert!(items.len() < 32, "too many items for a u32 mask");
    for mask in 0u32..1u32 << items.len() {
        let picked: Vec<char> = indices_on(mask).map(|idx| items[idx]).collect();
        println!("{mask:0width$b} {picked:?}", width = items.len());
    }
}

fn main() {
    subsets(&['a', 'b', 'c', 'd']);
}
