use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate `count` pseudo-random lowercase words with lengths between 3 and
/// 12 characters. Duplicates are removed, so fewer words may be returned.
pub fn generate_dictionary(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut words: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(3..=12);
            (0..len)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect()
        })
        .collect();
    words.sort();
    words.dedup();
    words
}
