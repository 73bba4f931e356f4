use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use std::collections::HashSet;

/// Alphabet used for generated vocabularies. It is kept small so that words
/// share prefixes often and the compiled patterns nest deeply.
pub const ALPHABET: &[char] = &['a', 'b', 'c', 'd'];

/// Generate `count` random words over [`ALPHABET`] with lengths in
/// `1..=max_len`. Duplicates are possible.
#[allow(dead_code)]
pub fn random_words(seed: u64, count: usize, max_len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect()
        })
        .collect()
}

/// Compile `pattern` so that it must match an entire input.
#[allow(dead_code)]
pub fn full_match_regex(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$"))
        .unwrap_or_else(|err| panic!("compiled pattern [{pattern}] is not valid: {err}"))
}

/// Assert that `regex` matches exactly the words in `vocabulary` among all
/// strings over [`ALPHABET`] up to `max_len` characters.
#[allow(dead_code)]
pub fn assert_matches_exactly(regex: &Regex, vocabulary: &HashSet<String>, max_len: usize) {
    assert!(!regex.is_match(""), "pattern [{regex}] matched the empty string");

    for candidate in wordhierarchy::tests_common::generate_words(ALPHABET, 1..=max_len) {
        assert_eq!(
            regex.is_match(&candidate),
            vocabulary.contains(&candidate),
            "pattern [{regex}] disagrees with the vocabulary on [{candidate}]"
        );
    }
}
