//! Helpers shared by unit tests, integration tests and benchmarks.

use crate::WordTree;

/// Generate every word over `alphabet` whose length is in `lengths`, in
/// lexicographic order of the alphabet.
///
/// For example, `generate_words(&['a', 'b'], 1..=2)` yields `a`, `b`, `aa`,
/// `ab`, `ba`, `bb`.
pub fn generate_words(
    alphabet: &[char],
    lengths: std::ops::RangeInclusive<usize>,
) -> impl Iterator<Item = String> + '_ {
    lengths.flat_map(move |length| {
        let total = alphabet.len().pow(length as u32);
        (0..total).map(move |mut index| {
            let mut word = vec![' '; length];
            for slot in word.iter_mut().rev() {
                *slot = alphabet[index % alphabet.len()];
                index /= alphabet.len();
            }
            word.into_iter().collect()
        })
    })
}

/// Build a tree from the given words, returning it with the list of distinct
/// non-empty words in first-seen order.
pub fn setup_tree_from_words<I, S>(words: I) -> (WordTree, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = WordTree::new();
    let mut vocabulary = Vec::new();
    for word in words {
        if tree.insert(word.as_ref()) {
            vocabulary.push(word.as_ref().to_owned());
        }
    }
    (tree, vocabulary)
}
