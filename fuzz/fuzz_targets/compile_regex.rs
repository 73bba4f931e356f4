#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use regex::Regex;
use std::collections::HashSet;
use wordhierarchy::{
    visitor::{CoverageChecker, RegexCompiler},
    WordTree,
};

#[derive(Arbitrary, Debug)]
struct Input {
    words: Vec<String>,
    probes: Vec<String>,
}

libfuzzer_sys::fuzz_target!(|input: Input| {
    let vocabulary: HashSet<&str> = input
        .words
        .iter()
        .map(String::as_str)
        .filter(|word| !word.is_empty())
        .collect();
    let tree: WordTree = input.words.iter().collect();

    assert_eq!(tree.len(), vocabulary.len());
    assert_eq!(
        CoverageChecker::check(&tree, vocabulary.iter().copied()),
        Ok(vocabulary.len())
    );

    if tree.is_empty() {
        return;
    }

    let pattern = RegexCompiler::compile(&tree);
    assert_eq!(pattern, RegexCompiler::compile(&tree));

    let regex = match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => regex,
        // Very large vocabularies can exceed the default size limit
        Err(regex::Error::CompiledTooBig(_)) => return,
        Err(err) => panic!("pattern [{pattern}] is not valid: {err}"),
    };

    for word in &vocabulary {
        assert!(regex.is_match(word), "[{pattern}] should match [{word}]");
    }
    for probe in &input.probes {
        assert_eq!(
            regex.is_match(probe),
            vocabulary.contains(probe.as_str()),
            "[{pattern}] disagrees with the vocabulary on [{probe}]"
        );
    }
});
