use crate::{
    visitor::{Visitable, Visitor},
    WordNode, WordTree,
};
use std::{collections::HashSet, error::Error, fmt};

/// The outcome of a [`CoverageChecker`] traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// The number of distinct vocabulary words found in the tree
    pub found: usize,
    /// Vocabulary words that were never reached, sorted
    pub missing: Vec<String>,
    /// Complete words in the tree that are not part of the vocabulary, sorted
    pub unexpected: Vec<String>,
}

impl CoverageReport {
    /// Returns true if every vocabulary word was found in the tree.
    ///
    /// Unexpected words are reported, but do not fail the check.
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The tree did not contain every word of the expected vocabulary. See the
/// documentation on [`CoverageChecker`] for more context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageError {
    /// Vocabulary words that were never reached, sorted
    pub missing: Vec<String>,
    /// Complete words in the tree that are not part of the vocabulary, sorted
    pub unexpected: Vec<String>,
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The tree is missing [{}] vocabulary words: {:?}",
            self.missing.len(),
            self.missing
        )?;
        if !self.unexpected.is_empty() {
            write!(
                f,
                ". It also contains [{}] words not in the vocabulary: {:?}",
                self.unexpected.len(),
                self.unexpected
            )?;
        }
        Ok(())
    }
}

impl Error for CoverageError {}

/// A visitor of the word tree which checks it against an expected vocabulary.
///
/// For every complete node, the full word is rebuilt by following the parent
/// links up to the root. Words that are not part of the vocabulary are
/// reported as unexpected; all others are recorded as found. After the
/// traversal, [`CoverageChecker::finish`] reports every vocabulary word that
/// was never found.
///
/// Diagnostics are emitted as `tracing` warnings and collected in the
/// [`CoverageReport`].
#[derive(Debug)]
pub struct CoverageChecker {
    expected: HashSet<String>,
    observed: HashSet<String>,
    unexpected: Vec<String>,
}

impl CoverageChecker {
    /// Traverse the given tree and check that it stores exactly the given
    /// vocabulary. Returns the number of vocabulary words found.
    ///
    /// # Errors
    ///
    /// Returns a [`CoverageError`] if any vocabulary word is missing from the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordhierarchy::{visitor::CoverageChecker, WordTree};
    ///
    /// let vocabulary = ["cat", "car", "dog"];
    /// let tree = WordTree::from(vocabulary);
    /// assert_eq!(CoverageChecker::check(&tree, vocabulary), Ok(3));
    ///
    /// let error = CoverageChecker::check(&tree, ["cat", "cow"]).unwrap_err();
    /// assert_eq!(error.missing, ["cow"]);
    /// assert_eq!(error.unexpected, ["car", "dog"]);
    /// ```
    pub fn check<I, S>(tree: &WordTree, vocabulary: I) -> Result<usize, CoverageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut visitor = CoverageChecker::new(vocabulary);
        tree.visit_with(&mut visitor);
        let report = visitor.finish();

        if report.passed() {
            Ok(report.found)
        } else {
            Err(CoverageError {
                missing: report.missing,
                unexpected: report.unexpected,
            })
        }
    }

    /// Create a visitor for a single traversal, expecting the given
    /// vocabulary.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CoverageChecker {
            expected: vocabulary.into_iter().map(Into::into).collect(),
            observed: HashSet::new(),
            unexpected: Vec::new(),
        }
    }

    /// Finish the traversal and report which vocabulary words were never
    /// found.
    pub fn finish(self) -> CoverageReport {
        let CoverageChecker {
            mut expected,
            observed,
            mut unexpected,
        } = self;

        expected.retain(|word| !observed.contains(word));

        let mut missing: Vec<_> = expected.into_iter().collect();
        missing.sort_unstable();
        unexpected.sort_unstable();

        if !missing.is_empty() {
            tracing::warn!(
                num_missing = missing.len(),
                "vocabulary words not found in tree"
            );
            for word in &missing {
                tracing::warn!(word = word.as_str(), "not found in tree");
            }
        }

        CoverageReport {
            found: observed.len(),
            missing,
            unexpected,
        }
    }
}

impl Visitor for CoverageChecker {
    fn visit(&mut self, node: WordNode<'_>) -> bool {
        if node.segment().is_some() && node.is_complete() {
            let word = node.word();
            if self.expected.contains(&word) {
                self.observed.insert(word);
            } else {
                tracing::warn!(word = word.as_str(), "not in vocabulary");
                self.unexpected.push(word);
            }
        }

        true
    }
}
