//! Word extraction from captured pane text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Letters of any script (with combining marks, so decomposed accents stay
/// inside the word), ASCII digits, hyphen and underscore.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-_\p{L}\p{M}0-9]+").expect("word regex is valid")
});

/// Distinct words across all lines of one pane, in order of first
/// appearance. Matching is case-sensitive and unnormalized.
pub fn all_words<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in lines {
        for m in WORD_RE.find_iter(line.as_ref()) {
            let word = m.as_str();
            if seen.insert(word) {
                words.push(word.to_string());
            }
        }
    }
    words
}
