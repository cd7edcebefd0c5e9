//! Splitting and joining of camel case identifiers.
//!
//! Splitting looks only at letter case: a word ends where a lowercase (or non-letter) run meets
//! an uppercase letter. A run of several uppercase letters is kept together as an acronym, except
//! that its last letter starts the next word when a lowercase letter follows it, so
//! `HTTPServer` splits into `HTTP` and `Server`.
//!
//! Joining concatenates the words and then restores initialisms at the very start and the very
//! end of the result. Initialisms in the middle are left alone, since without separators there
//! is no reliable way to tell where they begin.

use std::sync::Arc;

use crate::initialism::{self, InitialismRegistry};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ScanState {
    InUpperRun,
    InLowerRun,
}

/// The join style of camel case conventions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CamelJoinStyle {
    initialisms: Arc<InitialismRegistry>,
}

impl Default for CamelJoinStyle {
    fn default() -> Self {
        Self::new(Arc::clone(&initialism::COMMON))
    }
}

impl CamelJoinStyle {
    pub fn new(initialisms: Arc<InitialismRegistry>) -> Self {
        Self { initialisms }
    }

    pub fn initialisms(&self) -> &InitialismRegistry {
        &self.initialisms
    }

    pub fn split(&self, name: &str) -> Vec<String> {
        split_camel(name)
    }

    pub fn join<S: AsRef<str>>(&self, words: &[S]) -> String {
        let mut joined = String::new();
        for word in words {
            joined.push_str(word.as_ref());
        }
        restore_initialisms(joined, &self.initialisms)
    }
}

/// Splits a camel case identifier into its words.
///
/// The scan starts as if inside an uppercase run, so a leading capital does not produce an
/// empty first word. An all uppercase input is a single word.
pub fn split_camel(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::InUpperRun;

    for c in name.chars() {
        // the Unicode Uppercase property, a superset of the Lu category
        let upper = c.is_uppercase();
        match (state, upper) {
            (ScanState::InUpperRun, true) => current.push(c),
            (ScanState::InUpperRun, false) => {
                // the last letter of an acronym run begins the lowercase word that follows it
                if current.chars().nth(1).is_some() {
                    if let Some(last) = current.pop() {
                        words.push(std::mem::take(&mut current));
                        current.push(last);
                    }
                }
                current.push(c);
                state = ScanState::InLowerRun;
            }
            (ScanState::InLowerRun, true) => {
                words.push(std::mem::take(&mut current));
                current.push(c);
                state = ScanState::InUpperRun;
            }
            (ScanState::InLowerRun, false) => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Rewrites a leading and a trailing initialism of `joined` in uppercase.
///
/// Each end takes the first registry entry that matches it, compared ASCII case-insensitively.
/// The prefix is handled first and the suffix is then matched against the updated string.
pub fn restore_initialisms(mut joined: String, initialisms: &InitialismRegistry) -> String {
    if let Some(prefix) = initialisms
        .iter()
        .find(|initialism| has_prefix_ignore_ascii_case(&joined, initialism))
    {
        joined.replace_range(..prefix.len(), prefix);
    }

    if let Some(suffix) = initialisms
        .iter()
        .find(|initialism| has_suffix_ignore_ascii_case(&joined, initialism))
    {
        let start = joined.len() - suffix.len();
        joined.replace_range(start.., suffix);
    }

    joined
}

fn has_prefix_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

fn has_suffix_ignore_ascii_case(s: &str, suffix: &str) -> bool {
    s.len()
        .checked_sub(suffix.len())
        .and_then(|start| s.get(start..))
        .map_or(false, |tail| tail.eq_ignore_ascii_case(suffix))
}
