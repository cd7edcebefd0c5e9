//! Per-word casing functions and title casing helpers.

use crate::initialism::{self, InitialismRegistry};

/// Recases a single word.
pub type WordCase = fn(&str) -> String;

pub fn identity(word: &str) -> String {
    word.to_owned()
}

pub fn to_lower(word: &str) -> String {
    word.to_lowercase()
}

pub fn to_upper(word: &str) -> String {
    word.to_uppercase()
}

/// Uppercases the first letter and keeps the rest as is: `"iD"` becomes `"ID"`.
pub fn to_title(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Uppercases the first letter and lowercases the rest: `"HTTP"` becomes `"Http"`.
pub fn to_title_lower(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

/// Title cases `s` without keeping existing capitals, so acronyms are not preserved.
///
/// A word starts after whitespace or any ASCII punctuation other than `_`. Word starts are
/// uppercased, not titlecased, so a digraph like `ǆ` becomes `Ǆ` rather than `ǅ`.
pub fn strict_title(s: &str) -> String {
    let mut titled = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.extend(c.to_lowercase());
        }
        at_word_start = is_word_separator(c);
    }
    titled
}

/// Titles a string the way HTTP header names are titled.
///
/// Known header acronyms such as `WWW` or `DNT` are uppercased; everything else goes through
/// [`strict_title`].
pub fn http_title(s: &str) -> String {
    http_title_with(s, &initialism::HTTP_ACRONYMS)
}

pub fn http_title_with(s: &str, acronyms: &InitialismRegistry) -> String {
    if acronyms.is_known(s) {
        s.to_ascii_uppercase()
    } else {
        strict_title(s)
    }
}
