//! How the words of an identifier are put together and pulled apart.

use std::borrow::Cow;
use std::sync::Arc;

use crate::camel::CamelJoinStyle;
use crate::initialism::InitialismRegistry;

/// Something that can break an identifier into its words.
pub trait Splitter {
    fn split_words(&self, name: &str) -> Vec<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinStyle {
    /// Words separated by a fixed string, as in `snake_case` or `kebab-case`.
    Delimiter(Cow<'static, str>),
    /// Words told apart by letter case, as in `camelCase`.
    Camel(CamelJoinStyle),
}

impl JoinStyle {
    pub fn delimiter(separator: impl Into<Cow<'static, str>>) -> Self {
        Self::Delimiter(separator.into())
    }

    /// The camel join style using the common initialisms.
    pub fn camel() -> Self {
        Self::Camel(CamelJoinStyle::default())
    }

    pub fn camel_with(initialisms: Arc<InitialismRegistry>) -> Self {
        Self::Camel(CamelJoinStyle::new(initialisms))
    }

    /// Splits `name` into words.
    ///
    /// With a delimiter, every occurrence of the separator ends a word and empty words are kept,
    /// so `"a__b"` yields `["a", "", "b"]`. An empty separator yields one word per character.
    /// An empty name always yields no words.
    pub fn split(&self, name: &str) -> Vec<String> {
        match self {
            Self::Delimiter(separator) => {
                if name.is_empty() {
                    Vec::new()
                } else if separator.is_empty() {
                    name.chars().map(String::from).collect()
                } else {
                    name.split(&**separator).map(str::to_owned).collect()
                }
            }
            Self::Camel(camel) => camel.split(name),
        }
    }

    /// Joins `words` into one identifier. Casing is left to the caller, except that the camel
    /// style restores initialisms at either end.
    pub fn join<S: AsRef<str>>(&self, words: &[S]) -> String {
        match self {
            Self::Delimiter(separator) => {
                let mut joined = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        joined.push_str(separator);
                    }
                    joined.push_str(word.as_ref());
                }
                joined
            }
            Self::Camel(camel) => camel.join(words),
        }
    }
}

impl Splitter for JoinStyle {
    fn split_words(&self, name: &str) -> Vec<String> {
        self.split(name)
    }
}
