//! Case conventions: a join style plus the casing applied to each word.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::casing::{http_title, to_lower, to_title, to_title_lower, to_upper, WordCase};
use crate::error::{Error, Result};
use crate::join_style::{JoinStyle, Splitter};

/// A way of writing identifiers, described by how words are joined and how each word is cased.
///
/// The first word is cased with `initial_case`, every following word with `subsequent_case`.
/// `example` renders the convention's own name in itself and is only informational.
#[derive(Clone, Debug)]
pub struct CaseConvention {
    pub join_style: JoinStyle,
    pub initial_case: WordCase,
    pub subsequent_case: WordCase,
    pub example: Cow<'static, str>,
}

impl CaseConvention {
    pub fn new(
        join_style: JoinStyle,
        initial_case: WordCase,
        subsequent_case: WordCase,
        example: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            join_style,
            initial_case,
            subsequent_case,
            example: example.into(),
        }
    }

    /// Looks up one of the predefined conventions, see [`Convention`] for accepted names.
    pub fn by_name(name: &str) -> Result<&'static CaseConvention> {
        name.parse::<Convention>().map(Convention::case_convention)
    }

    pub fn apply_casing<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let case = if i == 0 {
                    self.initial_case
                } else {
                    self.subsequent_case
                };
                case(word.as_ref())
            })
            .collect()
    }

    /// Cases `words` for this convention and joins them.
    pub fn join_words<S: AsRef<str>>(&self, words: &[S]) -> String {
        self.join_style.join(&self.apply_casing(words))
    }
}

impl Splitter for CaseConvention {
    fn split_words(&self, name: &str) -> Vec<String> {
        self.join_style.split(name)
    }
}

impl fmt::Display for CaseConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.example)
    }
}

lazy_static! {
    pub static ref LOWER_CAMEL_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::camel(), to_lower, to_title_lower, "lowerCamelCase");
    /// Like [`LOWER_CAMEL_CASE`], but capitals inside words are left alone.
    pub static ref LOWER_CAMEL_CASE_KEEP_CAPS: CaseConvention =
        CaseConvention::new(JoinStyle::camel(), to_lower, to_title, "lowerCamelCaseKeepCaps");
    pub static ref UPPER_CAMEL_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::camel(), to_title_lower, to_title_lower, "UpperCamelCase");
    /// Like [`UPPER_CAMEL_CASE`], but capitals inside words are left alone.
    pub static ref UPPER_CAMEL_CASE_KEEP_CAPS: CaseConvention =
        CaseConvention::new(JoinStyle::camel(), to_title, to_title, "UpperCamelCaseKeepCaps");
    pub static ref LOWER_SNAKE_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::delimiter("_"), to_lower, to_lower, "lower_snake_case");
    pub static ref SCREAMING_SNAKE_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::delimiter("_"), to_upper, to_upper, "SCREAMING_SNAKE_CASE");
    pub static ref KEBAB_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::delimiter("-"), to_lower, to_lower, "kebab-case");
    pub static ref SCREAMING_KEBAB_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::delimiter("-"), to_upper, to_upper, "SCREAMING-KEBAB-CASE");
    /// Header names such as `Content-Type` or `WWW-Authenticate`.
    pub static ref HTTP_HEADER_CASE: CaseConvention =
        CaseConvention::new(JoinStyle::delimiter("-"), http_title, http_title, "HTTP-Header-Case");
}

/// Names of the predefined conventions.
///
/// Parsing ignores case as well as `_`, `-` and spaces, and accepts each convention's example
/// string along with the usual short names: `camel`, `pascal`, `snake`, `constant`, `kebab`,
/// `train` and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Convention {
    LowerCamel,
    LowerCamelKeepCaps,
    UpperCamel,
    UpperCamelKeepCaps,
    LowerSnake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
    HttpHeader,
}

impl Convention {
    pub const ALL: [Convention; 9] = [
        Convention::LowerCamel,
        Convention::LowerCamelKeepCaps,
        Convention::UpperCamel,
        Convention::UpperCamelKeepCaps,
        Convention::LowerSnake,
        Convention::ScreamingSnake,
        Convention::Kebab,
        Convention::ScreamingKebab,
        Convention::HttpHeader,
    ];

    pub fn case_convention(self) -> &'static CaseConvention {
        match self {
            Convention::LowerCamel => &*LOWER_CAMEL_CASE,
            Convention::LowerCamelKeepCaps => &*LOWER_CAMEL_CASE_KEEP_CAPS,
            Convention::UpperCamel => &*UPPER_CAMEL_CASE,
            Convention::UpperCamelKeepCaps => &*UPPER_CAMEL_CASE_KEEP_CAPS,
            Convention::LowerSnake => &*LOWER_SNAKE_CASE,
            Convention::ScreamingSnake => &*SCREAMING_SNAKE_CASE,
            Convention::Kebab => &*KEBAB_CASE,
            Convention::ScreamingKebab => &*SCREAMING_KEBAB_CASE,
            Convention::HttpHeader => &*HTTP_HEADER_CASE,
        }
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let convention = match normalized.as_str() {
            "lowercamelcase" | "lowercamel" | "camelcase" | "camel" => Convention::LowerCamel,
            "lowercamelcasekeepcaps" | "lowercamelkeepcaps" | "camelkeepcaps" => {
                Convention::LowerCamelKeepCaps
            }
            "uppercamelcase" | "uppercamel" | "pascalcase" | "pascal" => Convention::UpperCamel,
            "uppercamelcasekeepcaps" | "uppercamelkeepcaps" | "pascalkeepcaps" => {
                Convention::UpperCamelKeepCaps
            }
            "lowersnakecase" | "lowersnake" | "snakecase" | "snake" => Convention::LowerSnake,
            "screamingsnakecase" | "screamingsnake" | "screaming" | "uppersnakecase"
            | "uppersnake" | "constantcase" | "constant" => Convention::ScreamingSnake,
            "kebabcase" | "kebab" => Convention::Kebab,
            "screamingkebabcase" | "screamingkebab" | "upperkebab" => Convention::ScreamingKebab,
            "httpheadercase" | "httpheader" | "http" | "traincase" | "train" => {
                Convention::HttpHeader
            }
            _ => return Err(Error::UnknownConvention(s.to_owned())),
        };
        Ok(convention)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.case_convention().example)
    }
}
