use log::trace;

use crate::convention::CaseConvention;
use crate::error::Result;
use crate::join_style::Splitter;

/// Converts `source` from one convention to another.
///
/// The words are split by `from` and then cased and joined by `to`. Any [`Splitter`] works as
/// the source, so a bare [`JoinStyle`](crate::JoinStyle) can be used when the source casing is
/// irrelevant.
pub fn convert<S>(from: &S, to: &CaseConvention, source: &str) -> String
where
    S: Splitter + ?Sized,
{
    let words = from.split_words(source);
    let converted = to.join_words(&words);
    trace!("converted {source:?} via {words:?} to {converted:?}");
    converted
}

/// A fixed pair of conventions for converting many identifiers the same way.
#[derive(Copy, Clone, Debug)]
pub struct Caser<'a> {
    pub from: &'a CaseConvention,
    pub to: &'a CaseConvention,
}

impl<'a> Caser<'a> {
    pub fn new(from: &'a CaseConvention, to: &'a CaseConvention) -> Self {
        Self { from, to }
    }

    pub fn convert(&self, source: &str) -> String {
        convert(self.from, self.to, source)
    }
}

impl Caser<'static> {
    /// Builds a caser between two predefined conventions given by name, e.g.
    /// `Caser::by_names("camel", "snake")`.
    pub fn by_names(from: &str, to: &str) -> Result<Self> {
        Ok(Self::new(
            CaseConvention::by_name(from)?,
            CaseConvention::by_name(to)?,
        ))
    }
}
