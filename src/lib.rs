//! Conversion of identifiers between naming conventions.
//!
//! An identifier is split into words by the join style of its source convention, each word is
//! recased for the destination convention, and the words are joined again by the destination's
//! join style:
//!
//! ```
//! use varcase::{convert, LOWER_CAMEL_CASE, SCREAMING_SNAKE_CASE};
//!
//! assert_eq!(convert(&*LOWER_CAMEL_CASE, &SCREAMING_SNAKE_CASE, "userID"), "USER_ID");
//! ```
//!
//! Camel case splitting keeps runs of capitals together (`HTTPServer` is `HTTP` + `Server`), and
//! camel case joining writes known initialisms at the start or end of the result in uppercase.

pub mod camel;
pub mod casing;
pub mod convention;
pub mod error;
pub mod initialism;
pub mod join_style;

mod convert;

pub use camel::CamelJoinStyle;
pub use casing::{http_title, http_title_with, strict_title, WordCase};
pub use convention::{
    CaseConvention, Convention, HTTP_HEADER_CASE, KEBAB_CASE, LOWER_CAMEL_CASE,
    LOWER_CAMEL_CASE_KEEP_CAPS, LOWER_SNAKE_CASE, SCREAMING_KEBAB_CASE, SCREAMING_SNAKE_CASE,
    UPPER_CAMEL_CASE, UPPER_CAMEL_CASE_KEEP_CAPS,
};
pub use convert::{convert, Caser};
pub use error::{Error, Result};
pub use initialism::InitialismRegistry;
pub use join_style::{JoinStyle, Splitter};
