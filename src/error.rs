use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An initialism must be an uppercase ASCII letter followed by at least one more
    /// uppercase letter or digit.
    #[error("invalid initialism {0:?}: expected uppercase ASCII letters and digits")]
    InvalidInitialism(String),
    #[error("unknown case convention {0:?}")]
    UnknownConvention(String),
}

pub type Result<T> = std::result::Result<T, Error>;
