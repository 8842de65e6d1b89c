//! Error taxonomy for alphabet building and password generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No character class was selected, so no alphabet can be built.
    #[error("no character class selected")]
    NoClassSelected,

    /// A non-empty password was requested from an empty alphabet.
    #[error("cannot draw characters from an empty alphabet")]
    EmptyAlphabet,

    /// The secure random source failed. Never retried or substituted.
    #[error("entropy source failure: {0}")]
    EntropySource(#[from] getrandom::Error),
}

impl Error {
    /// True for errors caused by the request itself, as opposed to the platform.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::NoClassSelected | Error::EmptyAlphabet)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
