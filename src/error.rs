//! Typed errors for parsing and rendering.

use thiserror::Error;

/// Failure to parse a `major.minor` release version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("version `{0}` is missing the `.` separator")]
    MissingSeparator(String),
    #[error("version `{0}` has a non-numeric component")]
    NonNumeric(String),
}

/// Failure to parse an RFC reference string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRfcError {
    #[error("rfc reference is empty")]
    Empty,
    #[error("rfc reference `{0}` does not start with a numeric id")]
    NonNumericId(String),
}

/// Failure while rendering records into the page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page shell names a section the data tables do not provide.
    #[error("page shell references unknown section `{0}`")]
    MissingSection(String),
    #[error("record `{title}`: {source}")]
    BadVersion {
        title: String,
        #[source]
        source: ParseVersionError,
    },
    #[error("record `{title}`: {source}")]
    BadRfc {
        title: String,
        #[source]
        source: ParseRfcError,
    },
}
