use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while mapping a specification tree onto deploy data
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field is absent from the specification tree
    #[error("missing field `{0}` in specification")]
    MissingField(String),

    /// The field exists but holds a mapping, sequence or null
    #[error("field `{0}` is not a scalar value")]
    NotAScalar(String),

    /// OS name outside the supported set
    #[error("wrong os name provided: {0}")]
    InvalidOsName(String),

    /// Memory size under custom sizing is not an integer
    #[error("invalid memory size `{value}` at `{path}`: {source}")]
    InvalidMemorySize {
        path: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Memory size does not fit once converted to megabytes
    #[error("memory size `{0}` GB overflows when converted to MB")]
    MemoryOverflow(String),

    /// Specification document could not be parsed
    #[error("could not parse specification: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error only means a path was absent from the tree
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
