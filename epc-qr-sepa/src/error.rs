use epc_qr_types::Unencodable;

use crate::checks::{ErrorKind, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot encode record: {0}")]
    Unencodable(#[from] Unencodable),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("template is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// The field check that failed, if this is a validation failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Validation(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
