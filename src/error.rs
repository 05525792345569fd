use thiserror::Error;

use crate::identity::IdentityError;

/// Errors that abort a translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("failed to read unit text: {0}")]
    Read(#[source] std::io::Error),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("argument {arg:?} cannot be shell-quoted")]
    Unquotable { arg: String },
}
