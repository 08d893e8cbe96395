//! Check failures and errors.

use decl_build::ConstructionError;
use thiserror::Error;

/// A violated expectation. Terminal for the check that produced it.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CheckFailure {
    /// The constructor handed out a fast representation as the reference.
    #[error("reference representation of `{declaration}` was built by the fast strategy")]
    ReferenceIsFast { declaration: String },

    /// Reference and fast renderings differ.
    #[error(
        "fast rendering of `{unit}` differs from reference rendering\n\
         //Reference implementation:\n{reference}\n\
         //Fast implementation:\n{fast}"
    )]
    RenderMismatch {
        unit: String,
        reference: String,
        fast: String,
    },

    /// The heavy backing was realized although the caller forbade it.
    #[error("heavy representation isn't expected to be loaded: `{declaration}` in `{unit}` loaded it")]
    UnexpectedEagerLoad { unit: String, declaration: String },

    /// The caller required the heavy backing but nothing realized it.
    #[error("heavy representation was expected to be loaded for `{unit}`, but no declaration loaded it")]
    MissingEagerLoad { unit: String },
}

/// Why a check did not complete.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CheckError {
    /// Reported to the assertion sink before being returned.
    #[error(transparent)]
    Failure(#[from] CheckFailure),

    /// A collaborator failed; passed through unmodified.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl CheckError {
    pub fn as_failure(&self) -> Option<&CheckFailure> {
        match self {
            CheckError::Failure(failure) => Some(failure),
            CheckError::Construction(_) => None,
        }
    }
}
