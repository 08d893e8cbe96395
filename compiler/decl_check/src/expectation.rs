//! What the caller expects of heavy backing realization.

/// Constraint on whether the fast strategy may realize its heavy backing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LoadExpectation {
    /// At least one declaration must realize it.
    RequireLoaded,
    /// No declaration may realize it.
    RequireNotLoaded,
    #[default]
    NoConstraint,
}

impl From<Option<bool>> for LoadExpectation {
    fn from(expected: Option<bool>) -> Self {
        match expected {
            Some(true) => LoadExpectation::RequireLoaded,
            Some(false) => LoadExpectation::RequireNotLoaded,
            None => LoadExpectation::NoConstraint,
        }
    }
}
