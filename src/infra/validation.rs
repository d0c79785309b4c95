//! Utilities for validating constraints on types.

use super::error::ValidationResult;
use std::ops::Deref;
use validator::Validate;

/// A value that has passed every rule declared on it with [`Validate`].
///
/// The only way to get one is [`Valid::new`], so a `Valid<Name>` can be
/// greeted without checking it again.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Valid<T>(T);

impl<T: Validate> Valid<T> {
    /// Validates `value`, failing with a [`ValidationError`](super::error::ValidationError).
    pub fn new(value: T) -> ValidationResult<Self> {
        value.validate()?;
        Ok(Valid(value))
    }
}

impl<T> Valid<T> {
    /// Returns a reference to the validated value.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Returns the validated value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Valid<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Valid;
    use crate::{core::greeting::name::Name, infra::error::ValidationError};

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(Err(ValidationError::EmptyName), Valid::new(Name::new("")));
    }

    #[test]
    fn non_empty_name_is_kept() {
        let name = Valid::new(Name::new("Ãlice")).unwrap();
        assert_eq!("Ãlice", name.as_str());
        assert_eq!(&Name::new("Ãlice"), name.inner());
        assert_eq!(Name::new("Ãlice"), name.into_inner());
    }
}
