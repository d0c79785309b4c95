//! The name of someone to greet.

use validator::Validate;

/// A person's name.
///
/// Wrap it in [`Valid`](crate::infra::validation::Valid) to make sure it is not empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Validate)]
pub struct Name {
    #[validate(length(min = 1))]
    name: String,
}

impl Name {
    /// Constructs a new, unvalidated name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name.
    pub fn as_str(&self) -> &str {
        self.name.as_ref()
    }
}
