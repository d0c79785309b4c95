//! A service for greeting someone.

use super::name::Name;
use crate::infra::{error::ValidationResult, validation::Valid};
use tracing::instrument;

/// Returns a greeting based on someone's name.
///
/// Fails with [`ValidationError::EmptyName`](crate::infra::error::ValidationError::EmptyName)
/// if the name is empty. Failures are logged at debug level.
///
/// ```rust
/// # use hello::core::greeting::greeting_service::greet;
/// assert_eq!("Hello World test", greet("World").unwrap());
/// assert_eq!("empty name test", greet("").unwrap_err().to_string());
/// ```
#[instrument(ret, err(level = "debug"), skip(name), fields(person = %name))]
pub fn greet(name: &str) -> ValidationResult<String> {
    let name = Valid::new(Name::new(name))?;
    Ok(greet_valid(&name))
}

/// Returns a greeting for a name that is already known to be valid.
pub fn greet_valid(name: &Valid<Name>) -> String {
    format!("Hello {} test", name.as_str())
}
