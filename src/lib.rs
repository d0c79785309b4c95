//! Builds greetings for people by name.
//!
//! ```rust
//! use hello::core::greeting::greeting_service::greet;
//!
//! assert_eq!("Hello World test", greet("World").unwrap());
//! assert!(greet("").is_err());
//! ```

pub mod core;
pub mod infra;

pub use crate::core::greeting::greeting_service::greet;
pub use crate::infra::error::{ValidationError, ValidationResult};
