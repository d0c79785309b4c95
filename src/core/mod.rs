//! The domain logic, free of infrastructure concerns.

pub mod greeting;
