//! Greeting someone by name.

pub mod greeting_service;
pub mod name;
