//! Core business logic module
//!
//! Pure functions that turn raw operator input into typed values. Nothing here
//! touches the terminal, so it can be tested in isolation.

pub mod validation;

#[cfg(test)]
mod validation_proptest;
