//! Common test utilities for Student Management System tests
//!
//! Shared mocks, fixtures and assertions for unit and integration tests.

#[cfg(any(test, debug_assertions))]
pub mod mocks;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
