//! Student Management System
//!
//! An interactive, in-memory tracker for students, course enrollment and tuition
//! balances. The [`roster::Roster`] holds all state; [`menu::Session`] drives it from
//! operator input supplied by a [`prompt::Prompter`].

pub mod core;
pub mod course;
pub mod error;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod report;
pub mod roster;
pub mod student;
pub mod test_utils;

pub use course::{Catalog, Course};
pub use error::RosterError;
pub use menu::{MenuAction, Session};
pub use roster::Roster;
pub use student::{Student, StudentId};
