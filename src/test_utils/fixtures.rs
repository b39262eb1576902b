//! Test fixtures and data builders for consistent test data

use crate::course::{Catalog, Course};
use crate::roster::Roster;
use crate::student::StudentId;

/// A roster with one student per name, ids starting at 10001
pub fn roster_with_students(names: &[&str]) -> Roster {
    let mut roster = Roster::default();
    for name in names {
        roster
            .add_student(*name)
            .expect("a fresh roster has ids to spare");
    }
    roster
}

/// Ada (10001) enrolled in Computer, owing 4500
pub fn ada_enrolled_in_computer() -> (Roster, StudentId) {
    let mut roster = Roster::default();
    let id = roster
        .add_student("Ada")
        .expect("a fresh roster has ids to spare");
    roster
        .enroll_student(&id.to_string(), "Computer")
        .expect("Computer is in the standard catalog");
    (roster, id)
}

/// A catalog with a single cheap course, for tests that need exact small numbers
pub fn single_course_catalog(name: &str, cost: f64) -> Catalog {
    Catalog::from_courses(vec![Course::new(name, cost)])
}
