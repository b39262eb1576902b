//! Custom assertions over roster state

use crate::roster::Roster;
use crate::student::{StudentId, StudentStatus};

/// Asserts the balance of student `id`
pub fn assert_balance(roster: &Roster, id: StudentId, expected: f64) {
    let student = roster
        .find_student(id)
        .unwrap_or_else(|| panic!("student {id} not in roster"));
    assert_eq!(
        student.balance(),
        expected,
        "unexpected balance for student {id}"
    );
}

/// Asserts the enrolled course names of student `id`, in enrollment order
pub fn assert_courses(roster: &Roster, id: StudentId, expected: &[&str]) {
    let student = roster
        .find_student(id)
        .unwrap_or_else(|| panic!("student {id} not in roster"));
    let names: Vec<&str> = student.courses().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected, "unexpected courses for student {id}");
}

/// Captures every student's visible state
pub fn snapshot(roster: &Roster) -> Vec<StudentStatus> {
    roster.students().map(|s| s.status()).collect()
}

/// Asserts that nothing about any student changed since `before` was taken
pub fn assert_unchanged(before: &[StudentStatus], roster: &Roster) {
    assert_eq!(before, snapshot(roster).as_slice(), "roster was mutated");
}
