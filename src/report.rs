//! Operator-facing text for every outcome of a roster operation.
//!
//! Rendering is kept apart from the roster so operations stay silent and
//! testable; the session decides where the lines go.

use colored::Colorize;

use crate::error::RosterError;
use crate::roster::{BalanceReport, Enrollment};
use crate::student::{Payment, StudentId, StudentStatus};

pub const WELCOME_BANNER: &str = "Welcome to the Student Management System";
pub const FAREWELL: &str = "Exiting from student management system";

/// Successful result of a menu action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    StudentAdded { id: StudentId, name: String },
    Enrolled(Enrollment),
    Balance(BalanceReport),
    Paid(Payment),
    Status(StudentStatus),
}

impl Outcome {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::StudentAdded { id, name } => {
                vec![format!("Student {name} added with ID {id}")
                    .cyan()
                    .to_string()]
            }
            Self::Enrolled(enrollment) => vec![format!(
                "{} enrolled in {}",
                enrollment.student_name, enrollment.course
            )
            .cyan()
            .to_string()],
            Self::Balance(report) => vec![format!(
                "Balance for {}: ${}",
                report.student_name, report.balance
            )
            .green()
            .to_string()],
            Self::Paid(payment) => vec![format!(
                "Payment of ${} received. Remaining balance: ${}",
                payment.amount, payment.remaining
            )
            .green()
            .to_string()],
            Self::Status(status) => status_lines(status),
        }
    }
}

fn status_lines(status: &StudentStatus) -> Vec<String> {
    let mut lines = vec![
        format!("Student ID: {}", status.id),
        format!("Name: {}", status.name),
        "Courses Enrolled:".to_string(),
    ];
    lines.extend(status.courses.iter().map(|course| format!(" {course}")));
    lines.push(format!("Balance: ${}", status.balance));

    lines
        .into_iter()
        .map(|line| line.bright_magenta().to_string())
        .collect()
}

/// Renders a failed operation
pub fn error_line(err: &RosterError) -> String {
    match err {
        RosterError::StudentNotFound { .. } | RosterError::StudentOrCourseNotFound { .. } => {
            err.to_string().cyan().to_string()
        }
        RosterError::InsufficientFunds { .. } => err.to_string().green().to_string(),
        RosterError::InvalidAmount { .. } | RosterError::IdsExhausted => {
            err.to_string().yellow().to_string()
        }
    }
}

pub fn welcome_line() -> String {
    WELCOME_BANNER.bright_blue().to_string()
}

pub fn farewell_line() -> String {
    FAREWELL.red().to_string()
}
