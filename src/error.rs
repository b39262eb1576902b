use std::fmt;

use crate::student::StudentId;

/// Recoverable failures of roster operations.
///
/// None of these end the session: they are reported to the operator and the
/// menu loop continues.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    StudentNotFound {
        input: String,
    },
    StudentOrCourseNotFound {
        student: String,
        course: String,
    },
    InsufficientFunds {
        student_id: StudentId,
        requested: f64,
        balance: f64,
    },
    InvalidAmount {
        input: String,
    },
    /// Every id up to `u32::MAX` has been assigned
    IdsExhausted,
}

impl RosterError {
    pub fn student_not_found(input: impl Into<String>) -> Self {
        Self::StudentNotFound {
            input: input.into(),
        }
    }

    pub fn student_or_course_not_found(
        student: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self::StudentOrCourseNotFound {
            student: student.into(),
            course: course.into(),
        }
    }

    pub fn insufficient_funds(student_id: StudentId, requested: f64, balance: f64) -> Self {
        Self::InsufficientFunds {
            student_id,
            requested,
            balance,
        }
    }

    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
        }
    }

    /// True for both flavours of failed lookup
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound { .. } | Self::StudentOrCourseNotFound { .. }
        )
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StudentNotFound { .. } => write!(f, "Student not found."),
            Self::StudentOrCourseNotFound { .. } => write!(f, "Student or course not found."),
            Self::InsufficientFunds { balance, .. } => {
                write!(f, "Insufficient funds. Balance: ${balance}")
            }
            Self::InvalidAmount { input } => write!(f, "Invalid tuition amount: '{input}'"),
            Self::IdsExhausted => write!(f, "No student IDs left."),
        }
    }
}

impl std::error::Error for RosterError {}

pub type Result<T> = std::result::Result<T, RosterError>;
