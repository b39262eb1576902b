//! Pure parsing of operator input
//!
//! Every answer the operator types arrives as free text. These functions decide what
//! that text means before any roster state is touched.

use crate::error::{Result, RosterError};
use crate::student::StudentId;

/// Parses a student id typed by the operator.
///
/// Surrounding whitespace is ignored. Text that is not an unsigned integer cannot
/// name any student, so it yields `None` and callers report it as not found.
pub fn parse_student_id(input: &str) -> Option<StudentId> {
    input.trim().parse::<u32>().ok().map(StudentId::new)
}

/// Parses a tuition amount typed by the operator.
///
/// Accepts finite, non-negative decimal numbers. Negative amounts are rejected
/// because paying one would raise the balance.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| RosterError::invalid_amount(trimmed))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(RosterError::invalid_amount(trimmed));
    }

    // "-0" parses to negative zero, which would render as "$-0"
    if amount == 0.0 {
        return Ok(0.0);
    }

    Ok(amount)
}
