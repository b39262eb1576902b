//! Student records: identity, enrolled courses and the running tuition balance.

use std::fmt;
use std::rc::Rc;

use crate::course::Course;
use crate::error::{Result, RosterError};

/// Sequential student identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u32);

impl StudentId {
    /// The id handed to the first student of every session
    pub const FIRST: StudentId = StudentId(10001);

    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id after this one, or `None` past `u32::MAX`
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A successful tuition payment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payment {
    pub amount: f64,
    pub remaining: f64,
}

/// Snapshot of a student for the status report
#[derive(Debug, Clone, PartialEq)]
pub struct StudentStatus {
    pub id: StudentId,
    pub name: String,
    pub courses: Vec<String>,
    pub balance: f64,
}

#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    name: String,
    courses: Vec<Rc<Course>>,
    balance: f64,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
            balance: 0.0,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn courses(&self) -> &[Rc<Course>] {
        &self.courses
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Enrolls in `course` and charges its cost.
    ///
    /// Enrolling twice in the same course charges twice.
    pub fn enroll(&mut self, course: Rc<Course>) {
        self.balance += course.cost;
        self.courses.push(course);
    }

    /// Pays `amount` off the balance.
    ///
    /// Rejected without touching the balance when `amount` exceeds it. Callers are
    /// expected to have validated the amount with
    /// [`parse_amount`](crate::core::validation::parse_amount); a negative or
    /// non-finite amount is refused here as well.
    pub fn pay_tuition(&mut self, amount: f64) -> Result<Payment> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(RosterError::invalid_amount(amount.to_string()));
        }
        if amount > self.balance {
            return Err(RosterError::insufficient_funds(
                self.id,
                amount,
                self.balance,
            ));
        }

        self.balance -= amount;
        Ok(Payment {
            amount,
            remaining: self.balance,
        })
    }

    pub fn status(&self) -> StudentStatus {
        StudentStatus {
            id: self.id,
            name: self.name.clone(),
            courses: self.courses.iter().map(|c| c.name.clone()).collect(),
            balance: self.balance,
        }
    }
}
