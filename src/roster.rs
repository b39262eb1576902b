//! The roster: owner of every student and the course catalog.
//!
//! A `Roster` is the whole state of a session. It is built by the entry point and
//! handed to the menu session; there are no process-wide singletons. Each operation
//! follows the same shape: resolve the operator's identifiers, then mutate or report
//! on the student that was found.

use std::rc::Rc;

use crate::core::validation::{parse_amount, parse_student_id};
use crate::course::{Catalog, Course};
use crate::error::{Result, RosterError};
use crate::logging::{log_enrollment, log_lookup_miss, log_payment, log_student_added};
use crate::student::{Payment, Student, StudentId, StudentStatus};

/// A student was enrolled in a course
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub student_name: String,
    pub course: String,
    pub balance: f64,
}

/// Current balance of a student
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    pub student_id: StudentId,
    pub student_name: String,
    pub balance: f64,
}

#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    catalog: Catalog,
    /// `None` once every id up to `u32::MAX` has been handed out
    next_id: Option<StudentId>,
}

impl Roster {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            students: Vec::new(),
            catalog,
            next_id: Some(StudentId::FIRST),
        }
    }

    /// Starts id assignment at `id` instead of [`StudentId::FIRST`]
    pub fn with_next_id(mut self, id: StudentId) -> Self {
        self.next_id = Some(id);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn find_student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn find_student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    pub fn find_course(&self, name: &str) -> Option<Rc<Course>> {
        self.catalog.find(name)
    }

    /// Registers a new student under the next sequential id.
    ///
    /// Ids are never reused within a session. Once `u32::MAX` has been assigned the id
    /// space is exhausted and every later call fails with
    /// [`RosterError::IdsExhausted`] without adding anyone.
    pub fn add_student(&mut self, name: impl Into<String>) -> Result<StudentId> {
        let id = self.next_id.ok_or(RosterError::IdsExhausted)?;
        self.next_id = id.next();

        let student = Student::new(id, name);
        log_student_added(id, student.name());
        self.students.push(student);
        Ok(id)
    }

    /// Enrolls the student named by `student_input` in the course called `course_name`.
    ///
    /// A missing student and a missing course are reported the same way.
    pub fn enroll_student(&mut self, student_input: &str, course_name: &str) -> Result<Enrollment> {
        let course = self.find_course(course_name);
        let student = match parse_student_id(student_input) {
            Some(id) => self.find_student_mut(id),
            None => None,
        };

        let (student, course) = match (student, course) {
            (Some(student), Some(course)) => (student, course),
            (student, course) => {
                if student.is_none() {
                    log_lookup_miss("student", student_input);
                }
                if course.is_none() {
                    log_lookup_miss("course", course_name);
                }
                return Err(RosterError::student_or_course_not_found(
                    student_input,
                    course_name,
                ));
            }
        };

        student.enroll(Rc::clone(&course));
        log_enrollment(student.id(), &course.name, student.balance());

        Ok(Enrollment {
            student_id: student.id(),
            student_name: student.name().to_string(),
            course: course.name.clone(),
            balance: student.balance(),
        })
    }

    pub fn view_student_balance(&self, student_input: &str) -> Result<BalanceReport> {
        let student = self.lookup(student_input)?;
        Ok(BalanceReport {
            student_id: student.id(),
            student_name: student.name().to_string(),
            balance: student.balance(),
        })
    }

    /// Pays tuition for a student.
    ///
    /// The student is resolved before the amount is parsed, so an unknown student is
    /// reported as not found even when the amount is also malformed.
    pub fn pay_student_tuition(
        &mut self,
        student_input: &str,
        amount_input: &str,
    ) -> Result<Payment> {
        let student = self.lookup_mut(student_input)?;
        let amount = parse_amount(amount_input)?;

        let result = student.pay_tuition(amount);
        log_payment(student.id(), amount, &result);
        result
    }

    pub fn show_student_status(&self, student_input: &str) -> Result<StudentStatus> {
        Ok(self.lookup(student_input)?.status())
    }

    fn lookup(&self, student_input: &str) -> Result<&Student> {
        let found = parse_student_id(student_input).and_then(|id| self.find_student(id));
        found.ok_or_else(|| {
            log_lookup_miss("student", student_input);
            RosterError::student_not_found(student_input)
        })
    }

    fn lookup_mut(&mut self, student_input: &str) -> Result<&mut Student> {
        let found = match parse_student_id(student_input) {
            Some(id) => self.find_student_mut(id),
            None => None,
        };
        found.ok_or_else(|| {
            log_lookup_miss("student", student_input);
            RosterError::student_not_found(student_input)
        })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}
