//! Course records and the fixed course catalog.
//!
//! The catalog is seeded once when a roster is built and never changes afterwards.
//! Students hold shared handles to the catalog's courses rather than copies, so every
//! course a student is enrolled in is one of the catalog instances.

use std::rc::Rc;

/// A course offered by the school
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub cost: f64,
}

impl Course {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// The courses seeded by [`Catalog::standard`], in menu order
pub const STANDARD_COURSES: [(&str, f64); 3] =
    [("Computer", 4500.0), ("Science", 6000.0), ("Math", 5000.0)];

/// Immutable set of offerable courses, unique by name
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Rc<Course>>,
}

impl Catalog {
    /// Builds the catalog every session starts with
    pub fn standard() -> Self {
        Self::from_courses(
            STANDARD_COURSES
                .iter()
                .map(|(name, cost)| Course::new(*name, *cost)),
        )
    }

    /// Builds a catalog from arbitrary courses. Later duplicates of a name are dropped.
    pub fn from_courses<I>(courses: I) -> Self
    where
        I: IntoIterator<Item = Course>,
    {
        let mut unique: Vec<Rc<Course>> = Vec::new();
        for course in courses {
            if unique.iter().any(|c| c.name == course.name) {
                tracing::debug!(course = %course.name, "Skipping duplicate catalog entry");
                continue;
            }
            unique.push(Rc::new(course));
        }
        Self { courses: unique }
    }

    /// Exact, case-sensitive lookup by name
    pub fn find(&self, name: &str) -> Option<Rc<Course>> {
        self.courses.iter().find(|c| c.name == name).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Course>> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
