//! Course domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{LEVEL_ADVANCED, LEVEL_BEGINNER, LEVEL_INTERMEDIATE};
use crate::error::DomainError;

/// Course difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels, in display order
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => LEVEL_BEGINNER,
            Level::Intermediate => LEVEL_INTERMEDIATE,
            Level::Advanced => LEVEL_ADVANCED,
        }
    }
}

impl std::str::FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown level: {}", s)))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Course domain entity
///
/// `id`, `instructor_id` and `created_at` are fixed at creation. The only
/// mutation a course ever sees is a new entry in `enrolled_students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub instructor_id: String,
    pub duration: String,
    pub level: Level,
    pub category: String,
    /// Enrolled user ids in enrollment order, without duplicates
    pub enrolled_students: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create a course from creation input with no students enrolled
    pub fn new(id: String, input: NewCourse, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            instructor: input.instructor,
            instructor_id: input.instructor_id,
            duration: input.duration,
            level: input.level,
            category: input.category,
            enrolled_students: Vec::new(),
            created_at,
        }
    }

    /// Add a student. Returns false if the user was already enrolled.
    pub fn enroll(&mut self, user_id: &str) -> bool {
        if self.is_enrolled(user_id) {
            return false;
        }
        self.enrolled_students.push(user_id.to_string());
        true
    }

    pub fn is_enrolled(&self, user_id: &str) -> bool {
        self.enrolled_students.iter().any(|id| id == user_id)
    }

    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.instructor_id == user_id
    }

    pub fn student_count(&self) -> usize {
        self.enrolled_students.len()
    }

    /// Case-insensitive substring match against title, description or
    /// instructor. An empty query matches every course.
    pub fn matches_query(&self, query: &str) -> bool {
        self.contains_needle(&query.to_lowercase())
    }

    /// Same as [`Course::matches_query`] with an already lowercased needle.
    pub(crate) fn contains_needle(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.instructor.to_lowercase().contains(needle)
    }
}

/// Outcome of an enrollment request.
///
/// Only `Enrolled` changes the catalog; the other two are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Enrollment {
    Enrolled,
    AlreadyEnrolled,
    UnknownCourse,
}

/// Course creation data transfer object
///
/// Validation only runs under the strict catalog policy; the permissive
/// default accepts empty strings as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewCourse {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "Instructor cannot be empty"))]
    pub instructor: String,
    #[validate(length(min = 1, message = "Instructor id cannot be empty"))]
    pub instructor_id: String,
    #[validate(length(min = 1, message = "Duration cannot be empty"))]
    pub duration: String,
    pub level: Level,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,
}
