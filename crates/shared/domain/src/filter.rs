//! Filter pipeline - narrows a course collection for display.
//!
//! A course passes when all three predicates hold:
//! the free-text query is empty or a case-insensitive substring of its
//! title, description or instructor; the category facet is `All` or
//! equal to its category (exact, not case-folded); the level facet is
//! `All` or equal to its level.
//!
//! Everything here is pure. Callers re-run the pipeline whenever the
//! courses or any of the three inputs change; nothing is cached.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ALL_OPTION;
use crate::course::{Course, Level};
use crate::error::DomainError;

/// A filter facet: either everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }
}

/// Parses the option strings a filter control emits; `"All"` disables the facet.
impl<T, E> FromStr for Facet<T>
where
    T: FromStr<Err = E>,
    DomainError: From<E>,
{
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_OPTION {
            return Ok(Facet::All);
        }
        Ok(Facet::Only(s.parse::<T>()?))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facet::All => f.write_str(ALL_OPTION),
            Facet::Only(value) => value.fmt(f),
        }
    }
}

/// The three filter inputs of the catalog browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub query: String,
    pub category: Facet<String>,
    pub level: Facet<Level>,
}

impl CourseFilter {
    pub fn new(query: impl Into<String>, category: Facet<String>, level: Facet<Level>) -> Self {
        Self {
            query: query.into(),
            category,
            level,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Facet::Only(category.into());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Facet::Only(level);
        self
    }

    /// True when no predicate can exclude anything
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.category == Facet::All && self.level == Facet::All
    }

    /// Run the pipeline, preserving the input order.
    pub fn apply(&self, courses: &[Course]) -> Vec<Course> {
        let needle = self.query.to_lowercase();
        courses
            .iter()
            .filter(|course| self.matches_with_needle(course, &needle))
            .cloned()
            .collect()
    }

    fn matches_with_needle(&self, course: &Course, needle: &str) -> bool {
        course.contains_needle(needle)
            && self.category.matches(&course.category)
            && self.level.matches(&course.level)
    }
}

/// Narrow `courses` by free-text query, category and level.
pub fn apply(
    courses: &[Course],
    query: &str,
    category: &Facet<String>,
    level: &Facet<Level>,
) -> Vec<Course> {
    CourseFilter::new(query, category.clone(), level.clone()).apply(courses)
}
