//! Domain-level constants.
//!
//! Fixed option sets the presentation layer uses to populate filter
//! controls. The catalog itself does not enforce category membership
//! unless the strict policy is enabled.

// =============================================================================
// Filter options
// =============================================================================

/// Sentinel filter value that disables the category or level predicate
pub const ALL_OPTION: &str = "All";

// =============================================================================
// Categories
// =============================================================================

pub const CATEGORY_PROGRAMMING: &str = "Programming";
pub const CATEGORY_DESIGN: &str = "Design";
pub const CATEGORY_MARKETING: &str = "Marketing";
pub const CATEGORY_BUSINESS: &str = "Business";
pub const CATEGORY_LANGUAGES: &str = "Languages";

/// Recognized course categories, in display order
pub const CATEGORIES: &[&str] = &[
    CATEGORY_PROGRAMMING,
    CATEGORY_DESIGN,
    CATEGORY_MARKETING,
    CATEGORY_BUSINESS,
    CATEGORY_LANGUAGES,
];

/// Check if a category belongs to the recognized vocabulary (exact match)
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

// =============================================================================
// Levels
// =============================================================================

pub const LEVEL_BEGINNER: &str = "Beginner";
pub const LEVEL_INTERMEDIATE: &str = "Intermediate";
pub const LEVEL_ADVANCED: &str = "Advanced";

// =============================================================================
// Authentication
// =============================================================================

/// Default artificial latency of login and registration in milliseconds
pub const DEFAULT_AUTH_DELAY_MS: u64 = 1000;
