//! Courses command - Prints the catalog through the filter pipeline.

use crate::cli::args::CoursesArgs;
use crate::output;
use crate::services::ServiceContainer;

use common::AppResult;

/// Execute the courses command
pub fn execute(args: CoursesArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let filter = args.filter.to_filter();
    let courses = services.catalog().filter_courses(&filter);
    tracing::debug!(query = %filter.query, matched = courses.len(), "Catalog filtered");

    if args.json {
        output::print_json(&courses)
    } else {
        output::print_courses(&courses);
        Ok(())
    }
}
