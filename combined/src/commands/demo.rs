//! Demo command - A scripted session against the demo roster and catalog.

use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{CourseFilter, Level, CATEGORY_PROGRAMMING};

use crate::cli::args::DemoArgs;
use crate::output;
use crate::services::{CourseDraft, CourseHub, ServiceContainer};

const DEMO_EMAIL: &str = "juan@email.com";
const DEMO_PASSWORD: &str = "123456";

/// Execute the demo command
pub async fn execute(args: DemoArgs, services: Arc<dyn ServiceContainer>) -> AppResult<()> {
    let hub = CourseHub::new(services.clone());
    let mut updates = services.catalog().subscribe();

    println!("Signing in as {}...", DEMO_EMAIL);
    if !hub.login(DEMO_EMAIL, DEMO_PASSWORD).await {
        return Err(AppError::InvalidCredentials);
    }

    let course = hub.create_course_as_current_user(CourseDraft {
        title: "Rust for Beginners".to_string(),
        description: "Ownership, borrowing and fearless concurrency".to_string(),
        duration: "5 weeks".to_string(),
        level: Level::Beginner,
        category: CATEGORY_PROGRAMMING.to_string(),
    })?;
    println!("Created course {} ({})", course.title, course.id);

    // Any course the user is not in yet
    let target = hub
        .dashboard(&CourseFilter::default())
        .filtered
        .into_iter()
        .find(|c| c.id != course.id && !c.is_enrolled(&course.instructor_id));
    if let Some(target) = target {
        let outcome = hub.enroll_current_user(&target.id)?;
        println!("Enrollment in {}: {:?}", target.title, outcome);
    }

    let version = updates.borrow_and_update().version;
    println!("Catalog is at version {}", version);

    let view = hub.dashboard(&CourseFilter::default());
    if args.json {
        output::print_json(&view)?;
    } else {
        println!();
        output::print_dashboard(&view);
    }

    hub.logout();
    println!("\nSigned out: {}", hub.current_user().is_none());
    Ok(())
}
