//! Terminal rendering for course lists and dashboards.

use serde::Serialize;

use common::{AppError, AppResult};
use domain::Course;

use crate::services::DashboardView;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to encode JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// One row per course, in the given order
pub fn course_table(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "  (no courses)\n".to_string();
    }

    let title_width = courses
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());

    let mut out = format!(
        "  {:<38}  {:<title_width$}  {:<12}  {:<12}  {}\n",
        "ID", "TITLE", "CATEGORY", "LEVEL", "STUDENTS"
    );
    for course in courses {
        out.push_str(&format!(
            "  {:<38}  {:<title_width$}  {:<12}  {:<12}  {}\n",
            course.id,
            course.title,
            course.category,
            course.level,
            course.student_count()
        ));
    }
    out
}

pub fn print_courses(courses: &[Course]) {
    print!("{}", course_table(courses));
}

pub fn print_dashboard(view: &DashboardView) {
    match &view.user {
        Some(user) => println!("Signed in as {} <{}>", user.name, user.email),
        None => println!("Not signed in"),
    }

    println!("\nCourses ({})", view.filtered_count());
    print_courses(&view.filtered);
    println!("\nEnrolled ({})", view.enrolled_count());
    print_courses(&view.enrolled);
    println!("\nCreated ({})", view.created_count());
    print_courses(&view.created);
}
