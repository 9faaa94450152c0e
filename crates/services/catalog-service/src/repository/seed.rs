//! Demo catalog loaded at startup.

use chrono::{DateTime, TimeZone, Utc};

use domain::{
    Course, Level, NewCourse, CATEGORY_DESIGN, CATEGORY_MARKETING, CATEGORY_PROGRAMMING,
};

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_course(id: &str, input: NewCourse, students: &[&str], created_at: DateTime<Utc>) -> Course {
    let mut course = Course::new(id.to_string(), input, created_at);
    for student in students {
        course.enroll(student);
    }
    course
}

fn text(value: &str) -> String {
    value.to_string()
}

/// Three courses, oldest first. User `1` created course 1 and is enrolled
/// in course 2; user `2` created course 2 and is enrolled in course 1.
pub fn demo_catalog() -> Vec<Course> {
    vec![
        seed_course(
            "1",
            NewCourse {
                title: text("Introduction to React"),
                description: text("Learn the fundamentals of React from scratch"),
                instructor: text("Ana Rodríguez"),
                instructor_id: text("1"),
                duration: text("8 weeks"),
                level: Level::Beginner,
                category: text(CATEGORY_PROGRAMMING),
            },
            &["2"],
            seed_date(2024, 1, 15),
        ),
        seed_course(
            "2",
            NewCourse {
                title: text("Advanced UX/UI Design"),
                description: text("Master advanced user experience design techniques"),
                instructor: text("Carlos López"),
                instructor_id: text("2"),
                duration: text("10 weeks"),
                level: Level::Advanced,
                category: text(CATEGORY_DESIGN),
            },
            &["1"],
            seed_date(2024, 2, 1),
        ),
        seed_course(
            "3",
            NewCourse {
                title: text("Digital Marketing"),
                description: text("Effective marketing strategies for the digital world"),
                instructor: text("Laura Martín"),
                instructor_id: text("3"),
                duration: text("6 weeks"),
                level: Level::Intermediate,
                category: text(CATEGORY_MARKETING),
            },
            &[],
            seed_date(2024, 2, 10),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_in_creation_order() {
        let courses = demo_catalog();
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(courses.windows(2).all(|w| w[0].created_at < w[1].created_at));
    }

    #[test]
    fn test_demo_enrollments() {
        let courses = demo_catalog();
        assert_eq!(courses[0].enrolled_students, vec!["2"]);
        assert_eq!(courses[1].enrolled_students, vec!["1"]);
        assert!(courses[2].enrolled_students.is_empty());
    }
}
