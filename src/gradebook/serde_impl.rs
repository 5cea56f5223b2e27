//! Serialization and deserialization implementations for GradeBook
//!
//! The on-disk form is normalized: a registration entry stores only the
//! course name (plus its credits snapshot), never an embedded copy of the
//! course record. Deserialization re-resolves those names against the
//! loaded course collection and rebuilds the in-memory duplicate-detection
//! indexes, which are never serialized.

use super::book::GradeBook;
use super::records::{Course, Student};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use tracing::warn;

/// Mirror of the on-disk layout, used only during deserialization
#[derive(Deserialize)]
#[serde(default)]
struct GradeBookFile {
    format_version: u32,
    #[serde(rename = "course")]
    courses: Vec<Course>,
    #[serde(rename = "student")]
    students: Vec<Student>,
}

impl Default for GradeBookFile {
    fn default() -> Self {
        Self {
            format_version: 1,
            courses: Vec::new(),
            students: Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for GradeBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = GradeBookFile::deserialize(deserializer)?;

        let mut course_names = HashSet::new();
        for course in &file.courses {
            course_names.insert(course.name.clone());
        }

        // Resolve each registration's course name against the loaded
        // courses. Entries naming a course that no longer exists are
        // dropped with a warning instead of failing the whole load.
        let mut students = file.students;
        let mut student_emails = HashSet::new();
        for student in &mut students {
            let email = student.email.clone();
            student.registrations.retain(|entry| {
                let resolved = course_names.contains(&entry.course);
                if !resolved {
                    warn!(
                        student = %email,
                        course = %entry.course,
                        "dropping registration for unknown course"
                    );
                }
                resolved
            });
            student_emails.insert(email);
        }

        Ok(GradeBook {
            format_version: file.format_version,
            students,
            courses: file.courses,
            student_emails,
            course_names,
        })
    }
}

impl Serialize for GradeBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("GradeBook", 3)?;
        state.serialize_field("format_version", &self.format_version)?;

        // Courses first, so a human-edited file reads top-down the same
        // way the loader resolves it. Empty collections are omitted.
        if !self.courses.is_empty() {
            state.serialize_field("course", &self.courses)?;
        }
        if !self.students.is_empty() {
            state.serialize_field("student", &self.students)?;
        }

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_not_serialized() {
        let mut book = GradeBook::new();
        book.add_course("CS101", "T1", 3).unwrap();
        book.add_student("a@x.com", "Ann").unwrap();

        let toml_str = toml::to_string(&book).unwrap();
        assert!(!toml_str.contains("student_emails"));
        assert!(!toml_str.contains("course_names"));
    }

    #[test]
    fn test_registrations_store_course_by_name() {
        let mut book = GradeBook::new();
        book.add_course("CS101", "T1", 3).unwrap();
        book.add_student("a@x.com", "Ann").unwrap();
        book.register("a@x.com", "CS101", 4.0).unwrap();

        let toml_str = toml::to_string(&book).unwrap();

        // The registration table references the course by name only; the
        // trimester appears once, under the course table.
        assert!(toml_str.contains("[[student.registration]]"));
        assert_eq!(toml_str.matches("trimester").count(), 1);
    }

    #[test]
    fn test_dangling_course_reference_dropped_on_load() {
        let toml_str = r#"
format_version = 1

[[course]]
name = "CS101"
trimester = "T1"
credits = 3

[[student]]
email = "a@x.com"
names = "Ann"
gpa = 0.0

[[student.registration]]
course = "CS101"
grade = 4.0
credits = 3

[[student.registration]]
course = "GHOST"
grade = 2.0
credits = 5
"#;

        let book: GradeBook = toml::from_str(toml_str).unwrap();
        let student = book.find_student_by_email("a@x.com").unwrap();
        assert_eq!(student.registrations.len(), 1);
        assert_eq!(student.registrations[0].course, "CS101");
    }

    #[test]
    fn test_empty_document_loads_as_empty_book() {
        let book: GradeBook = toml::from_str("").unwrap();
        assert_eq!(book.student_count(), 0);
        assert_eq!(book.course_count(), 0);
    }
}
