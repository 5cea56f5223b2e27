//! Query methods for GradeBook
//!
//! Read-side operations (ranking, grade search, transcripts) are separated
//! from the mutating operations in book.rs.

use crate::error::{GradeBookError, Result};
use crate::formatting;
use crate::gradebook::book::GradeBook;
use crate::gradebook::records::Student;

impl GradeBook {
    /// Rank all students by stored GPA, highest first
    ///
    /// The sort is stable: students with equal GPAs keep their insertion
    /// order. The book itself is not reordered. GPAs reflect the last
    /// `compute_gpa` call per student, not the latest registrations.
    pub fn rank(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<&Student> = self.students().iter().collect();
        ranked.sort_by(|a, b| b.gpa.total_cmp(&a.gpa));
        ranked
            .into_iter()
            .map(|student| (student.names.clone(), student.gpa))
            .collect()
    }

    /// Find every student holding exactly `grade` in the named course
    ///
    /// Matching is exact equality on the stored grade, with no tolerance.
    /// Students are returned in insertion order, each at most once. An
    /// unknown course name yields an empty result rather than an error.
    pub fn search_by_grade(&self, course_name: &str, grade: f64) -> Vec<&Student> {
        if self.find_course_by_name(course_name).is_none() {
            return Vec::new();
        }

        self.students()
            .iter()
            .filter(|student| {
                student
                    .registrations
                    .iter()
                    .any(|entry| entry.course == course_name && entry.grade == grade)
            })
            .collect()
    }

    /// Generate a transcript report for a student
    ///
    /// Lists each registration (course name, grade, snapshotted credits)
    /// followed by the student's stored GPA.
    pub fn transcript(&self, student_email: &str) -> Result<String> {
        let student = self
            .find_student_by_email(student_email)
            .ok_or_else(|| GradeBookError::StudentNotFound(student_email.to_string()))?;
        Ok(formatting::format_transcript(student))
    }
}
