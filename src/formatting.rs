//! Formatting helper functions for console output
//!
//! This module contains formatting logic for transcripts, rankings, and
//! grade-search results.

use crate::gradebook::Student;

/// Format a student's transcript into a display string
///
/// One line per registration (course name, grade, snapshotted credits),
/// followed by the stored GPA.
pub fn format_transcript(student: &Student) -> String {
    let mut result = format!("Transcript for {} ({}):\n", student.names, student.email);
    result.push_str("Courses Registered:\n");
    for entry in &student.registrations {
        result.push_str(&format!(
            "  - {} (Grade: {}, Credits: {})\n",
            entry.course, entry.grade, entry.credits
        ));
    }
    result.push_str(&format!("GPA: {}\n", student.gpa));
    result
}

/// Format a ranking into a numbered display string
pub fn format_ranking(ranking: &[(String, f64)]) -> String {
    if ranking.is_empty() {
        return "No students in the grade book\n".to_string();
    }

    let mut result = "Student Ranking:\n".to_string();
    for (position, (names, gpa)) in ranking.iter().enumerate() {
        result.push_str(&format!("{}. {} - GPA: {:.2}\n", position + 1, names, gpa));
    }
    result
}

/// Format the students matching a grade search
pub fn format_search_results(course_name: &str, grade: f64, students: &[&Student]) -> String {
    if students.is_empty() {
        return format!("No students found with grade {grade} in course {course_name}\n");
    }

    let mut result = format!("Students with grade {grade} in course {course_name}:\n");
    for student in students {
        result.push_str(&format!("  - {} ({})\n", student.names, student.email));
    }
    result
}
