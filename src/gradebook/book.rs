use crate::error::{GradeBookError, Result};
use crate::gradebook::records::{Course, RegistrationEntry, Student};
use std::collections::HashSet;

pub struct GradeBook {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// All students stored in a Vec
    ///
    /// Vec is the primary storage: it maintains insertion order, which
    /// keeps the serialized TOML stable across save/load cycles and makes
    /// ranking ties deterministic (insertion order among equal GPAs).
    pub(crate) students: Vec<Student>,

    /// All courses stored in a Vec, same ordering rationale as `students`
    pub(crate) courses: Vec<Course>,

    /// HashSet index for O(1) duplicate email detection
    ///
    /// Kept in sync with `students` by `add_student`. Actual lookups scan
    /// the Vec; at grade-book scale (a few hundred records) an indexed
    /// lookup buys nothing over a linear scan. Not serialized - rebuilt
    /// from `students` during deserialization.
    pub(crate) student_emails: HashSet<String>,

    /// HashSet index for O(1) duplicate course-name detection
    ///
    /// Same contract as `student_emails`; rebuilt on deserialization.
    pub(crate) course_names: HashSet<String>,
}

impl Default for GradeBook {
    fn default() -> Self {
        Self {
            format_version: 1,
            students: Vec::new(),
            courses: Vec::new(),
            student_emails: HashSet::new(),
            course_names: HashSet::new(),
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl GradeBook {
    /// Create a new empty GradeBook instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student keyed by email
    ///
    /// Duplicate emails are rejected with [`GradeBookError::DuplicateKey`];
    /// the existing record is never overwritten.
    pub fn add_student(&mut self, email: &str, names: &str) -> Result<&Student> {
        if self.student_emails.contains(email) {
            return Err(GradeBookError::DuplicateKey {
                entity: "student",
                key: email.to_string(),
            });
        }

        self.student_emails.insert(email.to_string());
        let index = self.students.len();
        self.students.push(Student::new(email, names));
        Ok(&self.students[index])
    }

    /// Add a course keyed by name
    ///
    /// Credits must be positive; duplicate names are rejected.
    pub fn add_course(&mut self, name: &str, trimester: &str, credits: u32) -> Result<&Course> {
        if credits == 0 {
            return Err(GradeBookError::Validation {
                message: format!("course '{name}' must have a positive credit weight"),
            });
        }
        if self.course_names.contains(name) {
            return Err(GradeBookError::DuplicateKey {
                entity: "course",
                key: name.to_string(),
            });
        }

        self.course_names.insert(name.to_string());
        let index = self.courses.len();
        self.courses.push(Course {
            name: name.to_string(),
            trimester: trimester.to_string(),
            credits,
        });
        Ok(&self.courses[index])
    }

    /// Register a student for a course with an achieved grade
    ///
    /// Appends a registration entry carrying the course's current credit
    /// weight as a snapshot. Fails with a not-found error if either key is
    /// absent, leaving the book unchanged.
    pub fn register(&mut self, student_email: &str, course_name: &str, grade: f64) -> Result<()> {
        let credits = self
            .find_course_by_name(course_name)
            .map(|course| course.credits)
            .ok_or_else(|| GradeBookError::CourseNotFound(course_name.to_string()))?;

        let student = self
            .find_student_by_email_mut(student_email)
            .ok_or_else(|| GradeBookError::StudentNotFound(student_email.to_string()))?;

        student.registrations.push(RegistrationEntry {
            course: course_name.to_string(),
            grade,
            credits,
        });
        Ok(())
    }

    /// Recompute and store a student's GPA, returning the new value
    pub fn compute_gpa(&mut self, student_email: &str) -> Result<f64> {
        let student = self
            .find_student_by_email_mut(student_email)
            .ok_or_else(|| GradeBookError::StudentNotFound(student_email.to_string()))?;
        Ok(student.recalculate_gpa())
    }

    /// Find a student by email
    pub fn find_student_by_email(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    /// Find a student by email and return a mutable reference
    fn find_student_by_email_mut(&mut self, email: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.email == email)
    }

    /// Find a course by name
    pub fn find_course_by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// All students in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses in insertion order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of students in the book
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of courses in the book
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}
