use serde::{Deserialize, Serialize};

/// A course offering
///
/// Identity is the course name; a course is immutable once added to the
/// grade book. `credits` is the weight the course contributes to GPA
/// averaging and must be a positive integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name (e.g., "CS101")
    pub name: String,
    /// Trimester the course runs in (e.g., "T1")
    pub trimester: String,
    /// Credit weight, always positive
    pub credits: u32,
}

/// One grade registration linking a student to a course
///
/// The course is referenced by name only - the full course record lives in
/// the grade book's course collection and is resolved by name when needed.
/// `credits` is a snapshot taken at registration time: a later change to
/// the course does not retroactively alter an already-registered entry or
/// a previously computed GPA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    /// Name of the registered course
    pub course: String,
    /// Achieved grade
    pub grade: f64,
    /// Credit weight copied from the course at registration time
    pub credits: u32,
}

/// A student and their registrations
///
/// Identity is the email address. The student owns its registration
/// entries in registration order. `gpa` is recomputed on demand via
/// [`Student::recalculate_gpa`] and may be stale relative to the latest
/// registration until recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    /// Unique student email
    pub email: String,
    /// Full names of the student
    pub names: String,
    /// Last computed grade-point average (0.0 until first computed)
    pub gpa: f64,
    /// Registrations in the order they were made
    #[serde(rename = "registration", skip_serializing_if = "Vec::is_empty")]
    pub registrations: Vec<RegistrationEntry>,
}

impl Default for Student {
    fn default() -> Self {
        Self {
            email: String::new(),
            names: String::new(),
            gpa: 0.0,
            registrations: Vec::new(),
        }
    }
}

impl Student {
    /// Create a student with no registrations and a GPA of 0.0
    pub fn new(email: impl Into<String>, names: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            names: names.into(),
            ..Default::default()
        }
    }

    /// Recompute and store the credit-weighted grade-point average
    ///
    /// GPA is `sum(grade * credits) / sum(credits)` over all registrations,
    /// using each entry's snapshotted credits. A student with no
    /// registrations has a GPA of exactly 0.0.
    pub fn recalculate_gpa(&mut self) -> f64 {
        if self.registrations.is_empty() {
            self.gpa = 0.0;
            return self.gpa;
        }

        let total_points: f64 = self
            .registrations
            .iter()
            .map(|entry| entry.grade * f64::from(entry.credits))
            .sum();
        let total_credits: u32 = self.registrations.iter().map(|entry| entry.credits).sum();

        self.gpa = total_points / f64::from(total_credits);
        self.gpa
    }
}
