//! Input coercion helpers for the console front end
//!
//! This module turns raw user input into the typed values the grade book
//! operations expect: positive integer credits and finite grades.

use crate::error::{GradeBookError, Result};

/// Parse a credit weight from user input
///
/// Credits must coerce to a positive integer.
pub fn parse_credits(input: &str) -> Result<u32> {
    let credits: u32 = input.trim().parse().map_err(|_| GradeBookError::Validation {
        message: format!("'{}' is not a valid credit count", input.trim()),
    })?;
    if credits == 0 {
        return Err(GradeBookError::Validation {
            message: "credits must be a positive integer".to_string(),
        });
    }
    Ok(credits)
}

/// Parse a grade from user input
///
/// Grades must coerce to a finite real number.
pub fn parse_grade(input: &str) -> Result<f64> {
    let grade: f64 = input.trim().parse().map_err(|_| GradeBookError::Validation {
        message: format!("'{}' is not a valid grade", input.trim()),
    })?;
    if !grade.is_finite() {
        return Err(GradeBookError::Validation {
            message: "grade must be a finite number".to_string(),
        });
    }
    Ok(grade)
}

/// Normalize a key entered at the console (email or course name)
pub fn normalize_key(input: &str) -> String {
    input.trim().to_string()
}
