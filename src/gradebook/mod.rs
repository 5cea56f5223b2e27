//! Grade book domain models and business logic
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules for better organization:
//! - `records`: Course, Student, and RegistrationEntry record types
//! - `book`: Main GradeBook container with all mutating operations
//! - `queries`: Ranking, grade search, and transcript queries
//! - `serde_impl`: Serialization/deserialization implementations

mod book;
mod queries;
mod records;
mod serde_impl;

// Re-export all public types
pub use book::GradeBook;
pub use records::{Course, RegistrationEntry, Student};
