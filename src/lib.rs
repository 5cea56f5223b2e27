//! Grade Book Library
//!
//! A console grade-tracking utility: records students, courses, and grade
//! registrations, computes credit-weighted grade-point averages, ranks
//! students, and persists the whole book to a TOML file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Presentation Layer**: the `gradebook` binary - console menu loop
//! - **Domain Layer**: `gradebook` module - record types and operations
//! - **Persistence Layer**: `storage` module - file-based TOML storage
//!
//! # Example
//!
//! ```
//! use gradebook::GradeBook;
//!
//! # fn main() -> gradebook::Result<()> {
//! let mut book = GradeBook::new();
//! book.add_course("CS101", "T1", 3)?;
//! book.add_student("a@x.com", "Ann")?;
//! book.register("a@x.com", "CS101", 4.0)?;
//! assert_eq!(book.compute_gpa("a@x.com")?, 4.0);
//! # Ok(())
//! # }
//! ```

mod error;
mod gradebook;
mod storage;

pub mod formatting;
pub mod validation;

// Re-export commonly used types
pub use error::{GradeBookError, Result};
pub use gradebook::{Course, GradeBook, RegistrationEntry, Student};
pub use storage::Storage;
