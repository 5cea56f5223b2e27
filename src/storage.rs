use crate::error::Result;
use crate::gradebook::GradeBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the grade book from disk
    ///
    /// A missing file is not an error: the book starts empty. An unreadable
    /// or malformed file is reported to the caller.
    pub fn load(&self) -> Result<GradeBook> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "no grade book file, starting empty");
            return Ok(GradeBook::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let book: GradeBook = toml::from_str(&content)?;
        info!(
            students = book.student_count(),
            courses = book.course_count(),
            "loaded grade book"
        );
        Ok(book)
    }

    pub fn save(&self, book: &GradeBook) -> Result<()> {
        let content = toml::to_string_pretty(book)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
