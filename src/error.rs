use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeBookError {
    #[error("student '{0}' not found")]
    StudentNotFound(String),

    #[error("course '{0}' not found")]
    CourseNotFound(String),

    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("could not serialize grade book: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not parse grade book file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GradeBookError>;
