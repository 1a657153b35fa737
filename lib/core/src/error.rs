use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter at least one skill")]
    EmptySkillInput,

    #[error("Skill vocabulary cannot be empty")]
    EmptyVocabulary,

    #[error("Invalid skill name: {0:?}")]
    InvalidSkillName(String),

    #[error("Duplicate skill in vocabulary: {0}")]
    DuplicateSkill(String),

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Catalog is missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid skill flag at row {row}, column {column}: {value:?}")]
    InvalidSkillFlag {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Result count {value} out of range [{min}, {max}]")]
    InvalidTopN { value: usize, min: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
