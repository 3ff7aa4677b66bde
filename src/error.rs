use thiserror::Error;

/// Reasons an item is skipped. The batch always continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("item has no 'name' field")]
    MissingNameField,

    #[error("item 'name' field has no non-blank lines")]
    EmptyContent,

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// The input container itself is unusable; nothing is parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("input document has no '{0}' collection")]
    MissingCollection(String),

    #[error("input '{0}' is not a list")]
    NotASequence(String),
}

/// Non-fatal findings while parsing an item. The affected field stays unset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("{field} pattern did not match line {line:?}")]
    PatternMismatch { field: &'static str, line: String },

    #[error("no reviews found")]
    NoReviews,

    #[error("unsupported reviews payload ({0})")]
    UnsupportedReviews(String),
}
