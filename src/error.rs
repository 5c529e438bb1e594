use thiserror::Error;

/// A direction token that is not one of the eight compass handles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("unknown resize direction `{0}`")]
    Unknown(String),
}

/// Failures while acquiring the document-level resources of a gesture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to set body style: {0}")]
    Style(String),
}
