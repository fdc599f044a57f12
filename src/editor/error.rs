//! Editor Errors

use super::reconcile::Change;
use crate::commands::ApiError;

/// Common result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Rejected input; the list is unchanged
    #[error("invalid input: {0}")]
    Validation(String),

    /// Index outside the list; the list is unchanged
    #[error("index {index} out of range for {len} questions")]
    Index { index: usize, len: usize },

    /// Scenario Store failure outside of `save`
    #[error("scenario store request failed: {0}")]
    Remote(#[from] ApiError),

    /// `save` stopped at `failed_index`; `committed` were already applied
    #[error(
        "save stopped at question {} ({text:?}) after {} committed changes: {source}",
        .failed_index + 1,
        .committed.len()
    )]
    SaveAborted {
        failed_index: usize,
        text: String,
        committed: Vec<Change>,
        #[source]
        source: ApiError,
    },

    /// Editor holds another scenario's questions
    #[error("editor holds scenario {bound}, refusing to save into scenario {requested}")]
    ScenarioMismatch { bound: u32, requested: u32 },
}
