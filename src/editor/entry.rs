//! Question Entry
//!
//! One row of the question list editor: persisted or not yet saved.

use serde::Serialize;

use crate::models::Question;

/// A question as held by the editor
///
/// `id` is `None` until the entry has been created on the backend; an entry
/// is new exactly when it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionEntry {
    pub(super) id: Option<u32>,
    pub(super) text: String,
    /// Play order; 1-based once renumbered, raw backend value before that
    pub(super) sort_order: i32,
}

impl QuestionEntry {
    /// Entry added locally, not yet persisted
    pub fn new(text: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id: None,
            text: text.into(),
            sort_order,
        }
    }

    /// Entry mapped from the backend, `sort_order` untouched
    pub fn persisted(question: &Question) -> Self {
        Self {
            id: Some(question.id),
            text: question.text.clone(),
            sort_order: question.sort_order,
        }
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
