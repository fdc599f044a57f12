//! Repository Layer - Core Traits
//!
//! Defines the abstract interface to the remote question collection.
//! The REST client implements it; tests substitute recording doubles.

use async_trait::async_trait;

use crate::commands::ApiResult;
use crate::models::{Question, QuestionCreate, QuestionUpdate};

/// Scenario-scoped question collection on the Scenario Store
///
/// All operations are async and issued one at a time by the editor.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Questions of a scenario, already sorted by `sort_order`
    async fn list_by_scenario(&self, scenario_id: u32) -> ApiResult<Vec<Question>>;

    /// Create a question; the result carries the assigned id
    async fn create(&self, question: &QuestionCreate) -> ApiResult<Question>;

    /// Update text, order and active flag of an existing question
    async fn update(&self, id: u32, question: &QuestionUpdate) -> ApiResult<Question>;

    /// Delete question by ID
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
