//! REST-backed question repository

use async_trait::async_trait;

use super::QuestionRepository;
use crate::commands::{ApiClient, ApiResult};
use crate::models::{Question, QuestionCreate, QuestionUpdate};

#[async_trait]
impl QuestionRepository for ApiClient {
    async fn list_by_scenario(&self, scenario_id: u32) -> ApiResult<Vec<Question>> {
        self.list_questions(scenario_id).await
    }

    async fn create(&self, question: &QuestionCreate) -> ApiResult<Question> {
        self.create_question(question).await
    }

    async fn update(&self, id: u32, question: &QuestionUpdate) -> ApiResult<Question> {
        self.update_question(id, question).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.delete_question(id).await
    }
}
