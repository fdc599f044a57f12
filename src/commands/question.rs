//! Question Commands
//!
//! Bindings for the question endpoints.

use reqwest::Method;

use super::{ApiClient, ApiResult};
use crate::models::{Question, QuestionCreate, QuestionUpdate};

// ========================
// Paths
// ========================

pub(crate) fn scenario_questions_path(scenario_id: u32) -> String {
    format!("/scenarios/{}/questions", scenario_id)
}

pub(crate) fn question_path(id: u32) -> String {
    format!("/questions/{}", id)
}

const QUESTIONS_PATH: &str = "/questions/";

// ========================
// Commands
// ========================

impl ApiClient {
    /// Questions of a scenario, ordered by `sort_order` on the backend
    pub async fn list_questions(&self, scenario_id: u32) -> ApiResult<Vec<Question>> {
        self.send(self.request(Method::GET, &scenario_questions_path(scenario_id))).await
    }

    pub async fn create_question(&self, body: &QuestionCreate) -> ApiResult<Question> {
        self.send(self.request(Method::POST, QUESTIONS_PATH).json(body)).await
    }

    pub async fn update_question(&self, id: u32, body: &QuestionUpdate) -> ApiResult<Question> {
        self.send(self.request(Method::PUT, &question_path(id)).json(body)).await
    }

    pub async fn delete_question(&self, id: u32) -> ApiResult<()> {
        self.send_empty(self.request(Method::DELETE, &question_path(id))).await
    }
}
