//! Scenario Commands
//!
//! Bindings for the scenario endpoints. The question editor never calls
//! these; they back the console's scenario subcommands.

use reqwest::Method;

use super::question::question_path;
use super::{ApiClient, ApiResult};
use crate::models::{QuestionCreate, Scenario, ScenarioDraft};

const SCENARIOS_PATH: &str = "/scenarios/";

fn scenario_path(id: u32) -> String {
    format!("/scenarios/{}", id)
}

impl ApiClient {
    pub async fn list_scenarios(&self) -> ApiResult<Vec<Scenario>> {
        self.send(self.request(Method::GET, SCENARIOS_PATH)).await
    }

    pub async fn get_scenario(&self, id: u32) -> ApiResult<Scenario> {
        self.send(self.request(Method::GET, &scenario_path(id))).await
    }

    pub async fn create_scenario(&self, draft: &ScenarioDraft) -> ApiResult<Scenario> {
        self.send(self.request(Method::POST, SCENARIOS_PATH).json(draft)).await
    }

    pub async fn update_scenario(&self, id: u32, draft: &ScenarioDraft) -> ApiResult<Scenario> {
        self.send(self.request(Method::PUT, &scenario_path(id)).json(draft)).await
    }

    /// Deletes the scenario; the backend removes its questions with it
    pub async fn delete_scenario(&self, id: u32) -> ApiResult<()> {
        self.send_empty(self.request(Method::DELETE, &scenario_path(id))).await
    }

    /// Create "<name> (コピー)" and re-create every question of `id` under it,
    /// one request at a time, keeping each `sort_order`.
    pub async fn copy_scenario(&self, id: u32) -> ApiResult<Scenario> {
        let source = self.get_scenario(id).await?;
        let copy = self.create_scenario(&ScenarioDraft::copy_of(&source)).await?;

        let questions = self.list_questions(id).await?;
        log::info!(
            "copying {} questions from scenario {} to {}",
            questions.len(),
            id,
            copy.id
        );
        for question in questions {
            let body = QuestionCreate {
                text: question.text,
                sort_order: question.sort_order,
                scenario_id: copy.id,
                is_active: question.is_active,
            };
            let created = self.create_question(&body).await?;
            log::debug!("copied question {} as {}", question_path(question.id), created.id);
        }

        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::commands::fixture::Backend;
    use super::*;
    use crate::commands::ApiError;

    fn scenario_json(id: u32, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "greeting_text": "お電話ありがとうございます",
            "disclaimer_text": "録音します",
            "question_guidance_text": null,
            "is_active": true,
            "created_at": "2024-05-01T09:30:00",
            "updated_at": null
        })
    }

    fn question_json(id: u32, scenario_id: u32, text: &str, sort_order: i32) -> Value {
        json!({
            "id": id,
            "scenario_id": scenario_id,
            "text": text,
            "sort_order": sort_order,
            "is_active": true
        })
    }

    #[test]
    fn test_scenario_path() {
        assert_eq!(scenario_path(9), "/scenarios/9");
    }

    #[tokio::test]
    async fn test_copy_scenario_recreates_questions_in_order() {
        let backend = Backend::start(vec![
            (200, scenario_json(3, "受付")),
            (200, scenario_json(8, "受付 (コピー)")),
            (
                200,
                json!([question_json(11, 3, "お名前", 1), question_json(12, 3, "ご用件", 4)]),
            ),
            (200, question_json(21, 8, "お名前", 1)),
            (200, question_json(22, 8, "ご用件", 4)),
        ])
        .await;

        let copy = backend.client().copy_scenario(3).await.unwrap();

        assert_eq!(copy.id, 8);
        assert_eq!(
            backend.request_lines(),
            vec![
                "GET /admin/scenarios/3",
                "POST /admin/scenarios/",
                "GET /admin/scenarios/3/questions",
                "POST /admin/questions/",
                "POST /admin/questions/",
            ]
        );

        let requests = backend.requests();
        assert_eq!(requests[1].json()["name"], "受付 (コピー)");
        let first = requests[3].json();
        assert_eq!(first["text"], "お名前");
        assert_eq!(first["scenario_id"], 8);
        assert_eq!(first["sort_order"], 1);
        let second = requests[4].json();
        assert_eq!(second["text"], "ご用件");
        assert_eq!(second["sort_order"], 4);
    }

    #[tokio::test]
    async fn test_copy_stops_at_first_failed_question() {
        let backend = Backend::start(vec![
            (200, scenario_json(3, "受付")),
            (200, scenario_json(8, "受付 (コピー)")),
            (
                200,
                json!([question_json(11, 3, "お名前", 1), question_json(12, 3, "ご用件", 2)]),
            ),
            (500, json!({"detail": "Internal Server Error"})),
        ])
        .await;

        let err = backend.client().copy_scenario(3).await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        // The second question is never attempted
        assert_eq!(backend.requests().len(), 4);
    }

    #[tokio::test]
    async fn test_update_and_delete_scenario() {
        let backend = Backend::start(vec![
            (200, scenario_json(4, "夜間受付")),
            (200, json!({"message": "Scenario deleted successfully"})),
        ])
        .await;
        let api = backend.client();

        let mut draft = ScenarioDraft::new("夜間受付", "お電話ありがとうございます");
        draft.disclaimer_text = Some("録音します".to_string());
        let updated = api.update_scenario(4, &draft).await.unwrap();
        api.delete_scenario(4).await.unwrap();

        assert_eq!(updated.name, "夜間受付");
        assert_eq!(
            backend.request_lines(),
            vec!["PUT /admin/scenarios/4", "DELETE /admin/scenarios/4"]
        );
        assert_eq!(backend.requests()[0].json()["greeting_text"], "お電話ありがとうございます");
    }
}
