//! Console Models
//!
//! Data structures matching the admin REST backend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Question data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub scenario_id: u32,
    pub text: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of `POST /questions/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCreate {
    pub text: String,
    pub sort_order: i32,
    pub scenario_id: u32,
    pub is_active: bool,
}

/// Body of `PUT /questions/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionUpdate {
    pub text: String,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Scenario data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub name: String,
    pub greeting_text: String,
    pub disclaimer_text: Option<String>,
    pub question_guidance_text: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of scenario create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    pub name: String,
    pub greeting_text: String,
    pub disclaimer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_guidance_text: Option<String>,
    pub is_active: bool,
}

impl ScenarioDraft {
    pub fn new(name: impl Into<String>, greeting_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            greeting_text: greeting_text.into(),
            disclaimer_text: None,
            question_guidance_text: None,
            is_active: true,
        }
    }

    /// Draft for a copy of `scenario`, named "<name> (コピー)"
    pub fn copy_of(scenario: &Scenario) -> Self {
        Self {
            name: format!("{} (コピー)", scenario.name),
            question_guidance_text: None,
            is_active: true,
            ..Self::from(scenario)
        }
    }
}

/// Draft carrying every editable field of an existing scenario
impl From<&Scenario> for ScenarioDraft {
    fn from(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name.clone(),
            greeting_text: scenario.greeting_text.clone(),
            disclaimer_text: scenario.disclaimer_text.clone(),
            question_guidance_text: scenario.question_guidance_text.clone(),
            is_active: scenario.is_active,
        }
    }
}

fn default_true() -> bool {
    true
}
