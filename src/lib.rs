//! Scenario Console
//!
//! Client side of the IVR scenario admin console.
//!
//! Layered architecture:
//! - models: wire types of the admin REST backend
//! - commands: REST bindings (`ApiClient`)
//! - repository: the question collection abstraction the editor depends on
//! - editor: ordered question list editing, drag & drop, save reconciliation
//! - config: console settings

pub mod commands;
pub mod config;
pub mod editor;
pub mod models;
pub mod repository;

pub use commands::{ApiClient, ApiError, ApiResult};
pub use config::{ConfigError, ConsoleConfig};
pub use editor::{Change, EditorError, EditorResult, QuestionEditor, QuestionEntry, SaveReport};
pub use list_dragdrop::{DropTarget, ItemBox};
pub use models::{Question, QuestionCreate, QuestionUpdate, Scenario, ScenarioDraft};
pub use repository::QuestionRepository;
