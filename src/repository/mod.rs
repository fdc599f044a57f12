//! Repository Layer
//!
//! Data access abstraction the question editor is written against.

mod api_repo;
mod traits;

pub use traits::QuestionRepository;
