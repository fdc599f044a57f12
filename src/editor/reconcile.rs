//! Save Reconciliation
//!
//! Replays the editor's list onto the Scenario Store: new entries are
//! created, persisted ones updated, strictly one request at a time in list
//! order. Deletions are not part of saving; `remove` already issued them.

use std::fmt;

use serde::Serialize;

use super::{EditorError, EditorResult, QuestionEditor};
use crate::models::{QuestionCreate, QuestionUpdate};

/// One applied change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Change {
    Created { id: u32, text: String },
    Updated { id: u32, text: String },
}

impl Change {
    pub fn id(&self) -> u32 {
        match self {
            Change::Created { id, .. } | Change::Updated { id, .. } => *id,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Created { id, text } => write!(f, "created #{}: {}", id, text),
            Change::Updated { id, text } => write!(f, "updated #{}: {}", id, text),
        }
    }
}

/// Outcome of a successful save, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub changes: Vec<Change>,
}

impl SaveReport {
    pub fn created(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Created { .. }))
            .count()
    }

    pub fn updated(&self) -> usize {
        self.changes.len() - self.created()
    }

    /// Human-readable lines for display
    pub fn lines(&self) -> Vec<String> {
        self.changes.iter().map(|c| c.to_string()).collect()
    }
}

impl QuestionEditor {
    /// Persist the list into `scenario_id`.
    ///
    /// Positions are renumbered first, so gaps left by `remove` or by the
    /// backend are closed and every entry is sent with its 1-based position.
    /// The first failing request stops the
    /// save; everything before it stays committed and is reported in
    /// [`EditorError::SaveAborted`]. Calling `save` again retries in full.
    pub async fn save(&mut self, scenario_id: u32) -> EditorResult<SaveReport> {
        if let Some(bound) = self.scenario_id {
            if bound != scenario_id {
                return Err(EditorError::ScenarioMismatch {
                    bound,
                    requested: scenario_id,
                });
            }
        }
        self.scenario_id = Some(scenario_id);
        self.renumber();

        let mut committed = Vec::with_capacity(self.entries.len());
        for index in 0..self.entries.len() {
            let entry = &self.entries[index];
            let text = entry.text.clone();
            let sort_order = entry.sort_order;

            let step = match entry.id {
                None => {
                    let body = QuestionCreate {
                        text: text.clone(),
                        sort_order,
                        scenario_id,
                        is_active: true,
                    };
                    self.repo.create(&body).await.map(|created| Change::Created {
                        id: created.id,
                        text: text.clone(),
                    })
                }
                Some(id) => {
                    let body = QuestionUpdate {
                        text: text.clone(),
                        sort_order,
                        is_active: true,
                    };
                    self.repo
                        .update(id, &body)
                        .await
                        .map(|_| Change::Updated { id, text: text.clone() })
                }
            };

            match step {
                Ok(change) => {
                    if let Change::Created { id, .. } = change {
                        self.entries[index].id = Some(id);
                    }
                    log::debug!("save step {}: {}", index + 1, change);
                    committed.push(change);
                }
                Err(source) => {
                    log::warn!(
                        "save of scenario {} stopped at question {} after {} changes: {}",
                        scenario_id,
                        index + 1,
                        committed.len(),
                        source
                    );
                    return Err(EditorError::SaveAborted {
                        failed_index: index,
                        text,
                        committed,
                        source,
                    });
                }
            }
        }

        let report = SaveReport { changes: committed };
        log::info!(
            "saved scenario {}: {} created, {} updated",
            scenario_id,
            report.created(),
            report.updated()
        );
        Ok(report)
    }
}
