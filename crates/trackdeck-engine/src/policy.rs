use std::collections::HashMap;
use trackdeck_types::{Record, RecordId};

/// Display tier of a job status, checked by substring in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Rejected,
    Offer,
    Interview,
    Applied,
    Neutral,
}

/// Classify a raw status string for badge display. First match wins:
/// reject > offer > interview > applied, anything else is neutral.
pub fn classify_status(status: &str) -> StatusTier {
    let status = status.to_lowercase();
    if status.contains("reject") {
        StatusTier::Rejected
    } else if status.contains("offer") {
        StatusTier::Offer
    } else if status.contains("interview") {
        StatusTier::Interview
    } else if status.contains("applied") {
        StatusTier::Applied
    } else {
        StatusTier::Neutral
    }
}

/// Whether a job record's status marks it rejected.
pub fn is_rejected(record: &Record) -> bool {
    record
        .text("status")
        .map(|status| status.to_lowercase().contains("reject"))
        .unwrap_or(false)
}

/// Apply the hide-rejected default to an already text-filtered job list.
/// Runs before pagination so page counts reflect the visible set.
pub fn visible_jobs<'a>(jobs: &[&'a Record], show_rejected: bool) -> Vec<&'a Record> {
    if show_rejected {
        return jobs.to_vec();
    }
    jobs.iter()
        .copied()
        .filter(|job| !is_rejected(job))
        .collect()
}

/// Locally held, not-yet-persisted edit state for one goal record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub description: String,
    pub completed: bool,
}

impl GoalDraft {
    pub fn from_record(record: &Record) -> Self {
        GoalDraft {
            description: record.text("description").unwrap_or_default().to_string(),
            completed: record.flag("completed"),
        }
    }
}

/// Draft overlay for one goal list, keyed by record id.
///
/// Reconciled against fetched values whenever the underlying list changes
/// (a new fetch), not on every render, so in-progress edits survive
/// re-renders but yield to fresh data.
#[derive(Debug, Default)]
pub struct DraftOverlay {
    drafts: HashMap<RecordId, GoalDraft>,
}

impl DraftOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed every listed goal's draft from its fetched value.
    pub fn reconcile(&mut self, goals: &[Record]) {
        for goal in goals {
            if let Some(id) = goal.id() {
                self.drafts.insert(id, GoalDraft::from_record(goal));
            }
        }
    }

    pub fn draft(&self, id: &RecordId) -> Option<&GoalDraft> {
        self.drafts.get(id)
    }

    /// The draft for a record, falling back to its fetched values when no
    /// draft exists yet.
    pub fn draft_or_fetched(&self, record: &Record) -> GoalDraft {
        record
            .id()
            .and_then(|id| self.drafts.get(&id).cloned())
            .unwrap_or_else(|| GoalDraft::from_record(record))
    }

    pub fn set_description(&mut self, id: RecordId, description: impl Into<String>) {
        self.drafts.entry(id).or_default().description = description.into();
    }

    pub fn set_completed(&mut self, id: RecordId, completed: bool) {
        self.drafts.entry(id).or_default().completed = completed;
    }
}
