use super::{DashboardClient, Mutation};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use trackdeck_types::{FieldValue, GoalCadence, Record, RecordId, Snapshot};

/// In-memory data service for offline use and tests.
///
/// Holds one snapshot, applies mutations to it, and hands out clones on
/// fetch. Nothing is persisted; a file path only seeds the initial state.
pub struct LocalClient {
    state: Mutex<LocalState>,
}

struct LocalState {
    snapshot: Snapshot,
    next_id: i64,
}

impl LocalClient {
    pub fn new(snapshot: Snapshot) -> Self {
        let next_id = max_id(&snapshot) + 1;
        LocalClient {
            state: Mutex::new(LocalState { snapshot, next_id }),
        }
    }

    /// Seed from a JSON snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Ok(Self::new(snapshot))
    }
}

fn max_id(snapshot: &Snapshot) -> i64 {
    trackdeck_types::SectionKey::BASE
        .iter()
        .flat_map(|&key| snapshot.collection(key))
        .filter_map(|record| match record.get("id") {
            Some(FieldValue::Int(n)) => Some(*n),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

fn record_from_payload<P: Serialize>(payload: &P, id: i64) -> Result<Record> {
    let value = serde_json::to_value(payload)?;
    let mut record: Record = serde_json::from_value(value)?;
    record.set("id", id);
    Ok(record)
}

fn update_record<'a>(
    records: &'a mut [Record],
    id: &RecordId,
) -> Option<&'a mut Record> {
    records
        .iter_mut()
        .find(|record| record.id().as_ref() == Some(id))
}

impl LocalState {
    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn apply(&mut self, mutation: Mutation) -> Result<()> {
        match mutation {
            Mutation::CreateJob(payload) => {
                let id = self.take_id();
                self.snapshot
                    .job_applications
                    .push(record_from_payload(&payload, id)?);
            }
            Mutation::CreateCoding(payload) => {
                let id = self.take_id();
                self.snapshot
                    .coding_problems
                    .push(record_from_payload(&payload, id)?);
            }
            Mutation::CreateProject(payload) => {
                let id = self.take_id();
                self.snapshot
                    .projects
                    .push(record_from_payload(&payload, id)?);
            }
            Mutation::CreateContact(payload) => {
                let id = self.take_id();
                self.snapshot
                    .networking_contacts
                    .push(record_from_payload(&payload, id)?);
            }
            Mutation::UpdateJobStatus(payload) => {
                let job = update_record(&mut self.snapshot.job_applications, &payload.id)
                    .ok_or_else(|| {
                        Error::Api(format!("job application {} not found", payload.id))
                    })?;
                job.set("status", payload.status);
            }
            Mutation::UpdateGoal(payload) => {
                let goals = match payload.cadence {
                    GoalCadence::Daily => &mut self.snapshot.daily_goals,
                    GoalCadence::Weekly => &mut self.snapshot.weekly_goals,
                    GoalCadence::Monthly => &mut self.snapshot.monthly_goals,
                };
                let goal = update_record(goals, &payload.id).ok_or_else(|| {
                    Error::Api(format!("{} goal {} not found", payload.cadence, payload.id))
                })?;
                goal.set("description", payload.description);
                goal.set("completed", payload.completed);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardClient for LocalClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        Ok(self.state.lock().unwrap().snapshot.clone())
    }

    async fn mutate(&self, mutation: Mutation) -> Result<()> {
        self.state.lock().unwrap().apply(mutation)
    }
}
