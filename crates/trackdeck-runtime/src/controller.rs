use crate::client::{DashboardClient, GoalUpdate, JobStatusUpdate, Mutation};
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use trackdeck_engine::{DraftOverlay, GoalDraft, PageState, SectionStateStore, render_set};
use trackdeck_types::{GoalCadence, Record, RecordId, SectionKey, Snapshot};

/// Proof that a fetch was started; pairs a result with the generation it
/// belongs to so stale results are discarded instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Single owner of all mutable view state: the last-good snapshot, the
/// committed search query, the active section, per-section pagination,
/// goal draft overlays, the jobs hide-rejected flag, in-flight save slots,
/// and error markers.
///
/// Engine recomputation stays pure; this type only coordinates state and
/// the async collaborator boundary.
pub struct DashboardController {
    client: Arc<dyn DashboardClient>,
    snapshot: Option<Snapshot>,
    search_query: String,
    active_section: SectionKey,
    page_states: SectionStateStore,
    goal_drafts: HashMap<GoalCadence, DraftOverlay>,
    show_rejected: bool,
    saving: HashMap<SectionKey, RecordId>,
    fetch_error: Option<String>,
    list_errors: HashMap<SectionKey, String>,
    fetch_generation: u64,
}

impl DashboardController {
    pub fn new(client: Arc<dyn DashboardClient>) -> Self {
        DashboardController {
            client,
            snapshot: None,
            search_query: String::new(),
            active_section: SectionKey::BASE[0],
            page_states: SectionStateStore::new(),
            goal_drafts: HashMap::new(),
            show_rejected: false,
            saving: HashMap::new(),
            fetch_error: None,
            list_errors: HashMap::new(),
            fetch_generation: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.search_query
    }

    pub fn active_section(&self) -> SectionKey {
        self.active_section
    }

    pub fn show_rejected(&self) -> bool {
        self.show_rejected
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn list_error(&self, key: SectionKey) -> Option<&str> {
        self.list_errors.get(&key).map(String::as_str)
    }

    pub fn is_saving(&self, key: SectionKey, id: &RecordId) -> bool {
        self.saving.get(&key) == Some(id)
    }

    // ---- fetch lifecycle -------------------------------------------------

    /// Start a fetch generation. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        FetchTicket(self.fetch_generation)
    }

    /// Apply a fetch result. Stale tickets are discarded; a failed fetch
    /// keeps the previous snapshot and records the error marker. Returns
    /// whether a new snapshot was installed.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Snapshot>) -> bool {
        if ticket.0 != self.fetch_generation {
            return false;
        }
        match result {
            Ok(snapshot) => {
                self.fetch_error = None;
                self.page_states.materialize(SectionKey::BASE);
                for cadence in GoalCadence::ALL {
                    self.goal_drafts
                        .entry(cadence)
                        .or_default()
                        .reconcile(snapshot.goals(cadence));
                }
                self.snapshot = Some(snapshot);
                self.resolve_active();
                true
            }
            Err(err) => {
                self.fetch_error = Some(err.to_string());
                false
            }
        }
    }

    /// Fetch a fresh snapshot and apply it (unless superseded meanwhile).
    pub async fn refresh(&mut self) -> bool {
        let ticket = self.begin_fetch();
        let result = self.client.fetch_snapshot().await;
        self.apply_fetch(ticket, result)
    }

    // ---- search and section selection ------------------------------------

    /// Commit a search query. A non-blank query activates the synthetic
    /// search-results section.
    pub fn commit_search(&mut self, text: &str) {
        self.search_query = text.trim().to_string();
        if !self.search_query.is_empty() {
            self.active_section = SectionKey::Search;
        }
    }

    /// Clear the query. The search section disappears from the rendered
    /// set; if it was active, selection falls back to the first rendered
    /// section. Pagination state is intentionally left untouched.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.resolve_active();
    }

    pub fn select_section(&mut self, key: SectionKey) {
        self.active_section = key;
        self.resolve_active();
    }

    fn resolve_active(&mut self) {
        if let Some(snapshot) = &self.snapshot {
            let set = render_set(snapshot, &self.search_query);
            self.active_section = set.resolve_active(self.active_section);
        }
    }

    // ---- pagination ------------------------------------------------------

    pub fn page_state(&self, key: SectionKey) -> PageState {
        self.page_states.page_state(key)
    }

    pub fn set_page(&mut self, key: SectionKey, page: usize) {
        self.page_states.set_page(key, page);
    }

    pub fn set_page_size(&mut self, key: SectionKey, page_size: usize) {
        self.page_states.set_page_size(key, page_size);
    }

    /// Self-correct a stored page after the pagination engine clamped it.
    pub fn sync_page(&mut self, key: SectionKey, effective_page: usize) {
        self.page_states.sync_page(key, effective_page);
    }

    // ---- derived filters -------------------------------------------------

    pub fn toggle_show_rejected(&mut self) {
        self.show_rejected = !self.show_rejected;
    }

    // ---- goal drafts -----------------------------------------------------

    pub fn goal_draft_for(&self, cadence: GoalCadence, record: &Record) -> GoalDraft {
        match self.goal_drafts.get(&cadence) {
            Some(overlay) => overlay.draft_or_fetched(record),
            None => GoalDraft::from_record(record),
        }
    }

    pub fn edit_goal_description(
        &mut self,
        cadence: GoalCadence,
        id: RecordId,
        description: impl Into<String>,
    ) {
        self.goal_drafts
            .entry(cadence)
            .or_default()
            .set_description(id, description);
    }

    pub fn set_goal_completed(&mut self, cadence: GoalCadence, id: RecordId, completed: bool) {
        self.goal_drafts
            .entry(cadence)
            .or_default()
            .set_completed(id, completed);
    }

    // ---- mutations -------------------------------------------------------

    /// Save one goal's draft. A second save for the same id while one is
    /// outstanding is ignored; success triggers a snapshot re-fetch which
    /// reconciles the draft against the stored value.
    pub async fn save_goal(&mut self, cadence: GoalCadence, id: RecordId) -> Result<()> {
        let key = cadence.section_key();
        if self.is_saving(key, &id) {
            return Ok(());
        }
        let draft = self
            .goal_drafts
            .get(&cadence)
            .and_then(|overlay| overlay.draft(&id).cloned())
            .ok_or_else(|| Error::InvalidOperation(format!("no {} goal {}", cadence, id)))?;

        let update = GoalUpdate {
            cadence,
            id: id.clone(),
            description: draft.description,
            completed: draft.completed,
        };

        self.saving.insert(key, id);
        self.list_errors.remove(&key);
        let result = self.client.mutate(Mutation::UpdateGoal(update)).await;
        self.saving.remove(&key);

        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.list_errors.insert(key, err.to_string());
                Err(err)
            }
        }
    }

    /// Mark one job application rejected.
    pub async fn mark_job_rejected(&mut self, id: RecordId) -> Result<()> {
        let key = SectionKey::Jobs;
        if self.is_saving(key, &id) {
            return Ok(());
        }

        let update = JobStatusUpdate {
            id: id.clone(),
            status: "rejected".to_string(),
        };

        self.saving.insert(key, id);
        self.list_errors.remove(&key);
        let result = self.client.mutate(Mutation::UpdateJobStatus(update)).await;
        self.saving.remove(&key);

        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.list_errors.insert(key, err.to_string());
                Err(err)
            }
        }
    }

    /// Submit a create mutation; the caller surfaces any error next to its
    /// form. Success triggers a snapshot re-fetch.
    pub async fn submit(&mut self, mutation: Mutation) -> Result<()> {
        self.client.mutate(mutation).await?;
        self.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Client driven by queued results, recording every mutation it saw.
    #[derive(Default)]
    struct ScriptedClient {
        fetches: Mutex<VecDeque<Result<Snapshot>>>,
        mutation_results: Mutex<VecDeque<Result<()>>>,
        mutations: Mutex<Vec<Mutation>>,
    }

    impl ScriptedClient {
        fn queue_fetch(&self, result: Result<Snapshot>) {
            self.fetches.lock().unwrap().push_back(result);
        }

        fn queue_mutation(&self, result: Result<()>) {
            self.mutation_results.lock().unwrap().push_back(result);
        }

        fn recorded(&self) -> Vec<Mutation> {
            self.mutations.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DashboardClient for ScriptedClient {
        async fn fetch_snapshot(&self) -> Result<Snapshot> {
            self.fetches
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Snapshot::default()))
        }

        async fn mutate(&self, mutation: Mutation) -> Result<()> {
            self.mutations.lock().unwrap().push(mutation);
            self.mutation_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(()))
        }
    }

    fn snapshot_with_goal(description: &str, completed: bool) -> Snapshot {
        serde_json::from_str(&format!(
            r#"{{
                "job_applications": [{{"id": 1, "job_title": "SRE", "company": "Google", "status": "applied"}}],
                "daily_goals": [{{"id": 7, "description": "{description}", "completed": {completed}}}]
            }}"#
        ))
        .unwrap()
    }

    fn controller_with(client: Arc<ScriptedClient>) -> DashboardController {
        DashboardController::new(client)
    }

    #[tokio::test]
    async fn failed_fetch_keeps_last_good_snapshot() {
        let client = Arc::new(ScriptedClient::default());
        client.queue_fetch(Ok(snapshot_with_goal("read", false)));
        client.queue_fetch(Err(Error::Api("service unavailable".to_string())));
        let mut controller = controller_with(client);

        assert!(controller.refresh().await);
        assert!(controller.fetch_error().is_none());

        assert!(!controller.refresh().await);
        assert_eq!(controller.fetch_error(), Some("service unavailable"));
        // Last-good state retained.
        let snapshot = controller.snapshot().unwrap();
        assert_eq!(snapshot.daily_goals.len(), 1);
    }

    #[tokio::test]
    async fn stale_fetch_results_are_discarded() {
        let client = Arc::new(ScriptedClient::default());
        let mut controller = controller_with(client);

        let stale = controller.begin_fetch();
        let current = controller.begin_fetch();

        assert!(!controller.apply_fetch(stale, Ok(snapshot_with_goal("old", false))));
        assert!(controller.snapshot().is_none());

        assert!(controller.apply_fetch(current, Ok(snapshot_with_goal("new", false))));
        assert_eq!(
            controller.snapshot().unwrap().daily_goals[0].text("description"),
            Some("new")
        );
    }

    #[tokio::test]
    async fn search_toggle_moves_selection_and_keeps_pagination() {
        let client = Arc::new(ScriptedClient::default());
        client.queue_fetch(Ok(snapshot_with_goal("read", false)));
        let mut controller = controller_with(client);
        controller.refresh().await;

        controller.set_page(SectionKey::Coding, 3);
        controller.commit_search("google");
        assert_eq!(controller.active_section(), SectionKey::Search);

        controller.clear_search();
        // Search section is gone; selection falls back to the first
        // rendered section, pagination survives untouched.
        assert_eq!(controller.active_section(), SectionKey::Jobs);
        assert_eq!(controller.page_state(SectionKey::Coding).page, 3);
    }

    #[tokio::test]
    async fn save_goal_sends_draft_and_refreshes() {
        let client = Arc::new(ScriptedClient::default());
        client.queue_fetch(Ok(snapshot_with_goal("read one chapter", false)));
        // Post-save refresh returns the stored value.
        client.queue_fetch(Ok(snapshot_with_goal("read two chapters", true)));
        let mut controller = controller_with(Arc::clone(&client));
        controller.refresh().await;

        let id = RecordId::from(7);
        controller.edit_goal_description(GoalCadence::Daily, id.clone(), "read two chapters");
        controller.set_goal_completed(GoalCadence::Daily, id.clone(), true);
        controller.save_goal(GoalCadence::Daily, id.clone()).await.unwrap();

        let recorded = client.recorded();
        assert_eq!(recorded.len(), 1);
        match &recorded[0] {
            Mutation::UpdateGoal(update) => {
                assert_eq!(update.cadence, GoalCadence::Daily);
                assert_eq!(update.description, "read two chapters");
                assert!(update.completed);
            }
            other => panic!("unexpected mutation {other:?}"),
        }

        // The refresh reconciled the draft against the fetched value.
        let snapshot = controller.snapshot().unwrap();
        let draft = controller.goal_draft_for(GoalCadence::Daily, &snapshot.daily_goals[0]);
        assert_eq!(draft.description, "read two chapters");
        assert!(draft.completed);
        assert!(!controller.is_saving(SectionKey::DailyGoals, &id));
    }

    #[tokio::test]
    async fn failed_save_surfaces_message_verbatim_per_list() {
        let client = Arc::new(ScriptedClient::default());
        client.queue_fetch(Ok(snapshot_with_goal("read", false)));
        client.queue_mutation(Err(Error::Api("description too long".to_string())));
        let mut controller = controller_with(Arc::clone(&client));
        controller.refresh().await;

        let err = controller
            .save_goal(GoalCadence::Daily, RecordId::from(7))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(
            controller.list_error(SectionKey::DailyGoals),
            Some("description too long")
        );
        // Other lists are untouched.
        assert!(controller.list_error(SectionKey::Jobs).is_none());
    }

    #[tokio::test]
    async fn mark_job_rejected_sends_status_update() {
        let client = Arc::new(ScriptedClient::default());
        client.queue_fetch(Ok(snapshot_with_goal("read", false)));
        let mut controller = controller_with(Arc::clone(&client));
        controller.refresh().await;

        controller.mark_job_rejected(RecordId::from(1)).await.unwrap();

        match &client.recorded()[0] {
            Mutation::UpdateJobStatus(update) => {
                assert_eq!(update.id, RecordId::from(1));
                assert_eq!(update.status, "rejected");
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }
}
