use trackdeck_engine::{PageToken, Segment, StatusTier};
use trackdeck_types::{GoalCadence, RecordId, SectionKey};

/// One entry in the tab bar: label plus record/match count badge.
#[derive(Debug, Clone)]
pub struct TabViewModel {
    pub key: SectionKey,
    pub label: &'static str,
    pub count: usize,
}

/// Pagination controls for one list.
#[derive(Debug, Clone)]
pub struct PaginationViewModel {
    pub total_items: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub tokens: Vec<PageToken>,
}

/// One projected cell: its column label and highlighted value runs.
#[derive(Debug, Clone)]
pub struct CellViewModel {
    pub label: &'static str,
    pub segments: Vec<Segment>,
    pub long: bool,
}

#[derive(Debug, Clone)]
pub struct RecordRowViewModel {
    pub cells: Vec<CellViewModel>,
}

/// A job application row with its derived display fields.
#[derive(Debug, Clone)]
pub struct JobRowViewModel {
    pub id: Option<RecordId>,
    pub title: Vec<Segment>,
    pub link: Option<String>,
    pub company: Vec<Segment>,
    pub notes: Option<Vec<Segment>>,
    pub status_label: Vec<Segment>,
    pub tier: StatusTier,
    pub status_date: String,
    pub saving: bool,
    pub can_reject: bool,
}

/// A goal row rendered from its draft overlay, not the fetched record.
#[derive(Debug, Clone)]
pub struct GoalRowViewModel {
    pub id: Option<RecordId>,
    pub cadence: GoalCadence,
    pub target_date: String,
    pub description: String,
    pub completed: bool,
    pub term_hit: bool,
    pub saving: bool,
}

#[derive(Debug, Clone)]
pub enum SectionBody {
    /// The (text-filtered) list is empty.
    Empty,
    Records(Vec<RecordRowViewModel>),
    Jobs {
        show_rejected: bool,
        /// Every remaining job was hidden by the rejected filter.
        all_hidden: bool,
        rows: Vec<JobRowViewModel>,
    },
    Goals(Vec<GoalRowViewModel>),
}

/// One section, filtered, policy-applied, and paginated.
#[derive(Debug, Clone)]
pub struct SectionViewModel {
    pub key: SectionKey,
    pub label: &'static str,
    /// Unfiltered record count (tab badge).
    pub total_records: usize,
    pub query: String,
    /// Query active, section has records, none matched.
    pub no_match_notice: bool,
    /// Inline mutation error for this list, verbatim.
    pub error: Option<String>,
    pub pagination: Option<PaginationViewModel>,
    /// Clamped page for store self-correction.
    pub effective_page: usize,
    pub body: SectionBody,
}

/// The synthetic search-results section: per-section groups of matches.
#[derive(Debug, Clone)]
pub struct SearchViewModel {
    pub query: String,
    pub total: usize,
    pub groups: Vec<SectionViewModel>,
}

#[derive(Debug, Clone)]
pub enum ScreenBody {
    Loading,
    Section(SectionViewModel),
    Search(SearchViewModel),
}

/// Complete screen state for the TUI renderer.
#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    pub tabs: Vec<TabViewModel>,
    pub active: SectionKey,
    pub stats: Vec<super::StatViewModel>,
    pub fetch_error: Option<String>,
    pub body: ScreenBody,
}
