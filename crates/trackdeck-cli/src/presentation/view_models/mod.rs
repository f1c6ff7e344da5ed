//! Plain data for the renderers: pre-computed values only, no domain logic.
//! Views map these to console lines or TUI widgets without decisions.

mod section;
mod summary;

pub use section::{
    CellViewModel, GoalRowViewModel, JobRowViewModel, PaginationViewModel, RecordRowViewModel,
    ScreenBody, ScreenViewModel, SearchViewModel, SectionBody, SectionViewModel, TabViewModel,
};
pub use summary::StatViewModel;
