//! Stateless builders converting controller state into ViewModels.
//! All decisions (filters, clamping, highlight runs, fallbacks) happen
//! here; views only map the result to output.

mod section;
mod summary;

pub use section::{
    page_syncs, present_screen, present_search, present_section, present_tabs,
};
pub use summary::present_summary;
