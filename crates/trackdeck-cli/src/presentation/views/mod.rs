mod section;
mod summary;

pub use section::{SearchView, SectionView};
pub use summary::SummaryView;
