pub mod record;
pub mod section;
pub mod snapshot;

pub use record::{FieldValue, Record, RecordId};
pub use section::{Column, GoalCadence, SectionKey};
pub use snapshot::Snapshot;
