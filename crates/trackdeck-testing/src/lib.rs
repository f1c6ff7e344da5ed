//! Testing infrastructure for trackdeck integration tests.
//!
//! Provides ready-made snapshots and record builders so tests describe
//! behavior instead of JSON plumbing.

pub mod fixtures;

pub use fixtures::{job_batch_snapshot, sample_snapshot, write_snapshot_file};
