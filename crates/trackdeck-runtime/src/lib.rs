pub mod client;
pub mod config;
pub mod controller;
pub mod error;

pub use client::{
    CodingPayload, ContactPayload, DashboardClient, GoalUpdate, HttpClient, JobPayload,
    JobStatusUpdate, LocalClient, Mutation, ProjectPayload, parse_tech_stack,
};
pub use config::{Config, require_source, resolve_api_base, resolve_data_file};
pub use controller::{DashboardController, FetchTicket};
pub use error::{Error, Result};
