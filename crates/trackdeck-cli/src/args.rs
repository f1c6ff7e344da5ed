use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trackdeck_types::{GoalCadence, SectionKey};

#[derive(Parser)]
#[command(name = "trackdeck")]
#[command(about = "Browse, search, and edit your career tracking data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the data service, e.g. http://localhost:8080
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// JSON snapshot file for offline use
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// High-level counts across every collection
    Summary,

    /// Browse one section, optionally searched and paginated
    List {
        /// Section to show: jobs, coding, projects, networking,
        /// daily_goals, weekly_goals, monthly_goals, meetings
        section: SectionKey,

        #[arg(long)]
        search: Option<String>,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, default_value = "10")]
        page_size: usize,

        /// Include job applications with a rejected status
        #[arg(long)]
        show_rejected: bool,
    },

    /// Search every section at once and show grouped matches
    Search {
        term: String,

        #[arg(long)]
        show_rejected: bool,
    },

    /// Record a new entry
    Add {
        #[command(subcommand)]
        command: AddCommand,
    },

    /// Edit an existing goal
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    /// Interactive dashboard
    Dash,
}

#[derive(Subcommand)]
pub enum AddCommand {
    /// A job application
    Job {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        link: String,

        #[arg(long, default_value = "")]
        applied: String,

        #[arg(long, default_value = "")]
        result: String,

        #[arg(long, default_value = "")]
        status: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// A coding-practice problem
    Coding {
        #[arg(long, default_value = "0")]
        number: i64,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        pattern: String,

        #[arg(long, default_value = "")]
        link: String,

        #[arg(long, default_value = "")]
        difficulty: String,

        #[arg(long)]
        solved: bool,
    },

    /// A project
    Project {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        repo: String,

        #[arg(long)]
        active: bool,

        /// Comma-separated, e.g. "rust, postgres"
        #[arg(long, default_value = "")]
        tech: String,

        #[arg(long, default_value = "")]
        summary: String,
    },

    /// A networking contact
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        how_met: String,

        #[arg(long)]
        connected: bool,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        position: String,

        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand)]
pub enum GoalCommand {
    /// Update a goal's description and/or completion
    Update {
        /// daily, weekly, or monthly
        #[arg(long)]
        cadence: GoalCadence,

        #[arg(long)]
        id: i64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        completed: Option<bool>,
    },
}
