use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys of the fixed section catalogue, plus the synthetic `Search` section
/// that exists only while a search query is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Jobs,
    Coding,
    Projects,
    Networking,
    DailyGoals,
    WeeklyGoals,
    MonthlyGoals,
    Meetings,
    Search,
}

impl SectionKey {
    /// Catalogue order of the eight base sections.
    pub const BASE: [SectionKey; 8] = [
        SectionKey::Jobs,
        SectionKey::Coding,
        SectionKey::Projects,
        SectionKey::Networking,
        SectionKey::DailyGoals,
        SectionKey::WeeklyGoals,
        SectionKey::MonthlyGoals,
        SectionKey::Meetings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Jobs => "jobs",
            SectionKey::Coding => "coding",
            SectionKey::Projects => "projects",
            SectionKey::Networking => "networking",
            SectionKey::DailyGoals => "daily_goals",
            SectionKey::WeeklyGoals => "weekly_goals",
            SectionKey::MonthlyGoals => "monthly_goals",
            SectionKey::Meetings => "meetings",
            SectionKey::Search => "search",
        }
    }

    /// The cadence tag for goal-shaped sections.
    pub fn goal_cadence(&self) -> Option<GoalCadence> {
        match self {
            SectionKey::DailyGoals => Some(GoalCadence::Daily),
            SectionKey::WeeklyGoals => Some(GoalCadence::Weekly),
            SectionKey::MonthlyGoals => Some(GoalCadence::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobs" => Ok(SectionKey::Jobs),
            "coding" => Ok(SectionKey::Coding),
            "projects" => Ok(SectionKey::Projects),
            "networking" => Ok(SectionKey::Networking),
            "daily_goals" | "daily" => Ok(SectionKey::DailyGoals),
            "weekly_goals" | "weekly" => Ok(SectionKey::WeeklyGoals),
            "monthly_goals" | "monthly" => Ok(SectionKey::MonthlyGoals),
            "meetings" => Ok(SectionKey::Meetings),
            "search" => Ok(SectionKey::Search),
            other => Err(format!("unknown section '{}'", other)),
        }
    }
}

/// One projected column of a section: the record field to read and the
/// label to render above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

/// Cadence of a goal list; also tags the goal-update mutation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCadence {
    Daily,
    Weekly,
    Monthly,
}

impl GoalCadence {
    pub const ALL: [GoalCadence; 3] = [
        GoalCadence::Daily,
        GoalCadence::Weekly,
        GoalCadence::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCadence::Daily => "daily",
            GoalCadence::Weekly => "weekly",
            GoalCadence::Monthly => "monthly",
        }
    }

    pub fn section_key(&self) -> SectionKey {
        match self {
            GoalCadence::Daily => SectionKey::DailyGoals,
            GoalCadence::Weekly => SectionKey::WeeklyGoals,
            GoalCadence::Monthly => SectionKey::MonthlyGoals,
        }
    }
}

impl fmt::Display for GoalCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(GoalCadence::Daily),
            "weekly" => Ok(GoalCadence::Weekly),
            "monthly" => Ok(GoalCadence::Monthly),
            other => Err(format!("unknown goal cadence '{}'", other)),
        }
    }
}
