//! Sample snapshots mirroring the data service's aggregate payload.

use serde_json::json;
use std::path::{Path, PathBuf};
use trackdeck_types::Snapshot;

/// A small, realistic snapshot touching every collection: four job
/// applications (one rejected), coding problems, projects, contacts, goals
/// at all three cadences, and a meeting.
pub fn sample_snapshot() -> Snapshot {
    let value = json!({
        "job_applications": [
            {
                "id": 1,
                "job_title": "Backend Engineer",
                "company": "Google",
                "status": "applied",
                "applied_date": "2025-06-02",
                "job_link": "https://careers.google.com/123",
                "notes": "referred by Dana"
            },
            {
                "id": 2,
                "job_title": "Platform Engineer",
                "company": "Stripe",
                "status": "interview",
                "applied_date": "2025-06-10"
            },
            {
                "id": 3,
                "job_title": "Site Reliability Engineer",
                "company": "Acme",
                "status": "Rejected (recruiter)",
                "applied_date": "2025-05-20",
                "result_date": "2025-06-01"
            },
            {
                "id": 4,
                "job_title": "Staff Engineer",
                "company": "Initech",
                "status": "offer",
                "applied_date": "2025-05-05",
                "result_date": "2025-06-20"
            }
        ],
        "coding_problems": [
            {
                "id": 10,
                "leetcode_number": 1,
                "title": "Two Sum",
                "pattern": "hash map",
                "difficulty": "easy",
                "already_solved": true,
                "problem_link": "https://leetcode.com/problems/two-sum"
            },
            {
                "id": 11,
                "leetcode_number": 42,
                "title": "Trapping Rain Water",
                "pattern": "two pointers",
                "difficulty": "hard",
                "already_solved": false
            }
        ],
        "projects": [
            {
                "id": 20,
                "name": "homelab",
                "active": true,
                "tech_stack": ["rust", "nix", "postgres"],
                "repo_url": "https://github.com/me/homelab",
                "summary": "self-hosted services"
            },
            {
                "id": 21,
                "name": "blog",
                "active": false,
                "tech_stack": ["zola"],
                "summary": "static site"
            }
        ],
        "networking_contacts": [
            {
                "id": 30,
                "person_name": "Dana Mwangi",
                "company": "Google",
                "position": "Engineering Manager",
                "linkedin_connected": true,
                "how_met": "conference"
            },
            {
                "id": 31,
                "person_name": "Sam Ortiz",
                "company": "Stripe",
                "position": "Recruiter",
                "linkedin_connected": false,
                "how_met": "cold outreach"
            }
        ],
        "daily_goals": [
            {"id": 40, "description": "apply to two roles", "target_date": "2025-07-01", "completed": true},
            {"id": 41, "description": "one leetcode problem", "target_date": "2025-07-01", "completed": false}
        ],
        "weekly_goals": [
            {"id": 50, "description": "two coffee chats", "target_date": "2025-06-30", "completed": false}
        ],
        "monthly_goals": [
            {"id": 60, "description": "ship portfolio update", "target_date": "2025-07-31", "completed": false}
        ],
        "meetings": [
            {
                "id": 70,
                "session_name": "Mock interview",
                "session_type": "practice",
                "session_time": "2025-07-03 18:00",
                "location": "remote",
                "organizer": "Dana Mwangi",
                "company": "Google"
            }
        ]
    });
    serde_json::from_value(value).expect("sample snapshot is valid")
}

/// A snapshot holding `count` generic job applications, for pagination
/// scenarios. Ids run 1..=count, titles `Role 1`..`Role count`.
pub fn job_batch_snapshot(count: usize) -> Snapshot {
    let jobs: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "id": n,
                "job_title": format!("Role {n}"),
                "company": format!("Company {n}"),
                "status": "applied"
            })
        })
        .collect();
    serde_json::from_value(json!({ "job_applications": jobs }))
        .expect("job batch snapshot is valid")
}

/// Write a snapshot as JSON into `dir` and return the file path.
pub fn write_snapshot_file(dir: &Path, snapshot: &Snapshot) -> PathBuf {
    let path = dir.join("snapshot.json");
    let raw = serde_json::to_string_pretty(snapshot).expect("snapshot serializes");
    std::fs::write(&path, raw).expect("snapshot file writes");
    path
}
