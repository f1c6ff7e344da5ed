use super::USE_COLOR;
use owo_colors::OwoColorize;
use trackdeck_engine::StatusTier;

/// Color a job status label by its display tier.
pub fn paint_status(label: &str, tier: StatusTier) -> String {
    if !*USE_COLOR {
        return label.to_string();
    }
    match tier {
        StatusTier::Rejected => format!("{}", label.red()),
        StatusTier::Offer => format!("{}", label.green()),
        StatusTier::Interview => format!("{}", label.yellow()),
        StatusTier::Applied => format!("{}", label.blue()),
        StatusTier::Neutral => label.to_string(),
    }
}
