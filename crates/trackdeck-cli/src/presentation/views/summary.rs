use crate::presentation::view_models::StatViewModel;
use std::fmt;

pub struct SummaryView<'a> {
    stats: &'a [StatViewModel],
}

impl<'a> SummaryView<'a> {
    pub fn new(stats: &'a [StatViewModel]) -> Self {
        Self { stats }
    }
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .stats
            .iter()
            .map(|stat| stat.label.len())
            .max()
            .unwrap_or(0);
        for stat in self.stats {
            writeln!(f, "{:<width$}  {}", stat.label, stat.value)?;
        }
        Ok(())
    }
}
