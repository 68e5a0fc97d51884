//! Machine-readable summary printed after the screen is restored.

use galaxy_voyager_core::Outcome;
use galaxy_voyager_system_simulation::RunReport;
use serde::Serialize;

/// Outcome and counters of one finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct RunSummary {
    /// How the run ended.
    pub outcome: Outcome,
    /// Targets collected.
    pub score: u32,
    /// Targets on the board.
    pub target_count: u32,
    /// Hazards launched by every emitter.
    pub hazards_launched: u64,
    /// Run duration in milliseconds.
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub(crate) fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl From<&RunReport> for RunSummary {
    fn from(report: &RunReport) -> Self {
        Self {
            outcome: report.outcome,
            score: report.score,
            target_count: report.target_count,
            hazards_launched: report.hazards_launched,
            elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn summary_serialises_as_toml() {
        let report = RunReport {
            outcome: Outcome::Victory,
            score: 10,
            target_count: 10,
            hazards_launched: 12,
            elapsed: Duration::from_millis(61_500),
        };

        let toml = RunSummary::from(&report)
            .to_toml()
            .expect("summary serialises");

        assert!(toml.contains("outcome = \"victory\""), "{toml}");
        assert!(toml.contains("score = 10"), "{toml}");
        assert!(toml.contains("hazards_launched = 12"), "{toml}");
        assert!(toml.contains("elapsed_ms = 61500"), "{toml}");
    }

    #[test]
    fn defeat_is_snake_case() {
        let report = RunReport {
            outcome: Outcome::Defeat,
            score: 3,
            target_count: 10,
            hazards_launched: 0,
            elapsed: Duration::ZERO,
        };
        let toml = RunSummary::from(&report)
            .to_toml()
            .expect("summary serialises");
        assert!(toml.contains("outcome = \"defeat\""), "{toml}");
    }
}
