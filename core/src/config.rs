use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};

/// Fraction of the knowledge-area maximum rank a member must reach to
/// count as strong in that area.
pub const DEFAULT_STRONG_RANK_RATIO: f64 = 0.75;

/// Skills covered by fewer than this percentage of members are gaps.
pub const DEFAULT_GAP_COVERAGE_THRESHOLD_PCT: f64 = 50.0;

/// Skills whose average rank is below this value are gaps.
/// Fixed, not derived from the scale's own range.
pub const DEFAULT_GAP_AVERAGE_RANK_THRESHOLD: f64 = 2.5;

pub const DEFAULT_TOP_PERFORMER_LIMIT: usize = 5;

/// Reserved client name meaning "not currently engaged".
pub const DEFAULT_SENTINEL_CLIENT_NAME: &str = "Talent Pool";

pub const DEFAULT_UNKNOWN_MEMBER_NAME: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub strong_rank_ratio:          f64,
    pub gap_coverage_threshold_pct: f64,
    pub gap_average_rank_threshold: f64,
    pub top_performer_limit:        usize,
    pub sentinel_client_name:       String,
    pub unknown_member_name:        String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            strong_rank_ratio:          DEFAULT_STRONG_RANK_RATIO,
            gap_coverage_threshold_pct: DEFAULT_GAP_COVERAGE_THRESHOLD_PCT,
            gap_average_rank_threshold: DEFAULT_GAP_AVERAGE_RANK_THRESHOLD,
            top_performer_limit:        DEFAULT_TOP_PERFORMER_LIMIT,
            sentinel_client_name:       DEFAULT_SENTINEL_CLIENT_NAME.into(),
            unknown_member_name:        DEFAULT_UNKNOWN_MEMBER_NAME.into(),
        }
    }
}

impl AnalyticsConfig {
    /// Load from a JSON file. Fields missing from the file keep their
    /// defaults. In tests, use AnalyticsConfig::default().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        log::info!(
            "config: loaded {path} (strong_ratio={:.2}, gap_coverage={:.1}%, gap_rank={:.2})",
            config.strong_rank_ratio,
            config.gap_coverage_threshold_pct,
            config.gap_average_rank_threshold,
        );
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(content: &str) -> DeskResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DeskResult<()> {
        if !(0.0..=1.0).contains(&self.strong_rank_ratio) {
            return Err(invalid(
                "strong_rank_ratio",
                format!("must be within [0, 1], got {}", self.strong_rank_ratio),
            ));
        }
        if !(0.0..=100.0).contains(&self.gap_coverage_threshold_pct) {
            return Err(invalid(
                "gap_coverage_threshold_pct",
                format!("must be within [0, 100], got {}", self.gap_coverage_threshold_pct),
            ));
        }
        if !self.gap_average_rank_threshold.is_finite() || self.gap_average_rank_threshold < 0.0 {
            return Err(invalid(
                "gap_average_rank_threshold",
                format!("must be a non-negative number, got {}", self.gap_average_rank_threshold),
            ));
        }
        if self.sentinel_client_name.trim().is_empty() {
            return Err(invalid("sentinel_client_name", "must not be empty".into()));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> DeskError {
    DeskError::InvalidConfig { field: field.into(), reason }
}
