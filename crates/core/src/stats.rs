//! Derived portfolio metrics.
//!
//! The aggregator is stateless: metrics are recomputed from the full
//! project set on every call, with no caching. The four numbers are drawn
//! from a single SQL statement, so they reflect one consistent snapshot
//! of the store.

use serde::Serialize;

/// A project whose `current_stage` equals this value counts as completed.
pub const COMPLETED_STAGE: i32 = 5;

/// Summary metrics over the full live project set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: i64,
    pub completed_projects: i64,
    /// Mean ROI across all projects, reported to one decimal place.
    /// Zero when the set is empty.
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    pub total_budget: i64,
}

impl ProjectStats {
    /// Metrics for an empty project set.
    pub fn empty() -> Self {
        Self {
            total_projects: 0,
            completed_projects: 0,
            avg_roi: 0.0,
            total_budget: 0,
        }
    }
}

/// Round to one decimal place. Average ROI is reported at that precision.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_tenth_truncates_noise() {
        assert_eq!(round_to_tenth(76.666_666), 76.7);
        assert_eq!(round_to_tenth(50.04), 50.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(-12.34), -12.3);
    }

    #[test]
    fn round_to_tenth_is_idempotent_on_tenths() {
        assert_eq!(round_to_tenth(80.5), 80.5);
        assert_eq!(round_to_tenth(round_to_tenth(33.333)), round_to_tenth(33.333));
    }

    #[test]
    fn stats_serialize_with_camel_case_wire_names() {
        let stats = ProjectStats {
            total_projects: 3,
            completed_projects: 1,
            avg_roi: 76.7,
            total_budget: 133_000,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalProjects"], 3);
        assert_eq!(json["completedProjects"], 1);
        assert_eq!(json["avgROI"], 76.7);
        assert_eq!(json["totalBudget"], 133_000);
    }

    #[test]
    fn empty_stats_are_all_zero() {
        let stats = ProjectStats::empty();
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.completed_projects, 0);
        assert_eq!(stats.avg_roi, 0.0);
        assert_eq!(stats.total_budget, 0);
    }
}
