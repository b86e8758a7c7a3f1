use crate::types::scoring::{Score, ScoreSet};
use serde::Serialize;
use std::fmt;

/// Revenue potential tier, ordered lowest to highest. Each tier carries the
/// dollar estimate attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Tier {
    /// Thresholds are evaluated high to low; lower bounds are inclusive.
    pub fn from_total(total: Score) -> Tier {
        if total >= 80.0 {
            Tier::VeryHigh
        } else if total >= 60.0 {
            Tier::High
        } else if total >= 40.0 {
            Tier::Medium
        } else if total >= 20.0 {
            Tier::Low
        } else {
            Tier::VeryLow
        }
    }

    pub fn estimated_value(self) -> u64 {
        match self {
            Tier::VeryHigh => 50_000,
            Tier::High => 25_000,
            Tier::Medium => 10_000,
            Tier::Low => 2_000,
            Tier::VeryLow => 500,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::VeryHigh => "Very High",
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
            Tier::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Effort::Low => "Low",
            Effort::Medium => "Medium",
            Effort::High => "High",
        };
        f.write_str(label)
    }
}

/// Full scoring output for one repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub name: String,
    pub url: String,
    pub scores: ScoreSet,
    pub total_score: Score,
    pub revenue_tier: Tier,
    pub estimated_value: u64,
    pub monetization_strategies: Vec<String>,
    pub next_steps: Vec<String>,
}

/// A trend-aligned suggestion derived from an `Analysis`.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub action: String,
    pub impact: String,
    pub effort: Effort,
}

impl Recommendation {
    pub fn new(
        category: &str,
        priority: Priority,
        action: impl Into<String>,
        impact: &str,
        effort: Effort,
    ) -> Self {
        Self {
            category: category.to_string(),
            priority,
            action: action.into(),
            impact: impact.to_string(),
            effort,
        }
    }
}
