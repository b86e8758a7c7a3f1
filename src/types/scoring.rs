use serde::Serialize;

pub type Score = f64;

/// Category names in weight order.
pub const CATEGORIES: [&str; 7] = [
    "market_demand",
    "monetization_ready",
    "tech_stack_modern",
    "deployment_ready",
    "user_traction",
    "code_quality",
    "strategic_value",
];

/// The seven category sub-scores, each clamped to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSet {
    pub market_demand: Score,
    pub monetization_ready: Score,
    pub tech_stack_modern: Score,
    pub deployment_ready: Score,
    pub user_traction: Score,
    pub code_quality: Score,
    pub strategic_value: Score,
}

impl ScoreSet {
    pub fn as_array(&self) -> [Score; 7] {
        [
            self.market_demand,
            self.monetization_ready,
            self.tech_stack_modern,
            self.deployment_ready,
            self.user_traction,
            self.code_quality,
            self.strategic_value,
        ]
    }

    /// Weighted total, rounded to two decimals.
    pub fn weighted_total(&self, weights: &[f64; 7]) -> Score {
        let total: f64 = self
            .as_array()
            .iter()
            .zip(weights.iter())
            .map(|(score, weight)| score * weight)
            .sum();
        (total * 100.0).round() / 100.0
    }
}
