use crate::error::RevscanError;
use crate::types::scoring::CATEGORIES;
use serde::Deserialize;
use std::collections::HashMap;

/// Optional tool configuration. Scoring weights may be overridden per
/// category; everything else falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevscanConfig {
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
}

impl RevscanConfig {
    pub fn default_weights() -> [f64; 7] {
        [0.25, 0.20, 0.15, 0.15, 0.10, 0.10, 0.05]
    }

    pub fn weights(&self) -> [f64; 7] {
        let defaults = Self::default_weights();
        match self.scoring.as_ref().and_then(|scoring| scoring.weights.as_ref()) {
            Some(weights) => {
                let mut resolved = defaults;
                for (index, category) in CATEGORIES.iter().enumerate() {
                    if let Some(weight) = weights.get(*category) {
                        resolved[index] = *weight;
                    }
                }
                resolved
            }
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), RevscanError> {
        if let Some(weights) = self.scoring.as_ref().and_then(|scoring| scoring.weights.as_ref()) {
            let unknown = weights
                .keys()
                .filter(|key| !CATEGORIES.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(RevscanError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(RevscanError::ConfigParse(
                "scoring.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(RevscanError::ConfigParse(format!(
                "scoring.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        Ok(())
    }
}
