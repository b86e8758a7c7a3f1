use crate::types::metadata::RepoMetadata;
use crate::types::scoring::Score;

/// Keywords that signal portfolio value beyond direct revenue. Unlike the
/// tech categories there is no cap here besides the final clamp; this
/// asymmetry is inherited behavior and kept on purpose.
pub const STRATEGIC_KEYWORDS: [&str; 5] = ["platform", "framework", "library", "tool", "system"];

pub fn strategic_value_score(metadata: &RepoMetadata) -> Score {
    let mut score: f64 = 50.0;

    let description = metadata.description.to_lowercase();
    for keyword in STRATEGIC_KEYWORDS {
        if description.contains(keyword) {
            score += 10.0;
        }
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(description: &str) -> RepoMetadata {
        RepoMetadata {
            description: description.to_string(),
            ..RepoMetadata::default()
        }
    }

    #[test]
    fn base_score_is_fifty() {
        assert_eq!(strategic_value_score(&meta("")), 50.0);
    }

    #[test]
    fn each_keyword_adds_ten() {
        assert_eq!(
            strategic_value_score(&meta("a platform and framework for tooling")),
            80.0
        );
    }

    #[test]
    fn all_keywords_clamp_at_hundred() {
        let score = strategic_value_score(&meta(
            "platform framework library tool system for everything",
        ));
        assert_eq!(score, 100.0);
    }
}
