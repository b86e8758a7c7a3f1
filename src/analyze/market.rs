use crate::scan::RepoModel;
use crate::types::metadata::RepoMetadata;
use crate::types::scoring::Score;

/// Keywords that signal demand when they appear in the repo description.
pub const TRENDING_KEYWORDS: [&str; 7] = [
    "ai",
    "ml",
    "saas",
    "marketplace",
    "automation",
    "analytics",
    "crypto",
];

pub fn market_demand_score(metadata: &RepoMetadata, model: &RepoModel) -> Score {
    let mut score: f64 = 0.0;

    score += match metadata.star_count {
        stars if stars > 100 => 40.0,
        stars if stars > 50 => 30.0,
        stars if stars > 10 => 20.0,
        stars if stars > 0 => 10.0,
        _ => 0.0,
    };

    let description = metadata.description.to_lowercase();
    for keyword in TRENDING_KEYWORDS {
        if description.contains(keyword) {
            score += 10.0;
        }
    }

    if model.readme_chars > 1000 {
        score += 20.0;
    } else if model.readme_chars > 200 {
        score += 10.0;
    }

    score.clamp(0.0, 100.0)
}
