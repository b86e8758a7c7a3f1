use crate::scan::RepoModel;
use crate::types::scoring::Score;

pub fn code_quality_score(model: &RepoModel) -> Score {
    let mut score: f64 = 50.0;

    if model.quality.has_test_dir {
        score += 20.0;
    }
    if model.quality.has_lint_config {
        score += 10.0;
    }
    if model.quality.has_type_config {
        score += 15.0;
    }

    score.clamp(0.0, 100.0)
}
