use crate::scan::RepoModel;
use crate::types::scoring::Score;

pub fn monetization_ready_score(model: &RepoModel) -> Score {
    let mut score: f64 = 0.0;

    score += ((model.monetization.keyword_file_matches * 10) as f64).min(50.0);
    score += model.monetization.payment_config_count as f64 * 15.0;
    if model.monetization.manifest_names_payment_lib {
        score += 30.0;
    }

    score.clamp(0.0, 100.0)
}
