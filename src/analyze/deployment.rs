use crate::scan::RepoModel;
use crate::types::scoring::Score;

pub fn deployment_ready_score(model: &RepoModel) -> Score {
    let mut score: f64 = 0.0;

    if model.deployment.has_dockerfile {
        score += 30.0;
    }
    if model.deployment.has_ci_config {
        score += 20.0;
    }
    if model.deployment.has_env_template {
        score += 15.0;
    }
    if model.manifest.has_build_script {
        score += 20.0;
    }
    score += model.deployment.docs_marker_count as f64 * 5.0;

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{DeploymentSignals, ManifestSignals};

    #[test]
    fn empty_model_scores_zero() {
        assert_eq!(deployment_ready_score(&RepoModel::default()), 0.0);
    }

    #[test]
    fn full_deployment_setup_scores_high() {
        let model = RepoModel {
            deployment: DeploymentSignals {
                has_dockerfile: true,
                has_ci_config: true,
                has_env_template: true,
                docs_marker_count: 3,
            },
            manifest: ManifestSignals {
                has_build_script: true,
                ..ManifestSignals::default()
            },
            ..RepoModel::default()
        };
        // 30 + 20 + 15 + 20 + 15
        assert_eq!(deployment_ready_score(&model), 100.0);
    }

    #[test]
    fn docs_markers_add_five_each() {
        let model = RepoModel {
            deployment: DeploymentSignals {
                docs_marker_count: 2,
                ..DeploymentSignals::default()
            },
            ..RepoModel::default()
        };
        assert_eq!(deployment_ready_score(&model), 10.0);
    }
}
