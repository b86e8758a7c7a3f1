use crate::scan::RepoModel;
use crate::types::scoring::Score;

/// Technology keyword table. Within one manifest each category grants at
/// most one increment, but both manifests are probed independently.
pub const HIGH_VALUE_TECH: [(&str, &[&str]); 6] = [
    ("saas", &["next.js", "react", "vue", "stripe", "supabase", "vercel"]),
    (
        "ai_ml",
        &["tensorflow", "pytorch", "openai", "langchain", "huggingface", "ollama"],
    ),
    ("blockchain", &["solidity", "web3", "ethereum", "hardhat"]),
    ("api", &["fastapi", "express", "graphql", "rest"]),
    ("mobile", &["react-native", "flutter", "swift", "kotlin"]),
    ("ecommerce", &["shopify", "woocommerce", "stripe", "paypal"]),
];

pub fn tech_stack_score(model: &RepoModel) -> Score {
    let mut score: f64 = 0.0;

    for manifest in [
        model.manifest.package_json.as_deref(),
        model.manifest.requirements_txt.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        let lowered = manifest.to_lowercase();
        for (_, techs) in HIGH_VALUE_TECH {
            if techs.iter().any(|tech| lowered.contains(tech)) {
                score += 10.0;
            }
        }
    }

    score += model.stack.modern_marker_count as f64 * 15.0;

    score.clamp(0.0, 100.0)
}
