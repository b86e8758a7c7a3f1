pub mod deployment;
pub mod market;
pub mod monetization;
pub mod quality;
pub mod stack;
pub mod strategic;
pub mod traction;

use crate::scan::RepoModel;
use crate::types::metadata::RepoMetadata;
use crate::types::report::{Analysis, Tier};
use crate::types::scoring::ScoreSet;
use chrono::{DateTime, Utc};

/// Score one repository. `now` is injected so the recency term is
/// deterministic under test; weights come from config or the defaults.
pub fn score(
    metadata: &RepoMetadata,
    model: &RepoModel,
    now: DateTime<Utc>,
    weights: &[f64; 7],
) -> Analysis {
    let scores = ScoreSet {
        market_demand: market::market_demand_score(metadata, model),
        monetization_ready: monetization::monetization_ready_score(model),
        tech_stack_modern: stack::tech_stack_score(model),
        deployment_ready: deployment::deployment_ready_score(model),
        user_traction: traction::user_traction_score(metadata, now),
        code_quality: quality::code_quality_score(model),
        strategic_value: strategic::strategic_value_score(metadata),
    };

    let total_score = scores.weighted_total(weights);
    let revenue_tier = Tier::from_total(total_score);

    let name = if metadata.name.is_empty() {
        model
            .root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string()
    } else {
        metadata.name.clone()
    };

    let monetization_strategies = monetization_strategies(model, &scores);
    let next_steps = next_steps(&scores);

    Analysis {
        name,
        url: metadata.url.clone(),
        scores,
        total_score,
        revenue_tier,
        estimated_value: revenue_tier.estimated_value(),
        monetization_strategies,
        next_steps,
    }
}

/// Rule order is fixed: earlier rules survive the truncation to five, so
/// the cheapest high-leverage moves always surface first.
fn monetization_strategies(model: &RepoModel, scores: &ScoreSet) -> Vec<String> {
    let mut strategies = Vec::new();

    let has_frontend = model.manifest.package_json.is_some();
    let has_backend = model.manifest.requirements_txt.is_some() || model.manifest.has_go_mod;

    if scores.monetization_ready < 30.0 {
        strategies.push("Add Stripe payment integration for premium features".to_string());
        strategies.push("Implement subscription tiers (Basic/Pro/Enterprise)".to_string());
    }

    if has_frontend && scores.deployment_ready > 50.0 {
        strategies.push("Deploy to Vercel with usage-based pricing".to_string());
        strategies.push("Add analytics to track user behavior and conversion".to_string());
    }

    if has_backend {
        strategies.push("Create API tier with rate limiting for paid plans".to_string());
        strategies.push("Offer managed hosting service".to_string());
    }

    if scores.user_traction > 60.0 {
        strategies.push("Launch on Product Hunt for visibility".to_string());
        strategies.push("Create affiliate program for user referrals".to_string());
    }

    strategies.push("Add freemium model with generous free tier".to_string());
    strategies.push("Create marketplace listing (Shopify/WordPress)".to_string());

    strategies.truncate(5);
    strategies
}

fn next_steps(scores: &ScoreSet) -> Vec<String> {
    let mut steps = Vec::new();

    if scores.deployment_ready < 50.0 {
        steps.push("Set up CI/CD pipeline with GitHub Actions".to_string());
        steps.push("Create Dockerfile for containerization".to_string());
    }

    if scores.code_quality < 60.0 {
        steps.push("Add unit tests to improve reliability".to_string());
        steps.push("Set up linting and code formatting".to_string());
    }

    if scores.tech_stack_modern < 50.0 {
        steps.push("Modernize dependencies to latest versions".to_string());
        steps.push("Consider migrating to TypeScript for better DX".to_string());
    }

    if scores.monetization_ready < 40.0 {
        steps.push("Integrate payment processing (Stripe recommended)".to_string());
        steps.push("Design pricing tiers and feature gates".to_string());
    }

    steps.push("Create comprehensive documentation".to_string());
    steps.push("Set up error tracking (Sentry/LogRocket)".to_string());

    steps.truncate(5);
    steps
}
