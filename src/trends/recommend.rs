use super::TrendSet;
use crate::types::report::{Analysis, Effort, Priority, Recommendation};

const ECOMMERCE_NAME_HINTS: [&str; 3] = ["shop", "commerce", "marketplace"];

/// Match an analysis against the trend catalog. Rules run in a fixed
/// order and each appends at most one recommendation; callers wanting a
/// "top N" slice the result.
pub fn recommend(analysis: &Analysis, trends: &TrendSet) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let name = analysis.name.to_lowercase();

    if analysis.scores.tech_stack_modern < 70.0 {
        recommendations.push(Recommendation::new(
            "AI Integration",
            Priority::High,
            ai_integration_action(trends),
            "Increase user engagement and revenue potential",
            Effort::Medium,
        ));
    }

    if analysis.scores.code_quality > 60.0 {
        recommendations.push(Recommendation::new(
            "Developer Experience",
            Priority::Medium,
            "Implement RAG-based documentation search",
            "Improve developer onboarding and reduce support",
            Effort::Low,
        ));
    }

    if name.contains("saas") || name.contains("platform") {
        recommendations.push(Recommendation::new(
            "Automation",
            Priority::High,
            "Add AI agent for customer support automation",
            "Reduce support costs, improve response time",
            Effort::Medium,
        ));
    }

    if ECOMMERCE_NAME_HINTS.iter().any(|hint| name.contains(hint)) {
        recommendations.push(Recommendation::new(
            "Revenue Optimization",
            Priority::Critical,
            "Implement AI-powered product recommendations",
            "Increase conversion rate by 15-30%",
            Effort::Medium,
        ));
    }

    recommendations.push(Recommendation::new(
        "Reliability",
        Priority::Medium,
        "Use structured outputs for all AI integrations",
        "Reduce errors and improve user experience",
        Effort::Low,
    ));

    recommendations
}

fn ai_integration_action(trends: &TrendSet) -> String {
    let highlighted = trends
        .models
        .iter()
        .filter(|entry| entry.priority >= Priority::High)
        .take(2)
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>();
    if highlighted.is_empty() {
        "Add AI-powered features using a current-generation model".to_string()
    } else {
        format!("Add AI-powered features using {}", highlighted.join(" or "))
    }
}
