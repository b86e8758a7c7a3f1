use crate::trends::catalog::CATALOG_VERSION;
use crate::trends::{TrendEntry, TrendSet};
use crate::types::report::Analysis;
use crate::types::scoring::CATEGORIES;

pub fn analysis_markdown(analysis: &Analysis) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Revenue Analysis: {}\n\n", analysis.name));
    if !analysis.url.is_empty() {
        output.push_str(&format!("Repository: {}\n", analysis.url));
    }
    output.push_str(&format!("Total score: {:.2}/100\n", analysis.total_score));
    output.push_str(&format!("Revenue potential: {}\n", analysis.revenue_tier));
    output.push_str(&format!(
        "Estimated value: ${}\n\n",
        analysis.estimated_value
    ));

    output.push_str("## Category Scores\n\n");
    for (category, value) in CATEGORIES.iter().zip(analysis.scores.as_array()) {
        output.push_str(&format!("- {}: {:.2}\n", category, value));
    }
    output.push('\n');

    output.push_str("## Monetization Strategies\n\n");
    if analysis.monetization_strategies.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, strategy) in analysis.monetization_strategies.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, strategy));
        }
    }
    output.push('\n');

    output.push_str("## Next Steps\n\n");
    if analysis.next_steps.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, step) in analysis.next_steps.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, step));
        }
    }

    output
}

pub fn trends_markdown(trends: &TrendSet) -> String {
    let mut output = String::new();
    output.push_str(&format!("# AI Trends Report ({})\n\n", CATALOG_VERSION));
    push_section(&mut output, "Trending Models", &trends.models);
    push_section(&mut output, "Trending Frameworks", &trends.frameworks);
    push_section(&mut output, "Trending Techniques", &trends.techniques);
    push_section(&mut output, "Trending Tools", &trends.tools);
    push_section(&mut output, "Trending Use Cases", &trends.use_cases);
    output
}

fn push_section(output: &mut String, title: &str, entries: &[TrendEntry]) {
    output.push_str(&format!("## {}\n\n", title));
    for entry in entries {
        output.push_str(&format!("### {}\n", entry.name));
        output.push_str(&format!("- **Summary**: {}\n", entry.summary));
        output.push_str(&format!("- **Priority**: {}\n", entry.priority));
        output.push_str(&format!("- **Note**: {}\n\n", entry.note));
    }
}
