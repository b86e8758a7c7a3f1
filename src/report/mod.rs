pub mod json;
pub mod md;

use crate::error::{Result, RevscanError};
use crate::trends::TrendSet;
use crate::types::report::Analysis;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_analysis(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(analysis).map_err(RevscanError::Json),
        OutputFormat::Md => Ok(md::analysis_markdown(analysis)),
    }
}

pub fn render_trends(trends: &TrendSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(trends).map_err(RevscanError::Json),
        OutputFormat::Md => Ok(md::trends_markdown(trends)),
    }
}
