//! Rule-based startup analysis.
//!
//! Produces a fixed-shape report from a startup profile and its content.
//! Only the summary and the last strength depend on the input; every other
//! entry is a constant placeholder until an inference backend is wired in.

use tracing::debug;

use crate::api::{ContentItem, SimpleAnalysis, Startup, StartupId};
use crate::db::repository::{FullRepository, RepositoryError};

const DEFAULT_STAGE: &str = "startup";
const DEFAULT_INDUSTRY: &str = "technology";

const TARGET_CUSTOMERS: [&str; 3] = [
    "Early-stage startups seeking growth",
    "SMBs looking for digital transformation",
    "Founders needing market intelligence",
];

const BASE_STRENGTHS: [&str; 3] = [
    "Clear documentation of business model",
    "Digital-first approach",
    "Focus on solving real problems",
];

const WEAKNESSES: [&str; 4] = [
    "Need more specific metrics and KPIs",
    "Value proposition could be sharper",
    "Competitive differentiation requires clarity",
    "Revenue model needs more detail",
];

const RECOMMENDATIONS: [&str; 5] = [
    "Add quantifiable metrics (TAM, user growth, revenue)",
    "Conduct competitive analysis to sharpen positioning",
    "Develop clear go-to-market strategy",
    "Create pitch deck with financial projections",
    "Build case studies or early customer testimonials",
];

/// Errors raised while analyzing a stored startup.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The startup has no content to analyze.
    #[error("No content to analyze. Please add content first.")]
    NoContent,
}

/// Join all content into one text blob, one `[source_type] identifier` header per item.
pub fn combine_content(items: &[ContentItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "[{}] {}\n{}",
                item.source_type,
                item.source_identifier.as_deref().unwrap_or(""),
                item.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Build the analysis report for a startup.
///
/// Callers are expected to reject startups without content beforehand;
/// an empty slice still yields a report that mentions zero pieces.
pub fn generate_analysis(startup: &Startup, items: &[ContentItem]) -> SimpleAnalysis {
    let count = items.len();
    let stage = startup.stage.as_deref().unwrap_or(DEFAULT_STAGE);
    let industry = startup.industry.as_deref().unwrap_or(DEFAULT_INDUSTRY);

    let summary = format!(
        "{} is a {} in the {} space. \
         Based on the provided content, they appear to be building solutions \
         focused on addressing market needs. \
         The company has documented {} content pieces describing their approach.",
        startup.name, stage, industry, count
    );

    let mut strengths = to_strings(&BASE_STRENGTHS);
    strengths.push(format!("Active content creation ({} pieces)", count));

    SimpleAnalysis {
        summary,
        target_customers: to_strings(&TARGET_CUSTOMERS),
        strengths,
        weaknesses: to_strings(&WEAKNESSES),
        recommendations: to_strings(&RECOMMENDATIONS),
    }
}

/// Load a startup with its content and analyze it.
///
/// # Errors
/// * `AnalysisError::Repository` (not found) if the startup does not exist
/// * `AnalysisError::NoContent` if the startup has no content items
pub async fn analyze_startup<R: FullRepository + ?Sized>(
    repo: &R,
    startup_id: StartupId,
) -> Result<SimpleAnalysis, AnalysisError> {
    let startup = repo.get_startup(startup_id).await?;
    let items = repo.list_content(startup_id).await?;
    if items.is_empty() {
        return Err(AnalysisError::NoContent);
    }

    let combined = combine_content(&items);
    debug!(
        startup_id = %startup_id,
        items = items.len(),
        combined_len = combined.len(),
        "generating rule-based analysis"
    );

    Ok(generate_analysis(&startup, &items))
}
