use chrono::{DateTime, Utc};
use serde::Serialize;
use waystone_evaluator::evaluator::{ItemEvaluation, PassSummary};

use crate::schema::config::HighlightConfig;

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluated_at: DateTime<Utc>,
    pub config: HighlightConfig,
    pub banned_modifiers: Vec<String>,
    pub summary: PassSummary,
    pub items: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub name: Option<String>,
    pub tier: i32,
    #[serde(flatten)]
    pub evaluation: ItemEvaluation,
}
