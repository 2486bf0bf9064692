use serde::Serialize;

use super::super::scoring::{ConditionAnalysis, EvidenceGap};

/// One CSV row per analysed condition.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionRow<'a> {
    pub condition_id: &'a str,
    pub condition_name: &'a str,
    pub success_probability: u8,
    pub evidence_score: u8,
    pub average_rating: u8,
    pub evidence_complete: bool,
    pub gap_count: usize,
    pub weaknesses: String,
}

impl<'a> ConditionRow<'a> {
    pub fn new(analysis: &'a ConditionAnalysis, gaps: &[EvidenceGap]) -> Self {
        Self {
            condition_id: analysis.condition_id.as_str(),
            condition_name: &analysis.condition_name,
            success_probability: analysis.success_probability,
            evidence_score: analysis.evidence_score,
            average_rating: analysis.average_rating.value(),
            evidence_complete: analysis.evidence_complete,
            gap_count: gaps
                .iter()
                .filter(|gap| gap.condition_id == analysis.condition_id)
                .count(),
            weaknesses: analysis.weaknesses.join("; "),
        }
    }
}
