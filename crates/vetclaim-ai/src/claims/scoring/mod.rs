//! Evidence scoring: per-condition success probability and evidence gaps.

mod rules;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::catalog::{AnalysisError, ConditionCatalog};
use super::domain::{
    Claim, ClaimCondition, ConditionDefinition, ConditionId, EvidenceId, EvidenceImportance,
};
use super::rating::DisabilityRating;

/// Stateless scorer that reads evidence importance from the injected catalog.
#[derive(Debug, Clone)]
pub struct EvidenceScorer {
    catalog: Arc<ConditionCatalog>,
}

impl EvidenceScorer {
    pub fn new(catalog: Arc<ConditionCatalog>) -> Self {
        Self { catalog }
    }

    /// Checklist-based success percentage for `definition` given the evidence on file.
    ///
    /// Required items the catalog does not know count toward the total but never as
    /// critical. Empty partitions count as complete.
    pub fn success_probability(
        &self,
        definition: &ConditionDefinition,
        provided_evidence: &BTreeSet<EvidenceId>,
    ) -> u8 {
        let required = &definition.required_evidence;
        let critical: Vec<&EvidenceId> = required
            .iter()
            .filter(|id| self.catalog.importance_of(id) == Some(EvidenceImportance::Critical))
            .collect();

        let critical_complete = completion_ratio(
            critical
                .iter()
                .filter(|id| provided_evidence.contains(**id))
                .count(),
            critical.len(),
        );
        let total_complete = completion_ratio(
            required
                .iter()
                .filter(|id| provided_evidence.contains(*id))
                .count(),
            required.len(),
        );

        rules::to_percent(rules::checklist_probability(
            definition.base_success_rate,
            critical_complete,
            total_complete,
        ))
    }

    pub fn condition_level_analysis(
        &self,
        condition: &ClaimCondition,
        definition: &ConditionDefinition,
    ) -> ConditionAnalysis {
        let evidence_complete = condition.evidence_complete(definition);
        let probability = rules::adjusted_probability(condition, definition, evidence_complete);

        trace!(
            condition = %definition.id,
            base = definition.base_success_rate,
            probability,
            evidence_complete,
            "scored condition"
        );

        ConditionAnalysis {
            condition_id: definition.id.clone(),
            condition_name: definition.name.clone(),
            diagnostic_code: definition.diagnostic_code.clone(),
            success_probability: rules::to_percent(probability),
            evidence_score: self.success_probability(definition, &condition.provided_evidence),
            evidence_complete,
            missing_evidence: condition.missing_evidence(definition),
            average_rating: definition.average_rating,
            strengths: rules::strengths(condition),
            weaknesses: rules::weaknesses(condition),
            critical_actions: rules::critical_actions(condition),
        }
    }

    /// Every documentation gap across the claim, in claim order.
    pub fn evidence_gaps(&self, claim: &Claim) -> Result<Vec<EvidenceGap>, AnalysisError> {
        let mut gaps = Vec::new();
        for condition in &claim.conditions {
            let definition = self.catalog.require(&condition.condition_id)?;
            gaps.extend(rules::gaps_for(condition, definition));
        }
        Ok(gaps)
    }
}

fn completion_ratio(present: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        present as f64 / total as f64
    }
}

/// Per-condition scoring output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionAnalysis {
    pub condition_id: ConditionId,
    pub condition_name: String,
    pub diagnostic_code: String,
    /// Adjusted likelihood of a grant, 10–95.
    pub success_probability: u8,
    /// Checklist completeness score from [`EvidenceScorer::success_probability`].
    pub evidence_score: u8,
    pub evidence_complete: bool,
    pub missing_evidence: Vec<EvidenceId>,
    pub average_rating: DisabilityRating,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub critical_actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    NexusLetter,
    CurrentDiagnosis,
    ServiceDocumentation,
    TreatmentGap,
}

impl GapType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NexusLetter => "Nexus letter",
            Self::CurrentDiagnosis => "Current diagnosis",
            Self::ServiceDocumentation => "Service documentation",
            Self::TreatmentGap => "Treatment gap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    Critical,
    High,
    Moderate,
}

impl GapSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
        }
    }
}

/// A missing piece of the evidentiary record for one claimed condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceGap {
    pub condition_id: ConditionId,
    pub condition_name: String,
    pub gap_type: GapType,
    pub severity: GapSeverity,
    pub description: String,
    pub action: String,
}
