//! Claim-level orchestration of the scorer and the rating calculator.

mod policy;
mod secondary;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{AnalysisError, ConditionCatalog};
use super::domain::{Claim, ClaimCondition, ConditionDefinition, ConditionId};
use super::rating::{DisabilityRating, RatingCalculator};
use super::scoring::{ConditionAnalysis, EvidenceGap, EvidenceScorer, GapSeverity};

/// Produces an [`AnalysisResult`] for a claim. Pure and synchronous.
#[derive(Debug, Clone)]
pub struct ClaimAnalyzer {
    catalog: Arc<ConditionCatalog>,
    scorer: EvidenceScorer,
    ratings: RatingCalculator,
}

impl ClaimAnalyzer {
    pub fn new(catalog: Arc<ConditionCatalog>) -> Self {
        Self {
            scorer: EvidenceScorer::new(catalog.clone()),
            ratings: RatingCalculator::new(catalog.clone()),
            catalog,
        }
    }

    pub fn catalog(&self) -> &ConditionCatalog {
        &self.catalog
    }

    pub fn scorer(&self) -> &EvidenceScorer {
        &self.scorer
    }

    pub fn ratings(&self) -> &RatingCalculator {
        &self.ratings
    }

    /// Analyse every condition in `claim`.
    ///
    /// Fails only when a condition id is missing from the catalog. An empty claim
    /// yields [`AnalysisResult::empty`] with the base processing timeline.
    pub fn analyze(&self, claim: &Claim) -> Result<AnalysisResult, AnalysisError> {
        if claim.is_empty() {
            debug!("empty claim submitted for analysis");
            return Ok(AnalysisResult {
                estimated_timeline: policy::estimate_timeline(claim),
                ..AnalysisResult::empty()
            });
        }

        let resolved = claim
            .conditions
            .iter()
            .map(|condition| {
                self.catalog
                    .require(&condition.condition_id)
                    .map(|definition| (condition, definition))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let condition_analysis: Vec<ConditionAnalysis> = resolved
            .iter()
            .map(|(condition, definition)| {
                self.scorer.condition_level_analysis(condition, definition)
            })
            .collect();

        let overall_success_probability = mean_percent(
            condition_analysis
                .iter()
                .map(|analysis| analysis.success_probability),
        );

        let evidence_gaps = self.scorer.evidence_gaps(claim)?;
        let secondary_conditions = secondary::suggest(&self.catalog, &claim.conditions);
        let potential_rating = self.potential_rating(&resolved);
        let recommendations = policy::recommendations(
            &evidence_gaps,
            &secondary_conditions,
            overall_success_probability,
            potential_rating.combined,
        );
        let estimated_timeline = policy::estimate_timeline(claim);

        debug!(
            conditions = claim.conditions.len(),
            overall_success_probability,
            combined_rating = potential_rating.combined.value(),
            gaps = evidence_gaps.len(),
            secondary = secondary_conditions.len(),
            timeline_days = estimated_timeline.days,
            "claim analysed"
        );

        Ok(AnalysisResult {
            overall_success_probability,
            condition_analysis,
            evidence_gaps,
            secondary_conditions,
            recommendations,
            estimated_timeline,
            potential_rating,
        })
    }

    fn potential_rating(
        &self,
        resolved: &[(&ClaimCondition, &ConditionDefinition)],
    ) -> PotentialRating {
        let individual: Vec<IndividualRating> = resolved
            .iter()
            .map(|(_, definition)| IndividualRating {
                condition_id: definition.id.clone(),
                rating: definition.average_rating,
            })
            .collect();

        let ratings: Vec<DisabilityRating> = individual.iter().map(|entry| entry.rating).collect();

        PotentialRating {
            combined: self.ratings.combined_rating(&ratings),
            individual,
        }
    }
}

fn mean_percent(values: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = values.fold((0u32, 0u32), |(sum, count), value| {
        (sum + u32::from(value), count + 1)
    });
    if count == 0 {
        0
    } else {
        (f64::from(sum) / f64::from(count)).round() as u8
    }
}

/// A condition commonly connected to one already claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondarySuggestion {
    pub condition_id: ConditionId,
    pub condition_name: String,
    pub probability: u8,
    pub reason: String,
    pub primary_condition: ConditionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    High,
    Medium,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    EvidenceGaps,
    SecondaryConditions,
    StrengthenClaim,
    Tdiu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedTimeline {
    pub days: u32,
    pub months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRating {
    pub condition_id: ConditionId,
    pub rating: DisabilityRating,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialRating {
    pub individual: Vec<IndividualRating>,
    pub combined: DisabilityRating,
}

/// Everything the analyzer knows about a claim. Plain data, safe to serialise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_success_probability: u8,
    pub condition_analysis: Vec<ConditionAnalysis>,
    pub evidence_gaps: Vec<EvidenceGap>,
    pub secondary_conditions: Vec<SecondarySuggestion>,
    pub recommendations: Vec<Recommendation>,
    pub estimated_timeline: EstimatedTimeline,
    pub potential_rating: PotentialRating,
}

impl AnalysisResult {
    /// Zero probability and rating, empty lists and a zero timeline.
    ///
    /// [`ClaimAnalyzer::analyze`] fills in the timeline for an empty claim, since the
    /// base processing time applies whether or not conditions are listed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn critical_gap_count(&self) -> usize {
        self.evidence_gaps
            .iter()
            .filter(|gap| gap.severity == GapSeverity::Critical)
            .count()
    }
}
