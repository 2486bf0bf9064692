//! Disability claim analysis: reference catalog, combined-rating math, evidence
//! scoring, claim-level orchestration and report export.

pub mod analyzer;
pub mod catalog;
pub mod domain;
pub mod rating;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use analyzer::{
    AnalysisResult, ClaimAnalyzer, EstimatedTimeline, IndividualRating, PotentialRating,
    Recommendation, RecommendationKind, RecommendationPriority, SecondarySuggestion,
};
pub use catalog::{AnalysisError, CatalogDocument, CatalogError, ConditionCatalog};
pub use domain::{
    Claim, ClaimCondition, ConditionDefinition, ConditionId, EvidenceId, EvidenceImportance,
    EvidenceItem, SecondaryLink, VeteranInfo,
};
pub use rating::{combined_rating, DisabilityRating, RatingCalculator, RatingError};
pub use report::{AnalysisReport, ReportError, ReportFormat};
pub use router::{claims_router, ClaimsState};
pub use scoring::{ConditionAnalysis, EvidenceGap, EvidenceScorer, GapSeverity, GapType};
