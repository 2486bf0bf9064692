use super::super::domain::Claim;
use super::super::rating::DisabilityRating;
use super::super::scoring::{EvidenceGap, GapSeverity};
use super::{
    EstimatedTimeline, Recommendation, RecommendationKind, RecommendationPriority,
    SecondarySuggestion,
};

const BASE_PROCESSING_DAYS: u32 = 120;
const MULTI_CONDITION_THRESHOLD: usize = 3;
const MULTI_CONDITION_DAYS: u32 = 30;
const MISSING_NEXUS_DAYS: u32 = 20;
const APPEAL_DAYS: u32 = 90;
const DAYS_PER_MONTH: f64 = 30.0;

const STRENGTHEN_THRESHOLD: u8 = 60;
const TDIU_THRESHOLD: u8 = 70;

pub(crate) fn recommendations(
    evidence_gaps: &[EvidenceGap],
    secondary_conditions: &[SecondarySuggestion],
    overall_success_probability: u8,
    combined_rating: DisabilityRating,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let critical_gaps: Vec<&EvidenceGap> = evidence_gaps
        .iter()
        .filter(|gap| gap.severity == GapSeverity::Critical)
        .collect();
    if !critical_gaps.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::EvidenceGaps,
            priority: RecommendationPriority::High,
            title: "Address critical evidence gaps".to_string(),
            description: format!(
                "{} critical evidence gap(s) could lead to a denial if filed as-is",
                critical_gaps.len()
            ),
            actions: critical_gaps
                .iter()
                .map(|gap| format!("{}: {}", gap.condition_name, gap.action))
                .collect(),
        });
    }

    if !secondary_conditions.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::SecondaryConditions,
            priority: RecommendationPriority::Medium,
            title: "Consider secondary conditions".to_string(),
            description: format!(
                "{} condition(s) are commonly service connected secondary to the claimed conditions",
                secondary_conditions.len()
            ),
            actions: secondary_conditions
                .iter()
                .map(|suggestion| {
                    format!(
                        "Evaluate {} ({}% likelihood)",
                        suggestion.condition_name, suggestion.probability
                    )
                })
                .collect(),
        });
    }

    if overall_success_probability < STRENGTHEN_THRESHOLD {
        recommendations.push(Recommendation {
            kind: RecommendationKind::StrengthenClaim,
            priority: RecommendationPriority::High,
            title: "Strengthen claim before filing".to_string(),
            description: format!(
                "Overall success probability of {overall_success_probability}% is below {STRENGTHEN_THRESHOLD}%"
            ),
            actions: vec![
                "Gather additional medical evidence".to_string(),
                "Obtain supporting buddy statements".to_string(),
                "Consider an independent medical examination".to_string(),
            ],
        });
    }

    if combined_rating.value() >= TDIU_THRESHOLD {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Tdiu,
            priority: RecommendationPriority::Medium,
            title: "Evaluate TDIU eligibility".to_string(),
            description: format!(
                "A potential combined rating of {combined_rating} may qualify for Total Disability based on Individual Unemployability"
            ),
            actions: vec![
                "Document employment history and work limitations".to_string(),
                "Complete VA Form 21-8940".to_string(),
            ],
        });
    }

    recommendations
}

pub(crate) fn estimate_timeline(claim: &Claim) -> EstimatedTimeline {
    let mut days = BASE_PROCESSING_DAYS;

    if claim.conditions.len() > MULTI_CONDITION_THRESHOLD {
        days += MULTI_CONDITION_DAYS;
    }

    let missing_nexus = claim
        .conditions
        .iter()
        .filter(|condition| !condition.has_nexus_letter)
        .count() as u32;
    days += MISSING_NEXUS_DAYS * missing_nexus;

    if claim.has_appeals {
        days += APPEAL_DAYS;
    }

    EstimatedTimeline {
        days,
        months: (f64::from(days) / DAYS_PER_MONTH).round() as u32,
    }
}
