use super::super::domain::{ClaimCondition, ConditionDefinition};
use super::{EvidenceGap, GapSeverity, GapType};

const NEXUS_LETTER_BONUS: f64 = 0.25;
const COMPLETE_EVIDENCE_BONUS: f64 = 0.35;
const CONTINUOUS_SYMPTOMS_BONUS: f64 = 0.15;
const TREATMENT_GAP_PENALTY: f64 = 0.15;
// Applied on top of the forfeited nexus bonus; the model counts a missing nexus twice.
const MISSING_NEXUS_PENALTY: f64 = 0.30;

const TREATMENT_GAP_THRESHOLD_MONTHS: u32 = 12;

const PROBABILITY_FLOOR: f64 = 0.10;
const PROBABILITY_CEILING: f64 = 0.95;

const CRITICAL_EVIDENCE_WEIGHT: f64 = 0.6;
const TOTAL_EVIDENCE_WEIGHT: f64 = 0.4;

fn has_treatment_gap(condition: &ClaimCondition) -> bool {
    condition.treatment_gap > TREATMENT_GAP_THRESHOLD_MONTHS
}

/// Checklist score: base rate scaled by how much of the (critical) evidence is present.
pub(crate) fn checklist_probability(
    base_success_rate: f64,
    critical_complete: f64,
    total_complete: f64,
) -> f64 {
    base_success_rate
        * (CRITICAL_EVIDENCE_WEIGHT * critical_complete + TOTAL_EVIDENCE_WEIGHT * total_complete)
}

/// Additive adjustment model, clamped to `[PROBABILITY_FLOOR, PROBABILITY_CEILING]`.
pub(crate) fn adjusted_probability(
    condition: &ClaimCondition,
    definition: &ConditionDefinition,
    evidence_complete: bool,
) -> f64 {
    let mut probability = definition.base_success_rate;

    if condition.has_nexus_letter {
        probability += NEXUS_LETTER_BONUS;
    }
    if evidence_complete {
        probability += COMPLETE_EVIDENCE_BONUS;
    }
    if condition.continuous_symptoms {
        probability += CONTINUOUS_SYMPTOMS_BONUS;
    }
    if has_treatment_gap(condition) {
        probability -= TREATMENT_GAP_PENALTY;
    }
    if !condition.has_nexus_letter {
        probability -= MISSING_NEXUS_PENALTY;
    }

    probability.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

pub(crate) fn to_percent(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}

pub(crate) fn strengths(condition: &ClaimCondition) -> Vec<String> {
    let mut strengths = Vec::new();
    if condition.combat_related {
        strengths.push("Combat service supports presumptive service connection".to_string());
    }
    if condition.continuous_symptoms {
        strengths.push("Continuous treatment and symptoms documented since service".to_string());
    }
    if condition.service_documentation {
        strengths.push("Strong service documentation of the in-service event".to_string());
    }
    if condition.has_nexus_letter {
        strengths.push("Medical nexus letter connects the condition to service".to_string());
    }
    strengths
}

pub(crate) fn weaknesses(condition: &ClaimCondition) -> Vec<String> {
    let mut weaknesses = Vec::new();
    if !condition.has_nexus_letter {
        weaknesses.push("Missing medical nexus opinion".to_string());
    }
    if has_treatment_gap(condition) {
        weaknesses.push(format!("{} month gap in treatment", condition.treatment_gap));
    }
    if !condition.current_diagnosis {
        weaknesses.push("No current diagnosis on record".to_string());
    }
    if !condition.service_documentation {
        weaknesses.push("Limited service documentation".to_string());
    }
    weaknesses
}

pub(crate) fn critical_actions(condition: &ClaimCondition) -> Vec<String> {
    let mut actions = Vec::new();
    if !condition.has_nexus_letter {
        actions.push("Obtain a nexus letter from a qualified medical provider".to_string());
    }
    if !condition.current_diagnosis {
        actions.push("Get a current diagnosis from a treating provider".to_string());
    }
    if has_treatment_gap(condition) {
        actions.push("Document the reason for the gap in treatment".to_string());
    }
    actions
}

pub(crate) fn gaps_for(
    condition: &ClaimCondition,
    definition: &ConditionDefinition,
) -> Vec<EvidenceGap> {
    let gap = |gap_type, severity, description: String, action: &str| EvidenceGap {
        condition_id: definition.id.clone(),
        condition_name: definition.name.clone(),
        gap_type,
        severity,
        description,
        action: action.to_string(),
    };

    let mut gaps = Vec::new();
    if !condition.has_nexus_letter {
        gaps.push(gap(
            GapType::NexusLetter,
            GapSeverity::Critical,
            format!(
                "No medical nexus opinion linking {} to service",
                definition.name
            ),
            "Obtain an independent medical opinion (nexus letter)",
        ));
    }
    if !condition.current_diagnosis {
        gaps.push(gap(
            GapType::CurrentDiagnosis,
            GapSeverity::Critical,
            format!("No current diagnosis of {}", definition.name),
            "Schedule an evaluation to establish a current diagnosis",
        ));
    }
    if !condition.service_documentation {
        gaps.push(gap(
            GapType::ServiceDocumentation,
            GapSeverity::High,
            format!("Limited service documentation for {}", definition.name),
            "Request service treatment records and gather buddy statements",
        ));
    }
    if has_treatment_gap(condition) {
        gaps.push(gap(
            GapType::TreatmentGap,
            GapSeverity::Moderate,
            format!(
                "{} month gap in treatment for {}",
                condition.treatment_gap, definition.name
            ),
            "Provide a statement explaining the gap in treatment",
        ));
    }
    gaps
}
