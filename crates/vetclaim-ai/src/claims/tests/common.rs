use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::caselaw::CaseLawIndex;
use crate::claims::analyzer::ClaimAnalyzer;
use crate::claims::catalog::{
    CatalogDocument, ConditionCatalog, ConditionRecord, SecondaryEntry,
};
use crate::claims::domain::{
    ClaimCondition, ConditionId, EvidenceId, EvidenceImportance, EvidenceItem, SecondaryLink,
};
use crate::claims::router::ClaimsState;

fn evidence(id: &str, importance: EvidenceImportance) -> EvidenceItem {
    EvidenceItem {
        id: EvidenceId::new(id),
        name: id.replace('_', " "),
        importance,
    }
}

fn condition(
    id: &str,
    required: &[&str],
    base_success_rate: f64,
    average_rating: u8,
    processing_time_days: u32,
) -> ConditionRecord {
    ConditionRecord {
        id: ConditionId::new(id),
        name: format!("Condition {}", id.to_uppercase()),
        category: "Test".to_string(),
        diagnostic_code: "0000".to_string(),
        required_evidence: required.iter().copied().map(EvidenceId::new).collect(),
        base_success_rate,
        average_rating,
        processing_time_days,
    }
}

fn link(condition: &str, probability: u8) -> SecondaryLink {
    SecondaryLink {
        condition: ConditionId::new(condition),
        probability,
        reason: format!("{condition} commonly follows"),
    }
}

/// Small synthetic catalog: three conditions, four evidence items.
///
/// `alpha` requires two critical, one high and one moderate item. `alpha` and `beta`
/// both suggest `gamma`, with `beta` giving the higher probability.
pub(super) fn fixture_document() -> CatalogDocument {
    CatalogDocument {
        conditions: vec![
            condition(
                "alpha",
                &["diagnosis", "nexus", "records", "statement"],
                0.6,
                30,
                100,
            ),
            condition("beta", &["diagnosis", "records"], 0.5, 20, 121),
            condition("gamma", &[], 0.4, 10, 90),
        ],
        evidence: vec![
            evidence("diagnosis", EvidenceImportance::Critical),
            evidence("nexus", EvidenceImportance::Critical),
            evidence("records", EvidenceImportance::High),
            evidence("statement", EvidenceImportance::Moderate),
        ],
        secondary: vec![
            SecondaryEntry {
                primary: ConditionId::new("alpha"),
                links: vec![link("gamma", 50), link("beta", 30)],
            },
            SecondaryEntry {
                primary: ConditionId::new("beta"),
                links: vec![link("gamma", 70)],
            },
        ],
    }
}

pub(super) fn fixture_catalog() -> Arc<ConditionCatalog> {
    Arc::new(ConditionCatalog::from_document(fixture_document()).expect("fixture catalog is valid"))
}

pub(super) fn standard_catalog() -> Arc<ConditionCatalog> {
    Arc::new(ConditionCatalog::standard())
}

pub(super) fn fixture_analyzer() -> ClaimAnalyzer {
    ClaimAnalyzer::new(fixture_catalog())
}

pub(super) fn standard_analyzer() -> ClaimAnalyzer {
    ClaimAnalyzer::new(standard_catalog())
}

pub(super) fn claims_state() -> ClaimsState {
    ClaimsState::new(
        Arc::new(standard_analyzer()),
        Arc::new(CaseLawIndex::standard()),
    )
}

/// A condition with every flag set favourably and no evidence on file.
pub(super) fn supported(id: &str) -> ClaimCondition {
    let mut condition = ClaimCondition::new(id);
    condition.has_nexus_letter = true;
    condition.current_diagnosis = true;
    condition.continuous_symptoms = true;
    condition.service_documentation = true;
    condition
}

/// Fully documented PTSD claim: all required evidence, nexus letter, no treatment gap.
pub(super) fn documented_ptsd() -> ClaimCondition {
    let mut ptsd = supported("ptsd").with_evidence([
        "current_diagnosis",
        "stressor_statement",
        "nexus_opinion",
        "buddy_statements",
        "treatment_records",
    ]);
    ptsd.combat_related = true;
    ptsd
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
