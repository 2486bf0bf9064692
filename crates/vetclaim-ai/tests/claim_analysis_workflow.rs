use std::io::Cursor;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use vetclaim_ai::claims::{
    AnalysisError, AnalysisReport, CatalogError, Claim, ClaimAnalyzer, ClaimCondition,
    ConditionCatalog, ConditionId, RatingError, ReportFormat, VeteranInfo,
};
use vetclaim_ai::error::AppError;

const CUSTOM_CATALOG: &str = r#"{
    "conditions": [
        {
            "id": "plantar_fasciitis",
            "name": "Plantar Fasciitis",
            "category": "Musculoskeletal",
            "diagnostic_code": "5276",
            "required_evidence": ["current_diagnosis", "podiatry_records"],
            "base_success_rate": 0.5,
            "average_rating": 10,
            "processing_time_days": 100
        },
        {
            "id": "knee_condition",
            "name": "Knee Condition",
            "category": "Musculoskeletal",
            "diagnostic_code": "5260",
            "required_evidence": ["current_diagnosis"],
            "base_success_rate": 0.6,
            "average_rating": 10,
            "processing_time_days": 110
        }
    ],
    "evidence": [
        { "id": "current_diagnosis", "name": "Current diagnosis", "importance": "critical" },
        { "id": "podiatry_records", "name": "Podiatry records", "importance": "high" }
    ],
    "secondary": [
        {
            "primary": "plantar_fasciitis",
            "links": [
                { "condition": "knee_condition", "probability": 40, "reason": "Altered gait" }
            ]
        }
    ]
}"#;

fn supported(id: &str) -> ClaimCondition {
    let mut condition = ClaimCondition::new(id);
    condition.has_nexus_letter = true;
    condition.current_diagnosis = true;
    condition.service_documentation = true;
    condition
}

fn back_and_ears_claim() -> Claim {
    let mut claim = Claim::new(vec![
        supported("lumbar_strain").with_evidence([
            "current_diagnosis",
            "service_treatment_records",
            "range_of_motion_exam",
            "nexus_opinion",
        ]),
        supported("radiculopathy"),
        supported("tinnitus"),
    ]);
    claim.veteran = Some(VeteranInfo {
        name: "Sam Okafor".to_string(),
        branch: Some("Marine Corps".to_string()),
        separation_date: NaiveDate::from_ymd_opt(2021, 11, 1),
    });
    claim.recent_separation = true;
    claim
}

#[test]
fn multi_condition_claim_produces_consistent_analysis() {
    let analyzer = ClaimAnalyzer::new(Arc::new(ConditionCatalog::standard()));
    let claim = back_and_ears_claim();

    let result = analyzer.analyze(&claim).expect("standard conditions");

    assert_eq!(result.condition_analysis.len(), 3);
    // 20 + 16 + 6.4 = 42.4
    assert_eq!(result.potential_rating.combined.value(), 40);
    assert_eq!(result.estimated_timeline.days, 120);
    assert!(result.evidence_gaps.is_empty());

    let secondary: Vec<(&str, u8, &str)> = result
        .secondary_conditions
        .iter()
        .map(|suggestion| {
            (
                suggestion.condition_id.as_str(),
                suggestion.probability,
                suggestion.primary_condition.as_str(),
            )
        })
        .collect();
    assert_eq!(
        secondary,
        vec![
            ("radiculopathy", 70, "lumbar_strain"),
            ("knee_condition", 35, "lumbar_strain"),
            ("depression", 30, "lumbar_strain"),
            ("migraines", 30, "tinnitus"),
        ]
    );

    for analysis in &result.condition_analysis {
        assert!((10..=95).contains(&analysis.success_probability));
    }
}

#[test]
fn report_exports_agree_with_analysis() {
    let analyzer = ClaimAnalyzer::new(Arc::new(ConditionCatalog::standard()));
    let claim = back_and_ears_claim();
    let result = analyzer.analyze(&claim).expect("standard conditions");
    let generated_on = NaiveDate::from_ymd_opt(2025, 5, 2).expect("valid date");
    let report = AnalysisReport::new(&claim, &result, generated_on);

    let csv = report.render(ReportFormat::Csv).expect("csv renders");
    assert_eq!(csv.lines().count(), 1 + result.condition_analysis.len());

    let text = report.render(ReportFormat::Text).expect("text renders");
    assert!(text.contains("Veteran: Sam Okafor (Marine Corps)"));
    assert!(text.contains("Potential combined rating: 40%"));
    assert!(text.contains("Possible secondary conditions"));

    let json = report.render(ReportFormat::Json).expect("json renders");
    let payload: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(payload["potential_rating"]["combined"], 40);
}

#[test]
fn custom_catalog_drives_analysis() {
    let catalog = ConditionCatalog::from_reader(Cursor::new(CUSTOM_CATALOG))
        .expect("custom catalog loads");
    assert_eq!(catalog.len(), 2);

    let analyzer = ClaimAnalyzer::new(Arc::new(catalog));
    let claim =
        Claim::new(vec![supported("plantar_fasciitis").with_evidence(["current_diagnosis"])]);

    let result = analyzer.analyze(&claim).expect("custom condition is known");
    let analysis = &result.condition_analysis[0];
    // 0.5 * (0.6 * 1.0 + 0.4 * 0.5)
    assert_eq!(analysis.evidence_score, 40);
    // 0.5 + 0.25 (nexus letter)
    assert_eq!(analysis.success_probability, 75);
    assert_eq!(
        analysis.missing_evidence,
        vec![vetclaim_ai::claims::EvidenceId::new("podiatry_records")]
    );
    assert_eq!(result.secondary_conditions[0].condition_name, "Knee Condition");

    // ptsd only exists in the standard catalog
    let ptsd = Claim::new(vec![ClaimCondition::new("ptsd")]);
    assert_eq!(
        analyzer.analyze(&ptsd),
        Err(AnalysisError::UnknownCondition {
            condition_id: ConditionId::new("ptsd"),
        })
    );
}

#[test]
fn catalog_with_dangling_evidence_is_rejected() {
    let broken = CUSTOM_CATALOG.replace(
        r#"{ "id": "podiatry_records", "name": "Podiatry records", "importance": "high" }"#,
        r#"{ "id": "gait_analysis", "name": "Gait analysis", "importance": "high" }"#,
    );

    match ConditionCatalog::from_reader(Cursor::new(broken)) {
        Err(CatalogError::UnknownEvidence { evidence_id, .. }) => {
            assert_eq!(evidence_id.as_str(), "podiatry_records")
        }
        other => panic!("expected unknown evidence error, got {other:?}"),
    }
}

#[test]
fn app_errors_map_to_http_statuses() {
    let unknown: AppError = AnalysisError::UnknownCondition {
        condition_id: ConditionId::new("frostbite"),
    }
    .into();
    assert_eq!(
        unknown.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let invalid: AppError = RatingError::InvalidRating { value: 45 }.into();
    assert_eq!(
        invalid.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert_eq!(
        io.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
