use super::super::domain::{
    ConditionDefinition, ConditionId, EvidenceId, EvidenceImportance, EvidenceItem, SecondaryLink,
};
use super::super::rating::DisabilityRating;

struct ConditionSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    diagnostic_code: &'static str,
    required_evidence: &'static [&'static str],
    base_success_rate: f64,
    average_rating: DisabilityRating,
    processing_time_days: u32,
}

const CONDITIONS: &[ConditionSeed] = &[
    ConditionSeed {
        id: "ptsd",
        name: "Post-Traumatic Stress Disorder (PTSD)",
        category: "Mental Health",
        diagnostic_code: "9411",
        required_evidence: &[
            "current_diagnosis",
            "stressor_statement",
            "nexus_opinion",
            "buddy_statements",
            "treatment_records",
        ],
        base_success_rate: 0.71,
        average_rating: DisabilityRating::seeded(50),
        processing_time_days: 125,
    },
    ConditionSeed {
        id: "depression",
        name: "Major Depressive Disorder",
        category: "Mental Health",
        diagnostic_code: "9434",
        required_evidence: &[
            "current_diagnosis",
            "nexus_opinion",
            "treatment_records",
            "personal_statement",
        ],
        base_success_rate: 0.64,
        average_rating: DisabilityRating::seeded(50),
        processing_time_days: 130,
    },
    ConditionSeed {
        id: "tinnitus",
        name: "Tinnitus",
        category: "Hearing",
        diagnostic_code: "6260",
        required_evidence: &[
            "current_diagnosis",
            "noise_exposure_evidence",
            "personal_statement",
        ],
        base_success_rate: 0.89,
        average_rating: DisabilityRating::seeded(10),
        processing_time_days: 90,
    },
    ConditionSeed {
        id: "hearing_loss",
        name: "Bilateral Hearing Loss",
        category: "Hearing",
        diagnostic_code: "6100",
        required_evidence: &[
            "audiogram",
            "noise_exposure_evidence",
            "nexus_opinion",
            "service_treatment_records",
        ],
        base_success_rate: 0.58,
        average_rating: DisabilityRating::seeded(10),
        processing_time_days: 110,
    },
    ConditionSeed {
        id: "lumbar_strain",
        name: "Lumbosacral Strain",
        category: "Musculoskeletal",
        diagnostic_code: "5237",
        required_evidence: &[
            "current_diagnosis",
            "service_treatment_records",
            "range_of_motion_exam",
            "nexus_opinion",
            "treatment_records",
        ],
        base_success_rate: 0.62,
        average_rating: DisabilityRating::seeded(20),
        processing_time_days: 120,
    },
    ConditionSeed {
        id: "knee_condition",
        name: "Knee Limitation of Flexion",
        category: "Musculoskeletal",
        diagnostic_code: "5260",
        required_evidence: &[
            "current_diagnosis",
            "service_treatment_records",
            "range_of_motion_exam",
            "nexus_opinion",
        ],
        base_success_rate: 0.59,
        average_rating: DisabilityRating::seeded(10),
        processing_time_days: 115,
    },
    ConditionSeed {
        id: "radiculopathy",
        name: "Lower Extremity Radiculopathy",
        category: "Neurological",
        diagnostic_code: "8520",
        required_evidence: &[
            "current_diagnosis",
            "emg_study",
            "nexus_opinion",
            "treatment_records",
        ],
        base_success_rate: 0.55,
        average_rating: DisabilityRating::seeded(20),
        processing_time_days: 125,
    },
    ConditionSeed {
        id: "migraines",
        name: "Migraine Headaches",
        category: "Neurological",
        diagnostic_code: "8100",
        required_evidence: &[
            "current_diagnosis",
            "headache_log",
            "nexus_opinion",
            "medication_records",
        ],
        base_success_rate: 0.57,
        average_rating: DisabilityRating::seeded(30),
        processing_time_days: 120,
    },
    ConditionSeed {
        id: "sleep_apnea",
        name: "Obstructive Sleep Apnea",
        category: "Respiratory",
        diagnostic_code: "6847",
        required_evidence: &[
            "sleep_study",
            "current_diagnosis",
            "nexus_opinion",
            "buddy_statements",
        ],
        base_success_rate: 0.42,
        average_rating: DisabilityRating::seeded(50),
        processing_time_days: 150,
    },
    ConditionSeed {
        id: "hypertension",
        name: "Hypertension",
        category: "Cardiovascular",
        diagnostic_code: "7101",
        required_evidence: &[
            "blood_pressure_readings",
            "current_diagnosis",
            "nexus_opinion",
            "medication_records",
        ],
        base_success_rate: 0.38,
        average_rating: DisabilityRating::seeded(10),
        processing_time_days: 140,
    },
    ConditionSeed {
        id: "gerd",
        name: "Gastroesophageal Reflux Disease (GERD)",
        category: "Digestive",
        diagnostic_code: "7206",
        required_evidence: &[
            "current_diagnosis",
            "nexus_opinion",
            "medication_records",
            "treatment_records",
        ],
        base_success_rate: 0.45,
        average_rating: DisabilityRating::seeded(10),
        processing_time_days: 130,
    },
    ConditionSeed {
        id: "erectile_dysfunction",
        name: "Erectile Dysfunction",
        category: "Genitourinary",
        diagnostic_code: "7522",
        required_evidence: &["current_diagnosis", "nexus_opinion", "medication_records"],
        base_success_rate: 0.52,
        average_rating: DisabilityRating::seeded(0),
        processing_time_days: 120,
    },
];

const EVIDENCE: &[(&str, &str, EvidenceImportance)] = &[
    (
        "current_diagnosis",
        "Current medical diagnosis",
        EvidenceImportance::Critical,
    ),
    (
        "nexus_opinion",
        "Medical nexus opinion",
        EvidenceImportance::Critical,
    ),
    (
        "stressor_statement",
        "Stressor statement (VA Form 21-0781)",
        EvidenceImportance::Critical,
    ),
    (
        "audiogram",
        "Audiological examination with Maryland CNC",
        EvidenceImportance::Critical,
    ),
    (
        "sleep_study",
        "Sleep study (polysomnography)",
        EvidenceImportance::Critical,
    ),
    (
        "service_treatment_records",
        "Service treatment records",
        EvidenceImportance::High,
    ),
    (
        "treatment_records",
        "Post-service treatment records",
        EvidenceImportance::High,
    ),
    (
        "noise_exposure_evidence",
        "Evidence of in-service noise exposure",
        EvidenceImportance::High,
    ),
    (
        "range_of_motion_exam",
        "Range of motion examination",
        EvidenceImportance::High,
    ),
    (
        "emg_study",
        "EMG / nerve conduction study",
        EvidenceImportance::High,
    ),
    (
        "blood_pressure_readings",
        "Blood pressure readings",
        EvidenceImportance::High,
    ),
    (
        "buddy_statements",
        "Buddy statements (VA Form 21-10210)",
        EvidenceImportance::Moderate,
    ),
    (
        "personal_statement",
        "Personal statement (VA Form 21-4138)",
        EvidenceImportance::Moderate,
    ),
    ("headache_log", "Headache log", EvidenceImportance::Moderate),
    (
        "medication_records",
        "Medication records",
        EvidenceImportance::Moderate,
    ),
];

// (primary, secondary, probability %, reason)
const SECONDARY: &[(&str, &str, u8, &str)] = &[
    (
        "ptsd",
        "sleep_apnea",
        65,
        "PTSD-related sleep disturbance is frequently linked to obstructive sleep apnea",
    ),
    (
        "ptsd",
        "hypertension",
        45,
        "Chronic stress response is associated with elevated blood pressure",
    ),
    (
        "ptsd",
        "gerd",
        40,
        "Psychiatric medication and chronic stress commonly aggravate reflux",
    ),
    (
        "ptsd",
        "erectile_dysfunction",
        35,
        "Frequently reported side effect of SSRIs prescribed for PTSD",
    ),
    (
        "ptsd",
        "migraines",
        30,
        "Hyperarousal and tension are linked to recurrent headaches",
    ),
    (
        "depression",
        "sleep_apnea",
        45,
        "Depressive disorders commonly co-occur with disordered sleep",
    ),
    (
        "depression",
        "erectile_dysfunction",
        35,
        "Antidepressant side effects frequently include erectile dysfunction",
    ),
    (
        "depression",
        "gerd",
        30,
        "Psychiatric medication commonly aggravates reflux",
    ),
    (
        "lumbar_strain",
        "radiculopathy",
        70,
        "Nerve root compression from the lumbar spine disability",
    ),
    (
        "lumbar_strain",
        "knee_condition",
        35,
        "Altered gait from back pain places strain on the knees",
    ),
    (
        "lumbar_strain",
        "depression",
        30,
        "Chronic pain frequently leads to depressive symptoms",
    ),
    (
        "knee_condition",
        "lumbar_strain",
        40,
        "Altered gait places added strain on the lower back",
    ),
    (
        "tinnitus",
        "migraines",
        30,
        "Persistent tinnitus is associated with headache onset",
    ),
    (
        "tinnitus",
        "depression",
        25,
        "Chronic tinnitus is linked to anxiety and depressive disorders",
    ),
    (
        "hearing_loss",
        "tinnitus",
        60,
        "Hearing loss and tinnitus share a noise-exposure etiology",
    ),
    (
        "sleep_apnea",
        "hypertension",
        50,
        "Untreated sleep apnea elevates blood pressure",
    ),
    (
        "hypertension",
        "erectile_dysfunction",
        40,
        "Hypertension and its medications contribute to erectile dysfunction",
    ),
    (
        "migraines",
        "depression",
        25,
        "Frequent prostrating attacks are linked to depressive symptoms",
    ),
];

pub(super) fn conditions() -> Vec<ConditionDefinition> {
    CONDITIONS
        .iter()
        .map(|seed| ConditionDefinition {
            id: ConditionId::new(seed.id),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            diagnostic_code: seed.diagnostic_code.to_string(),
            required_evidence: seed
                .required_evidence
                .iter()
                .map(|id| EvidenceId::new(*id))
                .collect(),
            base_success_rate: seed.base_success_rate,
            average_rating: seed.average_rating,
            processing_time_days: seed.processing_time_days,
        })
        .collect()
}

pub(super) fn evidence() -> Vec<EvidenceItem> {
    EVIDENCE
        .iter()
        .map(|(id, name, importance)| EvidenceItem {
            id: EvidenceId::new(*id),
            name: name.to_string(),
            importance: *importance,
        })
        .collect()
}

pub(super) fn secondary_links() -> Vec<(ConditionId, Vec<SecondaryLink>)> {
    SECONDARY
        .iter()
        .map(|(primary, secondary, probability, reason)| {
            (
                ConditionId::new(*primary),
                vec![SecondaryLink {
                    condition: ConditionId::new(*secondary),
                    probability: *probability,
                    reason: reason.to_string(),
                }],
            )
        })
        .collect()
}
