use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rating::DisabilityRating;

/// Identifier wrapper for catalog conditions (e.g. `ptsd`, `tinnitus`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConditionId(pub String);

impl ConditionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for evidence checklist items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvidenceId(pub String);

impl EvidenceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceImportance {
    Critical,
    High,
    Moderate,
}

impl EvidenceImportance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
        }
    }
}

/// A piece of supporting documentation the VA looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: EvidenceId,
    pub name: String,
    pub importance: EvidenceImportance,
}

/// Static reference data for a claimable condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDefinition {
    pub id: ConditionId,
    pub name: String,
    pub category: String,
    pub diagnostic_code: String,
    pub required_evidence: Vec<EvidenceId>,
    /// Historical grant rate in `[0, 1]`.
    pub base_success_rate: f64,
    pub average_rating: DisabilityRating,
    pub processing_time_days: u32,
}

/// One row of the secondary-condition co-occurrence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryLink {
    pub condition: ConditionId,
    /// Likelihood of the secondary condition, as a whole percent.
    pub probability: u8,
    pub reason: String,
}

/// A condition as claimed by a specific veteran, with the claim-specific evidence flags.
///
/// Every field is required when deserialising; partially formed conditions are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCondition {
    pub condition_id: ConditionId,
    pub provided_evidence: BTreeSet<EvidenceId>,
    pub has_nexus_letter: bool,
    pub current_diagnosis: bool,
    /// Months without treatment.
    pub treatment_gap: u32,
    pub continuous_symptoms: bool,
    pub combat_related: bool,
    pub service_documentation: bool,
}

impl ClaimCondition {
    /// A bare claim for `condition_id` with no evidence and every flag unset.
    pub fn new(condition_id: impl Into<String>) -> Self {
        Self {
            condition_id: ConditionId::new(condition_id),
            provided_evidence: BTreeSet::new(),
            has_nexus_letter: false,
            current_diagnosis: false,
            treatment_gap: 0,
            continuous_symptoms: false,
            combat_related: false,
            service_documentation: false,
        }
    }

    pub fn with_evidence<I, S>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provided_evidence
            .extend(evidence.into_iter().map(EvidenceId::new));
        self
    }

    /// Whether every evidence item the definition requires has been provided.
    ///
    /// This is the only completeness rule in the crate; scoring and reporting both call it.
    pub fn evidence_complete(&self, definition: &ConditionDefinition) -> bool {
        definition
            .required_evidence
            .iter()
            .all(|id| self.provided_evidence.contains(id))
    }

    pub fn missing_evidence(&self, definition: &ConditionDefinition) -> Vec<EvidenceId> {
        definition
            .required_evidence
            .iter()
            .filter(|id| !self.provided_evidence.contains(*id))
            .cloned()
            .collect()
    }
}

/// Optional claimant details, used for report headers only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeteranInfo {
    pub name: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub separation_date: Option<NaiveDate>,
}

/// A claim under construction: the ordered conditions plus claim-level flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub veteran: Option<VeteranInfo>,
    pub conditions: Vec<ClaimCondition>,
    pub has_appeals: bool,
    pub recent_separation: bool,
}

impl Claim {
    pub fn new(conditions: Vec<ClaimCondition>) -> Self {
        Self {
            veteran: None,
            conditions,
            has_appeals: false,
            recent_separation: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
