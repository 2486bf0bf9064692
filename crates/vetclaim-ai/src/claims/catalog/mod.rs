//! Reference data the analyzer scores claims against.
//!
//! A catalog is built once, either from the built-in [`ConditionCatalog::standard`]
//! tables or from a JSON document, and shared read-only afterwards.

mod standard;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{
    ConditionDefinition, ConditionId, EvidenceId, EvidenceImportance, EvidenceItem, SecondaryLink,
};
use super::rating::DisabilityRating;

/// Raised when a claim cannot be analysed against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("claim references unknown condition '{condition_id}'")]
    UnknownCondition { condition_id: ConditionId },
}

/// Raised while loading or validating reference data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read condition catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid condition catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("condition '{condition_id}' is defined more than once")]
    DuplicateCondition { condition_id: ConditionId },
    #[error("evidence item '{evidence_id}' is defined more than once")]
    DuplicateEvidence { evidence_id: EvidenceId },
    #[error("condition '{condition_id}' has base success rate {value} outside [0, 1]")]
    InvalidBaseRate {
        condition_id: ConditionId,
        value: f64,
    },
    #[error("condition '{condition_id}' has invalid average rating {value}")]
    InvalidAverageRating {
        condition_id: ConditionId,
        value: u8,
    },
    #[error("condition '{condition_id}' requires unknown evidence '{evidence_id}'")]
    UnknownEvidence {
        condition_id: ConditionId,
        evidence_id: EvidenceId,
    },
    #[error("secondary links are listed for unknown condition '{condition_id}'")]
    UnknownSecondaryPrimary { condition_id: ConditionId },
    #[error("secondary link '{primary}' -> '{condition}' has probability {value} above 100")]
    InvalidLinkProbability {
        primary: ConditionId,
        condition: ConditionId,
        value: u8,
    },
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub conditions: Vec<ConditionRecord>,
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub secondary: Vec<SecondaryEntry>,
}

/// Unvalidated condition row; the average rating is checked on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub id: ConditionId,
    pub name: String,
    pub category: String,
    pub diagnostic_code: String,
    pub required_evidence: Vec<EvidenceId>,
    pub base_success_rate: f64,
    pub average_rating: u8,
    pub processing_time_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondaryEntry {
    pub primary: ConditionId,
    pub links: Vec<SecondaryLink>,
}

#[derive(Debug, Clone, Default)]
pub struct ConditionCatalog {
    conditions: BTreeMap<ConditionId, ConditionDefinition>,
    evidence: BTreeMap<EvidenceId, EvidenceItem>,
    secondary: BTreeMap<ConditionId, Vec<SecondaryLink>>,
}

impl ConditionCatalog {
    /// Built-in reference data covering the most frequently claimed conditions.
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for definition in standard::conditions() {
            catalog.conditions.insert(definition.id.clone(), definition);
        }
        for item in standard::evidence() {
            catalog.evidence.insert(item.id.clone(), item);
        }
        for (primary, links) in standard::secondary_links() {
            catalog.secondary.entry(primary).or_default().extend(links);
        }
        catalog
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for record in document.conditions {
            let average_rating = DisabilityRating::new(record.average_rating).map_err(|_| {
                CatalogError::InvalidAverageRating {
                    condition_id: record.id.clone(),
                    value: record.average_rating,
                }
            })?;

            match catalog.conditions.entry(record.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateCondition {
                        condition_id: record.id,
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(ConditionDefinition {
                        id: record.id,
                        name: record.name,
                        category: record.category,
                        diagnostic_code: record.diagnostic_code,
                        required_evidence: record.required_evidence,
                        base_success_rate: record.base_success_rate,
                        average_rating,
                        processing_time_days: record.processing_time_days,
                    });
                }
            }
        }

        for item in document.evidence {
            match catalog.evidence.entry(item.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateEvidence {
                        evidence_id: item.id,
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(item);
                }
            }
        }

        for entry in document.secondary {
            catalog
                .secondary
                .entry(entry.primary)
                .or_default()
                .extend(entry.links);
        }

        catalog.validate()?;

        info!(
            conditions = catalog.conditions.len(),
            evidence_items = catalog.evidence.len(),
            "loaded condition catalog"
        );

        Ok(catalog)
    }

    /// Check the cross-references a hand-edited catalog can get wrong.
    ///
    /// Link targets may name conditions outside the catalog; suggestions for them
    /// fall back to the raw id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for definition in self.conditions.values() {
            let rate = definition.base_success_rate;
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(CatalogError::InvalidBaseRate {
                    condition_id: definition.id.clone(),
                    value: rate,
                });
            }

            if let Some(missing) = definition
                .required_evidence
                .iter()
                .find(|id| self.evidence_item(id).is_none())
            {
                return Err(CatalogError::UnknownEvidence {
                    condition_id: definition.id.clone(),
                    evidence_id: missing.clone(),
                });
            }
        }

        for (primary, links) in &self.secondary {
            if !self.conditions.contains_key(primary) {
                return Err(CatalogError::UnknownSecondaryPrimary {
                    condition_id: primary.clone(),
                });
            }
            if let Some(link) = links.iter().find(|link| link.probability > 100) {
                return Err(CatalogError::InvalidLinkProbability {
                    primary: primary.clone(),
                    condition: link.condition.clone(),
                    value: link.probability,
                });
            }
        }

        Ok(())
    }

    pub fn condition(&self, id: &ConditionId) -> Option<&ConditionDefinition> {
        self.conditions.get(id)
    }

    /// Like [`Self::condition`], but an absent id is an error.
    pub fn require(&self, id: &ConditionId) -> Result<&ConditionDefinition, AnalysisError> {
        self.conditions
            .get(id)
            .ok_or_else(|| AnalysisError::UnknownCondition {
                condition_id: id.clone(),
            })
    }

    pub fn evidence_item(&self, id: &EvidenceId) -> Option<&EvidenceItem> {
        self.evidence.get(id)
    }

    /// Catalog entries for a condition's required evidence, in checklist order.
    pub fn required_evidence<'a>(
        &'a self,
        definition: &'a ConditionDefinition,
    ) -> impl Iterator<Item = &'a EvidenceItem> + 'a {
        definition
            .required_evidence
            .iter()
            .filter_map(|id| self.evidence_item(id))
    }

    pub fn importance_of(&self, id: &EvidenceId) -> Option<EvidenceImportance> {
        self.evidence.get(id).map(|item| item.importance)
    }

    pub fn secondary_links(&self, primary: &ConditionId) -> &[SecondaryLink] {
        self.secondary
            .get(primary)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Display name for a condition, falling back to the raw id.
    pub fn display_name(&self, id: &ConditionId) -> String {
        self.conditions
            .get(id)
            .map(|definition| definition.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn conditions(&self) -> impl Iterator<Item = &ConditionDefinition> {
        self.conditions.values()
    }

    pub fn evidence(&self) -> impl Iterator<Item = &EvidenceItem> {
        self.evidence.values()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn by_category(&self, category: &str) -> Vec<&ConditionDefinition> {
        self.conditions
            .values()
            .filter(|definition| definition.category.eq_ignore_ascii_case(category.trim()))
            .collect()
    }

    /// Case-insensitive match on id, name, category or diagnostic code.
    /// A blank query returns every condition.
    pub fn search(&self, query: &str) -> Vec<&ConditionDefinition> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.conditions.values().collect();
        }

        self.conditions
            .values()
            .filter(|definition| {
                definition.id.as_str().to_lowercase().contains(&needle)
                    || definition.name.to_lowercase().contains(&needle)
                    || definition.category.to_lowercase().contains(&needle)
                    || definition.diagnostic_code.contains(&needle)
            })
            .collect()
    }
}
