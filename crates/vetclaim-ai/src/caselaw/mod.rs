//! Keyword index over precedential veterans-law decisions.
//!
//! The index is built once from the bundled decisions and shared read-only, like the
//! condition catalog.

mod decisions;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::claims::domain::ConditionId;

pub const DEFAULT_LIMIT: usize = 10;

const MIN_TERM_LEN: usize = 3;
const STOP_WORDS: &[&str] = &[
    "and", "any", "are", "but", "can", "for", "from", "has", "its", "may", "not", "only", "that",
    "the", "under", "was", "when", "which", "with", "without",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Court {
    /// U.S. Court of Appeals for Veterans Claims.
    Cavc,
    FederalCircuit,
    /// Board of Veterans' Appeals.
    Bva,
}

impl Court {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cavc => "Court of Appeals for Veterans Claims",
            Self::FederalCircuit => "Federal Circuit",
            Self::Bva => "Board of Veterans' Appeals",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    pub citation: String,
    pub title: String,
    pub court: Court,
    pub year: u16,
    pub topics: Vec<String>,
    /// Conditions the decision is most often cited for.
    pub conditions: Vec<ConditionId>,
    pub holding: String,
}

/// Search parameters; field names match the HTTP query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaseLawQuery {
    #[serde(default, rename = "q")]
    pub text: String,
    /// Condition id; only cases cited for it are returned.
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl CaseLawQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn for_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseMatch<'a> {
    pub case: &'a CaseRecord,
    /// Number of distinct query terms found in the case.
    pub score: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CaseLawIndex {
    cases: Vec<CaseRecord>,
    terms: BTreeMap<String, BTreeSet<usize>>,
}

impl CaseLawIndex {
    /// Index over the bundled precedential decisions.
    pub fn standard() -> Self {
        Self::new(decisions::records())
    }

    pub fn new(cases: Vec<CaseRecord>) -> Self {
        let mut terms: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for (position, case) in cases.iter().enumerate() {
            let searchable = case
                .topics
                .iter()
                .map(String::as_str)
                .chain([case.title.as_str(), case.holding.as_str()]);
            for text in searchable {
                for term in tokenize(text) {
                    terms.entry(term).or_default().insert(position);
                }
            }
        }

        debug!(
            cases = cases.len(),
            terms = terms.len(),
            "case law index built"
        );
        Self { cases, terms }
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CaseRecord> {
        self.cases.iter().find(|case| case.id == id)
    }

    /// Rank cases by distinct matching terms, newest first on ties.
    ///
    /// A query with no usable terms returns nothing unless a condition filter is set,
    /// in which case every case cited for that condition is returned with score 0.
    pub fn search(&self, query: &CaseLawQuery) -> Vec<CaseMatch<'_>> {
        let query_terms: BTreeSet<String> = tokenize(&query.text).into_iter().collect();
        let matches_condition = |case: &CaseRecord| match &query.condition {
            Some(condition) => case
                .conditions
                .iter()
                .any(|id| id.as_str() == condition.as_str()),
            None => true,
        };

        let mut matches: Vec<CaseMatch<'_>> = if query_terms.is_empty() {
            if query.condition.is_none() {
                return Vec::new();
            }
            self.cases
                .iter()
                .filter(|case| matches_condition(case))
                .map(|case| CaseMatch { case, score: 0 })
                .collect()
        } else {
            let mut scores: BTreeMap<usize, usize> = BTreeMap::new();
            for term in &query_terms {
                if let Some(positions) = self.terms.get(term) {
                    for position in positions {
                        *scores.entry(*position).or_default() += 1;
                    }
                }
            }
            scores
                .into_iter()
                .map(|(position, score)| CaseMatch {
                    case: &self.cases[position],
                    score,
                })
                .filter(|found| matches_condition(found.case))
                .collect()
        };

        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.case.year.cmp(&a.case.year))
                .then_with(|| a.case.title.cmp(&b.case.title))
        });
        matches.truncate(query.limit.unwrap_or(DEFAULT_LIMIT));
        matches
    }
}

/// Lower-cased alphanumeric words of at least three characters, minus stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_TERM_LEN)
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}
