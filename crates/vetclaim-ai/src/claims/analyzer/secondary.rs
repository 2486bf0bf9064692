use std::collections::HashSet;

use super::super::catalog::ConditionCatalog;
use super::super::domain::ClaimCondition;
use super::SecondarySuggestion;

/// Walk the co-occurrence table for each claimed condition in order.
///
/// A secondary condition is reported once: the first primary that suggests it wins,
/// even if a later primary suggests it with a higher probability.
pub(crate) fn suggest(
    catalog: &ConditionCatalog,
    conditions: &[ClaimCondition],
) -> Vec<SecondarySuggestion> {
    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for primary in conditions {
        for link in catalog.secondary_links(&primary.condition_id) {
            if !seen.insert(link.condition.clone()) {
                continue;
            }

            suggestions.push(SecondarySuggestion {
                condition_id: link.condition.clone(),
                condition_name: catalog.display_name(&link.condition),
                probability: link.probability,
                reason: link.reason.clone(),
                primary_condition: primary.condition_id.clone(),
            });
        }
    }

    // stable: equal probabilities keep discovery order
    suggestions.sort_by(|a, b| b.probability.cmp(&a.probability));
    suggestions
}
