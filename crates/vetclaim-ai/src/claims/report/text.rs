use std::fmt;

use super::AnalysisReport;

/// Plain-text rendering of an [`AnalysisReport`], suitable for a terminal.
pub struct TextReport<'a>(pub(super) &'a AnalysisReport<'a>);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let result = report.result;

        writeln!(f, "Disability Claim Analysis")?;
        writeln!(f, "=========================")?;
        if let Some(veteran) = &report.claim.veteran {
            write!(f, "Veteran: {}", veteran.name)?;
            if let Some(branch) = &veteran.branch {
                write!(f, " ({branch})")?;
            }
            writeln!(f)?;
            if let Some(separated) = veteran.separation_date {
                writeln!(f, "Separated: {separated}")?;
            }
        }
        writeln!(f, "Generated: {}", report.generated_on)?;
        writeln!(f)?;

        if report.claim.is_empty() {
            return writeln!(f, "No conditions claimed.");
        }

        writeln!(
            f,
            "Overall success probability: {}%",
            result.overall_success_probability
        )?;
        writeln!(
            f,
            "Potential combined rating: {}",
            result.potential_rating.combined
        )?;
        writeln!(
            f,
            "Estimated timeline: {} days (~{} months)",
            result.estimated_timeline.days, result.estimated_timeline.months
        )?;

        writeln!(f)?;
        writeln!(f, "Conditions")?;
        for analysis in &result.condition_analysis {
            writeln!(
                f,
                "- {} [DC {}]: {}% likely, evidence score {}%, typical rating {}",
                analysis.condition_name,
                analysis.diagnostic_code,
                analysis.success_probability,
                analysis.evidence_score,
                analysis.average_rating
            )?;
            for weakness in &analysis.weaknesses {
                writeln!(f, "    weakness: {weakness}")?;
            }
            if !analysis.missing_evidence.is_empty() {
                let missing: Vec<&str> = analysis
                    .missing_evidence
                    .iter()
                    .map(|id| id.as_str())
                    .collect();
                writeln!(f, "    missing: {}", missing.join(", "))?;
            }
        }

        if !result.evidence_gaps.is_empty() {
            writeln!(f)?;
            writeln!(f, "Evidence gaps")?;
            for gap in &result.evidence_gaps {
                writeln!(
                    f,
                    "- [{}] {} ({}): {}",
                    gap.severity.label(),
                    gap.condition_name,
                    gap.gap_type.label(),
                    gap.description
                )?;
                writeln!(f, "    action: {}", gap.action)?;
            }
        }

        if !result.secondary_conditions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Possible secondary conditions")?;
            for suggestion in &result.secondary_conditions {
                writeln!(
                    f,
                    "- {} ({}%, via {}): {}",
                    suggestion.condition_name,
                    suggestion.probability,
                    suggestion.primary_condition,
                    suggestion.reason
                )?;
            }
        }

        if !result.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recommendations")?;
            for recommendation in &result.recommendations {
                writeln!(
                    f,
                    "- [{}] {}: {}",
                    recommendation.priority.label(),
                    recommendation.title,
                    recommendation.description
                )?;
                for action in &recommendation.actions {
                    writeln!(f, "    * {action}")?;
                }
            }
        }

        Ok(())
    }
}
