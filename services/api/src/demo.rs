use chrono::{Local, NaiveDate};
use clap::Args;
use vetclaim_ai::caselaw::{CaseLawIndex, CaseLawQuery};
use vetclaim_ai::claims::{
    AnalysisReport, Claim, ClaimAnalyzer, ClaimCondition, ReportFormat, VeteranInfo,
};
use vetclaim_ai::config::AppConfig;
use vetclaim_ai::error::AppError;

use crate::infra::load_catalog;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output format for the sample report: text, json or csv
    #[arg(long, default_value = "text")]
    pub(crate) format: ReportFormat,
    /// Skip the case-law section of the demo output.
    #[arg(long)]
    pub(crate) skip_case_law: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let analyzer = ClaimAnalyzer::new(load_catalog(&config.catalog)?);

    let claim = sample_claim();
    let result = analyzer.analyze(&claim)?;
    let report = AnalysisReport::new(&claim, &result, Local::now().date_naive());
    print!("{}", report.render(args.format)?);

    if args.skip_case_law || args.format != ReportFormat::Text {
        return Ok(());
    }

    let index = CaseLawIndex::standard();
    println!("\nSupporting precedent");
    for analysis in &result.condition_analysis {
        let query = CaseLawQuery::default()
            .for_condition(analysis.condition_id.as_str())
            .limit(2);
        for found in index.search(&query) {
            println!(
                "- {}: {}, {} ({})",
                analysis.condition_name, found.case.title, found.case.citation, found.case.year
            );
        }
    }
    if result
        .condition_analysis
        .iter()
        .any(|analysis| !analysis.weaknesses.is_empty())
    {
        for found in index.search(&CaseLawQuery::text("nexus opinion").limit(1)) {
            println!(
                "- Nexus opinions: {}, {} ({})",
                found.case.title, found.case.citation, found.case.year
            );
        }
    }

    Ok(())
}

/// Three-condition claim with one well documented condition and two weaker ones.
pub(crate) fn sample_claim() -> Claim {
    let mut ptsd = ClaimCondition::new("ptsd").with_evidence([
        "current_diagnosis",
        "stressor_statement",
        "nexus_opinion",
        "buddy_statements",
        "treatment_records",
    ]);
    ptsd.has_nexus_letter = true;
    ptsd.current_diagnosis = true;
    ptsd.continuous_symptoms = true;
    ptsd.combat_related = true;
    ptsd.service_documentation = true;

    let mut tinnitus = ClaimCondition::new("tinnitus")
        .with_evidence(["current_diagnosis", "noise_exposure_evidence"]);
    tinnitus.current_diagnosis = true;
    tinnitus.service_documentation = true;

    let mut lumbar = ClaimCondition::new("lumbar_strain").with_evidence(["current_diagnosis"]);
    lumbar.current_diagnosis = true;
    lumbar.treatment_gap = 30;

    Claim {
        veteran: Some(VeteranInfo {
            name: "Jordan Ellis".to_string(),
            branch: Some("Army".to_string()),
            separation_date: NaiveDate::from_ymd_opt(2022, 8, 15),
        }),
        conditions: vec![ptsd, tinnitus, lumbar],
        has_appeals: false,
        recent_separation: false,
    }
}
