use crate::infra::build_analyzer;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use vetclaim_ai::caselaw::{CaseLawIndex, CaseLawQuery};
use vetclaim_ai::claims::{AnalysisReport, Claim, ReportFormat};
use vetclaim_ai::config::AppConfig;
use vetclaim_ai::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a claim document (JSON)
    #[arg(long)]
    pub(crate) claim: PathBuf,
    /// Output format: text, json or csv
    #[arg(long, default_value = "text")]
    pub(crate) format: ReportFormat,
}

#[derive(Args, Debug)]
pub(crate) struct RatingArgs {
    /// Individual ratings, each a multiple of 10 between 0 and 100
    #[arg(required = true)]
    pub(crate) ratings: Vec<u8>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ConditionsArgs {
    /// Match against id, name, category or diagnostic code
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct CaseLawArgs {
    /// Search terms
    #[arg(required = true)]
    pub(crate) query: Vec<String>,
    /// Only return decisions cited for this condition id
    #[arg(long)]
    pub(crate) condition: Option<String>,
    /// Maximum number of decisions to print
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let analyzer = build_analyzer(&config.catalog)?;

    let raw = std::fs::read_to_string(&args.claim)?;
    let claim: Claim = serde_json::from_str(&raw)?;
    let result = analyzer.analyze(&claim)?;

    let report = AnalysisReport::new(&claim, &result, Local::now().date_naive());
    print!("{}", report.render(args.format)?);
    Ok(())
}

pub(crate) fn run_rating(args: RatingArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let analyzer = build_analyzer(&config.catalog)?;
    let combined = analyzer.ratings().combine_percentages(&args.ratings)?;

    let individual: Vec<String> = args
        .ratings
        .iter()
        .map(|rating| format!("{rating}%"))
        .collect();
    println!(
        "Combined rating: {combined} (from {})",
        individual.join(", ")
    );
    Ok(())
}

pub(crate) fn run_conditions(args: ConditionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let analyzer = build_analyzer(&config.catalog)?;
    let catalog = analyzer.catalog();
    let found = catalog.search(args.search.as_deref().unwrap_or_default());

    if found.is_empty() {
        println!("No matching conditions");
        return Ok(());
    }

    println!("{} condition(s)", found.len());
    for definition in found {
        println!(
            "- {:<22} DC {:<5} {} [{}] | base {:.0}% | typical {} | ~{} days",
            definition.id.as_str(),
            definition.diagnostic_code,
            definition.name,
            definition.category,
            definition.base_success_rate * 100.0,
            definition.average_rating,
            definition.processing_time_days
        );
        for item in catalog.required_evidence(definition) {
            println!("    {:<9} {}", item.importance.label(), item.name);
        }
    }
    Ok(())
}

pub(crate) fn run_case_law(args: CaseLawArgs) -> Result<(), AppError> {
    let index = CaseLawIndex::standard();
    let query = CaseLawQuery {
        text: args.query.join(" "),
        condition: args.condition,
        limit: args.limit,
    };
    let matches = index.search(&query);

    if matches.is_empty() {
        println!("No matching decisions");
        return Ok(());
    }

    for found in matches {
        let case = found.case;
        println!(
            "{}, {} ({} {}) [score {}]",
            case.title,
            case.citation,
            case.court.label(),
            case.year,
            found.score
        );
        println!("  {}", case.holding);
    }
    Ok(())
}
