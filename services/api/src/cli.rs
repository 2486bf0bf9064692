use crate::commands::{
    run_analyze, run_case_law, run_conditions, run_rating, AnalyzeArgs, CaseLawArgs,
    ConditionsArgs, RatingArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vetclaim_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "vetclaim-ai",
    about = "Analyse veteran disability claims from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyse a claim document and print a report
    Analyze(AnalyzeArgs),
    /// Combine individual disability ratings with the VA whole-person rule
    Rating(RatingArgs),
    /// List or search the condition catalog
    Conditions(ConditionsArgs),
    /// Search precedential decisions
    Caselaw(CaseLawArgs),
    /// Analyse a built-in sample claim
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Rating(args) => run_rating(args),
        Command::Conditions(args) => run_conditions(args),
        Command::Caselaw(args) => run_case_law(args),
        Command::Demo(args) => run_demo(args),
    }
}
