use crate::demo::{run_demo, run_evaluate, run_roster, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use editt::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EDITT Insurance",
    about = "Insuring good loans so lenders can lend with confidence",
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
    /// Evaluate one borrower for a loan and optionally simulate a default
    Evaluate(EvaluateArgs),
    /// List the borrower roster with the scenario each ID demonstrates
    Roster,
    /// Walk through every presenter borrower and the ecosystem impact summary
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Roster => run_roster(),
        Command::Demo(args) => run_demo(args),
    }
}
