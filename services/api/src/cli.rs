use crate::demo::{run_demo, run_suspension_report, DemoArgs, SuspensionReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use toukou::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Influenza Return-Date Calculator",
    about = "Compute and serve school-return dates for influenza cases from the command line",
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
    /// Work with attendance-suspension assessments
    Suspension {
        #[command(subcommand)]
        command: SuspensionCommand,
    },
    /// Walk through sample cases for both student categories
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SuspensionCommand {
    /// Compute the return date and timeline for one case
    Report(SuspensionReportArgs),
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
        Command::Suspension {
            command: SuspensionCommand::Report(args),
        } => run_suspension_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
