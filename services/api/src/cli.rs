use crate::demo::{
    run_calendar_export, run_demo, run_portfolio_report, CalendarExportArgs, DemoArgs,
    PortfolioReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use propcheck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Propcheck Compliance Service",
    about = "Run and demonstrate the property compliance dashboard service from the command line",
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
    /// Compute compliance reports from data-store CSV exports
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
    /// Run an end-to-end CLI demo over a synthetic portfolio
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// Generate a classified overview with risk, trend, and recommendations
    Report(PortfolioReportArgs),
    /// Emit an iCalendar feed of upcoming inspection due dates
    Calendar(CalendarExportArgs),
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
        Command::Portfolio {
            command: PortfolioCommand::Report(args),
        } => run_portfolio_report(args),
        Command::Portfolio {
            command: PortfolioCommand::Calendar(args),
        } => run_calendar_export(args),
        Command::Demo(args) => run_demo(args),
    }
}
