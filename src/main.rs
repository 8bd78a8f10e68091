use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nestegg::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for nestegg::AppCommand {
    fn from(cmd: Commands) -> nestegg::AppCommand {
        match cmd {
            Commands::Calc(args) => nestegg::AppCommand::Calc(args.into()),
            Commands::Interactive => nestegg::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Compute the required net worth from flags
    Calc(CalcArgs),
    /// Adjust inputs interactively and watch the result update
    Interactive,
}

#[derive(Args)]
struct CalcArgs {
    /// Desired passive income, e.g. 2500
    #[arg(short, long)]
    income: Option<String>,

    /// Currency for results: EUR, USD, GBP or JPY
    #[arg(long)]
    currency: Option<String>,

    /// Income frequency: monthly or yearly
    #[arg(short, long)]
    frequency: Option<String>,

    /// Expected annual return in percent
    #[arg(short, long)]
    rate: Option<f64>,
}

impl From<CalcArgs> for nestegg::cli::calc::CalcOptions {
    fn from(args: CalcArgs) -> Self {
        nestegg::cli::calc::CalcOptions {
            income: args.income,
            currency: args.currency,
            frequency: args.frequency,
            rate: args.rate,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => nestegg::cli::setup::setup(),
        Some(cmd) => nestegg::run_command(cmd.into(), cli.config_path.as_deref()),
        None => nestegg::run_command(
            nestegg::AppCommand::Interactive,
            cli.config_path.as_deref(),
        ),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
