mod commands;
mod input;
mod logging;
mod output;
mod prefs_store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::path::PathBuf;
use std::process;

use commands::analytics::{ChangeArgs, SummaryArgs};
use commands::dashboard::DashboardArgs;
use commands::prefs::PrefsCommand;
use commands::records::{RevenueArgs, TransactionsArgs};

/// Municipal property-revenue dashboard
#[derive(Parser)]
#[command(
    name = "revdash",
    version,
    about = "Municipal property-revenue analytics dashboard",
    long_about = "Summary statistics, month-over-month trends, filtered revenue series \
                  and transaction listings for municipal property revenue, computed \
                  with decimal precision from a JSON/YAML dataset or the built-in sample."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Dataset file (.json, .yaml or .yml); stdin or the built-in sample otherwise
    #[arg(long, global = true)]
    data: Option<String>,

    /// Preferences file
    #[arg(long, env = "REVDASH_PREFS", global = true)]
    prefs: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Full dashboard: cards, summary, trend, filtered series and transactions
    Dashboard(DashboardArgs),
    /// List transactions matching the filters
    Transactions(TransactionsArgs),
    /// Revenue series for the selected category and window
    Revenue(RevenueArgs),
    /// Month-over-month trend of the full revenue series
    Trend,
    /// Summary statistics over the filtered transactions
    Summary(SummaryArgs),
    /// Percentage change between two values
    Change(ChangeArgs),
    /// Show or change the saved filter preferences
    #[command(subcommand)]
    Prefs(PrefsCommand),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Settings shared by every subcommand.
pub struct Context {
    pub data: Option<String>,
    pub prefs_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let ctx = Context {
        data: cli.data.clone(),
        prefs_path: prefs_store::resolve_prefs_path(cli.prefs.clone()),
    };

    let result: Result<Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Dashboard(args) => commands::dashboard::run_dashboard(args, &ctx),
        Commands::Transactions(args) => commands::records::run_transactions(args, &ctx),
        Commands::Revenue(args) => commands::records::run_revenue(args, &ctx),
        Commands::Trend => commands::analytics::run_trend(&ctx),
        Commands::Summary(args) => commands::analytics::run_summary(args, &ctx),
        Commands::Change(args) => commands::analytics::run_change(args),
        Commands::Prefs(cmd) => commands::prefs::run_prefs(cmd, &ctx),
        Commands::Version => {
            println!("revdash {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        // null: the command already wrote its own stdout
        Ok(Value::Null) => process::exit(0),
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
