//! tip-split CLI
//!
//! Split a restaurant bill, tip included, between a number of people.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tip_split::config::resolve_config;
use tip_split::report::{format_breakdown, format_config};
use tip_split::session::BillSession;
use tip_split::tui::run::run;
use tip_split::tui::state::App;
use tip_split::types::{CalculatorConfig, OutputFormat, SplitCount, TipPercentage};

#[derive(Parser)]
#[command(name = "tip-split")]
#[command(about = "Split a bill and tip between several people")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/tip-split/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the split once and print it
    Calc {
        /// Bill amount, as you would type it
        bill: String,

        /// Number of people sharing the bill
        /// (default: configured minimum)
        #[arg(long, short)]
        split: Option<u32>,

        /// Tip percentage (0-100)
        #[arg(long, short, default_value_t = 0, conflicts_with = "slider")]
        tip: u8,

        /// Slider position (0.0-1.0), truncated to a whole percentage
        #[arg(long)]
        slider: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Interactive single-screen form
    Tui {
        /// Pre-fill the bill field
        #[arg(long)]
        bill: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc { bill, split, tip, slider, format } => {
            cmd_calc(cli.config, &bill, split, tip, slider, format.into())
        }
        Commands::Tui { bill } => cmd_tui(cli.config, bill),
        Commands::Config { format } => cmd_config(cli.config, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<CalculatorConfig, String> {
    resolve_config(path.as_deref())
        .map(|(config, _)| config)
        .map_err(|e| e.to_string())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_calc(
    config_path: Option<PathBuf>,
    bill: &str,
    split: Option<u32>,
    tip: u8,
    slider: Option<f64>,
    format: OutputFormat,
) -> Result<(), String> {
    let config = load_config(config_path)?;
    let symbol = config.currency_symbol.clone();

    let split = SplitCount::resolve(split, &config)?;

    let mut session = BillSession::new(config);
    session.set_bill_text(bill);
    session.set_split(split.get())?;

    let position = match slider {
        Some(position) => {
            if !(0.0..=1.0).contains(&position) {
                return Err(format!("Slider position {} is outside 0.0..=1.0", position));
            }
            position
        }
        None => TipPercentage::new(tip)?.slider_position(),
    };
    session.set_slider(position);

    if session.bill().is_none() && format == OutputFormat::Human {
        eprintln!("Note: '{}' is not a usable bill amount.", bill.trim());
    }

    print!("{}", format_breakdown(&session.breakdown(), format, &symbol));
    Ok(())
}

fn cmd_tui(config_path: Option<PathBuf>, bill: Option<String>) -> Result<(), String> {
    let config = load_config(config_path)?;
    let symbol = config.currency_symbol.clone();

    let app = match bill {
        Some(text) => App::with_bill(config, &text),
        None => App::new(config),
    };

    let app = run(app).map_err(|e| e.to_string())?;

    // Leave the last result on the normal screen
    if app.session.detail_visible() {
        print!(
            "{}",
            format_breakdown(&app.session.breakdown(), OutputFormat::Human, &symbol)
        );
    }
    Ok(())
}

fn cmd_config(config_path: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let (config, source) = resolve_config(config_path.as_deref()).map_err(|e| e.to_string())?;
    print!("{}", format_config(&config, &source, format));
    Ok(())
}
