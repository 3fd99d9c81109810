use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use term_raster::RasterError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bmpterm::error::{ViewError, EXIT_FAILURE};
use bmpterm::models::{
    parse_threshold, ColorModeSetting, TerminalSize, ViewerConfig, CONFIG_ENV,
};
use bmpterm::services::{HeaderReport, ViewService};

#[derive(Parser)]
#[command(name = "bmpterm")]
#[command(about = "View 24-bit bitmaps as colored cells in the terminal")]
#[command(version)]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a bitmap in the terminal
    View(ViewArgs),
    /// Print the header fields of a bitmap and whether it can be drawn
    Info {
        /// Bitmap file
        file: PathBuf,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Bitmap file
    file: PathBuf,

    /// Color mode
    #[arg(short, long, value_enum)]
    mode: Option<ColorModeSetting>,

    /// Per-channel cutoff for threshold mode (e.g. "128,128,128")
    #[arg(long, value_parser = parse_threshold)]
    threshold: Option<[u8; 3]>,

    /// Target width in terminal columns (default: terminal width)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    columns: Option<u16>,

    /// Target height in terminal rows (default: terminal height)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    rows: Option<u16>,

    /// YAML config file (default: $BMPTERM_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ViewArgs {
    fn overrides(&self) -> ViewerConfig {
        ViewerConfig {
            mode: self.mode,
            threshold: self.threshold,
            columns: self.columns.map(usize::from),
            rows: self.rows.map(usize::from),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bmpterm: {e}");
            let code = e
                .downcast_ref::<ViewError>()
                .map_or(EXIT_FAILURE, ViewError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_tracing(cli.verbose).context("cannot install log subscriber")?;

    match cli.command {
        Commands::View(args) => run_view_command(&args),
        Commands::Info { file } => run_info_command(&file),
    }
}

/// Logs go to stderr so they never mix into the image on stdout.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("bmpterm=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "bmpterm=warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .try_init()?;
    Ok(())
}

/// Draw a bitmap to stdout
fn run_view_command(args: &ViewArgs) -> anyhow::Result<ExitCode> {
    let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let file_config = ViewerConfig::discover(args.config.as_deref(), from_env.as_deref())
        .map_err(ViewError::from)?;
    let config = args.overrides().or(file_config);

    let service = ViewService::from_config(&config, TerminalSize::detect());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    service
        .view(&args.file, &mut out)
        .map_err(ViewError::from)?;

    Ok(ExitCode::SUCCESS)
}

/// Print the header report of a bitmap to stdout
fn run_info_command(file: &Path) -> anyhow::Result<ExitCode> {
    let report = HeaderReport::read(file).map_err(ViewError::from)?;

    let stdout = io::stdout();
    report
        .write_to(&mut stdout.lock())
        .map_err(|e| ViewError::from(RasterError::Output(e)))?;

    Ok(match report.rejection {
        None => ExitCode::SUCCESS,
        Some(e) => ExitCode::from(ViewError::from(RasterError::from(e)).exit_code()),
    })
}
