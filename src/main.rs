mod config;
mod demo;
mod display;
mod report;
mod system;
mod zfs;

use anyhow::{Context, Result};
use clap::Parser;
use config::{DEFAULT_KSTAT_PATH, DEFAULT_TUNABLES_PATH, ReportConfig, TunablesLayout};
use display::Terminal;
use std::io::Write;
use std::process;
use system::commands::{DemoCommandExecutor, RealCommandExecutor};
use system::filesystem::{DemoFilesystemReader, RealFilesystemReader};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zfs::sections::SECTION_NAMES;
use zfs::{KstatCollector, Section};

#[derive(Parser)]
#[command(name = "arc_summary")]
#[command(version)]
#[command(about = "Print ZFS ARC and subsystem statistics from the kernel kstats", long_about = None)]
struct Cli {
    /// Print tunables as name=value pairs
    #[arg(short, long)]
    alternate: bool,

    /// Print a description above each tunable
    #[arg(short, long)]
    descriptions: bool,

    /// Dump the raw kstat lines, sorted, without interpretation
    #[arg(short, long)]
    raw: bool,

    /// Compact graphic view of ARC usage
    #[arg(short, long)]
    graphic: bool,

    /// Only print one section: arc, dmu, l2arc, tunables, vdev, xuio, zfetch, zil
    #[arg(short, long, value_name = "SECTION", value_parser = parse_section)]
    section: Option<Section>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding the ZFS kstat files
    #[arg(long, value_name = "PATH", env = "ARC_SUMMARY_KSTAT_PATH", default_value = DEFAULT_KSTAT_PATH)]
    kstat_path: String,

    /// Directory holding the ZFS module parameters
    #[arg(long, value_name = "PATH", env = "ARC_SUMMARY_TUNABLES_PATH", default_value = DEFAULT_TUNABLES_PATH)]
    tunables_path: String,

    /// Report on built-in sample data instead of the running system
    #[arg(long, env = "DEMO_MODE")]
    demo: bool,
}

fn parse_section(name: &str) -> Result<Section, String> {
    if !zfs::is_known_section(name) {
        return Err(format!("valid sections are: {}", SECTION_NAMES.join(", ")));
    }
    name.parse::<Section>().map_err(|e| e.to_string())
}

impl Cli {
    fn into_config(self) -> ReportConfig {
        // Sample data only exists under the default locations
        let (kstat_path, tunables_path) = if self.demo {
            (DEFAULT_KSTAT_PATH.to_string(), DEFAULT_TUNABLES_PATH.to_string())
        } else {
            (self.kstat_path, self.tunables_path)
        };

        ReportConfig {
            kstat_path,
            tunables_path,
            mode: ReportConfig::display_mode(self.raw, self.graphic),
            section: self.section,
            tunables_layout: if self.alternate {
                TunablesLayout::Alternate
            } else {
                TunablesLayout::Columns
            },
            descriptions: self.descriptions,
            demo_mode: self.demo,
        }
    }
}

/// `RUST_LOG` when set and valid, otherwise a level picked by the `-v` count
fn log_filter(rust_log: Option<&str>, verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

fn setup_logging(verbosity: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref(), verbosity))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = try_main(cli.into_config()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn try_main(config: ReportConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let output = runtime.block_on(run(&config))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write report")?;
    Ok(())
}

async fn run(config: &ReportConfig) -> Result<String> {
    debug!(?config, "resolved configuration");
    let terminal = Terminal::new();

    let output = if config.demo_mode {
        let collector = KstatCollector::new(
            DemoCommandExecutor,
            DemoFilesystemReader,
            &config.kstat_path,
            &config.tunables_path,
        );
        report::run(config, &collector, &terminal).await
    } else {
        let collector = KstatCollector::new(
            RealCommandExecutor,
            RealFilesystemReader,
            &config.kstat_path,
            &config.tunables_path,
        );
        report::run(config, &collector, &terminal).await
    };

    output.context("could not build the ZFS report")
}
