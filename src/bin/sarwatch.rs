//! sarwatch - Terminal dashboard for SAR tracker state.
//!
//! Usage:
//!   sarwatch                                  # watch the local tracker
//!   sarwatch http://base:5000/state           # watch a remote tracker
//!   sarwatch -n 10                            # auto-refresh every 10s
//!   sarwatch --once                           # print the tables and exit
//!   sarwatch --demo                           # canned data, no network

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use sarwatch::source::{HttpSource, MockSource, StateSource, demo_snapshot};
use sarwatch::tui::App;
use sarwatch::view::assemble;
use sarwatch::view::text::render_dashboard;

/// Terminal dashboard for SAR tracker state.
#[derive(Parser)]
#[command(name = "sarwatch", about = "Terminal dashboard for SAR tracker state", version)]
struct Args {
    /// Tracker state endpoint.
    #[arg(value_name = "URL", default_value = "http://127.0.0.1:5000/state")]
    url: String,

    /// Auto-refresh interval in seconds. Without it, refresh is manual
    /// (`r` key).
    #[arg(short = 'n', long = "interval", value_name = "SECONDS")]
    interval: Option<u64>,

    /// Fetch one snapshot, print the tables to stdout, and exit.
    #[arg(long)]
    once: bool,

    /// Use canned demo data instead of the network.
    #[arg(long)]
    demo: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write diagnostics to a file instead of stderr. In TUI mode stderr
    /// belongs to the alternate screen, so this is where warnings go if
    /// you want to see them.
    #[arg(long, value_name = "PATH")]
    log_file: Option<std::path::PathBuf>,
}

/// Initializes the tracing subscriber.
///
/// One-shot mode defaults to info on stderr; TUI mode defaults to errors
/// only, since stderr is unreadable under the alternate screen unless
/// `--log-file` redirects it.
fn init_logging(args: &Args) -> Result<(), String> {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 if args.once => Level::INFO,
            0 => Level::ERROR,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sarwatch={}", level).parse().unwrap());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &args.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| format!("cannot open log file '{}': {}", path.display(), e))?;
            builder.with_writer(Arc::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.once && args.interval.is_some() {
        eprintln!("Error: --interval has no effect with --once");
        return ExitCode::FAILURE;
    }
    if args.interval == Some(0) {
        eprintln!("Error: --interval must be at least 1 second");
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let source: Box<dyn StateSource> = if args.demo {
        Box::new(MockSource::repeating(demo_snapshot()))
    } else {
        Box::new(HttpSource::new(args.url.clone()))
    };

    if args.once {
        return run_once(source);
    }

    info!("sarwatch {} starting", env!("CARGO_PKG_VERSION"));
    let interval = args.interval.map(Duration::from_secs);
    match App::new(source, interval).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal error");
            ExitCode::FAILURE
        }
    }
}

/// One-shot mode: single fetch, aligned text tables on stdout.
fn run_once(mut source: Box<dyn StateSource>) -> ExitCode {
    match source.fetch() {
        Ok(snapshot) => {
            print!("{}", render_dashboard(&assemble(&snapshot)));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(endpoint = %source.endpoint(), error = %e, "snapshot fetch failed");
            ExitCode::FAILURE
        }
    }
}
