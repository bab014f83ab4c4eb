//! specrun - run a versioned conformance specification against a subject.
//!
//! With no arguments, fetches the base group set from the canonical corpus
//! and runs it against the bundled sample renderer, printing one line per
//! case. Advanced groups (marked with `~` in the configured list) are
//! skipped unless `--advanced` is given.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use specrun_loader::{HttpDocumentProvider, UrlTemplate, DEFAULT_URL_TEMPLATE};
use specrun_runner::{BatchRunner, CaseVariant, ConsoleSink, GroupSelection};

mod sample;

use sample::SampleFactory;

/// Default group list; `~` marks advanced groups.
const DEFAULT_GROUPS: &[&str] = &[
    "comments",
    "delimiters",
    "interpolation",
    "inverted",
    "partials",
    "sections",
    "~lambdas",
];

/// specrun CLI application
#[derive(Parser)]
#[command(name = "specrun")]
#[command(about = "Specification-driven conformance test runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Group names to run; a leading `~` marks a group as advanced
    #[arg(short, long, num_args = 1..)]
    groups: Vec<String>,

    /// Also run the advanced group set
    #[arg(short, long)]
    advanced: bool,

    /// Document location template with a `{group}` placeholder
    #[arg(short = 'u', long, env = "SPECRUN_URL_TEMPLATE", default_value = DEFAULT_URL_TEMPLATE)]
    url_template: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let selection = if cli.groups.is_empty() {
        GroupSelection::from_names(DEFAULT_GROUPS)
    } else {
        GroupSelection::from_names(&cli.groups)
    };
    let groups = selection.selected(cli.advanced);

    let provider = match HttpDocumentProvider::new(UrlTemplate::new(cli.url_template)) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("cannot build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let runner = BatchRunner::new(
        &provider,
        CaseVariant::ConfigureThenInvoke(Arc::new(SampleFactory)),
    );
    let mut sink = ConsoleSink;
    let report = runner.run(&groups, &mut sink);

    println!();
    print!("{report}");

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
