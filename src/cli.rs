//! Command-line interface for rubylens.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::client::AnalyzerClient;
use crate::config::Config;
use crate::render;
use crate::session::{RequestState, Session};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Client for a remote Ruby source structure analysis service.
///
/// Rubylens submits Ruby source code to an analysis service and renders
/// the returned structural summary: classes with their superclasses and
/// methods, plus top-level methods, each with the variables, calls, and
/// conditionals the service extracted. All parsing happens remotely;
/// rubylens only manages the request and formats the response.
#[derive(Parser)]
#[command(name = "rubylens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit Ruby source for analysis and render the result
    #[command(visible_alias = "run")]
    Analyze(AnalyzeArgs),
    /// Create a new rubylens config file from the default template
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Ruby source file to analyze ("-" or omitted reads stdin)
    pub path: Option<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analysis service endpoint (overrides config)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Output format: pretty or json (overrides config)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Per-request timeout in milliseconds (overrides config)
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "rubylens.yaml")]
    pub output: PathBuf,
}

/// Starter config written by `rubylens init`.
const CONFIG_TEMPLATE: &str = include_str!("templates/rubylens.yaml");

/// Read the source to analyze: a file path, or stdin for "-" or no path.
fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Load config, then apply flag overrides
    let mut config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = Some(endpoint.clone());
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = Some(timeout_ms);
    }
    if let Some(format) = &args.format {
        config.format = Some(format.clone());
    }

    // Validate format
    let format = config.format().to_string();
    if format != "pretty" && format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            format
        );
        return Ok(EXIT_ERROR);
    }

    // Read source (empty input is legal and forwarded as-is)
    let source = match read_source(args.path.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading source: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let client = AnalyzerClient::new(&config);
    let mut session = Session::new();
    session.set_source(source);

    if std::env::var("RUBYLENS_DEBUG").is_ok() {
        eprintln!("[debug] submitting to {}", client.endpoint());
    }

    // One submission, one request; the runtime blocks until completion
    let generation = session.begin_submit();
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(client.analyze(session.source()));

    if let Err(ref e) = outcome {
        // Failure detail is diagnostics-only; the user sees the session's
        // generic message
        if std::env::var("RUBYLENS_DEBUG").is_ok() {
            eprintln!("[debug] analyze request failed: {}", e);
        }
    }

    session.complete(generation, outcome);

    match format.as_str() {
        "json" => println!("{}", render::render_json(session.state())?),
        _ => print!("{}", render::render(session.state())),
    }

    match session.state() {
        RequestState::Succeeded(_) => Ok(EXIT_SUCCESS),
        _ => Ok(EXIT_FAILED),
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Write config file
    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit {} to point at your analysis service",
        args.output.display()
    );
    println!("  2. Run: rubylens analyze path/to/file.rb");

    Ok(EXIT_SUCCESS)
}
