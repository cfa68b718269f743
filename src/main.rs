//! regex-query CLI tool.

use clap::Parser;
use regex_query::{EngineConfig, EngineKind, Evaluator, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "regex-query")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the query descriptor ({"pattern": ..., "input": ...})
    query_file: PathBuf,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Regex engine to evaluate with
    #[arg(short, long, value_enum, default_value_t = EngineKind::Rust)]
    engine: EngineKind,

    /// Compiled program size limit in bytes
    #[arg(long)]
    size_limit: Option<usize>,

    /// Lazy DFA cache size limit in bytes
    #[arg(long)]
    dfa_size_limit: Option<usize>,

    /// Pattern nesting depth limit (rust engine)
    #[arg(long)]
    nest_limit: Option<u32>,

    /// Backtracking step limit (fancy engine)
    #[arg(long)]
    backtrack_limit: Option<usize>,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            size_limit: self.size_limit,
            dfa_size_limit: self.dfa_size_limit,
            nest_limit: self.nest_limit,
            backtrack_limit: self.backtrack_limit,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the result
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: impl Write) -> Result<()> {
    info!("Query file {:?}", cli.query_file);

    let evaluator = Evaluator::with_engine(cli.engine, &cli.engine_config())?;
    let result = evaluator.evaluate_file(&cli.query_file)?;
    info!(
        "{} engine: validPattern={} matched={}",
        evaluator.engine_name(),
        result.valid_pattern(),
        result.matched()
    );

    result.write_to(out)
}
