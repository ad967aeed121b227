//! CLI adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tgnav")]
#[command(version)]
#[command(
    about = "Browse Terragrunt modules and manage their S3/DynamoDB backends",
    long_about = None
)]
struct Cli {
    /// Directory to navigate from (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    base_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive module navigator (default)
    #[clap(visible_alias = "b")]
    Browse,
    /// Run one tool verb against a module without prompts
    #[clap(visible_alias = "r")]
    Run {
        /// Tool verb (plan, apply, output, state, ...)
        verb: String,
        /// Module directory, relative to the base directory
        module: PathBuf,
        /// Extra arguments passed after the verb
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print the resolved remote backend of a module as JSON
    Backend {
        /// Module directory, relative to the base directory
        module: PathBuf,
    },
    /// Remove Terraform and Terragrunt scratch files
    Clean {
        /// Directory to clean (defaults to the base directory)
        path: Option<PathBuf>,
    },
    /// Format HCL and Terraform sources under the base directory
    Fmt,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let base_dir = cli.base_dir;

    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => api::browse(base_dir).map(|_| 0),
        Commands::Run { verb, module, args } => run_module(base_dir, &verb, module, &args),
        Commands::Backend { module } => run_backend(base_dir, module).map(|_| 0),
        Commands::Clean { path } => run_clean(base_dir, path),
        Commands::Fmt => run_fmt(base_dir),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_module(
    base_dir: Option<PathBuf>,
    verb: &str,
    module: PathBuf,
    args: &[String],
) -> Result<i32, AppError> {
    let result = api::run_module(base_dir, verb, &module, args)?;
    Ok(match result.exit_code {
        Some(code) => code,
        None => 1,
    })
}

fn run_backend(base_dir: Option<PathBuf>, module: PathBuf) -> Result<(), AppError> {
    let backend = api::backend(base_dir, &module)?;
    let json = serde_json::to_string_pretty(&backend).map_err(|e| AppError::MalformedOutput {
        what: "backend configuration".into(),
        details: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn run_clean(base_dir: Option<PathBuf>, path: Option<PathBuf>) -> Result<i32, AppError> {
    let report = api::clean(base_dir, path)?;
    println!(
        "✅ Removed {} path(s), skipped {}, {} failure(s)",
        report.removed.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(if report.failed.is_empty() { 0 } else { 1 })
}

fn run_fmt(base_dir: Option<PathBuf>) -> Result<i32, AppError> {
    let results = api::fmt(base_dir)?;
    Ok(if results.iter().all(|result| result.success()) { 0 } else { 1 })
}
