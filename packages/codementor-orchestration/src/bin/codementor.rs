//! Codementor CLI
//!
//! # Usage
//!
//! ```bash
//! # Critique a snippet (heuristics only unless GROQ_API_KEY is set)
//! cargo run --bin codementor -- analyze main.cpp --extended
//!
//! # Run user test cases through the sandbox
//! cargo run --bin codementor -- run main.cpp --cases cases.json
//!
//! # Execute once with stdin
//! cargo run --bin codementor -- exec main.cpp --input "5 10"
//!
//! # Ask about the code
//! cargo run --bin codementor -- chat main.cpp --message "Why does this leak?"
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use codementor_engine::{AnalysisMode, MentorConfig, TestCase, TestSuiteSummary};
use codementor_orchestration::{ErrorCategory, MentorService, OrchestratorError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codementor")]
#[command(about = "C++ snippet mentor - critique, execute and verify", long_about = None)]
struct Cli {
    /// YAML config file (version: 1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Critique a source file
    Analyze {
        /// C++ source file
        file: PathBuf,

        /// Also request a complexity report
        #[arg(long)]
        extended: bool,
    },

    /// Run test cases from a JSON file
    Run {
        /// C++ source file
        file: PathBuf,

        /// JSON array of {"input", "expectedOutput"} objects
        #[arg(long)]
        cases: PathBuf,
    },

    /// Execute the source once
    Exec {
        /// C++ source file
        file: PathBuf,

        /// Text passed on stdin
        #[arg(short, long, default_value = "")]
        input: String,
    },

    /// Ask a question about the source
    Chat {
        /// C++ source file
        file: PathBuf,

        #[arg(short, long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let category = failure_category(&err);
            tracing::error!(%category, "{:#}", err);
            ExitCode::from(category.exit_code())
        }
    }
}

/// Category of the first service error in the chain. Anything else is local to the CLI.
fn failure_category(err: &anyhow::Error) -> ErrorCategory {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<OrchestratorError>())
        .map_or(ErrorCategory::Internal, OrchestratorError::category)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let service = MentorService::from_config(config).context("failed to build mentor service")?;

    match cli.command {
        Commands::Analyze { file, extended } => {
            let code = read_source(&file)?;
            let mode = if extended {
                AnalysisMode::Extended
            } else {
                AnalysisMode::Basic
            };
            print_json(&service.analyze(&code, mode).await?)?;
        }

        Commands::Run { file, cases } => {
            let code = read_source(&file)?;
            let raw = std::fs::read_to_string(&cases)
                .with_context(|| format!("failed to read {}", cases.display()))?;
            let cases: Vec<TestCase> = serde_json::from_str(&raw)
                .context("cases file must be a JSON array of test cases")?;

            let results = service.run_tests(&code, cases).await?;
            let summary = TestSuiteSummary::from_cases(&results);
            print_json(&results)?;
            eprintln!("{}", summary);

            if summary.has_failures() {
                bail!("{} of {} test case(s) failed", summary.failed, summary.total);
            }
        }

        Commands::Exec { file, input } => {
            let code = read_source(&file)?;
            print_json(&service.execute(&code, &input).await?)?;
        }

        Commands::Chat { file, message } => {
            let code = read_source(&file)?;
            let reply = service.chat(&code, &message, &[]).await?;
            println!("{}", reply);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MentorConfig> {
    let config = match path {
        Some(path) => {
            let path = path
                .to_str()
                .with_context(|| format!("config path is not valid UTF-8: {}", path.display()))?;
            MentorConfig::from_yaml(path).with_context(|| format!("failed to load {}", path))?
        }
        None => MentorConfig::default(),
    };
    config
        .with_env_overrides()
        .context("invalid environment override")
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codementor_engine::SandboxError;

    #[test]
    fn test_service_error_category_survives_context() {
        let err = anyhow::Error::new(OrchestratorError::MissingField("code"))
            .context("failed to run test cases");
        assert_eq!(failure_category(&err), ErrorCategory::ClientInput);

        let err = anyhow::Error::new(OrchestratorError::from(SandboxError::Status {
            status: 503,
        }));
        assert_eq!(failure_category(&err).exit_code(), 3);
    }

    #[test]
    fn test_cli_local_error_is_internal() {
        let err = anyhow::anyhow!("failed to read main.cpp");
        assert_eq!(failure_category(&err), ErrorCategory::Internal);
    }
}
