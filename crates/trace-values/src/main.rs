//! trace-values - merge values files and report per-key provenance.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use values_merge::{render, MergeSession, ReportOptions};
use values_yaml::{read_values_file, to_yaml_string};

/// Merge values files in order and trace where each key came from
#[derive(Parser, Debug)]
#[command(name = "trace-values")]
#[command(about = "Trace the provenance of merged YAML values", long_about = None)]
struct Args {
    /// Values files to merge, lowest priority first
    #[arg(short = 'f', long = "values", value_name = "FILE")]
    values: Vec<PathBuf>,

    /// More values files, applied after any -f/--values files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Omit the source-file column from the report
    #[arg(long)]
    no_filenames: bool,

    /// Print only the merged document, without the annotated report
    #[arg(long)]
    coalesced_only: bool,
}

fn main() {
    // Initialize logging; the report itself goes to stdout, so logs stay
    // on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trace_values=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut session = MergeSession::new();

    for path in args.values.iter().chain(&args.files) {
        debug!(file = %path.display(), "processing values file");

        let document = read_values_file(path)
            .with_context(|| format!("failed to load values from {}", path.display()))?;

        session
            .apply(&path.display().to_string(), document)
            .with_context(|| format!("failed to coalesce values from {}", path.display()))?;
    }

    let (merged, ledger) = session
        .finish()
        .context("no values files given (use -f FILE, repeatable)")?;

    let options = ReportOptions {
        suppress_file_names: args.no_filenames,
        only_coalesced: args.coalesced_only,
    };

    let serialized = to_yaml_string(&merged).context("failed to serialize merged values")?;

    if options.only_coalesced {
        print!("{serialized}");
    } else {
        for line in render(&merged, &ledger, &options) {
            println!("{line}");
        }
        println!();
        println!("Coalesced values:");
        print!("{serialized}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(values: Vec<PathBuf>) -> Args {
        Args {
            values,
            files: Vec::new(),
            no_filenames: false,
            coalesced_only: false,
        }
    }

    #[test]
    fn test_repeated_values_flags_parse() {
        let args =
            Args::try_parse_from(["trace-values", "-f", "base.yaml", "--values", "prod.yaml"])
                .unwrap();
        assert_eq!(args.values.len(), 2);
        assert!(args.files.is_empty());
    }

    #[test]
    fn test_bare_paths_parse_as_files() {
        let args = Args::try_parse_from(["trace-values", "base.yaml", "prod.yaml"]).unwrap();
        assert!(args.values.is_empty());
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn test_run_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.yaml");
        fs::write(&base, "a: 1\nb:\n  c: 2\n").unwrap();
        let prod = dir.path().join("prod.yaml");
        fs::write(&prod, "b:\n  c: 3\n").unwrap();

        assert!(run(args(vec![base, prod])).is_ok());
    }

    #[test]
    fn test_run_fails_without_files() {
        let err = run(args(Vec::new())).unwrap_err();
        assert!(err.to_string().contains("no values files"));
    }

    #[test]
    fn test_run_fails_on_missing_file() {
        let missing = PathBuf::from("/nonexistent/values.yaml");
        let err = run(args(vec![missing])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load values"));
    }

    #[test]
    fn test_run_fails_on_structural_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.yaml");
        fs::write(&base, "a:\n  b: 1\n").unwrap();
        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "a: 5\n").unwrap();

        let err = run(args(vec![base, bad])).unwrap_err();
        assert!(format!("{err:#}").contains("structural conflict"));
    }
}
