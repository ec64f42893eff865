//! # Flat Junos extraction CLI
//!
//! Extracts device models from flat Juniper configuration dumps and emits
//! them as JSON, with a cargo-style problem summary at the end of the run.

use clap::Parser;
use junos_model::api::{extract_file, ExtractionResult};
use junos_parser::{log_info, logging};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Debug, Parser)]
#[command(
    name = "jextract",
    version,
    about = "Extract device models from flat Junos configuration dumps"
)]
struct Args {
    /// Configuration file or directory of .conf/.cfg files
    input: PathBuf,

    /// Write JSON here (single file) or into this directory (directory
    /// input); stdout when omitted for a single file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Include the effective set lines in the JSON payload
    #[arg(long)]
    set_lines: bool,
}

/// The JSON document emitted per input file
#[derive(Debug, Serialize)]
struct Document {
    configuration: junos_model::JunosConfiguration,
    warnings: junos_model::Warnings,
    statements: usize,
    error_nodes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_set_lines: Option<Vec<String>>,
}

impl Document {
    fn new(result: &ExtractionResult, include_set_lines: bool) -> Self {
        Self {
            configuration: result.configuration.clone(),
            warnings: result.warnings.clone(),
            statements: result.parse.build_stats.statements,
            error_nodes: result.parse.build_stats.error_nodes,
            effective_set_lines: include_set_lines
                .then(|| result.parse.effective_set_lines.clone()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_global_logging()?;
    log_info!("jextract starting");

    let args = Args::parse();

    if args.input.is_file() {
        extract_single(&args)?;
    } else if args.input.is_dir() {
        extract_directory(&args)?;
    } else {
        eprintln!("Error: input must be a configuration file or directory");
        eprintln!("  Path: {}", args.input.display());
        std::process::exit(1);
    }

    logging::print_cargo_style_summary();
    Ok(())
}

fn extract_single(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let result = extract_file(path_str(&args.input)?)?;
    let json = render(&result, args)?;

    match &args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

fn extract_directory(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    if let Some(output_dir) = &args.output {
        std::fs::create_dir_all(output_dir)?;
    }

    let mut processed = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(&args.input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && is_config_file(e.path()))
    {
        let path = entry.path();
        match extract_file(path_str(path)?) {
            Ok(result) => {
                processed += 1;
                let hostname = result
                    .configuration
                    .hostname()
                    .unwrap_or("<no hostname>")
                    .to_string();
                println!(
                    "{}: {} ({} statements, {} problems)",
                    path.display(),
                    hostname,
                    result.parse.build_stats.statements,
                    result.problem_count()
                );
                if let Some(output_dir) = &args.output {
                    let file_name = path
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| format!("config-{}", processed));
                    let out_path = output_dir.join(format!("{}.json", file_name));
                    std::fs::write(out_path, render(&result, args)?)?;
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}: extraction failed: {}", path.display(), e);
            }
        }
    }

    println!(
        "Processed {} file(s), {} failed, in {:.1}s",
        processed,
        failed,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn render(result: &ExtractionResult, args: &Args) -> Result<String, serde_json::Error> {
    let document = Document::new(result, args.set_lines);
    if args.pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
}

fn is_config_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("conf") | Some("cfg")
    )
}

fn path_str(path: &Path) -> Result<&str, Box<dyn std::error::Error>> {
    path.to_str()
        .ok_or_else(|| format!("non-UTF-8 path: {}", path.display()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_is_config_file() {
        assert!(is_config_file(Path::new("router.conf")));
        assert!(is_config_file(Path::new("router.cfg")));
        assert!(!is_config_file(Path::new("router.txt")));
        assert!(!is_config_file(Path::new("router")));
    }

    #[test]
    fn test_document_rendering() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "set system host-name r1").unwrap();

        let result = extract_file(file.path().to_str().unwrap()).unwrap();
        let args = Args {
            input: file.path().to_path_buf(),
            output: None,
            pretty: false,
            set_lines: true,
        };
        let json = render(&result, &args).unwrap();
        assert!(json.contains("\"host_name\":\"r1\""));
        assert!(json.contains("set system host-name r1"));
    }
}
