//! CLI tool for sweeping file trees.

mod exit_codes;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use fsweep::{Action, Config, FileFilter, run};

use exit_codes::{ExitCode, error_to_exit_code};

/// Walk a file tree and apply one action to every matching file
#[derive(Debug, Parser)]
#[command(name = "fsweep")]
#[command(
    author,
    version,
    about = "Walk a file tree and list, delete, or gzip-archive matching files",
    long_about = None
)]
pub struct Cli {
    /// Root directory to walk
    #[arg(long, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// List matching files (the default action)
    #[arg(long, group = "action")]
    list: bool,

    /// Delete matching files
    #[arg(long, group = "action")]
    del: bool,

    /// Archive matching files into this directory (must exist)
    #[arg(long, group = "action", value_name = "DIR")]
    archive: Option<PathBuf>,

    /// Only act on files with this extension, leading dot included
    #[arg(long, value_name = "EXT")]
    ext: Option<String>,

    /// Only act on files of at least this many bytes
    #[arg(long, default_value = "0", value_name = "BYTES")]
    size: u64,

    /// Append deletion records to this file instead of standard output
    #[arg(long, env = "FSWEEP_LOG", value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(exit_codes::USER_INTERRUPT);
    })
    .ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    std::process::exit(sweep(cli).code());
}

/// Builds the filter from flag values.
///
/// An explicitly empty `--ext` disables extension filtering, same as
/// leaving the flag off.
fn build_filter(ext: Option<String>, min_size: u64) -> FileFilter {
    let mut filter = FileFilter::new().min_size(min_size);
    if let Some(ext) = ext.filter(|e| !e.is_empty()) {
        filter = filter.extension(ext);
    }
    filter
}

fn sweep(cli: Cli) -> ExitCode {
    let filter = build_filter(cli.ext, cli.size);
    let action = Action::resolve(cli.list, cli.del, cli.archive);
    let is_archive = action.is_archive();

    let mut out = io::stdout();
    let mut audit: Box<dyn Write> = match &cli.log {
        Some(path) => match OpenOptions::new().append(true).create(true).open(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Error opening audit log {}: {}", path.display(), e);
                return ExitCode::FatalError;
            }
        },
        None => Box::new(io::stdout()),
    };

    let result = run(
        &cli.root,
        Config {
            filter,
            action,
            out: &mut out,
            audit: &mut *audit,
        },
    );

    match result {
        Ok(summary) => {
            if let Err(e) = out.flush().and_then(|_| audit.flush()) {
                eprintln!("Error: {}", e);
                return ExitCode::FatalError;
            }
            if is_archive {
                info!(
                    "archived {} of {} entries ({:.1}% of original size)",
                    summary.files_matched,
                    summary.entries_visited,
                    summary.compression_ratio() * 100.0
                );
            } else {
                info!(
                    "matched {} of {} entries ({} bytes)",
                    summary.files_matched, summary.entries_visited, summary.bytes_processed
                );
            }
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags_are_mutually_exclusive() {
        let err = Cli::try_parse_from(["fsweep", "--list", "--del"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        assert!(Cli::try_parse_from(["fsweep", "--del", "--archive", "dest"]).is_err());
        assert!(Cli::try_parse_from(["fsweep", "--list", "--archive", "dest"]).is_err());

        assert!(Cli::try_parse_from(["fsweep", "--del"]).is_ok());
        assert!(Cli::try_parse_from(["fsweep", "--archive", "dest"]).is_ok());
    }

    #[test]
    fn test_empty_ext_flag_disables_filtering() {
        let cli = Cli::try_parse_from(["fsweep", "--ext", ""]).expect("parse should succeed");
        assert_eq!(build_filter(cli.ext, cli.size), FileFilter::new());

        let cli = Cli::try_parse_from(["fsweep", "--ext", ".log", "--size", "10"])
            .expect("parse should succeed");
        assert_eq!(
            build_filter(cli.ext, cli.size),
            FileFilter::new().extension(".log").min_size(10)
        );
    }
}
