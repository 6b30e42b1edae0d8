//! Check command implementation.
//!
//! Lexes many files in parallel and reports every diagnostic. Each file gets
//! its own scanner and handler; nothing is shared between workers.

use std::path::{Path, PathBuf};
use std::time::Instant;

use brsc_lex::scan_recovering;
use brsc_util::{Diagnostic, Handler};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::commands::common::{read_source, render_diagnostics};
use crate::error::{BrstError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to lex.
    pub files: Vec<PathBuf>,
    /// Worker threads, `None` for one per core.
    pub jobs: Option<usize>,
    /// Print a per-file line for clean files too.
    pub verbose: bool,
}

/// Outcome of lexing one file.
#[derive(Debug)]
pub struct FileReport {
    /// The file that was lexed.
    pub path: PathBuf,
    /// Its contents, kept for rendering diagnostics.
    pub source: String,
    /// Number of tokens produced, including Eof.
    pub token_count: usize,
    /// Every lexical error found.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Whether the file lexed without errors.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Lex one file with recovery.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let source = read_source(path)?;
    let handler = Handler::new();
    let token_count = scan_recovering(&source, &handler).len();
    debug!(path = %path.display(), tokens = token_count, "checked");

    Ok(FileReport {
        path: path.to_path_buf(),
        source,
        token_count,
        diagnostics: handler.into_diagnostics(),
    })
}

/// Lex every file, in parallel, returning reports in input order.
pub fn check_files(files: &[PathBuf], jobs: Option<usize>) -> Result<Vec<FileReport>> {
    if jobs == Some(0) {
        return Err(BrstError::Validation("--jobs must be at least 1".to_string()));
    }

    let mut builder = ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder
        .build()
        .map_err(|e| BrstError::Config(format!("Failed to start worker pool: {}", e)))?;

    pool.install(|| files.par_iter().map(|path| check_file(path)).collect())
}

/// Run the check command.
///
/// Diagnostics go to stderr, a summary line to stdout. Fails when any file
/// has lexical errors.
pub fn run_check(args: CheckArgs) -> Result<()> {
    if args.files.is_empty() {
        return Err(BrstError::Validation("no input files".to_string()));
    }

    let start_time = Instant::now();
    let reports = check_files(&args.files, args.jobs)?;

    let mut error_count = 0;
    let mut failed_files = 0;
    for report in &reports {
        if report.is_clean() {
            if args.verbose {
                println!("{}: ok ({} tokens)", report.path.display(), report.token_count);
            }
            continue;
        }
        failed_files += 1;
        error_count += report.diagnostics.len();
        eprint!(
            "{}",
            render_diagnostics(&report.path, &report.source, &report.diagnostics)
        );
    }

    println!(
        "checked {} file(s): {} error(s)",
        reports.len(),
        error_count
    );
    info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "check finished");

    if failed_files > 0 {
        return Err(BrstError::Validation(format!(
            "{} file(s) with lexical errors",
            failed_files
        )));
    }
    Ok(())
}
