//! Batch driver
//!
//! Finds the headers named on the command line, translates each one with
//! its own state, formats the result and either writes it next to the other
//! outputs or hands the text back to the caller for standard output.
//!
//! Files are processed in parallel; every outcome is kept, in input order,
//! in a [`BatchReport`] the caller turns into an exit status.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info_span, warn};

use crate::config::{System, TranslateOptions};
use crate::diagnostics::Diagnostic;
use crate::error::ProcessError;
use crate::format::Formatter;
use crate::transpile_main::translate;

/// Everything needed to process one file of a batch
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub translate: TranslateOptions,
    pub system: System,
    /// Write `h-<base>_<system>.go` files instead of returning the text
    pub write: bool,
    pub out_dir: PathBuf,
    /// Skip the formatter and emit the raw translation
    pub debug: bool,
}

impl ProcessOptions {
    pub fn new(translate: TranslateOptions, system: System) -> Self {
        ProcessOptions {
            translate,
            system,
            write: false,
            out_dir: PathBuf::from("."),
            debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutput {
    /// Written to this path
    Written(PathBuf),
    /// Formatted text for standard output
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Processed {
    pub path: PathBuf,
    pub output: FileOutput,
    pub diagnostics: Vec<Diagnostic>,
}

//===========================================================================
// SINGLE FILE
//===========================================================================

/// `foo.h` -> `h-foo_linux.go`
pub fn output_file_name(path: &Path, system: System) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let base = name.strip_suffix(".h")?;
    Some(format!("h-{}_{}.go", base, system))
}

pub fn is_header(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "h")
}

/// Translate, format and emit one header
pub fn process_file(
    path: &Path,
    options: &ProcessOptions,
    formatter: &dyn Formatter,
) -> Result<Processed, ProcessError> {
    let _span = info_span!("header", path = %path.display()).entered();

    let file_name = match output_file_name(path, options.system) {
        Some(name) if is_header(path) => name,
        _ => return Err(ProcessError::NotAHeader(path.to_path_buf())),
    };

    let file = File::open(path).map_err(|source| ProcessError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let translation = translate(BufReader::new(file), &options.translate).map_err(|source| {
        ProcessError::Translate {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(diagnostics = translation.diagnostics.len(), "translated");

    let text = if options.debug {
        translation.source
    } else {
        let name = path.display().to_string();
        formatter
            .format(&name, &translation.source)
            .map_err(|source| ProcessError::Format {
                path: path.to_path_buf(),
                source,
            })?
    };

    let output = if options.write {
        let target = options.out_dir.join(file_name);
        fs::write(&target, text).map_err(|source| ProcessError::Write {
            path: target.clone(),
            source,
        })?;
        debug!(target = %target.display(), "written");
        FileOutput::Written(target)
    } else {
        FileOutput::Text(text)
    };

    Ok(Processed {
        path: path.to_path_buf(),
        output,
        diagnostics: translation.diagnostics,
    })
}

//===========================================================================
// DISCOVERY
//===========================================================================

/// Expand the command-line paths into the list of files to process.
///
/// Files are taken as given; directories are walked recursively for
/// non-hidden `.h` files without following symlinks. A path that cannot be
/// stat'ed becomes an `Open` error and an unreadable directory a `Walk`
/// error, in place, so they are reported alongside the files.
pub fn collect_headers(paths: &[PathBuf]) -> Vec<Result<PathBuf, ProcessError>> {
    let mut found = Vec::new();
    for path in paths {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => visit_headers(path, &mut found),
            Ok(_) => found.push(Ok(path.clone())),
            Err(source) => found.push(Err(ProcessError::Open {
                path: path.clone(),
                source,
            })),
        }
    }
    found
}

fn visit_headers(dir: &Path, found: &mut Vec<Result<PathBuf, ProcessError>>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            found.push(Err(ProcessError::Walk {
                path: dir.to_path_buf(),
                source,
            }));
            return;
        }
    };

    // File types come from the directory entry and are not followed, so
    // symlinks (including ones pointing back up the tree) are skipped.
    let mut children = Vec::new();
    for entry in entries {
        match entry.and_then(|entry| Ok((entry.path(), entry.file_type()?))) {
            Ok(child) => children.push(child),
            Err(source) => found.push(Err(ProcessError::Walk {
                path: dir.to_path_buf(),
                source,
            })),
        }
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, file_type) in children {
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            continue;
        }
        if file_type.is_dir() {
            visit_headers(&path, found);
        } else if file_type.is_file() && is_header(&path) {
            found.push(Ok(path));
        }
    }
}

//===========================================================================
// BATCH
//===========================================================================

/// Outcome of every file of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Result<Processed, ProcessError>>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &Processed> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProcessError> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    pub fn diagnostic_count(&self) -> usize {
        self.succeeded().map(|p| p.diagnostics.len()).sum()
    }

    /// 0 when every file succeeded, 2 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.failures().next().is_none() {
            0
        } else {
            2
        }
    }
}

/// Process every header under `paths`, in parallel
pub fn run_batch(paths: &[PathBuf], options: &ProcessOptions, formatter: &dyn Formatter) -> BatchReport {
    let outcomes: Vec<Result<Processed, ProcessError>> = collect_headers(paths)
        .into_par_iter()
        .map(|found| found.and_then(|path| process_file(&path, options, formatter)))
        .collect();

    for err in outcomes.iter().filter_map(|outcome| outcome.as_ref().err()) {
        warn!(path = %err.path().display(), "{}", err);
    }

    BatchReport { outcomes }
}
