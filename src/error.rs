//! Error types
//!
//! - [`TranslateError`]: a single translation pass failed
//! - [`FormatError`]: the translated buffer is not valid Go
//! - [`ProcessError`]: one file of a batch failed (carries the path)
//!
//! Lines the translator cannot understand are not errors; they are marked
//! in the output and reported as [`Diagnostic`](crate::diagnostics::Diagnostic)s.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::modes::Construct;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    #[error("unterminated {construct} opened at line {line}")]
    UnbalancedBlock { construct: Construct, line: usize },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot run formatter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("formatter produced invalid UTF-8: {0}")]
    Output(#[from] FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0}: not a C header (expected a `.h` file)")]
    NotAHeader(PathBuf),

    #[error("{path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Translate {
        path: PathBuf,
        #[source]
        source: TranslateError,
    },

    #[error("{path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("{path}: cannot write output: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: cannot walk directory: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ProcessError::NotAHeader(path) => path,
            ProcessError::Open { path, .. }
            | ProcessError::Translate { path, .. }
            | ProcessError::Format { path, .. }
            | ProcessError::Write { path, .. }
            | ProcessError::Walk { path, .. } => path,
        }
    }
}
