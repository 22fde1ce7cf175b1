//! Error taxonomy for a run: source failures abort, unrepairable rows are skipped,
//! sink failures are collected per artifact.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while obtaining the raw record table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read input {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed table in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("input {} has no data rows", path.display())]
    Empty { path: PathBuf },
}

/// A corrupted row whose merged title does not split into the six expected parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    #[error("row {id}: corrupted title splits into {parts} parts, expected 6")]
    Unrepairable { id: String, parts: usize },
}

/// Which of the three derived views an output belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    TopPosts,
    OtherPosts,
    DailyTopPosts,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Artifact::TopPosts => "top posts",
            Artifact::OtherPosts => "other posts",
            Artifact::DailyTopPosts => "daily top posts",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
#[error("failed to write {artifact} to {}: {source}", path.display())]
pub struct SinkError {
    pub artifact: Artifact,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl SinkError {
    pub(crate) fn new(artifact: Artifact, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self { artifact, path: path.into(), source }
    }
}

/// Top-level failure of a run, naming the stage that failed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("source stage failed: {0}")]
    Source(#[from] SourceError),

    #[error("output stage failed for {} artifact(s): {}", .0.len(), join_sink_errors(.0))]
    Sink(Vec<SinkError>),
}

fn join_sink_errors(errs: &[SinkError]) -> String {
    errs.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}
