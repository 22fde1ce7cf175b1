use crate::classify::{classify, Class};
use crate::config::{RunOptions, Thresholds};
use crate::error::{Artifact, RepairError, RunError, SinkError};
use crate::leaderboard::DailyLeaderboard;
use crate::progress::RowProgress;
use crate::record::{Post, RawRecord};
use crate::repair::repair_record;
use crate::sink::{write_posts, SinkOptions};
use crate::source::read_records;
use crate::util::init_tracing_once;
use std::path::{Path, PathBuf};

/// Repair → classify/rank → write, over one posts table.
#[derive(Clone, Debug, Default)]
pub struct PostSort {
    pub(crate) opts: RunOptions,
}

/// The three derived views plus repair bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    pub top: Vec<Post>,
    pub other: Vec<Post>,
    pub daily: DailyLeaderboard,
    pub repaired: usize,
    pub skipped: Vec<RepairError>,
}

impl Partition {
    /// Posts that made it through repair.
    pub fn total(&self) -> usize {
        self.top.len() + self.other.len()
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub rows_read: usize,
    pub repaired: usize,
    pub skipped: usize,
    pub top: usize,
    pub other: usize,
    pub days: usize,
    pub top_path: PathBuf,
    pub other_path: PathBuf,
    pub daily_path: PathBuf,
}

impl PostSort {
    pub fn new() -> Self {
        Self { opts: RunOptions::default() }
    }

    pub fn from_options(opts: RunOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RunOptions {
        &self.opts
    }

    // -------- Builder methods --------
    pub fn input(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_input(path); self }
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_out_dir(dir); self }
    pub fn stems(mut self, top: impl Into<String>, other: impl Into<String>, daily: impl Into<String>) -> Self { self.opts = self.opts.with_stems(top, other, daily); self }
    pub fn detail(mut self, yes: bool) -> Self { self.opts = self.opts.with_detail(yes); self }
    pub fn structured(mut self, yes: bool) -> Self { self.opts = self.opts.with_structured(yes); self }
    pub fn pretty(mut self, yes: bool) -> Self { self.opts = self.opts.with_pretty(yes); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn thresholds(mut self, t: Thresholds) -> Self { self.opts = self.opts.with_thresholds(t); self }
    pub fn io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self { self.opts = self.opts.with_io_buffers(read_bytes, write_bytes); self }

    /// Run the whole pipeline. A source failure aborts before anything is
    /// written; every artifact write is attempted and all failures reported.
    pub fn run(self) -> Result<RunReport, RunError> {
        init_tracing_once();
        let records = read_records(&self.opts.input, self.opts.read_buffer_bytes)?;
        let rows_read = records.len();

        let progress = RowProgress::new(self.opts.progress, rows_read as u64, self.opts.progress_label.as_deref());
        let parts = partition_with(records, &self.opts.thresholds, || progress.tick());
        progress.finish("sorted");

        if !parts.skipped.is_empty() {
            tracing::warn!(skipped = parts.skipped.len(), "rows could not be repaired and were left out");
        }
        tracing::info!(
            rows = rows_read,
            repaired = parts.repaired,
            top = parts.top.len(),
            other = parts.other.len(),
            days = parts.daily.len(),
            "posts sorted"
        );

        let report = RunReport {
            rows_read,
            repaired: parts.repaired,
            skipped: parts.skipped.len(),
            top: parts.top.len(),
            other: parts.other.len(),
            days: parts.daily.len(),
            top_path: self.opts.top_path(),
            other_path: self.opts.other_path(),
            daily_path: self.opts.daily_path(),
        };
        self.write_outputs(parts)?;
        Ok(report)
    }

    fn write_outputs(&self, parts: Partition) -> Result<(), RunError> {
        let sink = SinkOptions {
            format: self.opts.format,
            detail: self.opts.detail,
            pretty: self.opts.pretty,
            write_buffer_bytes: self.opts.write_buffer_bytes,
        };
        let daily = parts.daily.into_posts();
        let jobs = [
            (Artifact::TopPosts, self.opts.top_path(), parts.top.as_slice()),
            (Artifact::OtherPosts, self.opts.other_path(), parts.other.as_slice()),
            (Artifact::DailyTopPosts, self.opts.daily_path(), daily.as_slice()),
        ];

        let mut failures = Vec::new();
        for (artifact, path, posts) in jobs {
            match write_posts(&path, posts, &sink) {
                Ok(()) => tracing::info!(%artifact, path = %path.display(), rows = posts.len(), "wrote"),
                Err(e) => {
                    tracing::error!(%artifact, path = %path.display(), error = %e, "write failed");
                    failures.push(SinkError::new(artifact, path, e));
                }
            }
        }
        if failures.is_empty() { Ok(()) } else { Err(RunError::Sink(failures)) }
    }
}

/// Repair, classify and rank an in-memory record list. No I/O.
pub fn partition_posts(records: Vec<RawRecord>, thresholds: &Thresholds) -> Partition {
    partition_with(records, thresholds, || {})
}

fn partition_with<F: FnMut()>(records: Vec<RawRecord>, thresholds: &Thresholds, mut on_row: F) -> Partition {
    let mut out = Partition::default();
    for raw in records {
        on_row();
        let corrupted = raw.is_corrupted();
        let post = match repair_record(raw) {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unrepairable row");
                out.skipped.push(e);
                continue;
            }
        };
        if corrupted {
            tracing::debug!(id = %post.id, "repaired row");
            out.repaired += 1;
        }

        out.daily.observe(&post);
        match classify(&post, thresholds) {
            Class::Top => out.top.push(post),
            Class::Other => out.other.push(post),
        }
    }
    out
}
