use std::path::{Path, PathBuf};

/// Encoding of the three output artifacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Cut-offs a post must beat to count as a top post.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    pub privacy: String,          // exact match
    pub max_title_chars: usize,   // exclusive
    pub min_comments: f64,        // exclusive
    pub min_views: f64,           // exclusive
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            privacy: "public".to_string(),
            max_title_chars: 40,
            min_comments: 10.0,
            min_views: 9000.0,
        }
    }
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub top_stem: String,
    pub other_stem: String,
    pub daily_stem: String,
    pub detail: bool,                 // all post fields instead of id only
    pub format: OutputFormat,
    pub pretty: bool,                 // JSON only
    pub progress: bool,
    pub progress_label: Option<String>,
    pub thresholds: Thresholds,

    // IO tuning
    pub read_buffer_bytes: usize,
    pub write_buffer_bytes: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("posts.csv"),
            out_dir: PathBuf::from("."),
            top_stem: "top_posts".to_string(),
            other_stem: "other_posts".to_string(),
            daily_stem: "daily_top_posts".to_string(),
            detail: false,
            format: OutputFormat::Csv,
            pretty: false,
            progress: true,
            progress_label: None,
            thresholds: Thresholds::default(),

            read_buffer_bytes: 64 * 1024,
            write_buffer_bytes: 64 * 1024,
        }
    }
}

impl RunOptions {
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = path.as_ref().to_path_buf();
        self
    }
    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_stems(mut self, top: impl Into<String>, other: impl Into<String>, daily: impl Into<String>) -> Self {
        self.top_stem = top.into();
        self.other_stem = other.into();
        self.daily_stem = daily.into();
        self
    }
    pub fn with_detail(mut self, yes: bool) -> Self {
        self.detail = yes;
        self
    }
    /// `true` selects JSON list output, `false` delimited text.
    pub fn with_structured(mut self, yes: bool) -> Self {
        self.format = if yes { OutputFormat::Json } else { OutputFormat::Csv };
        self
    }
    pub fn with_pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_thresholds(mut self, t: Thresholds) -> Self {
        self.thresholds = t;
        self
    }
    pub fn with_io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self {
        self.read_buffer_bytes = read_bytes.max(8 * 1024);
        self.write_buffer_bytes = write_bytes.max(8 * 1024);
        self
    }

    fn artifact_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{stem}.{}", self.format.extension()))
    }
    pub fn top_path(&self) -> PathBuf { self.artifact_path(&self.top_stem) }
    pub fn other_path(&self) -> PathBuf { self.artifact_path(&self.other_stem) }
    pub fn daily_path(&self) -> PathBuf { self.artifact_path(&self.daily_stem) }
}
