//! CSV input: decode the posts table into raw records, preserving row order.

use crate::error::SourceError;
use crate::record::{Post, RawRecord};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Why a table could not be decoded.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    Malformed(String),
}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => TableError::Io(io),
                other => TableError::Malformed(format!("{other:?}")),
            }
        } else {
            TableError::Malformed(e.to_string())
        }
    }
}

/// Header positions of the columns we care about. Only `id` and `title` are required.
struct Columns {
    id: usize,
    title: usize,
    privacy: Option<usize>,
    likes: Option<usize>,
    views: Option<usize>,
    comments: Option<usize>,
    timestamp: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, TableError> {
        let missing = |name: &str| TableError::Malformed(format!("header has no `{name}` column"));
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        Ok(Self {
            id: find("id").ok_or_else(|| missing("id"))?,
            title: find("title").ok_or_else(|| missing("title"))?,
            privacy: find("privacy"),
            likes: find("likes"),
            views: find("views"),
            comments: find("comments"),
            timestamp: find("timestamp"),
        })
    }

    fn decode(&self, row: &csv::StringRecord) -> Post {
        let get = |i: usize| row.get(i).unwrap_or("").to_string();
        let opt = |i: Option<usize>| i.map(get).unwrap_or_default();
        Post {
            id: get(self.id),
            title: get(self.title),
            privacy: opt(self.privacy),
            likes: opt(self.likes),
            views: opt(self.views),
            comments: opt(self.comments),
            timestamp: opt(self.timestamp),
        }
    }
}

/// Open `path` and decode every row.
pub fn read_records(path: &Path, buf_bytes: usize) -> Result<Vec<RawRecord>, SourceError> {
    let f = File::open(path).map_err(|e| open_error(path, e))?;
    let rdr = BufReader::with_capacity(buf_bytes.max(8 * 1024), f);
    let records = parse_records(rdr).map_err(|e| match e {
        TableError::Io(source) => SourceError::Unreadable { path: path.to_path_buf(), source },
        TableError::Malformed(reason) => SourceError::Malformed { path: path.to_path_buf(), reason },
    })?;
    if records.is_empty() {
        return Err(SourceError::Empty { path: path.to_path_buf() });
    }
    tracing::info!(path = %path.display(), rows = records.len(), "loaded posts table");
    Ok(records)
}

/// Decode a table with a header row from any reader.
///
/// Rows are read flexibly: a row whose title swallowed the remaining columns
/// comes back short and is tagged `RawRecord::Corrupted`. Blank input yields
/// an empty list. I/O failures are kept apart from decode failures.
pub fn parse_records<R: Read>(rdr: R) -> Result<Vec<RawRecord>, TableError> {
    let mut csv_rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let headers = csv_rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let cols = Columns::from_headers(&headers)?;

    let mut out = Vec::new();
    for (idx, row) in csv_rdr.records().enumerate() {
        let row = row.map_err(|e| match TableError::from(e) {
            TableError::Malformed(reason) => TableError::Malformed(format!("row {}: {reason}", idx + 1)),
            io => io,
        })?;
        out.push(RawRecord::from_post(cols.decode(&row)));
    }
    Ok(out)
}

fn open_error(path: &Path, e: io::Error) -> SourceError {
    if e.kind() == io::ErrorKind::NotFound {
        SourceError::NotFound { path: path.to_path_buf() }
    } else {
        SourceError::Unreadable { path: path.to_path_buf(), source: e }
    }
}
