//! Output writers: delimited text with a header, or a JSON list.
//!
//! Every artifact is written to `<path>.inprogress` first and renamed into
//! place once flushed, so a failed write never leaves a truncated file
//! under the final name.

use crate::config::OutputFormat;
use crate::record::{Post, POST_FIELDS};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// How a list of posts is rendered.
#[derive(Clone, Copy, Debug)]
pub struct SinkOptions {
    pub format: OutputFormat,
    pub detail: bool,
    pub pretty: bool,
    pub write_buffer_bytes: usize,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self { format: OutputFormat::Csv, detail: false, pretty: false, write_buffer_bytes: 64 * 1024 }
    }
}

/// Encode `posts` into any writer.
pub fn encode_posts<W: Write>(w: W, posts: &[Post], opts: &SinkOptions) -> io::Result<()> {
    match opts.format {
        OutputFormat::Csv => encode_csv(w, posts, opts.detail),
        OutputFormat::Json => encode_json(w, posts, opts.detail, opts.pretty),
    }
}

fn encode_csv<W: Write>(w: W, posts: &[Post], detail: bool) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    if detail {
        wtr.write_record(POST_FIELDS)?;
        for p in posts {
            wtr.write_record(p.fields())?;
        }
    } else {
        wtr.write_record(["id"])?;
        for p in posts {
            wtr.write_record([p.id.as_str()])?;
        }
    }
    wtr.flush()
}

fn encode_json<W: Write>(mut w: W, posts: &[Post], detail: bool, pretty: bool) -> io::Result<()> {
    if detail {
        write_json(&mut w, posts, pretty)?;
    } else {
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        write_json(&mut w, &ids, pretty)?;
    }
    if pretty {
        w.write_all(b"\n")?;
    }
    w.flush()
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(w: &mut W, value: &T, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(w, value)?;
    } else {
        serde_json::to_writer(w, value)?;
    }
    Ok(())
}

/// Write `posts` to `path` through a staging file.
pub fn write_posts(path: &Path, posts: &[Post], opts: &SinkOptions) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = staging_path(path);
    let res = (|| -> io::Result<()> {
        let f = File::create(&tmp)?;
        let mut w = BufWriter::with_capacity(opts.write_buffer_bytes.max(8 * 1024), f);
        encode_posts(&mut w, posts, opts)?;
        w.flush()?;
        Ok(())
    })();
    if let Err(e) = res {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".inprogress");
    path.with_file_name(name)
}
