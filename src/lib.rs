mod config;
mod date;
mod error;
mod record;
mod numeric;
mod repair;
mod classify;
mod leaderboard;

mod source;
mod sink;
mod progress;
mod util;
mod pipeline;

pub use crate::config::{OutputFormat, RunOptions, Thresholds};
pub use crate::date::{parse_timestamp, DateKey, INVALID_DATE};
pub use crate::error::{Artifact, RepairError, RunError, SinkError, SourceError};
pub use crate::record::{Post, RawRecord, POST_FIELDS};
pub use crate::pipeline::{partition_posts, Partition, PostSort, RunReport};

// Core steps, usable without any I/O.
pub use crate::repair::{repair_record, split_merged_title};
pub use crate::classify::{classify, is_top_post, Class};
pub use crate::leaderboard::{fold_daily, DailyLeaderboard};
pub use crate::numeric::{coerce_counter, exceeds, outranks};

// I/O collaborators.
pub use crate::source::{parse_records, read_records, TableError};
pub use crate::sink::{encode_posts, write_posts, SinkOptions};

pub use crate::progress::make_count_progress;
pub use crate::util::init_tracing_once;
