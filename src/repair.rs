//! Row repair: rebuild a post whose unquoted title swallowed the rest of the row.

use crate::error::RepairError;
use crate::record::{Post, RawRecord};

const DELIMITER: char = ',';

/// Return a well-formed post for any raw record.
/// Complete records pass through untouched.
pub fn repair_record(raw: RawRecord) -> Result<Post, RepairError> {
    match raw {
        RawRecord::Complete(post) => Ok(post),
        RawRecord::Corrupted { id, title } => split_merged_title(id, &title),
    }
}

/// Split `title,privacy,likes,views,comments,timestamp` back into fields.
/// Fails unless the split yields exactly six parts.
pub fn split_merged_title(id: String, merged: &str) -> Result<Post, RepairError> {
    let parts: Vec<&str> = merged.split(DELIMITER).collect();
    let [title, privacy, likes, views, comments, timestamp] = parts[..] else {
        return Err(RepairError::Unrepairable { id, parts: parts.len() });
    };
    Ok(Post {
        id,
        title: title.to_string(),
        privacy: privacy.to_string(),
        likes: likes.to_string(),
        views: views.to_string(),
        comments: comments.to_string(),
        timestamp: timestamp.to_string(),
    })
}
