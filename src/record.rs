use serde::Serialize;

/// Column order of a well-formed posts table.
pub const POST_FIELDS: [&str; 7] = ["id", "title", "privacy", "likes", "views", "comments", "timestamp"];

/// A post after repair. Counters stay textual; see `numeric::coerce_counter`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub privacy: String,
    pub likes: String,
    pub views: String,
    pub comments: String,
    pub timestamp: String,
}

impl Post {
    /// Field values in `POST_FIELDS` order.
    pub fn fields(&self) -> [&str; 7] {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.privacy.as_str(),
            self.likes.as_str(),
            self.views.as_str(),
            self.comments.as_str(),
            self.timestamp.as_str(),
        ]
    }

    pub fn has_timestamp(&self) -> bool {
        !self.timestamp.trim().is_empty()
    }
}

/// A row as decoded from the table.
///
/// `Corrupted` rows lost their column alignment: everything after `id` ended up
/// in `title`, joined by the delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawRecord {
    Complete(Post),
    Corrupted { id: String, title: String },
}

impl RawRecord {
    /// Classify a decoded row by the presence of a non-empty timestamp.
    pub fn from_post(post: Post) -> Self {
        if post.has_timestamp() {
            RawRecord::Complete(post)
        } else {
            RawRecord::Corrupted { id: post.id, title: post.title }
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RawRecord::Complete(p) => &p.id,
            RawRecord::Corrupted { id, .. } => id,
        }
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, RawRecord::Corrupted { .. })
    }
}
