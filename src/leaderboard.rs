//! Daily leaderboard: one champion post per calendar day, chosen by likes.

use crate::date::DateKey;
use crate::numeric::outranks;
use crate::record::Post;
use ahash::AHashMap;

/// Running "most liked post per day" accumulator.
///
/// The first post seen for a day is champion unconditionally; later posts take
/// over only with strictly more likes. Days iterate in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct DailyLeaderboard {
    slots: Vec<(DateKey, Post)>,
    index: AHashMap<DateKey, usize>,
}

impl DailyLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one post in. Returns `true` if it became the champion of its day.
    pub fn observe(&mut self, post: &Post) -> bool {
        let key = DateKey::from_timestamp(&post.timestamp);
        if !key.is_valid() {
            tracing::debug!(id = %post.id, timestamp = %post.timestamp, "timestamp does not parse; using shared invalid-date bucket");
        }
        match self.index.get(&key) {
            None => {
                self.index.insert(key, self.slots.len());
                self.slots.push((key, post.clone()));
                true
            }
            Some(&i) => {
                let champion = &mut self.slots[i].1;
                if outranks(&post.likes, &champion.likes) {
                    *champion = post.clone();
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn champion(&self, key: &DateKey) -> Option<&Post> {
        self.index.get(key).map(|&i| &self.slots[i].1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &Post)> {
        self.slots.iter().map(|(k, p)| (k, p))
    }

    /// Champions in first-seen day order.
    pub fn into_posts(self) -> Vec<Post> {
        self.slots.into_iter().map(|(_, p)| p).collect()
    }
}

/// Left-fold a post sequence into a leaderboard, continuing from `acc`.
pub fn fold_daily<'a, I>(acc: DailyLeaderboard, posts: I) -> DailyLeaderboard
where
    I: IntoIterator<Item = &'a Post>,
{
    posts.into_iter().fold(acc, |mut board, post| {
        board.observe(post);
        board
    })
}
