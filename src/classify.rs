use crate::config::Thresholds;
use crate::numeric::exceeds;
use crate::record::Post;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    Top,
    Other,
}

/// A post is `Top` when its privacy matches, its title is short enough,
/// and both comments and views beat their thresholds.
pub fn classify(post: &Post, t: &Thresholds) -> Class {
    let is_top = post.privacy == t.privacy
        && post.title.chars().count() < t.max_title_chars
        && exceeds(&post.comments, t.min_comments)
        && exceeds(&post.views, t.min_views);
    if is_top { Class::Top } else { Class::Other }
}

/// Classify with the stock thresholds.
pub fn is_top_post(post: &Post) -> bool {
    classify(post, &Thresholds::default()) == Class::Top
}
