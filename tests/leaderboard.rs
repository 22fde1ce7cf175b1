#[path = "common/mod.rs"]
mod common;

use common::*;
use postsort::{coerce_counter, fold_daily, outranks, parse_timestamp, partition_posts, parse_records, DailyLeaderboard, DateKey, Thresholds, INVALID_DATE};

const DAY: &str = "Fri Oct 11 04:05:42 2015";
const LATER_SAME_DAY: &str = "Fri Oct 11 22:00:00 2015";

fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

#[test]
fn more_likes_later_takes_over() {
    let posts = [liked("a", "5", DAY), liked("b", "10", LATER_SAME_DAY)];
    let board = fold_daily(DailyLeaderboard::new(), &posts);
    assert_eq!(board.len(), 1);
    assert_eq!(board.champion(&key("10/11/2015")).unwrap().id, "b");
}

#[test]
fn fewer_likes_later_does_not() {
    let posts = [liked("a", "10", DAY), liked("b", "5", LATER_SAME_DAY)];
    let board = fold_daily(DailyLeaderboard::new(), &posts);
    assert_eq!(board.champion(&key("10/11/2015")).unwrap().id, "a");
}

#[test]
fn ties_keep_first_seen() {
    let mut board = DailyLeaderboard::new();
    assert!(board.observe(&liked("a", "7", DAY)));
    assert!(!board.observe(&liked("b", "7", LATER_SAME_DAY)));
    assert_eq!(board.champion(&key("10/11/2015")).unwrap().id, "a");
}

/// The first post of a day wins even with junk likes; a numeric one replaces it
/// only if it compares greater, which junk never does.
#[test]
fn first_post_of_day_wins_unconditionally() {
    let mut board = DailyLeaderboard::new();
    assert!(board.observe(&liked("junk", "n/a", DAY)));
    assert!(!board.observe(&liked("real", "100", DAY)));
    assert_eq!(board.champion(&key("10/11/2015")).unwrap().id, "junk");
}

/// A blank likes value reads as zero on the champion side, so a later post
/// with any likes takes the day.
#[test]
fn blank_likes_champion_is_replaced() {
    let posts = [liked("a", "", DAY), liked("b", "100", LATER_SAME_DAY)];
    let board = fold_daily(DailyLeaderboard::new(), &posts);
    assert_eq!(board.champion(&key("10/11/2015")).unwrap().id, "b");

    let posts = [liked("a", "   ", DAY), liked("b", "0", DAY), liked("c", "1", DAY)];
    let board = fold_daily(DailyLeaderboard::new(), &posts);
    assert_eq!(board.champion(&key("10/11/2015")).unwrap().id, "c");
}

#[test]
fn outranks_compares_likes() {
    assert!(outranks("10", "5"));
    assert!(!outranks("5", "5"));
    assert!(outranks("1", ""));
    assert!(!outranks("0", ""));
    assert!(!outranks("", "5"));
    assert!(!outranks("100", "n/a"));
}

#[test]
fn unparseable_timestamps_share_one_bucket() {
    let posts = [
        liked("a", "1", "not a date"),
        liked("b", "3", ""),
        liked("c", "2", "Fri Foo 11 04:05:42 2015"),
    ];
    let board = fold_daily(DailyLeaderboard::new(), &posts);
    assert_eq!(board.len(), 1);
    assert_eq!(board.champion(&DateKey::Invalid).unwrap().id, "b");
    assert_eq!(DateKey::Invalid.to_string(), INVALID_DATE);
}

#[test]
fn date_keys_format_month_day_year() {
    assert_eq!(DateKey::from_timestamp(DAY).to_string(), "10/11/2015");
    assert_eq!(DateKey::from_timestamp("Mon Jan  5 23:59:59 2015").to_string(), "1/5/2015");
    assert_eq!(DateKey::from_timestamp("jan 05 7:00:00 2015").to_string(), "1/5/2015");
    assert_eq!(key("1/5/2015"), DateKey::from_timestamp("Mon Jan 5 00:00:00 2015"));
    assert!(parse_timestamp("Fri Oct 32 04:05:42 2015").is_none());
}

/// Days iterate in the order they were first seen, not calendar order.
#[test]
fn days_keep_first_seen_order() {
    let posts = [
        liked("x", "1", "Mon Oct 14 10:00:00 2015"),
        liked("y", "1", DAY),
        liked("z", "9", "Mon Oct 14 11:00:00 2015"),
    ];
    let board = fold_daily(DailyLeaderboard::new(), &posts);
    let days: Vec<String> = board.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(days, ["10/14/2015", "10/11/2015"]);
    let ids: Vec<String> = board.into_posts().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["z", "y"]);
}

/// Each champion has at least as many likes as every post sharing its day.
#[test]
fn champions_dominate_their_day() {
    let records = parse_records(SAMPLE_CSV.as_bytes()).unwrap();
    let parts = partition_posts(records, &Thresholds::default());
    let all: Vec<_> = parts.top.iter().chain(parts.other.iter()).collect();

    for (day, champ) in parts.daily.iter() {
        let best = coerce_counter(&champ.likes).unwrap_or(0.0);
        for p in all.iter().filter(|p| DateKey::from_timestamp(&p.timestamp) == *day) {
            assert!(coerce_counter(&p.likes).unwrap_or(0.0) <= best, "{} beats champion {} on {day}", p.id, champ.id);
        }
    }

    let winners: Vec<(String, String)> = parts.daily.iter().map(|(k, p)| (k.to_string(), p.id.clone())).collect();
    assert_eq!(
        winners,
        [
            ("10/11/2015".to_string(), "4".to_string()),
            ("10/12/2015".to_string(), "2".to_string()),
            ("10/13/2015".to_string(), "5".to_string()),
            (INVALID_DATE.to_string(), "8".to_string()),
        ]
    );
}
