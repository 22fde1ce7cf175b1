#![allow(dead_code)]

use postsort::Post;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Build a clean post from its seven fields, in table order.
pub fn post(id: &str, title: &str, privacy: &str, likes: &str, views: &str, comments: &str, timestamp: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        privacy: privacy.to_string(),
        likes: likes.to_string(),
        views: views.to_string(),
        comments: comments.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// A post that only matters for the leaderboard (id, likes, timestamp).
pub fn liked(id: &str, likes: &str, timestamp: &str) -> Post {
    post(id, "t", "private", likes, "0", "0", timestamp)
}

/// Write `content` to `<dir>/<name>` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let p = dir.join(name);
    fs::write(&p, content).unwrap();
    p
}

/// Read a text file line-by-line (skips empty lines).
pub fn read_lines(path: &Path) -> Vec<String> {
    let f = File::open(path).unwrap();
    let r = BufReader::new(f);
    r.lines().map(|l| l.unwrap()).filter(|s| !s.is_empty()).collect()
}

/// Read a JSON artifact into a `serde_json::Value`.
pub fn read_json(path: &Path) -> serde_json::Value {
    let f = File::open(path).unwrap();
    serde_json::from_reader(BufReader::new(f)).unwrap()
}

/// Small posts table covering every path through the pipeline:
/// - 1 and 3 are top posts (public, short title, >10 comments, >9000 views)
/// - 2 is a corrupted row: its quoted title swallowed the other columns
/// - 4 has too few views, 5 is private, 6 has a 40-char title
/// - 7 is corrupted beyond repair (title contains an extra comma)
/// - 8 has an unparseable timestamp
///
/// Days: 10/11/2015 -> {1 (5 likes), 4 (40 likes), 6 (40 likes)}, 10/12/2015 -> {2 (73), 3 (12)},
/// 10/13/2015 -> {5 (0)}, Invalid Date -> {8}.
pub const SAMPLE_CSV: &str = "\
id,title,privacy,likes,views,comments,timestamp
1,short,public,5,9500,12,Fri Oct 11 04:05:42 2015
2,\"Funniest \"\"I Can't Go to Bed Yet\"\" Excuses,private,73,16735,11,Sat Oct 12 06:10:48 2015\"
3,Rust tips,public,12,12000,30,Sat Oct 12 09:00:00 2015
4,Few views,public,40,8000,12,Fri Oct 11 10:00:00 2015
5,Secret,private,0,20000,50,Sun Oct 13 01:00:00 2015
6,aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa,public,40,9500,12,Fri Oct 11 12:00:00 2015
7,\"Hello, world,public,1,2,3,Fri Oct 11 12:00:00 2015\"
8,Lost in time,public,3,9100,11,sometime last week
";

/// Write `SAMPLE_CSV` into a fresh temp dir; returns (dir, csv path).
pub fn sample_input() -> (PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap().into_path();
    let csv = write_file(&dir, "posts.csv", SAMPLE_CSV);
    (dir, csv)
}
