use anyhow::{Context, Result};
use clap::Parser;
use postsort::{init_tracing_once, PostSort, RunOptions, Thresholds};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postsort", about = "Split a posts CSV into top, other and daily-best lists")]
struct Cli {
    /// Posts table to read
    #[arg(long, short, default_value = "posts.csv")]
    input: PathBuf,

    /// Directory for the three output files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Write every post field instead of ids only
    #[arg(long)]
    detail: bool,

    /// Write JSON lists instead of CSV
    #[arg(long = "json", alias = "structured")]
    structured: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "structured")]
    pretty: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Required privacy value for a top post
    #[arg(long, default_value = "public")]
    privacy: String,

    /// Titles must be shorter than this many characters
    #[arg(long, default_value_t = 40)]
    max_title_len: usize,

    /// Comments must exceed this
    #[arg(long, default_value_t = 10.0)]
    min_comments: f64,

    /// Views must exceed this
    #[arg(long, default_value_t = 9000.0)]
    min_views: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_once();

    let thresholds = Thresholds {
        privacy: cli.privacy,
        max_title_chars: cli.max_title_len,
        min_comments: cli.min_comments,
        min_views: cli.min_views,
    };
    let opts = RunOptions::default()
        .with_input(&cli.input)
        .with_out_dir(&cli.out_dir)
        .with_detail(cli.detail)
        .with_structured(cli.structured)
        .with_pretty(cli.pretty)
        .with_progress(!cli.no_progress)
        .with_thresholds(thresholds);

    let report = PostSort::from_options(opts)
        .run()
        .with_context(|| format!("sorting posts from {}", cli.input.display()))?;

    println!(
        "{} rows ({} repaired, {} skipped): {} top, {} other, {} days",
        report.rows_read, report.repaired, report.skipped, report.top, report.other, report.days
    );
    println!("  {}", report.top_path.display());
    println!("  {}", report.other_path.display());
    println!("  {}", report.daily_path.display());
    Ok(())
}
