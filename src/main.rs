use anyhow::{Context, Result};
use clap::Parser;
use rusty_golf_pool::config::{Cli, LeaderboardLocation, OutputFormat, load_config};
use rusty_golf_pool::controller::leaderboard::{
    FileLeaderboardSource, HttpLeaderboardSource, LeaderboardSource, load_leaderboard,
};
use rusty_golf_pool::roster::load_roster_csv;
use rusty_golf_pool::view::standings::{render_html, render_json, render_text};
use rusty_golf_pool::{RosterIndex, compute_standings};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(Cli::parse())?;

    let entries = load_roster_csv(&config.roster_csv)
        .with_context(|| format!("load roster {}", config.roster_csv.display()))?;
    let roster = match &config.owners {
        Some(owners) => RosterIndex::build_with_owners(&entries, owners)?,
        None => RosterIndex::build(&entries)?,
    };

    let source: Box<dyn LeaderboardSource> = match &config.leaderboard {
        LeaderboardLocation::Url(url) => Box::new(HttpLeaderboardSource::new(url, config.timeout)?),
        LeaderboardLocation::HtmlFile(path) => Box::new(FileLeaderboardSource::new(path.clone())),
    };
    let table = load_leaderboard(source.as_ref())
        .await
        .with_context(|| format!("load leaderboard from {}", source.describe()))?;

    let standings = compute_standings(&roster, &table, &config.scoring)?;
    log::info!(
        "scored {} drafted players for {} owners",
        standings.player_entries().count(),
        standings.owners.len()
    );

    let generated = chrono::Local::now().naive_local();
    match config.format {
        OutputFormat::Text => print!("{}", render_text(&standings, generated)),
        OutputFormat::Json => println!("{}", render_json(&standings)?),
        OutputFormat::Html => println!("{}", render_html(&standings, generated).into_string()),
    }
    Ok(())
}
