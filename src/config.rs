use crate::model::ScoringConfig;
use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ROSTER_FILE_NAME: &str = "draft_results.csv";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Fantasy golf pool standings from a live leaderboard", long_about = None)]
pub struct Cli {
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    /// name,value csv holding url, data folder, par and cutline in that order
    #[arg(long)]
    pub constants_csv: Option<PathBuf>,
    #[arg(long)]
    pub url: Option<String>,
    /// Score a saved leaderboard page instead of fetching one
    #[arg(long)]
    pub leaderboard_html: Option<PathBuf>,
    #[arg(long)]
    pub data_folder: Option<PathBuf>,
    #[arg(long)]
    pub roster_csv: Option<PathBuf>,
    #[arg(long, allow_hyphen_values = true)]
    pub par: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub cutline: Option<i32>,
    /// Drop each owner's worst player score (default true)
    #[arg(long)]
    pub drop_high: Option<bool>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub leaderboard_html: Option<PathBuf>,
    pub data_folder: Option<PathBuf>,
    pub roster_csv: Option<PathBuf>,
    pub owners: Option<Vec<String>>,
    pub par: Option<i32>,
    pub cutline: Option<i32>,
    pub drop_high: Option<bool>,
    pub format: Option<OutputFormat>,
    pub timeout_secs: Option<u64>,
}

/// Tournament constants in the legacy one-value-per-row layout.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Constants {
    pub url: Option<String>,
    pub data_folder: Option<PathBuf>,
    pub par: Option<i32>,
    pub cutline: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardLocation {
    Url(String),
    HtmlFile(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub leaderboard: LeaderboardLocation,
    pub roster_csv: PathBuf,
    pub owners: Option<Vec<String>>,
    pub scoring: ScoringConfig,
    pub format: OutputFormat,
    pub timeout: Duration,
}

/// Merge CLI flags over the TOML file over the constants csv.
///
/// # Errors
/// Returns an error if a config file is unreadable or invalid, or if par,
/// cutline, a leaderboard source or a roster location is missing.
pub fn load_config(cli: Cli) -> Result<AppConfig> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };
    let constants = match cli.constants_csv.as_ref() {
        Some(path) => load_constants_csv(path)?,
        None => Constants::default(),
    };

    let par = cli
        .par
        .or(file_config.par)
        .or(constants.par)
        .ok_or_else(|| anyhow!("missing --par"))?;
    let cutline = cli
        .cutline
        .or(file_config.cutline)
        .or(constants.cutline)
        .ok_or_else(|| anyhow!("missing --cutline"))?;
    let drop_high = cli.drop_high.or(file_config.drop_high).unwrap_or(true);

    let html_file = cli.leaderboard_html.or(file_config.leaderboard_html);
    let url = cli.url.or(file_config.url).or(constants.url);
    let leaderboard = match (html_file, url) {
        (Some(path), _) => LeaderboardLocation::HtmlFile(path),
        (None, Some(url)) => LeaderboardLocation::Url(url),
        (None, None) => return Err(anyhow!("missing --url or --leaderboard-html")),
    };

    let roster_csv = match cli.roster_csv.or(file_config.roster_csv) {
        Some(path) => path,
        None => cli
            .data_folder
            .or(file_config.data_folder)
            .or(constants.data_folder)
            .map(|folder| folder.join(ROSTER_FILE_NAME))
            .ok_or_else(|| anyhow!("missing --roster-csv or --data-folder"))?,
    };

    let timeout_secs = cli
        .timeout_secs
        .or(file_config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(AppConfig {
        leaderboard,
        roster_csv,
        owners: file_config.owners,
        scoring: ScoringConfig {
            par,
            cutline,
            drop_high,
        },
        format: cli.format.or(file_config.format).unwrap_or_default(),
        timeout: Duration::from_secs(timeout_secs),
    })
}

#[derive(Debug, Deserialize)]
struct ConstantRow {
    value: String,
}

/// Read the constants csv: a header row, then url, data folder, par and
/// cutline as the `value` column of rows one to four.
///
/// # Errors
/// Returns an error if the file is unreadable, has no `value` column, or
/// par/cutline are not integers.
pub fn load_constants_csv(path: &Path) -> Result<Constants> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open constants csv {}", path.display()))?;
    let values = rdr
        .deserialize::<ConstantRow>()
        .map(|row| row.map(|r| r.value))
        .collect::<Result<Vec<String>, _>>()
        .with_context(|| format!("parse constants csv {}", path.display()))?;

    let int_at = |idx: usize, name: &str| -> Result<Option<i32>> {
        values
            .get(idx)
            .map(|v| {
                v.parse::<i32>()
                    .with_context(|| format!("{name} in {} is not an integer: {v:?}", path.display()))
            })
            .transpose()
    };

    Ok(Constants {
        url: values.first().cloned(),
        data_folder: values.get(1).map(PathBuf::from),
        par: int_at(2, "par")?,
        cutline: int_at(3, "cutline")?,
    })
}
