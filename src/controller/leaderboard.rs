use crate::error::PoolError;
use crate::model::{ColumnIndex, LeaderboardTable, RawRow};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::path::PathBuf;
use std::time::Duration;

const HEAD_SELECTOR: &str = ".Table__THEAD";
const BODY_SELECTOR: &str = ".Table__TBODY";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_html(&self) -> Result<String, PoolError>;

    fn describe(&self) -> String;
}

pub struct HttpLeaderboardSource {
    url: String,
    client: Client,
    attempts: usize,
}

impl HttpLeaderboardSource {
    /// # Errors
    /// Returns `PoolError::Network` if the http client cannot be built.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, PoolError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            url: url.to_string(),
            client,
            attempts: 2,
        })
    }

    async fn fetch_once(&self) -> Result<String, PoolError> {
        let resp = self.client.get(&self.url).send().await?;
        let resp = resp.error_for_status()?;
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl LeaderboardSource for HttpLeaderboardSource {
    async fn fetch_html(&self) -> Result<String, PoolError> {
        let mut last_err = PoolError::Network(format!("no attempt made for {}", self.url));
        for attempt in 1..=self.attempts {
            match self.fetch_once().await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    log::warn!("fetch {} attempt {attempt} failed: {err}", self.url);
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A leaderboard page saved to disk.
pub struct FileLeaderboardSource {
    path: PathBuf,
}

impl FileLeaderboardSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl LeaderboardSource for FileLeaderboardSource {
    async fn fetch_html(&self) -> Result<String, PoolError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PoolError::Io(format!("read {}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetch a leaderboard page and pull its table out.
///
/// # Errors
/// Returns an error if the fetch fails or the page has no leaderboard table.
pub async fn load_leaderboard(
    source: &dyn LeaderboardSource,
) -> Result<LeaderboardTable, PoolError> {
    let html = source.fetch_html().await?;
    let table = parse_leaderboard_html(&html)?;
    log::info!(
        "{}: {} header columns, {} body rows",
        source.describe(),
        table.columns.len(),
        table.rows.len()
    );
    Ok(table)
}

/// Extract the last leaderboard table on the page into named columns and
/// rows of cell text. Body rows without any `td` cell are dropped here.
///
/// # Errors
/// Returns `PoolError::Parse` if the page has no table head or body.
pub fn parse_leaderboard_html(html: &str) -> Result<LeaderboardTable, PoolError> {
    let document = Html::parse_document(html);
    let whitespace =
        Regex::new(r"\s+").map_err(|e| PoolError::Parse(format!("whitespace pattern: {e}")))?;

    let head = document
        .select(&selector(HEAD_SELECTOR)?)
        .last()
        .ok_or_else(|| PoolError::Parse("leaderboard table head not found".into()))?;
    let body = document
        .select(&selector(BODY_SELECTOR)?)
        .last()
        .ok_or_else(|| PoolError::Parse("leaderboard table body not found".into()))?;

    let th = selector("th")?;
    let tr = selector("tr")?;
    let td = selector("td")?;

    let columns = ColumnIndex::from_headers(head.select(&th).map(|el| cell_text(el, &whitespace)));
    let mut rows = Vec::new();
    for (idx, row) in body.select(&tr).enumerate() {
        let cells: Vec<String> = row.select(&td).map(|el| cell_text(el, &whitespace)).collect();
        // header rows repeated inside the body carry only th cells
        if cells.is_empty() {
            log::debug!("body row {}: no data cells, skipped", idx + 1);
            continue;
        }
        rows.push(RawRow { cells });
    }

    Ok(LeaderboardTable { columns, rows })
}

fn cell_text(el: ElementRef<'_>, whitespace: &Regex) -> String {
    let text = el.text().collect::<String>();
    whitespace.replace_all(text.trim(), " ").into_owned()
}

fn selector(css: &str) -> Result<Selector, PoolError> {
    Selector::parse(css).map_err(|e| PoolError::Parse(format!("selector {css}: {e}")))
}
