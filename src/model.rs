use crate::error::PoolError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Leaderboard header names the scorer reads.
pub mod columns {
    pub const PLAYER: &str = "PLAYER";
    pub const POS: &str = "POS";
    pub const SCORE: &str = "SCORE";
    pub const R1: &str = "R1";
    pub const R2: &str = "R2";
    pub const TODAY: &str = "TODAY";
    pub const THRU: &str = "THRU";
}

/// Sentinel value an owner's worst contribution starts from.
pub const NO_CONTRIBUTION: i32 = -10_000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub player_name: String,
    #[serde(alias = "owner")]
    pub owner_name: String,
}

impl RosterEntry {
    #[must_use]
    pub fn new(player_name: &str, owner_name: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            owner_name: owner_name.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<String>,
}

/// Shape of a leaderboard body row, decided once before any cell is read.
#[derive(Debug, Clone, Copy)]
pub enum RawRowKind<'a> {
    Placeholder(&'a str),
    PlayerRow(&'a RawRow),
}

impl RawRow {
    #[must_use]
    pub fn new<S: AsRef<str>>(cells: &[S]) -> Self {
        Self {
            cells: cells.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn kind(&self) -> RawRowKind<'_> {
        match self.cells.as_slice() {
            [only] => RawRowKind::Placeholder(only),
            _ => RawRowKind::PlayerRow(self),
        }
    }
}

/// Header name to column position, built once from the leaderboard head.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Empty header cells are skipped; the first of any duplicated name wins.
    #[must_use]
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions = HashMap::new();
        for (idx, header) in headers.into_iter().enumerate() {
            let name = header.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            positions.entry(name.to_string()).or_insert(idx);
        }
        Self { positions }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardTable {
    pub columns: ColumnIndex,
    pub rows: Vec<RawRow>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatus {
    #[serde(rename = "")]
    None,
    #[serde(rename = "CUT")]
    Cut,
    #[serde(rename = "DQ")]
    Dq,
}

impl PlayerStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Cut => "CUT",
            Self::Dq => "DQ",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    pub position: String,
    pub player_name: String,
    pub status: PlayerStatus,
    pub owner: String,
    pub today: String,
    pub thru: String,
    pub display_score: String,
    pub adjusted_score: i32,
}

/// A body row with a single cell, e.g. "Tee Times" or a weather delay notice.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderEntry {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StandingsRow {
    Placeholder(PlaceholderEntry),
    Player(PlayerEntry),
}

impl StandingsRow {
    #[must_use]
    pub fn as_player(&self) -> Option<&PlayerEntry> {
        match self {
            Self::Player(entry) => Some(entry),
            Self::Placeholder(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OwnerTotals {
    pub owner: String,
    pub running_total: i64,
    pub max_single_contribution: i32,
    pub scored_players: usize,
}

impl OwnerTotals {
    #[must_use]
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            running_total: 0,
            max_single_contribution: NO_CONTRIBUTION,
            scored_players: 0,
        }
    }

    /// # Errors
    /// Returns `PoolError::UnparseableScore` naming `player` if the running
    /// total would overflow.
    pub fn add(&mut self, player: &str, adjusted_score: i32) -> Result<(), PoolError> {
        self.running_total = self
            .running_total
            .checked_add(i64::from(adjusted_score))
            .ok_or_else(|| PoolError::UnparseableScore {
                player: player.to_string(),
                value: adjusted_score.to_string(),
            })?;
        self.max_single_contribution = self.max_single_contribution.max(adjusted_score);
        self.scored_players += 1;
        Ok(())
    }

    #[must_use]
    pub fn final_total(&self, drop_high: bool) -> i64 {
        if drop_high {
            // the worst contribution is an i32, so this only saturates at the i64 edge
            self.running_total
                .saturating_sub(i64::from(self.max_single_contribution))
        } else {
            self.running_total
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OwnerStanding {
    pub rank: usize,
    pub owner: String,
    pub total: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    pub players: Vec<StandingsRow>,
    pub owners: Vec<OwnerStanding>,
    pub drop_high: bool,
}

impl Standings {
    pub fn player_entries(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.players.iter().filter_map(StandingsRow::as_player)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringConfig {
    pub par: i32,
    pub cutline: i32,
    pub drop_high: bool,
}
