#![allow(dead_code)]

use rusty_golf_pool::RosterIndex;
use rusty_golf_pool::model::{ColumnIndex, LeaderboardTable, RawRow, RosterEntry, ScoringConfig};

pub const FULL_HEADER: [&str; 10] = [
    "", "POS", "PLAYER", "SCORE", "TODAY", "THRU", "R1", "R2", "R3", "R4",
];
pub const FINAL_HEADER: [&str; 9] = [
    "", "POS", "PLAYER", "SCORE", "R1", "R2", "R3", "R4", "TOT",
];

pub fn scoring(drop_high: bool) -> ScoringConfig {
    ScoringConfig {
        par: 72,
        cutline: 8,
        drop_high,
    }
}

pub fn roster(pairs: &[(&str, &str)]) -> RosterIndex {
    let entries: Vec<RosterEntry> = pairs
        .iter()
        .map(|(player, owner)| RosterEntry::new(player, owner))
        .collect();
    RosterIndex::build(&entries).expect("test roster has unique players")
}

/// A live-round row under `FULL_HEADER`.
pub fn live_row(pos: &str, player: &str, score: &str, r1: &str, r2: &str) -> RawRow {
    RawRow::new(&["", pos, player, score, "-1", "12", r1, r2, "", ""])
}

pub fn table(header: &[&str], rows: Vec<RawRow>) -> LeaderboardTable {
    LeaderboardTable {
        columns: ColumnIndex::from_headers(header),
        rows,
    }
}
