pub mod adjust;
pub mod aggregate;
pub mod format;
pub mod parser;

pub use adjust::*;
pub use aggregate::*;
pub use format::*;
pub use parser::*;

use crate::error::PoolError;
use crate::model::{LeaderboardTable, ScoringConfig, Standings, StandingsRow};
use crate::roster::RosterIndex;

/// Score a whole leaderboard against the pool roster.
///
/// Pure: the same roster, table and config always produce the same
/// standings. Any malformed row or unreadable score aborts the computation.
///
/// # Errors
/// Returns the first row-level `PoolError` encountered.
pub fn compute_standings(
    roster: &RosterIndex,
    table: &LeaderboardTable,
    scoring: &ScoringConfig,
) -> Result<Standings, PoolError> {
    let mut rows = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        match parse_row(idx + 1, row, &table.columns, roster, scoring)? {
            ParsedRow::Player(entry) => rows.push(StandingsRow::Player(entry)),
            ParsedRow::Placeholder(entry) => {
                log::debug!("row {}: placeholder {:?}", idx + 1, entry.text);
                rows.push(StandingsRow::Placeholder(entry));
            }
            ParsedRow::NotInPool => {}
        }
    }
    aggregate(roster, rows, scoring.drop_high)
}
