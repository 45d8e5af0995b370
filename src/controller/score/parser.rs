use super::adjust::adjust_score;
use crate::error::PoolError;
use crate::model::{
    ColumnIndex, PlaceholderEntry, PlayerEntry, RawRow, RawRowKind, ScoringConfig, columns,
};
use crate::roster::RosterIndex;

/// Shown in TODAY/THRU when the leaderboard has no live-round columns.
pub const NO_TODAY: &str = "";
pub const ROUND_FINISHED: &str = "F";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRow {
    Placeholder(PlaceholderEntry),
    /// A player nobody in the pool drafted.
    NotInPool,
    Player(PlayerEntry),
}

/// Classify one leaderboard body row and, for a drafted player, score it.
///
/// `row_no` is the 1-based body row used in error messages.
///
/// # Errors
/// Returns `PoolError::MalformedRow` if a needed column is missing from the
/// header or the row, and `PoolError::UnparseableScore` if the score or a
/// needed round cell is not a number.
pub fn parse_row(
    row_no: usize,
    row: &RawRow,
    header: &ColumnIndex,
    roster: &RosterIndex,
    scoring: &ScoringConfig,
) -> Result<ParsedRow, PoolError> {
    let row = match row.kind() {
        RawRowKind::Placeholder(text) => {
            return Ok(ParsedRow::Placeholder(PlaceholderEntry {
                text: text.to_string(),
            }));
        }
        RawRowKind::PlayerRow(row) => row,
    };

    let player_name = required_cell(row_no, row, header, columns::PLAYER)?;
    let Some(owner) = roster.owner_of(player_name) else {
        return Ok(ParsedRow::NotInPool);
    };

    let position = required_cell(row_no, row, header, columns::POS)?;
    let raw_score = required_cell(row_no, row, header, columns::SCORE)?;
    let adjustment = adjust_score(
        player_name,
        raw_score,
        || required_cell(row_no, row, header, columns::R1).map(str::to_string),
        || required_cell(row_no, row, header, columns::R2).map(str::to_string),
        scoring.par,
        scoring.cutline,
    )?;

    let (today, thru) = if header.contains(columns::TODAY) && header.contains(columns::THRU) {
        (
            required_cell(row_no, row, header, columns::TODAY)?,
            required_cell(row_no, row, header, columns::THRU)?,
        )
    } else {
        (NO_TODAY, ROUND_FINISHED)
    };

    Ok(ParsedRow::Player(PlayerEntry {
        position: position.to_string(),
        player_name: player_name.to_string(),
        status: adjustment.status,
        owner: owner.to_string(),
        today: today.to_string(),
        thru: thru.to_string(),
        display_score: adjustment.display_score,
        adjusted_score: adjustment.adjusted_score,
    }))
}

fn required_cell<'a>(
    row_no: usize,
    row: &'a RawRow,
    header: &ColumnIndex,
    name: &str,
) -> Result<&'a str, PoolError> {
    let idx = header.get(name).ok_or_else(|| PoolError::MalformedRow {
        row: row_no,
        reason: format!("leaderboard header has no {name} column"),
    })?;
    row.cell(idx).ok_or_else(|| PoolError::MalformedRow {
        row: row_no,
        reason: format!(
            "{name} is column {idx} but the row has {} cells",
            row.cell_count()
        ),
    })
}
