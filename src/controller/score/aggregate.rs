use crate::error::PoolError;
use crate::model::{OwnerStanding, OwnerTotals, PlayerEntry, Standings, StandingsRow};
use crate::roster::RosterIndex;
use std::collections::BTreeMap;

/// Fold every scored player into its owner's running total and worst score.
///
/// Every roster owner gets an entry, including owners with nobody scored.
///
/// # Errors
/// Returns `PoolError::UnknownOwner` if an entry's owner is not in the roster,
/// or `PoolError::UnparseableScore` if an owner's total overflows.
pub fn tally_owners<'a, I>(roster: &RosterIndex, entries: I) -> Result<Vec<OwnerTotals>, PoolError>
where
    I: IntoIterator<Item = &'a PlayerEntry>,
{
    let mut totals: BTreeMap<&str, OwnerTotals> = roster
        .owners()
        .map(|owner| (owner, OwnerTotals::new(owner)))
        .collect();

    for entry in entries {
        let owner_totals =
            totals
                .get_mut(entry.owner.as_str())
                .ok_or_else(|| PoolError::UnknownOwner {
                    player: entry.player_name.clone(),
                    owner: entry.owner.clone(),
                })?;
        owner_totals.add(&entry.player_name, entry.adjusted_score)?;
    }

    Ok(totals.into_values().collect())
}

/// Rank owners by final total, lowest first. Ties keep owner name order.
#[must_use]
pub fn rank_owners(totals: &[OwnerTotals], drop_high: bool) -> Vec<OwnerStanding> {
    let mut finals: Vec<(&str, i64)> = totals
        .iter()
        .map(|t| {
            if drop_high && t.scored_players == 0 {
                log::warn!(
                    "{} has no scored players; dropping the empty high score leaves {}",
                    t.owner,
                    t.final_total(true)
                );
            }
            (t.owner.as_str(), t.final_total(drop_high))
        })
        .collect();

    // sort_by_key is stable
    finals.sort_by_key(|&(_, total)| total);

    finals
        .into_iter()
        .enumerate()
        .map(|(i, (owner, total))| OwnerStanding {
            rank: i + 1,
            owner: owner.to_string(),
            total,
        })
        .collect()
}

/// Build both output tables from rows already in leaderboard order.
///
/// # Errors
/// Returns `PoolError::UnknownOwner` if a player row names an owner the roster
/// does not have, or `PoolError::UnparseableScore` if a total overflows.
pub fn aggregate(
    roster: &RosterIndex,
    players: Vec<StandingsRow>,
    drop_high: bool,
) -> Result<Standings, PoolError> {
    let totals = tally_owners(roster, players.iter().filter_map(StandingsRow::as_player))?;
    let owners = rank_owners(&totals, drop_high);
    Ok(Standings {
        players,
        owners,
        drop_high,
    })
}
