use super::format::format_cut_score;
use crate::error::PoolError;
use crate::model::PlayerStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAdjustment {
    pub status: PlayerStatus,
    /// What the score column shows for this player.
    pub display_score: String,
    pub adjusted_score: i32,
}

/// Turn a leaderboard SCORE cell into the pool's adjusted score.
///
/// Missed cut and withdrawal are rebuilt from the first two rounds against
/// par, a disqualification counts as even, and anything else is the
/// to-par score capped at `cutline`. The round readers are only called for
/// a cut or withdrawn player.
///
/// # Errors
/// Returns `PoolError::UnparseableScore` if the score or a needed round is
/// not an integer, or whatever the round readers return.
pub fn adjust_score<R1, R2>(
    player: &str,
    raw_score: &str,
    r1: R1,
    r2: R2,
    par: i32,
    cutline: i32,
) -> Result<ScoreAdjustment, PoolError>
where
    R1: FnOnce() -> Result<String, PoolError>,
    R2: FnOnce() -> Result<String, PoolError>,
{
    match raw_score {
        "CUT" | "WD" => {
            let r1 = parse_strokes(player, &r1()?)?;
            let r2 = parse_strokes(player, &r2()?)?;
            let adjusted_score = r1
                .checked_add(r2)
                .and_then(|strokes| strokes.checked_sub(par.checked_mul(2)?))
                .ok_or_else(|| unparseable(player, &format!("{r1} + {r2}")))?;
            Ok(ScoreAdjustment {
                status: PlayerStatus::Cut,
                display_score: format_cut_score(adjusted_score),
                adjusted_score,
            })
        }
        "DQ" => Ok(ScoreAdjustment {
            status: PlayerStatus::Dq,
            display_score: "DQ".to_string(),
            adjusted_score: 0,
        }),
        _ => {
            let score = parse_to_par(player, raw_score)?;
            Ok(ScoreAdjustment {
                status: PlayerStatus::None,
                display_score: raw_score.to_string(),
                adjusted_score: score.min(cutline),
            })
        }
    }
}

/// `E`, or an integer with an optional leading `+`.
///
/// # Errors
/// Returns `PoolError::UnparseableScore` for anything else.
pub fn parse_to_par(player: &str, raw_score: &str) -> Result<i32, PoolError> {
    if raw_score == "E" {
        return Ok(0);
    }
    raw_score
        .strip_prefix('+')
        .unwrap_or(raw_score)
        .parse::<i32>()
        .map_err(|_| unparseable(player, raw_score))
}

fn parse_strokes(player: &str, round: &str) -> Result<i32, PoolError> {
    round
        .trim()
        .parse::<i32>()
        .map_err(|_| unparseable(player, round))
}

fn unparseable(player: &str, value: &str) -> PoolError {
    PoolError::UnparseableScore {
        player: player.to_string(),
        value: value.to_string(),
    }
}
