mod common;

use common::{FULL_HEADER, live_row, roster, scoring, table};
use rusty_golf_pool::controller::score::{rank_owners, tally_owners};
use rusty_golf_pool::model::{
    NO_CONTRIBUTION, OwnerTotals, PlayerStatus, RawRow, StandingsRow,
};
use rusty_golf_pool::{PoolError, compute_standings};

fn pool() -> rusty_golf_pool::RosterIndex {
    roster(&[
        ("Scottie Scheffler", "Player1"),
        ("Collin Morikawa", "Player1"),
        ("Min Woo Lee", "Player1"),
        ("Bryson DeChambeau", "Player2"),
        ("Justin Thomas", "Player2"),
        ("Rory McIlroy", "Player3"),
    ])
}

fn leaderboard() -> rusty_golf_pool::model::LeaderboardTable {
    table(
        &FULL_HEADER,
        vec![
            live_row("1", "Scottie Scheffler", "-5", "67", "68"),
            live_row("T2", "Ludvig Aberg", "-4", "68", "68"),
            live_row("T2", "Bryson DeChambeau", "-4", "69", "67"),
            live_row("4", "Collin Morikawa", "+12", "75", "77"),
            RawRow::new(&["The following players failed to make the cut at +4"]),
            live_row("CUT", "Justin Thomas", "CUT", "75", "78"),
            live_row("CUT", "Min Woo Lee", "WD", "74", ""),
            live_row("-", "Rory McIlroy", "DQ", "71", ""),
        ],
    )
}

fn total_of(standings: &rusty_golf_pool::model::Standings, owner: &str) -> i64 {
    standings
        .owners
        .iter()
        .find(|o| o.owner == owner)
        .map(|o| o.total)
        .expect("owner present")
}

#[test]
fn withdrawal_with_unreadable_round_is_fatal() {
    let err = compute_standings(&pool(), &leaderboard(), &scoring(false)).unwrap_err();
    assert!(matches!(
        err,
        PoolError::UnparseableScore { ref player, .. } if player == "Min Woo Lee"
    ));
}

fn clean_leaderboard() -> rusty_golf_pool::model::LeaderboardTable {
    let mut tbl = leaderboard();
    tbl.rows[6] = live_row("CUT", "Min Woo Lee", "WD", "74", "73");
    tbl
}

#[test]
fn full_standings_keep_leaderboard_order_and_placeholders() {
    let standings = compute_standings(&pool(), &clean_leaderboard(), &scoring(false)).unwrap();
    let names: Vec<&str> = standings
        .players
        .iter()
        .map(|row| match row {
            StandingsRow::Player(p) => p.player_name.as_str(),
            StandingsRow::Placeholder(_) => "<placeholder>",
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "Scottie Scheffler",
            "Bryson DeChambeau",
            "Collin Morikawa",
            "<placeholder>",
            "Justin Thomas",
            "Min Woo Lee",
            "Rory McIlroy",
        ]
    );
    assert!(standings.player_entries().all(|p| p.player_name != "Ludvig Aberg"));
}

#[test]
fn statuses_follow_the_score_cell() {
    let standings = compute_standings(&pool(), &clean_leaderboard(), &scoring(false)).unwrap();
    let status_of = |name: &str| {
        standings
            .player_entries()
            .find(|p| p.player_name == name)
            .map(|p| p.status)
            .unwrap()
    };
    assert_eq!(status_of("Scottie Scheffler"), PlayerStatus::None);
    assert_eq!(status_of("Justin Thomas"), PlayerStatus::Cut);
    assert_eq!(status_of("Min Woo Lee"), PlayerStatus::Cut);
    assert_eq!(status_of("Rory McIlroy"), PlayerStatus::Dq);
}

#[test]
fn totals_without_drop_equal_sum_of_adjusted_scores() {
    let standings = compute_standings(&pool(), &clean_leaderboard(), &scoring(false)).unwrap();
    let player_sum: i64 = standings
        .player_entries()
        .map(|p| i64::from(p.adjusted_score))
        .sum();
    let owner_sum: i64 = standings.owners.iter().map(|o| o.total).sum();
    assert_eq!(player_sum, owner_sum);

    // Scheffler -5, Morikawa capped +8, Lee 74+73-144 = +3
    assert_eq!(total_of(&standings, "Player1"), 6);
    // DeChambeau -4, Thomas 75+78-144 = +9
    assert_eq!(total_of(&standings, "Player2"), 5);
    assert_eq!(total_of(&standings, "Player3"), 0);
}

#[test]
fn drop_high_removes_each_owners_worst_score() {
    let standings = compute_standings(&pool(), &clean_leaderboard(), &scoring(true)).unwrap();
    assert_eq!(total_of(&standings, "Player1"), -2);
    assert_eq!(total_of(&standings, "Player2"), -4);
    assert_eq!(total_of(&standings, "Player3"), 0);
    let ranked: Vec<(usize, &str)> = standings
        .owners
        .iter()
        .map(|o| (o.rank, o.owner.as_str()))
        .collect();
    assert_eq!(ranked, vec![(1, "Player2"), (2, "Player1"), (3, "Player3")]);
}

#[test]
fn drop_high_on_three_contributions() {
    let pool = roster(&[("A", "Owner"), ("B", "Owner"), ("C", "Owner")]);
    let tbl = table(
        &FULL_HEADER,
        vec![
            live_row("1", "B", "-2", "70", "70"),
            live_row("2", "A", "+5", "70", "70"),
            live_row("3", "C", "+8", "70", "70"),
        ],
    );
    let standings = compute_standings(&pool, &tbl, &scoring(true)).unwrap();
    assert_eq!(total_of(&standings, "Owner"), 3);
}

#[test]
fn ties_keep_owner_name_order() {
    let pool = roster(&[("A", "Zed"), ("B", "Amy"), ("C", "Moe")]);
    let tbl = table(
        &FULL_HEADER,
        vec![
            live_row("T1", "A", "-2", "70", "70"),
            live_row("T1", "B", "-2", "70", "70"),
            live_row("3", "C", "-1", "70", "70"),
        ],
    );
    let standings = compute_standings(&pool, &tbl, &scoring(false)).unwrap();
    let order: Vec<&str> = standings.owners.iter().map(|o| o.owner.as_str()).collect();
    assert_eq!(order, vec!["Amy", "Zed", "Moe"]);
    assert!(standings.owners.windows(2).all(|w| w[0].total <= w[1].total));
}

#[test]
fn computing_twice_gives_identical_standings() {
    let pool = pool();
    let tbl = clean_leaderboard();
    let first = compute_standings(&pool, &tbl, &scoring(true)).unwrap();
    let second = compute_standings(&pool, &tbl, &scoring(true)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn owner_with_nobody_on_the_board_keeps_sentinel_under_drop_high() {
    let pool = roster(&[("A", "Scored"), ("Nobody Here", "Empty")]);
    let tbl = table(&FULL_HEADER, vec![live_row("1", "A", "-1", "70", "70")]);

    let kept = compute_standings(&pool, &tbl, &scoring(false)).unwrap();
    assert_eq!(total_of(&kept, "Empty"), 0);

    let dropped = compute_standings(&pool, &tbl, &scoring(true)).unwrap();
    assert_eq!(total_of(&dropped, "Empty"), -i64::from(NO_CONTRIBUTION));
    assert_eq!(total_of(&dropped, "Scored"), 0);
}

#[test]
fn row_without_cells_is_malformed() {
    let pool = roster(&[("A", "Owner")]);
    let tbl = table(
        &FULL_HEADER,
        vec![live_row("1", "A", "E", "72", "72"), RawRow::default()],
    );
    let err = compute_standings(&pool, &tbl, &scoring(false)).unwrap_err();
    assert!(matches!(err, PoolError::MalformedRow { row: 2, .. }));
}

#[test]
fn owner_total_past_i32_range_is_kept_exact() {
    let pool = roster(&[("A", "Owner"), ("B", "Owner")]);
    let tbl = table(
        &FULL_HEADER,
        vec![
            live_row("1", "A", "-2147483648", "70", "70"),
            live_row("2", "B", "-5", "70", "70"),
        ],
    );
    let standings = compute_standings(&pool, &tbl, &scoring(false)).unwrap();
    assert_eq!(total_of(&standings, "Owner"), -2_147_483_653);

    let dropped = compute_standings(&pool, &tbl, &scoring(true)).unwrap();
    assert_eq!(total_of(&dropped, "Owner"), -2_147_483_648);
}

#[test]
fn running_total_overflow_names_the_player() {
    let mut totals = OwnerTotals::new("Owner");
    totals.running_total = i64::MIN + 1;
    let err = totals.add("Deep Under", -5).unwrap_err();
    assert_eq!(
        err,
        PoolError::UnparseableScore {
            player: "Deep Under".to_string(),
            value: "-5".to_string(),
        }
    );
    assert_eq!(totals.scored_players, 0);
}

#[test]
fn tally_tracks_running_total_and_worst() {
    let pool = roster(&[("A", "Owner"), ("B", "Owner")]);
    let tbl = table(
        &FULL_HEADER,
        vec![
            live_row("1", "A", "-6", "70", "70"),
            live_row("2", "B", "+3", "70", "70"),
        ],
    );
    let standings = compute_standings(&pool, &tbl, &scoring(false)).unwrap();
    let totals = tally_owners(&pool, standings.player_entries()).unwrap();
    assert_eq!(
        totals,
        vec![OwnerTotals {
            owner: "Owner".to_string(),
            running_total: -3,
            max_single_contribution: 3,
            scored_players: 2,
        }]
    );
    let ranked = rank_owners(&totals, true);
    assert_eq!(ranked[0].total, -6);
}

#[test]
fn entry_for_an_owner_outside_the_roster_is_rejected() {
    let pool = roster(&[("A", "Owner")]);
    let tbl = table(&FULL_HEADER, vec![live_row("1", "A", "-1", "70", "70")]);
    let standings = compute_standings(&pool, &tbl, &scoring(false)).unwrap();
    let mut stray = standings.player_entries().next().unwrap().clone();
    stray.owner = "Ghost".to_string();
    let err = tally_owners(&pool, [&stray]).unwrap_err();
    assert!(matches!(err, PoolError::UnknownOwner { ref owner, .. } if owner == "Ghost"));
}
