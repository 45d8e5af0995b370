use crate::controller::score::format_signed;
use crate::error::PoolError;
use crate::model::{OwnerStanding, Standings, StandingsRow};
use chrono::NaiveDateTime;
use maud::{DOCTYPE, Markup, html};

pub const PLAYER_COLUMNS: [&str; 8] = [
    "pos",
    "player",
    "status",
    "owner",
    "today",
    "thru",
    "score",
    "adj_score",
];
pub const OWNER_COLUMNS: [&str; 3] = ["rank", "owner", "total"];

const INDIVIDUAL_HEADING: &str = "INDIVIDUAL SCORE";

#[must_use]
pub fn team_heading(drop_high: bool) -> &'static str {
    if drop_high {
        "TEAM SCORE (High Score Dropped)"
    } else {
        "TEAM SCORE"
    }
}

#[must_use]
pub fn player_cells(row: &StandingsRow) -> [String; 8] {
    match row {
        StandingsRow::Placeholder(p) => [
            "----".to_string(),
            "-----------------".to_string(),
            p.text.clone(),
            "-----".to_string(),
            "--".to_string(),
            "--".to_string(),
            "---".to_string(),
            "---".to_string(),
        ],
        StandingsRow::Player(e) => [
            e.position.clone(),
            e.player_name.clone(),
            e.status.to_string(),
            e.owner.clone(),
            e.today.clone(),
            e.thru.clone(),
            e.display_score.clone(),
            format_signed(e.adjusted_score),
        ],
    }
}

#[must_use]
pub fn owner_cells(owner: &OwnerStanding) -> [String; 3] {
    [
        owner.rank.to_string(),
        owner.owner.clone(),
        format_signed(owner.total),
    ]
}

fn render_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[must_use]
pub fn render_text(standings: &Standings, generated: NaiveDateTime) -> String {
    let players: Vec<[String; 8]> = standings.players.iter().map(player_cells).collect();
    let owners: Vec<[String; 3]> = standings.owners.iter().map(owner_cells).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Standings as of {}\n",
        generated.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("\n*** {INDIVIDUAL_HEADING} ***\n\n"));
    out.push_str(&render_table(PLAYER_COLUMNS, &players));
    out.push_str(&format!("\n*** {} ***\n\n", team_heading(standings.drop_high)));
    out.push_str(&render_table(OWNER_COLUMNS, &owners));
    out
}

/// # Errors
/// Returns `PoolError::Parse` if serialization fails.
pub fn render_json(standings: &Standings) -> Result<String, PoolError> {
    Ok(serde_json::to_string_pretty(standings)?)
}

#[must_use]
pub fn render_html(standings: &Standings, generated: NaiveDateTime) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Pool Standings" }
            }
            body {
                p class="refresh" { "Standings as of " (generated.format("%Y-%m-%d %H:%M:%S")) }
                (render_owner_table(standings))
                (render_player_table(standings))
            }
        }
    }
}

fn render_owner_table(standings: &Standings) -> Markup {
    html! {
        h3 { (team_heading(standings.drop_high)) }
        table class="styled-table" id="owner-standings" {
            thead {
                tr {
                    @for header in OWNER_COLUMNS {
                        th { (header) }
                    }
                }
            }
            tbody {
                @for owner in &standings.owners {
                    tr {
                        @for cell in owner_cells(owner) {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

fn render_player_table(standings: &Standings) -> Markup {
    html! {
        h3 { (INDIVIDUAL_HEADING) }
        table class="styled-table" id="player-standings" {
            thead {
                tr {
                    @for header in PLAYER_COLUMNS {
                        th { (header) }
                    }
                }
            }
            tbody {
                @for row in &standings.players {
                    @match row {
                        StandingsRow::Placeholder(p) => {
                            tr class="placeholder" {
                                td colspan=(PLAYER_COLUMNS.len()) { (p.text) }
                            }
                        }
                        StandingsRow::Player(_) => {
                            tr {
                                @for cell in player_cells(row) {
                                    td { (cell) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
