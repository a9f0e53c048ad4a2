//! Playoff bracket assembly: rounds grouped in descending order so the Final
//! displays first, series grouped by matchup id, and the home-ice convention
//! that decides which side of a series is the higher seed.

use crate::tables::PlayoffGameRow;

/// Match numbers played on the higher seed's ice. Fixed league convention,
/// never computed from standings.
pub const HIGHER_SEED_HOME_MATCHES: [u32; 4] = [1, 2, 5, 7];

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTeam {
    pub full_name: String,
    pub abbrev_name: String,
    pub logo_url: String,
    pub series_score: u32,
}

/// Higher-seed vs lower-seed view of a series headline.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub higher_seed: SeriesTeam,
    pub lower_seed: SeriesTeam,
}

#[derive(Debug, Clone)]
pub struct SeriesMatchup {
    pub matchup: String,
    pub games: Vec<PlayoffGameRow>,
    pub summary: SeriesSummary,
}

#[derive(Debug, Clone)]
pub struct PlayoffRound {
    pub round: u32,
    pub label: String,
    pub matchups: Vec<SeriesMatchup>,
}

pub fn round_label(round: u32) -> String {
    if round == 4 {
        "Final".to_string()
    } else {
        format!("Round {round}")
    }
}

/// Group playoff games into rounds (descending) and series. Within a round,
/// matchups keep first-appearance order; within a series, games keep source
/// order. Series with no games are impossible by construction.
pub fn group_rounds(rows: &[PlayoffGameRow]) -> Vec<PlayoffRound> {
    let mut rounds: Vec<u32> = rows.iter().map(|r| r.playoff_round).collect();
    rounds.sort_unstable();
    rounds.dedup();
    rounds.reverse();

    rounds
        .into_iter()
        .map(|round| {
            let mut matchup_ids: Vec<String> = Vec::new();
            for row in rows.iter().filter(|r| r.playoff_round == round) {
                if !matchup_ids.contains(&row.matchup) {
                    matchup_ids.push(row.matchup.clone());
                }
            }

            let matchups = matchup_ids
                .into_iter()
                .filter_map(|matchup| {
                    let games: Vec<PlayoffGameRow> = rows
                        .iter()
                        .filter(|r| r.playoff_round == round && r.matchup == matchup)
                        .cloned()
                        .collect();
                    let summary = series_summary(&games)?;
                    Some(SeriesMatchup {
                        matchup,
                        games,
                        summary,
                    })
                })
                .collect();

            PlayoffRound {
                round,
                label: round_label(round),
                matchups,
            }
        })
        .collect()
}

/// Resolve a series headline from its most recent game. If that game's match
/// number is one of [`HIGHER_SEED_HOME_MATCHES`], the home team is the higher
/// seed; otherwise the away team is.
pub fn series_summary(games: &[PlayoffGameRow]) -> Option<SeriesSummary> {
    let last = games.last()?;
    let home = SeriesTeam {
        full_name: last.home_team_full_name.clone(),
        abbrev_name: last.home_team_abbrev_name.clone(),
        logo_url: last.home_team_logo_url.clone(),
        series_score: last.home_team_match_score,
    };
    let away = SeriesTeam {
        full_name: last.away_team_full_name.clone(),
        abbrev_name: last.away_team_abbrev_name.clone(),
        logo_url: last.away_team_logo_url.clone(),
        series_score: last.away_team_match_score,
    };

    let (higher_seed, lower_seed) = if HIGHER_SEED_HOME_MATCHES.contains(&last.match_number) {
        (home, away)
    } else {
        (away, home)
    };
    Some(SeriesSummary {
        higher_seed,
        lower_seed,
    })
}

/// One display line per series game, e.g.
/// `(3)   14/05   EDM 2-3 FLA (OT)   (1-2)`.
pub fn game_line(row: &PlayoffGameRow) -> String {
    format!(
        "({})   {}   {} {}-{} {} {}   ({}-{})",
        row.match_number,
        row.day_month,
        row.home_team_abbrev_name,
        row.home_team_score,
        row.away_team_score,
        row.away_team_abbrev_name,
        if row.period_type == "OT" { "(OT)" } else { "    " },
        row.home_team_match_score,
        row.away_team_match_score,
    )
}
