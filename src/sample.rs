//! Deterministic sample datasets used when `FFC_OFFLINE=1` or a remote read
//! fails, so the dashboard stays navigable during development.

use std::collections::HashMap;

use crate::tables::{GameRow, PlayerStatRow, PlayoffGameRow, ScheduleRow, StandingsRow};
use crate::timefmt;

pub const SAMPLE_SEASON: &str = "2024/25";
const SEASON_TYPE: &str = "Regular Season";

fn logo(abbrev: &str) -> String {
    format!("https://assets.nhle.com/logos/{abbrev}.svg")
}

#[allow(clippy::too_many_arguments)]
fn standing(
    conference: &str,
    division: &str,
    team: &str,
    abbrev: &str,
    wins: u32,
    losses: u32,
    ots: u32,
    goals_for: u32,
    goals_against: u32,
) -> StandingsRow {
    let games_played = wins + losses + ots;
    let points = wins * 2 + ots;
    StandingsRow {
        season: SAMPLE_SEASON.to_string(),
        conference: conference.to_string(),
        division: division.to_string(),
        team_full_name: team.to_string(),
        team_logo_url: logo(abbrev),
        games_played,
        wins,
        losses,
        ots,
        points,
        points_pct: f64::from(points) / f64::from(games_played * 2) * 100.0,
        wins_reg: wins.saturating_sub(2),
        wins_reg_ot: wins,
        goals_for,
        goals_against,
        goals_diff: goals_for as i32 - goals_against as i32,
        record_home: "12-4-2".to_string(),
        record_away: "10-6-2".to_string(),
        record_so: "2-1".to_string(),
        record_last_10: "7-2-1".to_string(),
    }
}

pub fn standings() -> Vec<StandingsRow> {
    vec![
        standing("Eastern", "Atlantic", "Boston Bruins", "BOS", 26, 8, 4, 131, 98),
        standing("Eastern", "Atlantic", "Toronto Maple Leafs", "TOR", 24, 10, 4, 127, 110),
        standing("Eastern", "Atlantic", "Tampa Bay Lightning", "TBL", 21, 14, 3, 120, 115),
        standing("Eastern", "Metropolitan", "Carolina Hurricanes", "CAR", 25, 10, 3, 125, 101),
        standing("Eastern", "Metropolitan", "New York Rangers", "NYR", 23, 12, 3, 118, 108),
        standing("Western", "Central", "Winnipeg Jets", "WPG", 27, 8, 3, 140, 95),
        standing("Western", "Central", "Colorado Avalanche", "COL", 24, 11, 3, 133, 112),
        standing("Western", "Pacific", "Edmonton Oilers", "EDM", 23, 12, 3, 136, 118),
        standing("Western", "Pacific", "Vegas Golden Knights", "VGK", 22, 12, 4, 121, 107),
    ]
}

fn playoff_game(
    round: u32,
    matchup: &str,
    match_number: u32,
    day_month: &str,
    home: (&str, &str),
    away: (&str, &str),
    score: (u32, u32),
    series: (u32, u32),
    period_type: &str,
) -> PlayoffGameRow {
    PlayoffGameRow {
        season: SAMPLE_SEASON.to_string(),
        playoff_round: round,
        matchup: matchup.to_string(),
        match_number,
        day_month: day_month.to_string(),
        home_team_full_name: home.0.to_string(),
        away_team_full_name: away.0.to_string(),
        home_team_abbrev_name: home.1.to_string(),
        away_team_abbrev_name: away.1.to_string(),
        home_team_logo_url: logo(home.1),
        away_team_logo_url: logo(away.1),
        home_team_score: score.0,
        away_team_score: score.1,
        home_team_match_score: series.0,
        away_team_match_score: series.1,
        period_type: period_type.to_string(),
    }
}

pub fn playoff_games() -> Vec<PlayoffGameRow> {
    let edm = ("Edmonton Oilers", "EDM");
    let fla = ("Florida Panthers", "FLA");
    let wpg = ("Winnipeg Jets", "WPG");
    let bos = ("Boston Bruins", "BOS");
    vec![
        playoff_game(1, "WPG-BOS", 1, "22/04", wpg, bos, (4, 1), (1, 0), "REG"),
        playoff_game(1, "WPG-BOS", 2, "24/04", wpg, bos, (2, 3), (1, 1), "OT"),
        playoff_game(1, "WPG-BOS", 3, "26/04", bos, wpg, (1, 2), (1, 2), "REG"),
        playoff_game(4, "EDM-FLA", 1, "04/06", edm, fla, (3, 2), (1, 0), "REG"),
        playoff_game(4, "EDM-FLA", 2, "06/06", edm, fla, (1, 4), (1, 1), "REG"),
        playoff_game(4, "EDM-FLA", 3, "09/06", fla, edm, (2, 3), (1, 2), "OT"),
    ]
}

fn game(
    start_time_utc: &str,
    home: (&str, &str),
    away: (&str, &str),
    score: (u32, u32),
    period_type: &str,
) -> GameRow {
    let (local_date, local_time) = timefmt::local_date_time(start_time_utc);
    GameRow {
        start_time_utc: start_time_utc.to_string(),
        home_team_full_name: home.0.to_string(),
        away_team_full_name: away.0.to_string(),
        home_team_abbrev_name: home.1.to_string(),
        away_team_abbrev_name: away.1.to_string(),
        home_team_logo_url: logo(home.1),
        away_team_logo_url: logo(away.1),
        home_team_score: score.0,
        away_team_score: score.1,
        period_type: period_type.to_string(),
        local_date,
        local_time,
    }
}

pub fn scores() -> Vec<GameRow> {
    let mut rows = vec![
        game(
            "2025-03-08T00:00:00Z",
            ("Boston Bruins", "BOS"),
            ("Toronto Maple Leafs", "TOR"),
            (4, 3),
            "OT",
        ),
        game(
            "2025-03-08T02:30:00Z",
            ("Edmonton Oilers", "EDM"),
            ("Winnipeg Jets", "WPG"),
            (2, 5),
            "REG",
        ),
        game(
            "2025-03-07T00:30:00Z",
            ("Carolina Hurricanes", "CAR"),
            ("New York Rangers", "NYR"),
            (3, 2),
            "SO",
        ),
        game(
            "2025-03-07T03:00:00Z",
            ("Vegas Golden Knights", "VGK"),
            ("Colorado Avalanche", "COL"),
            (1, 2),
            "REG",
        ),
    ];
    rows.sort_by(|a, b| {
        b.local_date
            .cmp(&a.local_date)
            .then_with(|| a.local_time.cmp(&b.local_time))
    });
    rows
}

fn scheduled(start_time_utc: &str, home: (&str, &str), away: (&str, &str)) -> ScheduleRow {
    let (local_date, local_time) = timefmt::local_date_time(start_time_utc);
    ScheduleRow {
        start_time_utc: start_time_utc.to_string(),
        home_team_full_name: home.0.to_string(),
        away_team_full_name: away.0.to_string(),
        home_team_logo_url: logo(home.1),
        away_team_logo_url: logo(away.1),
        local_date,
        local_time,
    }
}

pub fn schedule() -> Vec<ScheduleRow> {
    // Two days out from "now" so the schedule page always has content.
    let soon = chrono::Utc::now() + chrono::Duration::days(1);
    let later = chrono::Utc::now() + chrono::Duration::days(2);
    let soon = soon.format("%Y-%m-%dT19:00:00Z").to_string();
    let later = later.format("%Y-%m-%dT23:30:00Z").to_string();
    vec![
        scheduled(&soon, ("Toronto Maple Leafs", "TOR"), ("Boston Bruins", "BOS")),
        scheduled(&later, ("Winnipeg Jets", "WPG"), ("Edmonton Oilers", "EDM")),
    ]
}

#[allow(clippy::too_many_arguments)]
fn skater(
    name: &str,
    team: (&str, &str),
    position: &str,
    number: u32,
    games_played: u32,
    toi_minutes: f64,
    goals: f64,
    assists: f64,
    plus_minus: f64,
) -> PlayerStatRow {
    let stats = HashMap::from([
        ("points".to_string(), goals + assists),
        ("goals".to_string(), goals),
        ("assists".to_string(), assists),
        ("plus_minus".to_string(), plus_minus),
        ("even_strength_points".to_string(), (goals + assists) * 0.7),
        ("even_strength_goals".to_string(), goals * 0.7),
        ("power_play_points".to_string(), (goals + assists) * 0.25),
        ("power_play_goals".to_string(), goals * 0.25),
        ("shorthanded_points".to_string(), 1.0),
        ("shorthanded_goals".to_string(), 0.0),
        ("ot_goals".to_string(), 1.0),
        ("game_winning_goals".to_string(), (goals / 8.0).floor()),
        ("shots".to_string(), goals * 7.0),
        ("shoot_pct".to_string(), if goals > 0.0 { 100.0 / 7.0 } else { 0.0 }),
        ("pim".to_string(), 14.0),
    ]);
    PlayerStatRow {
        season: SAMPLE_SEASON.to_string(),
        season_type: SEASON_TYPE.to_string(),
        team_full_name: team.0.to_string(),
        team_abbrev_name: team.1.to_string(),
        full_name: name.to_string(),
        headshot_url: format!("https://assets.nhle.com/mugs/{number}.png"),
        position_code: position.to_string(),
        sweater_number: Some(number),
        games_played,
        toi_minutes,
        stats,
    }
}

fn goalie(
    name: &str,
    team: (&str, &str),
    number: u32,
    games_played: u32,
    toi_minutes: f64,
    gaa: f64,
    save_pct: f64,
    shutouts: f64,
) -> PlayerStatRow {
    let goals_against = (gaa * f64::from(games_played)).round();
    let stats = HashMap::from([
        ("gaa".to_string(), gaa),
        ("save_pct".to_string(), save_pct),
        ("shutouts".to_string(), shutouts),
        ("goals_against".to_string(), goals_against),
        ("xg_against".to_string(), goals_against * 1.05),
        ("saved_goals_above_expected".to_string(), goals_against * 0.05),
    ]);
    PlayerStatRow {
        season: SAMPLE_SEASON.to_string(),
        season_type: SEASON_TYPE.to_string(),
        team_full_name: team.0.to_string(),
        team_abbrev_name: team.1.to_string(),
        full_name: name.to_string(),
        headshot_url: format!("https://assets.nhle.com/mugs/{number}.png"),
        position_code: "G".to_string(),
        sweater_number: Some(number),
        games_played,
        toi_minutes,
        stats,
    }
}

pub fn player_stats() -> Vec<PlayerStatRow> {
    let bos = ("Boston Bruins", "BOS");
    let tor = ("Toronto Maple Leafs", "TOR");
    let wpg = ("Winnipeg Jets", "WPG");
    let edm = ("Edmonton Oilers", "EDM");
    let col = ("Colorado Avalanche", "COL");
    vec![
        skater("Aleksi Virtanen", edm, "C", 29, 38, 830.5, 24.0, 38.0, 18.0),
        skater("Marcus Lindholm", col, "C", 72, 37, 812.0, 21.0, 41.0, 12.0),
        skater("Tomas Ruzicka", tor, "R", 88, 38, 790.3, 27.0, 26.0, 8.0),
        skater("Brady Callahan", bos, "L", 63, 36, 745.8, 19.0, 27.0, 15.0),
        skater("Nikolaj Sorensen", wpg, "C", 55, 38, 805.1, 17.0, 29.0, 21.0),
        skater("Owen MacPherson", bos, "D", 73, 38, 902.4, 9.0, 31.0, 22.0),
        skater("Ilya Morozov", wpg, "D", 44, 37, 915.7, 7.0, 28.0, 19.0),
        skater("Jack Tremblay", edm, "D", 25, 35, 860.2, 11.0, 22.0, 5.0),
        goalie("Connor Hellqvist", wpg, 37, 30, 1765.0, 2.02, 92.6, 5.0),
        goalie("Jeremy Swayze", bos, 1, 27, 1590.0, 2.31, 91.8, 3.0),
        goalie("Stuart Skinner", edm, 74, 26, 1540.0, 2.58, 90.9, 2.0),
        goalie("Igor Shesterkov", tor, 31, 24, 1410.0, 2.44, 91.2, 2.0),
        goalie("Backup Goalie", col, 39, 4, 230.0, 1.80, 93.5, 1.0),
    ]
}
