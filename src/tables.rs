use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One team-season line from the regular-season standings file.
///
/// Rows arrive already ordered by points percentage within a division; this
/// crate never recomputes standings order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsRow {
    pub season: String,
    pub conference: String,
    pub division: String,
    pub team_full_name: String,
    pub team_logo_url: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ots: u32,
    pub points: u32,
    pub points_pct: f64,
    pub wins_reg: u32,
    pub wins_reg_ot: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goals_diff: i32,
    pub record_home: String,
    pub record_away: String,
    pub record_so: String,
    pub record_last_10: String,
}

/// One game of a playoff series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayoffGameRow {
    pub season: String,
    pub playoff_round: u32,
    pub matchup: String,
    /// Match number within the series, 1..=7.
    pub match_number: u32,
    pub day_month: String,
    pub home_team_full_name: String,
    pub away_team_full_name: String,
    pub home_team_abbrev_name: String,
    pub away_team_abbrev_name: String,
    pub home_team_logo_url: String,
    pub away_team_logo_url: String,
    pub home_team_score: u32,
    pub away_team_score: u32,
    /// Series score after this game, from each side's perspective.
    pub home_team_match_score: u32,
    pub away_team_match_score: u32,
    pub period_type: String,
}

/// A finished game from the scores file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRow {
    pub start_time_utc: String,
    pub home_team_full_name: String,
    pub away_team_full_name: String,
    pub home_team_abbrev_name: String,
    pub away_team_abbrev_name: String,
    pub home_team_logo_url: String,
    pub away_team_logo_url: String,
    pub home_team_score: u32,
    pub away_team_score: u32,
    /// "REG", "OT" or "SO".
    pub period_type: String,
    /// Derived at load time from `start_time_utc` in the local timezone.
    pub local_date: String,
    pub local_time: String,
}

/// A scheduled matchup from the schedule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub start_time_utc: String,
    pub home_team_full_name: String,
    pub away_team_full_name: String,
    pub home_team_logo_url: String,
    pub away_team_logo_url: String,
    pub local_date: String,
    pub local_time: String,
}

/// One player-season stat line. The headline metrics live in `stats`, keyed
/// by source column name; games played and time on ice are first-class
/// because they double as ranking tie-break keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatRow {
    pub season: String,
    pub season_type: String,
    pub team_full_name: String,
    pub team_abbrev_name: String,
    pub full_name: String,
    pub headshot_url: String,
    pub position_code: String,
    pub sweater_number: Option<u32>,
    pub games_played: u32,
    pub toi_minutes: f64,
    pub stats: HashMap<String, f64>,
}

impl PlayerStatRow {
    /// Resolve a column by name, covering the tie-break keys as well as the
    /// named stat map.
    pub fn stat(&self, name: &str) -> Option<f64> {
        match name {
            "games_played" => Some(self.games_played as f64),
            "toi_minutes" => Some(self.toi_minutes),
            _ => self.stats.get(name).copied(),
        }
    }

    pub fn is_goalie(&self) -> bool {
        self.position_code == "G"
    }

    pub fn is_defenseman(&self) -> bool {
        self.position_code == "D"
    }
}
