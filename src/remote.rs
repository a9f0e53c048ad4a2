//! Remote table reader: fetches the pre-aggregated parquet files the upstream
//! pipeline publishes to object storage and decodes them into typed rows.
//! This crate only ever reads; failures propagate unmodified.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::{Field, Row};
use reqwest::blocking::Client;

use crate::data_cache::fetch_file_cached;
use crate::tables::{GameRow, PlayerStatRow, PlayoffGameRow, ScheduleRow, StandingsRow};
use crate::timefmt;

pub const DATA_PATH_STANDINGS_REGULAR: &str = "fact_standings_regular.parquet";
pub const DATA_PATH_STANDINGS_PLAYOFF: &str = "fact_standings_playoff.parquet";
pub const DATA_PATH_SCHEDULE: &str = "fact_schedule.parquet";
pub const DATA_PATH_SCORES: &str = "fact_scores.parquet";
pub const DATA_PATH_STATS: &str = "fact_stats.parquet";

const DEFAULT_BASE_URL: &str = "https://frozen-facts-center-prod.s3.amazonaws.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

fn table_url(file: &str) -> String {
    let base = std::env::var("FFC_DATA_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    format!("{}/{}", base.trim_end_matches('/'), file)
}

fn fetch_table(file: &str) -> Result<std::path::PathBuf> {
    let client = http_client()?;
    fetch_file_cached(client, &table_url(file))
}

pub fn load_standings() -> Result<Vec<StandingsRow>> {
    let path = fetch_table(DATA_PATH_STANDINGS_REGULAR)?;
    decode_standings(&path)
}

pub fn load_playoff_games() -> Result<Vec<PlayoffGameRow>> {
    let path = fetch_table(DATA_PATH_STANDINGS_PLAYOFF)?;
    decode_playoff_games(&path)
}

pub fn load_scores() -> Result<Vec<GameRow>> {
    let path = fetch_table(DATA_PATH_SCORES)?;
    let mut rows = decode_scores(&path)?;
    // Most recent game day first, earliest start first within a day.
    rows.sort_by(|a, b| {
        b.local_date
            .cmp(&a.local_date)
            .then_with(|| a.local_time.cmp(&b.local_time))
    });
    Ok(rows)
}

pub fn load_schedule() -> Result<Vec<ScheduleRow>> {
    let path = fetch_table(DATA_PATH_SCHEDULE)?;
    let mut rows = decode_schedule(&path)?;
    rows.sort_by(|a, b| {
        a.local_date
            .cmp(&b.local_date)
            .then_with(|| a.local_time.cmp(&b.local_time))
    });
    Ok(rows)
}

pub fn load_player_stats() -> Result<Vec<PlayerStatRow>> {
    let path = fetch_table(DATA_PATH_STATS)?;
    decode_player_stats(&path)
}

fn row_iter(path: &Path) -> Result<Vec<Row>> {
    let file = fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = SerializedFileReader::new(file)
        .with_context(|| format!("open parquet reader {}", path.display()))?;
    let iter = reader
        .get_row_iter(None)
        .with_context(|| format!("iterate rows {}", path.display()))?;
    let mut rows = Vec::new();
    for row in iter {
        rows.push(row.with_context(|| format!("decode row {}", path.display()))?);
    }
    Ok(rows)
}

fn decode_standings(path: &Path) -> Result<Vec<StandingsRow>> {
    row_iter(path)?
        .iter()
        .map(|row| {
            Ok(StandingsRow {
                season: req_str(row, "season_long")?,
                conference: req_str(row, "conference")?,
                division: req_str(row, "division")?,
                team_full_name: req_str(row, "team_full_name")?,
                team_logo_url: col_str(row, "team_logo_url").unwrap_or_default(),
                games_played: req_u32(row, "games_played")?,
                wins: req_u32(row, "wins")?,
                losses: req_u32(row, "losses")?,
                ots: req_u32(row, "ots")?,
                points: req_u32(row, "points")?,
                points_pct: req_f64(row, "points_pct")?,
                wins_reg: req_u32(row, "wins_reg")?,
                wins_reg_ot: req_u32(row, "wins_reg_ot")?,
                goals_for: req_u32(row, "goals_for")?,
                goals_against: req_u32(row, "goals_against")?,
                goals_diff: req_f64(row, "goals_diff")? as i32,
                record_home: col_str(row, "record_home").unwrap_or_default(),
                record_away: col_str(row, "record_away").unwrap_or_default(),
                record_so: col_str(row, "record_so").unwrap_or_default(),
                record_last_10: col_str(row, "record_last_10").unwrap_or_default(),
            })
        })
        .collect()
}

fn decode_playoff_games(path: &Path) -> Result<Vec<PlayoffGameRow>> {
    row_iter(path)?
        .iter()
        .map(|row| {
            Ok(PlayoffGameRow {
                season: req_str(row, "season_long")?,
                playoff_round: req_u32(row, "playoff_round")?,
                matchup: req_str(row, "matchup")?,
                match_number: req_u32(row, "match")?,
                day_month: col_str(row, "day_month").unwrap_or_default(),
                home_team_full_name: req_str(row, "home_team_full_name")?,
                away_team_full_name: req_str(row, "away_team_full_name")?,
                home_team_abbrev_name: col_str(row, "home_team_abbrev_name").unwrap_or_default(),
                away_team_abbrev_name: col_str(row, "away_team_abbrev_name").unwrap_or_default(),
                home_team_logo_url: col_str(row, "home_team_logo_url").unwrap_or_default(),
                away_team_logo_url: col_str(row, "away_team_logo_url").unwrap_or_default(),
                home_team_score: req_u32(row, "home_team_score")?,
                away_team_score: req_u32(row, "away_team_score")?,
                home_team_match_score: req_u32(row, "home_team_match_score")?,
                away_team_match_score: req_u32(row, "away_team_match_score")?,
                period_type: col_str(row, "period_type").unwrap_or_default(),
            })
        })
        .collect()
}

fn decode_scores(path: &Path) -> Result<Vec<GameRow>> {
    row_iter(path)?
        .iter()
        .map(|row| {
            let start_time_utc = req_str(row, "start_time_utc")?;
            let (local_date, local_time) = timefmt::local_date_time(&start_time_utc);
            Ok(GameRow {
                start_time_utc,
                home_team_full_name: req_str(row, "home_team_full_name")?,
                away_team_full_name: req_str(row, "away_team_full_name")?,
                home_team_abbrev_name: col_str(row, "home_team_abbrev_name").unwrap_or_default(),
                away_team_abbrev_name: col_str(row, "away_team_abbrev_name").unwrap_or_default(),
                home_team_logo_url: col_str(row, "home_team_logo_url").unwrap_or_default(),
                away_team_logo_url: col_str(row, "away_team_logo_url").unwrap_or_default(),
                home_team_score: req_u32(row, "home_team_score")?,
                away_team_score: req_u32(row, "away_team_score")?,
                period_type: col_str(row, "period_type").unwrap_or_default(),
                local_date,
                local_time,
            })
        })
        .collect()
}

fn decode_schedule(path: &Path) -> Result<Vec<ScheduleRow>> {
    row_iter(path)?
        .iter()
        .map(|row| {
            let start_time_utc = req_str(row, "start_time_utc")?;
            let (local_date, local_time) = timefmt::local_date_time(&start_time_utc);
            Ok(ScheduleRow {
                start_time_utc,
                home_team_full_name: req_str(row, "home_team_full_name")?,
                away_team_full_name: req_str(row, "away_team_full_name")?,
                home_team_logo_url: col_str(row, "home_team_logo_url").unwrap_or_default(),
                away_team_logo_url: col_str(row, "away_team_logo_url").unwrap_or_default(),
                local_date,
                local_time,
            })
        })
        .collect()
}

/// String columns carrying row identity; everything else numeric lands in the
/// per-row stat map.
const STAT_META_COLUMNS: [&str; 3] = ["games_played", "toi_minutes", "sweater_number"];

fn decode_player_stats(path: &Path) -> Result<Vec<PlayerStatRow>> {
    row_iter(path)?
        .iter()
        .map(|row| {
            let mut stats: HashMap<String, f64> = HashMap::new();
            for (name, field) in row.get_column_iter() {
                if STAT_META_COLUMNS.contains(&name.as_str()) {
                    continue;
                }
                if let Some(value) = field_f64(field) {
                    stats.insert(name.clone(), value);
                }
            }
            Ok(PlayerStatRow {
                season: req_str(row, "season_long")?,
                season_type: col_str(row, "season_type_long").unwrap_or_default(),
                team_full_name: req_str(row, "team_full_name")?,
                team_abbrev_name: col_str(row, "team_abbrev_name").unwrap_or_default(),
                full_name: req_str(row, "full_name")?,
                headshot_url: col_str(row, "headshot_url").unwrap_or_default(),
                position_code: req_str(row, "position_code")?,
                sweater_number: col_f64(row, "sweater_number").map(|n| n as u32),
                games_played: req_u32(row, "games_played")?,
                toi_minutes: req_f64(row, "toi_minutes")?,
                stats,
            })
        })
        .collect()
}

fn field_f64(field: &Field) -> Option<f64> {
    match field {
        Field::Double(v) => Some(*v),
        Field::Float(v) => Some(*v as f64),
        Field::Int(v) => Some(*v as f64),
        Field::Long(v) => Some(*v as f64),
        Field::Short(v) => Some(*v as f64),
        Field::Byte(v) => Some(*v as f64),
        Field::UInt(v) => Some(*v as f64),
        Field::ULong(v) => Some(*v as f64),
        Field::UShort(v) => Some(*v as f64),
        Field::UByte(v) => Some(*v as f64),
        _ => None,
    }
}

fn col_str(row: &Row, name: &str) -> Option<String> {
    row.get_column_iter().find_map(|(col, field)| {
        if col.as_str() != name {
            return None;
        }
        match field {
            Field::Str(s) => Some(s.clone()),
            _ => None,
        }
    })
}

fn col_f64(row: &Row, name: &str) -> Option<f64> {
    row.get_column_iter()
        .find_map(|(col, field)| {
            if col.as_str() == name {
                field_f64(field)
            } else {
                None
            }
        })
}

fn req_str(row: &Row, name: &str) -> Result<String> {
    col_str(row, name).ok_or_else(|| anyhow!("missing string column {name}"))
}

fn req_f64(row: &Row, name: &str) -> Result<f64> {
    col_f64(row, name).ok_or_else(|| anyhow!("missing numeric column {name}"))
}

fn req_u32(row: &Row, name: &str) -> Result<u32> {
    col_f64(row, name)
        .map(|v| v as u32)
        .ok_or_else(|| anyhow!("missing numeric column {name}"))
}
