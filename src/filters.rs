//! User-facing filter predicates: plain equality on one column each, with an
//! "All teams" sentinel meaning no team filter.

use crate::tables::{GameRow, PlayerStatRow, ScheduleRow};

pub const ALL_TEAMS_OPTION: &str = "All teams";

/// Distinct values preserving first-appearance order, the way season options
/// come out of the source file.
pub fn distinct_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Team selectbox options: the sentinel first, then distinct names sorted.
pub fn team_options<'a, I>(teams: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = distinct_in_order(teams);
    names.sort();
    let mut out = Vec::with_capacity(names.len() + 1);
    out.push(ALL_TEAMS_OPTION.to_string());
    out.extend(names);
    out
}

/// Team predicate over a home/away pair, used by scores and schedule.
pub fn matches_team(home: &str, away: &str, team: &str) -> bool {
    team == ALL_TEAMS_OPTION || home == team || away == team
}

/// Season / season-type / team filter for stat-leader rows. `None` for the
/// optional filters means no constraint.
pub fn filter_stats(
    rows: &[PlayerStatRow],
    season: &str,
    season_type: Option<&str>,
    team: &str,
) -> Vec<PlayerStatRow> {
    rows.iter()
        .filter(|r| r.season == season)
        .filter(|r| season_type.is_none_or(|st| r.season_type == st))
        .filter(|r| team == ALL_TEAMS_OPTION || r.team_full_name == team)
        .cloned()
        .collect()
}

pub fn filter_scores(rows: &[GameRow], team: &str) -> Vec<GameRow> {
    rows.iter()
        .filter(|r| matches_team(&r.home_team_full_name, &r.away_team_full_name, team))
        .cloned()
        .collect()
}

pub fn filter_schedule(rows: &[ScheduleRow], team: &str) -> Vec<ScheduleRow> {
    rows.iter()
        .filter(|r| matches_team(&r.home_team_full_name, &r.away_team_full_name, team))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_preserves_first_appearance_order() {
        let values = ["2024/25", "2023/24", "2024/25", "2022/23"];
        assert_eq!(
            distinct_in_order(values),
            vec!["2024/25", "2023/24", "2022/23"]
        );
    }

    #[test]
    fn team_options_start_with_sentinel_then_sorted() {
        let options = team_options(["Winnipeg Jets", "Boston Bruins", "Winnipeg Jets"]);
        assert_eq!(
            options,
            vec![ALL_TEAMS_OPTION, "Boston Bruins", "Winnipeg Jets"]
        );
    }

    #[test]
    fn sentinel_matches_everything() {
        assert!(matches_team("A", "B", ALL_TEAMS_OPTION));
        assert!(matches_team("A", "B", "A"));
        assert!(matches_team("A", "B", "B"));
        assert!(!matches_team("A", "B", "C"));
    }
}
