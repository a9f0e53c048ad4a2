use ffc_terminal::playoffs::{
    game_line, group_rounds, round_label, series_summary, HIGHER_SEED_HOME_MATCHES,
};
use ffc_terminal::sample;
use ffc_terminal::standings::group_standings;

#[test]
fn standings_group_by_conference_then_division() {
    let groups = group_standings(&sample::standings());
    let conferences: Vec<&str> = groups.iter().map(|g| g.conference.as_str()).collect();
    assert_eq!(conferences, vec!["Eastern", "Western"]);

    let eastern = &groups[0];
    let divisions: Vec<&str> = eastern
        .divisions
        .iter()
        .map(|d| d.division.as_str())
        .collect();
    assert_eq!(divisions, vec!["Atlantic", "Metropolitan"]);
}

#[test]
fn standings_grouping_preserves_source_order() {
    let rows = sample::standings();
    let groups = group_standings(&rows);
    let atlantic = &groups[0].divisions[0];
    let teams: Vec<&str> = atlantic
        .rows
        .iter()
        .map(|r| r.team_full_name.as_str())
        .collect();
    assert_eq!(
        teams,
        vec!["Boston Bruins", "Toronto Maple Leafs", "Tampa Bay Lightning"]
    );
}

#[test]
fn empty_standings_group_to_nothing() {
    assert!(group_standings(&[]).is_empty());
}

#[test]
fn round_four_is_the_final() {
    assert_eq!(round_label(1), "Round 1");
    assert_eq!(round_label(3), "Round 3");
    assert_eq!(round_label(4), "Final");
}

#[test]
fn rounds_come_out_descending() {
    let rounds = group_rounds(&sample::playoff_games());
    let numbers: Vec<u32> = rounds.iter().map(|r| r.round).collect();
    assert_eq!(numbers, vec![4, 1]);
    assert_eq!(rounds[0].label, "Final");
}

#[test]
fn home_ice_parity_decides_the_higher_seed() {
    let games = sample::playoff_games();
    let series: Vec<_> = games
        .iter()
        .filter(|g| g.matchup == "WPG-BOS")
        .cloned()
        .collect();

    // Last game is match 3, played on the lower seed's ice, so the away
    // team of that game is the higher seed.
    let last = series.last().expect("series has games");
    assert!(!HIGHER_SEED_HOME_MATCHES.contains(&last.match_number));
    let summary = series_summary(&series).expect("series summary");
    assert_eq!(summary.higher_seed.full_name, "Winnipeg Jets");
    assert_eq!(summary.lower_seed.full_name, "Boston Bruins");
    assert_eq!(summary.higher_seed.series_score, 2);
    assert_eq!(summary.lower_seed.series_score, 1);

    // After game 2 the higher seed was the home team.
    let through_two: Vec<_> = series[..2].to_vec();
    let summary = series_summary(&through_two).expect("series summary");
    assert_eq!(summary.higher_seed.full_name, "Winnipeg Jets");
    assert_eq!(summary.lower_seed.series_score, 1);
}

#[test]
fn series_summary_of_no_games_is_none() {
    assert!(series_summary(&[]).is_none());
}

#[test]
fn game_lines_flag_overtime() {
    let games = sample::playoff_games();
    let ot_game = games
        .iter()
        .find(|g| g.period_type == "OT")
        .expect("sample has an OT game");
    assert!(game_line(ot_game).contains("(OT)"));

    let reg_game = games
        .iter()
        .find(|g| g.period_type == "REG")
        .expect("sample has a regulation game");
    assert!(!game_line(reg_game).contains("(OT)"));
}

#[test]
fn matchups_keep_first_appearance_order_within_a_round() {
    let mut games = sample::playoff_games();
    // Add a second round-1 series after the first one.
    let mut extra = games[0].clone();
    extra.matchup = "CAR-NYR".to_string();
    extra.home_team_full_name = "Carolina Hurricanes".to_string();
    extra.away_team_full_name = "New York Rangers".to_string();
    games.push(extra);

    let rounds = group_rounds(&games);
    let round_one = rounds.iter().find(|r| r.round == 1).expect("round 1");
    let matchups: Vec<&str> = round_one.matchups.iter().map(|m| m.matchup.as_str()).collect();
    assert_eq!(matchups, vec!["WPG-BOS", "CAR-NYR"]);
}
