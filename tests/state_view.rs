use ffc_terminal::filters::ALL_TEAMS_OPTION;
use ffc_terminal::sample;
use ffc_terminal::state::{AppState, LeadersSection};

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.standings = sample::standings();
    state.playoff_games = sample::playoff_games();
    state.scores = sample::scores();
    state.schedule = sample::schedule();
    state.stats = sample::player_stats();
    state
}

#[test]
fn podium_agrees_with_page_one() {
    let state = loaded_state();
    let ranked = state.ranked_leaders(LeadersSection::Skaters);
    assert!(ranked.len() >= 3);
    for (idx, entry) in ranked.iter().take(3).enumerate() {
        assert_eq!(entry.rank, idx + 1);
    }
}

#[test]
fn defensemen_are_a_subset_of_skaters() {
    let state = loaded_state();
    let skaters = state.leaders_pool(LeadersSection::Skaters);
    let defensemen = state.leaders_pool(LeadersSection::Defensemen);
    let goalies = state.leaders_pool(LeadersSection::Goaltenders);

    assert!(defensemen.iter().all(|r| r.position_code == "D"));
    assert!(defensemen.len() < skaters.len());
    assert!(skaters.iter().all(|r| !r.is_goalie()));
    assert!(goalies.iter().all(|r| r.is_goalie()));
}

#[test]
fn goalie_floor_defaults_to_its_maximum_and_hides_backups() {
    let state = loaded_state();
    let filter = state.goalie_min_games().expect("sample pool is large enough");
    assert_eq!(filter.step, 5);
    assert_eq!(state.effective_min_games(), Some(filter.max_value));

    let ranked = state.ranked_leaders(LeadersSection::Goaltenders);
    assert!(ranked.iter().all(|r| r.row.full_name != "Backup Goalie"));
}

#[test]
fn lowering_the_floor_admits_backups() {
    let mut state = loaded_state();
    state.leaders_section = LeadersSection::Goaltenders;
    let filter = state.goalie_min_games().expect("filter present");
    let steps_to_zero = (filter.max_value / filter.step) as i64 + 1;
    state.adjust_min_games(-steps_to_zero);
    assert_eq!(state.effective_min_games(), Some(0));

    let ranked = state.ranked_leaders(LeadersSection::Goaltenders);
    assert!(ranked.iter().any(|r| r.row.full_name == "Backup Goalie"));
}

#[test]
fn team_filter_narrows_the_pool() {
    let mut state = loaded_state();
    assert_eq!(state.team, ALL_TEAMS_OPTION);
    state.team = "Boston Bruins".to_string();
    let pool = state.leaders_pool(LeadersSection::Skaters);
    assert!(!pool.is_empty());
    assert!(pool.iter().all(|r| r.team_full_name == "Boston Bruins"));

    let scores = state.scores_rows();
    assert!(scores.iter().all(|g| {
        g.home_team_full_name == "Boston Bruins" || g.away_team_full_name == "Boston Bruins"
    }));
}

#[test]
fn team_options_lead_with_the_sentinel() {
    let state = loaded_state();
    let options = state.team_options();
    assert_eq!(options.first().map(String::as_str), Some(ALL_TEAMS_OPTION));
    let mut rest = options[1..].to_vec();
    let sorted = {
        rest.sort();
        rest
    };
    assert_eq!(options[1..], sorted[..]);
}

#[test]
fn changing_tab_resets_pagination() {
    let mut state = loaded_state();
    state.leaders_page = 7;
    state.next_leaders_tab();
    assert_eq!(state.leaders_page, 1);
}

#[test]
fn page_clamp_never_leaves_valid_range() {
    let mut state = loaded_state();
    state.leaders_page = 999;
    let total = state.leaders_total_pages();
    assert!(state.clamped_page() >= 1);
    assert!(state.clamped_page() <= total);

    state.stats.clear();
    assert_eq!(state.leaders_total_pages(), 1);
    assert_eq!(state.clamped_page(), 1);
    assert!(state.ranked_leaders(LeadersSection::Skaters).is_empty());
}

#[test]
fn season_options_fall_back_to_sample_season() {
    let state = AppState::new();
    assert_eq!(state.season_options(), vec![sample::SAMPLE_SEASON]);
    assert_eq!(state.selected_season(), sample::SAMPLE_SEASON);
}

#[test]
fn log_ring_is_bounded() {
    let mut state = AppState::new();
    for i in 0..120 {
        state.push_log(format!("[INFO] event {i}"));
    }
    assert_eq!(state.logs.len(), 50);
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] event 119"));
}
