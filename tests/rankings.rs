use std::collections::HashMap;

use ffc_terminal::columns::{tab_columns, ColumnSpec, TablePage, TableSection};
use ffc_terminal::rankings::{
    apply_min_games, min_games_filter, page_slice, podium, rank_by, total_pages, MinGamesFilter,
    PageError, DEFAULT_PAGE_SIZE,
};
use ffc_terminal::tables::PlayerStatRow;

fn skater(name: &str, games_played: u32, toi_minutes: f64, stats: &[(&str, f64)]) -> PlayerStatRow {
    PlayerStatRow {
        season: "2024/25".to_string(),
        season_type: "Regular Season".to_string(),
        team_full_name: "Test Team".to_string(),
        team_abbrev_name: "TST".to_string(),
        full_name: name.to_string(),
        headshot_url: String::new(),
        position_code: "C".to_string(),
        sweater_number: None,
        games_played,
        toi_minutes,
        stats: stats
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<HashMap<_, _>>(),
    }
}

fn goalie(name: &str, games_played: u32, stats: &[(&str, f64)]) -> PlayerStatRow {
    let mut row = skater(name, games_played, games_played as f64 * 60.0, stats);
    row.position_code = "G".to_string();
    row
}

fn spec_for(section: TableSection, name: &str) -> &'static ColumnSpec {
    tab_columns(TablePage::StatLeaders, section)
        .expect("registry covers stat leaders")
        .into_iter()
        .find(|spec| spec.name == name)
        .expect("tab column should exist")
}

#[test]
fn ties_break_on_fewer_games_then_fewer_minutes() {
    // All three tied on points; fewer games wins, then fewer minutes.
    let rows = vec![
        skater("A", 70, 1400.0, &[("points", 80.0)]),
        skater("B", 68, 1200.0, &[("points", 80.0)]),
        skater("C", 68, 1100.0, &[("points", 80.0)]),
    ];
    let ranked = rank_by(rows, spec_for(TableSection::Skaters, "points"));
    let order: Vec<&str> = ranked.iter().map(|r| r.row.full_name.as_str()).collect();
    assert_eq!(order, vec!["C", "B", "A"]);
    let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn full_ties_keep_source_order_with_distinct_ranks() {
    let rows = vec![
        skater("First", 60, 1000.0, &[("points", 50.0)]),
        skater("Second", 60, 1000.0, &[("points", 50.0)]),
    ];
    let ranked = rank_by(rows, spec_for(TableSection::Skaters, "points"));
    assert_eq!(ranked[0].row.full_name, "First");
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].row.full_name, "Second");
    assert_eq!(ranked[1].rank, 2);
}

#[test]
fn missing_stat_sorts_last_in_both_directions() {
    let rows = vec![
        skater("NoStat", 10, 100.0, &[]),
        skater("HasStat", 50, 900.0, &[("points", 1.0)]),
    ];
    let ranked = rank_by(rows, spec_for(TableSection::Skaters, "points"));
    assert_eq!(ranked[0].row.full_name, "HasStat");

    let low_goals = vec![
        goalie("NoGaa", 10, &[]),
        goalie("HasGaa", 50, &[("gaa", 3.5)]),
    ];
    let ranked = rank_by(low_goals, spec_for(TableSection::Goalies, "gaa"));
    assert_eq!(ranked[0].row.full_name, "HasGaa");
    assert_eq!(ranked[1].row.full_name, "NoGaa");
}

#[test]
fn ascending_tabs_put_lowest_first() {
    let rows = vec![
        goalie("Leaky", 40, &[("gaa", 3.20)]),
        goalie("Wall", 40, &[("gaa", 1.95)]),
        goalie("Mid", 40, &[("gaa", 2.50)]),
    ];
    let ranked = rank_by(rows, spec_for(TableSection::Goalies, "gaa"));
    let order: Vec<&str> = ranked.iter().map(|r| r.row.full_name.as_str()).collect();
    assert_eq!(order, vec!["Wall", "Mid", "Leaky"]);
}

#[test]
fn total_pages_never_zero() {
    assert_eq!(total_pages(0, DEFAULT_PAGE_SIZE), 1);
    assert_eq!(total_pages(1, DEFAULT_PAGE_SIZE), 1);
    assert_eq!(total_pages(50, DEFAULT_PAGE_SIZE), 1);
    assert_eq!(total_pages(51, DEFAULT_PAGE_SIZE), 2);
    assert_eq!(total_pages(101, DEFAULT_PAGE_SIZE), 3);
}

#[test]
fn pages_partition_the_sequence() {
    let rows: Vec<u32> = (0..101).collect();
    let p1 = page_slice(&rows, 50, 1).expect("page 1");
    let p2 = page_slice(&rows, 50, 2).expect("page 2");
    let p3 = page_slice(&rows, 50, 3).expect("page 3");
    assert_eq!(p1.len(), 50);
    assert_eq!(p2.len(), 50);
    assert_eq!(p3.len(), 1);
    let mut joined: Vec<u32> = Vec::new();
    joined.extend_from_slice(p1);
    joined.extend_from_slice(p2);
    joined.extend_from_slice(p3);
    assert_eq!(joined, rows);
}

#[test]
fn out_of_range_pages_are_rejected() {
    let rows: Vec<u32> = (0..10).collect();
    assert_eq!(
        page_slice(&rows, 50, 0),
        Err(PageError::OutOfRange {
            page: 0,
            total_pages: 1
        })
    );
    assert_eq!(
        page_slice(&rows, 50, 2),
        Err(PageError::OutOfRange {
            page: 2,
            total_pages: 1
        })
    );
}

#[test]
fn empty_table_has_one_empty_page() {
    let rows: Vec<u32> = Vec::new();
    assert_eq!(total_pages(rows.len(), 50), 1);
    let page = page_slice(&rows, 50, 1).expect("page 1 of empty table");
    assert!(page.is_empty());
}

#[test]
fn podium_matches_head_of_page_one() {
    let rows: Vec<u32> = (0..60).collect();
    let p1 = page_slice(&rows, 50, 1).expect("page 1");
    assert_eq!(podium(&rows), &p1[..3]);
}

#[test]
fn podium_shrinks_with_small_tables() {
    let rows = vec![1, 2];
    assert_eq!(podium(&rows), &[1, 2][..]);
    let empty: Vec<u32> = Vec::new();
    assert!(podium(&empty).is_empty());
}

#[test]
fn min_games_filter_steps_and_defaults() {
    assert_eq!(min_games_filter(5), None);
    assert_eq!(min_games_filter(0), None);
    assert_eq!(
        min_games_filter(10),
        Some(MinGamesFilter {
            step: 2,
            max_value: 10
        })
    );
    assert_eq!(
        min_games_filter(15),
        Some(MinGamesFilter {
            step: 2,
            max_value: 14
        })
    );
    assert_eq!(
        min_games_filter(22),
        Some(MinGamesFilter {
            step: 5,
            max_value: 20
        })
    );
    assert_eq!(
        min_games_filter(60),
        Some(MinGamesFilter {
            step: 5,
            max_value: 60
        })
    );
}

#[test]
fn min_games_floor_drops_backups() {
    let rows = vec![
        goalie("Starter", 55, &[("save_pct", 91.5)]),
        goalie("Backup", 4, &[("save_pct", 94.0)]),
    ];
    let kept = apply_min_games(rows, 20);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].full_name, "Starter");
}
