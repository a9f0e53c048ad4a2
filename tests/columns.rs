use ffc_terminal::columns::{
    precision_groups, section_columns, tab_columns, validate_registry, ConfigError, TablePage,
    TableSection,
};

#[test]
fn registry_validates() {
    validate_registry().expect("shipped registry should be consistent");
}

#[test]
fn every_known_section_has_columns() {
    for (page, section) in ffc_terminal::columns::KNOWN_SECTIONS {
        let columns = section_columns(page, section).expect("section should be configured");
        assert!(!columns.is_empty());
        assert_eq!(columns[0].name, "rank");
    }
}

#[test]
fn undefined_pair_is_an_error() {
    let err = section_columns(TablePage::Standings, TableSection::Goalies)
        .expect_err("standings page has no goalie section");
    assert_eq!(
        err,
        ConfigError::UnknownSection {
            page: TablePage::Standings,
            section: TableSection::Goalies,
        }
    );
}

#[test]
fn skater_tabs_are_in_table_order() {
    let tabs = tab_columns(TablePage::StatLeaders, TableSection::Skaters)
        .expect("skater tabs configured");
    let names: Vec<&str> = tabs.iter().map(|t| t.name).collect();
    assert_eq!(names.first(), Some(&"points"));
    assert_eq!(names.last(), Some(&"pim"));
    assert_eq!(names.len(), 15);
    assert!(tabs.iter().all(|t| !t.sort_ascending));
}

#[test]
fn goalie_tabs_mark_lower_is_better_metrics() {
    let tabs = tab_columns(TablePage::StatLeaders, TableSection::Goalies)
        .expect("goalie tabs configured");
    assert_eq!(tabs.len(), 6);
    let ascending: Vec<&str> = tabs
        .iter()
        .filter(|t| t.sort_ascending)
        .map(|t| t.name)
        .collect();
    assert_eq!(ascending, vec!["gaa", "goals_against", "xg_against"]);
}

#[test]
fn standings_has_no_tabs() {
    let tabs = tab_columns(TablePage::Standings, TableSection::Standings)
        .expect("standings configured");
    assert!(tabs.is_empty());
}

#[test]
fn precision_groups_cover_configured_decimals() {
    let groups = precision_groups(TablePage::StatLeaders, TableSection::Goalies)
        .expect("goalie section configured");
    assert_eq!(groups.get(&2).map(Vec::as_slice), Some(&["gaa"][..]));
    let one_digit = groups.get(&1).expect("one-digit group present");
    assert!(one_digit.contains(&"save_pct"));
    assert!(one_digit.contains(&"xg_against"));
    assert!(one_digit.contains(&"saved_goals_above_expected"));
}
