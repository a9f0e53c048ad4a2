use std::collections::VecDeque;

use crate::columns::{self, ColumnSpec, TablePage, TableSection};
use crate::filters::{self, ALL_TEAMS_OPTION};
use crate::rankings::{self, DEFAULT_PAGE_SIZE, MAX_GOALIES_PER_TEAM, RankedRow};
use crate::remote;
use crate::sample;
use crate::tables::{GameRow, PlayerStatRow, PlayoffGameRow, ScheduleRow, StandingsRow};

const MAX_LOGS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Standings,
    Scores,
    Schedule,
    StatLeaders,
}

pub const ALL_PAGES: [Page; 4] = [
    Page::Standings,
    Page::Scores,
    Page::Schedule,
    Page::StatLeaders,
];

pub fn page_title(page: Page) -> &'static str {
    match page {
        Page::Standings => "Standings",
        Page::Scores => "Scores",
        Page::Schedule => "Schedule",
        Page::StatLeaders => "Stat Leaders",
    }
}

pub fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Standings => "🏆",
        Page::Scores => "🚨",
        Page::Schedule => "📅",
        Page::StatLeaders => "🎯",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsTab {
    Division,
    Conference,
    League,
    Playoff,
}

impl StandingsTab {
    pub fn label(self) -> &'static str {
        match self {
            StandingsTab::Division => "Division",
            StandingsTab::Conference => "Conference",
            StandingsTab::League => "League",
            StandingsTab::Playoff => "Play-off",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadersSection {
    Skaters,
    Defensemen,
    Goaltenders,
}

pub const ALL_LEADERS_SECTIONS: [LeadersSection; 3] = [
    LeadersSection::Skaters,
    LeadersSection::Defensemen,
    LeadersSection::Goaltenders,
];

impl LeadersSection {
    pub fn header(self) -> &'static str {
        match self {
            LeadersSection::Skaters => "Skaters",
            LeadersSection::Defensemen => "Defensemen",
            LeadersSection::Goaltenders => "Goaltenders",
        }
    }

    pub fn table_section(self) -> TableSection {
        match self {
            LeadersSection::Goaltenders => TableSection::Goalies,
            _ => TableSection::Skaters,
        }
    }

    fn contains(self, row: &PlayerStatRow) -> bool {
        match self {
            LeadersSection::Skaters => !row.is_goalie(),
            LeadersSection::Defensemen => row.is_defenseman(),
            LeadersSection::Goaltenders => row.is_goalie(),
        }
    }
}

pub struct AppState {
    pub page: Page,
    pub standings_tab: StandingsTab,
    pub leaders_section: LeadersSection,
    /// Index into the current section's tab columns.
    pub leaders_tab: usize,
    /// 1-based page number, clamped before the engine is called.
    pub leaders_page: usize,
    /// Games-played floor for the goalie section when the slider is showing.
    /// `None` means "use the default (maximum) floor".
    pub min_games: Option<u32>,

    pub season: Option<String>,
    pub season_type: Option<String>,
    pub team: String,

    pub standings: Vec<StandingsRow>,
    pub playoff_games: Vec<PlayoffGameRow>,
    pub scores: Vec<GameRow>,
    pub schedule: Vec<ScheduleRow>,
    pub stats: Vec<PlayerStatRow>,

    pub scroll: u16,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub offline: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::Standings,
            standings_tab: StandingsTab::Division,
            leaders_section: LeadersSection::Skaters,
            leaders_tab: 0,
            leaders_page: 1,
            min_games: None,
            season: None,
            season_type: None,
            team: ALL_TEAMS_OPTION.to_string(),
            standings: Vec::new(),
            playoff_games: Vec::new(),
            scores: Vec::new(),
            schedule: Vec::new(),
            stats: Vec::new(),
            scroll: 0,
            logs: VecDeque::new(),
            help_overlay: false,
            offline: false,
        }
    }

    pub fn push_log(&mut self, message: impl Into<String>) {
        if self.logs.len() >= MAX_LOGS {
            self.logs.pop_front();
        }
        self.logs.push_back(message.into());
    }

    // Filter options and selections -------------------------------------

    pub fn season_options(&self) -> Vec<String> {
        let mut seasons = filters::distinct_in_order(
            self.standings
                .iter()
                .map(|r| r.season.as_str())
                .chain(self.stats.iter().map(|r| r.season.as_str())),
        );
        if seasons.is_empty() {
            seasons.push(sample::SAMPLE_SEASON.to_string());
        }
        seasons
    }

    pub fn season_type_options(&self) -> Vec<String> {
        filters::distinct_in_order(self.stats.iter().map(|r| r.season_type.as_str()))
    }

    pub fn team_options(&self) -> Vec<String> {
        filters::team_options(
            self.standings
                .iter()
                .map(|r| r.team_full_name.as_str())
                .chain(self.stats.iter().map(|r| r.team_full_name.as_str()))
                .chain(self.scores.iter().flat_map(|r| {
                    [
                        r.home_team_full_name.as_str(),
                        r.away_team_full_name.as_str(),
                    ]
                })),
        )
    }

    pub fn selected_season(&self) -> String {
        self.season
            .clone()
            .or_else(|| self.season_options().first().cloned())
            .unwrap_or_default()
    }

    pub fn selected_season_type(&self) -> Option<String> {
        self.season_type
            .clone()
            .or_else(|| self.season_type_options().first().cloned())
    }

    pub fn cycle_season(&mut self) {
        let options = self.season_options();
        self.season = Some(cycle_option(&options, &self.selected_season()));
        self.reset_view();
    }

    pub fn cycle_season_type(&mut self) {
        let options = self.season_type_options();
        if options.is_empty() {
            return;
        }
        let current = self.selected_season_type().unwrap_or_default();
        self.season_type = Some(cycle_option(&options, &current));
        self.reset_view();
    }

    pub fn cycle_team(&mut self) {
        let options = self.team_options();
        self.team = cycle_option(&options, &self.team);
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.leaders_page = 1;
        self.min_games = None;
        self.scroll = 0;
    }

    // Season-filtered views ---------------------------------------------

    pub fn standings_rows(&self) -> Vec<StandingsRow> {
        let season = self.selected_season();
        self.standings
            .iter()
            .filter(|r| r.season == season)
            .cloned()
            .collect()
    }

    pub fn playoff_rows(&self) -> Vec<PlayoffGameRow> {
        let season = self.selected_season();
        self.playoff_games
            .iter()
            .filter(|r| r.season == season)
            .cloned()
            .collect()
    }

    pub fn scores_rows(&self) -> Vec<GameRow> {
        filters::filter_scores(&self.scores, &self.team)
    }

    pub fn schedule_rows(&self) -> Vec<ScheduleRow> {
        filters::filter_schedule(&self.schedule, &self.team)
    }

    // Stat leaders ------------------------------------------------------

    pub fn leaders_tabs(&self) -> Vec<&'static ColumnSpec> {
        columns::tab_columns(TablePage::StatLeaders, self.leaders_section.table_section())
            .expect("column registry validated at startup")
    }

    pub fn current_tab_spec(&self) -> &'static ColumnSpec {
        let tabs = self.leaders_tabs();
        tabs[self.leaders_tab.min(tabs.len() - 1)]
    }

    /// Season/type/team-filtered pool for a leaders section, before the
    /// goalie minimum-games floor.
    pub fn leaders_pool(&self, section: LeadersSection) -> Vec<PlayerStatRow> {
        let season = self.selected_season();
        let season_type = self.selected_season_type();
        filters::filter_stats(&self.stats, &season, season_type.as_deref(), &self.team)
            .into_iter()
            .filter(|r| section.contains(r))
            .collect()
    }

    /// Slider parameters for the goalie pool, when the filter applies at all.
    pub fn goalie_min_games(&self) -> Option<rankings::MinGamesFilter> {
        let pool = self.leaders_pool(LeadersSection::Goaltenders);
        if pool.len() <= MAX_GOALIES_PER_TEAM {
            return None;
        }
        let max_games = pool.iter().map(|r| r.games_played).max().unwrap_or(0);
        rankings::min_games_filter(max_games)
    }

    pub fn effective_min_games(&self) -> Option<u32> {
        let filter = self.goalie_min_games()?;
        Some(
            self.min_games
                .unwrap_or(filter.max_value)
                .min(filter.max_value),
        )
    }

    pub fn adjust_min_games(&mut self, delta: i64) {
        let Some(filter) = self.goalie_min_games() else {
            return;
        };
        let current = i64::from(self.min_games.unwrap_or(filter.max_value));
        let next =
            (current + delta * i64::from(filter.step)).clamp(0, i64::from(filter.max_value));
        self.min_games = Some(next as u32);
        self.leaders_page = 1;
    }

    /// The single ranked sequence both the podium and pagination draw from.
    pub fn ranked_leaders(&self, section: LeadersSection) -> Vec<RankedRow> {
        let mut pool = self.leaders_pool(section);
        if section == LeadersSection::Goaltenders {
            if let Some(floor) = self.effective_min_games() {
                pool = rankings::apply_min_games(pool, floor);
            }
        }
        rankings::rank_by(pool, self.current_tab_spec())
    }

    pub fn leaders_total_pages(&self) -> usize {
        let count = self.ranked_leaders(self.leaders_section).len();
        rankings::total_pages(count, DEFAULT_PAGE_SIZE)
    }

    pub fn clamped_page(&self) -> usize {
        self.leaders_page.clamp(1, self.leaders_total_pages())
    }

    pub fn next_leaders_tab(&mut self) {
        let len = self.leaders_tabs().len();
        self.leaders_tab = (self.leaders_tab + 1) % len;
        self.leaders_page = 1;
        self.scroll = 0;
    }

    pub fn prev_leaders_tab(&mut self) {
        let len = self.leaders_tabs().len();
        self.leaders_tab = (self.leaders_tab + len - 1) % len;
        self.leaders_page = 1;
        self.scroll = 0;
    }

    pub fn next_leaders_section(&mut self) {
        let idx = ALL_LEADERS_SECTIONS
            .iter()
            .position(|s| *s == self.leaders_section)
            .unwrap_or(0);
        self.leaders_section = ALL_LEADERS_SECTIONS[(idx + 1) % ALL_LEADERS_SECTIONS.len()];
        self.leaders_tab = 0;
        self.leaders_page = 1;
        self.min_games = None;
        self.scroll = 0;
    }

    pub fn next_standings_tab(&mut self) {
        let has_playoff = !self.playoff_rows().is_empty();
        self.standings_tab = match self.standings_tab {
            StandingsTab::Division => StandingsTab::Conference,
            StandingsTab::Conference => StandingsTab::League,
            StandingsTab::League if has_playoff => StandingsTab::Playoff,
            StandingsTab::League | StandingsTab::Playoff => StandingsTab::Division,
        };
        self.scroll = 0;
    }
}

fn cycle_option(options: &[String], current: &str) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let idx = options.iter().position(|o| o == current).unwrap_or(0);
    options[(idx + 1) % options.len()].clone()
}

/// Load every dataset, falling back to the built-in sample data when offline
/// or when a remote read fails. Remote errors are logged, never retried here.
pub fn load_data(state: &mut AppState) {
    let offline = std::env::var("FFC_OFFLINE").is_ok_and(|v| v == "1");
    state.offline = offline;
    if offline {
        state.push_log("[INFO] FFC_OFFLINE=1, using sample data");
        load_sample(state);
        return;
    }

    let mut failed = false;
    match remote::load_standings() {
        Ok(rows) => state.standings = rows,
        Err(err) => {
            failed = true;
            state.push_log(format!("[WARN] standings fetch failed: {err:#}"));
        }
    }
    match remote::load_playoff_games() {
        Ok(rows) => state.playoff_games = rows,
        Err(err) => {
            failed = true;
            state.push_log(format!("[WARN] playoff fetch failed: {err:#}"));
        }
    }
    match remote::load_scores() {
        Ok(rows) => state.scores = rows,
        Err(err) => {
            failed = true;
            state.push_log(format!("[WARN] scores fetch failed: {err:#}"));
        }
    }
    match remote::load_schedule() {
        Ok(rows) => state.schedule = rows,
        Err(err) => {
            failed = true;
            state.push_log(format!("[WARN] schedule fetch failed: {err:#}"));
        }
    }
    match remote::load_player_stats() {
        Ok(rows) => state.stats = rows,
        Err(err) => {
            failed = true;
            state.push_log(format!("[WARN] stats fetch failed: {err:#}"));
        }
    }

    if failed {
        state.offline = true;
        state.push_log("[INFO] remote reads failed, filling gaps with sample data");
        load_sample_missing(state);
    } else {
        state.push_log("[INFO] data refreshed");
    }
}

fn load_sample(state: &mut AppState) {
    state.standings = sample::standings();
    state.playoff_games = sample::playoff_games();
    state.scores = sample::scores();
    state.schedule = sample::schedule();
    state.stats = sample::player_stats();
}

fn load_sample_missing(state: &mut AppState) {
    if state.standings.is_empty() {
        state.standings = sample::standings();
    }
    if state.playoff_games.is_empty() {
        state.playoff_games = sample::playoff_games();
    }
    if state.scores.is_empty() {
        state.scores = sample::scores();
    }
    if state.schedule.is_empty() {
        state.schedule = sample::schedule();
    }
    if state.stats.is_empty() {
        state.stats = sample::player_stats();
    }
}
