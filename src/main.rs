use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use ffc_terminal::columns::{self, ColumnSpec};
use ffc_terminal::playoffs;
use ffc_terminal::rankings::{self, DEFAULT_PAGE_SIZE};
use ffc_terminal::standings;
use ffc_terminal::state::{
    self, page_icon, page_title, AppState, LeadersSection, Page, StandingsTab, ALL_PAGES,
};
use ffc_terminal::tables::{GameRow, PlayerStatRow, StandingsRow};
use ffc_terminal::timefmt;

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.switch_page(Page::Standings),
            KeyCode::Char('2') => self.switch_page(Page::Scores),
            KeyCode::Char('3') => self.switch_page(Page::Schedule),
            KeyCode::Char('4') => self.switch_page(Page::StatLeaders),
            KeyCode::Tab => match self.state.page {
                Page::Standings => self.state.next_standings_tab(),
                Page::StatLeaders => self.state.next_leaders_tab(),
                _ => {}
            },
            KeyCode::BackTab => {
                if self.state.page == Page::StatLeaders {
                    self.state.prev_leaders_tab();
                }
            }
            KeyCode::Char('g') => {
                if self.state.page == Page::StatLeaders {
                    self.state.next_leaders_section();
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.scroll = self.state.scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.scroll = self.state.scroll.saturating_sub(1);
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if self.state.page == Page::StatLeaders {
                    let total = self.state.leaders_total_pages();
                    self.state.leaders_page = (self.state.clamped_page() + 1).min(total);
                    self.state.scroll = 0;
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if self.state.page == Page::StatLeaders {
                    self.state.leaders_page = self.state.clamped_page().saturating_sub(1).max(1);
                    self.state.scroll = 0;
                }
            }
            KeyCode::Char('s') => self.state.cycle_season(),
            KeyCode::Char('y') => self.state.cycle_season_type(),
            KeyCode::Char('t') => self.state.cycle_team(),
            KeyCode::Char('[') | KeyCode::Char('-') => {
                if self.state.page == Page::StatLeaders
                    && self.state.leaders_section == LeadersSection::Goaltenders
                {
                    self.state.adjust_min_games(-1);
                }
            }
            KeyCode::Char(']') | KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.state.page == Page::StatLeaders
                    && self.state.leaders_section == LeadersSection::Goaltenders
                {
                    self.state.adjust_min_games(1);
                }
            }
            KeyCode::Char('r') => {
                self.state.push_log("[INFO] refreshing data");
                state::load_data(&mut self.state);
            }
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn switch_page(&mut self, page: Page) {
        self.state.page = page;
        self.state.scroll = 0;
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    if let Err(err) = columns::validate_registry() {
        eprintln!("invalid column configuration: {err}");
        std::process::exit(1);
    }

    let mut app = App::new();
    state::load_data(&mut app.state);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.page {
        Page::Standings => render_standings(frame, chunks[1], &app.state),
        Page::Scores => render_scores(frame, chunks[1], &app.state),
        Page::Schedule => render_schedule(frame, chunks[1], &app.state),
        Page::StatLeaders => render_leaders(frame, chunks[1], &app.state),
    }

    let footer = Paragraph::new(footer_text(&app.state))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let pages = ALL_PAGES
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let marker = if *page == state.page { "*" } else { " " };
            format!("{marker}{} {} {}", i + 1, page_icon(*page), page_title(*page))
        })
        .collect::<Vec<_>>()
        .join("  ");
    let offline = if state.offline { " [offline]" } else { "" };
    format!(
        "FROZEN FACTS CENTER{offline} | {pages}\nSeason: {}  Type: {}  Team: {}",
        state.selected_season(),
        state.selected_season_type().unwrap_or_else(|| "-".to_string()),
        state.team,
    )
}

fn footer_text(state: &AppState) -> String {
    let keys = match state.page {
        Page::Standings => "1-4 Pages | Tab Standings view | j/k Scroll | s Season | ? Help | q Quit",
        Page::Scores | Page::Schedule => "1-4 Pages | j/k Scroll | t Team | r Refresh | ? Help | q Quit",
        Page::StatLeaders => {
            "1-4 Pages | Tab Stat | g Section | n/p Page | [/] Min games | s/y/t Filters | ? Help | q Quit"
        }
    };
    let last_log = state.logs.back().map(String::as_str).unwrap_or("");
    format!("{keys}\n{last_log}")
}

// Standings ------------------------------------------------------------

fn render_standings(frame: &mut Frame, area: Rect, state: &AppState) {
    // Play-off tab only shows up when the season has playoff games.
    let mut labels = vec![
        StandingsTab::Division.label(),
        StandingsTab::Conference.label(),
        StandingsTab::League.label(),
    ];
    let playoff_rows = state.playoff_rows();
    if !playoff_rows.is_empty() {
        labels.push(StandingsTab::Playoff.label());
    }
    // A season change can empty the playoff table out from under the tab.
    let tab = if state.standings_tab == StandingsTab::Playoff && playoff_rows.is_empty() {
        StandingsTab::Division
    } else {
        state.standings_tab
    };
    let tabs_line = tab_bar(
        &labels,
        match tab {
            StandingsTab::Division => 0,
            StandingsTab::Conference => 1,
            StandingsTab::League => 2,
            StandingsTab::Playoff => 3,
        },
    );

    let mut lines: Vec<Line> = vec![tabs_line, Line::raw("")];
    let rows = state.standings_rows();

    match tab {
        StandingsTab::Division => {
            if rows.is_empty() {
                lines.push(empty_notice("No standings for this season"));
            }
            for conference in standings::group_standings(&rows) {
                lines.push(section_header(&format!("{} Conference", conference.conference)));
                for division in &conference.divisions {
                    lines.push(subsection_header(&division.division));
                    push_standings_table(&mut lines, &division.rows);
                    lines.push(Line::raw(""));
                }
            }
        }
        StandingsTab::Conference => {
            if rows.is_empty() {
                lines.push(empty_notice("No standings for this season"));
            }
            for conference in standings::group_standings(&rows) {
                lines.push(section_header(&format!("{} Conference", conference.conference)));
                push_standings_table(&mut lines, &conference.rows);
                lines.push(Line::raw(""));
            }
        }
        StandingsTab::League => {
            if rows.is_empty() {
                lines.push(empty_notice("No standings for this season"));
            } else {
                push_standings_table(&mut lines, &rows);
            }
        }
        StandingsTab::Playoff => {
            for round in playoffs::group_rounds(&playoff_rows) {
                lines.push(section_header(&round.label));
                for matchup in &round.matchups {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!(
                                "{} {} ",
                                matchup.summary.higher_seed.series_score,
                                matchup.summary.higher_seed.full_name
                            ),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("vs"),
                        Span::styled(
                            format!(
                                " {} {}",
                                matchup.summary.lower_seed.full_name,
                                matchup.summary.lower_seed.series_score
                            ),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]));
                    for game in &matchup.games {
                        lines.push(Line::raw(format!("  {}", playoffs::game_line(game))));
                    }
                    lines.push(Line::raw(""));
                }
            }
        }
    }

    render_scrollable(frame, area, lines, state.scroll);
}

fn push_standings_table(lines: &mut Vec<Line>, rows: &[StandingsRow]) {
    let header = format!(
        "{:>4}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>5} {:>3} {:>3} {:>4} {:>4} {:>5}  {:<8} {:<8} {:<6} {:<6}",
        "Rank", "Team", "GP", "W", "L", "OT", "PTS", "P %", "RW", "ROW", "GF", "GA", "DIFF",
        "HOME", "AWAY", "S/O", "L10",
    );
    lines.push(Line::styled(
        header,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for (idx, row) in rows.iter().enumerate() {
        lines.push(standings_line(idx + 1, row));
    }
}

fn standings_line(rank: usize, row: &StandingsRow) -> Line<'static> {
    let left = format!(
        "{rank:>4}  {:<24} {:>3} {:>3} {:>3} {:>3} ",
        row.team_full_name, row.games_played, row.wins, row.losses, row.ots,
    );
    let points = format!("{:>4}", row.points);
    let mid = format!(
        " {:>5.1} {:>3} {:>3} {:>4} {:>4} ",
        row.points_pct,
        row.wins_reg,
        row.wins_reg_ot,
        row.goals_for,
        row.goals_against,
    );
    let diff = format!("{:>5}", format!("{:+}", row.goals_diff));
    let right = format!(
        "  {:<8} {:<8} {:<6} {:<6}",
        row.record_home, row.record_away, row.record_so, row.record_last_10,
    );

    let diff_style = if row.goals_diff > 0 {
        Style::default().fg(Color::Green)
    } else if row.goals_diff < 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(left),
        Span::styled(
            points,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(mid),
        Span::styled(diff, diff_style),
        Span::raw(right),
    ])
}

// Scores ---------------------------------------------------------------

fn render_scores(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = state.scores_rows();
    let mut lines: Vec<Line> = Vec::new();

    if rows.is_empty() {
        lines.push(empty_notice("No recent games for this team"));
    }

    let mut current_date: Option<&str> = None;
    for row in &rows {
        if current_date != Some(row.local_date.as_str()) {
            if current_date.is_some() {
                lines.push(Line::raw(""));
            }
            lines.push(section_header(&timefmt::pretty_date(&row.local_date)));
            current_date = Some(row.local_date.as_str());
        }
        lines.push(score_line(row));
    }

    render_scrollable(frame, area, lines, state.scroll);
}

fn score_line(row: &GameRow) -> Line<'static> {
    let home_won = row.home_team_score > row.away_team_score;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let plain = Style::default();
    let marker = match row.period_type.as_str() {
        "OT" => " (OT)",
        "SO" => " (SO)",
        _ => "",
    };
    Line::from(vec![
        Span::raw(format!("  {}  ", row.local_time)),
        Span::styled(
            format!(
                "{:<24} {}",
                row.away_team_full_name, row.away_team_score
            ),
            if home_won { plain } else { bold },
        ),
        Span::raw(" @ "),
        Span::styled(
            format!(
                "{} {:<24}",
                row.home_team_score, row.home_team_full_name
            ),
            if home_won { bold } else { plain },
        ),
        Span::raw(marker),
    ])
}

// Schedule -------------------------------------------------------------

fn render_schedule(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = state.schedule_rows();
    let mut lines: Vec<Line> = Vec::new();

    let last_date = rows.last().map(|r| r.local_date.clone()).unwrap_or_default();
    let days = timefmt::days_through(&last_date);

    if days.is_empty() {
        lines.push(empty_notice("No upcoming games for this team"));
    }

    for day in days {
        let date = day.format(timefmt::DATE_FORMAT).to_string();
        lines.push(section_header(&timefmt::pretty_date(&date)));
        let todays: Vec<_> = rows.iter().filter(|r| r.local_date == date).collect();
        if todays.is_empty() {
            lines.push(empty_notice("No games scheduled"));
        }
        for row in todays {
            lines.push(Line::raw(format!(
                "  {}  {:<24} @ {:<24}",
                row.local_time, row.away_team_full_name, row.home_team_full_name,
            )));
        }
        lines.push(Line::raw(""));
    }

    render_scrollable(frame, area, lines, state.scroll);
}

// Stat leaders ---------------------------------------------------------

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

fn render_leaders(frame: &mut Frame, area: Rect, state: &AppState) {
    let tabs = state.leaders_tabs();
    let labels: Vec<&str> = tabs.iter().map(|t| t.label).collect();
    let current = state.leaders_tab.min(tabs.len() - 1);
    let spec = state.current_tab_spec();

    let mut lines: Vec<Line> = vec![
        section_header(state.leaders_section.header()),
        tab_bar(&labels, current),
    ];
    if let Some(help) = spec.help {
        lines.push(Line::styled(help, Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::raw(""));

    if state.leaders_section == LeadersSection::Goaltenders {
        if let (Some(filter), Some(floor)) =
            (state.goalie_min_games(), state.effective_min_games())
        {
            lines.push(Line::styled(
                format!(
                    "Min games played: {floor} (step {}, max {})  adjust with [ and ]",
                    filter.step, filter.max_value
                ),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::raw(""));
        }
    }

    let ranked = state.ranked_leaders(state.leaders_section);
    let page = state.clamped_page();
    let total = rankings::total_pages(ranked.len(), DEFAULT_PAGE_SIZE);
    let page_rows = match rankings::page_slice(&ranked, DEFAULT_PAGE_SIZE, page) {
        Ok(rows) => rows,
        Err(_) => &[],
    };

    if ranked.is_empty() {
        lines.push(empty_notice("No players match the current filters"));
    } else {
        for (idx, entry) in rankings::podium(&ranked).iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", MEDALS[idx])),
                Span::styled(
                    format!("{:<24}", entry.row.full_name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<5}", entry.row.team_abbrev_name)),
                Span::styled(
                    format_stat(entry.row.stat(spec.name), spec),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }
        lines.push(Line::raw(""));

        lines.push(leaders_table_header(state, spec));
        for entry in page_rows {
            lines.push(leaders_line(state, entry.rank, &entry.row, spec));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Page {page} of {total}  ({} players)", ranked.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_scrollable(frame, area, lines, state.scroll);
}

fn leaders_table_header(state: &AppState, spec: &ColumnSpec) -> Line<'static> {
    let pos = if state.leaders_section == LeadersSection::Goaltenders {
        String::new()
    } else {
        format!("{:<4} ", "Pos")
    };
    Line::styled(
        format!(
            "{:>4}  {:<24} {:<5} {pos}{:>4} {:>7} {:>9}",
            "Rank", "Name", "Team", "GP", "TOI", spec.label,
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

fn leaders_line(
    state: &AppState,
    rank: usize,
    row: &PlayerStatRow,
    spec: &ColumnSpec,
) -> Line<'static> {
    let pos = if state.leaders_section == LeadersSection::Goaltenders {
        String::new()
    } else {
        format!("{:<4} ", row.position_code)
    };
    let left = format!(
        "{rank:>4}  {:<24} {:<5} {pos}{:>4} {:>7.1} ",
        row.full_name, row.team_abbrev_name, row.games_played, row.toi_minutes,
    );
    let value = row.stat(spec.name);
    let value_text = format!("{:>9}", format_stat(value, spec));

    let mut value_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    if spec.name == "plus_minus" {
        if let Some(v) = value {
            value_style = if v > 0.0 {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if v < 0.0 {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
        }
    }

    Line::from(vec![Span::raw(left), Span::styled(value_text, value_style)])
}

fn format_stat(value: Option<f64>, spec: &ColumnSpec) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    let sign = if spec.name == "plus_minus" && value > 0.0 {
        "+"
    } else {
        ""
    };
    match spec.precision {
        Some(digits) => format!("{sign}{value:.prec$}", prec = usize::from(digits)),
        None => format!("{sign}{value:.0}"),
    }
}

// Shared widgets -------------------------------------------------------

fn tab_bar(labels: &[&str], current: usize) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if idx == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled((*label).to_string(), style));
    }
    Line::from(spans)
}

fn section_header(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn subsection_header(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

fn empty_notice(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn render_scrollable(frame: &mut Frame, area: Rect, lines: Vec<Line>, scroll: u16) {
    let max_scroll = (lines.len() as u16).saturating_sub(area.height);
    let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Frozen Facts Center - Help",
        "",
        "Global:",
        "  1            Standings",
        "  2            Scores",
        "  3            Schedule",
        "  4            Stat Leaders",
        "  j/k or ↑/↓   Scroll",
        "  s            Cycle season",
        "  y            Cycle season type",
        "  t            Cycle team",
        "  r            Refresh data",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Standings:",
        "  Tab          Division / Conference / League / Play-off",
        "",
        "Stat Leaders:",
        "  Tab / S-Tab  Next / previous stat",
        "  g            Next section (skaters, defensemen, goalies)",
        "  n/p or ←/→   Next / previous page",
        "  [ / ]        Lower / raise goalie min-games floor",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
