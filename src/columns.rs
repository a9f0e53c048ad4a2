use std::collections::HashMap;

use thiserror::Error;

/// Identifies a configured table page. Scores and schedule pages render free
/// layouts and carry no column registry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TablePage {
    Standings,
    StatLeaders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSection {
    Standings,
    Skaters,
    Goalies,
}

/// All (page, section) pairs the registry must define.
pub const KNOWN_SECTIONS: [(TablePage, TableSection); 3] = [
    (TablePage::Standings, TableSection::Standings),
    (TablePage::StatLeaders, TableSection::Skaters),
    (TablePage::StatLeaders, TableSection::Goalies),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Number,
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Small,
    Medium,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no column configuration for {page:?}/{section:?}")]
    UnknownSection {
        page: TablePage,
        section: TableSection,
    },
    #[error("duplicate column {name} in {page:?}/{section:?}")]
    DuplicateColumn {
        page: TablePage,
        section: TableSection,
        name: &'static str,
    },
    #[error("column {name} has precision {precision}, expected 1..=3")]
    BadPrecision { name: &'static str, precision: u8 },
}

/// Display and sort metadata for one table column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub help: Option<&'static str>,
    pub kind: ColumnKind,
    pub width: Option<ColumnWidth>,
    /// Decimal digits for display, 1..=3. `None` means raw value.
    pub precision: Option<u8>,
    /// Tab columns double as selectable leaderboard sort keys.
    pub is_tab: bool,
    /// Set only for lower-is-better metrics (gaa, goals_against, xg_against).
    pub sort_ascending: bool,
}

impl ColumnSpec {
    const fn new(name: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            label,
            help: None,
            kind,
            width: None,
            precision: None,
            is_tab: false,
            sort_ascending: false,
        }
    }

    const fn number(name: &'static str, label: &'static str, help: &'static str) -> Self {
        let mut spec = Self::new(name, label, ColumnKind::Number);
        spec.help = Some(help);
        spec
    }

    const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnKind::Text)
    }

    const fn image(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnKind::Image)
    }

    const fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    const fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    const fn precision(mut self, digits: u8) -> Self {
        self.precision = Some(digits);
        self
    }

    const fn tab(mut self) -> Self {
        self.is_tab = true;
        self
    }

    const fn ascending(mut self) -> Self {
        self.sort_ascending = true;
        self
    }
}

static STANDINGS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::number("rank", "Rank", "Rank"),
    ColumnSpec::image("team_logo_url", "Team").width(ColumnWidth::Small),
    ColumnSpec::text("team_full_name", " ").width(ColumnWidth::Medium),
    ColumnSpec::number("games_played", "GP", "Games played"),
    ColumnSpec::number("wins", "W", "Wins (worth two points)"),
    ColumnSpec::number("losses", "L", "Losses (worth zero points)"),
    ColumnSpec::number("ots", "OT", "OT/Shootout losses (worth one point)"),
    ColumnSpec::number("points", "PTS", "Points"),
    ColumnSpec::number("points_pct", "P %", "Points Percentage").precision(1),
    ColumnSpec::number("wins_reg", "RW", "Regulation Wins"),
    ColumnSpec::number("wins_reg_ot", "ROW", "Regulation plus Overtime Wins"),
    ColumnSpec::number("goals_for", "GF", "Goals For"),
    ColumnSpec::number("goals_against", "GA", "Goals Against"),
    ColumnSpec::number("goals_diff", "DIFF", "Goal Differential"),
    ColumnSpec::text("record_home", "HOME").help("Home Record"),
    ColumnSpec::text("record_away", "AWAY").help("Away Record"),
    ColumnSpec::text("record_so", "S/O").help("Record in games decided by Shootout"),
    ColumnSpec::text("record_last_10", "L10").help("Record in last ten games"),
];

static SKATER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::number("rank", "Rank", "Rank"),
    ColumnSpec::image("headshot_url", "Photo").width(ColumnWidth::Small),
    ColumnSpec::text("full_name", "Name").width(ColumnWidth::Medium),
    ColumnSpec::text("team_abbrev_name", "Team").width(ColumnWidth::Small),
    ColumnSpec::text("position_code", "Position").width(ColumnWidth::Small),
    ColumnSpec::number("games_played", "GP", "Games Played"),
    ColumnSpec::number("toi_minutes", "TOI", "Time On Ice Minutes"),
    ColumnSpec::number("points", "PTS", "Points").tab(),
    ColumnSpec::number("goals", "G", "Goals").tab(),
    ColumnSpec::number("assists", "A", "Assists").tab(),
    ColumnSpec::number("plus_minus", "+/-", "Plus-Minus").tab(),
    ColumnSpec::number("even_strength_points", "ESP", "Even Strength Points").tab(),
    ColumnSpec::number("even_strength_goals", "ESG", "Even Strength Goals").tab(),
    ColumnSpec::number("power_play_points", "PPP", "Power Play Points").tab(),
    ColumnSpec::number("power_play_goals", "PPG", "Power Play Goals").tab(),
    ColumnSpec::number("shorthanded_points", "SHP", "Shorthanded Points").tab(),
    ColumnSpec::number("shorthanded_goals", "SHG", "Shorthanded Goals").tab(),
    ColumnSpec::number("ot_goals", "OTG", "Overtime Goals").tab(),
    ColumnSpec::number("game_winning_goals", "GWG", "Game Winning Goals").tab(),
    ColumnSpec::number("shots", "Shots", "Shots").tab(),
    ColumnSpec::number("shoot_pct", "Shoot %", "Shooting Percentage")
        .precision(1)
        .tab(),
    ColumnSpec::number("pim", "PIM", "Penalty Minutes").tab(),
];

static GOALIE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::number("rank", "Rank", "Rank"),
    ColumnSpec::image("headshot_url", "Photo").width(ColumnWidth::Small),
    ColumnSpec::text("full_name", "Name").width(ColumnWidth::Medium),
    ColumnSpec::text("team_abbrev_name", "Team").width(ColumnWidth::Small),
    ColumnSpec::number("games_played", "GP", "Games Played"),
    ColumnSpec::number("toi_minutes", "TOI", "Time On Ice Minutes"),
    ColumnSpec::number("gaa", "GAA", "Goals Against Average")
        .precision(2)
        .tab()
        .ascending(),
    ColumnSpec::number("save_pct", "Save %", "Save Percentage")
        .precision(1)
        .tab(),
    ColumnSpec::number("shutouts", "SO", "Shutouts").tab(),
    ColumnSpec::number("goals_against", "GA", "Goals Against")
        .tab()
        .ascending(),
    ColumnSpec::number("xg_against", "xGA", "Expected Goals Against")
        .precision(1)
        .tab()
        .ascending(),
    ColumnSpec::number("saved_goals_above_expected", "SGAE", "Saved Goals Above Expected")
        .precision(1)
        .tab(),
];

/// Ordered column descriptors for a (page, section) pair. An undefined pair
/// is a programming error surfaced at startup by [`validate_registry`].
pub fn section_columns(
    page: TablePage,
    section: TableSection,
) -> Result<&'static [ColumnSpec], ConfigError> {
    match (page, section) {
        (TablePage::Standings, TableSection::Standings) => Ok(STANDINGS_COLUMNS),
        (TablePage::StatLeaders, TableSection::Skaters) => Ok(SKATER_COLUMNS),
        (TablePage::StatLeaders, TableSection::Goalies) => Ok(GOALIE_COLUMNS),
        _ => Err(ConfigError::UnknownSection { page, section }),
    }
}

/// Tab descriptors in table order. These define both the tab labels shown to
/// the user and the sort key used per tab.
pub fn tab_columns(
    page: TablePage,
    section: TableSection,
) -> Result<Vec<&'static ColumnSpec>, ConfigError> {
    Ok(section_columns(page, section)?
        .iter()
        .filter(|spec| spec.is_tab)
        .collect())
}

/// Column names grouped by required display precision.
pub fn precision_groups(
    page: TablePage,
    section: TableSection,
) -> Result<HashMap<u8, Vec<&'static str>>, ConfigError> {
    let mut groups: HashMap<u8, Vec<&'static str>> = HashMap::new();
    for spec in section_columns(page, section)? {
        if let Some(digits) = spec.precision {
            groups.entry(digits).or_default().push(spec.name);
        }
    }
    Ok(groups)
}

/// Check the registry for completeness and internal consistency. Run once at
/// process start; a failure here aborts before anything renders.
pub fn validate_registry() -> Result<(), ConfigError> {
    for (page, section) in KNOWN_SECTIONS {
        let columns = section_columns(page, section)?;
        let mut seen: Vec<&'static str> = Vec::with_capacity(columns.len());
        for spec in columns {
            if seen.contains(&spec.name) {
                return Err(ConfigError::DuplicateColumn {
                    page,
                    section,
                    name: spec.name,
                });
            }
            seen.push(spec.name);
            if let Some(digits) = spec.precision {
                if !(1..=3).contains(&digits) {
                    return Err(ConfigError::BadPrecision {
                        name: spec.name,
                        precision: digits,
                    });
                }
            }
        }
    }
    Ok(())
}
