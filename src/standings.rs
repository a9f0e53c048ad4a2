//! Standings grouping. Standings arrive fully ordered from the upstream
//! pipeline (points percentage within division); this module only groups and
//! never re-sorts the rows themselves.

use crate::tables::StandingsRow;

#[derive(Debug, Clone)]
pub struct DivisionGroup {
    pub division: String,
    pub rows: Vec<StandingsRow>,
}

#[derive(Debug, Clone)]
pub struct ConferenceGroup {
    pub conference: String,
    /// All conference rows in source order, for the conference-level table.
    pub rows: Vec<StandingsRow>,
    pub divisions: Vec<DivisionGroup>,
}

/// Group season-filtered standings by conference, then division. Conference
/// and division headers are sorted alphabetically; row order within each
/// group is the upstream order.
pub fn group_standings(rows: &[StandingsRow]) -> Vec<ConferenceGroup> {
    let mut conferences: Vec<String> = rows.iter().map(|r| r.conference.clone()).collect();
    conferences.sort();
    conferences.dedup();

    conferences
        .into_iter()
        .map(|conference| {
            let conf_rows: Vec<StandingsRow> = rows
                .iter()
                .filter(|r| r.conference == conference)
                .cloned()
                .collect();

            let mut divisions: Vec<String> =
                conf_rows.iter().map(|r| r.division.clone()).collect();
            divisions.sort();
            divisions.dedup();

            let divisions = divisions
                .into_iter()
                .map(|division| {
                    let div_rows: Vec<StandingsRow> = conf_rows
                        .iter()
                        .filter(|r| r.division == division)
                        .cloned()
                        .collect();
                    debug_assert!(
                        is_ordered_by_points_pct(&div_rows),
                        "standings input for division {division} not ordered by points pct"
                    );
                    DivisionGroup {
                        division,
                        rows: div_rows,
                    }
                })
                .collect();

            ConferenceGroup {
                conference,
                rows: conf_rows,
                divisions,
            }
        })
        .collect()
}

fn is_ordered_by_points_pct(rows: &[StandingsRow]) -> bool {
    rows.windows(2)
        .all(|pair| pair[0].points_pct >= pair[1].points_pct)
}
