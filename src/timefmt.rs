//! Game start times arrive as UTC strings; display happens in the process
//! local timezone (the terminal analog of asking the browser for one).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), UTC_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Local-timezone (date, time) strings for a UTC stamp. Unparseable stamps
/// yield empty fields rather than an error; the row still renders.
pub fn local_date_time(raw_utc: &str) -> (String, String) {
    match parse_utc(raw_utc) {
        Some(dt) => {
            let local = dt.with_timezone(&Local);
            (
                local.format(DATE_FORMAT).to_string(),
                local.format(TIME_FORMAT).to_string(),
            )
        }
        None => (String::new(), String::new()),
    }
}

/// "2025-03-09" -> "9 Mar 2025" for section headers.
pub fn pretty_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) => d.format("%-d %b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Every day from today (local) through `last_date` inclusive, for the
/// schedule listing. Empty when `last_date` is unparseable or in the past.
pub fn days_through(last_date: &str) -> Vec<NaiveDate> {
    let Ok(end) = NaiveDate::parse_from_str(last_date, DATE_FORMAT) else {
        return Vec::new();
    };
    let mut day = Local::now().date_naive();
    let mut out = Vec::new();
    while day <= end {
        out.push(day);
        day = day.succ_opt().expect("date overflow");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utc_stamp() {
        let dt = parse_utc("2025-03-08T23:30:00Z").expect("stamp should parse");
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2025-03-08 23:30");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc("").is_none());
        assert!(parse_utc("yesterday").is_none());
    }

    #[test]
    fn pretty_date_drops_zero_padding() {
        assert_eq!(pretty_date("2025-03-09"), "9 Mar 2025");
        assert_eq!(pretty_date("2025-11-21"), "21 Nov 2025");
    }

    #[test]
    fn pretty_date_passes_through_unparseable() {
        assert_eq!(pretty_date("TBD"), "TBD");
    }

    #[test]
    fn days_through_past_date_is_empty() {
        assert!(days_through("2001-01-01").is_empty());
    }
}
