//! Program records and load-time schedule classification.
//!
//! The data file is externally owned and loosely typed, so every field of
//! [`ProgramRecord`] is optional. Classification resolves each record's
//! date declaration into a [`Schedule`] exactly once, at load time; the
//! expander never has to shape-sniff raw records again.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use crate::constants::DATE_FORMAT;

/// Raw JSON shape of one entry in the program data file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    pub id: Option<String>,
    pub org: Option<String>,
    pub district: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub repeat: Option<RepeatRecord>,
    pub time: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub info: Vec<String>,
    pub link: Option<String>,
}

/// Weekly-repeat descriptor as it appears in the data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepeatRecord {
    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub weekday: Option<i64>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// How a program resolves onto concrete dates, decided once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// One fixed date.
    Single(NaiveDate),
    /// Every day from start to end, inclusive.
    Range { start: NaiveDate, end: NaiveDate },
    /// A fixed weekday between two bounds, inclusive.
    WeeklyBounded {
        weekday: Weekday,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// A fixed weekday with no bounds; expands within the displayed month.
    WeeklyOpenEnded { weekday: Weekday },
}

impl Schedule {
    /// Stable textual form, used as part of the derived favorite id.
    pub fn signature(&self) -> String {
        match self {
            Schedule::Single(date) => date.format(DATE_FORMAT).to_string(),
            Schedule::Range { start, end } => {
                format!("{}~{}", start.format(DATE_FORMAT), end.format(DATE_FORMAT))
            }
            Schedule::WeeklyBounded {
                weekday,
                start,
                end,
            } => format!(
                "w{}:{}~{}",
                weekday.num_days_from_sunday(),
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
            Schedule::WeeklyOpenEnded { weekday } => {
                format!("w{}", weekday.num_days_from_sunday())
            }
        }
    }
}

/// Why a record was dropped during classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Unparseable or reversed start/end pair. Reported as a warning.
    InvalidRange { start: String, end: String },
    /// Weekday index missing, non-integer, or outside 0..=6. Dropped silently.
    InvalidWeekday,
    /// No usable date information at all. Reported as a warning.
    NoUsableDate,
}

impl ClassifyError {
    /// Whether the record should be dropped without a warning.
    pub fn is_silent(&self) -> bool {
        matches!(self, ClassifyError::InvalidWeekday)
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InvalidRange { start, end } => {
                write!(f, "invalid or reversed date range '{start}' ~ '{end}'")
            }
            ClassifyError::InvalidWeekday => write!(f, "invalid weekday index"),
            ClassifyError::NoUsableDate => write!(f, "no usable date information"),
        }
    }
}

/// A program with its schedule resolved.
#[derive(Debug, Clone)]
pub struct Program {
    pub id: Option<String>,
    pub org: Option<String>,
    pub district: Option<String>,
    pub title: Option<String>,
    pub time: Option<String>,
    pub address: Option<String>,
    pub info: Vec<String>,
    pub link: Option<String>,
    pub schedule: Schedule,
}

impl Program {
    /// Resolve a raw record into a typed program.
    ///
    /// Rules are tried in order, first match wins:
    /// 1. a canonical `date` field
    /// 2. an explicit `startDate`/`endDate` pair
    /// 3. a weekly `repeat` descriptor
    /// 4. an inline `"start ~ end"` string in the `date` field
    pub fn classify(record: ProgramRecord) -> Result<Program, ClassifyError> {
        let schedule = resolve_schedule(&record)?;

        Ok(Program {
            id: record.id,
            org: record.org,
            district: record.district,
            title: record.title,
            time: record.time,
            address: record.address,
            info: record.info,
            link: record.link,
            schedule,
        })
    }

    /// Stable key identifying this program across renders.
    ///
    /// Uses the explicit id when the data file provides one, otherwise a
    /// composite of org, title, and the schedule signature.
    pub fn favorite_id(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }

        format!(
            "{}|{}|{}",
            self.org.as_deref().unwrap_or(""),
            self.title.as_deref().unwrap_or(""),
            self.schedule.signature()
        )
    }
}

fn resolve_schedule(record: &ProgramRecord) -> Result<Schedule, ClassifyError> {
    // Rule 1: single canonical date
    if let Some(date) = record.date.as_deref()
        && let Some(parsed) = parse_date(date)
    {
        return Ok(Schedule::Single(parsed));
    }

    // Rule 2: explicit start/end pair
    if let (Some(start), Some(end)) = (record.start_date.as_deref(), record.end_date.as_deref()) {
        return parse_range(start, end).map(|(start, end)| Schedule::Range { start, end });
    }

    // Rule 3: weekly repeat
    if let Some(repeat) = &record.repeat {
        let weekday = repeat
            .weekday
            .and_then(weekday_from_sunday_index)
            .ok_or(ClassifyError::InvalidWeekday)?;

        match (repeat.start.as_deref(), repeat.end.as_deref()) {
            (Some(start), Some(end)) => {
                return parse_range(start, end).map(|(start, end)| Schedule::WeeklyBounded {
                    weekday,
                    start,
                    end,
                });
            }
            (None, None) => return Ok(Schedule::WeeklyOpenEnded { weekday }),
            // A single bound is not a defined shape; fall through.
            _ => {}
        }
    }

    // Rule 4: inline "start ~ end" string
    if let Some(date) = record.date.as_deref()
        && let Some((start, end)) = date.split_once('~')
        && let (Some(start), Some(end)) = (parse_date(start.trim()), parse_date(end.trim()))
        && start <= end
    {
        return Ok(Schedule::Range { start, end });
    }

    Err(ClassifyError::NoUsableDate)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    // Canonical YYYY-MM-DD only; chrono alone would also accept unpadded forms
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Parse both bounds; unparseable or reversed pairs drop the record.
fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), ClassifyError> {
    let invalid = || ClassifyError::InvalidRange {
        start: start.to_string(),
        end: end.to_string(),
    };

    let start_date = parse_date(start).ok_or_else(invalid)?;
    let end_date = parse_date(end).ok_or_else(invalid)?;

    if start_date > end_date {
        return Err(invalid());
    }

    Ok((start_date, end_date))
}

fn weekday_from_sunday_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProgramRecord {
        ProgramRecord {
            org: Some("A".to_string()),
            title: Some("요가 교실".to_string()),
            ..Default::default()
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_single_date_classifies_unchanged() {
        let mut rec = record();
        rec.date = Some("2024-03-05".to_string());

        let program = Program::classify(rec).unwrap();
        assert_eq!(program.schedule, Schedule::Single(date("2024-03-05")));
        assert_eq!(program.org.as_deref(), Some("A"));
    }

    #[test]
    fn test_single_date_wins_over_range_fields() {
        let mut rec = record();
        rec.date = Some("2024-03-05".to_string());
        rec.start_date = Some("2024-04-01".to_string());
        rec.end_date = Some("2024-04-03".to_string());

        let program = Program::classify(rec).unwrap();
        assert_eq!(program.schedule, Schedule::Single(date("2024-03-05")));
    }

    #[test]
    fn test_explicit_range() {
        let mut rec = record();
        rec.start_date = Some("2024-03-05".to_string());
        rec.end_date = Some("2024-03-07".to_string());

        let program = Program::classify(rec).unwrap();
        assert_eq!(
            program.schedule,
            Schedule::Range {
                start: date("2024-03-05"),
                end: date("2024-03-07"),
            }
        );
    }

    #[test]
    fn test_reversed_range_is_dropped_with_warning() {
        let mut rec = record();
        rec.start_date = Some("2024-03-07".to_string());
        rec.end_date = Some("2024-03-05".to_string());

        let err = Program::classify(rec).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidRange { .. }));
        assert!(!err.is_silent());
    }

    #[test]
    fn test_unparseable_range_bound_is_dropped() {
        let mut rec = record();
        rec.start_date = Some("2024-03-05".to_string());
        rec.end_date = Some("not-a-date".to_string());

        let err = Program::classify(rec).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidRange { .. }));
    }

    #[test]
    fn test_weekly_bounded() {
        let mut rec = record();
        rec.repeat = Some(RepeatRecord {
            weekday: Some(2),
            start: Some("2024-03-01".to_string()),
            end: Some("2024-03-31".to_string()),
        });

        let program = Program::classify(rec).unwrap();
        assert_eq!(
            program.schedule,
            Schedule::WeeklyBounded {
                weekday: Weekday::Tue,
                start: date("2024-03-01"),
                end: date("2024-03-31"),
            }
        );
    }

    #[test]
    fn test_weekly_open_ended() {
        let mut rec = record();
        rec.repeat = Some(RepeatRecord {
            weekday: Some(0),
            start: None,
            end: None,
        });

        let program = Program::classify(rec).unwrap();
        assert_eq!(
            program.schedule,
            Schedule::WeeklyOpenEnded {
                weekday: Weekday::Sun
            }
        );
    }

    #[test]
    fn test_invalid_weekday_is_dropped_silently() {
        for weekday in [Some(7), Some(-1), None] {
            let mut rec = record();
            rec.repeat = Some(RepeatRecord {
                weekday,
                start: None,
                end: None,
            });

            let err = Program::classify(rec).unwrap_err();
            assert_eq!(err, ClassifyError::InvalidWeekday);
            assert!(err.is_silent());
        }
    }

    #[test]
    fn test_inline_range_string() {
        let mut rec = record();
        rec.date = Some("2024-03-05 ~ 2024-03-07".to_string());

        let program = Program::classify(rec).unwrap();
        assert_eq!(
            program.schedule,
            Schedule::Range {
                start: date("2024-03-05"),
                end: date("2024-03-07"),
            }
        );
    }

    #[test]
    fn test_broken_inline_range_falls_through() {
        let mut rec = record();
        rec.date = Some("2024-03-07 ~ 2024-03-05".to_string());

        let err = Program::classify(rec).unwrap_err();
        assert_eq!(err, ClassifyError::NoUsableDate);
    }

    #[test]
    fn test_unpadded_date_is_not_canonical() {
        let mut rec = record();
        rec.date = Some("2024-3-5".to_string());

        let err = Program::classify(rec).unwrap_err();
        assert_eq!(err, ClassifyError::NoUsableDate);
    }

    #[test]
    fn test_no_date_information_warns() {
        let err = Program::classify(record()).unwrap_err();
        assert_eq!(err, ClassifyError::NoUsableDate);
        assert!(!err.is_silent());
    }

    #[test]
    fn test_favorite_id_prefers_explicit_id() {
        let mut rec = record();
        rec.id = Some("prog-42".to_string());
        rec.date = Some("2024-03-05".to_string());

        let program = Program::classify(rec).unwrap();
        assert_eq!(program.favorite_id(), "prog-42");
    }

    #[test]
    fn test_favorite_id_is_stable_across_classifications() {
        let make = || {
            let mut rec = record();
            rec.date = Some("2024-03-05".to_string());
            Program::classify(rec).unwrap()
        };

        assert_eq!(make().favorite_id(), make().favorite_id());
        assert_eq!(make().favorite_id(), "A|요가 교실|2024-03-05");
    }
}
