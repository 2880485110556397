//! Occurrence expansion and date grouping.
//!
//! Expansion materializes each program's schedule into per-day occurrences.
//! Open-ended weekly schedules have no bounds of their own, so the displayed
//! month is an explicit parameter here rather than ambient state.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::month::Month;
use crate::program::{Program, Schedule};

/// A program materialized onto one concrete calendar date.
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub program: Program,
    pub date: NaiveDate,
}

/// Expand programs into dated occurrences.
///
/// Output preserves input program order, then ascending day order within
/// each program. No cross-program sorting happens here; grouping takes
/// care of date order.
pub fn expand(programs: &[Program], month: Month) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    for program in programs {
        for date in schedule_dates(&program.schedule, month) {
            occurrences.push(Occurrence {
                program: program.clone(),
                date,
            });
        }
    }

    occurrences
}

fn schedule_dates(schedule: &Schedule, month: Month) -> Vec<NaiveDate> {
    match schedule {
        Schedule::Single(date) => vec![*date],
        Schedule::Range { start, end } => days_inclusive(*start, *end).collect(),
        Schedule::WeeklyBounded {
            weekday,
            start,
            end,
        } => days_inclusive(*start, *end)
            .filter(|d| d.weekday() == *weekday)
            .collect(),
        Schedule::WeeklyOpenEnded { weekday } => {
            month.days().filter(|d| d.weekday() == *weekday).collect()
        }
    }
}

fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Group occurrences by date, preserving arrival order within each date.
pub fn group_by_date(occurrences: Vec<Occurrence>) -> BTreeMap<NaiveDate, Vec<Occurrence>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Occurrence>> = BTreeMap::new();

    for occurrence in occurrences {
        by_date.entry(occurrence.date).or_default().push(occurrence);
    }

    by_date
}
