//! Mutable application state for the interactive browse loop.
//!
//! The browse command owns exactly one `AppState`; every event handler
//! mutates it and then re-renders through the pure pipeline in
//! dongnae-core. Nothing else holds state.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use dongnae_core::error::DongnaeResult;
use dongnae_core::favorites::{FavoritesStore, JsonFavorites};
use dongnae_core::filter::{FilterState, filter_programs, unique_sorted};
use dongnae_core::month::Month;
use dongnae_core::occurrence::{Occurrence, expand, group_by_date};
use dongnae_core::program::Program;

pub struct AppState {
    pub programs: Vec<Program>,
    pub filters: FilterState,
    pub month: Month,
    pub selected: Option<NaiveDate>,
    favorites: JsonFavorites,
}

impl AppState {
    pub fn new(programs: Vec<Program>, month: Month, favorites: JsonFavorites) -> Self {
        AppState {
            programs,
            filters: FilterState::default(),
            month,
            selected: None,
            favorites,
        }
    }

    pub fn favorites(&self) -> DongnaeResult<HashSet<String>> {
        self.favorites.load()
    }

    /// Run the pure pipeline for the current state:
    /// filter, expand against the displayed month, group by date.
    pub fn by_date(&self) -> DongnaeResult<BTreeMap<NaiveDate, Vec<Occurrence>>> {
        let favorites = self.favorites.load()?;
        let filtered = filter_programs(&self.programs, &self.filters, &favorites);
        Ok(group_by_date(expand(&filtered, self.month)))
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
        self.selected = None;
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
        self.selected = None;
    }

    pub fn goto_today(&mut self) {
        self.month = Month::current();
        self.selected = None;
    }

    /// Select a date, replacing any previous selection.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn toggle_favorite(&self, id: &str) -> DongnaeResult<bool> {
        self.favorites.toggle(id)
    }

    pub fn org_options(&self) -> Vec<String> {
        unique_sorted(self.programs.iter().map(|p| p.org.as_deref()))
    }

    pub fn district_options(&self) -> Vec<String> {
        unique_sorted(self.programs.iter().map(|p| p.district.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dongnae_core::program::ProgramRecord;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let favorites = JsonFavorites::new(dir.path().join("favorites.json"));

        let programs = vec![
            Program::classify(ProgramRecord {
                org: Some("A".to_string()),
                district: Some("종로구".to_string()),
                title: Some("요가 교실".to_string()),
                date: Some("2024-03-05".to_string()),
                ..Default::default()
            })
            .unwrap(),
            Program::classify(ProgramRecord {
                org: Some("B".to_string()),
                district: Some("마포구".to_string()),
                title: Some("바둑 교실".to_string()),
                date: Some("2024-03-06".to_string()),
                ..Default::default()
            })
            .unwrap(),
        ];

        let state = AppState::new(programs, Month::new(2024, 3).unwrap(), favorites);
        (dir, state)
    }

    #[test]
    fn test_month_navigation_clears_selection() {
        let (_dir, mut state) = state();
        state.select(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        state.next_month();
        assert_eq!(state.month, Month::new(2024, 4).unwrap());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_by_date_reflects_filters() {
        let (_dir, mut state) = state();
        assert_eq!(state.by_date().unwrap().len(), 2);

        state.filters.org = Some("A".to_string());
        let by_date = state.by_date().unwrap();
        assert_eq!(by_date.len(), 1);
        assert!(by_date.contains_key(&NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
    }

    #[test]
    fn test_favorites_only_uses_toggled_set() {
        let (_dir, mut state) = state();
        let id = state.programs[0].favorite_id();

        assert!(state.toggle_favorite(&id).unwrap());
        state.filters.favorites_only = true;
        assert_eq!(state.by_date().unwrap().len(), 1);

        assert!(!state.toggle_favorite(&id).unwrap());
        assert_eq!(state.by_date().unwrap().len(), 0);
    }

    #[test]
    fn test_filter_options_are_distinct_and_sorted() {
        let (_dir, state) = state();
        assert_eq!(state.org_options(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(
            state.district_options(),
            vec!["마포구".to_string(), "종로구".to_string()]
        );
    }
}
