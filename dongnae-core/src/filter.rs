//! Program filtering (org, district, favorites-only).

use std::collections::HashSet;

use crate::program::Program;

/// Current filter selections. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub org: Option<String>,
    pub district: Option<String>,
    pub favorites_only: bool,
}

impl FilterState {
    pub fn matches(&self, program: &Program, favorites: &HashSet<String>) -> bool {
        let org_ok = match &self.org {
            Some(org) => program.org.as_deref() == Some(org.as_str()),
            None => true,
        };
        let district_ok = match &self.district {
            Some(district) => program.district.as_deref() == Some(district.as_str()),
            None => true,
        };
        let favorites_ok = !self.favorites_only || favorites.contains(&program.favorite_id());

        org_ok && district_ok && favorites_ok
    }
}

/// Pure filter over the full program list.
pub fn filter_programs(
    programs: &[Program],
    filters: &FilterState,
    favorites: &HashSet<String>,
) -> Vec<Program> {
    programs
        .iter()
        .filter(|p| filters.matches(p, favorites))
        .cloned()
        .collect()
}

/// Distinct non-empty values, sorted. Used for filter option lists.
pub fn unique_sorted<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut out: Vec<String> = values
        .flatten()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::ProgramRecord;

    fn program(org: &str, district: &str) -> Program {
        Program::classify(ProgramRecord {
            org: Some(org.to_string()),
            district: Some(district.to_string()),
            title: Some("프로그램".to_string()),
            date: Some("2024-03-05".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_org_filter_keeps_exact_matches_only() {
        let programs = vec![program("A", "종로구"), program("B", "종로구")];
        let filters = FilterState {
            org: Some("A".to_string()),
            ..Default::default()
        };

        let filtered = filter_programs(&programs, &filters, &HashSet::new());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].org.as_deref(), Some("A"));
    }

    #[test]
    fn test_default_state_matches_everything() {
        let programs = vec![program("A", "종로구"), program("B", "마포구")];

        let filtered = filter_programs(&programs, &FilterState::default(), &HashSet::new());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_district_and_org_combine() {
        let programs = vec![
            program("A", "종로구"),
            program("A", "마포구"),
            program("B", "종로구"),
        ];
        let filters = FilterState {
            org: Some("A".to_string()),
            district: Some("종로구".to_string()),
            favorites_only: false,
        };

        let filtered = filter_programs(&programs, &filters, &HashSet::new());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_favorites_only_checks_derived_id() {
        let programs = vec![program("A", "종로구"), program("B", "마포구")];
        let favorites: HashSet<String> = [programs[0].favorite_id()].into_iter().collect();
        let filters = FilterState {
            favorites_only: true,
            ..Default::default()
        };

        let filtered = filter_programs(&programs, &filters, &favorites);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].org.as_deref(), Some("A"));
    }

    #[test]
    fn test_unique_sorted_drops_duplicates_and_empties() {
        let values = vec![Some("마포구"), Some("종로구"), Some("마포구"), Some(""), None];
        assert_eq!(
            unique_sorted(values.into_iter()),
            vec!["마포구".to_string(), "종로구".to_string()]
        );
    }
}
