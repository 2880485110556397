//! Shared constants.

/// Canonical date format used for parsing, grouping, and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// File name of the program schedule data inside the data directory.
pub const PROGRAMS_FILE: &str = "programs.seoul.json";

/// File name of the organization directory data inside the data directory.
pub const ORGS_FILE: &str = "orgs.seoul.json";
