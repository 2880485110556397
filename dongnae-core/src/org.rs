//! Organization directory records and free-text search.

use serde::Deserialize;

/// One entry in the organization data file. Everything is optional; the
/// file is externally owned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Org {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub district: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
}

impl Org {
    /// All searchable text joined and lowercased, matching the page's
    /// type/name/district/tags/address concatenation.
    fn search_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.kind.as_deref());
        parts.extend(self.name.as_deref());
        parts.extend(self.district.as_deref());
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.address.as_deref());
        parts.join(" ").to_lowercase()
    }
}

/// Case-insensitive substring search. An empty query returns everything.
pub fn search_orgs<'a>(orgs: &'a [Org], query: &str) -> Vec<&'a Org> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return orgs.iter().collect();
    }

    orgs.iter()
        .filter(|org| org.search_text().contains(&query))
        .collect()
}
