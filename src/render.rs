//! Terminal rendering for the calendar grid, day cards, and the org table.
//!
//! Rendering is pure string building; the commands print the result. Colors
//! come from owo_colors, matching the rest of the output.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Local, NaiveDate};
use dongnae_core::constants::DATE_FORMAT;
use dongnae_core::month::Month;
use dongnae_core::occurrence::Occurrence;
use dongnae_core::org::Org;
use owo_colors::OwoColorize;
use url::Url;

pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Display columns per grid cell.
const CELL_WIDTH: usize = 7;

/// Render the month grid: title, weekday headers, leading blanks, then one
/// cell per day with its occurrence count. Today is highlighted regardless
/// of selection.
pub fn render_month(
    month: Month,
    by_date: &BTreeMap<NaiveDate, Vec<Occurrence>>,
    selected: Option<NaiveDate>,
) -> String {
    let mut lines = Vec::new();
    lines.push(month.title().bold().to_string());
    lines.push(String::new());

    // Hangul labels occupy two display columns
    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|w| format!("{}{}", w, " ".repeat(CELL_WIDTH - 2)))
        .collect();
    lines.push(header.dimmed().to_string());

    let today = Local::now().date_naive();
    let mut row: Vec<String> = Vec::new();

    for _ in 0..month.leading_blanks() {
        row.push(" ".repeat(CELL_WIDTH));
    }

    for date in month.days() {
        let count = by_date.get(&date).map(Vec::len).unwrap_or(0);
        let badge = if count > 0 {
            format!("·{count}")
        } else {
            String::new()
        };
        let cell = format!("{:>2}{:<width$}", date.day(), badge, width = CELL_WIDTH - 2);

        let cell = if selected == Some(date) {
            cell.reversed().to_string()
        } else if date == today {
            cell.cyan().bold().to_string()
        } else if count > 0 {
            cell.yellow().to_string()
        } else {
            cell
        };

        row.push(cell);
        if row.len() == 7 {
            lines.push(row.join(""));
            row.clear();
        }
    }

    if !row.is_empty() {
        lines.push(row.join(""));
    }

    lines.join("\n")
}

/// Render the day-detail cards for one date.
pub fn render_day_list(
    date: NaiveDate,
    items: &[Occurrence],
    favorites: &HashSet<String>,
) -> String {
    if items.is_empty() {
        return format!("{} 일정이 없습니다.", date.format(DATE_FORMAT))
            .dimmed()
            .to_string();
    }

    let mut lines = Vec::new();

    for (i, occurrence) in items.iter().enumerate() {
        let program = &occurrence.program;

        let star = if favorites.contains(&program.favorite_id()) {
            "★".yellow().to_string()
        } else {
            "☆".dimmed().to_string()
        };

        let mut pills = Vec::new();
        for value in [&program.time, &program.org, &program.district]
            .into_iter()
            .flatten()
        {
            pills.push(format!("[{value}]"));
        }

        let title = program.title.as_deref().unwrap_or("프로그램");
        lines.push(format!(
            "{}. {} {} {}",
            i + 1,
            star,
            title.bold(),
            pills.join(" ").dimmed()
        ));

        if let Some(address) = &program.address {
            lines.push(format!("   📍 {address}"));
            if let Some(map) = map_search_url(address) {
                lines.push(format!("   {}", map.dimmed()));
            }
        }

        for line in &program.info {
            let (text, link) = split_info_line(line);
            if !text.is_empty() {
                lines.push(format!("   - {text}"));
            }
            if let Some(link) = link {
                lines.push(format!("     {}", link.underline()));
            }
        }

        match &program.link {
            Some(link) => lines.push(format!("   🔗 참여 링크: {}", link.underline())),
            None => lines.push(format!("   🔗 {}", "참여 링크 없음".dimmed())),
        }

        if i < items.len() - 1 {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Build a map-search URL for an address.
pub fn map_search_url(address: &str) -> Option<String> {
    Url::parse_with_params(
        "https://www.google.com/maps/search/?api=1",
        &[("query", address)],
    )
    .ok()
    .map(|url| url.to_string())
}

/// Split an embedded http(s) URL out of an info line.
/// Returns the remaining text and the URL, if one was found.
pub fn split_info_line(line: &str) -> (String, Option<String>) {
    for scheme in ["https://", "http://"] {
        if let Some(idx) = line.find(scheme) {
            let tail = &line[idx..];
            let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
            let candidate = &tail[..end];

            if Url::parse(candidate).is_ok() {
                let text = format!("{} {}", line[..idx].trim(), tail[end..].trim());
                return (text.trim().to_string(), Some(candidate.to_string()));
            }
        }
    }

    (line.trim().to_string(), None)
}

/// Render the organization table plus the always-present status line.
pub fn render_org_table(hits: &[&Org]) -> String {
    let mut lines = Vec::new();

    for org in hits {
        let icon = match org.kind.as_deref() {
            Some("기관") => "🏢".to_string(),
            Some("링크") => "🔗".to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let name = org.name.as_deref().unwrap_or("");
        let district = org.district.as_deref().unwrap_or("");
        let tags = org.tags.join(" / ");

        let phone = match org.phone.as_deref() {
            Some(phone) => format!("tel:{phone}").cyan().to_string(),
            None => "-".to_string(),
        };
        let website = match org.website.as_deref() {
            Some(website) => format!("바로가기: {}", website.underline()),
            None => "-".to_string(),
        };

        lines.push(format!(
            "{} {} · {} · {}",
            icon,
            name.bold(),
            district,
            tags.dimmed()
        ));
        lines.push(format!("   {phone}  {website}"));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("총 {}개 표시 중", hits.len()));

    lines.join("\n")
}
