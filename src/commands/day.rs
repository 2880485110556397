use anyhow::Result;
use chrono::NaiveDate;
use dongnae_core::favorites::{FavoritesStore, JsonFavorites};
use dongnae_core::filter::{FilterState, filter_programs};
use dongnae_core::month::Month;
use dongnae_core::occurrence::{Occurrence, expand, group_by_date};
use owo_colors::OwoColorize;

use crate::data;
use crate::render;

pub async fn run(date: NaiveDate, filters: FilterState, open: Option<usize>) -> Result<()> {
    let programs = data::load_programs_or_empty().await;
    let favorites = JsonFavorites::open_default()?.load()?;

    let filtered = filter_programs(&programs, &filters, &favorites);
    let by_date = group_by_date(expand(&filtered, Month::containing(date)));

    let empty = Vec::new();
    let items = by_date.get(&date).unwrap_or(&empty);

    if let Some(n) = open {
        return open_link(items, n);
    }

    println!("{}", render::render_day_list(date, items, &favorites));
    Ok(())
}

/// Open program `n`'s participation link, falling back to its map link.
fn open_link(items: &[Occurrence], n: usize) -> Result<()> {
    let Some(occurrence) = n.checked_sub(1).and_then(|i| items.get(i)) else {
        anyhow::bail!("No program #{} on that date", n);
    };

    let link = occurrence.program.link.clone().or_else(|| {
        occurrence
            .program
            .address
            .as_deref()
            .and_then(render::map_search_url)
    });

    match link {
        Some(link) => {
            open::that(&link)?;
            println!("{} {}", "열었습니다:".dimmed(), link);
            Ok(())
        }
        None => anyhow::bail!("참여 링크 없음"),
    }
}
