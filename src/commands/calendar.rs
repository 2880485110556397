use anyhow::Result;
use dongnae_core::favorites::{FavoritesStore, JsonFavorites};
use dongnae_core::filter::{FilterState, filter_programs};
use dongnae_core::month::Month;
use dongnae_core::occurrence::{expand, group_by_date};

use crate::data;
use crate::render;

pub async fn run(month: Month, filters: FilterState) -> Result<()> {
    let programs = data::load_programs_or_empty().await;
    let favorites = JsonFavorites::open_default()?.load()?;

    let filtered = filter_programs(&programs, &filters, &favorites);
    let by_date = group_by_date(expand(&filtered, month));

    println!("{}", render::render_month(month, &by_date, None));
    Ok(())
}
