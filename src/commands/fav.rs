use anyhow::Result;
use dongnae_core::favorites::{FavoritesStore, JsonFavorites};
use owo_colors::OwoColorize;

use crate::data;

pub async fn list() -> Result<()> {
    let store = JsonFavorites::open_default()?;
    let favorites = store.load()?;

    if favorites.is_empty() {
        println!("{}", "즐겨찾기가 없습니다.".dimmed());
        return Ok(());
    }

    // Resolve ids back to titles where the current data still has them
    let programs = data::load_programs_or_empty().await;

    let mut ids: Vec<String> = favorites.into_iter().collect();
    ids.sort();

    for id in ids {
        match programs.iter().find(|p| p.favorite_id() == id) {
            Some(program) => println!(
                "{} {} {}",
                "★".yellow(),
                program.title.as_deref().unwrap_or("프로그램"),
                format!("({id})").dimmed()
            ),
            None => println!("{} {}", "★".yellow(), id.dimmed()),
        }
    }

    Ok(())
}

pub fn toggle(id: &str) -> Result<()> {
    let store = JsonFavorites::open_default()?;

    if store.toggle(id)? {
        println!("{} 즐겨찾기에 추가했습니다: {id}", "★".yellow());
    } else {
        println!("{} 즐겨찾기에서 해제했습니다: {id}", "☆".dimmed());
    }

    Ok(())
}
