//! Interactive calendar browsing.
//!
//! This is the event shell: it owns the single `AppState`, maps each menu
//! action onto a state mutation, and re-renders after every step.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use dongnae_core::favorites::JsonFavorites;
use dongnae_core::month::Month;
use owo_colors::OwoColorize;

use crate::app::AppState;
use crate::data;
use crate::render;

const ACTIONS: [&str; 9] = [
    "다음 달",
    "이전 달",
    "오늘",
    "날짜 선택",
    "기관 필터",
    "자치구 필터",
    "즐겨찾기만 보기 전환",
    "즐겨찾기 토글",
    "종료",
];

pub async fn run(month: Month) -> Result<()> {
    let programs = data::load_programs_or_empty().await;
    let favorites = JsonFavorites::open_default()?;
    let mut state = AppState::new(programs, month, favorites);

    loop {
        let by_date = state.by_date()?;

        println!();
        println!(
            "{}",
            render::render_month(state.month, &by_date, state.selected)
        );

        match state.selected {
            Some(date) => {
                let empty = Vec::new();
                let items = by_date.get(&date).unwrap_or(&empty);
                println!();
                println!("{}", render::render_day_list(date, items, &state.favorites()?));
            }
            None => {
                println!();
                println!("{}", "날짜를 선택하면 프로그램이 표시됩니다.".dimmed());
            }
        }

        println!();
        let choice = Select::new()
            .with_prompt("동작")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match ACTIONS[choice] {
            "다음 달" => state.next_month(),
            "이전 달" => state.prev_month(),
            "오늘" => state.goto_today(),
            "날짜 선택" => select_day(&mut state)?,
            "기관 필터" => {
                state.filters.org = pick_option("기관", state.org_options())?;
                state.selected = None;
            }
            "자치구 필터" => {
                state.filters.district = pick_option("자치구", state.district_options())?;
                state.selected = None;
            }
            "즐겨찾기만 보기 전환" => {
                state.filters.favorites_only = !state.filters.favorites_only;
            }
            "즐겨찾기 토글" => toggle_favorite(&state)?,
            _ => break,
        }
    }

    Ok(())
}

fn select_day(state: &mut AppState) -> Result<()> {
    let day: u32 = Input::new()
        .with_prompt(format!("날짜 (1-{})", state.month.day_count()))
        .interact_text()?;

    match NaiveDate::from_ymd_opt(state.month.year(), state.month.month(), day) {
        Some(date) => state.select(date),
        None => eprintln!("{}", "잘못된 날짜입니다.".red()),
    }

    Ok(())
}

fn pick_option(prompt: &str, options: Vec<String>) -> Result<Option<String>> {
    let mut items = vec!["전체".to_string()];
    items.extend(options);

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        None
    } else {
        Some(items[choice].clone())
    })
}

fn toggle_favorite(state: &AppState) -> Result<()> {
    let Some(date) = state.selected else {
        eprintln!("{}", "먼저 날짜를 선택해주세요.".dimmed());
        return Ok(());
    };

    let by_date = state.by_date()?;
    let empty = Vec::new();
    let items = by_date.get(&date).unwrap_or(&empty);

    if items.is_empty() {
        eprintln!("{}", "해당 날짜에 일정이 없습니다.".dimmed());
        return Ok(());
    }

    let labels: Vec<String> = items
        .iter()
        .map(|o| {
            o.program
                .title
                .clone()
                .unwrap_or_else(|| "프로그램".to_string())
        })
        .collect();

    let choice = Select::new()
        .with_prompt("프로그램")
        .items(&labels)
        .default(0)
        .interact()?;

    let id = items[choice].program.favorite_id();
    if state.toggle_favorite(&id)? {
        println!("{} 즐겨찾기에 추가했습니다.", "★".yellow());
    } else {
        println!("{} 즐겨찾기에서 해제했습니다.", "☆".dimmed());
    }

    Ok(())
}
