//! Loading the program and organization data files.
//!
//! One fetch per run. A load failure is caught once, surfaced as the
//! localized status message, and the pipeline continues with an empty list.
//! Malformed or undatable records are skipped with a warning on stderr.

use anyhow::{Context, Result};
use dongnae_core::dongnae::Dongnae;
use dongnae_core::org::Org;
use dongnae_core::program::{Program, ProgramRecord};
use owo_colors::OwoColorize;

use crate::utils::tui::create_spinner;

const PROGRAMS_LOAD_ERROR: &str =
    "일정 데이터를 불러오지 못했어요. 데이터 경로가 맞는지 확인해주세요.";
const ORGS_LOAD_ERROR: &str =
    "데이터를 불러오지 못했어요. JSON 파일 경로가 맞는지 확인해주세요.";

/// Load programs, or report the failure and continue with an empty list.
pub async fn load_programs_or_empty() -> Vec<Program> {
    match load_programs().await {
        Ok(programs) => programs,
        Err(e) => {
            eprintln!("{}", e.to_string().dimmed());
            eprintln!("{}", PROGRAMS_LOAD_ERROR.red());
            Vec::new()
        }
    }
}

/// Load organizations, or report the failure and continue with an empty list.
pub async fn load_orgs_or_empty() -> Vec<Org> {
    match load_orgs().await {
        Ok(orgs) => orgs,
        Err(e) => {
            eprintln!("{}", e.to_string().dimmed());
            eprintln!("{}", ORGS_LOAD_ERROR.red());
            Vec::new()
        }
    }
}

async fn load_programs() -> Result<Vec<Program>> {
    let dongnae = Dongnae::load()?;
    let raw = fetch_json_array(&dongnae.programs_source()).await?;

    let mut programs = Vec::new();
    for value in raw {
        let record: ProgramRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn(&format!("일정 항목 건너뜀: {e}"));
                continue;
            }
        };

        let label = record
            .title
            .clone()
            .unwrap_or_else(|| "(제목 없음)".to_string());
        match Program::classify(record) {
            Ok(program) => programs.push(program),
            Err(e) if e.is_silent() => {}
            Err(e) => warn(&format!("일정 항목 건너뜀 '{label}': {e}")),
        }
    }

    Ok(programs)
}

async fn load_orgs() -> Result<Vec<Org>> {
    let dongnae = Dongnae::load()?;
    let raw = fetch_json_array(&dongnae.orgs_source()).await?;

    let mut orgs = Vec::new();
    for value in raw {
        match serde_json::from_value(value) {
            Ok(org) => orgs.push(org),
            Err(e) => warn(&format!("기관 항목 건너뜀: {e}")),
        }
    }

    Ok(orgs)
}

/// Fetch a JSON array from a file path or an http(s) URL.
async fn fetch_json_array(source: &str) -> Result<Vec<serde_json::Value>> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        let spinner = create_spinner("데이터 불러오는 중...".to_string());
        let result = fetch_remote(source).await;
        spinner.finish_and_clear();
        result?
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Could not read data file '{source}'"))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&body).with_context(|| format!("Invalid JSON in '{source}'"))?;

    match value {
        serde_json::Value::Array(items) => Ok(items),
        _ => anyhow::bail!("JSON 형식 오류: 배열([])이어야 합니다."),
    }
}

async fn fetch_remote(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Request to '{url}' failed"))?
        .error_for_status()
        .with_context(|| format!("Request to '{url}' returned an error status"))?;

    Ok(response.text().await?)
}

fn warn(message: &str) {
    eprintln!("{}", message.yellow());
}
