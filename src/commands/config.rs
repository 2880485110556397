use anyhow::Result;
use dongnae_core::dongnae::Dongnae;
use dongnae_core::dongnae_config::DongnaeConfig;
use owo_colors::OwoColorize;

pub fn show() -> Result<()> {
    let config_path = DongnaeConfig::config_path()?;
    let dongnae = Dongnae::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Data:      {}", dongnae.data_path().display());
    println!();
    println!("{}", "Sources".bold());
    println!("  Programs:  {}", dongnae.programs_source());
    println!("  Orgs:      {}", dongnae.orgs_source());

    Ok(())
}

pub fn set_data_dir(path: &str) -> Result<()> {
    let mut dongnae = Dongnae::load()?;
    dongnae.set_data_dir(path)?;

    println!("데이터 디렉터리를 설정했습니다: {path}");
    Ok(())
}
