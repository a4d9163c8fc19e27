use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::HoliplanConfig;

pub fn run(config: &HoliplanConfig) -> Result<()> {
    let config_path = HoliplanConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
