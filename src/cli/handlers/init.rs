use crate::config::{BoardConfig, CONFIG_FILE_NAME};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = BoardConfig::default();
    config.save(&config_path)?;

    println!("{} lingoboard config in {}", "Initialized".green(), cwd.display());
    println!("  Config:  {}", config_path.display());
    println!(
        "  Locales: {}",
        config
            .i18n
            .locales
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
