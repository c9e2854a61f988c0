//! `shelfwise init` — write a sample configuration file.

use shelfwise_config::AppConfig;

pub fn run() -> anyhow::Result<()> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(&config_path, AppConfig::default_toml())?;

    println!("Wrote sample config to {}", config_path.display());
    println!("Set SHELFWISE_API_KEY (or GEMINI_API_KEY) and run `shelfwise chat`.");
    Ok(())
}
