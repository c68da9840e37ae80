use anyhow::Result;

use inkpress_core::AppConfig;

pub fn run(init: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    println!("Config file: {}", config_path.display());

    if !init {
        if !config_path.exists() {
            println!("\nNo config file yet. Create one with:");
            println!("  inkpress config --init");
        }
        return Ok(());
    }

    if config_path.exists() {
        println!("Config file already exists, leaving it unchanged.");
        return Ok(());
    }

    AppConfig::default().save()?;
    tracing::info!(path = %config_path.display(), "Wrote default configuration");
    println!("Wrote default configuration. Set `api_key` under [ai] before running.");

    Ok(())
}
