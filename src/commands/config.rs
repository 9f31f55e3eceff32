use anyhow::Result;
use owo_colors::OwoColorize;
use rangepick_core::config::PickerConfig;

pub fn run() -> Result<()> {
    let config_path = PickerConfig::config_path()?;

    if !config_path.exists() {
        PickerConfig::create_default_config(&config_path)?;
        println!("{} {}", "Created".green(), config_path.display());
        println!();
    }

    let config = PickerConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:       {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Week start:   {}", config.week_start);
    println!("  Grid layout:  {}", config.grid_layout);
    println!(
        "  Month names:  {}",
        if config.month_names.is_some() {
            "custom"
        } else {
            "English"
        }
    );

    Ok(())
}
