//! Config command - show the effective configuration

use std::path::Path;

use tasklens::config::Config;
use tasklens::output::OutputMode;

/// Print the configuration in effect and where it came from
pub fn show_config(config: &Config, explicit: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let source = Config::locate(explicit);

    match mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "source": source,
                    "config": config,
                })
            );
        },
        OutputMode::Human => {
            match &source {
                Some(path) => println!("# {}", path.display()),
                None => println!("# built-in defaults ({} not found)", Config::default_path().display()),
            }
            print!("{}", config.to_toml()?);
        },
    }
    Ok(())
}
