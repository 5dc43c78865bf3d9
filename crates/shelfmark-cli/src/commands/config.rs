use anyhow::{Context, Result};
use shelfmark_client::{config, Config};
use toml_edit::DocumentMut;

const KEYS: [&str; 4] = ["api_base_url", "token_path", "log_level", "log_coloured"];

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown config key: {}\n\nValid keys: {}", key, KEYS.join(", "))
}

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!(
        "  api_base_url: {}",
        config.api_base_url.as_deref().unwrap_or("<not set>")
    );
    println!("  effective backend: {}", config.base_url());
    println!("  token_path: {}", config.token_path.display());
    println!("  log_level: {}", config.log_level);
    println!("  log_coloured: {}", config.log_coloured);

    println!("\nPriority: CLI args > ENV vars (SHELFMARK_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the whole file.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        let config_path = config::config_file_path();
        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'shelfmark config init' to create it.");
        }
        return Ok(());
    };

    match key.as_str() {
        "api_base_url" => println!("{}", config.base_url()),
        "token_path" => println!("{}", config.token_path.display()),
        "log_level" => println!("{}", config.log_level),
        "log_coloured" => println!("{}", config.log_coloured),
        _ => return Err(unknown_key(&key)),
    }

    Ok(())
}

/// Set a config value, keeping the rest of the file (comments included)
/// intact.
pub fn set_config(key: &str, value: &str) -> Result<()> {
    let config_path = config::config_file_path();
    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = set_key(&contents, key, value)?;
    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

fn set_key(contents: &str, key: &str, value: &str) -> Result<String> {
    let mut doc = contents
        .parse::<DocumentMut>()
        .context("Failed to parse config file")?;

    match key {
        "log_coloured" => {
            let flag: bool = value
                .parse()
                .with_context(|| format!("log_coloured must be true or false, got {:?}", value))?;
            doc[key] = toml_edit::value(flag);
        }
        "api_base_url" | "token_path" | "log_level" => {
            doc[key] = toml_edit::value(value);
        }
        _ => return Err(unknown_key(key)),
    }

    Ok(doc.to_string())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure shelfmark.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
