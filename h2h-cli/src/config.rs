/// Config file loading and creation for the h2h CLI.
///
/// Config lives at ~/.config/h2h/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

/// Results API used when neither --endpoint nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "https://worldathletics.nimarion.de";

/// The fixed comparison run when no athletes are given.
pub const DEFAULT_ATHLETE_A: &str = "Cole Hocker";
pub const DEFAULT_ATHLETE_B: &str = "Cooper Teare";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Default, Debug)]
pub struct H2hConfig {
    pub endpoint: Option<String>,
    pub athlete_a: Option<String>,
    pub athlete_b: Option<String>,
    pub year: Option<u32>,
    pub timeout_secs: Option<u64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# h2h configuration
# All values here can be overridden by CLI flags.

# Results API base URL
# endpoint = \"https://worldathletics.nimarion.de\"

# Athletes compared when none are given on the command line
# athlete_a = \"Cole Hocker\"
# athlete_b = \"Cooper Teare\"

# Only fetch results from this season
# year = 2024

# Per-request timeout in seconds
# timeout_secs = 30
";

/// Returns the default config path: ~/.config/h2h/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("h2h").join("config.toml")
}

fn parse_config(content: &str, path: &Path) -> H2hConfig {
    toml::from_str(content)
        .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> H2hConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => H2hConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
