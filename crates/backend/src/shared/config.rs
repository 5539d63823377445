use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the four source CSV files
    pub dir: String,
    /// Text encoding of the wage CSVs; the coordinate lookup is always UTF-8
    pub wage_encoding: WageEncoding,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WageEncoding {
    ShiftJis,
    Utf8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
dir = "data"
wage_encoding = "shift_jis"

[server]
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the data directory from configuration.
/// Relative paths are resolved relative to the executable directory.
pub fn get_data_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let dir = Path::new(&config.data.dir);

    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(dir));
        }
    }

    Ok(PathBuf::from(&config.data.dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.data.dir, "data");
        assert_eq!(config.data.wage_encoding, WageEncoding::ShiftJis);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_utf8_encoding_parses() {
        let config: Config = toml::from_str(
            "[data]\ndir = \"csv\"\nwage_encoding = \"utf8\"\n[server]\nport = 8080\n",
        )
        .unwrap();
        assert_eq!(config.data.wage_encoding, WageEncoding::Utf8);
    }
}
