use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[frontend]
dist_dir = "dist"
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
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the frontend bundle directory from configuration
/// Relative paths are kept relative to the working directory, like `trunk build` output
pub fn get_dist_path(config: &Config) -> anyhow::Result<PathBuf> {
    let dist = Path::new(&config.frontend.dist_dir);

    if dist.is_absolute() {
        return Ok(dist.to_path_buf());
    }

    let cwd = std::env::current_dir()?;
    Ok(cwd.join(dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).expect("default config");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.frontend.dist_dir, "dist");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").is_err());
    }

    #[test]
    fn test_absolute_dist_path_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).expect("default config");
        let abs = std::env::temp_dir().join("switchpro-dist");
        config.frontend.dist_dir = abs.display().to_string();
        assert_eq!(get_dist_path(&config).expect("path"), abs);
    }

    #[test]
    fn test_relative_dist_path_resolved_from_cwd() {
        let config = parse_config(DEFAULT_CONFIG).expect("default config");
        let path = get_dist_path(&config).expect("path");
        assert!(path.is_absolute());
        assert!(path.ends_with("dist"));
    }
}
