use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fleet-command")]
#[command(about = "Voice command backend for the fleet map demo")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the bind host from the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port from the config file
    #[arg(short, long)]
    pub port: Option<u16>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Loads the config file when one is given and applies the command line overrides.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let cli = CliConfig::parse_from(["fleet-command", "--port", "8088", "--host", "127.0.0.1"]);
        let config = cli.load().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8088");
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let cli = CliConfig::parse_from(["fleet-command", "--config", "/nonexistent/fleet.toml"]);
        assert!(matches!(
            cli.load(),
            Err(crate::utils::error::FleetError::IoError(_))
        ));
    }
}
