//! Application configuration.
//!
//! Loaded from a YAML file whose path comes from `--config <path>` or the
//! `INLINE_CALENDAR_CONFIG` environment variable. Every field has a default,
//! so a missing file section (or no file at all) is fine.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::models::labels::{
    default_day_names, default_month_names, CalendarLabels,
};

pub const CONFIG_ENV_VAR: &str = "INLINE_CALENDAR_CONFIG";

/// Upper limit for `months_back` and `months_ahead` (a century)
pub const MAX_WINDOW_MONTHS: u32 = 1200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub calendar: CalendarDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origin allowed by CORS; any origin when unset
    pub allowed_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            allowed_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Values used when an init request leaves fields out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDefaults {
    pub month_names: Vec<String>,
    pub day_names: Vec<String>,
    /// Months reachable before the base month when no minimum is given
    pub months_back: u32,
    /// Months reachable after the base month when no maximum is given
    pub months_ahead: u32,
}

impl Default for CalendarDefaults {
    fn default() -> Self {
        Self {
            month_names: default_month_names(),
            day_names: default_day_names(),
            months_back: 12,
            months_ahead: 12,
        }
    }
}

impl AppConfig {
    /// Read and validate a YAML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the config path from the command line, then the environment.
    /// Without either, defaults are used.
    pub fn load(args: &[String]) -> Result<Self> {
        match config_path(args)? {
            Some(path) => Self::from_file(path),
            None => {
                info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        CalendarLabels::new(
            self.calendar.month_names.clone(),
            self.calendar.day_names.clone(),
        )?;

        for (name, months) in [
            ("months_back", self.calendar.months_back),
            ("months_ahead", self.calendar.months_ahead),
        ] {
            if months > MAX_WINDOW_MONTHS {
                bail!(
                    "calendar.{} is {} but must be at most {}",
                    name,
                    months,
                    MAX_WINDOW_MONTHS
                );
            }
        }
        Ok(())
    }
}

fn config_path(args: &[String]) -> Result<Option<PathBuf>> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow!("--config requires a path"))?;
            return Ok(Some(PathBuf::from(value)));
        }
        if let Some(value) = arg.strip_prefix("--config=") {
            return Ok(Some(PathBuf::from(value)));
        }
    }
    Ok(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}
