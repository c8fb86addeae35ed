use crate::core::fleet::{demo_drivers, demo_vehicles, Fleet};
use crate::core::normalize::normalize;
use crate::domain::{Driver, NewVehicle};
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{
    validate_coordinates, validate_non_empty_string, validate_positive_number, validate_unique,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub vehicles: Option<Vec<VehicleEntry>>,
    pub drivers: Option<Vec<DriverEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_cors_origins() -> Vec<String> {
    vec![DEFAULT_CORS_ORIGIN.to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    pub driver: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverEntry {
    pub id: u32,
    pub name: String,
}

impl From<VehicleEntry> for NewVehicle {
    fn from(entry: VehicleEntry) -> Self {
        NewVehicle {
            name: entry.name,
            lat: entry.lat,
            lng: entry.lng,
            location: entry.location,
            driver: entry.driver,
        }
    }
}

impl From<DriverEntry> for Driver {
    fn from(entry: DriverEntry) -> Self {
        Driver {
            id: entry.id,
            name: entry.name,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FleetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FleetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLEET_PORT})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Seeds a fleet from the configured entries, falling back to the demo dataset per section.
    pub fn build_fleet(&self) -> Fleet {
        let vehicles = match &self.vehicles {
            Some(entries) => entries.iter().cloned().map(NewVehicle::from).collect(),
            None => demo_vehicles(),
        };
        let drivers = match &self.drivers {
            Some(entries) => entries.iter().cloned().map(Driver::from).collect(),
            None => demo_drivers(),
        };
        Fleet::new(vehicles, drivers)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_positive_number("server.port", usize::from(self.server.port), 1)?;
        for origin in &self.server.cors_origins {
            validate_url("server.cors_origins", origin)?;
        }

        if let Some(vehicles) = &self.vehicles {
            for (i, vehicle) in vehicles.iter().enumerate() {
                let prefix = format!("vehicles[{}]", i);
                validate_non_empty_string(&format!("{}.name", prefix), &vehicle.name)?;
                // "?" passes the raw check but normalizes to an empty key
                if normalize(&vehicle.name).is_empty() {
                    return Err(FleetError::InvalidConfigValueError {
                        field: format!("{}.name", prefix),
                        value: vehicle.name.clone(),
                        reason: "Name has no letters or digits".to_string(),
                    });
                }
                validate_non_empty_string(&format!("{}.location", prefix), &vehicle.location)?;
                validate_coordinates(&prefix, vehicle.lat, vehicle.lng)?;
            }
            // compare the keys the fleet will store, so "Truck One" and "truck 1" collide
            let names: Vec<String> = vehicles.iter().map(|v| normalize(&v.name)).collect();
            validate_unique("vehicles.name", names.iter().map(String::as_str))?;
        }

        if let Some(drivers) = &self.drivers {
            for (i, driver) in drivers.iter().enumerate() {
                validate_non_empty_string(&format!("drivers[{}].name", i), &driver.name)?;
            }
            let ids: Vec<String> = drivers.iter().map(|d| d.id.to_string()).collect();
            validate_unique("drivers.id", ids.iter().map(String::as_str))?;
            validate_unique("drivers.name", drivers.iter().map(|d| d.name.as_str()))?;
        }

        Ok(())
    }
}
