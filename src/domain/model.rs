use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub lat: f64,
    pub lng: f64,
    pub driver: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: u32,
    #[serde(rename = "driverName")]
    pub name: String,
}

/// Roster entry together with the vehicle the driver is currently on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStatus {
    pub id: u32,
    #[serde(rename = "driverName")]
    pub name: String,
    pub vehicle: Option<String>,
}

/// Vehicle snapshot the map focuses on after a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub name: String,
    #[serde(flatten)]
    pub vehicle: Vehicle,
}

impl Highlight {
    pub fn new(name: &str, vehicle: &Vehicle) -> Self {
        Self {
            name: name.to_string(),
            vehicle: vehicle.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub output: String,
    pub highlight: Option<Highlight>,
}

impl CommandOutcome {
    pub fn message(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            highlight: None,
        }
    }

    pub fn highlighted(output: impl Into<String>, name: &str, vehicle: &Vehicle) -> Self {
        Self {
            output: output.into(),
            highlight: Some(Highlight::new(name, vehicle)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    pub driver: Option<String>,
}
