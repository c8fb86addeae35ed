use crate::core::fleet::Fleet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Assign,
    Unassign,
    Count,
    Query,
}

impl Intent {
    /// `unassign` is checked first since it contains `assign`.
    pub fn detect(cmd: &str) -> Self {
        if cmd.contains("unassign") {
            Intent::Unassign
        } else if cmd.contains("assign") {
            Intent::Assign
        } else if cmd.contains("count") || cmd.contains("how many") {
            Intent::Count
        } else {
            Intent::Query
        }
    }
}

/// A resolved command, with entity names as they are stored in the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Assign { driver: String, vehicle: String },
    Unassign { vehicle: String },
    UnassignDriver { driver: String },
    Count { location: String },
    VehicleQuery { vehicle: String },
    DriverQuery { driver: String },
    Unknown,
}

impl Command {
    /// Resolves a normalized command against the current fleet.
    pub fn resolve(fleet: &Fleet, cmd: &str) -> Self {
        let intent = Intent::detect(cmd);
        let vehicle = fleet.find_vehicle(cmd).map(|(name, _)| name.to_string());
        let driver = fleet.find_driver(cmd).map(|d| d.name.clone());

        match (intent, vehicle, driver) {
            (Intent::Unassign, Some(vehicle), _) => Command::Unassign { vehicle },
            (Intent::Unassign, None, Some(driver)) => Command::UnassignDriver { driver },
            (Intent::Assign, Some(vehicle), Some(driver)) => Command::Assign { driver, vehicle },
            (Intent::Count, vehicle, driver) => match fleet.find_location(cmd) {
                Some(location) => Command::Count {
                    location: location.to_string(),
                },
                None => Self::query(vehicle, driver),
            },
            (_, vehicle, driver) => Self::query(vehicle, driver),
        }
    }

    fn query(vehicle: Option<String>, driver: Option<String>) -> Self {
        match (vehicle, driver) {
            (Some(vehicle), _) => Command::VehicleQuery { vehicle },
            (None, Some(driver)) => Command::DriverQuery { driver },
            (None, None) => Command::Unknown,
        }
    }
}
