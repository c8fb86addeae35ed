use crate::core::normalize::normalize;
use crate::domain::{Driver, DriverStatus, NewVehicle, Vehicle};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The mock dataset the demo starts from: three unassigned vehicles and three drivers.
pub fn demo_vehicles() -> Vec<NewVehicle> {
    [
        ("vehicle a", 37.7749, -122.4194, "San Francisco"),
        ("vehicle b", 34.0522, -118.2437, "Los Angeles"),
        ("vehicle c", 40.7128, -74.0060, "New York"),
    ]
    .into_iter()
    .map(|(name, lat, lng, location)| NewVehicle {
        name: name.to_string(),
        lat,
        lng,
        location: location.to_string(),
        driver: None,
    })
    .collect()
}

pub fn demo_drivers() -> Vec<Driver> {
    ["sam", "vasu", "mani"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Driver {
            id,
            name: name.to_string(),
        })
        .collect()
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// In-memory fleet: vehicles keyed by normalized name in insertion order, plus the driver roster.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<(String, Vehicle)>,
    drivers: Vec<Driver>,
}

impl Fleet {
    pub fn new(vehicles: Vec<NewVehicle>, drivers: Vec<Driver>) -> Self {
        let mut fleet = Self {
            vehicles: Vec::with_capacity(vehicles.len()),
            drivers,
        };
        for vehicle in vehicles {
            fleet.upsert_vehicle(vehicle);
        }
        fleet
    }

    pub fn demo() -> Self {
        Self::new(demo_vehicles(), demo_drivers())
    }

    pub fn vehicles(&self) -> impl Iterator<Item = (&str, &Vehicle)> {
        self.vehicles.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    fn vehicle_mut(&mut self, name: &str) -> Option<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Serializable view of the vehicles as a JSON object in insertion order.
    pub fn listing(&self) -> VehicleListing<'_> {
        VehicleListing(&self.vehicles)
    }

    /// Inserts or replaces a vehicle under its normalized name and returns that name.
    /// A replaced vehicle keeps its position. A carried driver is cleared from every other vehicle.
    pub fn upsert_vehicle(&mut self, new_vehicle: NewVehicle) -> String {
        let name = normalize(&new_vehicle.name);
        let driver = new_vehicle
            .driver
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if let Some(driver) = &driver {
            self.release_driver(driver);
        }

        let vehicle = Vehicle {
            lat: new_vehicle.lat,
            lng: new_vehicle.lng,
            driver,
            location: new_vehicle.location,
        };

        match self.vehicle_mut(&name) {
            Some(existing) => *existing = vehicle,
            None => self.vehicles.push((name.clone(), vehicle)),
        }
        name
    }

    pub fn find_vehicle(&self, cmd: &str) -> Option<(&str, &Vehicle)> {
        self.vehicles().find(|(name, _)| {
            let needle = normalize(name);
            !needle.is_empty() && cmd.contains(needle.as_str())
        })
    }

    pub fn find_driver(&self, cmd: &str) -> Option<&Driver> {
        self.drivers
            .iter()
            .find(|d| cmd.contains(d.name.to_lowercase().as_str()))
    }

    pub fn find_location(&self, cmd: &str) -> Option<&str> {
        self.vehicles()
            .map(|(_, v)| v.location.as_str())
            .find(|location| {
                let needle = normalize(location);
                !needle.is_empty() && cmd.contains(needle.as_str())
            })
    }

    /// Moves `driver` onto `vehicle`, clearing it everywhere else first.
    /// Returns the driver the vehicle had before, or `None` when the vehicle is unknown.
    pub fn assign(&mut self, driver: &str, vehicle: &str) -> Option<Option<String>> {
        self.vehicle(vehicle)?;
        self.release_driver(driver);
        let target = self.vehicle_mut(vehicle)?;
        Some(target.driver.replace(driver.to_string()))
    }

    /// Clears the vehicle's driver. Returns the previous driver, or `None` when the vehicle is unknown.
    pub fn unassign(&mut self, vehicle: &str) -> Option<Option<String>> {
        self.vehicle_mut(vehicle).map(|v| v.driver.take())
    }

    pub fn count_in(&self, location: &str) -> usize {
        self.vehicles()
            .filter(|(_, v)| same_name(&v.location, location))
            .count()
    }

    pub fn vehicle_of(&self, driver: &str) -> Option<(&str, &Vehicle)> {
        self.vehicles().find(|(_, v)| {
            v.driver
                .as_deref()
                .is_some_and(|assigned| same_name(assigned, driver))
        })
    }

    pub fn drivers(&self) -> Vec<DriverStatus> {
        self.drivers
            .iter()
            .map(|d| DriverStatus {
                id: d.id,
                name: d.name.clone(),
                vehicle: self.vehicle_of(&d.name).map(|(name, _)| name.to_string()),
            })
            .collect()
    }

    fn release_driver(&mut self, driver: &str) {
        for (_, v) in self.vehicles.iter_mut() {
            if v.driver.as_deref().is_some_and(|d| same_name(d, driver)) {
                v.driver = None;
            }
        }
    }
}

pub struct VehicleListing<'a>(&'a [(String, Vehicle)]);

impl Serialize for VehicleListing<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, vehicle) in self.0 {
            map.serialize_entry(name, vehicle)?;
        }
        map.end()
    }
}
