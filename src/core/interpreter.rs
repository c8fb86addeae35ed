use crate::core::fleet::Fleet;
use crate::core::intent::Command;
use crate::core::normalize::normalize;
use crate::domain::CommandOutcome;

pub const NOT_UNDERSTOOD: &str = "❌ Could not understand.";

/// Runs one transcript against the fleet and renders the reply.
pub fn interpret(fleet: &mut Fleet, transcript: &str) -> CommandOutcome {
    let cmd = normalize(transcript);
    let command = Command::resolve(fleet, &cmd);
    tracing::debug!(normalized = %cmd, ?command, "Resolved command");
    execute(fleet, command)
}

pub fn execute(fleet: &mut Fleet, command: Command) -> CommandOutcome {
    match command {
        Command::Assign { driver, vehicle } => assign(fleet, &driver, &vehicle),
        Command::Unassign { vehicle } => unassign(fleet, &vehicle),
        Command::UnassignDriver { driver } => match fleet.vehicle_of(&driver) {
            Some((vehicle, _)) => {
                let vehicle = vehicle.to_string();
                unassign(fleet, &vehicle)
            }
            None => not_assigned(&driver),
        },
        Command::Count { location } => {
            let count = fleet.count_in(&location);
            CommandOutcome::message(format!(
                "📊 There are {} vehicle(s) in {}.",
                count, location
            ))
        }
        Command::VehicleQuery { vehicle } => match fleet.vehicle(&vehicle) {
            Some(v) => CommandOutcome::highlighted(
                format!(
                    "📍 {} is in {} at ({}, {}). Driver: {}",
                    vehicle,
                    v.location,
                    v.lat,
                    v.lng,
                    v.driver.as_deref().unwrap_or("Not assigned")
                ),
                &vehicle,
                v,
            ),
            None => CommandOutcome::message(NOT_UNDERSTOOD),
        },
        Command::DriverQuery { driver } => match fleet.vehicle_of(&driver) {
            Some((name, v)) => CommandOutcome::highlighted(
                format!("👨‍✈️ Driver {} is with {} in {}.", driver, name, v.location),
                name,
                v,
            ),
            None => not_assigned(&driver),
        },
        Command::Unknown => CommandOutcome::message(NOT_UNDERSTOOD),
    }
}

fn assign(fleet: &mut Fleet, driver: &str, vehicle: &str) -> CommandOutcome {
    let Some(previous) = fleet.assign(driver, vehicle) else {
        return CommandOutcome::message(NOT_UNDERSTOOD);
    };
    tracing::info!(driver, vehicle, previous = ?previous, "Driver assigned");

    let output = format!(
        "✅ Assigned {} to {}. (prev: {})",
        driver,
        vehicle,
        previous.as_deref().unwrap_or("none")
    );
    match fleet.vehicle(vehicle) {
        Some(v) => CommandOutcome::highlighted(output, vehicle, v),
        None => CommandOutcome::message(output),
    }
}

fn unassign(fleet: &mut Fleet, vehicle: &str) -> CommandOutcome {
    let Some(previous) = fleet.unassign(vehicle) else {
        return CommandOutcome::message(NOT_UNDERSTOOD);
    };

    let output = match &previous {
        Some(driver) => {
            tracing::info!(driver = %driver, vehicle, "Driver unassigned");
            format!("🚫 Unassigned {} from {}.", driver, vehicle)
        }
        None => format!("ℹ️ No driver was assigned to {}.", vehicle),
    };
    match fleet.vehicle(vehicle) {
        Some(v) => CommandOutcome::highlighted(output, vehicle, v),
        None => CommandOutcome::message(output),
    }
}

fn not_assigned(driver: &str) -> CommandOutcome {
    CommandOutcome::message(format!(
        "ℹ️ Driver {} is not assigned to any vehicle yet.",
        driver
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewVehicle;

    #[test]
    fn test_assign_sets_driver_and_highlights_vehicle() {
        let mut fleet = Fleet::demo();
        let outcome = interpret(&mut fleet, "Assign Sam to vehicle A.");

        assert_eq!(outcome.output, "✅ Assigned sam to vehicle a. (prev: none)");
        let highlight = outcome.highlight.unwrap();
        assert_eq!(highlight.name, "vehicle a");
        assert_eq!(highlight.vehicle.driver.as_deref(), Some("sam"));
        assert_eq!(highlight.vehicle.lat, 37.7749);
    }

    #[test]
    fn test_reassign_clears_prior_vehicle() {
        let mut fleet = Fleet::demo();
        interpret(&mut fleet, "assign sam to vehicle b");
        interpret(&mut fleet, "assign vasu to vehicle a");
        let outcome = interpret(&mut fleet, "assign sam to vehicle a");

        assert_eq!(outcome.output, "✅ Assigned sam to vehicle a. (prev: vasu)");
        assert_eq!(fleet.vehicle("vehicle b").unwrap().driver, None);
        assert_eq!(
            fleet.vehicle("vehicle a").unwrap().driver.as_deref(),
            Some("sam")
        );
    }

    #[test]
    fn test_unassign_vehicle() {
        let mut fleet = Fleet::demo();
        interpret(&mut fleet, "assign mani to vehicle c");

        let outcome = interpret(&mut fleet, "unassign vehicle c");
        assert_eq!(outcome.output, "🚫 Unassigned mani from vehicle c.");
        assert_eq!(outcome.highlight.unwrap().vehicle.driver, None);

        let outcome = interpret(&mut fleet, "unassign vehicle c");
        assert_eq!(outcome.output, "ℹ️ No driver was assigned to vehicle c.");
    }

    #[test]
    fn test_unassign_by_driver_name() {
        let mut fleet = Fleet::demo();
        let outcome = interpret(&mut fleet, "unassign vasu");
        assert_eq!(
            outcome.output,
            "ℹ️ Driver vasu is not assigned to any vehicle yet."
        );

        interpret(&mut fleet, "assign vasu to vehicle b");
        let outcome = interpret(&mut fleet, "unassign vasu");
        assert_eq!(outcome.output, "🚫 Unassigned vasu from vehicle b.");
        assert!(fleet.vehicle_of("vasu").is_none());
    }

    #[test]
    fn test_count_vehicles_in_location() {
        let mut fleet = Fleet::demo();
        fleet.upsert_vehicle(NewVehicle {
            name: "vehicle d".to_string(),
            lat: 40.73,
            lng: -73.93,
            location: "New York".to_string(),
            driver: None,
        });

        let outcome = interpret(&mut fleet, "How many vehicles are in New York?");
        assert_eq!(outcome.output, "📊 There are 2 vehicle(s) in New York.");
        assert!(outcome.highlight.is_none());
    }

    #[test]
    fn test_vehicle_query_renders_coordinates() {
        let mut fleet = Fleet::demo();
        let outcome = interpret(&mut fleet, "where is vehicle c");
        assert_eq!(
            outcome.output,
            "📍 vehicle c is in New York at (40.7128, -74.006). Driver: Not assigned"
        );
        assert_eq!(outcome.highlight.unwrap().name, "vehicle c");
    }

    #[test]
    fn test_vehicle_query_by_number_word() {
        let mut fleet = Fleet::demo();
        fleet.upsert_vehicle(NewVehicle {
            name: "vehicle 1".to_string(),
            lat: 47.6,
            lng: -122.3,
            location: "Seattle".to_string(),
            driver: None,
        });

        let outcome = interpret(&mut fleet, "Where is vehicle one?");
        assert!(outcome.output.starts_with("📍 vehicle 1 is in Seattle"));
    }

    #[test]
    fn test_driver_query() {
        let mut fleet = Fleet::demo();
        let outcome = interpret(&mut fleet, "where is sam");
        assert_eq!(
            outcome.output,
            "ℹ️ Driver sam is not assigned to any vehicle yet."
        );
        assert!(outcome.highlight.is_none());

        interpret(&mut fleet, "assign sam to vehicle b");
        let outcome = interpret(&mut fleet, "where is sam");
        assert_eq!(
            outcome.output,
            "👨‍✈️ Driver sam is with vehicle b in Los Angeles."
        );
        assert_eq!(outcome.highlight.unwrap().name, "vehicle b");
    }

    #[test]
    fn test_not_understood() {
        let mut fleet = Fleet::demo();
        let outcome = interpret(&mut fleet, "play some music");
        assert_eq!(outcome.output, NOT_UNDERSTOOD);
        assert!(outcome.highlight.is_none());

        assert_eq!(interpret(&mut fleet, "").output, NOT_UNDERSTOOD);
    }
}
