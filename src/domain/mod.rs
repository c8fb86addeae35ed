// Domain layer: plain data types shared by the interpreter, the HTTP surface and the config.

pub mod model;

pub use model::{CommandOutcome, Driver, DriverStatus, Highlight, NewVehicle, Vehicle};
