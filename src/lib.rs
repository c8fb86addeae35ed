pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use core::{fleet::Fleet, interpreter::interpret};
pub use domain::{CommandOutcome, Highlight, Vehicle};
pub use http::{build_router, AppState};
pub use utils::error::{FleetError, Result};
