pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::Console;
pub use config::Limits;
pub use crate::core::{normalize::normalize, session::Session, store::PatientStore, table::format_table};
pub use domain::model::{Patient, Registration, Statistics};
pub use utils::error::{RegistryError, Result};
