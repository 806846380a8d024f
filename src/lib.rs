pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::Shell;
pub use config::CliConfig;
pub use domain::{Bom, BomItem, BomRegistry, Component, ComponentRegistry};
pub use utils::error::{PlannerError, Result};
