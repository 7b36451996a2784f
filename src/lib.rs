pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::DemoConfig;
pub use crate::core::access::{direct, get, get_exn};
pub use crate::core::demo::{AccessDemo, OutputFormat, Probes, OUT_OF_RANGE_MESSAGE};
pub use domain::model::{Line, Sequence, Slot, Step};
pub use utils::error::{DemoError, Result};
