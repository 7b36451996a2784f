pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::demo::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bounded-access")]
#[command(about = "Demonstrates safe, asserting and direct element access over a fixed sequence")]
pub struct CliConfig {
    #[arg(long, help = "TOML file overriding the sequence and probe indices")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
