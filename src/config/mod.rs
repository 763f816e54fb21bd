pub mod draft;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "metromellow-rules")]
#[command(about = "Validates Metromellow subscription drafts against billing rules")]
pub struct CliConfig {
    /// Path to a TOML subscription draft
    #[arg(long)]
    pub draft: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("draft", &self.draft)
    }
}
