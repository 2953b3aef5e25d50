use crate::config::toml_config::RuleFile;
use crate::core::rules::{builtin_rules, DEFAULT_TARGET};
use crate::core::PatchRule;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "endpoint-patcher")]
#[command(about = "Adds rarity columns and the item_basic join to the drop queries in server.js")]
pub struct CliConfig {
    /// File to patch, relative to --base-dir
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,

    #[arg(long, default_value = ".")]
    pub base_dir: String,

    /// TOML rule file used instead of the built-in rules
    #[arg(long)]
    pub rules: Option<String>,

    /// Apply the rules in memory and print a summary without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_rules(&self) -> Result<Vec<PatchRule>> {
        match &self.rules {
            Some(path) => {
                tracing::info!("Loading rules from {}", path);
                RuleFile::from_file(path)?.into_rules()
            }
            None => Ok(builtin_rules()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("target", &self.target)?;
        validate_path("base_dir", &self.base_dir)?;
        if let Some(rules) = &self.rules {
            validate_path("rules", rules)?;
        }
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        Ok(())
    }
}
