pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::RuleFile};
pub use crate::core::{
    engine::PatchEngine,
    patcher::{apply_patches, apply_patches_with, apply_patches_with_report, apply_rule},
    rules::{builtin_rules, CONFIRMATION_MESSAGE},
};
pub use domain::model::{PatchReport, PatchRule, RuleOutcome, RuleStatus};
pub use utils::error::{PatcherError, Result};
