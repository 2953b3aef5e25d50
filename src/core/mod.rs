pub mod engine;
pub mod patcher;
pub mod rules;

pub use crate::domain::model::{PatchReport, PatchRule, RuleOutcome, RuleStatus};
pub use crate::domain::ports::{RuleProvider, Storage};
pub use crate::utils::error::Result;
