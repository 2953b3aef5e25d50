use crate::domain::model::PatchRule;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;

    /// Replaces the file in one step; a failed write leaves the old content intact.
    fn write_file(&self, path: &str, content: &str) -> Result<()>;
}

pub trait RuleProvider {
    /// Rules in application order.
    fn rules(&self) -> &[PatchRule];
}

impl RuleProvider for Vec<PatchRule> {
    fn rules(&self) -> &[PatchRule] {
        self
    }
}
