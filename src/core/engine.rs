use crate::core::patcher::apply_patches_with_report;
use crate::core::{PatchReport, RuleProvider, Storage};
use crate::utils::error::Result;

pub struct PatchEngine<S: Storage, R: RuleProvider> {
    storage: S,
    rules: R,
    target: String,
}

impl<S: Storage, R: RuleProvider> PatchEngine<S, R> {
    pub fn new(storage: S, rules: R, target: impl Into<String>) -> Self {
        Self {
            storage,
            rules,
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Reads the target once, applies every rule in memory, and writes the result back once.
    pub fn run(&self) -> Result<PatchReport> {
        let (patched, report) = self.preview()?;

        tracing::info!("Writing {}", self.target);
        self.storage.write_file(&self.target, &patched)?;

        Ok(report)
    }

    /// Same as [`run`](Self::run) without the write.
    pub fn preview(&self) -> Result<(String, PatchReport)> {
        tracing::info!("Reading {}", self.target);
        let content = self.storage.read_file(&self.target)?;
        tracing::debug!("Read {} bytes", content.len());

        let (patched, report) =
            apply_patches_with_report(self.rules.rules(), &content, &self.target);
        tracing::info!(
            "Applied {} of {} rules",
            report.applied_count(),
            report.outcomes.len()
        );

        Ok((patched, report))
    }
}
