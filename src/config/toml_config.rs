use crate::core::PatchRule;
use crate::utils::error::{PatcherError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Patch rules loaded from TOML, applied in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub description: Option<String>,
    pub pattern: String,
    pub insertion: String,
}

impl RuleConfig {
    fn compile(&self) -> Result<PatchRule> {
        let pattern = Regex::new(&self.pattern).map_err(|source| PatcherError::PatternError {
            rule: self.name.clone(),
            source,
        })?;

        // captures_len counts the implicit whole-match group.
        let groups = pattern.captures_len() - 1;
        if groups != 2 {
            return Err(PatcherError::InvalidConfigValueError {
                field: format!("rules.{}.pattern", self.name),
                value: self.pattern.clone(),
                reason: format!("Pattern must have exactly 2 capture groups, found {}", groups),
            });
        }

        Ok(PatchRule::new(
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
            pattern,
            self.insertion.clone(),
        ))
    }
}

impl RuleFile {
    /// Loads rules from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates and compiles every rule.
    pub fn into_rules(self) -> Result<Vec<PatchRule>> {
        self.compile_rules()
    }

    pub fn validate_config(&self) -> Result<()> {
        self.compile_rules().map(|_| ())
    }

    fn compile_rules(&self) -> Result<Vec<PatchRule>> {
        if self.rules.is_empty() {
            return Err(PatcherError::MissingConfigError {
                field: "rules".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            validate_non_empty_string("rules.name", &rule.name)?;
            if !seen.insert(rule.name.as_str()) {
                return Err(PatcherError::ConfigValidationError {
                    field: "rules.name".to_string(),
                    message: format!("Duplicate rule name: {}", rule.name),
                });
            }
            compiled.push(rule.compile()?);
        }

        Ok(compiled)
    }
}

impl Validate for RuleFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
