use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single bounded insertion: the first match of `pattern` is replaced by
/// capture group 1, then `insertion`, then capture group 2.
#[derive(Debug, Clone)]
pub struct PatchRule {
    pub name: String,
    pub description: String,
    pub pattern: Regex,
    pub insertion: String,
}

impl PatchRule {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        pattern: Regex,
        insertion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            pattern,
            insertion: insertion.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Applied,
    NotMatched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub status: RuleStatus,
    /// Byte offset of the replaced region in the content the rule was run on.
    pub offset: Option<usize>,
}

impl RuleOutcome {
    pub fn applied(rule: &str, offset: usize) -> Self {
        Self {
            rule: rule.to_string(),
            status: RuleStatus::Applied,
            offset: Some(offset),
        }
    }

    pub fn not_matched(rule: &str) -> Self {
        Self {
            rule: rule.to_string(),
            status: RuleStatus::NotMatched,
            offset: None,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status == RuleStatus::Applied
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    pub target: String,
    pub started_at: DateTime<Utc>,
    pub outcomes: Vec<RuleOutcome>,
    pub changed: bool,
}

impl PatchReport {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_applied()).count()
    }
}
