use crate::core::rules::builtin_rules;
use crate::domain::model::{PatchReport, PatchRule, RuleOutcome};
use chrono::Utc;

/// Replaces the first match of `rule.pattern` with group 1, the insertion, and group 2.
/// Content without a match comes back unchanged.
pub fn apply_rule(rule: &PatchRule, content: &str) -> (String, RuleOutcome) {
    let Some(caps) = rule.pattern.captures(content) else {
        tracing::debug!("Rule '{}' matched nothing, skipping", rule.name);
        return (content.to_string(), RuleOutcome::not_matched(&rule.name));
    };

    let whole = caps.get_match().range();
    let before = caps.get(1).map_or("", |m| m.as_str());
    let after = caps.get(2).map_or("", |m| m.as_str());

    let mut patched = String::with_capacity(
        content.len() - whole.len() + before.len() + rule.insertion.len() + after.len(),
    );
    patched.push_str(&content[..whole.start]);
    patched.push_str(before);
    patched.push_str(&rule.insertion);
    patched.push_str(after);
    patched.push_str(&content[whole.end..]);

    tracing::debug!("Rule '{}' applied at byte {}", rule.name, whole.start);
    (patched, RuleOutcome::applied(&rule.name, whole.start))
}

/// Runs `rules` in order, each on the previous rule's output.
fn run_rules(rules: &[PatchRule], content: &str) -> (String, Vec<RuleOutcome>) {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, outcome) = apply_rule(rule, &current);
        current = next;
        outcomes.push(outcome);
    }

    (current, outcomes)
}

pub fn apply_patches_with(rules: &[PatchRule], content: &str) -> String {
    run_rules(rules, content).0
}

pub fn apply_patches(content: &str) -> String {
    apply_patches_with(&builtin_rules(), content)
}

pub fn apply_patches_with_report(
    rules: &[PatchRule],
    content: &str,
    target: &str,
) -> (String, PatchReport) {
    let started_at = Utc::now();
    let (current, outcomes) = run_rules(rules, content);

    let report = PatchReport {
        target: target.to_string(),
        started_at,
        outcomes,
        changed: current != content,
    };
    (current, report)
}
