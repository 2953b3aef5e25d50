use endpoint_patcher::{
    apply_patches, apply_patches_with_report, apply_rule, builtin_rules, RuleStatus,
};

const SERVER_JS: &str = include_str!("fixtures/server.js");
const SERVER_JS_PATCHED: &str = include_str!("fixtures/server.patched.js");

#[test]
fn test_all_endpoints_patched() {
    assert_eq!(apply_patches(SERVER_JS), SERVER_JS_PATCHED);
}

#[test]
fn test_every_builtin_rule_applies_once() {
    let (_, report) = apply_patches_with_report(&builtin_rules(), SERVER_JS, "server.js");

    assert!(report.changed);
    assert_eq!(report.applied_count(), 4);
    let names: Vec<&str> = report.outcomes.iter().map(|o| o.rule.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "market-rates-columns",
            "planned-drops-columns",
            "planned-drops-item-basic-join",
            "all-drops-columns",
        ]
    );
}

#[test]
fn test_second_run_inserts_nothing() {
    let once = apply_patches(SERVER_JS);
    let twice = apply_patches(&once);
    assert_eq!(once, twice);

    let (_, report) = apply_patches_with_report(&builtin_rules(), &once, "server.js");
    assert!(!report.changed);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == RuleStatus::NotMatched));
}

#[test]
fn test_content_without_anchors_unchanged() {
    let content = "app.get('/health', (req, res) => res.send('ok'));\n";
    assert_eq!(apply_patches(content), content);
    assert_eq!(apply_patches(""), "");
}

#[test]
fn test_market_rates_insertion_is_exact() {
    let input = "ic.converts_to_item_name,\n    COALESCE(m.mob_name, 'Unknown Boss') as mob_name\n    FROM mob_droplist md";
    let expected = "ic.converts_to_item_name,\n    COALESCE(m.mob_name, 'Unknown Boss') as mob_name,\n                ib.is_rare,\n                ib.is_ex\n            FROM mob_droplist md";
    assert_eq!(apply_patches(input), expected);
}

#[test]
fn test_later_occurrences_left_alone() {
    let block = "ic.convertible,\n    ic.converts_to_item_name\n    FROM planned_event_drops ped\n";
    let input = format!("{block}-- second copy --\n{block}");

    let rules = builtin_rules();
    let (output, outcome) = apply_rule(&rules[1], &input);

    assert_eq!(outcome.offset, Some(0));
    assert_eq!(output.matches("ib.is_rare").count(), 1);
    assert!(output.ends_with(&format!("-- second copy --\n{block}")));
}

#[test]
fn test_join_rule_needs_planned_drops_anchor() {
    let input = "LEFT JOIN item_classifications ic ON ped.item_id = ic.item_id\n  WHERE ped.event_boss_id = $1";
    let rules = builtin_rules();

    let (output, outcome) = apply_rule(&rules[2], input);
    assert!(outcome.is_applied());
    assert_eq!(
        output,
        "LEFT JOIN item_classifications ic ON ped.item_id = ic.item_id\n            LEFT JOIN item_basic ib ON ped.item_id = ib.itemid\n            WHERE ped.event_boss_id = $1"
    );

    let (unchanged, outcome) = apply_rule(&rules[2], &output);
    assert_eq!(unchanged, output);
    assert!(!outcome.is_applied());
}

#[test]
fn test_bytes_outside_match_preserved() {
    let prefix = "// header ünïcödé\r\n";
    let suffix = "\r\n// trailer\n";
    let input = format!(
        "{prefix}ic.convertible, ic.converts_to_item_name FROM mob_droplist md  LEFT JOIN item_equipment{suffix}"
    );

    let rules = builtin_rules();
    let (output, outcome) = apply_rule(&rules[3], &input);

    assert_eq!(outcome.offset, Some(prefix.len()));
    assert!(output.starts_with(prefix));
    assert!(output.ends_with(suffix));
    assert!(output.contains("ic.converts_to_item_name,\n                ib.is_rare,\n                ib.is_ex\n            FROM mob_droplist md  LEFT JOIN item_equipment"));
}
