use tracing::debug;

use crate::error::{MacroError, MissingFood, Result};
use crate::models::MenuPlan;
use crate::nutrition::NutritionTable;

/// Check a menu against the table before any totals are computed.
///
/// Every unresolved food is reported in one error. Choice groups are only
/// checked once all foods resolve.
pub fn check_menu(table: &NutritionTable, menu: &MenuPlan) -> Result<()> {
    let missing: Vec<MissingFood> = menu
        .all_items()
        .into_iter()
        .filter(|item| !table.exists(item))
        .map(|item| MissingFood {
            name: item.to_string(),
            suggestion: table.suggest(item).map(str::to_string),
        })
        .collect();

    if !missing.is_empty() {
        return Err(MacroError::MissingFoods(missing));
    }

    for (&group_id, &required) in &menu.choose_groups {
        let available = menu.options_for(group_id).count();
        if available < required {
            return Err(MacroError::InsufficientOptions {
                group_id,
                required,
                available,
            });
        }
        debug!(
            "Choice group #{}: choose {} of {}",
            group_id, required, available
        );
    }

    Ok(())
}
