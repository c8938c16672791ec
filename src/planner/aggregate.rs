use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{MacroError, Result};
use crate::models::{Day, MenuPlan, NutrientValue};
use crate::nutrition::NutritionTable;

/// Average nutrients over a group of menu texts.
pub fn group_nutrients(table: &NutritionTable, items: &[String]) -> Result<NutrientValue> {
    let values = items
        .iter()
        .map(|item| table.get(item))
        .collect::<Result<Vec<_>>>()?;

    NutrientValue::average(&values).ok_or_else(|| MacroError::EmptyGroup(items.join(", ")))
}

/// Extra adjustment as added to a day: literal grams, plus bonus calories
/// topped up with the 4/4/9 calories of those grams.
pub fn extra_nutrients(extra: &NutrientValue) -> NutrientValue {
    NutrientValue {
        calories: extra.calories + extra.macro_calories(),
        ..*extra
    }
}

/// Total nutrients for one day.
///
/// Fixed groups are added once each. Every choice group contributes the
/// average of all its alternatives times its required count. The day's carb
/// portion and the extra adjustment come last.
pub fn compute_day(table: &NutritionTable, menu: &MenuPlan, day: &Day) -> Result<NutrientValue> {
    let mut total = NutrientValue::default();

    for group in &menu.fixed {
        total = total + group_nutrients(table, group)?;
    }

    let mut choices: BTreeMap<u32, (usize, Vec<NutrientValue>)> = BTreeMap::new();
    for option in &menu.options {
        let value = group_nutrients(table, &option.items)?;
        choices
            .entry(option.group_id)
            .or_insert_with(|| (option.required, Vec::new()))
            .1
            .push(value);
    }

    for (group_id, (required, values)) in &choices {
        let avg = NutrientValue::average(values)
            .ok_or_else(|| MacroError::EmptyGroup(format!("choice group #{}", group_id)))?;
        total = total + avg * *required as f64;
    }

    if let Some(item) = &menu.carbs_item {
        if let Some(grams) = menu.carbs_for(day).filter(|g| *g > 0.0) {
            let portion = format!("{}g {}", grams, item);
            debug!("{}: carb portion '{}'", day, portion);
            total = total + table.get(&portion)?;
        }
    }

    Ok(total + extra_nutrients(&menu.extra))
}
