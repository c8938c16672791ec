use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::models::NutrientValue;

/// A training-day label such as `upper`, `lower` or `rest`.
///
/// Labels are stored lowercase so lookups from the command line and the
/// menu's `carbs` section agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Day(String);

impl Day {
    pub fn new(label: &str) -> Self {
        Self(label.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label with its first letter uppercased, for the report.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One alternative inside a `choose N` block.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    /// Menu texts averaged together to form this alternative.
    pub items: Vec<String>,

    /// How many servings the enclosing block asks for.
    pub required: usize,

    /// Sequential id of the enclosing `choose N` block, starting at 1.
    pub group_id: u32,
}

/// A parsed meal plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuPlan {
    /// Fixed item groups; each group is averaged, then added once.
    pub fixed: Vec<Vec<String>>,

    /// Alternatives of every `choose N` block, in document order.
    pub options: Vec<OptionGroup>,

    /// Required count per choice-group id.
    pub choose_groups: BTreeMap<u32, usize>,

    /// Food swapped in per day for variable carbohydrates.
    pub carbs_item: Option<String>,

    /// Gram portion of `carbs_item` per day.
    pub carbs_per_day: HashMap<Day, f64>,

    /// Flat daily adjustment: literal macro grams and literal bonus calories.
    pub extra: NutrientValue,
}

impl MenuPlan {
    /// Every menu text referenced by the plan, for validation.
    pub fn all_items(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self
            .fixed
            .iter()
            .flatten()
            .chain(self.options.iter().flat_map(|o| o.items.iter()))
            .map(String::as_str)
            .collect();

        if let Some(carbs) = &self.carbs_item {
            items.push(carbs);
        }
        items
    }

    /// Option groups tagged with the given choice-group id.
    pub fn options_for(&self, group_id: u32) -> impl Iterator<Item = &OptionGroup> {
        self.options.iter().filter(move |o| o.group_id == group_id)
    }

    /// Carb portion configured for a day, if any.
    pub fn carbs_for(&self, day: &Day) -> Option<f64> {
        self.carbs_per_day.get(day).copied()
    }
}
