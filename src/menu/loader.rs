use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{MacroError, Result};
use crate::menu::tree::MenuNode;
use crate::models::{Day, MenuPlan, NutrientValue, OptionGroup};
use crate::nutrition::parse_quantity;
use crate::planner::constants::RESERVED_SECTIONS;

static CHOOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^choose\s+(\d+)").expect("valid choose regex"));

/// Load a menu from a YAML file.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<MenuPlan> {
    let content = fs::read_to_string(path)?;
    parse_menu(&content)
}

/// Parse menu YAML into a plan.
///
/// Sections `extra` and `carbs` are special; every other top-level list is a
/// food section.
pub fn parse_menu(yaml: &str) -> Result<MenuPlan> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    let root = MenuNode::from_value(value)?;

    let MenuNode::Map(sections) = &root else {
        return Err(invalid(format!(
            "top level must be a mapping, found {}",
            root.kind()
        )));
    };

    let mut menu = MenuPlan {
        extra: parse_extra(root.get("extra"))?,
        ..Default::default()
    };
    parse_carbs(root.get("carbs"), &mut menu)?;
    parse_sections(sections, &mut menu)?;

    debug!(
        "Menu loaded: {} fixed group(s), {} option(s) in {} choice group(s)",
        menu.fixed.len(),
        menu.options.len(),
        menu.choose_groups.len()
    );
    Ok(menu)
}

fn invalid(message: String) -> MacroError {
    MacroError::InvalidMenu(message)
}

fn parse_extra(node: Option<&MenuNode>) -> Result<NutrientValue> {
    let entries = match node {
        None | Some(MenuNode::Empty) => return Ok(NutrientValue::default()),
        Some(MenuNode::Map(entries)) => entries,
        Some(other) => {
            return Err(invalid(format!(
                "'extra' must be a mapping, found {}",
                other.kind()
            )));
        }
    };

    let mut extra = NutrientValue::default();
    for (key, value) in entries {
        let amount = match value {
            MenuNode::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                invalid(format!("extra.{} must be a number, found '{}'", key, text))
            })?,
            other => {
                return Err(invalid(format!(
                    "extra.{} must be a number, found {}",
                    key,
                    other.kind()
                )));
            }
        };
        match key.as_str() {
            "carbs" => extra.carbs = amount,
            "protein" => extra.protein = amount,
            "fat" => extra.fat = amount,
            "calories" => extra.calories = amount,
            other => return Err(invalid(format!("unknown key 'extra.{}'", other))),
        }
    }
    Ok(extra)
}

fn parse_carbs(node: Option<&MenuNode>, menu: &mut MenuPlan) -> Result<()> {
    let entries = match node {
        None | Some(MenuNode::Empty) => return Ok(()),
        Some(MenuNode::Map(entries)) => entries,
        Some(other) => {
            return Err(invalid(format!(
                "'carbs' must be a mapping, found {}",
                other.kind()
            )));
        }
    };

    let [(item, amounts)] = entries.as_slice() else {
        return Err(invalid(format!(
            "'carbs' must name exactly one food, found {}",
            entries.len()
        )));
    };

    let MenuNode::Map(days) = amounts else {
        return Err(invalid(format!(
            "carbs.{} must map days to amounts, found {}",
            item,
            amounts.kind()
        )));
    };

    for (day, value) in days {
        let MenuNode::Text(text) = value else {
            return Err(invalid(format!(
                "carbs.{}.{} must be an amount, found {}",
                item,
                day,
                value.kind()
            )));
        };
        let grams = parse_quantity(text).amount;
        menu.carbs_per_day.insert(Day::new(day), grams);
    }
    menu.carbs_item = Some(item.clone());
    Ok(())
}

fn parse_sections(sections: &[(String, MenuNode)], menu: &mut MenuPlan) -> Result<()> {
    let mut next_group_id = 0;

    for (section, node) in sections {
        if RESERVED_SECTIONS.contains(&section.as_str()) {
            continue;
        }
        let MenuNode::List(items) = node else {
            debug!("Skipping non-list section '{}'", section);
            continue;
        };

        for item in items {
            match item {
                MenuNode::Text(text) => menu.fixed.push(vec![text.clone()]),
                MenuNode::Map(blocks) => {
                    for (key, options) in blocks {
                        let required = parse_choose_key(key).ok_or_else(|| {
                            invalid(format!(
                                "unexpected key '{}' in section '{}', expected 'choose N'",
                                key, section
                            ))
                        })?;
                        next_group_id += 1;
                        menu.choose_groups.insert(next_group_id, required);
                        parse_options(options, required, next_group_id, menu)?;
                    }
                }
                other => {
                    return Err(invalid(format!(
                        "section '{}' entries must be foods or 'choose N' blocks, found {}",
                        section,
                        other.kind()
                    )));
                }
            }
        }
    }
    Ok(())
}

fn parse_choose_key(key: &str) -> Option<usize> {
    CHOOSE_RE
        .captures(key.trim())
        .and_then(|caps| caps[1].parse().ok())
}

fn parse_options(
    node: &MenuNode,
    required: usize,
    group_id: u32,
    menu: &mut MenuPlan,
) -> Result<()> {
    let options = match node {
        MenuNode::Empty => return Ok(()),
        MenuNode::List(options) => options,
        other => {
            return Err(invalid(format!(
                "choice group #{} must list its options, found {}",
                group_id,
                other.kind()
            )));
        }
    };

    for option in options {
        let items = match option {
            MenuNode::Text(text) => vec![text.clone()],
            MenuNode::Map(entries) => {
                let [(label, nested)] = entries.as_slice() else {
                    return Err(invalid(format!(
                        "options in choice group #{} must have exactly one name",
                        group_id
                    )));
                };
                parse_option_items(label, nested)?
            }
            other => {
                return Err(invalid(format!(
                    "options in choice group #{} must be foods or named lists, found {}",
                    group_id,
                    other.kind()
                )));
            }
        };
        menu.options.push(OptionGroup {
            items,
            required,
            group_id,
        });
    }
    Ok(())
}

fn parse_option_items(label: &str, node: &MenuNode) -> Result<Vec<String>> {
    let MenuNode::List(nested) = node else {
        return Err(invalid(format!(
            "option '{}' must be a list of foods, found {}",
            label,
            node.kind()
        )));
    };
    if nested.is_empty() {
        return Err(invalid(format!("option '{}' lists no foods", label)));
    }

    nested
        .iter()
        .map(|n| match n {
            MenuNode::Text(text) => Ok(text.clone()),
            other => Err(invalid(format!(
                "option '{}' nests too deeply: found {}",
                label,
                other.kind()
            ))),
        })
        .collect()
}
