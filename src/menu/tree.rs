use serde_yaml::Value;

use crate::error::{MacroError, Result};

/// Typed view of a menu document.
///
/// Scalars of every kind become `Text`; mappings keep document order.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Empty,
    Text(String),
    List(Vec<MenuNode>),
    Map(Vec<(String, MenuNode)>),
}

impl MenuNode {
    pub fn from_value(value: Value) -> Result<MenuNode> {
        let node = match value {
            Value::Null => MenuNode::Empty,
            Value::Bool(b) => MenuNode::Text(b.to_string()),
            Value::Number(n) => MenuNode::Text(n.to_string()),
            Value::String(s) => MenuNode::Text(s),
            Value::Sequence(items) => MenuNode::List(
                items
                    .into_iter()
                    .map(MenuNode::from_value)
                    .collect::<Result<_>>()?,
            ),
            Value::Mapping(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let key = match MenuNode::from_value(key)? {
                        MenuNode::Text(k) => k,
                        other => {
                            return Err(MacroError::InvalidMenu(format!(
                                "mapping keys must be scalars, found {}",
                                other.kind()
                            )));
                        }
                    };
                    entries.push((key, MenuNode::from_value(value)?));
                }
                MenuNode::Map(entries)
            }
            Value::Tagged(tagged) => MenuNode::from_value(tagged.value)?,
        };
        Ok(node)
    }

    /// Short name of the node kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuNode::Empty => "nothing",
            MenuNode::Text(_) => "a string",
            MenuNode::List(_) => "a list",
            MenuNode::Map(_) => "a mapping",
        }
    }

    /// Value stored under `key` when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&MenuNode> {
        match self {
            MenuNode::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}
