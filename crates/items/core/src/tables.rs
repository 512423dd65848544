//! Database tables the host loads before plugins run.
//!
//! Each section is optional because a host that failed to initialize leaves it
//! unset; the accessors turn that into a [`PatchError`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PatchError;
use crate::template::ItemTemplate;

/// Item templates keyed by template id.
pub type ItemMap = BTreeMap<String, ItemTemplate>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Templates>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<Globals>,
}

impl DatabaseTables {
    /// Builds tables holding the given items and no globals.
    pub fn with_items(items: impl IntoIterator<Item = ItemTemplate>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        Self {
            templates: Some(Templates {
                items: Some(items),
                extra: Map::new(),
            }),
            globals: None,
        }
    }

    pub fn templates_mut(&mut self) -> Result<&mut Templates, PatchError> {
        self.templates.as_mut().ok_or(PatchError::TemplatesMissing)
    }

    pub fn items(&self) -> Result<&ItemMap, PatchError> {
        self.templates
            .as_ref()
            .ok_or(PatchError::TemplatesMissing)?
            .items
            .as_ref()
            .ok_or(PatchError::ItemsMissing)
    }

    pub fn items_mut(&mut self) -> Result<&mut ItemMap, PatchError> {
        self.templates_mut()?
            .items
            .as_mut()
            .ok_or(PatchError::ItemsMissing)
    }

    /// Raid restriction list, if the globals carry one.
    pub fn restrictions_in_raid(&self) -> Option<&[Value]> {
        self.globals
            .as_ref()?
            .config
            .as_ref()?
            .restrictions_in_raid
            .as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemMap>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Process-wide game settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Globals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GlobalsConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalsConfig {
    /// Per-item restrictions applied while in raid (e.g. max count of a
    /// template a player may carry in).
    #[serde(
        rename = "RestrictionsInRaid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub restrictions_in_raid: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_missing_sections() {
        let mut tables = DatabaseTables::default();
        assert_eq!(tables.items_mut().unwrap_err(), PatchError::TemplatesMissing);

        tables.templates = Some(Templates::default());
        assert_eq!(tables.items().unwrap_err(), PatchError::ItemsMissing);
    }

    #[test]
    fn with_items_keys_by_id() {
        let tables = DatabaseTables::with_items([
            ItemTemplate::new("a", "p"),
            ItemTemplate::new("b", "p"),
        ]);
        let items = tables.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items["b"].id, "b");
        assert!(tables.restrictions_in_raid().is_none());
    }
}
