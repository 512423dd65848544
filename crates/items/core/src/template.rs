//! Item template records as stored in the host's item database.
//!
//! Only the properties the stripper reads or writes are typed. Everything else
//! is captured in `extra` maps and written back untouched, so a template that no
//! rule matches serializes to the same JSON it was read from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::{ITEM_BASE_CLASS, ItemCategory};

/// One kind of in-game item and its static properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Base-class id of the parent node; selects the [`ItemCategory`].
    #[serde(rename = "_parent", default)]
    pub parent: String,

    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    #[serde(rename = "_props", default, skip_serializing_if = "Option::is_none")]
    pub props: Option<ItemProps>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemTemplate {
    /// Creates a template with an empty property bag.
    pub fn new(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parent: parent.into(),
            node_type: Some("Item".to_owned()),
            props: Some(ItemProps::default()),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_props(mut self, props: ItemProps) -> Self {
        self.props = Some(props);
        self
    }

    pub fn category(&self) -> Option<ItemCategory> {
        ItemCategory::from_parent(&self.parent)
    }
}

/// Property bag of an item template.
///
/// Every restriction field is optional: the host omits properties that do not
/// apply to a template, and the stripper writes them regardless when a rule
/// asks for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_earpiece: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_eyewear: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_face_cover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_headwear: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_put_into_during_the_raid: Option<bool>,
    /// Equipment slot names locked while in raid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cant_remove_from_slots_during_raid: Option<Vec<String>>,
    /// Ids of templates that cannot be equipped together with this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_items: Option<Vec<String>>,

    /// `-1` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discarding_block: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_undiscardable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ungivable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unremovable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unsaleable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grids: Option<Vec<Grid>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Storage grid of a container item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "_props", default, skip_serializing_if = "Option::is_none")]
    pub props: Option<GridProps>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Grid {
    pub fn with_filters(filters: Vec<GridFilter>) -> Self {
        Self {
            props: Some(GridProps {
                filters: Some(filters),
                extra: Map::new(),
            }),
            ..Self::default()
        }
    }

    /// Filters of this grid, empty when the grid carries none.
    pub fn filters(&self) -> &[GridFilter] {
        self.props
            .as_ref()
            .and_then(|props| props.filters.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<GridFilter>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Allowed and excluded item categories of a grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridFilter {
    #[serde(rename = "Filter", default)]
    pub filter: Vec<String>,

    #[serde(rename = "ExcludedFilter", default)]
    pub excluded_filter: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GridFilter {
    pub fn new(filter: Vec<String>, excluded_filter: Vec<String>) -> Self {
        Self {
            filter,
            excluded_filter,
            extra: Map::new(),
        }
    }

    /// Filter that admits every item: the root item class, nothing excluded.
    pub fn allow_all() -> Self {
        Self::new(vec![ITEM_BASE_CLASS.to_owned()], Vec::new())
    }

    pub fn is_allow_all(&self) -> bool {
        *self == Self::allow_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_unknown_properties() {
        let raw = json!({
            "_id": "backpack_1",
            "_name": "Pilgrim",
            "_parent": ItemCategory::Backpack.base_class(),
            "_type": "Item",
            "_props": {
                "Weight": 2.1,
                "DiscardLimit": 3,
                "Grids": [{
                    "_name": "main",
                    "_id": "grid_1",
                    "_parent": "backpack_1",
                    "_props": {
                        "cellsH": 5,
                        "filters": [{ "Filter": ["a"], "ExcludedFilter": ["b"] }]
                    },
                    "_proto": "55d329c24bdc2d892f8b4567"
                }]
            },
            "_proto": "proto"
        });

        let template: ItemTemplate = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(template.category(), Some(ItemCategory::Backpack));

        let props = template.props.as_ref().unwrap();
        assert_eq!(props.discard_limit, Some(3));
        assert_eq!(props.extra.get("Weight"), Some(&json!(2.1)));

        let grids = props.grids.as_ref().unwrap();
        assert_eq!(grids[0].filters().len(), 1);
        assert_eq!(grids[0].filters()[0].excluded_filter, vec!["b".to_owned()]);

        assert_eq!(serde_json::to_value(&template).unwrap(), raw);
    }

    #[test]
    fn tolerates_missing_props() {
        let template: ItemTemplate =
            serde_json::from_value(json!({ "_id": "x", "_parent": "y" })).unwrap();
        assert!(template.props.is_none());
        assert_eq!(template.category(), None);
    }

    #[test]
    fn allow_all_filter_shape() {
        let filter = GridFilter::allow_all();
        assert_eq!(filter.filter, vec![ITEM_BASE_CLASS.to_owned()]);
        assert!(filter.excluded_filter.is_empty());
        assert!(filter.is_allow_all());
        assert!(!GridFilter::default().is_allow_all());
    }
}
