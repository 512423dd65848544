//! Host lifecycle with the bundled No-Restrictions rules.

use items_content::ConfigLoader;
use items_core::{DatabaseTables, GridFilter, ItemCategory, ItemMap, ItemTemplate};
use runtime::{Host, ModCriticality, NoRestrictionsMod, PostDbLoadMod};
use serde_json::json;

fn seeded_tables() -> DatabaseTables {
    let items: ItemMap = serde_json::from_value(json!({
        "case": {
            "_id": "case",
            "_parent": ItemCategory::SimpleContainer.base_class(),
            "_props": {
                "IsUnsaleable": true,
                "Grids": [
                    { "_props": { "filters": [{ "Filter": ["keys"], "ExcludedFilter": [] }] } },
                    { "_props": { "filters": [] } }
                ]
            }
        },
        "mask": {
            "_id": "mask",
            "_parent": ItemCategory::FaceCover.base_class(),
            "_props": { "BlocksHeadwear": true, "ConflictingItems": ["helmet"] }
        },
        "helmet": {
            "_id": "helmet",
            "_parent": ItemCategory::Headwear.base_class(),
            "_props": { "BlocksFaceCover": true, "ConflictingItems": ["mask"] }
        },
        "rifle": {
            "_id": "rifle",
            "_parent": "5447b5f14bdc2d61278b4567",
            "_props": { "ConflictingItems": ["mask", "scope"], "IsUnsaleable": true }
        }
    }))
    .unwrap();

    let mut tables = DatabaseTables::with_items(Vec::<ItemTemplate>::new());
    tables.templates.as_mut().unwrap().items = Some(items);
    tables.globals = Some(
        serde_json::from_value(json!({
            "config": { "RestrictionsInRaid": [{ "TemplateId": "case", "Value": 1 }] }
        }))
        .unwrap(),
    );
    tables
}

#[test]
fn bundled_mod_strips_restrictions_once() {
    let rules = ConfigLoader::bundled().unwrap();
    let module = NoRestrictionsMod::new(rules);
    assert_eq!(module.criticality(), ModCriticality::Critical);

    let started = Host::builder()
        .database(seeded_tables())
        .with_mod(module)
        .build()
        .start()
        .unwrap();
    assert_eq!(started.summary.loaded, vec!["NoRestrictions"]);

    let tables = started.into_tables().unwrap();
    let items = tables.items().unwrap();

    let case = items["case"].props.as_ref().unwrap();
    assert_eq!(case.is_unsaleable, Some(false));
    for grid in case.grids.as_ref().unwrap() {
        assert_eq!(grid.filters(), &[GridFilter::allow_all()]);
    }

    assert_eq!(items["mask"].props.as_ref().unwrap().blocks_headwear, Some(false));
    assert_eq!(items["helmet"].props.as_ref().unwrap().blocks_face_cover, Some(false));
    assert_eq!(
        items["rifle"].props.as_ref().unwrap().conflicting_items,
        Some(vec!["scope".to_owned()])
    );
    // rifles have no rule
    assert_eq!(items["rifle"].props.as_ref().unwrap().is_unsaleable, Some(true));

    assert_eq!(tables.restrictions_in_raid(), Some(&[][..]));
}

#[test]
fn unloaded_database_aborts_startup() {
    let err = Host::builder()
        .with_mod(NoRestrictionsMod::new(ConfigLoader::bundled().unwrap()))
        .build()
        .start()
        .unwrap_err();

    assert_eq!(err.mod_name(), "NoRestrictions");
    assert!(err.to_string().contains("database tables are missing"));
}
