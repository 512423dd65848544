//! Global in-raid restriction list.

use tracing::debug;

use crate::tables::Globals;

/// Replaces `globals.config.RestrictionsInRaid` with an empty list.
///
/// Returns `false` without touching anything when the globals or their config
/// section are absent.
pub fn clear_raid_restrictions(globals: Option<&mut Globals>) -> bool {
    let Some(config) = globals.and_then(|globals| globals.config.as_mut()) else {
        debug!("no globals config loaded, raid restrictions left as is");
        return false;
    };

    let previous = config
        .restrictions_in_raid
        .replace(Vec::new())
        .map_or(0, |entries| entries.len());
    debug!(previous, "cleared in-raid restrictions");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::GlobalsConfig;
    use serde_json::json;

    #[test]
    fn empties_existing_list() {
        let mut globals = Globals {
            config: Some(GlobalsConfig {
                restrictions_in_raid: Some(vec![json!({ "TemplateId": "a", "Value": 1 })]),
                ..GlobalsConfig::default()
            }),
            ..Globals::default()
        };

        assert!(clear_raid_restrictions(Some(&mut globals)));
        let config = globals.config.unwrap();
        assert_eq!(config.restrictions_in_raid, Some(Vec::new()));
    }

    #[test]
    fn writes_empty_list_when_entry_absent() {
        let mut globals = Globals {
            config: Some(GlobalsConfig::default()),
            ..Globals::default()
        };

        assert!(clear_raid_restrictions(Some(&mut globals)));
        assert_eq!(
            globals.config.unwrap().restrictions_in_raid,
            Some(Vec::new())
        );
    }

    #[test]
    fn no_op_without_config() {
        let mut globals = Globals::default();
        assert!(!clear_raid_restrictions(Some(&mut globals)));
        assert_eq!(globals, Globals::default());

        assert!(!clear_raid_restrictions(None));
    }
}
