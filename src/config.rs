use bevy::prelude::*;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::prelude::*;

/// Construction data for one stat, typically deserialized from a content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlueprint {
    /// `"Health"`, `"Time"` or `"Ammo"`, case-insensitive.
    pub kind: String,
    #[serde(default)]
    pub sub_name: Option<String>,
    #[serde(default)]
    pub value: f32,
    /// Defaults to `value` when omitted.
    #[serde(default)]
    pub max_value: Option<f32>,
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
}

impl StatBlueprint {
    pub fn new(kind: &str, value: f32) -> Self {
        Self {
            kind: kind.to_string(),
            sub_name: None,
            value,
            max_value: None,
            modifiers: Vec::new(),
        }
    }

    pub fn build(&self) -> StatResult<Stat> {
        let kind: StatKind = self.kind.parse()?;
        let mut stat = Stat::new(kind, self.value, self.max_value.unwrap_or(self.value));
        if let Some(sub_name) = &self.sub_name {
            stat.set_stat_name(sub_name.clone());
        }
        for modifier in self.modifiers.iter() {
            stat.add_modifier(*modifier);
        }
        Ok(stat)
    }
}

/// Asks for a `StatManager` built from the named `StatsConfig` loadout to be inserted on
/// this entity.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct StatLoadout(pub String);

#[derive(Resource, Debug, Clone)]
pub struct StatsConfig {
    /// Running flag given to managers built from this config.
    pub start_running: bool,
    loadouts: HashMap<String, Vec<StatBlueprint>>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            start_running: true,
            loadouts: HashMap::new(),
        }
    }
}

impl StatsConfig {
    /// Register a named set of stats, e.g. "Player" or "Turret". Replaces any loadout
    /// already registered under the name.
    pub fn register_loadout(&mut self, name: &str, blueprints: Vec<StatBlueprint>) {
        self.loadouts.insert(name.to_string(), blueprints);
    }

    pub fn loadout(&self, name: &str) -> Option<&[StatBlueprint]> {
        self.loadouts.get(name).map(Vec::as_slice)
    }

    /// Builds a fresh manager holding one stat per blueprint of the loadout, in order.
    pub fn build_manager(&self, name: &str) -> StatResult<StatManager> {
        let Some(blueprints) = self.loadouts.get(name) else {
            warn!("no stat loadout registered under '{}'", name);
            return Err(StatError::UnknownLoadout { name: name.to_string() });
        };

        let mut manager = StatManager::new();
        manager.set_ticking(self.start_running);
        for blueprint in blueprints {
            let stat = blueprint.build().inspect_err(|err| {
                warn!("stat loadout '{}': {}", name, err);
            })?;
            manager.add_stat(stat);
        }
        Ok(manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_build() {
        let blueprint = StatBlueprint {
            kind: "health".to_string(),
            sub_name: Some("Hull".to_string()),
            value: 80.0,
            max_value: Some(120.0),
            modifiers: vec![StatModifier::multiply(2.0)],
        };

        let stat = blueprint.build().unwrap();
        assert_eq!(stat.stat_name(), Some("Health"));
        assert_eq!(stat.sub_name(), Some("Hull"));
        assert_eq!(stat.value(), 80.0);
        assert_eq!(stat.max_value(), 120.0);
        assert_eq!(stat.modifiers(), &[StatModifier::multiply(2.0)]);
    }

    #[test]
    fn test_max_defaults_to_value() {
        let stat = StatBlueprint::new("Time", 30.0).build().unwrap();
        assert_eq!(stat.max_value(), 30.0);
    }

    #[test]
    fn test_unknown_kind() {
        let err = StatBlueprint::new("Mana", 1.0).build().unwrap_err();
        assert_eq!(err, StatError::UnknownStatKind { kind: "Mana".to_string() });
    }

    #[test]
    fn test_loadout_registration() {
        let mut config = StatsConfig::default();
        config.register_loadout(
            "Player",
            vec![StatBlueprint::new("Health", 100.0), StatBlueprint::new("Ammo", 12.0)],
        );

        let manager = config.build_manager("Player").unwrap();
        assert_eq!(manager.len(), 2);
        assert!(manager.is_ticking());
        assert_eq!(config.loadout("Player").map(<[_]>::len), Some(2));

        assert_eq!(
            config.build_manager("Turret").unwrap_err(),
            StatError::UnknownLoadout { name: "Turret".to_string() }
        );
    }

    #[test]
    fn test_start_running_flag() {
        let mut config = StatsConfig { start_running: false, ..Default::default() };
        config.register_loadout("Idle", Vec::new());
        assert!(!config.build_manager("Idle").unwrap().is_ticking());
    }

    #[test]
    fn test_bad_blueprint_fails_whole_loadout() {
        let mut config = StatsConfig::default();
        config.register_loadout(
            "Broken",
            vec![StatBlueprint::new("Health", 1.0), StatBlueprint::new("Shield", 1.0)],
        );
        assert!(matches!(
            config.build_manager("Broken"),
            Err(StatError::UnknownStatKind { .. })
        ));
    }
}
