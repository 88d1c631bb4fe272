use bevy::{platform::collections::HashMap, prelude::*};
use crate::prelude::*;

/// A component that represents a collection of stat modifiers, typically grouped by a common source
/// like an item, buff, or skill.
///
/// `ModifierSet` allows defining multiple modifiers that can be applied or removed together.
/// Keys are derived stat names (`"Health"`, `"Time"`). Stats without a derived name cannot be
/// targeted by a set.
#[derive(Component, Clone, Debug, Default)]
pub struct ModifierSet(HashMap<String, Vec<StatModifier>>);

impl ModifierSet {
    /// Creates a new `ModifierSet` from a pre-existing map of stat names to modifier lists.
    pub fn new(modifiers: HashMap<String, Vec<StatModifier>>) -> Self {
        Self(modifiers)
    }

    /// Adds a modifier for a stat name within this set.
    ///
    /// If the name does not already exist in the set, it will be created.
    pub fn add(&mut self, stat_name: &str, modifier: StatModifier) {
        self.0.entry(stat_name.to_string())
            .or_insert_with(Vec::new)
            .push(modifier);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Adds every modifier in this set to every stat of `manager` whose derived name
    /// matches its key.
    ///
    /// The new modifiers take effect on each stat's next tick.
    pub fn apply_to(&self, manager: &mut StatManager) {
        for (stat_name, modifiers) in self.0.iter() {
            for stat in manager.get_stat_mut(Some(stat_name), None) {
                for modifier in modifiers.iter() {
                    stat.add_modifier(*modifier);
                }
            }
        }
    }

    /// Removes the modifiers of this set from `manager`, one matching entry per modifier.
    /// It assumes the modifiers were previously applied in a similar manner.
    pub fn remove_from(&self, manager: &mut StatManager) {
        for (stat_name, modifiers) in self.0.iter() {
            for stat in manager.get_stat_mut(Some(stat_name), None) {
                for modifier in modifiers.iter() {
                    stat.remove_modifier(modifier);
                }
            }
        }
    }
}
