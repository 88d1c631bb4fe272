use bevy::prelude::*;

use crate::prelude::*;

/// Inserts a `StatManager` on entities that name a loadout but have no manager yet.
pub(crate) fn build_loadout_managers(
    loadouts: Query<(Entity, &StatLoadout, Option<&ModifierSet>), Without<StatManager>>,
    config: Res<StatsConfig>,
    mut commands: Commands,
) {
    for (entity, loadout, modifier_set) in loadouts.iter() {
        let Ok(mut manager) = config.build_manager(&loadout.0) else {
            commands.entity(entity).remove::<StatLoadout>();
            continue;
        };
        // a set inserted before the manager existed found nothing to apply to
        if let Some(modifier_set) = modifier_set {
            modifier_set.apply_to(&mut manager);
        }
        commands.entity(entity).insert(manager);
    }
}

/// Starts managers the first frame they exist: every stat is initialized and activated.
pub(crate) fn start_stat_managers(
    mut managers: Query<&mut StatManager, Added<StatManager>>,
) {
    for mut manager in managers.iter_mut() {
        manager.start();
    }
}

/// Forwards the frame tick to every manager. Paused or stopped managers only advance
/// their pause timer.
pub(crate) fn tick_stat_managers(
    mut managers: Query<&mut StatManager>,
    time: Res<Time>,
) {
    let delta = time.delta();
    for mut manager in managers.iter_mut() {
        manager.update(delta);
    }
}

/// Applies a `ModifierSet` to the entity's manager whenever a set is inserted, including
/// over an existing one.
pub(crate) fn apply_modifier_sets(
    trigger: Trigger<OnInsert, ModifierSet>,
    mut managers: Query<(&ModifierSet, &mut StatManager)>,
) {
    let Ok((modifier_set, mut manager)) = managers.get_mut(trigger.target()) else {
        return;
    };
    modifier_set.apply_to(&mut manager);
}

/// Takes a `ModifierSet`'s modifiers back off the manager before the set is replaced or
/// removed.
pub(crate) fn remove_modifier_sets(
    trigger: Trigger<OnReplace, ModifierSet>,
    mut managers: Query<(&ModifierSet, &mut StatManager)>,
) {
    let Ok((modifier_set, mut manager)) = managers.get_mut(trigger.target()) else {
        return;
    };
    modifier_set.remove_from(&mut manager);
}
