use bevy::{app::MainScheduleOrder, ecs::schedule::ScheduleLabel, prelude::*};

use crate::systems::{
    apply_modifier_sets, build_loadout_managers, remove_modifier_sets, start_stat_managers,
    tick_stat_managers,
};

/// Inserts `StatsUpdate` right after `PreUpdate` so that by `Update` every manager has
/// started and ticked for the frame.
///
/// If a system needs stat values from this frame's tick, it should run in `Update` or later.
pub fn plugin(app: &mut App) {
    app.init_schedule(StatsUpdate)
        .world_mut()
        .resource_mut::<MainScheduleOrder>()
        .insert_after(PreUpdate, StatsUpdate);

    app.add_systems(
        StatsUpdate,
        (build_loadout_managers, start_stat_managers, tick_stat_managers).chain(),
    )
    .add_observer(apply_modifier_sets)
    .add_observer(remove_modifier_sets);
}

/// Custom Bevy schedule label for starting and ticking `StatManager` components.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsUpdate;
