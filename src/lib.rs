use bevy::prelude::*;

pub mod config;
pub mod modifier_set;
pub mod pause_timer;
pub mod prelude;
pub mod schedule;
pub mod stat;
pub mod stat_error;
pub mod stat_events;
pub mod stat_guid;
pub mod stat_manager;
pub mod stat_modifiers;
pub mod stat_types;
mod systems;

/// Installs the stat schedule and systems, and a default `StatsConfig` unless one was
/// inserted already.
///
/// Frame time comes from `Res<Time>`, so the app also needs `TimePlugin` (part of
/// `MinimalPlugins` and `DefaultPlugins`).
pub fn plugin(app: &mut App) {
    app.init_resource::<prelude::StatsConfig>();
    schedule::plugin(app);
}
