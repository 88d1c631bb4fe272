pub use crate::config::{StatBlueprint, StatLoadout, StatsConfig};
pub use crate::modifier_set::ModifierSet;
pub use crate::pause_timer::PauseTimer;
pub use crate::schedule::StatsUpdate;
pub use crate::stat::{Stat, StatData, StatVariant};
pub use crate::stat_error::{StatError, StatResult};
pub use crate::stat_events::{ListenerId, Listeners, StatAdded, StatChange, StatsRemoved};
pub use crate::stat_guid::StatGuid;
pub use crate::stat_manager::StatManager;
pub use crate::stat_modifiers::{calculate_multiplier, StatModifier};
pub use crate::stat_types::{AmmoStat, HealthStat, StatKind, TimeStat};
