use std::str::FromStr;

use log::debug;

use crate::prelude::*;
use crate::stat::log_deactivated;

/// The closed set of stat kinds. Dispatches to the matching [`StatVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Health(HealthStat),
    Time(TimeStat),
    Ammo(AmmoStat),
}

impl StatKind {
    /// Name of the kind itself, used for display. Unlike [`StatVariant::stat_name`] this is
    /// never absent.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Health(_) => "Health",
            StatKind::Time(_) => "Time",
            StatKind::Ammo(_) => "Ammo",
        }
    }
}

impl StatVariant for StatKind {
    fn stat_name(&self) -> Option<&'static str> {
        match self {
            StatKind::Health(health) => health.stat_name(),
            StatKind::Time(time) => time.stat_name(),
            StatKind::Ammo(ammo) => ammo.stat_name(),
        }
    }

    fn change_value(&self, data: &mut StatData, delta: f32) {
        match self {
            StatKind::Health(health) => health.change_value(data, delta),
            StatKind::Time(time) => time.change_value(data, delta),
            StatKind::Ammo(ammo) => ammo.change_value(data, delta),
        }
    }

    fn change_max_value(&self, data: &mut StatData, delta: f32) {
        match self {
            StatKind::Health(health) => health.change_max_value(data, delta),
            StatKind::Time(time) => time.change_max_value(data, delta),
            StatKind::Ammo(ammo) => ammo.change_max_value(data, delta),
        }
    }

    fn modified_value(&self, data: &StatData) -> f32 {
        match self {
            StatKind::Health(health) => health.modified_value(data),
            StatKind::Time(time) => time.modified_value(data),
            StatKind::Ammo(ammo) => ammo.modified_value(data),
        }
    }

    fn modified_max(&self, data: &StatData) -> f32 {
        match self {
            StatKind::Health(health) => health.modified_max(data),
            StatKind::Time(time) => time.modified_max(data),
            StatKind::Ammo(ammo) => ammo.modified_max(data),
        }
    }

    fn on_tick(&self, data: &mut StatData, frame_delta: f32) {
        match self {
            StatKind::Health(health) => health.on_tick(data, frame_delta),
            StatKind::Time(time) => time.on_tick(data, frame_delta),
            StatKind::Ammo(ammo) => ammo.on_tick(data, frame_delta),
        }
    }
}

impl FromStr for StatKind {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Ok(StatKind::Health(HealthStat)),
            "time" => Ok(StatKind::Time(TimeStat)),
            "ammo" => Ok(StatKind::Ammo(AmmoStat)),
            _ => Err(StatError::UnknownStatKind { kind: s.to_string() }),
        }
    }
}

impl From<HealthStat> for StatKind {
    fn from(value: HealthStat) -> Self {
        StatKind::Health(value)
    }
}

impl From<TimeStat> for StatKind {
    fn from(value: TimeStat) -> Self {
        StatKind::Time(value)
    }
}

impl From<AmmoStat> for StatKind {
    fn from(value: AmmoStat) -> Self {
        StatKind::Ammo(value)
    }
}

/// Depletable stat. Changes are gated on activity and clamped to the max; falling below
/// zero fires the zero notification on the next tick and deactivates the stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HealthStat;

impl StatVariant for HealthStat {
    fn stat_name(&self) -> Option<&'static str> {
        Some("Health")
    }

    fn change_value(&self, data: &mut StatData, delta: f32) {
        if !data.is_active {
            return;
        }
        data.value = data.max_value.min(data.value + delta);
        data.notify_changed(delta);
    }

    fn change_max_value(&self, data: &mut StatData, delta: f32) {
        data.max_value += delta;
    }

    fn modified_value(&self, data: &StatData) -> f32 {
        data.value
    }

    fn modified_max(&self, data: &StatData) -> f32 {
        (data.max_value * data.multiplier).floor()
    }

    fn on_tick(&self, data: &mut StatData, _frame_delta: f32) {
        if data.is_active && data.value < 0.0 {
            data.notify_zeroed();
            data.is_active = false;
            log_deactivated(data);
        }
    }
}

/// Countdown. Every write to the value also resets the max to it; while active each tick
/// subtracts `frame_delta * multiplier`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeStat;

impl StatVariant for TimeStat {
    fn stat_name(&self) -> Option<&'static str> {
        Some("Time")
    }

    fn change_value(&self, data: &mut StatData, delta: f32) {
        data.value += delta;
        data.max_value = data.value;
        data.notify_changed(delta);
    }

    /// Sets the max outright rather than adding to it.
    fn change_max_value(&self, data: &mut StatData, delta: f32) {
        data.max_value = delta;
    }

    fn modified_value(&self, data: &StatData) -> f32 {
        data.value
    }

    fn modified_max(&self, data: &StatData) -> f32 {
        data.max_value
    }

    fn on_tick(&self, data: &mut StatData, frame_delta: f32) {
        if !data.is_active {
            return;
        }

        let elapsed = frame_delta * data.multiplier;
        data.value -= elapsed;

        if data.value < 0.0 {
            debug!("time stat {} ran out ({})", data.guid, data.value);
            data.notify_zeroed();
        } else if elapsed != 0.0 {
            data.notify_changed(elapsed);
        }
    }
}

/// Accumulator. Never gated, never clamped, and invisible to name lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AmmoStat;

impl StatVariant for AmmoStat {
    fn stat_name(&self) -> Option<&'static str> {
        None
    }

    fn change_value(&self, data: &mut StatData, delta: f32) {
        data.value += delta;
        data.notify_changed(delta);
    }

    fn change_max_value(&self, data: &mut StatData, delta: f32) {
        data.max_value += delta;
    }

    fn modified_value(&self, data: &StatData) -> f32 {
        data.value
    }

    fn modified_max(&self, data: &StatData) -> f32 {
        (data.max_value * data.multiplier).floor()
    }
}
