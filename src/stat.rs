use std::fmt;

use log::debug;

use crate::prelude::*;

/// Per-kind behaviour of a [`Stat`].
///
/// Implemented by [`HealthStat`], [`TimeStat`] and [`AmmoStat`], and dispatched through
/// [`StatKind`]. Every method works on the shared [`StatData`] of the owning stat, so a
/// variant only decides policy: clamping, gating, and what a tick does.
pub trait StatVariant {
    /// The derived name used for name lookup and equality. `None` excludes the stat from
    /// name-based queries.
    fn stat_name(&self) -> Option<&'static str>;

    /// Applies a raw delta to the current value. Fires a change notification when it
    /// actually mutates.
    fn change_value(&self, data: &mut StatData, delta: f32);

    fn change_max_value(&self, data: &mut StatData, delta: f32);

    fn modified_value(&self, data: &StatData) -> f32;

    fn modified_max(&self, data: &StatData) -> f32;

    /// Variant effects for one tick. Runs before the multiplier is recomputed, so it sees
    /// the multiplier cached by the previous tick.
    /// The default implementation does nothing.
    fn on_tick(&self, _data: &mut StatData, _frame_delta: f32) {}
}

/// State shared by every stat kind.
#[derive(Debug)]
pub struct StatData {
    pub(crate) guid: StatGuid,
    pub(crate) sub_name: Option<String>,
    pub(crate) value: f32,
    pub(crate) max_value: f32,
    pub(crate) modifiers: Vec<StatModifier>,
    pub(crate) multiplier: f32,
    pub(crate) is_active: bool,
    pub(crate) on_changed: Listeners<StatChange>,
    pub(crate) on_zeroed: Listeners<StatChange>,
}

impl StatData {
    fn new(value: f32, max_value: f32) -> Self {
        Self {
            guid: StatGuid::new(),
            sub_name: None,
            value,
            max_value,
            modifiers: Vec::new(),
            multiplier: 1.0,
            is_active: false,
            on_changed: Listeners::new(),
            on_zeroed: Listeners::new(),
        }
    }

    pub(crate) fn change_payload(&self, delta: f32) -> StatChange {
        StatChange {
            guid: self.guid,
            delta,
            value: self.value,
            max_value: self.max_value,
        }
    }

    pub(crate) fn notify_changed(&mut self, delta: f32) {
        let change = self.change_payload(delta);
        self.on_changed.emit(&change);
    }

    pub(crate) fn notify_zeroed(&mut self) {
        let change = self.change_payload(0.0);
        self.on_zeroed.emit(&change);
    }

    fn recompute_multiplier(&mut self) {
        self.multiplier = calculate_multiplier(&self.modifiers);
    }
}

/// A tracked numeric attribute: current value, ceiling, modifiers and an activity gate.
///
/// The behaviour of value changes and ticks depends on the [`StatKind`]; see
/// [`HealthStat`], [`TimeStat`] and [`AmmoStat`].
#[derive(Debug)]
pub struct Stat {
    kind: StatKind,
    data: StatData,
}

impl Stat {
    pub fn new(kind: impl Into<StatKind>, value: f32, max_value: f32) -> Self {
        Self {
            kind: kind.into(),
            data: StatData::new(value, max_value),
        }
    }

    pub fn health(value: f32, max_value: f32) -> Self {
        Self::new(HealthStat, value, max_value)
    }

    /// A countdown starting at `seconds`. Its max starts equal to the value.
    pub fn time(seconds: f32) -> Self {
        Self::new(TimeStat, seconds, seconds)
    }

    pub fn ammo(value: f32, max_value: f32) -> Self {
        Self::new(AmmoStat, value, max_value)
    }

    pub fn with_sub_name(mut self, sub_name: impl Into<String>) -> Self {
        self.set_stat_name(sub_name);
        self
    }

    pub fn with_modifier(mut self, modifier: StatModifier) -> Self {
        self.add_modifier(modifier);
        self
    }

    /// Uses an externally minted identity token instead of a fresh one.
    pub fn with_guid(mut self, guid: StatGuid) -> Self {
        self.data.guid = guid;
        self
    }

    pub fn kind(&self) -> &StatKind {
        &self.kind
    }

    /// The kind-fixed name, not whatever was last passed to [`Stat::set_stat_name`].
    pub fn stat_name(&self) -> Option<&'static str> {
        self.kind.stat_name()
    }

    /// Stores a display label in `sub_name`. This never changes [`Stat::stat_name`].
    pub fn set_stat_name(&mut self, name: impl Into<String>) {
        self.data.sub_name = Some(name.into());
    }

    pub fn sub_name(&self) -> Option<&str> {
        self.data.sub_name.as_deref()
    }

    pub fn guid(&self) -> StatGuid {
        self.data.guid
    }

    pub fn value(&self) -> f32 {
        self.data.value
    }

    /// Overwrites the raw value without gating or notification.
    pub fn set_value(&mut self, value: f32) {
        self.data.value = value;
    }

    pub fn max_value(&self) -> f32 {
        self.data.max_value
    }

    /// Overwrites the raw max without gating or notification.
    pub fn set_max_value(&mut self, max_value: f32) {
        self.data.max_value = max_value;
    }

    pub fn multiplier(&self) -> f32 {
        self.data.multiplier
    }

    /// Overwrites the cached multiplier. The next tick recomputes it from the modifiers.
    pub fn set_multiplier(&mut self, multiplier: f32) {
        self.data.multiplier = multiplier;
    }

    pub fn is_active(&self) -> bool {
        self.data.is_active
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.data.is_active = is_active;
    }

    pub fn modifiers(&self) -> &[StatModifier] {
        &self.data.modifiers
    }

    /// Fires a zero-delta change notification carrying the current values.
    pub fn init(&mut self) {
        self.data.notify_changed(0.0);
    }

    pub fn activate(&mut self) {
        self.data.is_active = true;
    }

    pub fn change_value(&mut self, delta: f32) {
        self.kind.change_value(&mut self.data, delta);
    }

    pub fn change_max_value(&mut self, delta: f32) {
        self.kind.change_max_value(&mut self.data, delta);
    }

    pub fn modified_value(&self) -> f32 {
        self.kind.modified_value(&self.data)
    }

    pub fn modified_max(&self) -> f32 {
        self.kind.modified_max(&self.data)
    }

    /// One tick: the variant's effects first, then the multiplier is recomputed from the
    /// current modifiers, exactly once.
    pub fn tick_update(&mut self, frame_delta: f32) {
        self.kind.on_tick(&mut self.data, frame_delta);
        self.data.recompute_multiplier();
    }

    /// The multiplier the current modifiers fold into. Does not touch the cached value.
    pub fn calculate_multiplier(&self) -> f32 {
        calculate_multiplier(&self.data.modifiers)
    }

    pub fn add_modifier(&mut self, modifier: StatModifier) {
        self.data.modifiers.push(modifier);
    }

    /// Removes the first modifier equal to `modifier`. Returns whether one was found.
    pub fn remove_modifier(&mut self, modifier: &StatModifier) -> bool {
        let Some(pos) = self.data.modifiers.iter().position(|m| m == modifier) else {
            return false;
        };
        self.data.modifiers.remove(pos);
        true
    }

    pub fn on_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StatChange) + Send + Sync + 'static,
    {
        self.data.on_changed.subscribe(listener)
    }

    pub fn on_zeroed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StatChange) + Send + Sync + 'static,
    {
        self.data.on_zeroed.subscribe(listener)
    }

    pub fn remove_changed_listener(&mut self, id: ListenerId) -> bool {
        self.data.on_changed.unsubscribe(id)
    }

    pub fn remove_zeroed_listener(&mut self, id: ListenerId) -> bool {
        self.data.on_zeroed.unsubscribe(id)
    }

    /// Identity-only comparison, ignoring names.
    pub fn guid_eq(&self, other: &Stat) -> bool {
        self.data.guid == other.data.guid
    }
}

impl PartialEq for Stat {
    /// Names decide when both stats have one; otherwise the identity tokens do.
    fn eq(&self, other: &Self) -> bool {
        match (self.stat_name(), other.stat_name()) {
            (Some(name), Some(other_name)) => name == other_name,
            _ => self.guid_eq(other),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<value: {}, max_value: {}, is_active: {}>",
            self.kind.label(),
            self.data.value,
            self.data.max_value,
            self.data.is_active
        )
    }
}

pub(crate) fn log_deactivated(data: &StatData) {
    debug!(
        "stat {} fell below zero ({}), deactivating",
        data.guid, data.value
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn record_changes(stat: &mut Stat) -> Arc<Mutex<Vec<StatChange>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        stat.on_changed(move |change| sink.lock().unwrap().push(*change));
        log
    }

    #[test]
    fn test_set_stat_name_only_touches_sub_name() {
        let mut stat = Stat::health(10.0, 10.0);
        stat.set_stat_name("Shield");
        assert_eq!(stat.stat_name(), Some("Health"));
        assert_eq!(stat.sub_name(), Some("Shield"));

        let ammo = Stat::ammo(6.0, 6.0).with_sub_name("Pistol");
        assert_eq!(ammo.stat_name(), None);
        assert_eq!(ammo.sub_name(), Some("Pistol"));
    }

    #[test]
    fn test_equality_by_name_then_guid() {
        let a = Stat::health(1.0, 1.0);
        let b = Stat::health(50.0, 80.0);
        assert!(a == b);
        assert!(!a.guid_eq(&b));

        let ammo = Stat::ammo(1.0, 1.0);
        let other_ammo = Stat::ammo(1.0, 1.0);
        assert!(ammo != other_ammo);

        // one side unnamed falls back to the token
        assert!(a != ammo);
        let shared = StatGuid::new();
        let named = Stat::time(3.0).with_guid(shared);
        let unnamed = Stat::ammo(0.0, 0.0).with_guid(shared);
        assert!(named == unnamed);
    }

    #[test]
    fn test_init_fires_zero_delta_change() {
        let mut stat = Stat::health(40.0, 100.0);
        let log = record_changes(&mut stat);

        stat.init();
        stat.activate();

        let changes = log.lock().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].delta, 0.0);
        assert_eq!(changes[0].value, 40.0);
        assert_eq!(changes[0].max_value, 100.0);
        assert_eq!(changes[0].guid, stat.guid());
        assert!(stat.is_active());
    }

    #[test]
    fn test_tick_recomputes_multiplier() {
        let mut stat = Stat::ammo(10.0, 10.0)
            .with_modifier(StatModifier::new(2.0, 0.0))
            .with_modifier(StatModifier::new(1.0, 3.0));

        // cached value lags until the next tick
        assert_eq!(stat.multiplier(), 1.0);
        assert_eq!(stat.calculate_multiplier(), 5.0);

        stat.tick_update(0.016);
        assert_eq!(stat.multiplier(), 5.0);
        assert_eq!(stat.modified_max(), 50.0);

        assert!(stat.remove_modifier(&StatModifier::new(1.0, 3.0)));
        assert!(!stat.remove_modifier(&StatModifier::new(1.0, 3.0)));
        stat.tick_update(0.016);
        assert_eq!(stat.multiplier(), 2.0);

        assert!(stat.remove_modifier(&StatModifier::new(2.0, 0.0)));
        stat.tick_update(0.016);
        assert_eq!(stat.multiplier(), 1.0);
    }

    #[test]
    fn test_accessors_do_not_mutate() {
        let mut stat = Stat::health(33.0, 99.5);
        stat.set_multiplier(2.0);
        let before = stat.to_string();
        let _ = stat.modified_value();
        let _ = stat.modified_max();
        assert_eq!(stat.to_string(), before);
        assert_eq!(stat.multiplier(), 2.0);
    }

    #[test]
    fn test_display() {
        let mut stat = Stat::health(90.0, 100.0);
        stat.activate();
        assert_eq!(stat.to_string(), "Health<value: 90, max_value: 100, is_active: true>");
        assert_eq!(
            Stat::ammo(3.5, 12.0).to_string(),
            "Ammo<value: 3.5, max_value: 12, is_active: false>"
        );
    }

    #[test]
    fn test_removed_listener_stops_receiving() {
        let mut stat = Stat::ammo(0.0, 10.0);
        let log = Arc::new(Mutex::new(0));
        let sink = log.clone();
        let id = stat.on_changed(move |_| *sink.lock().unwrap() += 1);

        stat.change_value(1.0);
        assert!(stat.remove_changed_listener(id));
        stat.change_value(1.0);

        assert_eq!(*log.lock().unwrap(), 1);
        assert_eq!(stat.value(), 2.0);
    }
}
