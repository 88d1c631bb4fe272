use std::time::Duration;

use bevy::prelude::*;
use log::{debug, trace};

use crate::prelude::*;

/// Owns the stats of one entity and drives their ticks.
///
/// Stats are kept in insertion order. Neither names nor identity tokens need to be unique:
/// selection by name or token always applies to every match.
///
/// Selection for [`StatManager::get_stat`] and [`StatManager::remove_stat`]:
/// - a token selects every stat with that token, and the name is ignored,
/// - otherwise a name selects every stat whose derived name equals it (unnamed stats never
///   match),
/// - with neither, everything is selected.
#[derive(Component, Debug)]
pub struct StatManager {
    stats: Vec<Stat>,
    running: bool,
    started: bool,
    pause: PauseTimer,
    on_added: Listeners<StatAdded>,
    on_removed: Listeners<StatsRemoved>,
}

impl StatManager {
    pub fn new() -> Self {
        Self {
            stats: Vec::new(),
            running: true,
            started: false,
            pause: PauseTimer::new(),
            on_added: Listeners::new(),
            on_removed: Listeners::new(),
        }
    }

    pub fn with_stat(mut self, stat: Stat) -> Self {
        self.add_stat(stat);
        self
    }

    pub fn add_stat(&mut self, stat: Stat) {
        let added = StatAdded { guid: stat.guid() };
        self.stats.push(stat);
        trace!("stat {} added, {} registered", added.guid, self.stats.len());
        self.on_added.emit(&added);
    }

    pub fn remove_stat(&mut self, name: Option<&str>, guid: Option<StatGuid>) {
        let before = self.stats.len();
        match (guid, name) {
            (Some(guid), _) => self.stats.retain(|stat| stat.guid() != guid),
            (None, Some(name)) => self.stats.retain(|stat| stat.stat_name() != Some(name)),
            (None, None) => self.stats.clear(),
        }

        let removed = StatsRemoved { removed: before - self.stats.len() };
        trace!("{} stats removed, {} registered", removed.removed, self.stats.len());
        self.on_removed.emit(&removed);
    }

    pub fn get_stat(&self, name: Option<&str>, guid: Option<StatGuid>) -> Vec<&Stat> {
        self.stats
            .iter()
            .filter(|stat| selects(stat, name, guid))
            .collect()
    }

    pub fn get_stat_mut(&mut self, name: Option<&str>, guid: Option<StatGuid>) -> Vec<&mut Stat> {
        self.stats
            .iter_mut()
            .filter(|stat| selects(stat, name, guid))
            .collect()
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Initializes then activates every registered stat, in order. Only the first call
    /// has any effect; stats added afterwards are left as they are.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        debug!("stat manager starting with {} stats", self.stats.len());
        for stat in self.stats.iter_mut() {
            stat.init();
            stat.activate();
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Ticks every stat in registry order, regardless of the running flag.
    pub fn tick_stats(&mut self, frame_delta: f32) {
        for stat in self.stats.iter_mut() {
            stat.tick_update(frame_delta);
        }
    }

    /// One frame: ticks the stats if running, then advances a pending pause.
    pub fn update(&mut self, delta: Duration) {
        if self.running {
            self.tick_stats(delta.as_secs_f32());
        }

        if self.pause.tick(delta) {
            debug!("stat ticking resumed after pause");
            self.running = true;
        }
    }

    /// Stops ticking now and resumes after `seconds` of frame time. A second call while a
    /// pause is pending replaces it.
    pub fn pause_ticking(&mut self, seconds: f32) -> StatResult<()> {
        let duration = Duration::try_from_secs_f32(seconds)
            .map_err(|_| StatError::InvalidPause { seconds })?;

        debug!("stat ticking paused for {}s", seconds);
        self.running = false;
        self.pause.schedule(duration);
        Ok(())
    }

    /// Flips the running flag. A pending pause still resumes when it elapses.
    pub fn toggle_ticking(&mut self) {
        self.running = !self.running;
    }

    /// Sets the running flag. A pending pause still resumes when it elapses.
    pub fn set_ticking(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_ticking(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_pending()
    }

    pub fn on_added<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StatAdded) + Send + Sync + 'static,
    {
        self.on_added.subscribe(listener)
    }

    pub fn on_removed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StatsRemoved) + Send + Sync + 'static,
    {
        self.on_removed.subscribe(listener)
    }

    pub fn remove_added_listener(&mut self, id: ListenerId) -> bool {
        self.on_added.unsubscribe(id)
    }

    pub fn remove_removed_listener(&mut self, id: ListenerId) -> bool {
        self.on_removed.unsubscribe(id)
    }
}

impl Default for StatManager {
    fn default() -> Self {
        Self::new()
    }
}

fn selects(stat: &Stat, name: Option<&str>, guid: Option<StatGuid>) -> bool {
    match (guid, name) {
        (Some(guid), _) => stat.guid() == guid,
        (None, Some(name)) => stat.stat_name() == Some(name),
        (None, None) => true,
    }
}
