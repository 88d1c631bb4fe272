use std::fmt;

use crate::stat_guid::StatGuid;

/// Payload of a stat's change and zero notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatChange {
    pub guid: StatGuid,
    /// The raw delta that caused the notification, before any clamping.
    pub delta: f32,
    pub value: f32,
    pub max_value: f32,
}

/// Fired by [`StatManager::add_stat`](crate::stat_manager::StatManager::add_stat).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatAdded {
    pub guid: StatGuid,
}

/// Fired once per [`StatManager::remove_stat`](crate::stat_manager::StatManager::remove_stat)
/// call, whatever the number of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRemoved {
    pub removed: usize,
}

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E) + Send + Sync>;

/// Publish/subscribe registry for one notification kind.
///
/// Delivery is synchronous and in subscription order. Listeners stay registered until
/// they are explicitly removed with [`Listeners::unsubscribe`].
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when no listener with this id is registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some(pos) = self.entries.iter().position(|(entry_id, _)| *entry_id == id) else {
            return false;
        };
        drop(self.entries.remove(pos));
        true
    }

    pub fn emit(&mut self, event: &E) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
