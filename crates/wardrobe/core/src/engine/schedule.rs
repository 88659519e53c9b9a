//! Frame-scheduled deferred actions.
//!
//! A deferred action is tied to one item and fires on a later update tick.
//! Anything that changes the item's state before then cancels it, so a task
//! never acts on an item that has already moved on.
use crate::state::{ItemId, Tick, ZoneId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct TaskId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeferredAction {
    /// Disable hit-testing on an item that snapped into `zone`.
    SettleHitTest { item: ItemId, zone: ZoneId },
}

impl DeferredAction {
    pub(crate) fn item(&self) -> ItemId {
        match self {
            Self::SettleHitTest { item, .. } => *item,
        }
    }
}

#[derive(Clone, Debug)]
struct ScheduledTask {
    id: TaskId,
    due: Tick,
    action: DeferredAction,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Scheduler {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn schedule(&mut self, due: Tick, action: DeferredAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        tracing::debug!("scheduled {:?} for tick {}", action, due);
        self.tasks.push(ScheduledTask { id, due, action });
        id
    }

    #[cfg(test)]
    pub(crate) fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        before != self.tasks.len()
    }

    /// Cancels every pending task bound to `item`.
    pub(crate) fn cancel_for(&mut self, item: ItemId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.action.item() != item);
        let cancelled = before - self.tasks.len();
        if cancelled > 0 {
            tracing::debug!("cancelled {} deferred task(s) for {}", cancelled, item);
        }
        cancelled
    }

    /// Removes and returns the tasks due at or before `now`, oldest first.
    pub(crate) fn take_due(&mut self, now: Tick) -> Vec<DeferredAction> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|task| task.due <= now);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due, task.id));
        due.into_iter().map(|task| task.action).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn is_pending_for(&self, item: ItemId) -> bool {
        self.tasks.iter().any(|task| task.action.item() == item)
    }
}
