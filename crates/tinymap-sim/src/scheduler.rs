//! One-shot deferred tasks measured in ticks.
//!
//! Every task is bound to the match (session) that scheduled it. Starting a
//! new match or tearing the current one down bumps the session, and tasks
//! from an older session are dropped without firing. Paused ticks do not
//! count toward a delay because the engine does not advance the scheduler
//! while paused.

/// Work to run once a delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Leave the finished match (to the menu or into a fresh match).
    LeaveMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct DeferredTask {
    id: TaskId,
    session: u64,
    remaining_ticks: u64,
    action: DeferredAction,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<DeferredTask>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire after `delay_ticks` calls to `advance`.
    /// A zero delay fires on the next `advance`.
    pub fn schedule(&mut self, delay_ticks: u64, action: DeferredAction, session: u64) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(DeferredTask {
            id,
            session,
            remaining_ticks: delay_ticks.max(1),
            action,
        });
        id
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Ticks left before `id` fires.
    pub fn remaining_ticks(&self, id: TaskId) -> Option<u64> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.remaining_ticks)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Advance one tick and return the actions that came due, in scheduling
    /// order. Tasks from a session other than `current_session` are discarded.
    pub fn advance(&mut self, current_session: u64) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.tasks.retain_mut(|task| {
            if task.session != current_session {
                log::debug!("dropping stale deferred task {:?}", task.id);
                return false;
            }
            task.remaining_ticks -= 1;
            if task.remaining_ticks == 0 {
                due.push(task.action);
                false
            } else {
                true
            }
        });
        due
    }
}
