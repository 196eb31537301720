//! Deterministic scheduled-task queue
//!
//! The session's three cadences (countdown, spawn, per-object collision
//! polls) are plain entries in one queue, run when the host advances time
//! past their deadline. The host samples the clock - real or virtual - so
//! tests drive whole sessions without waiting. Draining the queue from one
//! call site is also the serialization point: every score and object-set
//! mutation happens there, in deadline order.
//!
//! Ties on the deadline break by caller-supplied priority, then by insertion
//! order, so a drain is fully reproducible.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Opaque handle to a scheduled task, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Entry<T> {
    due_ms: u64,
    priority: u8,
    seq: u64,
    id: TaskId,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the earliest entry surfaces
        // first, lowest priority value winning a deadline tie.
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.priority.cmp(&self.priority))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority-ordered queue of cancellable one-shot tasks.
///
/// Recurring cadences re-arm themselves: a task that should repeat schedules
/// its successor while it runs, and simply doesn't when its gate (game over,
/// object dead) says stop.
pub struct TimerQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    scheduled: HashSet<TaskId>,
    cancelled: HashSet<TaskId>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            scheduled: HashSet::new(),
            cancelled: HashSet::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to run at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, priority: u8, payload: T) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = TaskId(seq);
        self.heap.push(Entry {
            due_ms,
            priority,
            seq,
            id,
            payload,
        });
        self.scheduled.insert(id);
        id
    }

    /// Cancel a pending task. Cancelling a task that already ran (or was
    /// never scheduled here) is a silent no-op.
    pub fn cancel(&mut self, id: TaskId) {
        if self.scheduled.remove(&id) {
            self.cancelled.insert(id);
        }
    }

    /// Pop the next task due at or before `now_ms`, skipping cancelled ones.
    /// Returns the task's own deadline so the caller can run it at its
    /// logical time regardless of how coarsely the host advances.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TaskId, u64, T)> {
        while let Some(head) = self.heap.peek() {
            if head.due_ms > now_ms {
                return None;
            }
            let entry = self.heap.pop()?;
            if self.cancelled.remove(&entry.id) {
                continue;
            }
            self.scheduled.remove(&entry.id);
            return Some((entry.id, entry.due_ms, entry.payload));
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(200, 1, "late");
        queue.schedule(100, 1, "early");
        queue.schedule(150, 1, "middle");

        assert!(queue.pop_due(50).is_none());

        let order: Vec<&str> = std::iter::from_fn(|| queue.pop_due(1000).map(|(_, _, p)| p)).collect();
        assert_eq!(order, vec!["early", "middle", "late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_deadline_tie_breaks_by_priority_then_insertion() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 2, "poll");
        queue.schedule(100, 1, "spawn");
        queue.schedule(100, 0, "countdown");
        queue.schedule(100, 2, "poll-2");

        let order: Vec<&str> = std::iter::from_fn(|| queue.pop_due(100).map(|(_, _, p)| p)).collect();
        assert_eq!(order, vec!["countdown", "spawn", "poll", "poll-2"]);
    }

    #[test]
    fn test_pop_due_honors_now() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 0, "a");
        queue.schedule(200, 0, "b");

        assert_eq!(queue.pop_due(100).map(|(_, _, p)| p), Some("a"));
        assert!(queue.pop_due(100).is_none());
        assert!(!queue.is_empty());
        assert_eq!(queue.pop_due(200).map(|(_, _, p)| p), Some("b"));
    }

    #[test]
    fn test_pop_reports_task_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(130, 0, "a");
        let (_, due_ms, _) = queue.pop_due(5000).unwrap();
        assert_eq!(due_ms, 130);
    }

    #[test]
    fn test_cancel_suppresses_task() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 0, "keep");
        let doomed = queue.schedule(100, 0, "cancel");
        queue.schedule(100, 0, "keep-2");

        queue.cancel(doomed);

        let order: Vec<&str> = std::iter::from_fn(|| queue.pop_due(100).map(|(_, _, p)| p)).collect();
        assert_eq!(order, vec!["keep", "keep-2"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_after_run_is_noop() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(100, 0, "a");
        queue.schedule(200, 0, "b");

        assert!(queue.pop_due(100).is_some());
        queue.cancel(id);

        assert_eq!(queue.pop_due(200).map(|(_, _, p)| p), Some("b"));
    }
}
