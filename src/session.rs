//! Host-facing session driver
//!
//! Wires the spawner, the collision poller and the countdown into a single
//! `advance(now_ms)` call. The host samples its clock, reports drag input,
//! and consumes the returned events; nothing here blocks, owns a thread, or
//! touches a real timer. Due tasks run at their own logical deadline, so the
//! outcome of a session does not depend on how coarsely the host advances.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::schedule::{TaskId, TimerQueue};
use crate::sim::{
    Basket, FallingObject, ObjectKind, Playfield, PollOutcome, Session, Spawner, poll,
};

/// Observable outcome of advancing the session.
///
/// Render-facing: `Spawned` asks the host to add a visual at (x, 0) and
/// animate it linearly to (x, playfield height) over [`FALL_DURATION_MS`];
/// `RemoveVisual` retires it on either resolution, whichever comes first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObjectKind, x: f32 },
    /// Object landed in the basket; `score` is the value after the catch
    Caught { id: u32, kind: ObjectKind, score: i32 },
    /// Object reached the bottom uncaught
    Missed { id: u32 },
    RemoveVisual { id: u32 },
    /// Countdown advanced; display "Time: {remaining}"
    TimerTick { remaining: u32 },
    /// Countdown hit zero. Spawning stops for good; objects already in
    /// flight keep falling and can still be caught or missed.
    GameOver,
}

/// Work items on the session's timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    CountdownTick,
    SpawnTick,
    Poll { object_id: u32 },
}

// Deadline-tie order: the countdown must observe game over before the spawn
// gate reads it, and polls come after both.
const PRIO_COUNTDOWN: u8 = 0;
const PRIO_SPAWN: u8 = 1;
const PRIO_POLL: u8 = 2;

struct LiveObject {
    object: FallingObject,
    /// Handle of the next scheduled poll; cancelled together with clearing
    /// the alive flag so no poll ever runs for a dead object
    poll_task: TaskId,
}

/// One bounded game: a basket, a countdown, and the live object set.
///
/// Restart is external teardown: drop the session and build a new one (or
/// use [`GameSession::restart`]); the countdown has no pause or resume.
pub struct GameSession {
    playfield: Playfield,
    initial_basket: Basket,
    basket: Basket,
    session: Session,
    spawner: Spawner,
    objects: BTreeMap<u32, LiveObject>,
    queue: TimerQueue<Task>,
}

impl GameSession {
    /// Start a session at `now_ms`. The first object spawns immediately;
    /// the first countdown tick lands one period later.
    pub fn new(playfield: Playfield, basket: Basket, seed: u64, now_ms: u64) -> Self {
        let mut queue = TimerQueue::new();
        queue.schedule(now_ms + COUNTDOWN_PERIOD_MS, PRIO_COUNTDOWN, Task::CountdownTick);
        queue.schedule(now_ms, PRIO_SPAWN, Task::SpawnTick);

        info!(
            "session started: {}x{} playfield, seed {seed}",
            playfield.width, playfield.height
        );

        Self {
            playfield,
            initial_basket: basket,
            basket,
            session: Session::new(),
            spawner: Spawner::new(seed),
            objects: BTreeMap::new(),
            queue,
        }
    }

    /// Tear down and rebuild from scratch, as the external restart trigger
    /// does. The basket returns to its initial position.
    pub fn restart(&self, seed: u64, now_ms: u64) -> Self {
        Self::new(self.playfield, self.initial_basket, seed, now_ms)
    }

    /// Report an absolute basket x from the host's drag stream.
    pub fn move_basket(&mut self, x: f32) {
        self.basket.drag_to(x, &self.playfield);
    }

    /// Run everything due at or before `now_ms`, in deadline order, and
    /// return the events the host must react to.
    pub fn advance(&mut self, now_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some((_, due_ms, task)) = self.queue.pop_due(now_ms) {
            match task {
                Task::CountdownTick => self.run_countdown(due_ms, &mut events),
                Task::SpawnTick => self.run_spawn(due_ms, &mut events),
                Task::Poll { object_id } => self.run_poll(object_id, due_ms, &mut events),
            }
        }
        events
    }

    pub fn score(&self) -> i32 {
        self.session.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.session.remaining_secs()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn live_objects(&self) -> impl Iterator<Item = &FallingObject> {
        self.objects.values().map(|live| &live.object)
    }

    pub fn live_object_count(&self) -> usize {
        self.objects.len()
    }

    fn run_countdown(&mut self, due_ms: u64, events: &mut Vec<GameEvent>) {
        let tick = self.session.countdown.tick();
        if tick.is_over {
            info!("game over, final score {}", self.session.score);
            events.push(GameEvent::GameOver);
        } else {
            events.push(GameEvent::TimerTick {
                remaining: tick.remaining,
            });
            self.queue
                .schedule(due_ms + COUNTDOWN_PERIOD_MS, PRIO_COUNTDOWN, Task::CountdownTick);
        }
    }

    fn run_spawn(&mut self, due_ms: u64, events: &mut Vec<GameEvent>) {
        // Gate read at the top of each period; once over, the spawn cadence
        // ends for good (no re-arm).
        if self.session.is_over() {
            return;
        }

        let object = self.spawner.spawn(self.playfield.width, due_ms);
        let poll_task = self
            .queue
            .schedule(due_ms, PRIO_POLL, Task::Poll { object_id: object.id });
        events.push(GameEvent::Spawned {
            id: object.id,
            kind: object.kind,
            x: object.x,
        });
        self.objects.insert(object.id, LiveObject { object, poll_task });

        self.queue
            .schedule(due_ms + SPAWN_PERIOD_MS, PRIO_SPAWN, Task::SpawnTick);
    }

    fn run_poll(&mut self, object_id: u32, due_ms: u64, events: &mut Vec<GameEvent>) {
        let outcome = match self.objects.get(&object_id) {
            Some(live) if live.object.alive => {
                poll(&live.object, &self.basket, &self.playfield, due_ms)
            }
            // Resolved earlier; stale task, drop silently
            _ => return,
        };

        match outcome {
            PollOutcome::Pending => {
                let task = self
                    .queue
                    .schedule(due_ms + POLL_PERIOD_MS, PRIO_POLL, Task::Poll { object_id });
                if let Some(live) = self.objects.get_mut(&object_id) {
                    live.poll_task = task;
                }
            }
            PollOutcome::Hit(kind) => {
                self.remove_object(object_id);
                let score = self.session.apply_catch(kind);
                debug!("object {object_id} caught ({kind:?}), score {score}");
                events.push(GameEvent::Caught {
                    id: object_id,
                    kind,
                    score,
                });
                events.push(GameEvent::RemoveVisual { id: object_id });
            }
            PollOutcome::Missed => {
                self.remove_object(object_id);
                events.push(GameEvent::Missed { id: object_id });
                events.push(GameEvent::RemoveVisual { id: object_id });
            }
        }
    }

    /// Kill an object: clear the alive flag and cancel its scheduled poll in
    /// the same step, then drop it from the live set.
    fn remove_object(&mut self, object_id: u32) {
        if let Some(mut live) = self.objects.remove(&object_id) {
            live.object.alive = false;
            self.queue.cancel(live.poll_task);
        }
    }
}
