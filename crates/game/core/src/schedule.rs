//! Timed continuations on the game clock.
//!
//! Pacing delays (enemy action, turn end, timeline switch, death fades) are
//! queued here instead of blocking. Entries fire in `(due_at, sequence)`
//! order, so two continuations due at the same instant run in the order they
//! were scheduled.

use crate::encounter::Timeline;

/// Game clock in milliseconds since the session started.
pub type Millis = u64;

/// Work deferred until its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Continuation {
    /// The enemy of the given timeline performs its queued action. Dropped
    /// unless that enemy's turn is still running.
    EnemyAct(Timeline),
    /// The active enemy's turn ends; the countdown ticks.
    EnemyFinish,
    /// The pending timeline switch completes.
    ApplySwitch,
    /// A defeated enemy's fade-out has finished.
    EnemyDeathResolved(Timeline),
    /// The player's fade-out has finished; the run is lost.
    PlayerDeathResolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub due_at: Millis,
    pub sequence: u64,
    /// Encounter the continuation belongs to; stale entries are dropped.
    pub encounter: u32,
    pub continuation: Continuation,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Millis,
    next_sequence: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn schedule(&mut self, delay: Millis, encounter: u32, continuation: Continuation) {
        let entry = Scheduled {
            due_at: self.now.saturating_add(delay),
            sequence: self.next_sequence,
            encounter,
            continuation,
        };
        self.next_sequence += 1;
        self.pending.push(entry);
    }

    /// Removes and returns the earliest entry due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Millis) -> Option<Scheduled> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_at <= until)
            .min_by_key(|(_, s)| (s.due_at, s.sequence))
            .map(|(i, _)| i)?;

        let entry = self.pending.remove(index);
        self.now = self.now.max(entry.due_at);
        Some(entry)
    }

    /// Moves the clock forward to `to`. The clock never runs backwards.
    pub fn advance_clock(&mut self, to: Millis) {
        self.now = self.now.max(to);
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|s| s.due_at).min()
    }

    /// Drops every entry belonging to `encounter`.
    pub fn cancel_encounter(&mut self, encounter: u32) {
        self.pending.retain(|s| s.encounter != encounter);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[Scheduled] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order_then_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(200, 1, Continuation::EnemyFinish);
        scheduler.schedule(100, 1, Continuation::EnemyAct(Timeline::Past));
        scheduler.schedule(100, 1, Continuation::ApplySwitch);

        let order: Vec<_> = core::iter::from_fn(|| scheduler.pop_due(1_000))
            .map(|s| s.continuation)
            .collect();
        assert_eq!(
            order,
            vec![
                Continuation::EnemyAct(Timeline::Past),
                Continuation::ApplySwitch,
                Continuation::EnemyFinish
            ]
        );
        assert_eq!(scheduler.now(), 200);
    }

    #[test]
    fn entries_wait_for_their_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(100, 1, Continuation::EnemyAct(Timeline::Past));
        assert!(scheduler.pop_due(99).is_none());
        assert!(scheduler.pop_due(100).is_some());
    }

    #[test]
    fn cancelling_an_encounter_drops_only_its_entries() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(10, 1, Continuation::EnemyAct(Timeline::Past));
        scheduler.schedule(10, 2, Continuation::EnemyAct(Timeline::Past));
        scheduler.cancel_encounter(1);
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(scheduler.pending()[0].encounter, 2);
    }

    #[test]
    fn delays_are_relative_to_the_current_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_clock(500);
        scheduler.schedule(100, 1, Continuation::EnemyAct(Timeline::Past));
        assert_eq!(scheduler.next_due(), Some(600));
    }
}
