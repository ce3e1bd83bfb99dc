//! `Scheduler` — sparse per-tick job queue.
//!
//! Most ticks have nothing due: carriages are travelling and production
//! lines fire every few seconds.  Jobs are bucketed by due tick in a
//! `BTreeMap` so each tick drains only what is due, in insertion order.

use std::collections::BTreeMap;

use sl_core::Tick;

use crate::Job;

#[derive(Default)]
pub struct Scheduler {
    inner: BTreeMap<Tick, Vec<Job>>,
    /// Cached total job count for O(1) `len()`.
    total: usize,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `job` once, `delay` ticks after `now`.
    ///
    /// A delay of 0 is bumped to 1 so a job scheduled while tick `now` is
    /// being drained never lands in the bucket already removed.  Returns the
    /// due tick.
    pub fn schedule_once(&mut self, job: Job, now: Tick, delay: u64) -> Tick {
        let due = now + delay.max(1);
        self.inner.entry(due).or_default().push(job);
        self.total += 1;
        due
    }

    /// Remove and return all jobs due at exactly `tick`, in insertion order.
    ///
    /// Returns `None` when nothing is due (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Job>> {
        let jobs = self.inner.remove(&tick)?;
        self.total -= jobs.len();
        Some(jobs)
    }

    /// The earliest tick with at least one job, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Jobs due at `tick`, without removing them.
    pub fn pending_at(&self, tick: Tick) -> &[Job] {
        self.inner.get(&tick).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of queued jobs across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
