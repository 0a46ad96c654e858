use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies one scheduled timer. Handles are never reused by a scheduler.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// A timer that fell due during [`Scheduler::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub handle: TimerHandle,
    pub event: E,
    /// Virtual time at which the timer was due.
    pub at: Duration,
}

#[derive(Debug)]
struct Entry<E> {
    due: Duration,
    /// Scheduling order; breaks ties between timers due at the same instant.
    seq: u64,
    period: Option<Duration>,
    event: E,
}

/// Single-threaded virtual-time timer queue.
///
/// Time only moves inside [`advance`](Self::advance). Timers fire in due-time
/// order (ties in scheduling order), and the fire callback receives the
/// scheduler back so it can schedule or cancel timers re-entrantly. A timer
/// cancelled before its due time never fires.
///
/// ```
/// use std::time::Duration;
/// use gameclock_engine::time::Scheduler;
///
/// let mut sched = Scheduler::new();
/// sched.set_interval(Duration::from_secs(1), "tick");
///
/// let mut fired = Vec::new();
/// sched.advance(Duration::from_millis(2500), |_, f| fired.push(f.event));
/// assert_eq!(fired, ["tick", "tick"]);
/// ```
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: BTreeMap<TimerHandle, Entry<E>>,
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            timers: BTreeMap::new(),
        }
    }

    /// Virtual time elapsed since the scheduler was created.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers.
    #[inline]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Fires `event` every `period`, first at `now + period`.
    ///
    /// A zero period is raised to one millisecond.
    pub fn set_interval(&mut self, period: Duration, event: E) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), event)
    }

    /// Fires `event` once at `now + delay`.
    pub fn set_timeout(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.insert(delay, None, event)
    }

    /// Cancels a timer. Returns `false` if it already fired (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    /// `true` while the timer can still fire.
    #[inline]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Virtual time of the next due timer, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.values().map(|e| e.due).min()
    }

    /// Moves virtual time forward by `dt`, firing every timer that falls due.
    ///
    /// Timers scheduled from inside `on_fire` fire in this same call when
    /// their due time is within the window. Returns the number of fires.
    pub fn advance<F>(&mut self, dt: Duration, mut on_fire: F) -> usize
    where
        F: FnMut(&mut Self, Fired<E>),
    {
        let target = self.now.saturating_add(dt);
        let mut count = 0;
        while let Some(fired) = self.pop_due(target) {
            on_fire(self, fired);
            count += 1;
        }
        self.now = target;
        count
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.insert(
            handle,
            Entry { due: self.now.saturating_add(delay), seq, period, event },
        );
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Removes (one-shot) or re-arms (interval) the earliest timer due at or
    /// before `until`, and moves `now` to its due time.
    fn pop_due(&mut self, until: Duration) -> Option<Fired<E>> {
        let handle = self
            .timers
            .iter()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(h, _)| *h)?;

        let seq = self.bump_seq();
        let entry = self.timers.get_mut(&handle)?;
        let at = entry.due;
        self.now = at;

        let period = entry.period;
        let event = match period {
            Some(period) => {
                entry.due = at.saturating_add(period);
                entry.seq = seq;
                entry.event.clone()
            }
            None => self.timers.remove(&handle)?.event,
        };

        Some(Fired { handle, event, at })
    }
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
