use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::SCORE_INITIAL;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SessionSnapshot {
    pub running: bool,
    pub score: u32,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl SessionSnapshot {
    pub const INITIAL: Self = Self {
        running: false,
        score: SCORE_INITIAL,
    };

    const RUNNING_BIT: u32 = 1 << 31;
    pub const SCORE_MAX: u32 = Self::RUNNING_BIT - 1;

    pub const fn packed(self) -> u32 {
        let running = if self.running { Self::RUNNING_BIT } else { 0 };
        running | (self.score & Self::SCORE_MAX)
    }

    pub const fn from_packed(raw: u32) -> Self {
        Self {
            running: raw & Self::RUNNING_BIT != 0,
            score: raw & Self::SCORE_MAX,
        }
    }
}

/// Session state shared between the foreground and the score interrupt.
///
/// Both fields live in one word so every transition is a single atomic
/// operation and neither side can observe a half-applied update.
pub struct SessionCell {
    packed: AtomicU32,
}

impl Default for SessionCell {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell {
    pub const fn new() -> Self {
        Self {
            packed: AtomicU32::new(SessionSnapshot::INITIAL.packed()),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_packed(self.packed.load(Ordering::Acquire))
    }

    /// Marks the session running, keeping the current score.
    pub fn start(&self) -> SessionSnapshot {
        let before = self.packed.fetch_or(SessionSnapshot::RUNNING_BIT, Ordering::AcqRel);
        SessionSnapshot::from_packed(before | SessionSnapshot::RUNNING_BIT)
    }

    pub fn reset(&self) {
        self.packed
            .store(SessionSnapshot::INITIAL.packed(), Ordering::Release);
    }

    /// Adds `step` to the score if the session is running. Returns the new
    /// score, or `None` when the session is idle and nothing changed.
    pub fn tick(&self, step: u32) -> Option<u32> {
        let advance = |snapshot: SessionSnapshot| SessionSnapshot {
            running: true,
            score: snapshot
                .score
                .saturating_add(step)
                .min(SessionSnapshot::SCORE_MAX),
        };
        self.packed
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                let snapshot = SessionSnapshot::from_packed(raw);
                snapshot.running.then(|| advance(snapshot).packed())
            })
            .ok()
            .map(|before| advance(SessionSnapshot::from_packed(before)).score)
    }
}
