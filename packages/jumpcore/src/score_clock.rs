use crate::{
    config::SCORE_STEP,
    platform::{DisplayOps, TimerAck},
    session::SessionCell,
};

/// Body of the periodic score interrupt.
pub struct ScoreClock<'a> {
    session: &'a SessionCell,
    step: u32,
}

impl<'a> ScoreClock<'a> {
    pub const fn new(session: &'a SessionCell) -> Self {
        Self {
            session,
            step: SCORE_STEP,
        }
    }

    /// Advances the score when a session is running and refreshes the
    /// display with it. The timer is acknowledged on every call; a missed
    /// acknowledgement stops the timer from firing again.
    pub fn on_tick<A, D>(&self, timer: &mut A, display: &mut D) -> Option<u32>
    where
        A: TimerAck,
        D: DisplayOps,
    {
        let advanced = self.session.tick(self.step);
        if let Some(score) = advanced {
            display.show_score(score);
        }
        timer.acknowledge();
        advanced
    }
}
