//! Armed-deadline bookkeeping.
//!
//! The engine runs single-threaded and never blocks; "waiting" for a
//! disambiguating signal is modelled as an armed deadline the host drives
//! through `PointerEngine::tick` / `next_deadline`. At most two deadlines
//! exist at any time, and arming a kind always replaces any deadline of the
//! same kind, so a stale timer can never fire against re-armed state.

/// The two timers the engine schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Double-click decision window; firing finalizes the pending press as a
    /// single interaction.
    Decision,
    /// Click disqualification; firing while the button is still held means
    /// the eventual release is a plain `release`, not a `click`.
    ClickDisqualify,
}

/// Deadlines (absolute host milliseconds) for the engine's timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSet {
    decision: Option<u64>,
    click_disqualify: Option<u64>,
}

impl TimerSet {
    fn slot(&mut self, kind: TimerKind) -> &mut Option<u64> {
        match kind {
            TimerKind::Decision => &mut self.decision,
            TimerKind::ClickDisqualify => &mut self.click_disqualify,
        }
    }

    /// Arm `kind` at `deadline_ms`, replacing any existing deadline of the
    /// same kind.
    pub fn arm(&mut self, kind: TimerKind, deadline_ms: u64) {
        *self.slot(kind) = Some(deadline_ms);
    }

    /// Disarm `kind`, returning its deadline if it was armed.
    pub fn disarm(&mut self, kind: TimerKind) -> Option<u64> {
        self.slot(kind).take()
    }

    /// Disarm everything.
    pub fn clear(&mut self) {
        self.decision = None;
        self.click_disqualify = None;
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Decision => self.decision.is_some(),
            TimerKind::ClickDisqualify => self.click_disqualify.is_some(),
        }
    }

    /// Earliest armed deadline, if any. Hosts call `tick` at (or after) this
    /// time when no raw events arrive.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.decision, self.click_disqualify) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Pop the due timer (deadline <= `now_ms`) with the earliest deadline,
    /// disarming it. Called in a loop so timers fire in deadline order, and
    /// each fires exactly once.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TimerKind> {
        let candidates = [
            (TimerKind::Decision, self.decision),
            (TimerKind::ClickDisqualify, self.click_disqualify),
        ];
        let due = candidates
            .into_iter()
            .filter_map(|(kind, deadline)| deadline.filter(|d| *d <= now_ms).map(|d| (kind, d)))
            .min_by_key(|(_, deadline)| *deadline)
            .map(|(kind, _)| kind)?;
        self.disarm(due);
        Some(due)
    }
}
