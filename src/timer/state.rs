//! The pomodoro state machine.
//!
//! Pure state, no I/O: the session loop calls [`TimerState::advance`] once
//! per elapsed second and reacts to the transition it reports.

use crate::config::SessionState;

/// Minutes of the extended rest taken after a full set of cycles.
pub const LONG_REST_MINUTES: u32 = 15;

/// Completed work/rest round trips before the long rest.
pub const CYCLES_BEFORE_LONG_REST: u8 = 4;

/// Which boundary the session is currently counting toward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Work,
    Rest,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::Rest => "REST",
        }
    }
}

/// Immutable view of the displayable timer fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub minute: u32,
    pub second: u32,
    pub phase: Phase,
    pub paused: bool,
}

/// Elapsed time within the current phase plus the cycle bookkeeping that
/// decides when the long rest is due.
///
/// Pause is a flag layered over the active phase, not a phase of its own:
/// resuming must pick up the same phase it left.
#[derive(Clone, Debug)]
pub struct TimerState {
    phase: Phase,
    paused: bool,
    minute: u32,
    second: u32,
    cycle: u8,
    work_minutes: u32,
    rest_minutes: u32,
}

impl TimerState {
    /// Fresh session: working, unpaused, at 00:00.
    pub fn new(work_minutes: u32, rest_minutes: u32) -> Self {
        Self {
            phase: Phase::Work,
            paused: false,
            minute: 0,
            second: 0,
            cycle: 0,
            work_minutes,
            rest_minutes,
        }
    }

    /// Rebuild the session persisted by a previous run.
    ///
    /// The record is expected to have passed settings validation already.
    pub fn restore(session: &SessionState, work_minutes: u32, rest_minutes: u32) -> Self {
        Self {
            phase: if session.resting { Phase::Rest } else { Phase::Work },
            paused: session.paused,
            minute: session.minute,
            second: session.second,
            cycle: session.cycle,
            work_minutes,
            rest_minutes,
        }
    }

    /// Advance elapsed time by one second and evaluate phase transitions.
    ///
    /// No-op while paused. At most one transition fires per call; the
    /// returned phase is the one just entered and is the sole trigger for
    /// alert side effects.
    pub fn advance(&mut self) -> Option<Phase> {
        if self.paused {
            return None;
        }

        if self.second < 59 {
            self.second += 1;
        } else {
            self.second = 0;
            self.minute += 1;
        }

        match self.phase {
            Phase::Work if self.minute == self.work_minutes => {
                self.enter(Phase::Rest);
                Some(Phase::Rest)
            }
            Phase::Rest
                if self.cycle < CYCLES_BEFORE_LONG_REST && self.minute == self.rest_minutes =>
            {
                self.cycle += 1;
                self.enter(Phase::Work);
                Some(Phase::Work)
            }
            // Only reachable once the short-rest arm no longer applies: at
            // four completed cycles the rest runs to the fixed long-rest
            // boundary, regardless of the configured rest duration.
            Phase::Rest
                if self.cycle == CYCLES_BEFORE_LONG_REST && self.minute == LONG_REST_MINUTES =>
            {
                self.cycle = 0;
                self.enter(Phase::Work);
                Some(Phase::Work)
            }
            _ => None,
        }
    }

    /// Flip the pause flag, leaving elapsed time and phase untouched.
    /// Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            minute: self.minute,
            second: self.second,
            phase: self.phase,
            paused: self.paused,
        }
    }

    /// The minute boundary the current phase runs to.
    pub fn phase_minutes(&self) -> u32 {
        match self.phase {
            Phase::Work => self.work_minutes,
            Phase::Rest if self.cycle == CYCLES_BEFORE_LONG_REST => LONG_REST_MINUTES,
            Phase::Rest => self.rest_minutes,
        }
    }

    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn rest_minutes(&self) -> u32 {
        self.rest_minutes
    }

    /// The record persisted at session end.
    pub fn to_session(&self) -> SessionState {
        SessionState {
            paused: self.paused,
            resting: self.phase == Phase::Rest,
            minute: self.minute,
            second: self.second,
            cycle: self.cycle,
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.minute = 0;
        self.second = 0;
    }
}
