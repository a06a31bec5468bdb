use crate::alert::{Alerter, Notifier};
use crate::timer::{Phase, Snapshot, TimerState};

/// Status line shown while the work interval runs, and the body of the
/// notification announcing it.
pub const MSG_WORK: &str = "Back to work now!";
/// Status line shown while the rest interval runs, and the body of the
/// notification announcing it.
pub const MSG_REST: &str = "Do a pause now!";
/// Status line shown while paused.
pub const MSG_PAUSED: &str = "PAUSED!";
pub const MSG_NOTIFY_PAUSE: &str = "⏰ Your pomodoro is paused!";
pub const MSG_NOTIFY_READY: &str = "✨ Your pomodoro is ready!";

/// Interactive session state: the timer plus the injected side-effect
/// collaborators and the quit flag the loop polls.
pub struct App {
    timer: TimerState,
    muted: bool,
    should_quit: bool,
    alerter: Box<dyn Alerter>,
    notifier: Box<dyn Notifier>,
}

impl App {
    pub fn new(
        timer: TimerState,
        muted: bool,
        alerter: Box<dyn Alerter>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            timer,
            muted,
            should_quit: false,
            alerter,
            notifier,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the timer by one second and fire transition side effects.
    ///
    /// A transition notifies with the entered phase's message and, unless
    /// muted, triggers the audible alert. Each transition alerts exactly
    /// once because `advance()` reports at most one per call.
    pub fn on_tick(&mut self) {
        let Some(phase) = self.timer.advance() else {
            return;
        };

        let message = match phase {
            Phase::Work => MSG_WORK,
            Phase::Rest => MSG_REST,
        };
        self.notifier.notify(message);
        if !self.muted {
            self.alerter.alert();
        }
    }

    /// Toggle pause and announce the new state. The notification is sent
    /// even when muted: mute only covers the audible alert.
    pub fn toggle_pause(&mut self) {
        let paused = self.timer.toggle_pause();
        let message = if paused {
            MSG_NOTIFY_PAUSE
        } else {
            MSG_NOTIFY_READY
        };
        self.notifier.notify(message);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.timer.snapshot()
    }

    /// Message under the clock. Pause wins over the active phase.
    pub fn status_line(&self) -> &'static str {
        let snapshot = self.timer.snapshot();
        if snapshot.paused {
            MSG_PAUSED
        } else if snapshot.phase == Phase::Rest {
            MSG_REST
        } else {
            MSG_WORK
        }
    }

    pub fn work_minutes(&self) -> u32 {
        self.timer.work_minutes()
    }

    pub fn rest_minutes(&self) -> u32 {
        self.timer.rest_minutes()
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingAlerter(Arc<AtomicUsize>);

    impl Alerter for CountingAlerter {
        fn alert(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn make_app(timer: TimerState, muted: bool) -> (App, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
        let alerts = Arc::new(AtomicUsize::new(0));
        let messages = Arc::new(Mutex::new(Vec::new()));
        let app = App::new(
            timer,
            muted,
            Box::new(CountingAlerter(Arc::clone(&alerts))),
            Box::new(RecordingNotifier(Arc::clone(&messages))),
        );
        (app, alerts, messages)
    }

    #[test]
    fn tick_without_transition_fires_nothing() {
        let (mut app, alerts, messages) = make_app(TimerState::new(25, 5), false);
        app.on_tick();
        assert_eq!(alerts.load(Ordering::SeqCst), 0);
        assert!(messages.lock().unwrap().is_empty());
    }

    #[test]
    fn transition_notifies_and_alerts_once() {
        let (mut app, alerts, messages) = make_app(TimerState::new(1, 1), false);
        for _ in 0..60 {
            app.on_tick();
        }
        assert_eq!(alerts.load(Ordering::SeqCst), 1);
        assert_eq!(messages.lock().unwrap().as_slice(), [MSG_REST]);
    }

    #[test]
    fn mute_suppresses_alert_but_not_notification() {
        let (mut app, alerts, messages) = make_app(TimerState::new(1, 1), true);
        for _ in 0..60 {
            app.on_tick();
        }
        assert_eq!(alerts.load(Ordering::SeqCst), 0);
        assert_eq!(messages.lock().unwrap().as_slice(), [MSG_REST]);
    }

    #[test]
    fn pause_toggle_notifies_either_way() {
        let (mut app, alerts, messages) = make_app(TimerState::new(25, 5), true);
        app.toggle_pause();
        app.toggle_pause();
        assert_eq!(alerts.load(Ordering::SeqCst), 0);
        assert_eq!(
            messages.lock().unwrap().as_slice(),
            [MSG_NOTIFY_PAUSE, MSG_NOTIFY_READY]
        );
    }

    #[test]
    fn status_line_prefers_pause_over_phase() {
        let (mut app, _, _) = make_app(TimerState::new(25, 5), false);
        assert_eq!(app.status_line(), MSG_WORK);
        app.toggle_pause();
        assert_eq!(app.status_line(), MSG_PAUSED);
    }
}
