use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    /// One second of wall-clock time has elapsed.
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT); treated like the quit key.
    Shutdown,
}

/// Background reader that turns terminal input, signals, and the tick
/// cadence into a single event stream.
///
/// The session loop must never block on the keyboard, so polling happens
/// on this thread with a short timeout; a missing key press costs nothing.
/// The tick interval is measured independently each iteration; drift
/// across many ticks is acceptable and not corrected.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (event_tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let signal_flag = Arc::new(AtomicBool::new(false));
            let _ = signal_hook::flag::register(
                signal_hook::consts::SIGTERM,
                Arc::clone(&signal_flag),
            );
            let _ = signal_hook::flag::register(
                signal_hook::consts::SIGINT,
                Arc::clone(&signal_flag),
            );

            let mut last_tick = Instant::now();
            loop {
                if signal_flag.swap(false, Ordering::Relaxed)
                    && event_tx.send(AppEvent::Shutdown).is_err()
                {
                    break;
                }

                // Short poll timeout so signals and the tick boundary are
                // noticed promptly even while the keyboard is idle.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::warn!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout — no event.
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
