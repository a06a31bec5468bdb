//! Side-effect collaborators fired on phase transitions and pause toggles.
//!
//! Both capabilities are injected into the session so the state machine
//! stays testable without audio or a notification daemon. Implementations
//! are fire-and-forget: they must never block or abort a tick, so failures
//! are logged and swallowed.

pub mod notify;
pub mod sound;

pub use notify::DesktopNotifier;
pub use sound::SoundAlerter;

/// Audible alert. Fired only on phase transitions, suppressed when muted.
pub trait Alerter: Send {
    fn alert(&self);
}

/// Desktop notification. Fired on every phase transition and every pause
/// toggle; never suppressed by mute.
pub trait Notifier: Send {
    fn notify(&self, message: &str);
}
