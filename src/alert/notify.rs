use notify_rust::{Notification, Timeout, Urgency};

use crate::alert::Notifier;

const APP_NAME: &str = "pomodo";
const SUMMARY: &str = "Pomodoro";
const TIMEOUT_MS: u32 = 5_000;

/// Sends desktop notifications through the platform notification daemon.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = Notification::new()
            .appname(APP_NAME)
            .summary(SUMMARY)
            .body(message)
            .icon("terminal")
            .urgency(Urgency::Normal)
            .timeout(Timeout::Milliseconds(TIMEOUT_MS))
            .show()
        {
            tracing::warn!(error = %err, "failed to dispatch desktop notification");
        }
    }
}
