use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use crate::alert::Alerter;

/// Candidate players and sound files, tried in order.
const SOUND_COMMANDS: &[(&str, &str)] = &[
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("aplay", "/usr/share/sounds/sound-icons/prompt.wav"),
];

/// Plays the transition chime by spawning a system audio player.
///
/// The spawn happens on a detached thread and the child is not awaited:
/// a missing sound device delays nothing and fails nothing.
pub struct SoundAlerter;

impl Alerter for SoundAlerter {
    fn alert(&self) {
        thread::spawn(|| {
            for &(player, sound) in SOUND_COMMANDS {
                if !Path::new(sound).exists() {
                    continue;
                }
                match Command::new(player)
                    .arg(sound)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                {
                    Ok(_) => return,
                    Err(err) => {
                        tracing::warn!(player, error = %err, "failed to spawn audio player");
                    }
                }
            }
            tracing::warn!("no usable audio player found, skipping chime");
        });
    }
}
