use std::io::Stdout;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::alert::{DesktopNotifier, SoundAlerter};
use crate::config::Settings;
use crate::timer::TimerState;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::{self, draw};
use crate::ui::terminal_guard::setup_terminal;

/// Wall-clock period of one timer tick.
const TICK_RATE: Duration = Duration::from_secs(1);

/// Run the interactive session until quit, signal, or a fatal render error.
///
/// The session is persisted on every exit path before the guard hands the
/// screen back, so an interrupted run can be resumed with `--restore`.
pub fn run(mut settings: Settings, restore: bool, muted: bool) -> anyhow::Result<()> {
    let timer = if restore {
        TimerState::restore(
            &settings.session,
            settings.durations.work_minutes,
            settings.durations.rest_minutes,
        )
    } else {
        TimerState::new(
            settings.durations.work_minutes,
            settings.durations.rest_minutes,
        )
    };
    let mut app = App::new(
        timer,
        muted,
        Box::new(SoundAlerter),
        Box::new(DesktopNotifier),
    );

    let (mut terminal, guard) = setup_terminal().context("failed to prepare the terminal")?;
    let events = EventHandler::new(TICK_RATE);
    let result = event_loop(&mut terminal, &events, &mut app);

    settings.session = app.timer().to_session();
    if let Err(err) = settings.save() {
        tracing::warn!(error = %err, "failed to persist session state");
    }

    drop(guard);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    events: &EventHandler,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        let (cols, rows) =
            crossterm::terminal::size().context("failed to query the terminal size")?;
        render::ensure_fits(cols, rows)?;
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
