use clap::{Parser, Subcommand};

use pomodo::config::Settings;
use pomodo::logging;
use pomodo::ui;

#[derive(Parser)]
#[command(name = "pomodo", version, about = "Pomodoro timer for the terminal")]
struct Cli {
    /// Restore the session persisted by the previous run.
    #[arg(long)]
    restore: bool,

    /// Suppress the audible alert on phase transitions.
    #[arg(long)]
    mute: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Persist custom work/rest durations.
    Config {
        /// Minutes of work per cycle.
        #[arg(long, value_parser = clap::value_parser!(u32).range(25..=35))]
        work: Option<u32>,

        /// Minutes of rest per cycle.
        #[arg(long, value_parser = clap::value_parser!(u32).range(5..=15))]
        rest: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    let result = match cli.command {
        Some(Command::Config { work, rest }) => configure(work, rest),
        None => run_session(cli.restore, cli.mute),
    };

    if let Err(err) = result {
        eprintln!("pomodo: {err}");
        std::process::exit(1);
    }
}

fn run_session(restore: bool, mute: bool) -> anyhow::Result<()> {
    // Unreadable or invalid settings are never fatal: fall back to a
    // fresh default session.
    let settings = Settings::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "settings unreadable, starting from defaults");
        Settings::default()
    });
    ui::runtime::run(settings, restore, mute)
}

fn configure(work: Option<u32>, rest: Option<u32>) -> anyhow::Result<()> {
    let mut settings = Settings::load().unwrap_or_default();
    if let Some(work) = work {
        settings.durations.work_minutes = work;
    }
    if let Some(rest) = rest {
        settings.durations.rest_minutes = rest;
    }
    settings.save()?;
    println!(
        "Saved: work {} min, rest {} min ({})",
        settings.durations.work_minutes,
        settings.durations.rest_minutes,
        Settings::settings_path().display()
    );
    Ok(())
}
