use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use thiserror::Error;

use crate::timer::{Phase, Snapshot};
use crate::ui::app::App;
use crate::ui::digits;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{HEADER_TEXT, PAUSE_ACCENT, REST_ACCENT, WORK_ACCENT};

/// Smallest surface the large clock plus header/footer chrome fits on.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 14;

/// Errors raised by the rendering surface. Fatal to the session but not to
/// the process: the loop persists state and exits with a diagnostic.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("very small resolution: {cols}x{rows} is below the required {min_cols}x{min_rows}")]
    SurfaceTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

/// Check that the terminal is large enough to draw on.
pub fn ensure_fits(cols: u16, rows: u16) -> Result<(), RenderError> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(RenderError::SurfaceTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }
    Ok(())
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.work_minutes(), app.rest_minutes()),
        header,
    );

    draw_clock(frame, body, &app.snapshot(), app.status_line());

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_clock(frame: &mut Frame<'_>, body: Rect, snapshot: &Snapshot, status: &'static str) {
    let accent = if snapshot.paused {
        PAUSE_ACCENT
    } else if snapshot.phase == Phase::Rest {
        REST_ACCENT
    } else {
        WORK_ACCENT
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // phase label
            Constraint::Length(1),
            Constraint::Length(digits::CLOCK_ROWS as u16),
            Constraint::Length(1),
            Constraint::Length(1), // status line
            Constraint::Min(1),
        ])
        .split(body);

    let phase_label = Paragraph::new(snapshot.phase.label())
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(phase_label, sections[1]);

    let clock_lines: Vec<Line> = digits::clock_lines(snapshot.minute, snapshot.second)
        .into_iter()
        .map(Line::from)
        .collect();
    let clock = Paragraph::new(clock_lines)
        .style(Style::default().fg(accent))
        .alignment(Alignment::Center);
    frame.render_widget(clock, sections[3]);

    let status_line = Paragraph::new(status)
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, sections[5]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_check_accepts_roomy_terminals() {
        assert!(ensure_fits(80, 24).is_ok());
        assert!(ensure_fits(MIN_COLS, MIN_ROWS).is_ok());
    }

    #[test]
    fn surface_check_rejects_small_terminals() {
        assert!(ensure_fits(MIN_COLS - 1, MIN_ROWS).is_err());
        assert!(ensure_fits(MIN_COLS, MIN_ROWS - 1).is_err());
    }

    #[test]
    fn clock_fits_the_minimum_surface() {
        assert!(digits::clock_width() <= MIN_COLS as usize);
        // 5 clock rows plus label, status, spacing, and chrome.
        assert!(digits::CLOCK_ROWS + 9 <= MIN_ROWS as usize);
    }
}
