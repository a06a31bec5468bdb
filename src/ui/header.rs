use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, WORK_ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, work_minutes: u32, rest_minutes: u32) -> Paragraph<'static> {
        let title_style = Style::default().fg(WORK_ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  Pomodoro CLI", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("work {} min", work_minutes), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("rest {} min", rest_minutes), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
