//! Controlled article text area.
//!
//! The field holds no text of its own: it renders the owner's value and,
//! for every edit, proposes the complete new value back to the owner.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{DISABLED_BG, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

const LABEL: &str = "Enter News Article";
const PLACEHOLDER: &str = "Paste the news article text here...";
const CURSOR: &str = "▏";

pub struct NewsInput<'a> {
    value: &'a str,
    disabled: bool,
}

impl<'a> NewsInput<'a> {
    pub fn new(value: &'a str, disabled: bool) -> Self {
        Self { value, disabled }
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// New value produced by a key press, or `None` when the key is not an
    /// edit or the field is disabled.
    pub fn on_key(&self, key: KeyEvent) -> Option<String> {
        if self.disabled || key.kind != KeyEventKind::Press {
            return None;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(ch) => Some(format!("{}{}", self.value, ch)),
            KeyCode::Enter => Some(format!("{}\n", self.value)),
            KeyCode::Backspace => {
                let mut chars = self.value.chars();
                chars.next_back()?;
                Some(chars.as_str().to_string())
            }
            _ => None,
        }
    }

    /// New value after a bracketed paste.
    pub fn on_paste(&self, pasted: &str) -> Option<String> {
        if self.disabled || pasted.is_empty() {
            return None;
        }
        let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
        Some(format!("{}{}", self.value, normalized))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [label_area, text_area, count_area] = split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                LABEL,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            label_area,
        );

        let border_color = if self.disabled { GLOBAL_BORDER } else { FOCUS_BORDER };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        if self.disabled {
            block = block.style(Style::default().bg(DISABLED_BG));
        }
        let inner_width = text_area.width.saturating_sub(2);
        let inner_height = text_area.height.saturating_sub(2);

        let body = if self.value.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT)),
            ]))
        } else {
            let mut text = self.value.to_string();
            if !self.disabled {
                text.push_str(CURSOR);
            }
            let overflow = wrapped_line_count(&text, inner_width).saturating_sub(inner_height);
            let style = if self.disabled {
                Style::default().fg(MUTED_TEXT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Paragraph::new(text)
                .style(style)
                .scroll((overflow, 0))
        };
        frame.render_widget(body.wrap(Wrap { trim: false }).block(block), text_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{} characters", self.char_count()),
                Style::default().fg(MUTED_TEXT),
            )),
            count_area,
        );
    }
}

fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Rough number of rows `text` needs when wrapped at `width` columns.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}
