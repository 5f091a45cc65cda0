//! Toast overlay: non-blocking notifications stacked in the bottom-right
//! corner on top of all other content.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::notify::{Toast, ToastKind};
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const TOAST_HEIGHT: u16 = 3;
const EDGE_OFFSET: u16 = 2;

/// Render toasts newest at the bottom, older ones stacked above.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let mut bottom = area.bottom().saturating_sub(EDGE_OFFSET);
    for toast in toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let toast_area = toast_rect(area, bottom, &toast.message);
        render_toast(frame, toast_area, toast);
        bottom = bottom.saturating_sub(TOAST_HEIGHT);
    }
}

fn toast_rect(area: Rect, bottom: u16, message: &str) -> Rect {
    // 2 chars padding each side plus borders
    let width = (message.chars().count() as u16 + 6).min(area.width.saturating_sub(EDGE_OFFSET * 2));
    let x = area.right().saturating_sub(width + EDGE_OFFSET);
    let y = bottom.saturating_sub(TOAST_HEIGHT);
    Rect::new(x, y, width, TOAST_HEIGHT)
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let (accent, glyph) = match toast.kind {
        ToastKind::Error => (STATUS_ERROR, "✖"),
        ToastKind::Success => (STATUS_OK, "✔"),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let text = Paragraph::new(format!("{glyph} {}", toast.message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(HEADER_TEXT))
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}
