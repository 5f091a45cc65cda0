use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bindings handled by `ui::input`, in display order.
pub const KEY_HINTS: [(&str, &str); 4] = [
    ("Ctrl+R", "Analyze"),
    ("Ctrl+E", "Sample"),
    ("Ctrl+L", "Clear"),
    ("Ctrl+Q", "Quit"),
];

const SEPARATOR: &str = " · ";

/// Bottom bar: key hints on the left, version on the right.
#[derive(Debug, Default, Clone, Copy)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, label)) in KEY_HINTS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        }

        let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
        let used: usize = spans.iter().map(|span| span.width()).sum();
        let inner = area.width.saturating_sub(2) as usize;
        let gap = inner.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(version, label_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row(width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                frame.render_widget(Footer::new().widget(area), area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 1)].symbol()).collect()
    }

    #[test]
    fn hints_and_version_fit_wide_terminal() {
        let line = row(90);
        assert!(line.contains("Ctrl+R Analyze · Ctrl+E Sample · Ctrl+L Clear · Ctrl+Q Quit"));
        let version = format!("v{} │", env!("CARGO_PKG_VERSION"));
        assert!(line.ends_with(&version), "version right-aligned: {line:?}");
    }

    #[test]
    fn narrow_terminal_keeps_first_hint() {
        let line = row(30);
        assert!(line.contains("Ctrl+R Analyze"));
    }
}
