use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::analysis::AnalysisResult;
use crate::ui::theme::{DISABLED_BG, HEADER_TEXT, MUTED_TEXT, STATUS_OK, STATUS_WARNING};

/// Verdict card. Renders nothing until a run has completed.
pub struct ResultCard<'a> {
    result: Option<&'a AnalysisResult>,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: Option<&'a AnalysisResult>) -> Self {
        Self { result }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(result) = self.result else {
            return;
        };
        if area.height == 0 {
            return;
        }

        let (accent, glyph) = if result.is_fake {
            (STATUS_WARNING, "⚠")
        } else {
            (STATUS_OK, "✔")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let accent_bold = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {glyph} "), accent_bold),
                Span::styled(result.headline(), accent_bold),
            ])),
            rows[0],
        );

        let percent = format!("{}% ", result.confidence);
        let label = " ↗ Confidence Score";
        let padding = (rows[1].width as usize)
            .saturating_sub(label.chars().count())
            .saturating_sub(percent.chars().count());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(label, Style::default().fg(HEADER_TEXT)),
                Span::raw(" ".repeat(padding)),
                Span::styled(percent, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
            ])),
            rows[1],
        );

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(accent).bg(DISABLED_BG))
                .percent(u16::from(result.confidence).min(100))
                .label(""),
            rows[2],
        );

        frame.render_widget(
            Paragraph::new(result.analysis.as_str())
                .style(Style::default().fg(MUTED_TEXT))
                .wrap(Wrap { trim: true }),
            rows[4],
        );
    }
}
