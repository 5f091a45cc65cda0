use crate::ui::app::App;
use crate::ui::checker::CheckerState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::news_input::NewsInput;
use crate::ui::result_card::ResultCard;
use crate::ui::theme::{
    BRAND_BLUE, DISABLED_BG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use crate::ui::toast::render_toasts;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const HOW_IT_WORKS: &str = "This tool uses machine learning to analyze news articles and detect potential misinformation. Paste any news text below and our AI will evaluate its credibility based on linguistic patterns, writing style, and content structure.";

const DISCLAIMER: &str = "This is a demonstration interface. For production use, connect to your trained ML model via API. Always verify news from multiple credible sources.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let checker = app.checker();
    let regions = layout_regions(area, checker.result.is_some());

    frame.render_widget(Header::new().widget(), regions.header);
    frame.render_widget(info_panel(), regions.info);

    NewsInput::new(&checker.text, checker.is_analyzing).render(frame, regions.input);
    frame.render_widget(analyze_button(checker), regions.button);
    ResultCard::new(checker.result.as_ref()).render(frame, regions.result);

    frame.render_widget(disclaimer(), regions.disclaimer);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    render_toasts(frame, body_area(area), &app.toasts().visible());
}

fn info_panel() -> Paragraph<'static> {
    Paragraph::new(HOW_IT_WORKS)
        .style(Style::default().fg(MUTED_TEXT))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " ✨ How it works ",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// Trigger affordance: spinner while analyzing, dimmed when blank.
pub fn analyze_button(checker: &CheckerState) -> Paragraph<'static> {
    let label = if checker.is_analyzing {
        let spinner = SPINNER_FRAMES[(checker.animation_tick as usize) % SPINNER_FRAMES.len()];
        format!("{spinner} Analyzing...")
    } else {
        "🛡 Analyze News".to_string()
    };

    let (text_style, border_style, fill) = if checker.can_analyze() {
        (
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            Style::default().fg(BRAND_BLUE),
            Style::default(),
        )
    } else {
        (
            Style::default().fg(MUTED_TEXT),
            Style::default().fg(GLOBAL_BORDER),
            Style::default().bg(DISABLED_BG),
        )
    };

    Paragraph::new(Line::from(Span::styled(label, text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(fill),
        )
}

fn disclaimer() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("Disclaimer: ", Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD)),
        Span::styled(DISCLAIMER, Style::default().fg(MUTED_TEXT)),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

/// Area toasts may cover: everything above the footer.
fn body_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(crate::ui::layout::FOOTER_HEIGHT),
        ..area
    }
}
