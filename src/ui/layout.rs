use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const INFO_HEIGHT: u16 = 5;
pub const BUTTON_HEIGHT: u16 = 3;
pub const RESULT_CARD_HEIGHT: u16 = 10;
pub const DISCLAIMER_HEIGHT: u16 = 2;
pub const FOOTER_HEIGHT: u16 = 3;

/// Screen regions of the checker page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub info: Rect,
    pub input: Rect,
    pub button: Rect,
    /// Zero-height while there is no result to show.
    pub result: Rect,
    pub disclaimer: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, show_result: bool) -> Regions {
    let result_height = if show_result { RESULT_CARD_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INFO_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(result_height),
            Constraint::Length(DISCLAIMER_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        info: chunks[1],
        input: chunks[2],
        button: chunks[3],
        result: chunks[4],
        disclaimer: chunks[5],
        footer: chunks[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_region_collapses_without_result() {
        let regions = layout_regions(Rect::new(0, 0, 80, 40), false);
        assert_eq!(regions.result.height, 0);
        assert_eq!(regions.header.height, HEADER_HEIGHT);
        assert_eq!(regions.footer.height, FOOTER_HEIGHT);
        assert!(regions.disclaimer.y >= regions.button.y + BUTTON_HEIGHT);
    }

    #[test]
    fn result_region_reserved_with_result() {
        let regions = layout_regions(Rect::new(0, 0, 80, 40), true);
        assert_eq!(regions.result.height, RESULT_CARD_HEIGHT);
        assert!(regions.input.height >= 5);
    }
}
