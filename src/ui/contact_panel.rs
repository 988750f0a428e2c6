use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct ContactPanel<'a> {
    pub account: &'a str,
    pub profile_url: &'a str,
}

impl<'a> Widget for ContactPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(50, 30, area);
        if popup.height < 3 {
            return;
        }
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Contact ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BRAND_GREEN))
            .style(Style::default().bg(theme::BRAND_DARK));

        let lines = vec![
            Line::from(Span::styled(
                self.account.to_string(),
                Style::default()
                    .fg(theme::BRAND_BLUE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile_url.to_string(),
                Style::default()
                    .fg(theme::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
            Line::from(Span::styled("esc to close", Style::default().fg(theme::DIM_TEXT))),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(popup, buf);
    }
}
