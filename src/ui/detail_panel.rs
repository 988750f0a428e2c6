use crate::feed::types::RepositoryListing;
use crate::ui::repo_list::NO_DESCRIPTION;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailPanel<'a> {
    pub listing: &'a RepositoryListing,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(70, 60, area);
        if popup.height < 3 || popup.width < 10 {
            return;
        }
        Clear.render(popup, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.listing.name),
                Style::default()
                    .fg(theme::BRAND_BLUE)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BRAND_BLUE))
            .style(Style::default().bg(theme::BRAND_DARK));

        let label = Style::default().fg(theme::PROMPT);
        let l = self.listing;

        let mut lines = vec![
            Line::from(vec![Span::styled("id        ", label), Span::raw(l.identifier.to_string())]),
            Line::from(vec![
                Span::styled("language  ", label),
                Span::raw(l.primary_language.as_deref().unwrap_or("\u{2014}").to_string()),
            ]),
            Line::from(vec![
                Span::styled("updated   ", label),
                Span::raw(l.last_updated.format("%Y-%m-%d %H:%M UTC").to_string()),
            ]),
            Line::from(vec![
                Span::styled("repo      ", label),
                Span::styled(l.canonical_url.clone(), Style::default().fg(theme::LINK)),
            ]),
        ];
        if let Some(home) = &l.homepage_url {
            lines.push(Line::from(vec![
                Span::styled("homepage  ", label),
                Span::styled(home.clone(), Style::default().fg(theme::LINK)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            l.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            Style::default().fg(theme::TEXT),
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
