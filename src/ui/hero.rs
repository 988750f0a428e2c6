use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroButton {
    Projects,
    Contact,
}

impl HeroButton {
    pub fn label(&self) -> &'static str {
        match self {
            HeroButton::Projects => "PROJECTS",
            HeroButton::Contact => "CONTACT",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            HeroButton::Projects => HeroButton::Contact,
            HeroButton::Contact => HeroButton::Projects,
        }
    }
}

pub const HERO_HEIGHT: u16 = 8;
const HERO_MAX_WIDTH: u16 = 52;

/// Centered card with the handle, tagline, and the two call-to-action buttons.
pub struct HeroBanner<'a> {
    pub handle: &'a str,
    pub tagline: &'a str,
    pub selected: HeroButton,
    pub focused: bool,
}

impl<'a> HeroBanner<'a> {
    fn button(&self, button: HeroButton) -> Span<'static> {
        let color = match button {
            HeroButton::Projects => theme::BRAND_BLUE,
            HeroButton::Contact => theme::PROMPT,
        };
        let text = format!("[ {} ]", button.label());
        if self.focused && self.selected == button {
            Span::styled(
                text,
                Style::default()
                    .fg(theme::BRAND_DARK)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(color))
        }
    }
}

impl<'a> Widget for HeroBanner<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let width = HERO_MAX_WIDTH.min(area.width);
        let height = HERO_HEIGHT.min(area.height);
        if width < 12 || height < 4 {
            return;
        }
        let card = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        Clear.render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BRAND_GREEN))
            .style(Style::default().bg(theme::BRAND_DARK));
        let inner = block.inner(card);
        block.render(card, buf);

        let inner_w = inner.width as usize;
        let handle = truncate_with_ellipsis(self.handle, inner_w);
        let tagline = truncate_with_ellipsis(self.tagline, inner_w);
        let rule_w = inner_w.saturating_sub(4);

        let lines = vec![
            Line::from(Span::styled(
                handle,
                Style::default()
                    .fg(theme::BRAND_BLUE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("\u{2500}".repeat(rule_w / 3), Style::default().fg(theme::BORDER_COLOR)),
                Span::styled(
                    "\u{2501}".repeat(rule_w - 2 * (rule_w / 3)),
                    Style::default().fg(theme::BRAND_GREEN),
                ),
                Span::styled("\u{2500}".repeat(rule_w / 3), Style::default().fg(theme::BORDER_COLOR)),
            ]),
            Line::from(Span::styled(tagline, Style::default().fg(theme::DIM_TEXT))),
            Line::default(),
            Line::from(vec![
                self.button(HeroButton::Projects),
                Span::raw("  "),
                self.button(HeroButton::Contact),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
