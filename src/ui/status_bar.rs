use crate::feed::activation::ActivationId;
use crate::feed::types::FeedState;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct StatusBar<'a> {
    pub account: &'a str,
    pub state: &'a FeedState,
    pub activation: ActivationId,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let state_color = match self.state {
            FeedState::Loading => theme::BRAND_BLUE,
            FeedState::Ready(_) => theme::PROMPT,
            FeedState::Failed => theme::ERROR_FG,
        };

        let sep = Span::styled(
            "\u{2502}",
            Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
        );

        let mut spans = vec![
            Span::styled(
                format!(" {}@portfolio ", self.account),
                Style::default()
                    .fg(theme::PROMPT)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            sep.clone(),
            Span::styled(
                format!(" feed: {} ", self.state.label()),
                Style::default().fg(state_color).bg(theme::STATUS_BG),
            ),
        ];
        if let FeedState::Ready(entries) = self.state {
            spans.push(sep.clone());
            spans.push(Span::styled(
                format!(" {} shown ", entries.len()),
                Style::default().fg(theme::TEXT).bg(theme::STATUS_BG),
            ));
        }
        spans.push(sep);
        spans.push(Span::styled(
            format!(" activation {} ", self.activation),
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let right = "? help  q quit ";
        let right_w = UnicodeWidthStr::width(right);
        let area_w = area.width as usize;
        if area_w > right_w + 40 {
            let right_x = area.x + (area_w - right_w) as u16;
            let span = Span::styled(right, Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG));
            buf.set_line(right_x, area.y, &Line::from(span), right_w as u16);
        }
    }
}
