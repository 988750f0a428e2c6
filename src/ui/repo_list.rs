use crate::feed::types::{FeedState, RepositoryListing};
use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const NO_DESCRIPTION: &str = "no description";
pub const EMPTY_MESSAGE: &str = "no public repositories";
pub const FAILED_MESSAGE: &str = "failed to load repositories";

const CARD_HEIGHT: u16 = 4;

pub struct RepoList<'a> {
    pub account: &'a str,
    pub state: &'a FeedState,
    pub selected: usize,
    pub focused: bool,
    pub tick: usize,
}

impl<'a> Widget for RepoList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border = if self.focused {
            theme::BRAND_BLUE
        } else {
            theme::BORDER_COLOR
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" $ ", Style::default().fg(theme::PROMPT)),
                Span::styled(
                    format!("gh repo list {} ", self.account),
                    Style::default().fg(theme::TEXT),
                ),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme::PANEL_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        match self.state {
            FeedState::Loading => {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", theme::spinner_frame(self.tick)),
                        Style::default().fg(theme::BRAND_BLUE),
                    ),
                    Span::styled("fetching repositories\u{2026}", Style::default().fg(theme::DIM_TEXT)),
                ]);
                buf.set_line(inner.x + 1, inner.y, &line, inner.width - 1);
            }
            FeedState::Failed => {
                let line = Line::from(vec![
                    Span::styled("\u{2717} ", Style::default().fg(theme::ERROR_FG)),
                    Span::styled(
                        FAILED_MESSAGE,
                        Style::default()
                            .fg(theme::ERROR_FG)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]);
                buf.set_line(inner.x + 1, inner.y, &line, inner.width - 1);
                if inner.height > 1 {
                    let hint = Line::from(Span::styled(
                        "press r to try again",
                        Style::default().fg(theme::DIM_TEXT),
                    ));
                    buf.set_line(inner.x + 1, inner.y + 1, &hint, inner.width - 1);
                }
            }
            FeedState::Ready(entries) if entries.is_empty() => {
                let line = Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(theme::DIM_TEXT)));
                buf.set_line(inner.x + 1, inner.y, &line, inner.width - 1);
            }
            FeedState::Ready(entries) => {
                let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
                let scroll = self.selected.saturating_sub(visible - 1);
                for (slot, (idx, entry)) in entries
                    .iter()
                    .enumerate()
                    .skip(scroll)
                    .take(visible)
                    .enumerate()
                {
                    let y = inner.y + slot as u16 * CARD_HEIGHT;
                    let card = Rect::new(
                        inner.x,
                        y,
                        inner.width,
                        CARD_HEIGHT.min(inner.bottom().saturating_sub(y)),
                    );
                    render_card(entry, idx == self.selected && self.focused, card, buf);
                }
            }
        }
    }
}

fn render_card(entry: &RepositoryListing, selected: bool, area: Rect, buf: &mut Buf) {
    if selected {
        let bg = Style::default().bg(theme::SELECTED_BG);
        for y in area.y..area.bottom().min(area.y + CARD_HEIGHT - 1) {
            for x in area.x..area.right() {
                buf[(x, y)].set_style(bg);
            }
        }
    }

    let x = area.x + 1;
    let w = area.width.saturating_sub(2);
    let width = w as usize;
    let marker = if selected { "\u{25b8} " } else { "  " };

    // name · language · date
    let date = entry.short_date();
    let mut head = vec![
        Span::styled(marker, Style::default().fg(theme::PROMPT)),
        Span::styled(
            entry.name.clone(),
            Style::default()
                .fg(theme::BRAND_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(lang) = &entry.primary_language {
        head.push(Span::styled(
            format!(" [{lang}]"),
            Style::default().fg(theme::language_color(lang)),
        ));
    }
    let used: usize = head
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum();
    let date_w = UnicodeWidthStr::width(date.as_str());
    if used + date_w + 1 < width {
        head.push(Span::raw(" ".repeat(width - used - date_w)));
        head.push(Span::styled(date, Style::default().fg(theme::DIM_TEXT)));
    }
    buf.set_line(x, area.y, &Line::from(head), w);

    if area.height > 1 {
        let (text, style) = match &entry.description {
            Some(d) if !d.trim().is_empty() => (d.as_str(), Style::default().fg(theme::TEXT)),
            _ => (
                NO_DESCRIPTION,
                Style::default()
                    .fg(theme::DIM_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ),
        };
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate_with_ellipsis(text, width.saturating_sub(2)), style),
        ]);
        buf.set_line(x, area.y + 1, &line, w);
    }

    if area.height > 2 {
        let mut links = vec![
            Span::raw("  "),
            Span::styled(
                entry.canonical_url.clone(),
                Style::default()
                    .fg(theme::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ];
        if let Some(home) = &entry.homepage_url {
            links.push(Span::styled("  \u{2197} ", Style::default().fg(theme::DIM_TEXT)));
            links.push(Span::styled(
                home.clone(),
                Style::default()
                    .fg(theme::PROMPT)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        buf.set_line(x, area.y + 2, &Line::from(links), w);
    }
}
