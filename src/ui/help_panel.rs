use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("j/k  \u{2191}/\u{2193}", "Select repository"),
    ("Tab", "Switch hero button"),
    ("Enter", "Open button / repository"),
    ("r", "Reload feed"),
    ("s", "Toggle system core"),
    ("?", "This help"),
    ("Esc", "Close popup"),
    ("q / C-c", "Quit"),
];

pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(50, 60, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keybindings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BRAND_BLUE))
            .style(Style::default().bg(theme::BRAND_DARK));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, (key, desc)) in BINDINGS.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let y = inner.y + i as u16;
            let key_style = Style::default()
                .fg(theme::PROMPT)
                .add_modifier(Modifier::BOLD);

            let key_col_w = 14;
            let line = Line::from(vec![
                Span::styled(format!(" {:<width$}", key, width = key_col_w), key_style),
                Span::styled(desc.to_string(), Style::default().fg(theme::TEXT)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
