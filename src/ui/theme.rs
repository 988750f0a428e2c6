use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x58, 0xa6, 0xff);
pub const BRAND_GREEN: Color = Color::Rgb(0x23, 0x86, 0x36);
pub const BRAND_DARK: Color = Color::Rgb(0x0d, 0x11, 0x17);

pub const PANEL_BG: Color = Color::Rgb(0x16, 0x1b, 0x22);
pub const STATUS_BG: Color = Color::Rgb(0x11, 0x16, 0x1d);
pub const SELECTED_BG: Color = Color::Rgb(0x1f, 0x2a, 0x3a);
pub const BORDER_COLOR: Color = Color::Rgb(0x30, 0x36, 0x3d);
pub const PROMPT: Color = Color::Rgb(0x3f, 0xb9, 0x50);
pub const TEXT: Color = Color::Rgb(0xc9, 0xd1, 0xd9);
pub const DIM_TEXT: Color = Color::Rgb(0x8b, 0x94, 0x9e);
pub const LANG_TAG: Color = Color::Rgb(0xd2, 0xa8, 0xff);
pub const LINK: Color = BRAND_BLUE;
pub const ERROR_FG: Color = Color::Rgb(0xf8, 0x51, 0x49);

pub const CORE_WIRE: Color = BRAND_BLUE;
pub const STAR_LIT: Color = Color::Rgb(0xe6, 0xed, 0xf3);
pub const STAR_DIM: Color = Color::Rgb(0x48, 0x4f, 0x58);

pub const SPINNER: &[&str] = &[
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280f}",
];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Stable color per language so the same tag always reads the same.
pub fn language_color(language: &str) -> Color {
    match language {
        "Rust" => Color::Rgb(0xde, 0xa5, 0x84),
        "TypeScript" => Color::Rgb(0x31, 0x78, 0xc6),
        "JavaScript" => Color::Rgb(0xf1, 0xe0, 0x5a),
        "Python" => Color::Rgb(0x35, 0x72, 0xa5),
        "Go" => Color::Rgb(0x00, 0xad, 0xd8),
        "Shell" => Color::Rgb(0x89, 0xe0, 0x51),
        _ => LANG_TAG,
    }
}
