use tui::style::{Color, Modifier, Style};

pub const FRAME_COUNT: usize = 4;
/// Rows in both the title art and a ball frame.
pub const ART_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerColor {
    Primary,
    Secondary,
    Accent,
    Shadow,
}

pub fn resolve(color: BannerColor) -> Style {
    match color {
        // League orange and gold.
        BannerColor::Primary => Style::default().fg(Color::Rgb(255, 107, 0)),
        BannerColor::Secondary => Style::default().fg(Color::Rgb(255, 215, 0)),
        BannerColor::Accent => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        BannerColor::Shadow => Style::default().fg(Color::Indexed(240)),
    }
}

/// Row the bouncing ball highlight sits on: a triangle wave over `height` rows.
pub fn ball_row(tick: u64, height: u16) -> u16 {
    let h = u64::from(height.saturating_sub(1));
    if h == 0 {
        return 0;
    }
    let t = tick % (2 * h);
    h.abs_diff(t) as u16
}

pub fn basketball_frame(frame: usize) -> [&'static str; ART_ROWS] {
    const FRAMES: [[&str; ART_ROWS]; FRAME_COUNT] = [
        ["  .---.  ", " /  |  \\ ", "| --+-- |", " \\  |  / ", "  '---'  "],
        ["  .---.  ", " / / \\ \\ ", "| /   \\ |", " \\ \\ / / ", "  '---'  "],
        ["  .---.  ", " /  -  \\ ", "|-- + --|", " \\  -  / ", "  '---'  "],
        ["  .---.  ", " / \\ / \\ ", "| \\   / |", " / / \\ \\ ", "  '---'  "],
    ];
    FRAMES[frame % FRAME_COUNT]
}

pub fn title_rows() -> [&'static str; ART_ROWS] {
    [
        "    _    _____ ____  _     ",
        "   / \\  | ____| __ )| |    ",
        "  / _ \\ |  _| |  _ \\| |    ",
        " / ___ \\| |___| |_) | |___ ",
        "/_/   \\_\\_____|____/|_____|",
    ]
}
