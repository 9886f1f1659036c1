use crate::components::banner_frames::{
    ART_ROWS, BannerColor, ball_row, basketball_frame, resolve, title_rows,
};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Widget};

pub use crate::components::banner_frames::FRAME_COUNT;

const TAGLINE: &str = "AFRICAN ELITE BASKETBALL LEAGUE";

/// Intro splash: the league wordmark flanked by spinning basketballs.
#[derive(Debug, Default)]
pub struct AnimatedBanner {
    pub frame: usize,
    pub tick: u64,
    /// Shown under the wordmark, e.g. the season or a live score.
    pub subtitle: String,
}

impl Widget for AnimatedBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 3 {
            render_line(Line::from(" AEBL "), area.x, area.y, area.width, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(resolve(BannerColor::Primary));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if inner.width < 50 || inner.height < ART_ROWS as u16 {
            render_compact(&self, inner, buf);
        } else {
            render_full(&self, inner, buf);
        }
    }
}

fn render_compact(banner: &AnimatedBanner, inner: Rect, buf: &mut Buffer) {
    render_centered(
        Line::from(Span::styled(TAGLINE, resolve(BannerColor::Primary))),
        inner,
        inner.y,
        buf,
    );
    if inner.height > 1 {
        render_centered(
            Line::from(Span::styled(
                banner.subtitle.as_str(),
                resolve(BannerColor::Secondary),
            )),
            inner,
            inner.y + 1,
            buf,
        );
    }
}

fn render_full(banner: &AnimatedBanner, inner: Rect, buf: &mut Buffer) {
    let title = title_rows();
    let left_ball = basketball_frame(banner.frame);
    let right_ball = basketball_frame((banner.frame + 2) % FRAME_COUNT);
    let highlight = ball_row(banner.tick, ART_ROWS as u16);

    for row in 0..ART_ROWS {
        let y = inner.y + row as u16;
        let ball_style = if row as u16 == highlight {
            resolve(BannerColor::Secondary)
        } else {
            resolve(BannerColor::Shadow)
        };
        let spans = vec![
            Span::styled(left_ball[row], ball_style),
            Span::raw("  "),
            Span::styled(title[row], resolve(BannerColor::Primary)),
            Span::raw("  "),
            Span::styled(right_ball[row], ball_style),
        ];
        render_centered(Line::from(spans), inner, y, buf);
    }

    let below = inner.y + ART_ROWS as u16;
    render_centered(
        Line::from(Span::styled(TAGLINE, resolve(BannerColor::Accent))),
        inner,
        below,
        buf,
    );
    render_centered(
        Line::from(Span::styled(
            banner.subtitle.as_str(),
            resolve(BannerColor::Secondary),
        )),
        inner,
        below + 1,
        buf,
    );
}

fn render_centered(line: Line, area: Rect, y: u16, buf: &mut Buffer) {
    if y >= area.y + area.height {
        return;
    }
    let w = line.width() as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    render_line(line, x, y, area.width, buf);
}

fn render_line(line: Line, x: u16, y: u16, max_width: u16, buf: &mut Buffer) {
    let limit = x.saturating_add(max_width);
    let mut cx = x;
    for span in &line.spans {
        if cx >= limit {
            break;
        }
        let run: String = span.content.chars().take((limit - cx) as usize).collect();
        let width = run.chars().count() as u16;
        buf.set_string(cx, y, run, span.style);
        cx += width;
    }
}
