use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::BorderMode;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Values shown on the HUD row.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HudInfo {
    pub score: u32,
    pub length: usize,
    pub board_side: u16,
    pub border_mode: BorderMode,
}

/// Renders the one-line HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: HudInfo) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);
    let compact = info_width(info, false) > usize::from(hud_area.width);

    let [score_area, details_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(hud_area);

    frame.render_widget(
        Paragraph::new(score_line(info.score, compact)).alignment(Alignment::Left),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(details_line(info, compact))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        details_area,
    );

    play_area
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

fn score_line(score: u32, compact: bool) -> Line<'static> {
    let label = if compact { "S" } else { "Score" };
    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(score.to_string(), Style::default().fg(Color::White)),
    ])
}

fn details_line(info: HudInfo, compact: bool) -> Line<'static> {
    let (length_label, board_label) = if compact {
        ("L", "B")
    } else {
        ("Length", "Board")
    };

    Line::from(vec![
        Span::raw(format!("{length_label}: {}", info.length)),
        Span::raw(SEPARATOR),
        Span::raw(format!(
            "{board_label}: {side}x{side}",
            side = info.board_side
        )),
        Span::raw(SEPARATOR),
        Span::raw(border_label(info.border_mode)),
    ])
}

/// Short label for the active border mode.
#[must_use]
pub fn border_label(border_mode: BorderMode) -> &'static str {
    match border_mode {
        BorderMode::Bounded => "borders on",
        BorderMode::Wrap => "borders off",
    }
}

fn info_width(info: HudInfo, compact: bool) -> usize {
    let score = score_line(info.score, compact).width();
    let details = details_line(info, compact).width();
    score + details + 1
}
