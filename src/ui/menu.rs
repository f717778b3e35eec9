use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Settings;
use crate::game::GamePhase;
use crate::ui::hud::border_label;

/// Message shown once a session has ended.
#[must_use]
pub fn terminal_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Won => Some("You've won!"),
        GamePhase::Lost => Some("Game Over!"),
        GamePhase::Setup | GamePhase::Running => None,
    }
}

/// Draws the setup screen with the editable settings as a centered popup.
pub fn render_setup_menu(frame: &mut Frame<'_>, area: Rect, settings: &Settings) {
    let popup = centered_popup(area, 80, 70);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let side = settings.board_size | 1;
    let body = vec![
        Line::from(format!("Board: {side}x{side}   [-]/[+]")),
        Line::from(format!("Speed: {}   [[]/[]]", settings.speed)),
        Line::from(format!(
            "Mode: {}   [B]",
            border_label(settings.border_mode)
        )),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" setup ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Steer with WASD or the arrow keys"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the end-of-session message as a centered popup.
pub fn render_terminal_message(frame: &mut Frame<'_>, area: Rect, message: &str, score: u32) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(message.to_owned()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
