use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::board::{Board, Tile};
use crate::config::Settings;
use crate::game::GameState;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_setup_menu, render_terminal_message};

/// Terminal columns per board tile, so tiles look roughly square.
const TILE_WIDTH: u16 = 2;
const TILE_GLYPH: &str = "  ";

const BACKGROUND: Color = Color::Black;
const SNAKE: Color = Color::White;
const FOOD: Color = Color::Red;
const BORDER: Color = Color::DarkGray;

/// What is drawn on top of the board.
#[derive(Debug, Clone, Copy)]
pub enum Overlay<'a> {
    /// Plain play frame.
    None,
    /// Setup screen with the settings that the next session will use.
    Setup(&'a Settings),
    /// End-of-session message over an emptied board.
    Terminal(&'a str),
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, overlay: Overlay<'_>) {
    let board = state.board();
    let area = frame.area();
    let play_area = render_hud(
        frame,
        area,
        HudInfo {
            score: state.score,
            length: state.snake.len(),
            board_side: board.side(),
            border_mode: state.config().border_mode,
        },
    );

    let field = board_area(play_area, board.side());
    let block = Block::bordered().border_style(Style::new().fg(BORDER).bg(BACKGROUND));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let buffer = frame.buffer_mut();
    fill_background(buffer, inner);

    match overlay {
        Overlay::None => {
            draw_play_field(buffer, inner, state);
        }
        Overlay::Setup(settings) => {
            draw_play_field(buffer, inner, state);
            render_setup_menu(frame, play_area, settings);
        }
        Overlay::Terminal(message) => {
            render_terminal_message(frame, play_area, message, state.score);
        }
    }
}

fn draw_play_field(buffer: &mut Buffer, inner: Rect, state: &GameState) {
    let board = state.board();

    if let Some(food) = state.food {
        draw_tile(buffer, inner, board, food, FOOD);
    }

    for segment in state.snake.segments() {
        draw_tile(buffer, inner, board, *segment, SNAKE);
    }
}

fn fill_background(buffer: &mut Buffer, inner: Rect) {
    let style = Style::new().bg(BACKGROUND);
    for y in inner.top()..inner.bottom() {
        for x in inner.left()..inner.right() {
            buffer.set_string(x, y, " ", style);
        }
    }
}

fn draw_tile(buffer: &mut Buffer, inner: Rect, board: Board, tile: Tile, color: Color) {
    let Some((x, y)) = tile_to_terminal(inner, board, tile) else {
        return;
    };

    buffer.set_string(x, y, TILE_GLYPH, Style::new().bg(color));
}

/// Centers the bordered board inside `area`, shrinking it when space is short.
fn board_area(area: Rect, side: u16) -> Rect {
    let width = side.saturating_mul(TILE_WIDTH).saturating_add(2);
    let height = side.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    cell
}

fn tile_to_terminal(inner: Rect, board: Board, tile: Tile) -> Option<(u16, u16)> {
    if !board.is_inside(tile) {
        return None;
    }

    let x_offset = u16::try_from(tile.x).ok()?.checked_mul(TILE_WIDTH)?;
    let y_offset = u16::try_from(tile.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(TILE_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
