//! Stateless UI rendering for the game grid.

use crate::view::Screen;
use noughts_rules::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::rc::Rc;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the title, the painted grid with cursor highlight, and the status.
pub fn draw(frame: &mut Frame, screen: &Screen, cursor: Position, status: &str) {
    let chunks = page(frame.area());

    let title = Paragraph::new("noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], screen, cursor);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new("1-9 / arrows+Enter / click: play   r: reset   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Finds the cell under a terminal coordinate, using the same layout as [`draw`].
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_rect(page(area)[1]);
    Position::ALL.into_iter().find(|&pos| {
        let cell = cell_rect(board, pos);
        column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
    })
}

fn page(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area)
}

fn board_rect(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

fn cell_rect(board: Rect, pos: Position) -> Rect {
    Rect {
        x: board.x + pos.col() as u16 * (CELL_WIDTH + 1),
        y: board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    }
    .intersection(board)
}

fn draw_board(frame: &mut Frame, area: Rect, screen: &Screen, cursor: Position) {
    let board = board_rect(area);
    let grid = Style::default().fg(Color::DarkGray);

    for line in 1..3u16 {
        let y = board.y + line * (CELL_HEIGHT + 1) - 1;
        if y < board.bottom() {
            let sep = Rect { y, height: 1, ..board };
            frame.render_widget(Paragraph::new("─".repeat(board.width as usize)).style(grid), sep);
        }
        let x = board.x + line * (CELL_WIDTH + 1) - 1;
        if x < board.right() {
            for pos_row in 0..3u16 {
                let y = board.y + pos_row * (CELL_HEIGHT + 1);
                let sep = Rect { x, y, width: 1, height: CELL_HEIGHT }.intersection(board);
                frame.render_widget(Paragraph::new("│\n│\n│").style(grid), sep);
            }
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(board, pos), screen.cells()[pos.index()], pos == cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, glyph: Option<char>, selected: bool) {
    let base_style = match glyph {
        None => Style::default().fg(Color::DarkGray),
        Some('X') => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let symbol = format!(" {} ", glyph.unwrap_or(' '));
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_each_cell_centre() {
        let area = Rect::new(0, 0, 80, 30);
        let board = board_rect(page(area)[1]);
        for pos in Position::ALL {
            let cell = cell_rect(board, pos);
            let hit = cell_at(area, cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(hit, Some(pos));
        }
    }

    #[test]
    fn test_cell_at_misses_outside_board() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
