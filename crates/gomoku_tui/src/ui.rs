//! Stateless UI rendering for gomoku.

use crate::app::App;
use crate::input::{BoardGeometry, CELL_WIDTH};
use gomoku::{Cell, Coord, Engine, Phase, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of the row labels drawn left of the grid.
const LABEL_WIDTH: u16 = 3;

/// Width of the score panel.
const PANEL_WIDTH: u16 = 26;

/// Draws one frame and returns where the board landed.
pub fn draw(frame: &mut Frame, app: &App) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board + panel
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Gomoku - Five in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(PANEL_WIDTH)])
        .split(chunks[1]);

    let geometry = draw_board(frame, body[0], app);
    draw_panel(frame, body[1], app.engine());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if app.show_win_dialog()
        && let Some(winner) = app.engine().phase().winner()
    {
        draw_win_dialog(frame, winner);
    }

    geometry
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> BoardGeometry {
    let engine = app.engine();
    let size = engine.board().size();
    let grid_width = u16::try_from(size).unwrap_or(u16::MAX).saturating_mul(CELL_WIDTH);
    let grid_height = u16::try_from(size).unwrap_or(u16::MAX);
    let (label_width, header) = if app.show_coordinates() {
        (LABEL_WIDTH, 1)
    } else {
        (0, 0)
    };

    let board_area = center_rect(area, label_width + grid_width, header + grid_height);
    let geometry = BoardGeometry {
        origin_x: board_area.x + label_width,
        origin_y: board_area.y + header,
        size,
    };

    let stars = star_points(size);
    let last = engine.last_move().map(|m| m.coord());
    let winning = engine.winning_cells().unwrap_or(&[]);
    let show_cursor = !engine.phase().is_terminal() && app.cursor_visible();
    let label_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(size + 1);
    if app.show_coordinates() {
        let mut spans = vec![Span::raw(" ".repeat(usize::from(LABEL_WIDTH)))];
        spans.extend((0..size).map(|col| Span::styled(format!("{:<2}", column_label(col)), label_style)));
        lines.push(Line::from(spans));
    }

    for row in 0..size {
        let mut spans = Vec::with_capacity(size + 1);
        if app.show_coordinates() {
            spans.push(Span::styled(format!("{:>2} ", row + 1), label_style));
        }
        for col in 0..size {
            let cell = Coord::new(row, col);
            let stone = engine.board().get(row, col).unwrap_or(Cell::Empty);
            let (glyph, mut style) = match stone {
                Cell::Black => ("●", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Cell::White => ("○", Style::default().fg(Color::White)),
                Cell::Empty if stars.contains(&row) && stars.contains(&col) => {
                    ("+", Style::default().fg(Color::Gray))
                }
                Cell::Empty => ("·", Style::default().fg(Color::DarkGray)),
            };
            if last == Some(cell) {
                style = style.fg(Color::LightMagenta);
            }
            if winning.contains(&cell) {
                style = style.bg(Color::Magenta).fg(Color::White);
            }
            if show_cursor && app.cursor() == cell {
                style = style.bg(Color::Blue);
            }
            spans.push(Span::styled(format!("{glyph} "), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
    geometry
}

fn draw_panel(frame: &mut Frame, area: Rect, engine: &Engine) {
    let score = engine.score();
    let in_progress = matches!(engine.phase(), Phase::InProgress);
    let player_line = |player: Player, glyph: &str| {
        let active = in_progress && engine.current_player() == player;
        let style = if active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(
            format!("{} {:<6} {:>3}", glyph, player.to_string(), score.wins(player)),
            style,
        ))
    };

    let lines = vec![
        player_line(Player::Black, "●"),
        player_line(Player::White, "○"),
        Line::raw(""),
        Line::raw(format!("Moves: {}", engine.history().len())),
        Line::raw(""),
        Line::styled("arrows/hjkl  move", Style::default().fg(Color::DarkGray)),
        Line::styled("enter/click  place", Style::default().fg(Color::DarkGray)),
        Line::styled("u undo  n new  q quit", Style::default().fg(Color::DarkGray)),
    ];

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(panel, area);
}

fn draw_win_dialog(frame: &mut Frame, winner: Player) {
    let area = center_rect(frame.area(), 34, 7);
    let text = vec![
        Line::raw(""),
        Line::styled(
            format!("{} wins!", winner),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw("n: new game   q: quit"),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Victory"));
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// Letters for columns, skipping `I` as on a go board.
fn column_label(col: usize) -> char {
    const LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
    LETTERS.get(col).map_or('?', |b| char::from(*b))
}

/// Rows (and columns) carrying a star point.
///
/// On a 15×15 board these are 3, 7 and 11.
fn star_points(size: usize) -> Vec<usize> {
    let center = size / 2;
    if size >= 9 {
        vec![3, center, size - 4]
    } else {
        vec![center]
    }
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
