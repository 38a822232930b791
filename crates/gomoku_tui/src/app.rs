//! Application state and input handling.

use crate::input::{self, BoardGeometry};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use gomoku::{Coord, Engine, Phase, Player};
use tracing::{debug, instrument, warn};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    cursor: Coord,
    cursor_visible: bool,
    geometry: Option<BoardGeometry>,
    status_message: String,
    show_win_dialog: bool,
    show_coordinates: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application around an engine.
    #[instrument(skip(engine))]
    pub fn new(engine: Engine, show_coordinates: bool) -> Self {
        let center = engine.board().size() / 2;
        let mut app = Self {
            engine,
            cursor: Coord::new(center, center),
            cursor_visible: true,
            geometry: None,
            status_message: String::new(),
            show_win_dialog: false,
            show_coordinates,
            should_quit: false,
        };
        app.refresh_status();
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the cursor (keyboard selection or mouse hover).
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Whether the cursor is drawn. Hidden while the pointer is off the grid.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the win dialog is open.
    pub fn show_win_dialog(&self) -> bool {
        self.show_win_dialog
    }

    /// Whether row and column labels are drawn.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was drawn so clicks can be mapped.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = Some(geometry);
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(mouse) => self.handle_mouse(mouse.kind, mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        self.cursor_visible = true;
        if self.show_win_dialog {
            match code {
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => {
                self.cursor = input::move_cursor(self.cursor, other, self.engine.board().size());
            }
        }
    }

    /// Handles a mouse event at terminal position `(x, y)`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        if self.show_win_dialog {
            return;
        }
        let cell = self.geometry.and_then(|g| g.cell_at(x, y));
        match (kind, cell) {
            (MouseEventKind::Moved, Some(cell)) => {
                self.cursor = cell;
                self.cursor_visible = true;
            }
            (MouseEventKind::Moved, None) => self.cursor_visible = false,
            (MouseEventKind::Down(MouseButton::Left), Some(cell)) => {
                self.cursor = cell;
                self.cursor_visible = true;
                self.place(cell);
            }
            _ => {}
        }
    }

    /// Places the current player's stone at `cell`.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: Coord) {
        match self.engine.place_stone(cell.row, cell.col) {
            Ok(outcome) if outcome.accepted => {
                if outcome.phase.winner().is_some() {
                    self.show_win_dialog = true;
                }
                self.refresh_status();
            }
            Ok(outcome) => {
                if let Some(reason) = outcome.reason {
                    debug!(%reason, "Move refused");
                    if !outcome.phase.is_terminal() {
                        self.status_message =
                            format!("{}. {}", reason, turn_message(self.engine.current_player()));
                    }
                }
            }
            Err(error) => warn!(%error, "Cursor outside the board"),
        }
    }

    /// Takes back the last move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) {
        if self.engine.undo().accepted {
            self.cursor = self
                .engine
                .last_move()
                .map(|m| m.coord())
                .unwrap_or(self.cursor);
            self.refresh_status();
        }
    }

    /// Starts a new game, keeping the score.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        if let Err(error) = self.engine.new_game(None) {
            warn!(%error, "Could not start a new game");
            return;
        }
        self.show_win_dialog = false;
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.engine.phase() {
            Phase::InProgress => turn_message(self.engine.current_player()),
            Phase::Won { player, .. } => format!("{} wins! Press n for a new game.", player),
            Phase::Drawn => "Draw! Press n for a new game.".to_string(),
        };
    }
}

fn turn_message(player: Player) -> String {
    format!("{}'s turn", player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(Engine::new(), true);
        app.set_geometry(BoardGeometry {
            origin_x: 4,
            origin_y: 2,
            size: 15,
        });
        app
    }

    fn click(app: &mut App, row: u16, col: u16) {
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 4 + col * 2, 2 + row);
    }

    #[test]
    fn test_starts_centered_with_black_to_move() {
        let app = app();
        assert_eq!(app.cursor(), Coord::new(7, 7));
        assert_eq!(app.status_message(), "Black's turn");
    }

    #[test]
    fn test_keyboard_places_stone() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().history().len(), 1);
        assert_eq!(app.engine().history()[0].coord(), Coord::new(7, 8));
        assert_eq!(app.status_message(), "White's turn");
    }

    #[test]
    fn test_click_places_and_hover_moves_cursor() {
        let mut app = app();
        app.handle_mouse(MouseEventKind::Moved, 4 + 6, 2 + 1);
        assert_eq!(app.cursor(), Coord::new(1, 3));
        click(&mut app, 2, 5);
        assert_eq!(app.engine().history()[0].coord(), Coord::new(2, 5));
    }

    #[test]
    fn test_pointer_leaving_grid_hides_cursor() {
        let mut app = app();
        app.handle_mouse(MouseEventKind::Moved, 4 + 6, 2 + 1);
        assert!(app.cursor_visible());
        app.handle_mouse(MouseEventKind::Moved, 0, 0);
        assert!(!app.cursor_visible());
        assert_eq!(app.cursor(), Coord::new(1, 3));

        app.handle_key(KeyCode::Down);
        assert!(app.cursor_visible());
        assert_eq!(app.cursor(), Coord::new(2, 3));
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = app();
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 0, 0);
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 4 + 40, 2);
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_occupied_cell_reports_reason() {
        let mut app = app();
        click(&mut app, 3, 3);
        click(&mut app, 3, 3);
        assert_eq!(app.engine().history().len(), 1);
        assert_eq!(app.status_message(), "Cell is already occupied. White's turn");
    }

    #[test]
    fn test_win_opens_dialog_and_new_game_closes_it() {
        let mut app = app();
        for col in 0..4 {
            click(&mut app, 7, col);
            click(&mut app, 0, col);
        }
        click(&mut app, 7, 4);
        assert!(app.show_win_dialog());
        assert_eq!(app.status_message(), "Black wins! Press n for a new game.");

        click(&mut app, 10, 10);
        app.handle_key(KeyCode::Char('u'));
        assert_eq!(app.engine().history().len(), 9);

        app.handle_key(KeyCode::Char('n'));
        assert!(!app.show_win_dialog());
        assert!(app.engine().history().is_empty());
        assert_eq!(app.engine().score().black, 1);
    }

    #[test]
    fn test_undo_moves_cursor_to_previous_stone() {
        let mut app = app();
        click(&mut app, 1, 1);
        click(&mut app, 2, 2);
        app.handle_key(KeyCode::Char('u'));
        assert_eq!(app.cursor(), Coord::new(1, 1));
        assert_eq!(app.status_message(), "White's turn");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
