//! Pointer and keyboard mapping onto grid cells.

use crossterm::event::KeyCode;
use gomoku::Coord;

/// Terminal columns per board intersection.
pub const CELL_WIDTH: u16 = 2;

/// Where the board's top-left intersection was drawn in the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Terminal column of intersection (0, 0).
    pub origin_x: u16,
    /// Terminal row of intersection (0, 0).
    pub origin_y: u16,
    /// Board side length.
    pub size: usize,
}

impl BoardGeometry {
    /// Maps a terminal position to the intersection drawn there.
    ///
    /// Both columns of an intersection map to it. Positions left of, above,
    /// or beyond the grid map to nothing.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Coord> {
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;
        let col = usize::from(dx / CELL_WIDTH);
        let row = usize::from(dy);
        (row < self.size && col < self.size).then(|| Coord::new(row, col))
    }

    /// Terminal position where an intersection is drawn.
    pub fn position_of(&self, cell: Coord) -> (u16, u16) {
        let col = u16::try_from(cell.col).unwrap_or(u16::MAX);
        let row = u16::try_from(cell.row).unwrap_or(u16::MAX);
        (
            self.origin_x.saturating_add(col.saturating_mul(CELL_WIDTH)),
            self.origin_y.saturating_add(row),
        )
    }
}

/// Moves the cursor with arrow keys or `hjkl`, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Left | KeyCode::Char('h') => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Coord::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Coord::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}
