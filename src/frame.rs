use std::fmt::Display;

use crate::gol::Board;

pub const ALIVE: char = '*';
pub const DEAD: char = ' ';

/// Text snapshot of a board: one string per row, one glyph per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    pub fn capture(board: &Board) -> Self {
        let rows = (0..board.height())
            .map(|row| {
                (0..board.width())
                    .map(|col| if board.get(col, row) { ALIVE } else { DEAD })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
