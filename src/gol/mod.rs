use std::{fmt::Display, ops::Add};

mod life;

pub use life::LifeBoard;

/// Dense, fixed-size grid of cells addressed by (column, row).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    buf: Vec<bool>,
    width: usize,
    height: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}
impl<I1, I2> From<(I1, I2)> for Point
where
    I1: Into<i64>,
    I2: Into<i64>,
{
    fn from((l, r): (I1, I2)) -> Self {
        Self {
            x: l.into(),
            y: r.into(),
        }
    }
}

impl Board {
    pub fn new(width: usize, height: usize, fill: bool) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        let cells = width.checked_mul(height);
        assert!(
            cells.is_some(),
            "board {}x{} has more cells than fit in memory",
            width,
            height
        );
        Board {
            buf: vec![fill; cells.unwrap_or_default()],
            width,
            height,
        }
    }

    fn index_of(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "cell ({}, {}) outside {}x{} board",
            col,
            row,
            self.width,
            self.height
        );
        row * self.width + col
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> bool {
        self.buf[self.index_of(col, row)]
    }
    pub fn set(&mut self, col: usize, row: usize, alive: bool) {
        let idx = self.index_of(col, row);
        self.buf[idx] = alive;
    }
    pub fn clear(&mut self) {
        self.buf.fill(false);
    }

    /// Looks up a cell by signed coordinates. Anything off the board is `None`;
    /// edges do not wrap.
    pub fn cell_at(&self, pt: &Point) -> Option<bool> {
        let inside = pt.x >= 0
            && pt.x < self.width as i64
            && pt.y >= 0
            && pt.y < self.height as i64;
        inside.then(|| self.get(pt.x as usize, pt.y as usize))
    }

    pub fn population(&self) -> usize {
        self.buf.iter().filter(|v| **v).count()
    }

    /// Builds a board from rows of `*` (alive) and `.` (dead).
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut board = Board::new(width, height, false);
        for (row, text) in rows.iter().enumerate() {
            assert_eq!(text.len(), width, "row {} has the wrong width", row);
            for (col, ch) in text.chars().enumerate() {
                board.set(
                    col,
                    row,
                    match ch {
                        '*' => true,
                        '.' => false,
                        _ => panic!("pattern rows may only contain '*' or '.'"),
                    },
                );
            }
        }
        board
    }

    #[cfg(test)]
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        itertools::iproduct!(0..self.width, 0..self.height)
            .filter(|&(c, r)| self.get(c, r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_filled() {
        let dead = Board::new(4, 3, false);
        assert_eq!(dead.width(), 4);
        assert_eq!(dead.height(), 3);
        assert_eq!(dead.population(), 0);

        let alive = Board::new(4, 3, true);
        assert_eq!(alive.population(), 12);
    }

    #[test]
    fn test_get_set_clear() {
        let mut b = Board::new(5, 2, false);
        b.set(4, 1, true);
        b.set(0, 0, true);
        assert!(b.get(4, 1));
        assert!(b.get(0, 0));
        assert!(!b.get(3, 1));
        assert_eq!(b.population(), 2);

        b.set(0, 0, false);
        assert!(!b.get(0, 0));

        b.clear();
        assert_eq!(b.population(), 0);
    }

    #[test]
    fn test_cell_at_has_hard_edges() {
        let mut b = Board::new(3, 3, false);
        b.set(2, 2, true);
        assert_eq!(b.cell_at(&Point { x: 2, y: 2 }), Some(true));
        assert_eq!(b.cell_at(&Point { x: 0, y: 0 }), Some(false));
        assert_eq!(b.cell_at(&Point { x: -1, y: 0 }), None);
        assert_eq!(b.cell_at(&Point { x: 0, y: -1 }), None);
        assert_eq!(b.cell_at(&Point { x: 3, y: 0 }), None);
        assert_eq!(b.cell_at(&Point { x: 0, y: 3 }), None);
    }

    #[test]
    fn test_point_add() {
        let pt = Point::from((1i64, 2i64)) + Point { x: -1, y: 1 };
        assert_eq!(pt, Point { x: 0, y: 3 });
        assert_eq!(pt.to_string(), "(0, 3)");
    }

    #[test]
    fn test_from_rows() {
        let b = Board::from_rows(&[".*.", "..*"]);
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 2);
        assert_eq!(b.live_cells(), vec![(1, 0), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 board")]
    fn test_out_of_bounds_get_panics() {
        Board::new(3, 3, false).get(3, 0);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 board")]
    fn test_out_of_bounds_set_panics() {
        Board::new(2, 2, false).set(0, 2, true);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_width_panics() {
        Board::new(0, 4, false);
    }

    #[test]
    #[should_panic(expected = "more cells than fit in memory")]
    fn test_cell_count_overflow_panics() {
        Board::new(usize::MAX / 2, 3, false);
    }
}
