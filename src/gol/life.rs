use itertools::iproduct;

use super::{Board, Point};
use crate::{frame::Frame, random::RandomSource, render::Renderer};

const NEIGHBORHOOD: [(i64, i64); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// B3/S23: birth on exactly three neighbors, survival on two or three.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Live Moore neighbors of (col, row). Off-board positions count as nothing.
fn count_neighbors_in(board: &Board, col: usize, row: usize) -> u8 {
    let center = Point::from((col as i64, row as i64));
    NEIGHBORHOOD
        .iter()
        .map(|&off| center.clone() + Point::from(off))
        .filter(|pt| board.cell_at(pt) == Some(true))
        .count() as u8
}

/// What changed between two generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

/// The simulation engine. Holds two boards; `active` is the current
/// generation and the other slot is scratch space for the next one.
#[derive(Clone, Debug)]
pub struct LifeBoard {
    boards: [Board; 2],
    active: usize,
    generation: u64,
}

impl LifeBoard {
    /// Creates a `width` x `height` board and seeds it from `rng`.
    pub fn new(width: usize, height: usize, rng: &mut RandomSource) -> Self {
        let mut life = Self::empty(width, height);
        life.randomize_board(rng);
        life
    }

    pub fn empty(width: usize, height: usize) -> Self {
        let blank = Board::new(width, height, false);
        LifeBoard {
            boards: [blank.clone(), blank],
            active: 0,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.boards[self.active]
    }

    pub fn width(&self) -> usize {
        self.board().width()
    }
    pub fn height(&self) -> usize {
        self.board().height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[allow(dead_code)]
    pub fn set_cell(&mut self, col: usize, row: usize, alive: bool) {
        self.boards[self.active].set(col, row, alive);
    }

    #[allow(dead_code)]
    pub fn count_neighbors(&self, col: usize, row: usize) -> u8 {
        count_neighbors_in(self.board(), col, row)
    }

    #[allow(dead_code)]
    pub fn clear_board(&mut self) {
        self.boards[self.active].clear();
    }

    /// Each cell is independently alive with probability 1/2.
    pub fn randomize_board(&mut self, rng: &mut RandomSource) {
        let board = &mut self.boards[self.active];
        for row in 0..board.height() {
            for col in 0..board.width() {
                board.set(col, row, rng.rand(2) == 0);
            }
        }
    }

    /// Computes the next generation into the scratch slot from a snapshot of
    /// the current one, then makes it current.
    pub fn advance_generation(&mut self) -> Census {
        let [a, b] = &mut self.boards;
        let (current, next) = if self.active == 0 {
            (&*a, b)
        } else {
            (&*b, a)
        };

        next.clear();
        let mut census = Census::default();
        for (col, row) in iproduct!(0..current.width(), 0..current.height()) {
            let old_state = current.get(col, row);
            let alive = next_state(old_state, count_neighbors_in(current, col, row));
            match (old_state, alive) {
                (false, true) => census.births += 1,
                (true, false) => census.deaths += 1,
                _ => {}
            }
            if alive {
                census.population += 1;
                next.set(col, row, true);
            }
        }

        self.active ^= 1;
        self.generation += 1;
        census
    }

    /// Sends the current generation to `sink` as one full frame.
    pub fn render<R: Renderer + ?Sized>(&self, sink: &mut R) -> anyhow::Result<()> {
        sink.render_frame(&Frame::capture(self.board()))
    }
}
