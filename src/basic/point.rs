use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use num_integer::Integer;

use super::dir::Dir;
use Dir::*;

// INVARIANT: (0, 0) is the top left cell, y grows downwards
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Width in `x`, height in `y`
pub type GridDim = GridPoint;

impl GridPoint {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub const fn square(side: isize) -> Self {
        Self { x: side, y: side }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let d = dist as isize;
        let mut new_pos = self;
        match dir {
            U => new_pos.y -= d,
            D => new_pos.y += d,
            L => new_pos.x -= d,
            R => new_pos.x += d,
        }
        new_pos
    }

    // basically mod width, mod height
    // important: (-1) % w == -1, that's why mod_floor
    #[must_use]
    pub fn wrap_around(self, board_dim: GridDim) -> Self {
        Self {
            x: self.x.mod_floor(&board_dim.x),
            y: self.y.mod_floor(&board_dim.y),
        }
    }

    // wraps around board edges
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: usize, board_dim: GridDim) -> Self {
        self.translate(dir, dist).wrap_around(board_dim)
    }

    // None if the two points are not neighbors (wrapping allowed)
    pub fn wrapping_dir_to_1(self, other: Self, board_dim: GridDim) -> Option<Dir> {
        Dir::iter().find(|dir| self.wrapping_translate(*dir, 1, board_dim) == other)
    }

    // shortest manhattan distance on the torus
    pub fn wrapping_distance(self, other: Self, board_dim: GridDim) -> usize {
        let dx = (self.x - other.x).mod_floor(&board_dim.x);
        let dy = (self.y - other.y).mod_floor(&board_dim.y);
        (dx.min(board_dim.x - dx) + dy.min(board_dim.y - dy)) as usize
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    pub fn cell_count(self) -> usize {
        (self.x * self.y) as usize
    }

    /// Row-major index of a point inside a board of this size
    pub fn index_of(self, pos: Self) -> usize {
        (pos.y * self.x + pos.x) as usize
    }

    pub fn point_at(self, idx: usize) -> Self {
        Self {
            x: idx as isize % self.x,
            y: idx as isize / self.x,
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major, same as index_of
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}
