use crate::basic::{Boundary, Dir, GridDim, GridPoint};
use crate::food::FoodSet;
use crate::snake::Body;

pub use programmed::Move;

mod breadth_first;
mod programmed;
mod taps;

#[derive(Clone, Debug)]
pub enum Template {
    /// Steered by directional taps
    Taps,
    Programmed(Vec<Move>),
    /// Autopilot heading for the closest food
    BreadthFirst,
}

/// What a controller can see of the board besides the snake itself
#[derive(Copy, Clone)]
pub struct Surroundings<'a> {
    pub food: &'a FoodSet,
    pub board_dim: GridDim,
    pub boundary: Boundary,
}

impl Surroundings<'_> {
    /// The neighboring cell in `dir`, None if that's a wall
    pub fn step(&self, pos: GridPoint, dir: Dir) -> Option<GridPoint> {
        let next = pos.translate(dir, 1);
        match self.boundary {
            Boundary::Wrap => Some(next.wrap_around(self.board_dim)),
            Boundary::Solid => Some(next).filter(|next| self.board_dim.contains(*next)),
        }
    }
}

pub trait Controller {
    // returning None keeps the current direction
    fn next_dir(&mut self, body: &Body, surroundings: &Surroundings) -> Option<Dir>;

    fn reset(&mut self, _dir: Dir) {}

    /// The snake refused the last direction and keeps going `_dir`
    fn dir_rejected(&mut self, _dir: Dir) {}

    fn direction_tapped(&mut self, _dir: Dir) {}
}

impl Template {
    pub fn into_controller(self, start_dir: Dir) -> Box<dyn Controller + Send> {
        match self {
            Template::Taps => Box::new(taps::Taps::new(start_dir)),
            Template::Programmed(move_sequence) => Box::new(programmed::Programmed {
                move_sequence,
                dir: start_dir,
                next_move_idx: 0,
                wait: 0,
            }),
            Template::BreadthFirst => Box::new(breadth_first::BreadthFirst),
        }
    }
}

#[test]
fn test_surroundings_step() {
    let food = FoodSet::default();
    let mut surroundings = Surroundings {
        food: &food,
        board_dim: GridPoint::square(4),
        boundary: Boundary::Wrap,
    };
    let corner = GridPoint::new(3, 0);
    assert_eq!(surroundings.step(corner, Dir::R), Some(GridPoint::new(0, 0)));
    assert_eq!(surroundings.step(corner, Dir::U), Some(GridPoint::new(3, 3)));

    surroundings.boundary = Boundary::Solid;
    assert_eq!(surroundings.step(corner, Dir::R), None);
    assert_eq!(surroundings.step(corner, Dir::D), Some(GridPoint::new(3, 1)));
}
