use crate::basic::Dir;
use crate::snake::Body;
use crate::snake_control::{Controller, Surroundings};

#[allow(unused_macros)]
#[macro_export]
macro_rules! move_sequence {
    (@ turn($dir:expr) ) => {
        $crate::snake_control::Move::Turn($dir)
    };
    (@ wait($t:expr) ) => {
        $crate::snake_control::Move::Wait($t)
    };
    [ $( $action:tt ( $( $inner:tt )* ) ),* $(,)? ] => {
        vec![$(
            $crate::move_sequence!(@ $action( $( $inner )* ))
        ),*]
    };
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Move {
    Turn(Dir),
    /// Keep going straight for this many ticks
    Wait(usize),
}

/// Replays a cyclic sequence of moves, one per tick
pub struct Programmed {
    pub move_sequence: Vec<Move>,
    pub dir: Dir,
    pub next_move_idx: usize,
    pub wait: usize,
}

impl Controller for Programmed {
    fn next_dir(&mut self, _: &Body, _: &Surroundings) -> Option<Dir> {
        if self.wait > 0 {
            self.wait -= 1;
        } else {
            match *self.move_sequence.get(self.next_move_idx)? {
                Move::Wait(wait) => self.wait = wait.saturating_sub(1),
                Move::Turn(new_dir) => self.dir = new_dir,
            };

            self.next_move_idx += 1;
            self.next_move_idx %= self.move_sequence.len();
        }

        Some(self.dir)
    }

    fn dir_rejected(&mut self, dir: Dir) {
        self.dir = dir;
    }

    fn reset(&mut self, dir: Dir) {
        self.dir = dir;
        self.next_move_idx = 0;
        self.wait = 0;
    }
}
