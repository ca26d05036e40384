use std::collections::{HashSet, VecDeque};

use log::warn;

pub use builder::{Builder, BuilderError};

use crate::basic::{Boundary, Dir, GridDim, GridPoint};
use crate::error::{Error, ErrorType, Result};
use crate::snake_control::{Controller, Surroundings};

pub mod builder;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Living,
    Crashed,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SegmentType {
    Normal,
    Crashed,
}

/// Where a segment sits in the chain
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Part {
    Head,
    Body,
    Tail,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub segment_type: SegmentType,
    pub pos: GridPoint,
    /// Direction this segment moves in on the next tick
    pub dir: Dir,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CrashCause {
    Itself,
    Wall,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Advance {
    /// `vacated` is the cell the tail left, if it is free now
    Moved { vacated: Option<GridPoint> },
    Crashed { at: GridPoint, cause: CrashCause },
}

// INVARIANT: every segment steps onto its predecessor's cell,
// segments[i].pos.wrapping_translate(segments[i].dir, 1, board_dim) == segments[i - 1].pos
pub struct Body {
    /// Head first
    pub segments: VecDeque<Segment>,

    /// Every cell covered by a segment, kept in sync with `segments`
    pub cells: HashSet<GridPoint>,

    /// Direction the snake is steering in, applied to the head
    /// at the start of the next advance
    pub dir: Dir,

    /// Number of ticks during which the tail stays in place
    pub grow: usize,
}

impl Body {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.cells.contains(&pos)
    }

    pub fn part_at(&self, idx: usize) -> Part {
        if idx == 0 {
            Part::Head
        } else if idx == self.segments.len() - 1 {
            Part::Tail
        } else {
            Part::Body
        }
    }

    /// Whether the head may move onto `pos` on the next advance
    pub fn is_safe(&self, pos: GridPoint) -> bool {
        !self.occupies(pos) || (self.grow == 0 && pos == self.tail().pos)
    }

    pub fn is_chain_intact(&self, board_dim: GridDim) -> bool {
        self.segments
            .iter()
            .zip(self.segments.iter().skip(1))
            .all(|(front, back)| back.pos.wrapping_translate(back.dir, 1, board_dim) == front.pos)
            && self.cells.len() == self.segments.len()
    }
}

pub struct Snake {
    pub body: Body,
    pub state: State,
    pub controller: Box<dyn Controller + Send>,
}

impl Snake {
    pub fn head(&self) -> &Segment {
        self.body.head()
    }

    pub fn tail(&self) -> &Segment {
        self.body.tail()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.body.occupies(pos)
    }

    pub fn parts(&self) -> impl Iterator<Item = (Part, &Segment)> {
        self.body
            .segments
            .iter()
            .enumerate()
            .map(move |(idx, segment)| (self.body.part_at(idx), segment))
    }

    pub fn grow_by(&mut self, amount: usize) {
        self.body.grow += amount;
    }

    pub fn update_dir(&mut self, surroundings: &Surroundings) {
        if self.state != State::Living {
            return;
        }

        match self.controller.next_dir(&self.body, surroundings) {
            Some(dir) if self.len() > 1 && dir.is_reversal_of(self.body.dir) => {
                warn!(
                    "controller tried to perform a 180° turn {:?} -> {:?}",
                    self.body.dir, dir
                );
                self.controller.dir_rejected(self.body.dir);
            }
            Some(dir) => self.body.dir = dir,
            None => {}
        }
    }

    pub fn advance(&mut self, board_dim: GridDim, boundary: Boundary) -> Result<Advance> {
        if self.state == State::Crashed {
            return Err(Error::from(ErrorType::SnakeCrashed).with_trace_step("Snake::advance"));
        }

        let dir = self.body.dir;
        self.body.segments[0].dir = dir;

        let head_pos = self.head().pos;
        let next_pos = head_pos.translate(dir, 1);
        let new_head_pos = match boundary {
            Boundary::Wrap => next_pos.wrap_around(board_dim),
            Boundary::Solid if board_dim.contains(next_pos) => next_pos,
            Boundary::Solid => {
                self.crash();
                return Ok(Advance::Crashed {
                    at: head_pos,
                    cause: CrashCause::Wall,
                });
            }
        };

        if !self.body.is_safe(new_head_pos) {
            self.crash();
            return Ok(Advance::Crashed {
                at: new_head_pos,
                cause: CrashCause::Itself,
            });
        }

        let old_tail = *self.tail();

        // each segment moves in its own direction and then
        // takes over the direction its predecessor had
        let mut leading_dir = dir;
        for segment in self.body.segments.iter_mut() {
            segment.pos = segment.pos.wrapping_translate(segment.dir, 1, board_dim);
            leading_dir = std::mem::replace(&mut segment.dir, leading_dir);
        }

        let vacated = if self.body.grow > 0 {
            self.body.grow -= 1;
            self.body.segments.push_back(old_tail);
            None
        } else {
            self.body.cells.remove(&old_tail.pos);
            Some(old_tail.pos).filter(|pos| *pos != new_head_pos)
        };
        self.body.cells.insert(new_head_pos);

        Ok(Advance::Moved { vacated })
    }

    pub fn crash(&mut self) {
        if !matches!(self.state, State::Crashed) {
            self.state = State::Crashed;
            self.body.segments[0].segment_type = SegmentType::Crashed;
        }
    }
}
