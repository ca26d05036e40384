use std::collections::VecDeque;

use crate::basic::Dir;
use crate::snake::Body;
use crate::snake_control::{Controller, Surroundings};

pub struct Taps {
    control_queue: VecDeque<Dir>,
    dir: Dir,
}

impl Taps {
    // How many moves ahead a player can tap (this allows quick 180° turns)
    const CTRL_QUEUE_LIMIT: usize = 3;

    pub fn new(start_dir: Dir) -> Self {
        Self {
            control_queue: VecDeque::with_capacity(Self::CTRL_QUEUE_LIMIT),
            dir: start_dir,
        }
    }
}

impl Controller for Taps {
    fn next_dir(&mut self, _: &Body, _: &Surroundings) -> Option<Dir> {
        let dir = self.control_queue.pop_front()?;
        self.dir = dir;
        Some(dir)
    }

    fn reset(&mut self, dir: Dir) {
        self.control_queue.clear();
        self.dir = dir;
    }

    fn direction_tapped(&mut self, new_dir: Dir) {
        // deny 180deg and 360deg turns
        let last_dir = self.control_queue.back().copied().unwrap_or(self.dir);
        if self.control_queue.len() < Self::CTRL_QUEUE_LIMIT
            && new_dir != last_dir
            && !new_dir.is_reversal_of(last_dir)
        {
            self.control_queue.push_back(new_dir);
        }
    }
}
