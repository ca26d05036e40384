//! Plain text dump of the board, for terminals and logs

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::basic::Dir;
use crate::game::Game;
use crate::snake::{Part, SegmentType};

const EMPTY_CHAR: char = ' ';
const FOOD_CHAR: char = '*';
const BODY_CHAR: char = 'o';
const TAIL_CHAR: char = '.';
const CRASH_CHAR: char = 'x';

fn head_char(dir: Dir) -> char {
    match dir {
        Dir::U => '^',
        Dir::R => '>',
        Dir::D => 'v',
        Dir::L => '<',
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dim = self.board_dim();
        let mut pixels = vec![vec![EMPTY_CHAR; dim.x as usize]; dim.y as usize];

        for food in self.food() {
            pixels[food.pos.y as usize][food.pos.x as usize] = FOOD_CHAR;
        }

        // tail first so that the head is drawn on top
        let parts = self.snake().parts().collect_vec();
        for (part, segment) in parts.into_iter().rev() {
            pixels[segment.pos.y as usize][segment.pos.x as usize] = match (part, segment.segment_type) {
                (_, SegmentType::Crashed) => CRASH_CHAR,
                (Part::Head, _) => head_char(segment.dir),
                (Part::Body, _) => BODY_CHAR,
                (Part::Tail, _) => TAIL_CHAR,
            };
        }

        let border = format!("+{}+", " + ".repeat(dim.x as usize));
        writeln!(f, "{}", border)?;
        for row in &pixels {
            writeln!(f, "+{}+", row.iter().map(|pixel| format!(" {} ", pixel)).join(""))?;
        }
        writeln!(f, "{}", border)
    }
}
