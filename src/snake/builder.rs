use super::*;
use crate::snake_control;
use log::debug;
use std::fmt::{Display, Formatter};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<GridPoint>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,
    pub controller: Option<snake_control::Template>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: GridPoint) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn controller(mut self, value: snake_control::Template) -> Self {
        self.controller = Some(value);
        self
    }

    fn error(&self, message: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), message)
    }

    /// The body trails straight behind the head, opposite to `dir`
    pub fn build(&self, board_dim: GridDim) -> std::result::Result<Snake, BuilderError> {
        let pos = self.pos.ok_or_else(|| self.error("missing field `pos`"))?;
        let dir = self.dir.ok_or_else(|| self.error("missing field `dir`"))?;
        let len = self.len.ok_or_else(|| self.error("missing field `len`"))?;

        if !board_dim.contains(pos) {
            return Err(self.error("`pos` outside of the board"));
        }
        if len == 0 {
            return Err(self.error("`len` must be at least 1"));
        }
        let row_len = match dir {
            Dir::U | Dir::D => board_dim.y,
            Dir::L | Dir::R => board_dim.x,
        };
        if len >= row_len as usize {
            return Err(self.error("`len` doesn't fit in a row of the board"));
        }

        debug!(
            "spawn snake of length {} at {:?} coming from {:?} going to {:?}",
            len, pos, -dir, dir
        );

        let segments: VecDeque<_> = (0..len)
            .map(|dist| Segment {
                segment_type: SegmentType::Normal,
                pos: pos.wrapping_translate(-dir, dist, board_dim),
                dir,
            })
            .collect();
        let cells = segments.iter().map(|segment| segment.pos).collect();

        let body = Body {
            segments,
            cells,
            dir,
            grow: 0,
        };

        Ok(Snake {
            body,
            state: State::Living,
            controller: self
                .controller
                .as_ref()
                .ok_or_else(|| self.error("missing field `controller`"))?
                .clone()
                .into_controller(dir),
        })
    }
}
