use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};
use crate::food::Food;
use crate::snake::Snake;

pub fn get_occupied_cells<'a>(snake: &Snake, food: impl IntoIterator<Item = &'a Food>) -> Vec<GridPoint> {
    let food = food.into_iter();
    // upper bound
    let max_occupied_cells = snake.len() + food.size_hint().0;
    let mut occupied_cells = Vec::with_capacity(max_occupied_cells);
    occupied_cells.extend(food.map(|food| food.pos));
    occupied_cells.extend(snake.body.segments.iter().map(|segment| segment.pos));
    occupied_cells.sort_unstable();
    occupied_cells.dedup();
    occupied_cells
}

// occupied_cells must be sorted and deduplicated
pub fn random_free_spot(occupied_cells: &[GridPoint], board_dim: GridDim, rng: &mut impl Rng) -> Option<GridPoint> {
    let free_spaces = board_dim.cell_count().checked_sub(occupied_cells.len())?;
    if free_spaces == 0 {
        return None;
    }

    let mut new_idx = (0..free_spaces).sample_single(rng);
    for pos in occupied_cells {
        if board_dim.index_of(*pos) <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < board_dim.cell_count());
    Some(board_dim.point_at(new_idx))
}
