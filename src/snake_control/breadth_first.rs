use std::collections::{HashSet, VecDeque};

use itertools::Itertools;

use crate::basic::Dir;
use crate::snake::Body;
use crate::snake_control::{Controller, Surroundings};

/// Heads for the closest reachable food, treating the whole
/// body as an obstacle. Without a path it keeps going straight
/// as long as that's safe and otherwise turns wherever it can.
pub struct BreadthFirst;

impl Controller for BreadthFirst {
    fn next_dir(&mut self, body: &Body, surroundings: &Surroundings) -> Option<Dir> {
        let head = body.head().pos;

        let mut visited = HashSet::new();
        visited.insert(head);

        // (cell, first step of the path leading to it)
        let mut queue: VecDeque<_> = Dir::iter_from(body.dir)
            .filter(|dir| body.len() == 1 || !dir.is_reversal_of(body.dir))
            .filter_map(|dir| Some((surroundings.step(head, dir)?, dir)))
            .filter(|(pos, _)| body.is_safe(*pos))
            .unique_by(|(pos, _)| *pos)
            .collect();
        visited.extend(queue.iter().map(|(pos, _)| *pos));

        let safe_dirs = queue.iter().map(|(_, dir)| *dir).collect_vec();

        while let Some((pos, first_dir)) = queue.pop_front() {
            if surroundings.food.contains(pos) {
                return Some(first_dir);
            }

            for dir in Dir::iter() {
                if let Some(next) = surroundings.step(pos, dir) {
                    if !body.occupies(next) && visited.insert(next) {
                        queue.push_back((next, first_dir));
                    }
                }
            }
        }

        // iter_from puts the current direction first
        safe_dirs.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Boundary, GridPoint};
    use crate::food::{Food, FoodSet};
    use crate::snake::{Builder, Snake};
    use crate::snake_control::Template;
    use Dir::*;

    fn snake(pos: (isize, isize), dir: Dir, len: usize) -> Snake {
        Builder::default()
            .pos(GridPoint::new(pos.0, pos.1))
            .dir(dir)
            .len(len)
            .controller(Template::BreadthFirst)
            .build(GridPoint::square(7))
            .unwrap()
    }

    fn food_at(cells: &[(isize, isize)]) -> FoodSet {
        let mut food = FoodSet::default();
        food.extend(cells.iter().map(|&(x, y)| Food { pos: GridPoint::new(x, y), value: 1 }));
        food
    }

    fn surroundings(food: &FoodSet, boundary: Boundary) -> Surroundings<'_> {
        Surroundings {
            food,
            board_dim: GridPoint::square(7),
            boundary,
        }
    }

    #[test]
    fn test_heads_for_food() {
        let snake = snake((3, 3), R, 2);
        let food = food_at(&[(3, 1)]);
        let dir = BreadthFirst.next_dir(&snake.body, &surroundings(&food, Boundary::Wrap));
        assert_eq!(dir, Some(U));
    }

    #[test]
    fn test_closest_food_wins() {
        let snake = snake((1, 3), R, 2);
        // (6, 3) is right behind the tail, (4, 3) is straight ahead
        let food = food_at(&[(6, 3), (4, 3)]);
        let dir = BreadthFirst.next_dir(&snake.body, &surroundings(&food, Boundary::Wrap));
        assert_eq!(dir, Some(R));
    }

    #[test]
    fn test_uses_wrapping() {
        let snake = snake((1, 1), R, 2);
        let food = food_at(&[(1, 6)]);
        let dir = BreadthFirst.next_dir(&snake.body, &surroundings(&food, Boundary::Wrap));
        assert_eq!(dir, Some(U));
        let dir = BreadthFirst.next_dir(&snake.body, &surroundings(&food, Boundary::Solid));
        assert_eq!(dir, Some(D));
    }

    #[test]
    fn test_no_food_goes_straight() {
        let snake = snake((3, 3), L, 3);
        let food = FoodSet::default();
        let dir = BreadthFirst.next_dir(&snake.body, &surroundings(&food, Boundary::Wrap));
        assert_eq!(dir, Some(L));
    }

    #[test]
    fn test_avoids_wall() {
        let snake = snake((6, 3), R, 3);
        let food = FoodSet::default();
        let dir = BreadthFirst.next_dir(&snake.body, &surroundings(&food, Boundary::Solid));
        assert!(matches!(dir, Some(U) | Some(D)));
    }
}
