use std::collections::HashMap;

use crate::basic::GridPoint;

pub mod spawn;

/// How many segments the snake grows by
pub type Nutrition = usize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Food {
    pub pos: GridPoint,
    pub value: Nutrition,
}

/// All food currently on the board, at most one item per cell
#[derive(Default, Clone, Debug)]
pub struct FoodSet(HashMap<GridPoint, Food>);

impl FoodSet {
    pub fn contains(&self, pos: GridPoint) -> bool {
        self.0.contains_key(&pos)
    }

    pub fn get(&self, pos: GridPoint) -> Option<&Food> {
        self.0.get(&pos)
    }

    /// Returns the food that was already there, if any
    pub fn insert(&mut self, food: Food) -> Option<Food> {
        self.0.insert(food.pos, food)
    }

    pub fn remove(&mut self, pos: GridPoint) -> Option<Food> {
        self.0.remove(&pos)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.0.values()
    }

    pub fn positions(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.0.keys().copied()
    }
}

impl Extend<Food> for FoodSet {
    fn extend<T: IntoIterator<Item = Food>>(&mut self, iter: T) {
        for food in iter {
            self.insert(food);
        }
    }
}

impl<'a> IntoIterator for &'a FoodSet {
    type Item = &'a Food;
    type IntoIter = std::collections::hash_map::Values<'a, GridPoint, Food>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}
