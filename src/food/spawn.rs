use log::warn;
use rand::Rng;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{GridDim, GridPoint, Ticks};
use crate::food::{Food, FoodSet, Nutrition};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpawnEvent {
    Spawn(Food),
    Wait(Ticks),
}

pub type SpawnSchedule = Vec<SpawnEvent>;

pub struct SpawnScheduleBuilder(SpawnSchedule);

impl SpawnScheduleBuilder {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn spawn(mut self, pos: GridPoint, value: Nutrition) -> Self {
        self.0.push(SpawnEvent::Spawn(Food { pos, value }));
        self
    }

    pub fn wait(mut self, ticks: Ticks) -> Self {
        self.0.push(SpawnEvent::Wait(ticks));
        self
    }

    pub fn build(self) -> SpawnSchedule {
        self.0
    }
}

impl Default for SpawnScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub enum SpawnPolicy {
    None, // no food
    Random {
        food_count: usize,
    },
    // a new item is taken from the schedule each time there is not enough food on the board
    ScheduledOnEat {
        food_count: usize,
        schedule: SpawnSchedule,
        next_index: usize,
        current_wait: Ticks,
    },
}

impl SpawnPolicy {
    pub fn scheduled(food_count: usize, schedule: SpawnSchedule) -> Self {
        SpawnPolicy::ScheduledOnEat {
            food_count,
            schedule,
            next_index: 0,
            current_wait: 0,
        }
    }

    pub fn reset(&mut self) {
        match self {
            SpawnPolicy::None => {}
            SpawnPolicy::Random { .. } => {}
            SpawnPolicy::ScheduledOnEat { next_index, current_wait, .. } => {
                *next_index = 0;
                *current_wait = 0;
            }
        }
    }

    fn wants_more(&self, present: usize) -> bool {
        match self {
            SpawnPolicy::None => false,
            SpawnPolicy::Random { food_count } => present < *food_count,
            SpawnPolicy::ScheduledOnEat { food_count, schedule, .. } => {
                !schedule.is_empty() && present < *food_count
            }
        }
    }
}

/// Tops up `food` according to `policy`, returns how many items
/// couldn't be placed for lack of room
pub fn spawn_food(
    policy: &mut SpawnPolicy,
    snake: &Snake,
    food: &mut FoodSet,
    board_dim: GridDim,
    food_value: Nutrition,
    rng: &mut impl Rng,
) -> usize {
    // lazy
    let mut occupied_cells = None;

    let mut spawn = vec![];

    loop {
        if !policy.wants_more(food.len() + spawn.len()) {
            break;
        }

        let occupied_cells = occupied_cells.get_or_insert_with(|| get_occupied_cells(snake, &*food));

        let new_food = match policy {
            SpawnPolicy::None => unreachable!("shouldn't be spawning with SpawnPolicy::None"),
            SpawnPolicy::Random { food_count } => {
                let pos = match random_free_spot(occupied_cells, board_dim, rng) {
                    Some(pos) => pos,
                    None => {
                        let missing = *food_count - food.len() - spawn.len();
                        warn!("no space left for new food ({} items will be missing)", missing);
                        food.extend(spawn);
                        return missing;
                    }
                };

                // insert at sorted position
                match occupied_cells.binary_search(&pos) {
                    Ok(_) => panic!("spawned food on top of an occupied cell at {pos:?}"),
                    Err(idx) => occupied_cells.insert(idx, pos),
                }

                Some(Food { pos, value: food_value })
            }
            SpawnPolicy::ScheduledOnEat { schedule, next_index, current_wait, .. } => {
                let len = schedule.len();
                let event = schedule[*next_index];
                match event {
                    SpawnEvent::Wait(ticks) => {
                        if *current_wait + 1 >= ticks {
                            *current_wait = 0;
                            *next_index = (*next_index + 1) % len;
                        } else {
                            *current_wait += 1;
                        }
                        None
                    }
                    SpawnEvent::Spawn(scheduled) => {
                        *next_index = (*next_index + 1) % len;
                        match occupied_cells.binary_search(&scheduled.pos) {
                            _ if !board_dim.contains(scheduled.pos) => {
                                warn!("skipping scheduled food off the board at {:?}", scheduled.pos);
                                None
                            }
                            Ok(_) => {
                                warn!("skipping scheduled food at occupied cell {:?}", scheduled.pos);
                                None
                            }
                            Err(idx) => {
                                occupied_cells.insert(idx, scheduled.pos);
                                Some(scheduled)
                            }
                        }
                    }
                }
            }
        };

        match new_food {
            Some(new_food) => spawn.push(new_food),
            None => break,
        }
    }

    food.extend(spawn);
    0
}
