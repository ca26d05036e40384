use std::cmp::max;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use clock::Clock;
pub use prefs::Prefs;

use crate::basic::{Dir, GridDim, GridPoint, Ticks};
use crate::error::{Error, ErrorConversion, ErrorType, Result};
use crate::food::spawn::{spawn_food, SpawnPolicy};
use crate::food::{Food, FoodSet};
use crate::snake::{self, Advance, CrashCause, Snake};
use crate::snake_control::Surroundings;

pub mod clock;
pub mod prefs;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    Lost { at: GridPoint, cause: CrashCause },
    /// The snake covers the whole board
    Won,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Ate { food: Food },
    Crashed { at: GridPoint, cause: CrashCause },
    Won,
}

#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct Stats {
    pub ticks: Ticks,
    pub food_eaten: usize,
    pub max_len: usize,
}

pub struct Game {
    prefs: Prefs,
    board_dim: GridDim,

    snake: Snake,
    food: FoodSet,
    spawn_policy: SpawnPolicy,
    rng: StdRng,

    state: GameState,
    stats: Stats,
}

impl Game {
    /// Keeps `prefs.food_count` items of food on random free cells
    pub fn new(prefs: Prefs) -> Result<Self> {
        let spawn_policy = SpawnPolicy::Random {
            food_count: prefs.food_count,
        };
        Self::with_spawn_policy(prefs, spawn_policy)
    }

    pub fn with_spawn_policy(prefs: Prefs, spawn_policy: SpawnPolicy) -> Result<Self> {
        prefs.validate().with_trace_step("Game::new")?;

        let board_dim = GridPoint::square(prefs.field_size);
        let rng = match prefs.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Self::spawn_snake(&prefs, board_dim).with_trace_step("Game::new")?;

        let mut game = Self {
            prefs,
            board_dim,
            stats: Stats {
                max_len: snake.len(),
                ..Stats::default()
            },
            snake,
            food: FoodSet::default(),
            spawn_policy,
            rng,
            state: GameState::Playing,
        };
        game.top_up_food();
        Ok(game)
    }

    // the head starts just right of the center, heading right
    fn spawn_snake(prefs: &Prefs, board_dim: GridDim) -> Result<Snake> {
        let center = prefs.field_size / 2;
        Ok(snake::Builder::default()
            .pos(GridPoint::new(center + 1, center))
            .dir(Dir::R)
            .len(prefs.start_len)
            .controller(prefs.controller.clone())
            .build(board_dim)?)
    }

    fn top_up_food(&mut self) {
        spawn_food(
            &mut self.spawn_policy,
            &self.snake,
            &mut self.food,
            self.board_dim,
            self.prefs.food_value,
            &mut self.rng,
        );
    }

    /// Advances the game by one step of the clock
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.state != GameState::Playing {
            return Err(Error::from(ErrorType::GameOver).with_trace_step("Game::tick"));
        }
        self.stats.ticks += 1;

        let surroundings = Surroundings {
            food: &self.food,
            board_dim: self.board_dim,
            boundary: self.prefs.boundary,
        };
        self.snake.update_dir(&surroundings);

        let advance = self
            .snake
            .advance(self.board_dim, self.prefs.boundary)
            .with_trace_step("Game::tick")?;

        if let Advance::Crashed { at, cause } = advance {
            info!(
                "snake crashed ({:?}) at {:?} after {} ticks with length {}",
                cause,
                at,
                self.stats.ticks,
                self.snake.len()
            );
            self.state = GameState::Lost { at, cause };
            return Ok(TickOutcome::Crashed { at, cause });
        }

        let outcome = match self.food.remove(self.snake.head().pos) {
            Some(food) => {
                debug!("ate {:?}", food);
                self.snake.grow_by(food.value);
                self.stats.food_eaten += 1;
                TickOutcome::Ate { food }
            }
            None => TickOutcome::Moved,
        };
        self.stats.max_len = max(self.stats.max_len, self.snake.len());

        if self.snake.len() >= self.board_dim.cell_count() {
            info!("board full after {} ticks", self.stats.ticks);
            self.state = GameState::Won;
            return Ok(TickOutcome::Won);
        }

        self.top_up_food();
        Ok(outcome)
    }

    /// Queue a direction change for the controller to pick up
    pub fn direction_tapped(&mut self, dir: Dir) {
        if self.state == GameState::Playing {
            self.snake.controller.direction_tapped(dir);
        }
    }

    pub fn restart(&mut self) -> Result {
        self.snake = Self::spawn_snake(&self.prefs, self.board_dim).with_trace_step("Game::restart")?;
        self.snake.controller.reset(self.snake.body.dir);
        self.food.clear();
        self.spawn_policy.reset();
        self.state = GameState::Playing;
        self.stats = Stats {
            max_len: self.snake.len(),
            ..Stats::default()
        };
        self.top_up_food();
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &FoodSet {
        &self.food
    }

    pub fn board_dim(&self) -> GridDim {
        self.board_dim
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn free_cells(&self) -> usize {
        self.board_dim.cell_count() - self.snake.len() - self.food.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::spawn::SpawnScheduleBuilder;
    use crate::snake_control::Template;

    fn prefs() -> Prefs {
        Prefs {
            field_size: 8,
            seed: Some(3),
            ..Prefs::default()
        }
    }

    #[test]
    fn test_initial_layout() {
        let game = Game::new(prefs()).unwrap();
        let cells: Vec<_> = game.snake().body.segments.iter().map(|s| (s.pos, s.dir)).collect();
        assert_eq!(cells, vec![(GridPoint::new(5, 4), Dir::R), (GridPoint::new(4, 4), Dir::R)]);
        assert_eq!(game.food().len(), 1);
        assert_eq!(game.free_cells(), 64 - 3);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_too_small() {
        let err = Game::new(Prefs { field_size: 2, ..prefs() }).err().unwrap();
        assert!(matches!(err.error_type(), ErrorType::FieldTooSmall { size: 2 }));
    }

    #[test]
    fn test_eats_and_grows() {
        let schedule = SpawnScheduleBuilder::new().spawn(GridPoint::new(7, 4), 2).build();
        let mut game = Game::with_spawn_policy(prefs(), SpawnPolicy::scheduled(1, schedule)).unwrap();

        assert_eq!(game.tick().unwrap(), TickOutcome::Moved);
        let outcome = game.tick().unwrap();
        assert_eq!(
            outcome,
            TickOutcome::Ate { food: Food { pos: GridPoint::new(7, 4), value: 2 } }
        );
        assert_eq!(game.snake().len(), 2);
        game.tick().unwrap();
        game.tick().unwrap();
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.stats().food_eaten, 1);
        assert_eq!(game.stats().max_len, 4);
    }

    #[test]
    fn test_taps_steer() {
        let mut game = Game::new(prefs()).unwrap();
        game.direction_tapped(Dir::D);
        game.tick().unwrap();
        assert_eq!(game.snake().head().pos, GridPoint::new(5, 5));
        game.direction_tapped(Dir::U); // reversal, dropped
        game.tick().unwrap();
        assert_eq!(game.snake().head().pos, GridPoint::new(5, 6));
    }

    #[test]
    fn test_ticking_after_game_over() {
        let prefs = Prefs {
            boundary: crate::basic::Boundary::Solid,
            food_count: 0,
            ..prefs()
        };
        let mut game = Game::new(prefs).unwrap();
        // head starts at x = 5 on an 8 wide board
        for _ in 0..2 {
            assert_eq!(game.tick().unwrap(), TickOutcome::Moved);
        }
        assert_eq!(
            game.tick().unwrap(),
            TickOutcome::Crashed { at: GridPoint::new(7, 4), cause: CrashCause::Wall }
        );
        assert!(game.is_over());
        let err = game.tick().unwrap_err();
        assert!(matches!(err.error_type(), ErrorType::GameOver));

        game.restart().unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.stats(), Stats { max_len: 2, ..Stats::default() });
        assert_eq!(game.tick().unwrap(), TickOutcome::Moved);
    }

    #[test]
    fn test_scheduled_food_off_the_board() {
        let schedule = SpawnScheduleBuilder::new().spawn(GridPoint::new(7, 7), 1).build();
        let prefs = Prefs { field_size: 3, ..prefs() };
        let game = Game::with_spawn_policy(prefs, SpawnPolicy::scheduled(1, schedule)).unwrap();
        assert!(game.food().is_empty());
        assert_eq!(game.free_cells(), 7);
        assert_eq!(game.to_string().lines().count(), 5);
    }

    #[test]
    fn test_programmed_template() {
        let prefs = Prefs {
            controller: Template::Programmed(crate::move_sequence![turn(Dir::U)]),
            food_count: 0,
            ..prefs()
        };
        let mut game = Game::new(prefs).unwrap();
        game.tick().unwrap();
        assert_eq!(game.snake().head().pos, GridPoint::new(5, 3));
    }
}
