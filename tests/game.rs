use std::time::Duration;

use grid_snake::basic::{Boundary, Dir, GridPoint};
use grid_snake::food::spawn::{SpawnPolicy, SpawnScheduleBuilder};
use grid_snake::game::{Clock, Game, GameState, Prefs, TickOutcome};
use grid_snake::move_sequence;
use grid_snake::snake::CrashCause;
use grid_snake::snake_control::Template;

fn prefs(field_size: isize) -> Prefs {
    Prefs {
        field_size,
        seed: Some(17),
        ..Prefs::default()
    }
}

#[test]
fn autopilot_keeps_the_chain_intact() {
    let prefs = Prefs {
        controller: Template::BreadthFirst,
        food_count: 3,
        ..prefs(10)
    };
    let mut game = Game::new(prefs).unwrap();

    for _ in 0..300 {
        if game.is_over() {
            break;
        }
        game.tick().unwrap();
        let body = &game.snake().body;
        assert!(body.is_chain_intact(game.board_dim()));
        assert!(game.food().positions().all(|pos| !body.occupies(pos) || pos == body.head().pos));
    }

    assert!(game.stats().food_eaten >= 5, "{:?}", game.stats());
}

#[test]
fn circling_snake_bites_itself_once_long_enough() {
    // grows by 3 on the first tick, then turns in a tight square
    let schedule = SpawnScheduleBuilder::new().spawn(GridPoint::new(5, 3), 3).build();
    let prefs = Prefs {
        controller: Template::Programmed(move_sequence![
            turn(Dir::R),
            wait(2),
            turn(Dir::D),
            turn(Dir::L),
            turn(Dir::U),
        ]),
        ..prefs(6)
    };
    let mut game = Game::with_spawn_policy(prefs, SpawnPolicy::scheduled(1, schedule)).unwrap();

    let mut outcomes = vec![];
    while !game.is_over() {
        outcomes.push(game.tick().unwrap());
    }

    assert!(matches!(outcomes[0], TickOutcome::Ate { .. }));
    assert!(matches!(
        outcomes.last(),
        Some(TickOutcome::Crashed { cause: CrashCause::Itself, .. })
    ));
    assert!(matches!(game.state(), GameState::Lost { cause: CrashCause::Itself, .. }));
    assert_eq!(game.stats().max_len, 5);
}

#[test]
fn solid_walls_end_the_game() {
    let prefs = Prefs {
        boundary: Boundary::Solid,
        food_count: 0,
        ..prefs(3)
    };
    let mut game = Game::new(prefs).unwrap();
    // the head starts on the right edge of a 3x3 board
    assert_eq!(game.snake().head().pos, GridPoint::new(2, 1));
    assert!(matches!(
        game.tick().unwrap(),
        TickOutcome::Crashed { cause: CrashCause::Wall, .. }
    ));
}

#[test]
fn wrapping_board_never_ends_without_turns() {
    let mut game = Game::new(Prefs { food_count: 0, ..prefs(3) }).unwrap();
    for _ in 0..30 {
        assert_eq!(game.tick().unwrap(), TickOutcome::Moved);
    }
    assert_eq!(game.snake().len(), 2);
}

#[test]
fn filling_the_board_wins() {
    // on a 3x3 board the first bite is worth 7 segments, the head then
    // walks through every free cell while the tail stays put
    let schedule = SpawnScheduleBuilder::new().spawn(GridPoint::new(0, 1), 7).build();
    let prefs = Prefs {
        controller: Template::Programmed(move_sequence![
            turn(Dir::R),
            turn(Dir::U),
            wait(1),
            turn(Dir::R),
            wait(1),
            turn(Dir::D),
            turn(Dir::L),
            turn(Dir::D),
        ]),
        ..prefs(3)
    };
    let mut game = Game::with_spawn_policy(prefs, SpawnPolicy::scheduled(1, schedule)).unwrap();

    let mut outcomes = vec![];
    while !game.is_over() {
        outcomes.push(game.tick().unwrap());
    }
    assert_eq!(outcomes.len(), 8);
    assert!(matches!(outcomes[0], TickOutcome::Ate { .. }));
    assert_eq!(outcomes.last(), Some(&TickOutcome::Won));
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.snake().len(), 9);
    assert_eq!(game.snake().head().pos, GridPoint::new(1, 1));
}

#[test]
fn food_on_the_last_free_cell_is_not_a_win() {
    // same walk as above, but the first bite is worth 6 and the second
    // food lands on the cell the head reaches last
    let schedule = SpawnScheduleBuilder::new()
        .spawn(GridPoint::new(0, 1), 6)
        .spawn(GridPoint::new(1, 1), 1)
        .build();
    let prefs = Prefs {
        controller: Template::Programmed(move_sequence![
            turn(Dir::R),
            turn(Dir::U),
            wait(1),
            turn(Dir::R),
            wait(1),
            turn(Dir::D),
            turn(Dir::L),
            turn(Dir::D),
        ]),
        ..prefs(3)
    };
    let mut game = Game::with_spawn_policy(prefs, SpawnPolicy::scheduled(1, schedule)).unwrap();

    for _ in 0..7 {
        game.tick().unwrap();
    }
    assert_eq!(game.snake().len(), 8);
    assert_eq!(game.food().len(), 1);
    assert_eq!(game.free_cells(), 0);
    assert_eq!(game.state(), GameState::Playing);

    // eating it frees the tail cell, the next step fills it
    assert!(matches!(game.tick().unwrap(), TickOutcome::Ate { .. }));
    assert_eq!(game.snake().len(), 8);
    assert_eq!(game.tick().unwrap(), TickOutcome::Won);
    assert_eq!(game.snake().len(), 9);
}

#[test]
fn clock_drives_the_game() {
    let mut game = Game::new(Prefs {
        tick_interval: Duration::from_millis(2),
        ..prefs(8)
    })
    .unwrap();
    let clock = Clock::start(game.prefs().tick_interval);

    game.direction_tapped(Dir::U);
    for tick in clock.ticks().take(4) {
        game.tick().unwrap();
        assert_eq!(game.stats().ticks, tick);
    }
    assert_eq!(game.snake().head().pos.x, 5);
}
