use std::time::Duration;

use log::{error, info};

use grid_snake::error::{ErrorConversion, Result};
use grid_snake::game::{Clock, Game, GameState, Prefs, TickOutcome};
use grid_snake::snake_control::Template;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

// autopilot demo, the board is printed after every tick
fn run() -> Result {
    let prefs = Prefs {
        field_size: 12,
        tick_interval: Duration::from_millis(120),
        food_count: 2,
        controller: Template::BreadthFirst,
        ..Prefs::default()
    };

    let mut game = Game::new(prefs).with_trace_step("run")?;
    let clock = Clock::start(game.prefs().tick_interval);

    print!("\x1b[?25l");
    for _ in clock.ticks() {
        let outcome = game.tick().with_trace_step("run")?;
        println!("\x1b[2J\x1b[1;1H{}", game);
        if matches!(outcome, TickOutcome::Crashed { .. } | TickOutcome::Won) {
            break;
        }
    }
    println!("\x1b[?25h");

    let stats = game.stats();
    match game.state() {
        GameState::Won => info!("won in {} ticks", stats.ticks),
        GameState::Lost { cause, .. } => info!(
            "lost ({:?}) after {} ticks, ate {} times, longest {}",
            cause, stats.ticks, stats.food_eaten, stats.max_len
        ),
        GameState::Playing => {}
    }
    Ok(())
}
