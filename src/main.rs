use std::{thread, time::Duration};

use anyhow::Result;
use log::{debug, info};

use crate::{
    args::resolve,
    gol::LifeBoard,
    random::RandomSource,
    render::{curses::CursesRender, Renderer},
};

mod args;
mod frame;
mod gol;
mod random;
mod render;

/// Runs render, advance, sleep until `generations` is reached, or forever
/// when there is no bound. Returns how many generations were run.
fn play<R: Renderer + ?Sized>(
    board: &mut LifeBoard,
    sink: &mut R,
    delay: Duration,
    generations: Option<u64>,
) -> Result<u64> {
    let start = board.generation();
    while generations.map_or(true, |g| board.generation() - start < g) {
        board.render(sink)?;
        let census = board.advance_generation();
        debug!(
            "generation {}: population {} (+{} -{})",
            board.generation(),
            census.population,
            census.births,
            census.deaths
        );
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(board.generation() - start)
}

fn main() -> Result<()> {
    env_logger::init();
    // Unusable arguments show the usage text and exit cleanly before any
    // simulation state exists.
    let config = match resolve(std::env::args_os()) {
        Ok(config) => config,
        Err(usage) => {
            print!("{}", usage);
            std::process::exit(0);
        }
    };
    info!("starting with {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => RandomSource::with_seed(seed),
        None => RandomSource::from_time(),
    };
    info!("seed {}", rng.seed());

    // The terminal size check comes before any board is allocated.
    let sink = CursesRender::open(config.width, config.height)?;
    let mut sink = scopeguard::guard(sink, CursesRender::close);

    let mut board = LifeBoard::new(config.width, config.height, &mut rng);
    info!(
        "board {}x{}, initial population {}",
        board.width(),
        board.height(),
        board.board().population()
    );

    let ran = play(&mut board, &mut *sink, config.delay, config.generations)?;
    drop(sink);
    info!("finished after {} generations", ran);
    Ok(())
}
