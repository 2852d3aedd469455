mod game_mode;
mod input;
mod render;
mod session;

use engine::log;
use engine::logger::init_logger;

use game_mode::GameMode;

fn main() {
    init_logger(None);

    println!(
        "
Modes of play available:

    hh: Human vs. Human
    ha: Human vs. Engine
    ah: Engine vs. Human - the engine makes the first move
    aa: Engine against itself"
    );

    let mode = loop {
        let line = input::prompt("\nEnter preferred mode of play (e.g., aa): ");
        match GameMode::from_code(line.trim()) {
            Some(mode) => break mode,
            None => println!("\nInvalid option entered. Try again."),
        }
    };

    log!("starting game: mode={:?}", mode);
    session::run_game(mode);
}
