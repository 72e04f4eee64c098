use clap::Parser;
use clap_verbosity_flag::Verbosity;
use minado_core::GameEngine;
use rand::prelude::*;

use printer::{PrettyPrinter, Printer, SimplePrinter};

mod printer;

/// Random-move Minesweeper demo: the game plays against itself and prints the
/// board through a randomly chosen printer after every accepted move.
#[derive(Parser, Debug)]
#[command(name = "minado", version, about)]
struct Args {
    /// Board width
    #[arg(long, default_value_t = 20)]
    width: usize,
    /// Board height
    #[arg(long, default_value_t = 20)]
    height: usize,
    /// Number of mines
    #[arg(long, default_value_t = 50)]
    mines: usize,
    /// Mine placement seed (0 picks a random one)
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let mut rng = SmallRng::from_os_rng();
    let seed = if args.seed == 0 { rng.random() } else { args.seed };
    log::info!("Mine placement seed: {}", seed);

    let mut game = GameEngine::new(args.width, args.height, args.mines, seed);
    let (width, height) = game.size();

    while game.still_playing() {
        // Moves are drawn in bounds, so only the game-over error can occur;
        // the loop condition handles that on the next pass.
        let revealed = game
            .reveal((rng.random_range(0..width), rng.random_range(0..height)))
            .is_ok_and(|outcome| outcome.has_update());
        let flagged = game
            .flag((rng.random_range(0..width), rng.random_range(0..height)))
            .is_ok_and(|outcome| outcome.has_update());

        if revealed || flagged {
            if rng.random_bool(0.5) {
                SimplePrinter.show(game.board_state(false));
            } else {
                PrettyPrinter.show(game.board_state(false));
            }
        }
    }

    println!("Game over!");
    if game.victory() {
        println!("You won!");
    } else {
        println!("You lost!");
        println!("Mines flagged: {}", game.flagged_count());
        println!("The mines were:");
        PrettyPrinter.show(game.board_state(true));
    }
}
