//! goboard: watch two bots play Go against each other.
//!
//! ## Usage
//!
//! - `goboard` - Random bot vs random bot on a 9x9 board
//! - `goboard --size 19 --delay-ms 0 --no-clear` - Fast game, full log
//! - `goboard --seed 3 -vv` - Reproducible game with debug logging

use std::io;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::TypedValueParser;
use log::{LevelFilter, debug, info};

use goboard::agent::{Agent, RandomBot};
use goboard::constants::{DEFAULT_BOARD_SIZE, DEFAULT_MOVE_DELAY_MS, MAX_BOARD_SIZE};
use goboard::game::{GameState, Move};
use goboard::render::{format_board, format_move};
use goboard::types::Player;

/// goboard: a Go rules engine, driven by two random bots
#[derive(Parser)]
#[command(name = "goboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (rows and columns)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE,
          value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64).map(usize::from))]
    size: usize,

    /// Pause between moves, in milliseconds
    #[arg(long, default_value_t = DEFAULT_MOVE_DELAY_MS)]
    delay_ms: u64,

    /// Seed for the bots (black uses the seed, white the seed plus one)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many moves even if the game isn't over
    #[arg(long)]
    max_moves: Option<usize>,

    /// Don't clear the screen between moves
    #[arg(long)]
    no_clear: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose)?;

    let black = random_bot(cli.seed);
    let white = random_bot(cli.seed.map(|seed| seed.wrapping_add(1)));

    let game = bot_v_bot(&cli, black, white)?;

    println!("{}", format_board(game.board()));
    match game.last_move() {
        Some(Move::Resign) => println!("{} resigned", game.next_player().other()),
        _ if game.is_over() => println!("both players passed"),
        _ => println!("stopped after {} moves", game.move_number()),
    }
    Ok(())
}

fn random_bot(seed: Option<u64>) -> Box<dyn Agent> {
    match seed {
        Some(seed) => Box::new(RandomBot::with_seed(seed)),
        None => Box::new(RandomBot::new()),
    }
}

fn bot_v_bot(
    cli: &Cli,
    mut black: Box<dyn Agent>,
    mut white: Box<dyn Agent>,
) -> Result<Rc<GameState>> {
    let mut game = GameState::new_square(cli.size);
    info!("starting {0}x{0} game", cli.size);

    while !game.is_over() {
        if cli.max_moves.is_some_and(|max| game.move_number() >= max) {
            info!("move limit reached");
            break;
        }
        thread::sleep(Duration::from_millis(cli.delay_ms));

        if !cli.no_clear {
            // clear the screen so the board redraws in place
            print!("{}[2J", 27 as char);
        }
        println!("{}", format_board(game.board()));

        let player = game.next_player();
        let bot = match player {
            Player::Black => &mut black,
            Player::White => &mut white,
        };
        let mv = bot.select_move(&game);
        println!("{}", format_move(player, &mv));

        let move_number = game.move_number() + 1;
        game = game
            .try_apply_move(mv)
            .with_context(|| format!("{player} bot chose {mv} at move {move_number}"))?;
        debug!(
            "move {}: {player} {mv}, hash {:#018x}",
            game.move_number(),
            game.board().zobrist_hash()
        );
    }
    Ok(game)
}

fn setup_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("failed to install logger")
}
