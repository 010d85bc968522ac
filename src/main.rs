use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::{
    board::{Board, Player},
    detector::{self, GameState},
    error::MoveError,
    search::Searcher,
    WIDTH,
};

mod display;

const HUMAN: Player = Player::PlayerOne;
const COMPUTER: Player = Player::PlayerTwo;

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against the computer")]
struct Cli {
    /// Let the computer make the opening move
    #[arg(long)]
    computer_first: bool,

    /// Log level for engine diagnostics: error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Reads one line from stdin, `None` on end of input
fn read_line(stdin: &Stdin) -> Result<Option<String>> {
    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        print!("{} y/n: ", question);
        stdout().flush()?;
        let buffer = match read_line(stdin)? {
            Some(buffer) => buffer,
            None => return Ok(false),
        };
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Plays one game, returning `false` if the input ran out before it finished
fn play_game(stdin: &Stdin, computer_first: bool) -> Result<bool> {
    let mut board = Board::new();
    let mut searcher = Searcher::new(COMPUTER);
    let mut human_turn = !computer_first;

    loop {
        display::display(&board)?;

        match detector::state(&board) {
            GameState::Playing => {}
            GameState::PlayerOneWin => {
                println!("Player wins!");
                return Ok(true);
            }
            GameState::PlayerTwoWin => {
                println!("Computer wins!");
                return Ok(true);
            }
            GameState::Draw => {
                println!("Draw!");
                return Ok(true);
            }
        }

        if human_turn {
            print!("Move input (1-{}) > ", WIDTH);
            stdout().flush()?;
            let input_str = match read_line(stdin)? {
                Some(input_str) => input_str,
                None => return Ok(false),
            };

            let column = match input_str.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) => column - 1,
                _ => {
                    println!("Invalid column: {}", input_str.trim());
                    continue;
                }
            };

            match board.play_checked(column, HUMAN) {
                Ok(_) => {}
                Err(MoveError::ColumnFull { .. }) => {
                    println!("Column {} is full", column + 1);
                    continue;
                }
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            }
        } else {
            println!("Computer is thinking...");
            stdout().flush()?;

            let (column, value) = searcher
                .choose_move(&board)
                .ok_or_else(|| anyhow!("computer has no move on a live board"))?;
            board.play_checked(column, COMPUTER)?;
            println!("Computer plays column {} (evaluation {})", column + 1, value);
        }

        human_turn = !human_turn;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .parse::<log::Level>()
        .map_err(|_| anyhow!("unknown log level '{}'", cli.log_level))?;
    simple_logger::init_with_level(level)
        .map_err(|err| anyhow!("failed to set up logging: {}", err))?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut games = 0;
    loop {
        games += 1;
        info!("starting game {}", games);

        if !play_game(&stdin, cli.computer_first)? {
            break;
        }
        if !ask_yes_no(&stdin, "Play again?")? {
            break;
        }
    }
    Ok(())
}
