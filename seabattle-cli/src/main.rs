// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use seabattle::{
    random_board, random_target, CannotShootReason, Coordinate, Game, ShotOutcome, Side,
};

/// Horizontal rule between turns, matching the board width.
const RULE: &str = "--------------------";

fn main() -> io::Result<()> {
    let matches = App::new("Sea Battle")
        .version("1.0")
        .about("Simple command line sea battle game against a random gunner.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first-player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for board generation and computer targeting")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = match matches.value_of("seed") {
        // The validator already checked that the value parses.
        Some(seed) => StdRng::seed_from_u64(seed.parse().unwrap()),
        None => StdRng::from_entropy(),
    };

    greet();
    let human = choose_side(&matches, &mut rng, &mut input)?;
    let computer = human.opponent();

    let human_board = random_board(&mut rng);
    let mut computer_board = random_board(&mut rng);
    computer_board.set_hidden(true);

    // P1 takes the first turn, so the boards go in by who shoots first.
    let mut game = match human {
        Side::P1 => Game::new(human_board, computer_board),
        Side::P2 => Game::new(computer_board, human_board),
    };

    let winner = play(&mut game, human, computer, &mut rng, &mut input)?;
    println!("{}", RULE);
    if winner == human {
        println!("You win!");
    } else {
        println!("Computer wins!");
    }
    Ok(())
}

/// Print the greeting banner and the input format reminder.
fn greet() {
    println!("{}", RULE);
    println!("     Welcome to     ");
    println!("     Sea Battle     ");
    println!("{}", RULE);
    println!(" input format: r c  ");
    println!("  r - row number    ");
    println!("  c - column number ");
}

/// Choose which [`Side`] the human plays based on either args or cli
/// input. The chosen side shoots first.
fn choose_side<B: BufRead>(
    matches: &ArgMatches,
    rng: &mut StdRng,
    input: &mut InputReader<B>,
) -> io::Result<Side> {
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => Side::P1,
            "computer" | "bot" => Side::P2,
            "random" | "rand" => rng.gen(),
            _ => unreachable!(),
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::P1),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::P2),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Run the alternating-turn loop until one board is defeated. Returns the
/// winning side.
fn play(
    game: &mut Game,
    human: Side,
    computer: Side,
    rng: &mut StdRng,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<Side> {
    loop {
        println!("{}", RULE);
        println!("Your board:");
        println!("{}", game.board(human));
        println!("{}", RULE);
        println!("Computer's board:");
        println!("{}", game.board(computer));
        println!("{}", RULE);
        if game.current() == human {
            println!("Your move!");
            human_turn(game, input)?;
        } else {
            println!("Computer's move!");
            computer_turn(game, rng);
        }
        if let Some(winner) = game.winner() {
            return Ok(winner);
        }
    }
}

/// Take one human turn: read targets until a shot resolves. Rejected
/// shots are reported and the prompt repeats with a fresh target.
fn human_turn(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    /// Matcher for a shot target: two 1-indexed numbers.
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<row>[0-9]+)\s+(?P<col>[0-9]+)$").unwrap());

    loop {
        let target = input.read_input("Your shot:", |line| match TARGET.captures(line) {
            Some(captures) => {
                let row = parse_index(captures.name("row").unwrap().as_str());
                let col = parse_index(captures.name("col").unwrap().as_str());
                match (row, col) {
                    (Some(row), Some(col)) => Some(Coordinate::new(row, col)),
                    _ => {
                        println!("Rows and columns are numbered from 1.");
                        None
                    }
                }
            }
            None => {
                println!("Enter two numbers: row and column!");
                None
            }
        })?;
        match game.fire(target) {
            Ok(outcome) => {
                report_outcome(outcome);
                return Ok(());
            }
            Err(reason) => report_rejection(reason),
        }
    }
}

/// Take one computer turn: draw random targets until a shot resolves,
/// announcing each attempt the way a player would call it out.
fn computer_turn(game: &mut Game, rng: &mut StdRng) {
    loop {
        let target = random_target(rng);
        println!("Computer fires: {} {}", target.row + 1, target.col + 1);
        match game.fire(target) {
            Ok(outcome) => {
                report_outcome(outcome);
                return;
            }
            Err(reason) => report_rejection(reason),
        }
    }
}

/// Convert a 1-indexed input number to a 0-indexed coordinate component.
fn parse_index(token: &str) -> Option<usize> {
    token.parse::<usize>().ok()?.checked_sub(1)
}

fn report_outcome(outcome: ShotOutcome) {
    match outcome {
        ShotOutcome::Miss => println!("Miss."),
        ShotOutcome::Hit => println!("Ship damaged!"),
        ShotOutcome::Sunk => println!("Ship destroyed!"),
    }
}

fn report_rejection(reason: CannotShootReason) {
    println!("{}", reason);
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns
    /// `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a
    /// line. Exits cleanly when input runs out.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
