use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_engine::*;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Write;

/// Simple program to play Wordle-style games in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a JSON file with `answers` and `allowed` word lists.
    #[arg(short = 'f', long)]
    dictionary_file: String,

    /// How many letters each word has.
    #[arg(long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// How many guesses the player gets per game.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Seeds the secret-word selection, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let words_reader = BufReader::new(File::open(&args.dictionary_file)?);
    let word_set = match WordSet::from_reader(words_reader, args.word_length) {
        Ok(word_set) => word_set,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} possible answers and {} guessable words.",
        word_set.num_answers(),
        word_set.num_valid_guesses()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        play_one_game(&word_set, args.max_attempts, &mut rng)?;

        print!("Another game? [y/N] ");
        io::stdout().flush()?;
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        if buffer.trim() != "y" {
            break;
        }
    }

    Ok(())
}

fn play_one_game(word_set: &WordSet, max_attempts: u32, rng: &mut StdRng) -> io::Result<()> {
    let mut session = match GameSession::with_max_attempts(word_set, max_attempts, rng) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    while session.status() == GameStatus::InProgress {
        print!("Guess #{}: ", session.history().len() + 1);
        io::stdout().flush()?;
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;

        match session.submit_guess(buffer.trim()) {
            Ok(record) => println!("          {}", render_result(&record)),
            Err(WordleError::InvalidGuess(word)) => {
                println!("'{}' is not in the word list. Try again.", word);
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
    }

    match session.status() {
        GameStatus::Won => println!("You won in {} guesses!", session.history().len()),
        GameStatus::Lost => println!(
            "Out of guesses! The word was '{}'.",
            session.secret().to_uppercase()
        ),
        GameStatus::InProgress => {}
    }

    Ok(())
}

fn render_result(record: &GuessResult) -> String {
    let mut line = String::new();
    for (letter, result) in record.guess.chars().zip(record.results.iter()) {
        let color = match result {
            LetterResult::Correct => "\x1b[42m",
            LetterResult::PresentNotHere => "\x1b[43m",
            LetterResult::NotPresent => "\x1b[40m",
        };
        line.push_str(&format!(
            "{} {} \x1b[0m",
            color,
            letter.to_uppercase()
        ));
    }
    line
}
