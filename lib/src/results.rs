use std::fmt;
use std::io;

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// The result of a single word guess.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GuessResult {
    pub guess: Box<str>,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl GuessResult {
    /// Returns `true` iff every letter in the guess was in the correct location.
    pub fn is_winning(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

/// Where a game stands after zero or more guesses.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Indicates that an error occurred while loading words or playing a game.
#[derive(Debug)]
pub enum WordleError {
    /// Indicates that the dictionary source could not be read.
    DictionaryIo(io::Error),
    /// Indicates that the dictionary source is missing a word list or is otherwise not a valid
    /// two-list dictionary.
    MalformedDictionary(serde_json::Error),
    /// Indicates that no answers of the given length remained after filtering the dictionary.
    EmptyDictionary(usize),
    /// Indicates that a word's length did not match the expected word length.
    WordLength { expected: usize, actual: usize },
    /// Indicates that the guessed word is in neither the answers nor the allowed-guesses list.
    InvalidGuess(Box<str>),
    /// Indicates that the game already ended with the given status.
    SessionFinished(GameStatus),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::DictionaryIo(err) => {
                write!(f, "failed to read the dictionary source: {}", err)
            }
            WordleError::MalformedDictionary(err) => {
                write!(f, "the dictionary source is not a two-list dictionary: {}", err)
            }
            WordleError::EmptyDictionary(word_length) => {
                write!(f, "the dictionary has no answers of length {}", word_length)
            }
            WordleError::WordLength { expected, actual } => {
                write!(f, "expected a word of length {}, but got {}", expected, actual)
            }
            WordleError::InvalidGuess(word) => write!(f, "'{}' is not in the word list", word),
            WordleError::SessionFinished(status) => {
                let outcome = match status {
                    GameStatus::Won => "won",
                    GameStatus::Lost => "lost",
                    GameStatus::InProgress => "in progress",
                };
                write!(f, "the game is already over ({})", outcome)
            }
        }
    }
}

impl std::error::Error for WordleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordleError::DictionaryIo(err) => Some(err),
            WordleError::MalformedDictionary(err) => Some(err),
            _ => None,
        }
    }
}
