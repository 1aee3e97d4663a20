use crate::data::WordSet;
use crate::results::*;
use log::debug;
use rand::Rng;
use std::sync::Arc;

/// The number of guesses a player gets when no other bound is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Determines the result of the given `guess` when applied to the given `secret`.
///
/// Letters are resolved in two passes so that words with repeated letters are scored correctly.
/// The first pass marks every exact match as [`LetterResult::Correct`] and consumes the matched
/// secret letter. Only then does the second pass let each remaining guess letter claim one
/// unconsumed secret letter as [`LetterResult::PresentNotHere`]. Running the passes one letter at
/// a time would let a repeated guess letter take a wrong-position credit that a later exact match
/// still needs.
pub fn get_result_for_guess(secret: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let secret_letters: Vec<char> = secret.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if secret_letters.len() != guess_letters.len() {
        return Err(WordleError::WordLength {
            expected: secret_letters.len(),
            actual: guess_letters.len(),
        });
    }

    let mut results = vec![LetterResult::NotPresent; guess_letters.len()];
    // Secret positions already claimed by a match. Tracking positions, not letter counts, keeps
    // each repeated secret letter independently consumable.
    let mut consumed = vec![false; secret_letters.len()];

    for (index, letter) in guess_letters.iter().enumerate() {
        if secret_letters[index] == *letter {
            results[index] = LetterResult::Correct;
            consumed[index] = true;
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        let available = secret_letters
            .iter()
            .zip(consumed.iter())
            .position(|(secret_letter, used)| secret_letter == letter && !*used);
        if let Some(secret_index) = available {
            results[index] = LetterResult::PresentNotHere;
            consumed[secret_index] = true;
        }
    }

    Ok(GuessResult {
        guess: Box::from(guess),
        results,
    })
}

/// A single playthrough: one secret word and a bounded, ordered sequence of scored guesses.
///
/// The session owns its secret and history exclusively. It starts
/// [`GameStatus::InProgress`] and becomes immutable once it reaches [`GameStatus::Won`] or
/// [`GameStatus::Lost`].
#[derive(Debug)]
pub struct GameSession<'a> {
    words: &'a WordSet,
    secret: Arc<str>,
    history: Vec<GuessResult>,
    max_attempts: u32,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Starts a new game with [`DEFAULT_MAX_ATTEMPTS`] guesses, drawing the secret word with the
    /// given rng.
    pub fn new<R: Rng>(words: &'a WordSet, rng: &mut R) -> Result<GameSession<'a>, WordleError> {
        Self::with_max_attempts(words, DEFAULT_MAX_ATTEMPTS, rng)
    }

    /// Starts a new game that allows up to `max_attempts` guesses. `max_attempts` must be at
    /// least 1.
    pub fn with_max_attempts<R: Rng>(
        words: &'a WordSet,
        max_attempts: u32,
        rng: &mut R,
    ) -> Result<GameSession<'a>, WordleError> {
        debug_assert!(max_attempts > 0);
        let secret = words.sample_secret(rng)?;
        debug!("starting a game with {} attempts", max_attempts);
        Ok(GameSession {
            words,
            secret,
            history: Vec::new(),
            max_attempts,
            status: GameStatus::InProgress,
        })
    }

    /// Scores one guess and advances the game.
    ///
    /// The guess is trimmed and lower-cased before it is checked. A guess that is not in the
    /// word set is rejected with [`WordleError::InvalidGuess`] without consuming an attempt.
    /// Calling this after the game has ended fails with [`WordleError::SessionFinished`].
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<GuessResult, WordleError> {
        if self.status != GameStatus::InProgress {
            return Err(WordleError::SessionFinished(self.status));
        }
        let guess = raw_guess.trim().to_lowercase();
        if !self.words.is_valid_guess(&guess) {
            return Err(WordleError::InvalidGuess(guess.into_boxed_str()));
        }

        let record = get_result_for_guess(&self.secret, &guess)?;
        self.history.push(record.clone());
        if record.is_winning() {
            debug!("game won on guess {}", self.history.len());
            self.status = GameStatus::Won;
        } else if self.history.len() as u32 >= self.max_attempts {
            debug!("game lost after {} guesses", self.history.len());
            self.status = GameStatus::Lost;
        }
        Ok(record)
    }

    /// Returns where the game currently stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns every accepted guess so far, oldest first.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// Returns the word the player is trying to guess.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the maximum number of guesses this game allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns how many guesses the player has left.
    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts - self.history.len() as u32
    }
}
