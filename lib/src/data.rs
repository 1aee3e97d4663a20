use crate::results::WordleError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::sync::Arc;

/// The word length used when no other length is configured.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// The raw two-list dictionary record as it appears in the data source.
#[derive(Debug, Deserialize)]
struct RawDictionary {
    answers: Vec<String>,
    allowed: Vec<String>,
}

/// Contains all the possible words for Wordle games of one word length.
///
/// Words come from two lists: `answers`, which are eligible to be drawn as the secret, and
/// `allowed`, which may only be guessed. Every retained word is lower case and exactly
/// `word_length` letters long.
#[derive(Debug)]
pub struct WordSet {
    answers: Vec<Arc<str>>,
    valid_guesses: HashSet<Arc<str>>,
    word_length: usize,
}

impl WordSet {
    /// Constructs a new `WordSet` by reading a JSON record with `answers` and `allowed` word
    /// lists from the given reader.
    ///
    /// Words whose length differs from `word_length` are dropped. Each word is trimmed and
    /// converted to lower case.
    pub fn from_reader<R: Read>(reader: R, word_length: usize) -> Result<Self, WordleError> {
        let raw: RawDictionary = serde_json::from_reader(reader).map_err(|err| {
            if err.is_io() {
                WordleError::DictionaryIo(err.into())
            } else {
                WordleError::MalformedDictionary(err)
            }
        })?;
        Ok(Self::from_word_lists(raw.answers, raw.allowed, word_length))
    }

    /// Constructs a new `WordSet` from in-memory answer and allowed-guess lists.
    ///
    /// Duplicate answers are collapsed so that each distinct word is equally likely to be drawn
    /// by [`WordSet::sample_secret`].
    pub fn from_word_lists<A, G>(
        answers: impl IntoIterator<Item = A>,
        allowed: impl IntoIterator<Item = G>,
        word_length: usize,
    ) -> Self
    where
        A: AsRef<str>,
        G: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut answer_list: Vec<Arc<str>> = Vec::new();
        for word in answers {
            if let Some(word) = normalized_word(word.as_ref(), word_length) {
                if seen.insert(Arc::clone(&word)) {
                    answer_list.push(word);
                }
            }
        }
        // Answers are always guessable; the allowed list only adds to them.
        let mut valid_guesses = seen;
        for word in allowed {
            if let Some(word) = normalized_word(word.as_ref(), word_length) {
                valid_guesses.insert(word);
            }
        }
        debug!(
            "loaded {} answers and {} guessable words of length {}",
            answer_list.len(),
            valid_guesses.len(),
            word_length
        );
        WordSet {
            answers: answer_list,
            valid_guesses,
            word_length,
        }
    }

    /// Draws a secret word uniformly at random from the answers.
    pub fn sample_secret<R: Rng>(&self, rng: &mut R) -> Result<Arc<str>, WordleError> {
        self.answers
            .choose(rng)
            .map(Arc::clone)
            .ok_or(WordleError::EmptyDictionary(self.word_length))
    }

    /// Returns `true` iff the given word may be guessed. Comparison ignores case.
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.valid_guesses.contains(word.to_lowercase().as_str())
    }

    /// Returns the length of every word in this set.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the number of distinct answers.
    pub fn num_answers(&self) -> usize {
        self.answers.len()
    }

    /// Returns the number of distinct guessable words, answers included.
    pub fn num_valid_guesses(&self) -> usize {
        self.valid_guesses.len()
    }
}

fn normalized_word(word: &str, word_length: usize) -> Option<Arc<str>> {
    let word = word.trim().to_lowercase();
    if word.chars().count() != word_length {
        return None;
    }
    Some(Arc::from(word.as_str()))
}
