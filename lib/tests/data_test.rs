#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_engine::*;
use std::io::Cursor;

#[test]
fn word_set_from_reader_succeeds() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from(
        r#"{"answers": ["hello", "crane"], "allowed": ["lulls", "react"]}"#,
    ));

    let word_set = WordSet::from_reader(cursor, DEFAULT_WORD_LENGTH)?;

    assert_eq!(word_set.num_answers(), 2);
    assert_eq!(word_set.num_valid_guesses(), 4);
    assert_eq!(word_set.word_length(), 5);
    Ok(())
}

#[test]
fn word_set_from_reader_filters_by_length() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from(
        r#"{"answers": ["hello", "hi", "wordle"], "allowed": ["crane", "cranes"]}"#,
    ));

    let word_set = WordSet::from_reader(cursor, 5)?;

    assert_eq!(word_set.num_answers(), 1);
    assert!(word_set.is_valid_guess("crane"));
    assert!(!word_set.is_valid_guess("cranes"));
    assert!(!word_set.is_valid_guess("hi"));
    Ok(())
}

#[test]
fn word_set_from_reader_missing_list_fails() {
    let cursor = Cursor::new(String::from(r#"{"answers": ["hello"]}"#));

    assert_matches!(
        WordSet::from_reader(cursor, 5),
        Err(WordleError::MalformedDictionary(_))
    );
}

#[test]
fn word_set_from_reader_non_string_entries_fail() {
    let cursor = Cursor::new(String::from(r#"{"answers": [5], "allowed": []}"#));

    assert_matches!(
        WordSet::from_reader(cursor, 5),
        Err(WordleError::MalformedDictionary(_))
    );
}

#[test]
fn word_set_tolerates_duplicate_entries() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from(
        r#"{"answers": ["hello", "hello", "HELLO"], "allowed": ["crane", "crane"]}"#,
    ));

    let word_set = WordSet::from_reader(cursor, 5)?;

    assert_eq!(word_set.num_answers(), 1);
    assert_eq!(word_set.num_valid_guesses(), 2);
    Ok(())
}

#[test]
fn is_valid_guess_ignores_case() {
    let word_set = WordSet::from_word_lists(vec!["hello"], vec!["crane"], 5);

    assert!(word_set.is_valid_guess("HELLO"));
    assert!(word_set.is_valid_guess("hello"));
    assert!(word_set.is_valid_guess("Crane"));
}

#[test]
fn is_valid_guess_rejects_unknown_words() {
    let word_set = WordSet::from_word_lists(vec!["hello"], vec!["crane"], 5);

    assert!(!word_set.is_valid_guess("world"));
    assert!(!word_set.is_valid_guess(""));
}

#[test]
fn sample_secret_draws_from_answers_only() -> Result<(), WordleError> {
    let word_set = WordSet::from_word_lists(vec!["hello"], vec!["crane", "react"], 5);
    let mut rng = StdRng::seed_from_u64(17);

    let secret = word_set.sample_secret(&mut rng)?;

    assert_eq!(secret.as_ref(), "hello");
    Ok(())
}

#[test]
fn sample_secret_is_deterministic_for_a_seed() -> Result<(), WordleError> {
    let word_set = WordSet::from_word_lists(
        vec!["hello", "crane", "react", "abbey", "mesas"],
        Vec::<&str>::new(),
        5,
    );

    let first = word_set.sample_secret(&mut StdRng::seed_from_u64(42))?;
    let second = word_set.sample_secret(&mut StdRng::seed_from_u64(42))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn sample_secret_with_no_answers_fails() {
    let word_set = WordSet::from_word_lists(Vec::<&str>::new(), vec!["crane"], 5);
    let mut rng = StdRng::seed_from_u64(17);

    assert_matches!(
        word_set.sample_secret(&mut rng),
        Err(WordleError::EmptyDictionary(5))
    );
}
