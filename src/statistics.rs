use super::*;

const MAX_DIFFERENCES: usize = 6;

/// A character position where the typed text disagrees with the prompt.
/// `actual` is `None` when the typed text ended before `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Difference {
  pub(crate) actual: Option<char>,
  pub(crate) expected: char,
  pub(crate) position: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Accuracy {
  pub(crate) characters: f64,
  pub(crate) differences: Vec<Difference>,
  pub(crate) words: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: Accuracy,
  pub(crate) wpm_by_chars: f64,
  pub(crate) wpm_by_words: f64,
}

impl Statistics {
  pub(crate) fn new(trial: &Trial) -> Self {
    let (wpm_by_words, wpm_by_chars) = wpm(&trial.typed, trial.elapsed);

    Self {
      accuracy: accuracy(trial.prompt, &trial.typed),
      wpm_by_chars,
      wpm_by_words,
    }
  }
}

/// Words per minute as `(by whitespace tokens, by characters / 5)`.
pub(crate) fn wpm(typed: &str, elapsed: f64) -> (f64, f64) {
  if !(elapsed > 0.0 && elapsed.is_finite()) {
    return (0.0, 0.0);
  }

  let minutes = elapsed / 60.0;

  let words = typed.split_whitespace().count() as f64;
  let characters = typed.chars().count() as f64;

  (words / minutes, (characters / 5.0) / minutes)
}

pub(crate) fn accuracy(prompt: &str, typed: &str) -> Accuracy {
  let expected = prompt.chars().collect::<Vec<char>>();
  let actual = typed.chars().collect::<Vec<char>>();

  let correct_characters = expected
    .iter()
    .zip(&actual)
    .filter(|(expected, actual)| expected == actual)
    .count();

  let prompt_words = prompt.split_whitespace().collect::<Vec<&str>>();

  let correct_words = prompt_words
    .iter()
    .zip(typed.split_whitespace())
    .filter(|(expected, actual)| **expected == *actual)
    .count();

  let differences = expected
    .iter()
    .enumerate()
    .filter_map(|(position, &expected)| {
      let actual = actual.get(position).copied();

      (actual != Some(expected)).then_some(Difference {
        actual,
        expected,
        position,
      })
    })
    .take(MAX_DIFFERENCES)
    .collect();

  Accuracy {
    characters: percentage(correct_characters, expected.len()),
    differences,
    words: percentage(correct_words, prompt_words.len()),
  }
}

fn percentage(correct: usize, total: usize) -> f64 {
  correct as f64 / total.max(1) as f64 * 100.0
}
