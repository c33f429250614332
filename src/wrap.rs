use super::*;

/// Greedily fills lines of at most `width` display columns. A word wider
/// than `width` gets a line of its own.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut line = String::new();

  for word in text.split_whitespace() {
    if !line.is_empty() && line.width() + 1 + word.width() > width {
      lines.push(std::mem::take(&mut line));
    }

    if !line.is_empty() {
      line.push(' ');
    }

    line.push_str(word);
  }

  if !line.is_empty() {
    lines.push(line);
  }

  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_text_fits_one_line() {
    assert_eq!(wrap("Simplicity is the soul of efficiency.", 70), [
      "Simplicity is the soul of efficiency."
    ]);
  }

  #[test]
  fn breaks_at_width() {
    assert_eq!(wrap("aaa bbb ccc", 7), ["aaa bbb", "ccc"]);
    assert_eq!(wrap("aaa bbb ccc", 6), ["aaa", "bbb", "ccc"]);
  }

  #[test]
  fn long_word_gets_own_line() {
    assert_eq!(wrap("a abcdefghij b", 4), ["a", "abcdefghij", "b"]);
  }

  #[test]
  fn collapses_whitespace() {
    assert_eq!(wrap("  one \t two  ", 70), ["one two"]);
  }

  #[test]
  fn empty_text() {
    assert!(wrap("", 70).is_empty());
    assert!(wrap("   ", 70).is_empty());
  }

  #[test]
  fn lines_never_exceed_width() {
    for sentence in corpus::SENTENCES {
      for line in wrap(sentence, 20) {
        assert!(line.width() <= 20, "{line:?}");
      }
    }
  }

  #[test]
  fn counts_display_width() {
    assert_eq!(wrap("perfect — keep", 9), ["perfect —", "keep"]);
  }
}
