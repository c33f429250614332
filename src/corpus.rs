use super::*;

pub(crate) const SENTENCES: &[&str] = &[
  "The quick brown fox jumps over the lazy dog.",
  "Practice makes perfect — keep typing and improving every day!",
  "Typing speed is measured in words per minute, abbreviated as WPM.",
  "Simplicity is the soul of efficiency.",
  "Never stop learning; small consistent steps lead to big progress.",
];

pub(crate) fn choose(rng: &mut impl Rng) -> &'static str {
  SENTENCES[rng.gen_range(0..SENTENCES.len())]
}
