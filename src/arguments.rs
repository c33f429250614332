use {super::*, session::Session};

#[derive(Debug, Parser)]
#[clap(about = "Measure how fast and how accurately you retype a sample sentence")]
pub(crate) struct Arguments {
  /// Column width used to wrap the sample sentence.
  #[clap(long, default_value = "70", value_parser = clap::value_parser!(u16).range(1..))]
  width: u16,
  /// Seed for sentence selection, for reproducible sessions.
  #[clap(long)]
  seed: Option<u64>,
  /// Disable coloured output.
  #[clap(long)]
  plain: bool,
}

impl Arguments {
  fn color(&self) -> bool {
    !self.plain && env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
  }

  pub(crate) fn run(self) -> Result {
    let rng = match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

    log::debug!("starting session with seed {:?}", self.seed);

    let session = Session {
      color: self.color(),
      rng,
      width: self.width.into(),
    };

    session.run(&mut io::stdin().lock(), &mut io::stdout().lock())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let arguments = Arguments::try_parse_from(["typespeed"]).unwrap();

    assert_eq!(arguments.width, 70);
    assert_eq!(arguments.seed, None);
    assert!(!arguments.plain);
  }

  #[test]
  fn all_options() {
    let arguments =
      Arguments::try_parse_from(["typespeed", "--width", "40", "--seed", "7", "--plain"]).unwrap();

    assert_eq!(arguments.width, 40);
    assert_eq!(arguments.seed, Some(7));
    assert!(arguments.plain);
    assert!(!arguments.color());
  }

  #[test]
  fn zero_width_is_rejected() {
    assert!(Arguments::try_parse_from(["typespeed", "--width", "0"]).is_err());
  }
}
