use {
  crate::{
    arguments::Arguments,
    report::Report,
    statistics::{Difference, Statistics},
    trial::Trial,
  },
  anyhow::bail,
  clap::Parser,
  crossterm::{
    queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
  },
  rand::{Rng, SeedableRng, rngs::StdRng},
  std::{
    env,
    io::{self, BufRead, IsTerminal, Write},
    process,
    time::Instant,
  },
  unicode_width::UnicodeWidthStr,
};

mod arguments;
mod corpus;
mod report;
mod session;
mod statistics;
mod trial;
mod wrap;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
