use super::*;

/// One attempt at retyping a prompt.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Trial {
  pub(crate) elapsed: f64,
  pub(crate) prompt: &'static str,
  pub(crate) typed: String,
}

/// The untimed first phase of a trial: the prompt is on screen and the
/// user has not yet said they are ready.
#[derive(Debug)]
pub(crate) struct Readiness {
  prompt: &'static str,
}

/// The timed second phase. Exists only once readiness was acknowledged.
#[derive(Debug)]
pub(crate) struct Stopwatch {
  prompt: &'static str,
  start: Instant,
}

impl Readiness {
  pub(crate) fn show(prompt: &'static str, width: usize, output: &mut impl Write) -> Result<Self> {
    writeln!(
      output,
      "\nType the following sentence EXACTLY as shown and press Enter when done:\n"
    )?;

    for line in wrap::wrap(prompt, width) {
      writeln!(output, "{line}")?;
    }

    writeln!(output, "\nPress Enter when you are ready to start...")?;
    output.flush()?;

    Ok(Self { prompt })
  }

  pub(crate) fn wait(self, input: &mut impl BufRead, output: &mut impl Write) -> Result<Stopwatch> {
    read_line(input, "the ready signal")?;

    writeln!(output, "Start typing now:")?;
    output.flush()?;

    Ok(Stopwatch {
      prompt: self.prompt,
      start: Instant::now(),
    })
  }
}

impl Stopwatch {
  pub(crate) fn submit(self, input: &mut impl BufRead) -> Result<Trial> {
    let typed = read_line(input, "the typed sentence")?;

    Ok(Trial {
      elapsed: self.start.elapsed().as_secs_f64(),
      prompt: self.prompt,
      typed,
    })
  }
}

impl Trial {
  pub(crate) fn collect(
    prompt: &'static str,
    width: usize,
    input: &mut impl BufRead,
    output: &mut impl Write,
  ) -> Result<Self> {
    Readiness::show(prompt, width, output)?
      .wait(input, output)?
      .submit(input)
  }
}

/// Reads one line without its terminator. End of input is an error.
pub(crate) fn read_line(input: &mut impl BufRead, waiting_for: &str) -> Result<String> {
  let mut line = String::new();

  if input.read_line(&mut line)? == 0 {
    bail!("input exhausted while waiting for {waiting_for}");
  }

  if line.ends_with('\n') {
    line.pop();

    if line.ends_with('\r') {
      line.pop();
    }
  }

  Ok(line)
}
