use super::*;

pub(crate) struct Session<R> {
  pub(crate) color: bool,
  pub(crate) rng: R,
  pub(crate) width: usize,
}

impl<R: Rng> Session<R> {
  pub(crate) fn run(mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result {
    writeln!(output, "Typing Speed & Accuracy Tracker")?;
    writeln!(output, "--------------------------------")?;

    loop {
      let prompt = corpus::choose(&mut self.rng);

      log::debug!("selected prompt {prompt:?}");

      let trial = Trial::collect(prompt, self.width, input, output)?;

      log::info!(
        "trial finished in {:.3}s, {} characters typed",
        trial.elapsed,
        trial.typed.chars().count()
      );

      Report {
        color: self.color,
        trial: &trial,
      }
      .write(output)?;

      if !Self::again(input, output)? {
        break;
      }
    }

    writeln!(output, "Good job — keep practicing!")?;
    output.flush()?;

    Ok(())
  }

  fn again(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "\nTry again? (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();

    if input.read_line(&mut answer)? == 0 {
      log::debug!("input closed at the try again prompt");
      writeln!(output)?;
      return Ok(false);
    }

    let again = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");

    log::debug!("try again answer {:?}, continuing: {again}", answer.trim());

    Ok(again)
  }
}
