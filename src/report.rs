use super::*;

pub(crate) struct Report<'a> {
  pub(crate) color: bool,
  pub(crate) trial: &'a Trial,
}

impl Report<'_> {
  pub(crate) fn write(&self, output: &mut impl Write) -> Result {
    let trial = self.trial;
    let statistics = Statistics::new(trial);

    self.paint(output, Style::Heading)?;
    writeln!(output, "\n--- Results ---")?;
    self.paint(output, Style::Reset)?;

    writeln!(output, "Time taken      : {:.2} seconds", trial.elapsed)?;
    writeln!(
      output,
      "Words typed     : {}",
      trial.typed.split_whitespace().count()
    )?;
    writeln!(output, "Characters typed: {}", trial.typed.chars().count())?;
    writeln!(output, "WPM (by words)  : {:.2}", statistics.wpm_by_words)?;
    writeln!(output, "WPM (chars/5)   : {:.2}", statistics.wpm_by_chars)?;
    writeln!(
      output,
      "Char accuracy   : {:.2}%",
      statistics.accuracy.characters
    )?;
    writeln!(output, "Word accuracy   : {:.2}%", statistics.accuracy.words)?;

    let differences = &statistics.accuracy.differences;

    if differences.is_empty() {
      self.paint(output, Style::Good)?;
      writeln!(
        output,
        "Nice! No character-level differences detected in the first compared range."
      )?;
      self.paint(output, Style::Reset)?;
    } else {
      writeln!(output, "\nSample differences (position, expected, you typed):")?;

      self.paint(output, Style::Bad)?;

      for difference in differences {
        writeln!(output, "{}", row(difference))?;
      }

      self.paint(output, Style::Reset)?;
    }

    output.flush()?;

    Ok(())
  }

  fn paint(&self, output: &mut impl Write, style: Style) -> Result {
    if !self.color {
      return Ok(());
    }

    match style {
      Style::Bad => queue!(output, SetForegroundColor(Color::Red))?,
      Style::Good => queue!(output, SetForegroundColor(Color::Green))?,
      Style::Heading => queue!(output, SetAttribute(Attribute::Bold))?,
      Style::Reset => queue!(output, SetAttribute(Attribute::Reset), ResetColor)?,
    }

    Ok(())
  }
}

#[derive(Clone, Copy, Debug)]
enum Style {
  Bad,
  Good,
  Heading,
  Reset,
}

fn row(difference: &Difference) -> String {
  let actual = difference
    .actual
    .map(String::from)
    .unwrap_or_else(|| "<nothing>".into());

  format!(
    "  pos {:3} : expected '{}'  typed '{}'",
    difference.position, difference.expected, actual
  )
}
