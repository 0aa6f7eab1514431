use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use paschalion::{parse_year, YearReport};
use tracing::{debug, warn};

// ANSI: erase display, move cursor to the top-left corner.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Reads one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    Ok((read > 0).then_some(line))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}")?;
    output.flush().context("failed to flush output")
}

/// Interactive loop: ask for a year, print its report, offer to go again.
/// Input that is not a year is reported and asked for again. The loop ends
/// when the user declines another round or the input runs out.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, clear: bool) -> Result<()> {
    loop {
        if clear {
            write!(output, "{CLEAR_SCREEN}")?;
        }
        prompt(output, "Insert a year: ")?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        let year = match parse_year(&line) {
            Ok(year) => year,
            Err(err) => {
                warn!(%err, "rejected input");
                prompt(output, &format!("Wrong! {err}. Press RETURN key to try again"))?;
                if read_line(input)?.is_none() {
                    return Ok(());
                }
                continue;
            }
        };

        debug!(year, "reporting");
        crate::render::write_report(output, &YearReport::for_year(year))?;

        writeln!(output, "\n------------")?;
        prompt(output, "Press 'y' to try again: ")?;
        match read_line(input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            Some(_) => {
                prompt(output, "This ends the program. Press RETURN key to exit.")?;
                read_line(input)?;
                return Ok(());
            }
            None => return Ok(()),
        }
    }
}
