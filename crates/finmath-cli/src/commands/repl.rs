//! Interactive calculator session.
//!
//! Reads a command per line, then the formula's values either from the rest of that line or
//! from the next one. Malformed input is reported and the session continues; end of input
//! ends it.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::Settings;
use crate::commands::{evaluate, parse_arguments};
use crate::error::{CliError, CliResult};
use crate::formula::Formula;

const MAIN_PROMPT: &str = "Enter function to execute or help for list or quit to exit";

/// A calculator session over any line-oriented input and output.
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Runs until `quit`, `exit`, or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        info!("session started");

        loop {
            self.prompt(MAIN_PROMPT)?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let mut tokens = line.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };
            let command = command.to_lowercase();

            match command.as_str() {
                "quit" | "exit" => break,
                "help" => self.help()?,
                name => match Formula::from_name(name) {
                    Some(formula) => {
                        let inline: Vec<&str> = tokens.collect();
                        if !self.execute(formula, &inline)? {
                            break;
                        }
                    }
                    None => {
                        warn!(command = name, "unknown command");
                        writeln!(self.output, "{}", CliError::UnknownCommand(name.to_string()))?;
                    }
                },
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Evaluates one formula. Returns `false` if input ended while waiting for values.
    fn execute(&mut self, formula: Formula, inline: &[&str]) -> CliResult<bool> {
        let prompted;
        let tokens: Vec<&str> = if inline.is_empty() {
            self.prompt(&formula.prompt())?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            prompted = line;
            prompted.split_whitespace().collect()
        } else {
            inline.to_vec()
        };

        let result = parse_arguments(formula, &tokens)
            .and_then(|args| evaluate(formula, &args, &self.settings));

        match result {
            Ok(evaluation) => writeln!(self.output, "{}", evaluation.summary())?,
            Err(CliError::Domain(err)) => {
                warn!(command = formula.name(), %err, "domain error");
                writeln!(self.output, "Domain error: {err}")?;
            }
            Err(CliError::Io(err)) => return Err(CliError::Io(err)),
            Err(err) => {
                warn!(command = formula.name(), %err, "rejected input");
                writeln!(self.output, "Incorrect input: {err}")?;
            }
        }

        Ok(true)
    }

    fn help(&mut self) -> CliResult<()> {
        writeln!(
            self.output,
            "Executes various financial math functions. Enter values separated by spaces."
        )?;
        writeln!(self.output, "\tquit, exit: to exit")?;
        writeln!(self.output, "\thelp: to show this list")?;
        for formula in Formula::all() {
            writeln!(
                self.output,
                "\t{}: {} [{}]",
                formula.name(),
                formula.description(),
                formula.params().join(", ")
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> CliResult<()> {
        if !self.settings.quiet {
            writeln!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Reads one line; `None` at end of input. Undecodable lines are reported and read as
    /// blank.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(%err, "unreadable input line");
                writeln!(self.output, "error reading input")?;
                Ok(Some(String::new()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Execute the interactive session on standard input and output.
pub fn execute(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), *settings).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RoundingMode;
    use std::io::Cursor;

    fn run_with(input: &[u8], settings: Settings) -> String {
        let mut output = Vec::new();
        Session::new(Cursor::new(input), &mut output, settings)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn quiet() -> Settings {
        Settings {
            quiet: true,
            ..Settings::default()
        }
    }

    #[test]
    fn test_prompted_values() {
        let transcript = run_with(b"pmt\n350000 360 0.0030208333333333333\nquit\n", Settings::default());
        let lines: Vec<&str> = transcript.lines().collect();

        assert_eq!(lines[0], MAIN_PROMPT);
        assert_eq!(lines[1], "Enter PV, # of periods and rate per period");
        assert_eq!(lines[2], "PMT: 1596.179557 RTC(PMT): 1596.18");
        assert_eq!(lines[3], MAIN_PROMPT);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_inline_values_and_case_insensitive_command() {
        let transcript = run_with(b"PMTFS 5000 500 5 0.07\n", quiet());
        assert!(transcript.starts_with("PMTFS: 747.5"));
        assert!(transcript.trim_end().ends_with("RTC(PMTFS): 747.51"));
    }

    #[test]
    fn test_end_of_input_terminates() {
        assert_eq!(run_with(b"", quiet()), "");
        // Input ends while waiting for values.
        assert_eq!(run_with(b"pmtf\n", quiet()), "");
    }

    #[test]
    fn test_exit_stops_reading() {
        let transcript = run_with(b"exit\nci 1000 2 0.2\n", quiet());
        assert_eq!(transcript, "");
    }

    #[test]
    fn test_malformed_input_continues() {
        let transcript = run_with(
            b"pmtf 5000 5\npmtf 5000 five 0.07\nbogus\n\nci 1000 2 0.2\n",
            quiet(),
        );
        let lines: Vec<&str> = transcript.lines().collect();

        assert_eq!(lines[0], "Incorrect input: pmtf expects 3 values, got 2");
        assert_eq!(lines[1], "Incorrect input: invalid number: \"five\"");
        assert_eq!(lines[2], "unknown command: bogus");
        assert_eq!(lines[3], "CompoundInterest: 1440.000000 RTC(CompoundInterest): 1440.00");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_help_lists_every_formula() {
        let transcript = run_with(b"help\n", quiet());
        for formula in Formula::all() {
            assert!(
                transcript.contains(&format!("\t{}: ", formula.name())),
                "missing {}",
                formula.name()
            );
        }
    }

    #[test]
    fn test_zero_rate_lenient_and_strict() {
        let lenient = run_with(b"pv 1200 180 0\n", quiet());
        assert_eq!(lenient.trim_end(), "PV: NaN RTC(PV): NaN");

        let strict = Settings {
            strict: true,
            ..quiet()
        };
        let transcript = run_with(b"pv 1200 180 0\nfv 1 1 0\n", strict);
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Domain error: PV"));
        assert!(lines[1].starts_with("Domain error: FV"));
    }

    #[test]
    fn test_truncating_rounding() {
        let settings = Settings {
            rounding: RoundingMode::Truncate,
            ..quiet()
        };
        let transcript = run_with(b"rtc 1.119\n", settings);
        assert_eq!(transcript.trim_end(), "RTC: 1.120000 FTC(RTC): 1.12");
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let transcript = run_with(b"\xff\xfe\nci 1000 2 0.2\n", quiet());
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines[0], "error reading input");
        assert!(lines[1].starts_with("CompoundInterest: 1440"));
    }
}
