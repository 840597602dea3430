use crate::cli::Cli;
use crate::errors::TxtStatResult;
use crate::input::{self, InputSource};
use crate::report;
use crate::stats::TextStats;
use crate::utils::config::Config;
use std::io::{Read, Write};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The report was printed (and written, if asked).
    Reported,
    /// Nothing to read: no `--file` and stdin is a terminal.
    NoInput,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Reported => 0,
            Outcome::NoInput => 1,
        }
    }
}

/// Run read -> compute -> format -> print -> optional write.
pub fn handle<R: Read, W: Write>(
    cli: Cli,
    config: &Config,
    stdin: R,
    stdin_is_terminal: bool,
    stdout: W,
) -> TxtStatResult<Outcome> {
    let source = InputSource::from_arg(cli.file);

    let Some(input) = input::resolve(&source, stdin, stdin_is_terminal, config)? else {
        tracing::info!("No input provided. Use --file or pipe text into the program.");
        return Ok(Outcome::NoInput);
    };

    let stats = TextStats::compute(&input.text);
    let text = report::format_report(&input.label, &stats);
    report::emit(&text, cli.output.as_deref(), stdout)?;

    Ok(Outcome::Reported)
}

#[cfg(test)]
fn cli(file: Option<&std::path::Path>, output: Option<&std::path::Path>) -> Cli {
    Cli {
        file: file.map(Into::into),
        output: output.map(Into::into),
        verbose: false,
        config_dir: None,
    }
}

#[test]
fn handle_reports_file_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("report.txt");
    std::fs::write(&input, "hello world\nfoo\n").unwrap();

    let mut out = Vec::new();
    let outcome = handle(
        cli(Some(&input), Some(&output)),
        &Config::default(),
        std::io::empty(),
        true,
        &mut out,
    )
    .unwrap();

    let expected = format!(
        "Source: {}\nLines:  2\nWords:  3\nChars:  16\n",
        input.display()
    );
    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{expected}\n"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn handle_missing_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.txt");

    let mut out = Vec::new();
    let err = handle(
        cli(Some(&dir.path().join("absent.txt")), Some(&output)),
        &Config::default(),
        std::io::empty(),
        false,
        &mut out,
    )
    .unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(out.is_empty());
    assert!(!output.exists());
}

#[test]
fn handle_interactive_stdin_is_no_input() {
    let mut out = Vec::new();
    let outcome = handle(
        cli(None, None),
        &Config::default(),
        std::io::empty(),
        true,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::NoInput);
    assert_eq!(outcome.exit_code(), 1);
    assert!(out.is_empty());
}

#[test]
fn handle_piped_stdin_is_labelled_stdin() {
    let mut out = Vec::new();
    let outcome = handle(
        cli(None, None),
        &Config::default(),
        std::io::Cursor::new("one two\nthree"),
        false,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Source: stdin\nLines:  2\nWords:  3\nChars:  13\n\n"
    );
}
