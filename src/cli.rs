use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "txtstat")]
#[command(about = "Simple text statistics tool: counts lines, words and characters")]
#[command(version)]
pub struct Cli {
    /// Input file to read (reads standard input when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the report to this file as well
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration directory
    /// (defaults to $TXTSTAT_CONFIG_DIR, then the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[test]
fn parses_short_and_long_flags() {
    let args = ["txtstat", "-f", "in.txt", "--output", "out.txt", "-v"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.file, Some(PathBuf::from("in.txt")));
    assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    assert!(cli.verbose);
    assert_eq!(cli.config_dir, None);
}

#[test]
fn absent_flags_stay_none() {
    let cli = Cli::try_parse_from(["txtstat"]).unwrap();

    assert_eq!(cli.file, None);
    assert_eq!(cli.output, None);
    assert!(!cli.verbose);
}

#[test]
fn clap_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
