use std::path::PathBuf;
use thiserror::Error;

pub type TxtStatResult<T, E = TxtStatError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TxtStatError {
  #[error("File not found: {}", .0.display())]
  NotFound(PathBuf),

  #[error("cannot read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("cannot write report to {}: {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("config error: {0}")]
  Config(#[from] toml::de::Error),

  #[error("other: {0}")]
  Other(String),
}

impl TxtStatError {
  /// Process status for a failed run. `0` and `1` belong to [`crate::commands::Outcome`].
  pub fn exit_code(&self) -> u8 {
    match self {
      TxtStatError::NotFound(_) => 2,
      TxtStatError::Write { .. } => 3,
      TxtStatError::Read { .. } => 4,
      _ => 5,
    }
  }
}

#[test]
fn exit_codes_are_distinct_per_failure_kind() {
  let io = || std::io::Error::other("boom");
  let codes = [
    TxtStatError::NotFound("missing.txt".into()).exit_code(),
    TxtStatError::Write { path: "r.txt".into(), source: io() }.exit_code(),
    TxtStatError::Read { path: "in.txt".into(), source: io() }.exit_code(),
    TxtStatError::Other("x".into()).exit_code(),
  ];

  assert_eq!(codes, [2, 3, 4, 5]);
}

#[test]
fn not_found_message_names_the_path() {
  let err = TxtStatError::NotFound("nope/input.txt".into());
  assert_eq!(err.to_string(), "File not found: nope/input.txt");
}
