use crate::errors::{TxtStatError, TxtStatResult};
use crate::utils::Config;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    /// Human-readable label for the report's `Source:` field.
    pub fn label(&self, stdin_label: &str) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => stdin_label.to_owned(),
        }
    }
}

/// Text read from a source, with the label it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub label: String,
}

/// Read the whole of `source`.
///
/// Returns `Ok(None)` when reading stdin was requested but `interactive` says
/// nothing is piped in; the caller decides how to guide the user. `stdin` is
/// only touched for [`InputSource::Stdin`].
pub fn resolve<R: Read>(
    source: &InputSource,
    mut stdin: R,
    interactive: bool,
    cfg: &Config,
) -> TxtStatResult<Option<Input>> {
    let text = match source {
        InputSource::File(path) => read_file(path, cfg)?,
        InputSource::Stdin => {
            if interactive {
                return Ok(None);
            }
            tracing::debug!("Reading from stdin");
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|source| TxtStatError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            text
        }
    };

    Ok(Some(Input {
        text,
        label: source.label(&cfg.report.stdin_label),
    }))
}

fn read_file(path: &Path, cfg: &Config) -> TxtStatResult<String> {
    if !path.exists() {
        return Err(TxtStatError::NotFound(path.to_path_buf()));
    }

    if let Some(limit_mb) = cfg.input.max_file_size_mb {
        let max_bytes = limit_mb.saturating_mul(1_048_576);
        let len = fs::metadata(path)
            .map_err(|source| TxtStatError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if len > max_bytes {
            return Err(TxtStatError::Other(format!(
                "{} is {len} bytes, over the {limit_mb} MB input limit",
                path.display()
            )));
        }
    }

    tracing::debug!("Reading file: {}", path.display());
    fs::read_to_string(path).map_err(|source| TxtStatError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[test]
fn from_arg_picks_file_or_stdin() {
    assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
    assert_eq!(
        InputSource::from_arg(Some("notes.txt".into())),
        InputSource::File("notes.txt".into())
    );
}

#[test]
fn resolve_reads_file_and_labels_it_with_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "hello world\nfoo\n").unwrap();

    let input = resolve(
        &InputSource::File(path.clone()),
        std::io::empty(),
        true,
        &Config::default(),
    )
    .unwrap()
    .expect("file input is always available");

    assert_eq!(input.text, "hello world\nfoo\n");
    assert_eq!(input.label, path.display().to_string());
}

#[test]
fn resolve_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = resolve(
        &InputSource::File(path.clone()),
        std::io::empty(),
        false,
        &Config::default(),
    )
    .unwrap_err();

    assert!(matches!(err, TxtStatError::NotFound(ref p) if *p == path));
}

#[test]
fn resolve_rejects_invalid_utf8_as_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = resolve(
        &InputSource::File(path),
        std::io::empty(),
        false,
        &Config::default(),
    )
    .unwrap_err();

    assert!(matches!(err, TxtStatError::Read { .. }));
}

#[test]
fn resolve_enforces_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    fs::write(&path, vec![b'a'; 1_048_577]).unwrap();

    let mut cfg = Config::default();
    cfg.input.max_file_size_mb = Some(1);

    let err = resolve(&InputSource::File(path), std::io::empty(), false, &cfg).unwrap_err();
    assert!(matches!(err, TxtStatError::Other(_)));
}

#[test]
fn resolve_huge_size_limit_saturates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.txt");
    fs::write(&path, "abc").unwrap();

    let mut cfg = Config::default();
    cfg.input.max_file_size_mb = Some(u64::MAX / 1000);

    let input = resolve(&InputSource::File(path), std::io::empty(), false, &cfg)
        .unwrap()
        .unwrap();
    assert_eq!(input.text, "abc");
}

#[test]
fn resolve_reads_piped_stdin() {
    let piped = std::io::Cursor::new("piped text\n");

    let input = resolve(&InputSource::Stdin, piped, false, &Config::default())
        .unwrap()
        .unwrap();

    assert_eq!(input.text, "piped text\n");
    assert_eq!(input.label, "stdin");
}

#[test]
fn resolve_interactive_stdin_yields_no_input() {
    let untouched = std::io::Cursor::new("should not be read");

    let input = resolve(&InputSource::Stdin, untouched, true, &Config::default()).unwrap();

    assert_eq!(input, None);
}

#[test]
fn resolve_uses_configured_stdin_label() {
    let mut cfg = Config::default();
    cfg.report.stdin_label = "<pipe>".into();

    let input = resolve(&InputSource::Stdin, std::io::empty(), false, &cfg)
        .unwrap()
        .unwrap();

    assert_eq!(input.label, "<pipe>");
    assert_eq!(input.text, "");
}
