use crate::errors::{TxtStatError, TxtStatResult};
use crate::stats::TextStats;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render the fixed four-line report. Always ends with exactly one `\n`.
pub fn format_report(source: &str, stats: &TextStats) -> String {
    format!(
        "Source: {source}\n\
         Lines:  {}\n\
         Words:  {}\n\
         Chars:  {}\n",
        stats.lines, stats.words, stats.chars
    )
}

/// Print `report` (plus a blank line) to `out`, then persist it to `output` if given.
pub fn emit<W: Write>(report: &str, output: Option<&Path>, mut out: W) -> TxtStatResult<()> {
    writeln!(out, "{report}")?;
    out.flush()?;

    if let Some(path) = output {
        tracing::debug!("Writing report to: {}", path.display());
        fs::write(path, report).map_err(|source| TxtStatError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Report written to: {}", path.display());
    }
    Ok(())
}

#[test]
fn report_has_four_fields_in_order() {
    let stats = TextStats {
        lines: 2,
        words: 3,
        chars: 16,
    };
    let report = format_report("input.txt", &stats);

    assert_eq!(
        report,
        "Source: input.txt\nLines:  2\nWords:  3\nChars:  16\n"
    );

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    for (line, field) in lines.iter().zip(["Source:", "Lines:", "Words:", "Chars:"]) {
        assert!(line.starts_with(field), "{line:?} should start with {field}");
    }
    assert!(report.ends_with("16\n") && !report.ends_with("\n\n"));
}

#[test]
fn emit_prints_report_followed_by_blank_line() {
    let mut out = Vec::new();
    emit("Source: stdin\n", None, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Source: stdin\n\n");
}

#[test]
fn emit_writes_exact_report_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, "stale contents that are much longer than the report\n").unwrap();

    let report = format_report("stdin", &TextStats::compute("a b\nc"));
    let mut out = Vec::new();
    emit(&report, Some(&path), &mut out).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), report);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{report}\n"));
}

#[test]
fn emit_surfaces_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("report.txt");

    let err = emit("Source: stdin\n", Some(&path), std::io::sink()).unwrap_err();

    assert!(matches!(err, TxtStatError::Write { path: ref p, .. } if *p == path));
    assert_eq!(err.exit_code(), 3);
}
