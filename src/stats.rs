use std::fmt;

/// Line, word and character counts for one body of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl TextStats {
    /// Count `text`.
    ///
    /// `chars` counts Unicode scalar values, not bytes. `words` counts maximal
    /// runs of non-whitespace. `lines` counts `\n` terminators, plus one for a
    /// trailing line without one.
    pub fn compute(text: &str) -> Self {
        let newlines = text.bytes().filter(|b| *b == b'\n').count();
        let unterminated = !text.is_empty() && !text.ends_with('\n');

        let stats = TextStats {
            lines: newlines + usize::from(unterminated),
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        };
        tracing::debug!("Counts -> {stats}");
        stats
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines: {}, words: {}, chars: {}",
            self.lines, self.words, self.chars
        )
    }
}

#[test]
fn empty_text_is_all_zeros() {
    assert_eq!(TextStats::compute(""), TextStats::default());
}

#[test]
fn unterminated_last_line_still_counts() {
    assert_eq!(TextStats::compute("a\nb\n").lines, 2);
    assert_eq!(TextStats::compute("a\nb").lines, 2);
    assert_eq!(TextStats::compute("\n").lines, 1);
    assert_eq!(TextStats::compute("\n\n\n").lines, 3);
    assert_eq!(TextStats::compute("single").lines, 1);
}

#[test]
fn words_are_maximal_non_whitespace_runs() {
    let cases = [
        ("", 0),
        ("   ", 0),
        ("hello", 1),
        ("  hello   world  ", 2),
        ("tabs\tand\nnewlines\r\nmixed", 4),
        ("punctuation, counts; too!", 3),
        ("non\u{a0}breaking space", 3),
    ];

    for (text, expected) in cases {
        assert_eq!(TextStats::compute(text).words, expected, "text: {text:?}");
    }
}

#[test]
fn chars_are_counted_not_bytes() {
    let stats = TextStats::compute("héllo wörld\n");
    assert_eq!(stats.chars, 12);
    assert_eq!("héllo wörld\n".len(), 14);

    assert_eq!(TextStats::compute("日本語").chars, 3);
    assert_eq!(TextStats::compute("🦀").chars, 1);
}

#[test]
fn sample_file_counts() {
    let stats = TextStats::compute("hello world\nfoo\n");
    assert_eq!(
        stats,
        TextStats {
            lines: 2,
            words: 3,
            chars: 16
        }
    );
}

#[test]
fn compute_is_deterministic() {
    let text = "the quick brown fox\njumps over\nthe lazy dog";
    assert_eq!(TextStats::compute(text), TextStats::compute(text));
}
