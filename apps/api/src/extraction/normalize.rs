/// Collapses extractor output into a single line of printable ASCII.
///
/// Every character outside `0x20..=0x7E` becomes whitespace, runs of
/// whitespace (line breaks included) become one space, and the ends are
/// trimmed. Blank lines cannot survive because no line breaks do.
/// Never run this on text the section tagger still needs lines from.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_printable(c) && c != ' ' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Printable ASCII, the only range the extractors keep verbatim.
pub fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Replaces everything except printable ASCII and line breaks with a space.
pub fn mask_unprintable(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_printable(c) || c == '\n' || c == '\r' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "plain words",
        "  leading and trailing  ",
        "line one\n\n\nline two\r\n  line three",
        "tabs\tand\u{0}nulls\u{7f}",
        "caf\u{e9} r\u{e9}sum\u{e9} \u{2014} na\u{ef}ve",
        "\u{fffd}\u{fffd}binary\u{1}\u{2}junk\u{ff}",
        "\n \n \n",
    ];

    #[test]
    fn test_is_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_collapses_whitespace_and_line_breaks() {
        assert_eq!(
            normalize("line one\n\n\nline two\r\n  line three"),
            "line one line two line three"
        );
    }

    #[test]
    fn test_replaces_non_ascii_and_control_characters() {
        assert_eq!(normalize("tabs\tand\u{0}nulls"), "tabs and nulls");
        assert_eq!(normalize("r\u{e9}sum\u{e9}"), "r sum");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  \u{1}hello\u{2}  "), "hello");
        assert_eq!(normalize("\n \n"), "");
    }

    #[test]
    fn test_output_is_printable_ascii_only() {
        for sample in SAMPLES {
            assert!(normalize(sample).chars().all(is_printable));
        }
    }

    #[test]
    fn test_mask_keeps_line_breaks() {
        assert_eq!(mask_unprintable("a\u{0}b\nc\r\u{ff}"), "a b\nc\r ");
    }
}
