//! Turns SRT captions into one line of plain text.

use std::sync::LazyLock;

use regex::Regex;

/// A cue header: optional index line followed by the `start --> end` timing line.
/// Leading whitespace is anything `str::trim` would strip, short of a newline.
static CUE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?:[^\S\n]*\d+[^\S\n]*\n)?[^\S\n]*\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}[^\n]*(?:\n|$)",
    )
    .unwrap()
});

static LINE_BREAKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\r?\n)+").unwrap());

/// Strips timing lines and cue indexes from `raw`, joins the remaining lines
/// with single spaces and trims the result.
///
/// Never fails: input that is not SRT only has its line breaks collapsed.
pub fn clean_captions(raw: &str) -> String {
    let without_headers = CUE_HEADER_RE.replace_all(raw, "");
    let joined = LINE_BREAKS_RE.replace_all(&without_headers, " ");
    joined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SRT: &str = "1\n00:00:00,000 --> 00:00:02,000\nHello world\n\n\
                              2\n00:00:02,000 --> 00:00:04,120\nthis is a test\nover two lines\n\n\
                              3\n00:00:04,120 --> 00:00:07,000\n[Music]\n\n";

    #[test]
    fn test_single_cue() {
        assert_eq!(
            clean_captions("1\n00:00:00,000 --> 00:00:02,000\nHello world\n\n"),
            "Hello world"
        );
    }

    #[test]
    fn test_removes_all_markup() {
        let cleaned = clean_captions(SAMPLE_SRT);

        assert_eq!(
            cleaned,
            "Hello world this is a test over two lines [Music]"
        );
        assert!(!cleaned.contains("-->"));
        assert!(!cleaned.contains('\n'));
    }

    #[test]
    fn test_no_index_lines_survive() {
        let srt: String = (1..=12)
            .map(|i| {
                format!(
                    "{i}\n00:00:{:02},000 --> 00:00:{:02},500\nline {i}\n\n",
                    i,
                    i
                )
            })
            .collect();

        let cleaned = clean_captions(&srt);

        assert!(!cleaned.contains("-->"));
        let words: Vec<&str> = cleaned.split(' ').collect();
        assert_eq!(words.len(), 24, "only `line N` pairs should remain: {cleaned}");
        assert!(words.chunks(2).all(|pair| pair[0] == "line"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let srt = "1\r\n00:00:00,000 --> 00:00:02,000\r\nHello\r\n\r\n2\r\n00:00:02,000 --> 00:00:03,000\r\nthere\r\n";

        assert_eq!(clean_captions(srt), "Hello there");
    }

    #[test]
    fn test_timing_line_without_index() {
        let srt = "00:00:00,000 --> 00:00:02,000 align:start position:0%\nHello\n";

        assert_eq!(clean_captions(srt), "Hello");
    }

    #[test]
    fn test_numeric_caption_text_is_kept() {
        let srt = "1\n00:00:00,000 --> 00:00:01,000\n42\n\n2\n00:00:01,000 --> 00:00:02,000\nis the answer\n\n";

        assert_eq!(clean_captions(srt), "42 is the answer");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_captions(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(clean_captions("already clean text"), "already clean text");
        assert_eq!(clean_captions("  two\n\n\nlines \n"), "two lines");
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        let inputs = [
            "1\n",
            "-->",
            "00:00:00,000 -->",
            "1\n00:00:00,000 --> 00:00:02,000",
            "\n\n\n",
            "ünïcödé\n00:00:00,000 --> 00:00:02,000\n",
        ];
        for input in inputs {
            let _ = clean_captions(input);
        }
        assert_eq!(clean_captions("1\n00:00:00,000 --> 00:00:02,000"), "");
    }

    #[test]
    fn test_idempotent_on_output() {
        for input in [
            SAMPLE_SRT,
            "",
            "plain\ntext",
            "  spaced  out  ",
            "\u{a0}00:00:00,000 --> 00:00:01,000 hi",
            "\u{2003}00:00:00,000 --> 00:00:01,000\nhi",
            "\r00:00:00,000 --> 00:00:01,000 hi",
            "00:00:00,000 --> 00:00:01,000 a\rb\nhi",
        ] {
            let once = clean_captions(input);
            assert_eq!(clean_captions(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_unicode_indented_timing_line() {
        assert_eq!(
            clean_captions("\u{a0}00:00:00,000 --> 00:00:01,000 hi"),
            ""
        );
        assert_eq!(
            clean_captions("1\n\u{2003}00:00:00,000 --> 00:00:01,000\nhi\n"),
            "hi"
        );
    }
}
