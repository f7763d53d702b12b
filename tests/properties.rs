//! Property-based tests
//!
//! Checks the structural guarantees of the pipeline over generated
//! input: tokenization is lossless for plain text, line length
//! bookkeeping never drifts, empty writes are no-ops, and chunk
//! boundaries (both char- and byte-level) never change the final
//! document state.

use proptest::prelude::*;

use tatami_terminal::{Line, Style, Terminal, Token, Tokenizer};

/// Inputs mixing printable runs, complete and partial escape
/// sequences, control characters, and multibyte text.
fn terminal_input() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[ -~]{1,8}",
        "\\x1b\\[[0-9;]{0,6}[mAHG]",
        Just("\u{1b}[".to_string()),
        Just("\u{1b}[5".to_string()),
        Just("\u{1b}".to_string()),
        Just("\r".to_string()),
        Just("\n".to_string()),
        Just("\u{8}".to_string()),
        "[0-9;]{0,4}",
        Just("caf\u{e9}\u{4e2d}".to_string()),
    ];
    proptest::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

/// Flatten a document to per-column styled cells, erasing span
/// boundaries: chunked writes may produce more spans than one big
/// write, but the styled content must be identical.
fn flatten(terminal: &Terminal) -> (Vec<Vec<(char, Style)>>, (usize, usize)) {
    let lines = terminal
        .lines()
        .iter()
        .map(|line| {
            line.spans()
                .iter()
                .flat_map(|span| {
                    let style = *span.style();
                    span.text().chars().map(move |c| (c, style))
                })
                .collect()
        })
        .collect();
    (lines, terminal.cursor_position())
}

proptest! {
    #[test]
    fn plain_text_tokenizes_to_itself(input in "[^\\x00-\\x1f]*") {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.feed(&input);

        let mut reconstructed = String::new();
        for token in tokens {
            match token {
                Token::Text(text) => {
                    prop_assert!(!text.is_empty(), "empty text token emitted");
                    reconstructed.push_str(&text);
                }
                other => prop_assert!(false, "unexpected token {:?}", other),
            }
        }
        prop_assert_eq!(reconstructed, input);
        prop_assert!(!tokenizer.has_pending());
    }

    #[test]
    fn empty_write_changes_nothing(input in terminal_input()) {
        let mut terminal = Terminal::new();
        terminal.write(&input);
        let before = terminal.snapshot();

        terminal.write("");

        prop_assert_eq!(terminal.snapshot(), before);
    }

    #[test]
    fn line_length_matches_span_total(
        writes in proptest::collection::vec((0usize..40, "[a-zA-Z ]{0,10}"), 0..24)
    ) {
        let mut line = Line::new();
        for (column, text) in &writes {
            line.write_at(*column, text, Style::default());
            let total: usize = line.spans().iter().map(|span| span.len()).sum();
            prop_assert_eq!(line.len(), total);
        }
    }

    #[test]
    fn char_split_write_equals_whole_write(input in terminal_input(), at in 0usize..48) {
        let split = input
            .char_indices()
            .nth(at)
            .map(|(i, _)| i)
            .unwrap_or(input.len());

        let mut whole = Terminal::new();
        whole.write(&input);

        let mut chunked = Terminal::new();
        chunked.write(&input[..split]);
        chunked.write(&input[split..]);

        prop_assert_eq!(flatten(&whole), flatten(&chunked));
    }

    #[test]
    fn byte_split_write_equals_whole_write(input in terminal_input(), at in 0usize..64) {
        let bytes = input.as_bytes();
        let split = at.min(bytes.len());

        let mut whole = Terminal::new();
        whole.write_bytes(bytes);

        let mut chunked = Terminal::new();
        chunked.write_bytes(&bytes[..split]);
        chunked.write_bytes(&bytes[split..]);

        prop_assert_eq!(flatten(&whole), flatten(&chunked));
    }
}
