//! Property-based tests for the tokenizer.

use ifx_lexer::{tokenize, TokenKind};
use proptest::prelude::*;

/// Source drawn from every character class the grammar knows plus noise.
fn arb_source() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_*$#@!%^&{} \t\n.+()-]{0,64}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tokens_slice_the_source_in_order(source in arb_source()) {
        let mut cursor = 0;
        for token in tokenize(&source) {
            prop_assert!(token.offset >= cursor);
            prop_assert_eq!(&source[token.span()], token.text);
            prop_assert!(token.len > 0);
            cursor = token.offset + token.len;
        }
        prop_assert!(cursor <= source.len());
    }

    #[test]
    fn words_are_at_least_two_characters(source in arb_source()) {
        for token in tokenize(&source) {
            if token.kind == TokenKind::Word {
                prop_assert!(token.text.len() >= 2);
            }
        }
    }

    #[test]
    fn braces_always_tokenize(source in "[{} ]{0,40}") {
        let braces = source.chars().filter(|c| *c == '{' || *c == '}').count();
        let quotes = tokenize(&source)
            .filter(|t| matches!(t.kind, TokenKind::QuoteOpen | TokenKind::QuoteClose))
            .count();
        prop_assert_eq!(braces, quotes);
    }

    #[test]
    fn numbers_parse_as_decimals(n in 0u32..100_000, frac in proptest::option::of(0u32..1000)) {
        let text = match frac {
            Some(f) => format!("{n}.{f}"),
            None => n.to_string(),
        };
        let tokens: Vec<_> = tokenize(&text).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text, text.as_str());
    }
}
