//! Integration tests for the kdlx scanner
//!
//! These drive the public API only: whole-document scans, the properties
//! every scan must satisfy, diagnostics, and scanning from many threads.

use kdlx_lex::unicode::{is_newline_char, is_whitespace};
use kdlx_lex::{tokenize, tokenize_with, ScanConfig, ScanErrorKind, Scanner, Token, TokenKind};
use kdlx_util::{Handler, SourceFile};
use proptest::prelude::*;
use rayon::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("kdlx_lex=trace"))
        .with_test_writer()
        .try_init();
}

fn is_trivia(text: &str) -> bool {
    text.chars().all(|c| is_whitespace(c) || is_newline_char(c))
}

/// Checks that tokens plus skipped trivia tile the source exactly.
fn assert_covers(source: &str, tokens: &[Token<'_>]) {
    let mut pos = if source.starts_with('\u{FEFF}') { 3 } else { 0 };
    for token in tokens {
        assert!(token.start >= pos, "overlap at {}", token.start);
        assert!(is_trivia(&source[pos..token.start]), "gap before {}", token);
        assert_eq!(&source[token.range()], token.text);
        assert!(!token.is_empty());
        pos = token.end();
    }
    assert!(is_trivia(&source[pos..]), "unscanned tail at {}", pos);
}

// ==================== SCENARIOS ====================

#[test]
fn test_scenario_document() {
    init_tracing();
    let source = "\
title \"Hello, World\"
bookmarks 12 15 188 1234
author \"Alex Monad\" email=\"alex@example.com\" active=true
contents {
    section \"First section\" {
        paragraph \"This is the first paragraph\"
        paragraph \"This is the second paragraph\"
    }
}
/-disabled node=null
numbers 0xFF_FF 0b1010 0o755 -3.5e-2 +1_000
";
    let tokens = tokenize(source).unwrap();
    assert_covers(source, &tokens);

    let count = |kind| tokens.iter().filter(|t| t.kind == kind).count();
    assert_eq!(count(TokenKind::String), 6);
    assert_eq!(count(TokenKind::OpenBrace), 2);
    assert_eq!(count(TokenKind::CloseBrace), 2);
    assert_eq!(count(TokenKind::NodeComment), 1);
    assert_eq!(count(TokenKind::Bool), 1);
    assert_eq!(count(TokenKind::Null), 1);
    assert_eq!(count(TokenKind::Hexadecimal), 1);
    assert_eq!(count(TokenKind::Binary), 1);
    assert_eq!(count(TokenKind::Octal), 1);
    assert_eq!(count(TokenKind::Float), 1);
    assert_eq!(count(TokenKind::Decimal), 5);
}

#[test]
fn test_scenario_keyword_boundary() {
    let tokens = tokenize("nullable").unwrap();
    assert_eq!(tokens, [Token::new(TokenKind::Identifier, 0, "nullable")]);
}

#[test]
fn test_scenario_maximal_munch() {
    let tokens = tokenize("a == b != c").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::NotEqual,
            TokenKind::Identifier
        ]
    );
    assert_eq!(tokens[1].text, "==");
    assert_eq!(tokens[3].text, "!=");
}

#[test]
fn test_scenario_errors() {
    let err = tokenize("0x_").unwrap_err();
    assert_eq!((err.kind, err.offset), (ScanErrorKind::InvalidNumericLiteral, 0));

    let err = tokenize("\"unterminated").unwrap_err();
    assert_eq!((err.kind, err.offset), (ScanErrorKind::UnterminatedString, 0));
}

#[test]
fn test_config_from_toml() {
    let config = ScanConfig::from_toml_str("skip_bom = false\nseparators = \"lenient\"").unwrap();
    let tokens = tokenize_with("\u{FEFF}x 1_", config).unwrap();
    assert_eq!(tokens[0].text, "\u{FEFF}x");
    assert_eq!(tokens[1].text, "1_");
}

#[test]
fn test_diagnostic_rendering() {
    let file = SourceFile::new("config.kdl", "node {\n    name \"kdlx\n}\n");
    let err = tokenize(file.content()).unwrap_err();
    let diag = err.to_diagnostic(&file);

    let expected = "\
error[E1002]: unterminated string literal
  --> 2:10
  2 |     name \"kdlx
    |          ^ string starts here
  = help: add the closing `\"` (and any `#` of a raw string)";
    assert_eq!(diag.to_string(), expected);

    let handler = Handler::new();
    err.emit(&file, &handler);
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_iterator_api() {
    let texts: Result<Vec<_>, _> = Scanner::new("a b c").map(|t| t.map(|t| t.text)).collect();
    assert_eq!(texts.unwrap(), ["a", "b", "c"]);

    let first_error = Scanner::new("a b <").find_map(Result::err).unwrap();
    assert_eq!(first_error.offset, 4);
}

// ==================== CONCURRENCY ====================

#[test]
fn test_parallel_scans_match_sequential() {
    let sources: Vec<String> = (0..256)
        .map(|i| match i % 4 {
            0 => format!("node{i} key={i} \"v{i}\""),
            1 => format!("/-n{i} {{ child 0x{i:x} }}"),
            2 => format!("list {i}.5 r#\"raw {i}\"# null"),
            _ => format!("bad{i} \"open"),
        })
        .collect();

    let sequential: Vec<_> = sources.iter().map(|s| tokenize(s)).collect();
    let parallel: Vec<_> = sources.par_iter().map(|s| tokenize(s)).collect();
    assert_eq!(sequential, parallel);
    assert_eq!(parallel.iter().filter(|r| r.is_err()).count(), 64);
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_termination_on_arbitrary_input() {
    proptest!(|(input in any::<String>())| {
        match tokenize(&input) {
            Ok(tokens) => assert_covers(&input, &tokens),
            Err(err) => {
                prop_assert!(err.offset <= input.len());
                prop_assert!(input.is_char_boundary(err.offset));
            },
        }
    });
}

#[test]
fn test_property_deterministic() {
    proptest!(|(input in "[a-z0-9 \"\\\\=(){}/\\-_.xbo\n]{0,64}")| {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    });
}

#[test]
fn test_property_coverage_on_document_alphabet() {
    proptest!(|(input in "([a-z]{1,5}|[0-9]{1,4}|\"[a-z ]{0,5}\"|[=;{}()\\[\\],]|/-| |\r\n|\t){0,40}")| {
        let tokens = tokenize(&input).unwrap();
        assert_covers(&input, &tokens);
    });
}

#[test]
fn test_property_identifiers() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9\\-_.]{0,50}")| {
        prop_assume!(!matches!(input.as_str(), "true" | "false" | "null"));
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, 0, &input)]);
    });
}

#[test]
fn test_property_hex_literals() {
    proptest!(|(digits in "[0-9a-fA-F]([0-9a-fA-F_]{0,15}[0-9a-fA-F])?")| {
        let input = format!("0x{}", digits);
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Hexadecimal);
    });
}

#[test]
fn test_property_quoted_strings() {
    proptest!(|(body in "[^\"\\\\]{0,100}")| {
        let input = format!("\"{}\"", body);
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(tokens[0].text, input.as_str());
    });
}
