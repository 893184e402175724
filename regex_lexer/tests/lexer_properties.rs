use assert_matches::assert_matches;
use regex_lexer::logging::{codes, LogLevel, LoggingService, MemoryLogger};
use regex_lexer::{
    tokenize, CharStream, Lexer, LexerError, Stream, Token, TokenKind, TokenMap,
};
use std::sync::Arc;

fn builtin() -> &'static TokenMap {
    TokenMap::builtin().expect("built-in token map")
}

#[test]
fn every_direct_lexeme_is_one_plain_token() {
    let map = builtin();
    for (lexeme, kind) in map.iter().filter(|(lexeme, kind)| {
        kind.is_direct() && lexeme.chars().count() == 1
    }) {
        let stream = tokenize(lexeme, map).unwrap();
        assert_eq!(
            stream.input(),
            &[Token::plain(kind, lexeme), Token::End],
            "lexeme {lexeme:?}"
        );
    }
}

#[test]
fn digits_are_separate_integers() {
    let stream = tokenize("12", builtin()).unwrap();
    assert_eq!(
        stream.input(),
        &[
            Token::plain(TokenKind::Integer, "1"),
            Token::plain(TokenKind::Integer, "2"),
            Token::End,
        ]
    );
}

#[test]
fn backslash_forms() {
    let map = builtin();

    let mut lexer = Lexer::create(r"\\", map).unwrap();
    assert_eq!(lexer.next_token().unwrap(), Token::plain(TokenKind::Backslash, "\\"));
    assert_eq!(lexer.stream().cursor(), 1);
    assert_eq!(lexer.next_token().unwrap(), Token::End);

    let stream = tokenize("\\", map).unwrap();
    assert_eq!(stream.kinds(), vec![TokenKind::Backslash]);
}

#[test]
fn shorthand_escapes_and_negation() {
    let map = builtin();

    let first = Lexer::create(r"\d", map).unwrap().next_token().unwrap();
    assert_eq!(first, Token::escape(TokenKind::AnyDigit, "d", false));

    let first = Lexer::create(r"\D", map).unwrap().next_token().unwrap();
    assert_eq!(first, Token::escape(TokenKind::AnyDigit, "D", true));
    assert!(first.is_negated());

    let first = Lexer::create(r"\S", map).unwrap().next_token().unwrap();
    assert_eq!(first, Token::escape(TokenKind::AnySpace, "S", true));
}

#[test]
fn unicode_property_forms() {
    let map = builtin();
    let cases = [
        (r"\p{L}", false),
        (r"\P{L}", true),
        (r"\p{^L}", true),
        (r"\P{^L}", true),
        (r"\pL", false),
        (r"\PL", true),
    ];

    for (pattern, negated) in cases {
        let stream = tokenize(pattern, map).unwrap();
        assert_eq!(
            stream.input(),
            &[Token::escape(TokenKind::UnicodeLetter, "L", negated), Token::End],
            "pattern {pattern}"
        );
    }
}

#[test]
fn property_errors() {
    let map = builtin();
    assert_matches!(
        tokenize(r"\p{Unknown}", map),
        Err(LexerError::UnknownProperty { name, .. }) if name == "Unknown"
    );
    assert_matches!(
        tokenize(r"\p{L", map),
        Err(LexerError::UnterminatedProperty { .. })
    );
    assert_matches!(
        tokenize(r"\p", map),
        Err(LexerError::UnknownProperty { name, position: 2 }) if name.is_empty()
    );
    assert_eq!(
        tokenize(r"\p{Zz}", map).unwrap_err().to_string(),
        "Unknown unicode token Zz at position 5"
    );
}

#[test]
fn empty_input_keeps_returning_end() {
    let mut lexer = Lexer::new(CharStream::from(""), builtin());
    for _ in 0..5 {
        assert_eq!(lexer.next_token().unwrap(), Token::End);
    }
}

#[test]
fn cloned_stream_is_independent() {
    let mut original = CharStream::from("(ab)");
    Stream::next(&mut original);

    let mut clone = original.clone();
    clone.next();
    clone.next();
    clone.replace(0, '[').unwrap();

    assert_eq!(original.cursor(), 0);
    assert_eq!(original.current(), Some('('));
    assert_eq!(clone.current(), Some('b'));
}

#[test]
fn direct_lexemes_round_trip() {
    let pattern = "([{}])^$.*+?|-,:!=<>/#_'\"&@%~;`";
    let stream = tokenize(pattern, builtin()).unwrap();
    assert_eq!(stream.lexemes(), pattern);
    assert!(stream.input().iter().all(|t| !t.is_escape()));
}

#[test]
fn custom_map_drives_classification() {
    let map = TokenMap::from_json_str(
        r#"{ "PIPE": "!", "ANY_DIGIT": "n", "UNICODE_GREEK": "Grk" }"#,
    )
    .unwrap();

    let stream = tokenize(r"a!\N\p{Grk}|", &map);
    assert_matches!(stream, Err(LexerError::UnknownCharacter { character: '|', position: 11 }));

    let stream = tokenize(r"a!\N\p{Grk}", &map).unwrap();
    assert_eq!(
        stream.kinds(),
        vec![
            TokenKind::Char,
            TokenKind::Pipe,
            TokenKind::AnyDigit,
            TokenKind::Char,
            TokenKind::UnicodeGreek,
        ]
    );
}

#[test]
fn lexical_errors_are_logged_with_codes() {
    let memory = Arc::new(MemoryLogger::new());
    let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
    if regex_lexer::logging::init_global_logging_with_service(service).is_err() {
        // another test in this binary installed the logger first
        return;
    }

    let _ = tokenize("a€", builtin());
    assert!(memory.has_error_with_code(codes::lexical::UNKNOWN_CHARACTER));

    let _ = tokenize("ab", builtin());
    assert!(memory.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));

    assert!(memory
        .get_events_with_code(codes::lexical::UNKNOWN_CHARACTER)
        .iter()
        .any(|event| event.position == Some(1)));
}
