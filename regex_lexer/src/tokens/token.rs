//! Token types produced by the pattern lexer
//!
//! `TokenKind` is the closed set of canonical kind identifiers. The names are the
//! keys used by the token map configuration; two name prefixes are reserved:
//! `UNICODE` marks property escapes and `ANY` marks shorthand classes.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // === STRUCTURAL SYMBOLS ===
    LeftBracket,      // [
    RightBracket,     // ]
    LeftParenthesis,  // (
    RightParenthesis, // )
    LeftBrace,        // {
    RightBrace,       // }
    Hat,              // ^
    Dollar,           // $
    Minus,            // -
    Comma,            // ,
    Pipe,             // |
    Dot,              // .
    Star,             // *
    Plus,             // +
    Question,         // ?
    Colon,            // :
    Exclamation,      // !
    Equal,            // =
    Lower,            // <
    Greater,          // >
    Slash,            // /
    Hash,             // #
    Underscore,       // _
    Quote,            // '
    DoubleQuote,      // "
    Ampersand,        // &
    At,               // @
    Percent,          // %
    Tilde,            // ~
    Semicolon,        // ;
    Backtick,         // `

    // === SYNTHESIZED LITERALS ===
    Integer,   // single decimal digit
    Char,      // literal character
    Backslash, // escaped backslash

    // === SHORTHAND CLASSES (ANY_*) ===
    AnyDigit, // \d
    AnyWord,  // \w
    AnySpace, // \s

    // === UNICODE PROPERTIES (UNICODE_*) ===
    UnicodeX,
    UnicodeLetter,
    UnicodeLowercaseLetter,
    UnicodeUppercaseLetter,
    UnicodeTitlecaseLetter,
    UnicodeCasedLetter,
    UnicodeModifierLetter,
    UnicodeOtherLetter,
    UnicodeMark,
    UnicodeNonSpacingMark,
    UnicodeSpacingCombiningMark,
    UnicodeEnclosingMark,
    UnicodeSeparator,
    UnicodeSpaceSeparator,
    UnicodeLineSeparator,
    UnicodeParagraphSeparator,
    UnicodeSymbol,
    UnicodeMathSymbol,
    UnicodeCurrencySymbol,
    UnicodeModifierSymbol,
    UnicodeOtherSymbol,
    UnicodeNumber,
    UnicodeDecimalDigitNumber,
    UnicodeLetterNumber,
    UnicodeOtherNumber,
    UnicodePunctuation,
    UnicodeDashPunctuation,
    UnicodeOpenPunctuation,
    UnicodeClosePunctuation,
    UnicodeInitialPunctuation,
    UnicodeFinalPunctuation,
    UnicodeConnectorPunctuation,
    UnicodeOtherPunctuation,
    UnicodeOther,
    UnicodeControl,
    UnicodeFormat,
    UnicodePrivateUse,
    UnicodeUnassigned,
    UnicodeSurrogate,
    UnicodeCommon,
    UnicodeArabic,
    UnicodeArmenian,
    UnicodeBengali,
    UnicodeCyrillic,
    UnicodeDevanagari,
    UnicodeGeorgian,
    UnicodeGreek,
    UnicodeHan,
    UnicodeHangul,
    UnicodeHebrew,
    UnicodeHiragana,
    UnicodeKatakana,
    UnicodeLatin,
    UnicodeThai,
    UnicodeTibetan,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 92] = [
        Self::LeftBracket,
        Self::RightBracket,
        Self::LeftParenthesis,
        Self::RightParenthesis,
        Self::LeftBrace,
        Self::RightBrace,
        Self::Hat,
        Self::Dollar,
        Self::Minus,
        Self::Comma,
        Self::Pipe,
        Self::Dot,
        Self::Star,
        Self::Plus,
        Self::Question,
        Self::Colon,
        Self::Exclamation,
        Self::Equal,
        Self::Lower,
        Self::Greater,
        Self::Slash,
        Self::Hash,
        Self::Underscore,
        Self::Quote,
        Self::DoubleQuote,
        Self::Ampersand,
        Self::At,
        Self::Percent,
        Self::Tilde,
        Self::Semicolon,
        Self::Backtick,
        Self::Integer,
        Self::Char,
        Self::Backslash,
        Self::AnyDigit,
        Self::AnyWord,
        Self::AnySpace,
        Self::UnicodeX,
        Self::UnicodeLetter,
        Self::UnicodeLowercaseLetter,
        Self::UnicodeUppercaseLetter,
        Self::UnicodeTitlecaseLetter,
        Self::UnicodeCasedLetter,
        Self::UnicodeModifierLetter,
        Self::UnicodeOtherLetter,
        Self::UnicodeMark,
        Self::UnicodeNonSpacingMark,
        Self::UnicodeSpacingCombiningMark,
        Self::UnicodeEnclosingMark,
        Self::UnicodeSeparator,
        Self::UnicodeSpaceSeparator,
        Self::UnicodeLineSeparator,
        Self::UnicodeParagraphSeparator,
        Self::UnicodeSymbol,
        Self::UnicodeMathSymbol,
        Self::UnicodeCurrencySymbol,
        Self::UnicodeModifierSymbol,
        Self::UnicodeOtherSymbol,
        Self::UnicodeNumber,
        Self::UnicodeDecimalDigitNumber,
        Self::UnicodeLetterNumber,
        Self::UnicodeOtherNumber,
        Self::UnicodePunctuation,
        Self::UnicodeDashPunctuation,
        Self::UnicodeOpenPunctuation,
        Self::UnicodeClosePunctuation,
        Self::UnicodeInitialPunctuation,
        Self::UnicodeFinalPunctuation,
        Self::UnicodeConnectorPunctuation,
        Self::UnicodeOtherPunctuation,
        Self::UnicodeOther,
        Self::UnicodeControl,
        Self::UnicodeFormat,
        Self::UnicodePrivateUse,
        Self::UnicodeUnassigned,
        Self::UnicodeSurrogate,
        Self::UnicodeCommon,
        Self::UnicodeArabic,
        Self::UnicodeArmenian,
        Self::UnicodeBengali,
        Self::UnicodeCyrillic,
        Self::UnicodeDevanagari,
        Self::UnicodeGeorgian,
        Self::UnicodeGreek,
        Self::UnicodeHan,
        Self::UnicodeHangul,
        Self::UnicodeHebrew,
        Self::UnicodeHiragana,
        Self::UnicodeKatakana,
        Self::UnicodeLatin,
        Self::UnicodeThai,
        Self::UnicodeTibetan,
    ];

    /// Canonical configuration name
    pub const fn as_str(self) -> &'static str {
        match self {
            // Structural Symbols
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::LeftParenthesis => "LEFT_PARENTHESIS",
            Self::RightParenthesis => "RIGHT_PARENTHESIS",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Hat => "HAT",
            Self::Dollar => "DOLLAR",
            Self::Minus => "MINUS",
            Self::Comma => "COMMA",
            Self::Pipe => "PIPE",
            Self::Dot => "DOT",
            Self::Star => "STAR",
            Self::Plus => "PLUS",
            Self::Question => "QUESTION",
            Self::Colon => "COLON",
            Self::Exclamation => "EXCLAMATION",
            Self::Equal => "EQUAL",
            Self::Lower => "LOWER",
            Self::Greater => "GREATER",
            Self::Slash => "SLASH",
            Self::Hash => "HASH",
            Self::Underscore => "UNDERSCORE",
            Self::Quote => "QUOTE",
            Self::DoubleQuote => "DOUBLE_QUOTE",
            Self::Ampersand => "AMPERSAND",
            Self::At => "AT",
            Self::Percent => "PERCENT",
            Self::Tilde => "TILDE",
            Self::Semicolon => "SEMICOLON",
            Self::Backtick => "BACKTICK",

            // Synthesized Literals
            Self::Integer => "INTEGER",
            Self::Char => "CHAR",
            Self::Backslash => "BACKSLASH",

            // Shorthand Classes
            Self::AnyDigit => "ANY_DIGIT",
            Self::AnyWord => "ANY_WORD",
            Self::AnySpace => "ANY_SPACE",

            // Unicode Properties
            Self::UnicodeX => "UNICODE_X",
            Self::UnicodeLetter => "UNICODE_LETTER",
            Self::UnicodeLowercaseLetter => "UNICODE_LOWERCASE_LETTER",
            Self::UnicodeUppercaseLetter => "UNICODE_UPPERCASE_LETTER",
            Self::UnicodeTitlecaseLetter => "UNICODE_TITLECASE_LETTER",
            Self::UnicodeCasedLetter => "UNICODE_CASED_LETTER",
            Self::UnicodeModifierLetter => "UNICODE_MODIFIER_LETTER",
            Self::UnicodeOtherLetter => "UNICODE_OTHER_LETTER",
            Self::UnicodeMark => "UNICODE_MARK",
            Self::UnicodeNonSpacingMark => "UNICODE_NON_SPACING_MARK",
            Self::UnicodeSpacingCombiningMark => "UNICODE_SPACING_COMBINING_MARK",
            Self::UnicodeEnclosingMark => "UNICODE_ENCLOSING_MARK",
            Self::UnicodeSeparator => "UNICODE_SEPARATOR",
            Self::UnicodeSpaceSeparator => "UNICODE_SPACE_SEPARATOR",
            Self::UnicodeLineSeparator => "UNICODE_LINE_SEPARATOR",
            Self::UnicodeParagraphSeparator => "UNICODE_PARAGRAPH_SEPARATOR",
            Self::UnicodeSymbol => "UNICODE_SYMBOL",
            Self::UnicodeMathSymbol => "UNICODE_MATH_SYMBOL",
            Self::UnicodeCurrencySymbol => "UNICODE_CURRENCY_SYMBOL",
            Self::UnicodeModifierSymbol => "UNICODE_MODIFIER_SYMBOL",
            Self::UnicodeOtherSymbol => "UNICODE_OTHER_SYMBOL",
            Self::UnicodeNumber => "UNICODE_NUMBER",
            Self::UnicodeDecimalDigitNumber => "UNICODE_DECIMAL_DIGIT_NUMBER",
            Self::UnicodeLetterNumber => "UNICODE_LETTER_NUMBER",
            Self::UnicodeOtherNumber => "UNICODE_OTHER_NUMBER",
            Self::UnicodePunctuation => "UNICODE_PUNCTUATION",
            Self::UnicodeDashPunctuation => "UNICODE_DASH_PUNCTUATION",
            Self::UnicodeOpenPunctuation => "UNICODE_OPEN_PUNCTUATION",
            Self::UnicodeClosePunctuation => "UNICODE_CLOSE_PUNCTUATION",
            Self::UnicodeInitialPunctuation => "UNICODE_INITIAL_PUNCTUATION",
            Self::UnicodeFinalPunctuation => "UNICODE_FINAL_PUNCTUATION",
            Self::UnicodeConnectorPunctuation => "UNICODE_CONNECTOR_PUNCTUATION",
            Self::UnicodeOtherPunctuation => "UNICODE_OTHER_PUNCTUATION",
            Self::UnicodeOther => "UNICODE_OTHER",
            Self::UnicodeControl => "UNICODE_CONTROL",
            Self::UnicodeFormat => "UNICODE_FORMAT",
            Self::UnicodePrivateUse => "UNICODE_PRIVATE_USE",
            Self::UnicodeUnassigned => "UNICODE_UNASSIGNED",
            Self::UnicodeSurrogate => "UNICODE_SURROGATE",
            Self::UnicodeCommon => "UNICODE_COMMON",
            Self::UnicodeArabic => "UNICODE_ARABIC",
            Self::UnicodeArmenian => "UNICODE_ARMENIAN",
            Self::UnicodeBengali => "UNICODE_BENGALI",
            Self::UnicodeCyrillic => "UNICODE_CYRILLIC",
            Self::UnicodeDevanagari => "UNICODE_DEVANAGARI",
            Self::UnicodeGeorgian => "UNICODE_GEORGIAN",
            Self::UnicodeGreek => "UNICODE_GREEK",
            Self::UnicodeHan => "UNICODE_HAN",
            Self::UnicodeHangul => "UNICODE_HANGUL",
            Self::UnicodeHebrew => "UNICODE_HEBREW",
            Self::UnicodeHiragana => "UNICODE_HIRAGANA",
            Self::UnicodeKatakana => "UNICODE_KATAKANA",
            Self::UnicodeLatin => "UNICODE_LATIN",
            Self::UnicodeThai => "UNICODE_THAI",
            Self::UnicodeTibetan => "UNICODE_TIBETAN",
        }
    }

    /// Resolve a canonical configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// Kinds that introduce a Unicode property escape (`UNICODE_*`)
    pub fn is_unicode(self) -> bool {
        self.as_str().starts_with("UNICODE")
    }

    /// Shorthand class kinds (`ANY_*`); never emitted as plain tokens
    pub fn is_shorthand_class(self) -> bool {
        self.as_str().starts_with("ANY")
    }

    /// Kinds the lexer builds itself and which cannot be bound in a token map
    pub fn is_synthesized(self) -> bool {
        matches!(self, Self::Integer | Self::Char | Self::Backslash)
    }

    /// Kinds that may be emitted straight from a single mapped character
    pub fn is_direct(self) -> bool {
        !self.is_unicode() && !self.is_shorthand_class()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad token categories used for metrics and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenClass {
    /// Characters bound directly in the token map
    Structural,
    /// `INTEGER`, `CHAR` and `BACKSLASH`
    Literal,
    /// `\d`, `\w`, `\s` and their negations
    ShorthandClass,
    /// `\p{..}`, `\P{..}`, `\pL` and `\X`
    UnicodeProperty,
    /// End of input
    End,
}

/// A token whose kind came straight from one character (or an escaped literal)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlainToken {
    pub kind: TokenKind,
    pub lexeme: String,
}

/// A backslash-introduced token that carries a negation flag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EscapeToken {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Set for case-inverted shorthand classes (`\D`) and `\P`/`\p{^..}` properties
    #[serde(default)]
    pub negated: bool,
}

/// Everything `Lexer::next_token` can hand back on success
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Plain(PlainToken),
    Escape(EscapeToken),
    End,
}

impl Token {
    pub fn plain(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token::Plain(PlainToken {
            kind,
            lexeme: lexeme.into(),
        })
    }

    pub fn escape(kind: TokenKind, lexeme: impl Into<String>, negated: bool) -> Self {
        Token::Escape(EscapeToken {
            kind,
            lexeme: lexeme.into(),
            negated,
        })
    }

    /// Kind of the token, `None` for the end marker
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Token::Plain(token) => Some(token.kind),
            Token::Escape(token) => Some(token.kind),
            Token::End => None,
        }
    }

    /// Raw text the token was built from; empty for the end marker
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Plain(token) => &token.lexeme,
            Token::Escape(token) => &token.lexeme,
            Token::End => "",
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Token::End)
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, Token::Escape(_))
    }

    /// Only escape tokens can be negated
    pub fn is_negated(&self) -> bool {
        matches!(self, Token::Escape(EscapeToken { negated: true, .. }))
    }

    pub fn class(&self) -> TokenClass {
        match self.kind() {
            None => TokenClass::End,
            Some(kind) if kind.is_shorthand_class() => TokenClass::ShorthandClass,
            Some(kind) if kind.is_unicode() => TokenClass::UnicodeProperty,
            Some(kind) if kind.is_synthesized() => TokenClass::Literal,
            Some(_) => TokenClass::Structural,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plain(token) => write!(f, "{}({:?})", token.kind, token.lexeme),
            Token::Escape(token) if token.negated => {
                write!(f, "{}(\\{:?}, negated)", token.kind, token.lexeme)
            }
            Token::Escape(token) => write!(f, "{}(\\{:?})", token.kind, token.lexeme),
            Token::End => f.write_str("END"),
        }
    }
}
