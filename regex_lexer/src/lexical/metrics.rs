use crate::config::runtime::LexicalPreferences;
use crate::tokens::{Token, TokenKind};
use std::collections::HashMap;

/// Per-lexer token statistics, shaped by runtime preferences
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub plain_tokens: usize,
    pub escape_tokens: usize,
    pub negated_escapes: usize,
    pub unicode_tokens: usize,
    pub char_tokens: usize,
    pub errors: usize,

    // Runtime preference-controlled metrics
    pub kind_usage: HashMap<TokenKind, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        let Some(kind) = token.kind() else {
            return;
        };

        self.total_tokens += 1;

        if preferences.track_kind_usage {
            *self.kind_usage.entry(kind).or_insert(0) += 1;
        }

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token {
            Token::Plain(_) => {
                self.plain_tokens += 1;
                if kind == TokenKind::Char {
                    self.char_tokens += 1;
                }
            }
            Token::Escape(escape) => {
                self.escape_tokens += 1;
                if escape.negated {
                    self.negated_escapes += 1;
                }
                if kind.is_unicode() {
                    self.unicode_tokens += 1;
                }
            }
            Token::End => {}
        }
    }

    pub(crate) fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Most frequent kind, ties broken by kind order
    pub fn most_used_kind(&self) -> Option<TokenKind> {
        self.kind_usage
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then_with(|| kb.cmp(ka)))
            .map(|(kind, _)| *kind)
    }
}
